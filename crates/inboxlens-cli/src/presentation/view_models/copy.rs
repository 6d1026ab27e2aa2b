use serde::Serialize;

/// Outcome of `inboxlens copy`. The write was dispatched; its result is not observed.
#[derive(Debug, Clone, Serialize)]
pub struct CopyResultViewModel {
    pub target: String,
    pub title: String,
    pub value: String,
    pub backend: String,
}
