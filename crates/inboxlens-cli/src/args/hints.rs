pub mod cmd {
    pub const SHOW_PAYLOAD: &str = "inboxlens show <payload.json>";
}

pub mod fmt {
    pub fn copy_field(key: &str) -> String {
        format!("inboxlens copy field:{} <payload.json>", key)
    }
}
