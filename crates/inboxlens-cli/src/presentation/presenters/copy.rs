use crate::presentation::view_models::{
    CommandResultViewModel, CopyResultViewModel, Guidance, StatusBadge, StatusLevel,
};

pub fn present_copy(
    target: String,
    title: String,
    value: String,
    backend: &str,
) -> CommandResultViewModel<CopyResultViewModel> {
    let disabled = backend == "none";
    let badge = if disabled {
        StatusBadge::new(StatusLevel::Warning, "Clipboard disabled; nothing was copied")
    } else {
        StatusBadge::new(StatusLevel::Success, format!("Copied {}", title))
    };

    let mut result = CommandResultViewModel::new(CopyResultViewModel {
        target,
        title,
        value,
        backend: backend.to_string(),
    })
    .with_badge(badge);

    if disabled {
        result = result.with_suggestion(Guidance::new(
            "Set [clipboard] backend to \"osc52\" (or \"auto\" from a terminal) in the config file",
        ));
    }

    result
}
