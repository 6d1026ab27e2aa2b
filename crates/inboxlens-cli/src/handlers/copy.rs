use crate::args::{CopyTarget, PayloadArgs, hints};
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::presenters::{
    self, PRIMARY_REQUEST_TITLE, REQUEST_TYPE_TITLE, SUB_REQUEST_TYPE_TITLE,
};
use crate::source::{self, PayloadSource};
use anyhow::Result;
use inboxlens_types::{Classification, Error, display_value};

pub const SENDER_TITLE: &str = "Sender";

pub fn handle(
    ctx: &HandlerContext,
    config: &Config,
    target: &CopyTarget,
    payload: &PayloadArgs,
) -> Result<()> {
    let source = PayloadSource::detect(payload.payload.as_deref());
    let resolved = source::resolve(&source, ctx.resolve)?;
    let (title, value) = select(&resolved.record, target)?;

    let mut clipboard = Clipboard::from_config(&config.clipboard);
    let backend = clipboard.backend_name();
    clipboard.copy(&value);
    drop(clipboard);

    let view_model = presenters::present_copy(target.to_string(), title, value, backend);
    ctx.render(view_model)
}

/// The card title and value a copy target refers to.
pub fn select(record: &Classification, target: &CopyTarget) -> Result<(String, String), Error> {
    let selected = match target {
        CopyTarget::RequestType => (REQUEST_TYPE_TITLE.to_string(), record.request_type.clone()),
        CopyTarget::SubRequestType => (
            SUB_REQUEST_TYPE_TITLE.to_string(),
            record.sub_request_type.clone(),
        ),
        CopyTarget::PrimaryRequest => (
            PRIMARY_REQUEST_TITLE.to_string(),
            record.primary_request.clone(),
        ),
        CopyTarget::Sender => (SENDER_TITLE.to_string(), record.sender_address.clone()),
        CopyTarget::Field(key) => match record.key_values.get(key) {
            Some(value) => (key.clone(), display_value(value)),
            None => return Err(unknown_field(record, key)),
        },
    };

    Ok(selected)
}

fn unknown_field(record: &Classification, key: &str) -> Error {
    let Some(first) = record.key_values.keys().next() else {
        return Error::InvalidInput(format!(
            "No extracted field '{}': the record has no extracted fields",
            key
        ));
    };

    let available: Vec<&str> = record.key_values.keys().map(String::as_str).collect();
    Error::InvalidInput(format!(
        "No extracted field '{}'. Available fields: {}\nHint: {}",
        key,
        available.join(", "),
        hints::fmt::copy_field(first)
    ))
}
