use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Value selected by `inboxlens copy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    RequestType,
    SubRequestType,
    PrimaryRequest,
    Sender,
    /// A `key_values` entry, by raw key.
    Field(String),
}

impl FromStr for CopyTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(key) = s.strip_prefix("field:") {
            if key.is_empty() {
                return Err("field target needs a key, e.g. field:amount".to_string());
            }
            return Ok(CopyTarget::Field(key.to_string()));
        }

        match s {
            "request-type" => Ok(CopyTarget::RequestType),
            "sub-request-type" => Ok(CopyTarget::SubRequestType),
            "primary-request" => Ok(CopyTarget::PrimaryRequest),
            "sender" => Ok(CopyTarget::Sender),
            other => Err(format!(
                "unknown target '{}' (expected request-type, sub-request-type, primary-request, sender or field:<key>)",
                other
            )),
        }
    }
}

impl fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyTarget::RequestType => write!(f, "request-type"),
            CopyTarget::SubRequestType => write!(f, "sub-request-type"),
            CopyTarget::PrimaryRequest => write!(f, "primary-request"),
            CopyTarget::Sender => write!(f, "sender"),
            CopyTarget::Field(key) => write!(f, "field:{}", key),
        }
    }
}
