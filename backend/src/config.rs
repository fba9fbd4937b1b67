use std::env;
use std::path::PathBuf;

use common::MemoLimits;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("MEMO_BODY_MAX_CHARS must be at least 1")]
    ZeroBodyLimit,
}

#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub(crate) bind_addr: String,
    pub(crate) port: u16,
    pub(crate) index_html_path: PathBuf,
    pub(crate) limits: MemoLimits,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let body_max_chars = parse_or(&lookup, "MEMO_BODY_MAX_CHARS", MemoLimits::BODY_MAX_CHARS)?;
        if body_max_chars == 0 {
            return Err(ConfigError::ZeroBodyLimit);
        }

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            index_html_path: lookup("INDEX_HTML_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("backend/static/index.html")),
            limits: MemoLimits::with_body_max_chars(body_max_chars),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}
