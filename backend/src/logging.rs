//! One JSON object per log line, written through `env_logger`.
//!
//! Records logged with target [`ACCESS_LOG_TARGET`] become access logs
//! (`"kind": "access_log"` with a `url` field); everything else is an
//! ordinary log with a `message` field.

use std::io::Write;

use actix_web::dev::ServiceRequest;

pub(crate) const ACCESS_LOG_TARGET: &str = "access_log";

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(serde::Serialize)]
struct LogLine<'a> {
    date_time: String,
    level: &'static str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

impl<'a> LogLine<'a> {
    fn new(level: log::Level, target: &str, text: &'a str) -> Self {
        let date_time = chrono::Local::now().format(DATE_TIME_FORMAT).to_string();
        let level = level_name(level);
        if target == ACCESS_LOG_TARGET {
            Self {
                date_time,
                level,
                kind: "access_log",
                message: None,
                url: Some(text),
            }
        } else {
            Self {
                date_time,
                level,
                kind: "log",
                message: Some(text),
                url: None,
            }
        }
    }
}

fn level_name(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARNING",
        log::Level::Info => "INFO",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

/// Installs the JSON formatter. The filter still comes from `RUST_LOG`,
/// defaulting to `info`.
pub(crate) fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let text = record.args().to_string();
            let line = LogLine::new(record.level(), record.target(), &text);
            match serde_json::to_string(&line) {
                Ok(json) => writeln!(buf, "{}", json),
                Err(_) => writeln!(buf, "{}", text),
            }
        })
        .init();
}

/// Access log for one inbound request, emitted from the `App::wrap_fn` hook
/// before routing.
pub(crate) fn log_access(req: &ServiceRequest) {
    log::info!(target: ACCESS_LOG_TARGET, "{}", req.uri());
}
