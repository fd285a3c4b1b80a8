//! Output formatting for operation results and errors.

use docledger_executor::Error;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful response.
///
/// Human mode pretty-prints the JSON; JSON mode passes the bytes through.
pub fn format_output(bytes: &[u8], mode: OutputMode) -> String {
    let text = String::from_utf8_lossy(bytes);
    match mode {
        OutputMode::Json => text.into_owned(),
        OutputMode::Human => match serde_json::from_slice::<serde_json::Value>(bytes) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.into_owned()),
            Err(_) => text.into_owned(),
        },
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({
            "error": err.to_string(),
            "code": err.code(),
        })
        .to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}
