//! Pipe mode: one `<operation> <json-args>` call per input line.
//!
//! Blank lines and lines starting with `#` are skipped. A line with only an
//! operation name runs it with `{}` as arguments.

use std::io::{BufRead, Write};

use docledger_executor::Executor;

use crate::format::{format_error, format_output, OutputMode};

/// Split a line into operation name and raw arguments.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((operation, args)) => Some((operation, args.trim_start())),
        None => Some((trimmed, "{}")),
    }
}

/// Run every line of `input`. Returns the process exit code.
///
/// Results go to `out`, errors to `err`. A failing line does not stop the
/// run but makes the exit code 1.
pub fn run_pipe<R, O, E>(
    executor: &Executor,
    mode: OutputMode,
    input: R,
    out: &mut O,
    err: &mut E,
) -> i32
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut exit_code = 0;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let Some((operation, args)) = parse_line(&line) else {
            continue;
        };

        let written = match executor.invoke(operation, args) {
            Ok(bytes) => writeln!(out, "{}", format_output(&bytes, mode)),
            Err(e) => {
                exit_code = 1;
                writeln!(err, "{}", format_error(&e, mode))
            }
        };
        if written.is_err() {
            return 1;
        }
    }

    exit_code
}
