//! docledger CLI: run document ledger operations from the command line.
//!
//! Two modes:
//! - **Shell mode**: `docledger [flags] OPERATION [ARGS]` runs one operation and exits
//! - **Pipe mode**: `docledger [flags] < calls.txt` runs one `<operation> <json-args>` per line
//!
//! The store is in memory, so state lives only as long as the process.
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod commands;
mod format;
mod pipe;

use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use docledger_engine::{Ledger, LedgerConfig, CONFIG_FILE_NAME};
use docledger_executor::Executor;
use docledger_storage::UnifiedStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = config_path(&matches);

    if matches.get_flag("init-config") {
        match LedgerConfig::write_default_if_missing(&config_path) {
            Ok(()) => {
                println!("{}", config_path.display());
                return;
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                process::exit(1);
            }
        }
    }

    let explicit_config = matches.get_one::<String>("config").is_some();
    let executor = match open_executor(&config_path, explicit_config) {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if matches.get_flag("list") {
        for name in executor.operations() {
            println!("{}", name);
        }
        return;
    }

    let exit_code = match matches.get_one::<String>("operation") {
        Some(operation) => {
            let args = matches
                .get_one::<String>("args")
                .map(String::as_str)
                .unwrap_or("{}");
            run_shell_mode(&executor, operation, args, output_mode)
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let stderr = io::stderr();
            pipe::run_pipe(
                &executor,
                output_mode,
                stdin.lock(),
                &mut stdout.lock(),
                &mut stderr.lock(),
            )
        }
    };
    process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn config_path(matches: &clap::ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// An explicit `--config` must exist; the implicit one is optional.
fn open_executor(config_path: &Path, explicit: bool) -> Result<Executor, String> {
    debug!(target: "docledger::cli", path = %config_path.display(), explicit, "loading config");
    let config = if explicit {
        LedgerConfig::from_file(config_path)
    } else {
        LedgerConfig::load_or_default(config_path)
    };
    let config = config
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;
    let ledger = Ledger::open(Arc::new(UnifiedStore::new()), config)
        .map_err(|e| format!("Failed to open ledger: {}", e))?;
    Ok(Executor::new(Arc::new(ledger)))
}

fn run_shell_mode(executor: &Executor, operation: &str, args: &str, mode: OutputMode) -> i32 {
    match executor.invoke(operation, args) {
        Ok(bytes) => {
            println!("{}", format_output(&bytes, mode));
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}
