//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("docledger")
        .about("Document ledger over an ordered key-value store")
        .long_about(
            "Runs one operation when OPERATION is given, otherwise reads \
             `<operation> <json-args>` lines from stdin.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (default: ./docledger.toml if present)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Compact JSON output, errors as JSON objects")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("init-config")
                .long("init-config")
                .help("Write a default config file and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List the available operations and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("operation")
                .value_name("OPERATION")
                .help("Operation to run, e.g. createCarrier"),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .help("JSON arguments for the operation")
                .default_value("{}"),
        )
}
