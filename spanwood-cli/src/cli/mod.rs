//! Command-line interface orchestration for spanwood.
//!
//! `solve` computes a spanning forest straight from a graph file. The other
//! commands work against a JSON file store: `save`, `compute`, `list`, `show`
//! and `delete`.

mod commands;
mod store;

pub use commands::{
    Cli, CliError, Command, CommandOutput, GraphArgs, InputArgs, OutputFormat, STORE_ENV,
    render_output, run_cli,
};
pub use store::JsonFileStore;
