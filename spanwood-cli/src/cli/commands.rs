//! Command implementations and argument parsing for the spanwood CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanwood_core::{
    ForestSummary, GraphId, GraphRecord, GraphService, GraphServiceBuilder, NewGraph,
    SpanwoodError, compute_spanning_forest,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::store::JsonFileStore;

/// Environment variable consulted when `--store` is absent.
pub const STORE_ENV: &str = "SPANWOOD_STORE";

const DEFAULT_STORE_PATH: &str = "data/graphs.json";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwood",
    about = "Store weighted graphs and compute their minimum spanning forests."
)]
pub struct Cli {
    /// Path of the JSON graph store.
    #[arg(long, global = true, env = STORE_ENV, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Output format written to stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the spanning forest of a graph file without storing it.
    Solve(InputArgs),
    /// Validate and store a graph file.
    Save(InputArgs),
    /// Compute and persist the spanning forest of a stored graph.
    Compute(GraphArgs),
    /// List stored graphs, newest first.
    List,
    /// Show a stored graph.
    Show(GraphArgs),
    /// Delete a stored graph.
    Delete(GraphArgs),
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Solve(_) => "solve",
            Self::Save(_) => "save",
            Self::Compute(_) => "compute",
            Self::List => "list",
            Self::Show(_) => "show",
            Self::Delete(_) => "delete",
        }
    }
}

/// Arguments naming a graph definition file.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Path to a JSON document of the form `{"nodeCount": n, "edges": [{"u", "v", "weight"}]}`.
    pub path: PathBuf,
}

/// Arguments naming a stored graph.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Identifier of the stored graph.
    #[arg(value_parser = parse_graph_id)]
    pub id: GraphId,
}

/// Output formats for command results.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A graph definition file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A graph definition file was not valid JSON of the expected shape.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// Validation, storage or computation failed.
    #[error(transparent)]
    Core(#[from] SpanwoodError),
}

/// The result of a CLI command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Keys and cost computed by `solve`.
    Solved(ForestSummary),
    /// Graph stored by `save`.
    Saved(GraphRecord),
    /// Graph updated by `compute`.
    Computed(GraphRecord),
    /// Graphs returned by `list`.
    Listed(Vec<GraphRecord>),
    /// Graph returned by `show`.
    Shown(GraphRecord),
    /// Graph removed by `delete`.
    Deleted(GraphRecord),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading input, opening the store, validation or
/// computation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwood_cli::cli::{Cli, Command, CommandOutput, InputArgs, OutputFormat, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("graph.json");
/// std::fs::write(
///     &input,
///     r#"{"nodeCount": 3, "edges": [
///         {"u": "A", "v": "B", "weight": 5},
///         {"u": "B", "v": "C", "weight": 3},
///         {"u": "A", "v": "C", "weight": 1}
///     ]}"#,
/// )?;
/// let cli = Cli {
///     store: dir.path().join("graphs.json"),
///     format: OutputFormat::Text,
///     command: Command::Solve(InputArgs { path: input }),
/// };
/// let CommandOutput::Solved(summary) = run_cli(cli)? else {
///     unreachable!("solve yields a summary");
/// };
/// assert_eq!(summary.total_cost, 4);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty, store = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let Cli { store, command, .. } = cli;
    Span::current().record("command", field::display(command.name()));

    let output = match command {
        Command::Solve(args) => solve(&args.path)?,
        Command::Save(args) => run_stored(&store, StoredCommand::Save(args))?,
        Command::Compute(args) => run_stored(&store, StoredCommand::Compute(args))?,
        Command::List => run_stored(&store, StoredCommand::List)?,
        Command::Show(args) => run_stored(&store, StoredCommand::Show(args))?,
        Command::Delete(args) => run_stored(&store, StoredCommand::Delete(args))?,
    };
    info!("command completed");
    Ok(output)
}

/// Commands that operate on the graph store.
enum StoredCommand {
    Save(InputArgs),
    Compute(GraphArgs),
    List,
    Show(GraphArgs),
    Delete(GraphArgs),
}

fn run_stored(store: &Path, command: StoredCommand) -> Result<CommandOutput, CliError> {
    Span::current().record("store", field::display(store.display()));
    let service = open_service(store)?;
    Ok(match command {
        StoredCommand::Save(args) => {
            let graph = load_graph(&args.path)?;
            CommandOutput::Saved(service.save_graph(graph.node_count, graph.edges)?)
        }
        StoredCommand::Compute(args) => CommandOutput::Computed(service.compute_mst(args.id)?),
        StoredCommand::List => CommandOutput::Listed(service.list_graphs()?),
        StoredCommand::Show(args) => CommandOutput::Shown(service.find_graph(args.id)?),
        StoredCommand::Delete(args) => CommandOutput::Deleted(service.delete_graph(args.id)?),
    })
}

fn open_service(path: &Path) -> Result<GraphService<JsonFileStore>, CliError> {
    let store = JsonFileStore::open(path).map_err(SpanwoodError::from)?;
    Ok(GraphServiceBuilder::new().build(store))
}

#[instrument(name = "cli.solve", err, skip(path), fields(path = %path.display()))]
fn solve(path: &Path) -> Result<CommandOutput, CliError> {
    let graph = load_graph(path)?;
    let summary =
        compute_spanning_forest(&graph.edges, graph.node_count).map_err(SpanwoodError::from)?;
    info!(
        included = summary.included_keys.len(),
        total_cost = summary.total_cost,
        "graph solved"
    );
    Ok(CommandOutput::Solved(summary))
}

#[instrument(name = "cli.load_graph", err, skip(path), fields(path = %path.display()))]
fn load_graph(path: &Path) -> Result<NewGraph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn parse_graph_id(raw: &str) -> Result<GraphId, String> {
    raw.parse::<u64>()
        .ok()
        .and_then(GraphId::new)
        .ok_or_else(|| format!("`{raw}` is not a positive graph id"))
}

/// Renders `output` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if serialisation or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwood_cli::cli::{CommandOutput, OutputFormat, render_output};
/// # use spanwood_core::{EdgeKey, ForestSummary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Solved(ForestSummary {
///     included_keys: [EdgeKey::new("B", "C"), EdgeKey::new("A", "C")].into(),
///     total_cost: 4,
/// });
/// let mut buffer = Vec::new();
/// render_output(&output, OutputFormat::Text, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "total cost: 4\nincluded edges: 2\nA-C\nB-C\n");
/// # Ok(())
/// # }
/// ```
pub fn render_output(
    output: &CommandOutput,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(output, &mut writer),
        OutputFormat::Json => {
            match output {
                CommandOutput::Solved(summary) => {
                    serde_json::to_writer_pretty(&mut writer, summary)?;
                }
                CommandOutput::Listed(records) => {
                    serde_json::to_writer_pretty(&mut writer, records)?;
                }
                CommandOutput::Saved(record)
                | CommandOutput::Computed(record)
                | CommandOutput::Shown(record)
                | CommandOutput::Deleted(record) => {
                    serde_json::to_writer_pretty(&mut writer, record)?;
                }
            }
            writeln!(writer)
        }
    }
}

fn render_text(output: &CommandOutput, writer: &mut impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Solved(summary) => {
            writeln!(writer, "total cost: {}", summary.total_cost)?;
            writeln!(writer, "included edges: {}", summary.included_keys.len())?;
            for key in &summary.included_keys {
                writeln!(writer, "{key}")?;
            }
            Ok(())
        }
        CommandOutput::Saved(record)
        | CommandOutput::Computed(record)
        | CommandOutput::Shown(record) => render_record(record, writer),
        CommandOutput::Listed(records) => {
            for record in records {
                render_header(record, writer)?;
            }
            Ok(())
        }
        CommandOutput::Deleted(record) => writeln!(writer, "deleted graph {}", record.id),
    }
}

fn render_header(record: &GraphRecord, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph {}: {} nodes, {} edges, total cost {}",
        record.id,
        record.node_count,
        record.edges.len(),
        record.total_cost
    )
}

fn render_record(record: &GraphRecord, writer: &mut impl Write) -> io::Result<()> {
    render_header(record, writer)?;
    for edge in &record.edges {
        let state = if edge.included { "included" } else { "excluded" };
        writeln!(writer, "{}\t{}\t{state}", edge.id, edge.edge)?;
    }
    Ok(())
}
