use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rd_core::{EdgeList, format_edge_list, parse_edge_list};
use rd_reduce::{PassReport, ReverseDelete};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rd")]
#[command(about = "Reduce weighted graphs by reverse-delete edge elimination")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fire reduce triggers and emit the remaining edges
    #[command(name = "reduce")]
    Reduce(ReduceArgs),
    /// Validate an edge list and print its size
    #[command(name = "check")]
    Check(InputArgs),
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Edge-list file, or `-` for stdin
    #[arg(long, default_value = "-")]
    input: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct ReduceArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Number of reduce triggers to fire
    #[arg(long, default_value_t = 1, conflicts_with = "until_stable")]
    passes: usize,
    /// Keep firing until a pass removes nothing
    #[arg(long)]
    until_stable: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Output file (default: stdout)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Serialize)]
struct EdgeDto {
    weight: f32,
    a: usize,
    b: usize,
}

#[derive(Debug, Clone, Serialize)]
struct PassDto {
    evaluated: usize,
    removed: usize,
    remaining: usize,
}

#[derive(Debug, Clone, Serialize)]
struct ReduceOutput {
    node_count: usize,
    passes: usize,
    self_loops_dropped: usize,
    edges: Vec<EdgeDto>,
    reports: Vec<PassDto>,
}

#[derive(Debug, Clone, Serialize)]
struct CheckOutput {
    node_count: usize,
    declared_edges: usize,
    edges: usize,
    self_loops_dropped: usize,
}

// Cap on passes for --until-stable.
const MAX_STABLE_PASSES: usize = 64;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Reduce(args) => run_reduce(args),
        Command::Check(args) => run_check(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run_reduce(args: ReduceArgs) -> Result<()> {
    let list = load_edge_list(&args.input.input)?;
    let mut rd = ReverseDelete::from_edge_list(&list)
        .with_context(|| format!("building graph from {}", args.input.input.display()))?;
    info!(
        nodes = rd.node_count(),
        edges = rd.edge_count(),
        self_loops_dropped = rd.self_loops_dropped(),
        "loaded graph"
    );

    let reports: Vec<PassReport> = if args.until_stable {
        rd.reduce_until_stable(MAX_STABLE_PASSES)
    } else {
        (0..args.passes).map(|_| rd.reduce_step()).collect()
    };
    let removed: usize = reports.iter().map(|r| r.removed).sum();
    info!(
        passes = reports.len(),
        removed,
        remaining = rd.edge_count(),
        "reduction finished"
    );

    let bytes = match args.format {
        OutputFormat::Json => {
            let output = reduce_output(&rd, &reports);
            let mut bytes = serde_json::to_vec_pretty(&output).context("serializing json")?;
            bytes.push(b'\n');
            bytes
        }
        OutputFormat::Text => format_edge_list(&rd.to_edge_list()).into_bytes(),
    };
    write_output(args.out.as_deref(), &bytes)
}

fn run_check(args: InputArgs) -> Result<()> {
    let list = load_edge_list(&args.input)?;
    let rd = ReverseDelete::from_edge_list(&list)
        .with_context(|| format!("validating graph from {}", args.input.display()))?;

    let output = CheckOutput {
        node_count: rd.node_count(),
        declared_edges: list.edges.len(),
        edges: rd.edge_count(),
        self_loops_dropped: rd.self_loops_dropped(),
    };
    let mut bytes = serde_json::to_vec_pretty(&output).context("serializing json")?;
    bytes.push(b'\n');
    write_output(None, &bytes)
}

fn reduce_output(rd: &ReverseDelete, reports: &[PassReport]) -> ReduceOutput {
    ReduceOutput {
        node_count: rd.node_count(),
        passes: reports.len(),
        self_loops_dropped: rd.self_loops_dropped(),
        edges: rd
            .edges()
            .iter()
            .map(|e| EdgeDto {
                weight: e.weight,
                a: e.a,
                b: e.b,
            })
            .collect(),
        reports: reports
            .iter()
            .map(|r| PassDto {
                evaluated: r.evaluated,
                removed: r.removed,
                remaining: r.remaining,
            })
            .collect(),
    }
}

fn load_edge_list(path: &Path) -> Result<EdgeList> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading edge list from stdin")?;
        buf
    } else {
        ensure_file_exists(path)?;
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    debug!(bytes = text.len(), "read edge list");
    parse_edge_list(&text).with_context(|| format!("parsing edge list {}", path.display()))
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("writing to stdout")?;
            stdout.flush().context("flushing stdout")
        }
    }
}

fn ensure_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("input file does not exist: {}", path.display());
    }
    if !path.is_file() {
        bail!("input path is not a file: {}", path.display());
    }
    Ok(())
}
