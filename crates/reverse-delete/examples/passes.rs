//! Example: step a graph through reduction passes one trigger at a time.
//!
//! Reads the plain edge-list format (`node_count edge_count` followed by
//! `weight first second` triples), then fires `reduce_step` once per pass the
//! way the interactive viewer fired it once per key press. Each pass prints
//! its report and the packed relation; the final edge set is written as JSON.
//!
//! Run from the workspace root:
//!   cargo run -p reverse-delete --example passes -- --help
//!   cargo run -p reverse-delete --example passes -- --input data/k5.txt

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use reverse_delete::{ReverseDelete, parse_edge_list};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Step a weighted graph through reverse-delete passes")]
struct Args {
    /// Edge-list file (default: data/k5.txt)
    #[arg(long, default_value = "data/k5.txt")]
    input: String,

    /// Number of reduce triggers to fire
    #[arg(long, default_value_t = 2)]
    passes: usize,

    /// Output JSON path (default: <input stem>_reduced.json next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct EdgeDto {
    weight: f32,
    a: usize,
    b: usize,
}

#[derive(Serialize)]
struct PassDto {
    pass: usize,
    evaluated: usize,
    removed: usize,
    remaining: usize,
    /// Wall-clock time for the pass, in microseconds.
    elapsed_us: f64,
}

#[derive(Serialize)]
struct Output {
    node_count: usize,
    passes: Vec<PassDto>,
    edges: Vec<EdgeDto>,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let out_path = args.out.unwrap_or_else(|| {
        let p = std::path::Path::new(&args.input);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(std::path::Path::new("."));
        dir.join(format!("{stem}_reduced.json"))
            .to_string_lossy()
            .into_owned()
    });

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input))?;
    let list = parse_edge_list(&text).with_context(|| format!("parsing {}", args.input))?;
    let mut rd = ReverseDelete::from_edge_list(&list).context("building engine")?;

    println!(
        "{} nodes, {} edges ({} self-loops dropped)",
        rd.node_count(),
        rd.edge_count(),
        rd.self_loops_dropped()
    );

    let mut passes = Vec::with_capacity(args.passes);
    for pass in 0..args.passes {
        let t0 = Instant::now();
        let report = rd.reduce_step();
        let elapsed_us = t0.elapsed().as_secs_f64() * 1e6;

        println!(
            "pass {pass}: evaluated {}, removed {}, remaining {}",
            report.evaluated, report.removed, report.remaining
        );
        print!("{}", rd.relation());

        passes.push(PassDto {
            pass,
            evaluated: report.evaluated,
            removed: report.removed,
            remaining: report.remaining,
            elapsed_us,
        });
    }

    let output = Output {
        node_count: rd.node_count(),
        passes,
        edges: rd
            .edges()
            .iter()
            .map(|e| EdgeDto {
                weight: e.weight,
                a: e.a,
                b: e.b,
            })
            .collect(),
    };

    let out_file = std::fs::File::create(&out_path)
        .with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &output)
        .with_context(|| format!("writing {out_path}"))?;
    println!("wrote {out_path}");

    Ok(())
}
