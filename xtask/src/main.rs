use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "circdeque workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the deque benchmark suite once per global allocator and compare
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Where to write the markdown report
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

const ALLOCATORS: &[&str] = &["alloc-system", "alloc-mimalloc", "alloc-jemalloc"];

const BASELINE: &str = "system";

/// `estimates.json` as written by criterion; only the mean is used.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `benchmark.json` as written by criterion; only the throughput is used.
#[derive(Deserialize)]
struct BenchmarkInfo {
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
    BytesDecimal(u64),
}

/// Operations per second, keyed by workload then allocator.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only, output } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report(Path::new("target/criterion"), &output)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmark suite...");
    let status = Command::new("cargo")
        .args(["build", "--bench", "suite", "--release"])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        bail!("failed to compile the benchmark suite");
    }

    for alloc in ALLOCATORS {
        println!("\n>>> Benchmarking with feature: {alloc}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0")
            .args(["bench", "--bench", "suite", "--no-default-features", "--features", alloc])
            // Args for the test runner (Criterion) go after --
            .args(["--", "--save-baseline", baseline_name(alloc)]);

        if quick {
            cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
        }

        let status = cmd.status().with_context(|| format!("failed to run bench for {alloc}"))?;
        if status.success() {
            println!("Finished {alloc} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark failed for {alloc}");
        }
    }

    Ok(())
}

fn baseline_name(alloc: &str) -> &str {
    alloc.trim_start_matches("alloc-")
}

fn generate_report(criterion_dir: &Path, report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report = render_report(&results)?;
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(report_path, report)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn render_report(results: &Results) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# Allocator Comparison")?;
    writeln!(out)?;

    write!(out, "| Workload |")?;
    for alloc in ALLOCATORS {
        write!(out, " {} (ops/s) | vs {BASELINE} |", baseline_name(alloc))?;
    }
    writeln!(out)?;

    write!(out, "|---|")?;
    for _ in ALLOCATORS {
        write!(out, "---|---|")?;
    }
    writeln!(out)?;

    for (workload, by_alloc) in results {
        write!(out, "| {workload} |")?;
        let baseline = by_alloc.get(BASELINE).copied().unwrap_or(0.0);

        for alloc in ALLOCATORS {
            match by_alloc.get(baseline_name(alloc)) {
                Some(&ops) => {
                    let rel = if baseline > 0.0 { ops / baseline } else { 0.0 };
                    write!(out, " {} | **{rel:.2}x** |", format_ops(ops))?;
                }
                None => write!(out, " N/A | - |")?,
            }
        }
        writeln!(out)?;
    }

    Ok(out)
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion's output tree. Layout: `<group>/<function>[/<input>]/<baseline>/estimates.json`,
/// with the throughput next to it in `benchmark.json`. The workload is named
/// by its path below `root`.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let (Some(baseline), Some(workload)) = (dir_name(baseline_dir), workload_name(root, workload_dir))
        else {
            continue;
        };
        if baseline == "report" || workload == "report" {
            continue;
        }

        let estimates: Estimates = read_json(&path)?;
        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }

        let elements = read_json::<BenchmarkInfo>(&baseline_dir.join("benchmark.json"))
            .ok()
            .and_then(|info| info.throughput)
            .map_or(1.0, |throughput| match throughput {
                Throughput::Elements(n) | Throughput::Bytes(n) | Throughput::BytesDecimal(n) => n as f64,
            });

        results.entry(workload).or_default().insert(baseline, elements * 1e9 / time_ns);
    }
    Ok(())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_owned)
}

fn workload_name(root: &Path, workload_dir: &Path) -> Option<String> {
    let relative = workload_dir.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative.iter().filter_map(|part| part.to_str()).collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
