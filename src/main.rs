use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use ds2_shipinfo::config::Settings;
use ds2_shipinfo::parser::extract::Step;
use ds2_shipinfo::parser::{self, Heuristics};
use ds2_shipinfo::ShipPage;

#[derive(Parser)]
#[command(name = "ds2_shipinfo", about = "Extract ship types from saved DS2 ship info pages")]
struct Cli {
    /// Settings file (default: ./ds2_shipinfo.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one page and print it as JSON
    Parse {
        file: PathBuf,
        /// Ship type id (default: numeric file stem)
        #[arg(short, long)]
        ship: Option<u32>,
        #[arg(short, long)]
        pretty: bool,
    },
    /// Parse every <id>.html in a directory
    Batch {
        dir: PathBuf,
        /// Write the JSON array here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show how every line of a page was classified
    Trace {
        file: PathBuf,
        #[arg(short, long)]
        ship: Option<u32>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    info!(heuristics = ?settings.heuristics, "settings loaded");

    match cli.command {
        Commands::Parse { file, ship, pretty } => {
            let id = ship_id(&file, ship)?;
            let page = parse_file(&file, id, &settings.heuristics)?;
            let json = if pretty {
                serde_json::to_string_pretty(&page)?
            } else {
                serde_json::to_string(&page)?
            };
            println!("{}", json);
        }
        Commands::Batch { dir, out } => {
            let files = page_files(&dir)?;
            if files.is_empty() {
                println!("No <id>.html pages in {}.", dir.display());
                return Ok(());
            }
            let counts = batch(&files, &settings.heuristics, out.as_deref())?;
            counts.print();
        }
        Commands::Trace { file, ship } => {
            let id = ship_id(&file, ship)?;
            let reader = BufReader::new(
                File::open(&file).with_context(|| format!("failed to open {}", file.display()))?,
            );
            let trace = parser::trace_page(reader, id)
                .with_context(|| format!("failed to trace {}", file.display()))?;
            for t in &trace {
                println!(
                    "{:>5} | {:<12} | {:<22} | {}",
                    t.line_no,
                    format!("{:?}", t.section),
                    describe(&t.step),
                    truncate(&t.line, 90)
                );
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn parse_file(path: &Path, id: u32, heuristics: &Heuristics) -> Result<ShipPage> {
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
    );
    parser::parse_page(reader, id, heuristics)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Ship id from `--ship`, else from a numeric file stem like `1234.html`.
fn ship_id(path: &Path, explicit: Option<u32>) -> Result<u32> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse().ok())
        .with_context(|| format!("no ship id in file name {}; pass --ship", path.display()))
}

/// `<id>.html` files in `dir`, ordered by id.
fn page_files(dir: &Path) -> Result<Vec<(u32, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        match ship_id(&path, None) {
            Ok(id) => files.push((id, path)),
            Err(_) => warn!(path = %path.display(), "skipping page without numeric id"),
        }
    }
    files.sort();
    Ok(files)
}

struct BatchCounts {
    pages: usize,
    failed: usize,
    diagnostics: usize,
}

impl BatchCounts {
    fn print(&self) {
        eprintln!(
            "Parsed {} pages, {} failed, {} unknown lines.",
            self.pages, self.failed, self.diagnostics,
        );
    }
}

fn batch(files: &[(u32, PathBuf)], heuristics: &Heuristics, out: Option<&Path>) -> Result<BatchCounts> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let results: Vec<_> = files
        .par_iter()
        .map(|(id, path)| {
            let result = parse_file(path, *id, heuristics);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut pages = Vec::with_capacity(results.len());
    let mut failed: usize = 0;
    for result in results {
        match result {
            Ok(page) => pages.push(page),
            Err(e) => {
                warn!("{:#}", e);
                failed += 1;
            }
        }
    }
    let diagnostics: usize = pages.iter().map(|p| p.diagnostics.len()).sum();
    info!(pages = pages.len(), failed, diagnostics, "batch finished");

    match out {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            let mut w = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut w, &pages)?;
            w.flush()?;
        }
        None => println!("{}", serde_json::to_string_pretty(&pages)?),
    }

    Ok(BatchCounts {
        pages: pages.len(),
        failed,
        diagnostics,
    })
}

fn describe(step: &Step) -> String {
    match step {
        Step::Opened(section) => format!("open {:?}", section),
        Step::Rule(name) => (*name).to_string(),
        Step::Rejected(name) => format!("UNKNOWN ({})", name),
        Step::Closed(section) => format!("close {:?}", section),
        Step::Boilerplate => "boilerplate".to_string(),
        Step::Unknown => "UNKNOWN".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_id_from_file_stem() {
        assert_eq!(ship_id(Path::new("pages/1234.html"), None).unwrap(), 1234);
        assert_eq!(ship_id(Path::new("pages/nebelwolf.html"), Some(7)).unwrap(), 7);
        assert!(ship_id(Path::new("pages/nebelwolf.html"), None).is_err());
    }

    #[test]
    fn page_files_skip_non_pages() {
        let files = page_files(Path::new("tests/fixtures")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn truncate_long_lines() {
        assert_eq!(truncate("Größe", 10), "Größe");
        assert_eq!(truncate("Größe/Beweglichkeit", 5), "Größe...");
    }
}
