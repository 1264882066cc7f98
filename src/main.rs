use anyhow::Result;
use binsweep::{default_targets, load_targets, CleanResult, Cleaner, OutputSink, WriterSink};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remove the contents of build artifact directories (bin, obj, ...) under project roots",
    long_about = None
)]
struct Args {
    /// Project roots to clean (defaults to current directory)
    #[arg(default_values_t = vec![String::from(".")])]
    paths: Vec<String>,

    /// Read the target directory list from a TOML file instead of the built-in one
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Clean these directories instead of the configured list (repeatable)
    #[arg(long, short, value_name = "NAME")]
    target: Vec<String>,
}

/// A path argument may name a project file; clean its directory in that case.
fn project_root_for(path: &Path) -> PathBuf {
    if path.is_file() {
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| path.to_path_buf())
    } else {
        path.to_path_buf()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let targets = if !args.target.is_empty() {
        args.target.clone()
    } else if let Some(path) = &args.config {
        load_targets(path)?
    } else {
        default_targets()?
    };

    let mut sink = WriterSink::new(std::io::stdout());
    let mut total = CleanResult::default();

    for path in &args.paths {
        let root = project_root_for(Path::new(path));
        sink.write_line(&format!("cleaning {}", root.display()));
        total += Cleaner::new(&targets, &mut sink).clean(&root);
    }

    let summary = format!("{} deleted, {} failed", total.succeeded, total.failed);
    if total.failed > 0 {
        println!("{}", summary.red().bold());
    } else {
        println!("{}", summary.green().bold());
    }

    Ok(())
}
