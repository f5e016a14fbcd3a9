use anyhow::Result;
use clap::Parser;
use daysort::{run, SortConfig};
use std::path::PathBuf;
use std::time::Instant;

/// Move files into date-named folders by shifted last-write time, then zip
/// each folder when its contents are small enough
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory to sort (defaults to the current directory)
    #[arg(default_value = ".")]
    dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = SortConfig::default();

    let start = Instant::now();
    println!("Sorting {} ...", args.dir.display());

    let summary = run(&args.dir, &config)?;

    if summary.groups.is_empty() {
        println!("✓ Nothing to sort [{:.2}s]", start.elapsed().as_secs_f64());
        return Ok(());
    }

    println!(
        "✓ Sorted {} files into {} folders ({} archives) [{:.2}s]",
        summary.files_total(),
        summary.groups.len(),
        summary.archives_created(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
