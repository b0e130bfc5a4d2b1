//! voronoi-analyze — W value and Voronoi index statistics for one table.
//!
//!   voronoi-analyze dump.voro.txt
//!   voronoi-analyze dump.voro.txt --five-fold-column 4 --config settings.json
//!
//! Writes `<stem>_Full_Report.csv` and `<stem>_VP_Stats.csv` next to the
//! input unless `--no-export` is given. Logging follows `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use voronoi_rs::export::{self, ExportPaths};
use voronoi_rs::{AnalysisConfig, AnalysisReport, Analyzer, ChartBar};

/// Voronoi polyhedra analysis: W values, purity filter, <n3,n4,n5,n6> ranking.
#[derive(Parser, Debug)]
#[command(name = "voronoi-analyze", version, about)]
struct Cli {
    /// Whitespace-delimited face-count table (n1 n2 n3 ... per atom)
    input: PathBuf,

    /// Zero-based column used for the W value (n5 is column 4)
    #[arg(long)]
    five_fold_column: Option<usize>,

    /// JSON file with analysis settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of indices in the printed chart
    #[arg(long)]
    chart_top: Option<usize>,

    /// Skip writing the CSV reports
    #[arg(long)]
    no_export: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> voronoi_rs::Result<()> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(column) = cli.five_fold_column {
        config = config.with_five_fold_column(column);
    }
    if let Some(n) = cli.chart_top {
        config.chart_top_n = n;
    }

    let analyzer = Analyzer::new(config)?;
    let report = analyzer.run_path(&cli.input)?;

    if !cli.no_export {
        let exported = export::export_csv(&report, &ExportPaths::beside(&cli.input))?;
        println!("full report: {}", exported.full_report.display());
        if let Some(stats) = exported.stats {
            println!("index stats: {}", stats.display());
        }
    }

    print_overview(&report);
    if let Some(summary) = &report.summary {
        print_chart(&summary.chart_series(analyzer.config().chart_top_n));
    } else {
        println!("no atoms satisfy the purity rule; no index chart");
    }

    Ok(())
}

fn print_overview(report: &AnalysisReport) {
    println!("rows x columns : {} x {}", report.rows, report.columns);
    println!("mean W value   : {:.5}", report.mean_w_value);
    println!(
        "purity         : {} kept, {} discarded ({:.2}%)",
        report.purity.admissible,
        report.purity.discarded,
        report.purity.purity_percent()
    );
}

/// Horizontal text bars, one per index; the top bar drawn with `#`.
fn print_chart(bars: &[ChartBar]) {
    const WIDTH: f64 = 50.0;

    println!();
    println!("Top {} Voronoi polyhedra (fraction %)", bars.len());
    let scale = bars.first().map(|b| b.fraction).unwrap_or(0.0);
    for bar in bars {
        let len = if scale > 0.0 { (bar.fraction / scale * WIDTH).round() as usize } else { 0 };
        let glyph = if bar.highlighted { "#" } else { "=" };
        println!("{:>2} {:<14} {:>6.1} {}", bar.rank + 1, bar.label, bar.fraction, glyph.repeat(len));
    }
}
