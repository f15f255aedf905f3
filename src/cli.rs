// src/cli.rs
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use color_eyre::eyre::WrapErr;

use crate::classify::LexiconModel;
use crate::config::options::{ AppOptions, ExportFormat };
use crate::pipeline::{ export_batch, run_batch };
use crate::progress::Progress;
use crate::rank::Ranking;

/// Rank review dumps (one `*.txt` per company) by positive sentiment.
#[derive(Parser, Debug, Default)]
#[command(name = "review-sentiment", version, about, long_about = None)]
pub struct Args {
    /// Directory holding the review files (default: current directory)
    pub dir: Option<PathBuf>,

    /// Output directory for the comparison table and report
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Comparison table format
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Config file (overrides REVIEW_SENTIMENT_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the plain-text ranking report
    #[arg(long)]
    pub no_report: bool,

    /// Also write one classified-reviews table per source
    #[arg(long)]
    pub reviews: bool,

    /// Noise threshold for guessed review segments, in characters
    #[arg(long)]
    pub min_chars: Option<usize>,

    /// Truncate classifier input to this many characters
    #[arg(long)]
    pub max_input: Option<usize>,

    /// How many sources to print at the end
    #[arg(long, default_value_t = 3)]
    pub top: usize,
}

impl Args {
    /// Command-line flags win over the config file.
    pub fn apply_to(&self, opts: &mut AppOptions) {
        if let Some(d) = &self.dir { opts.analysis.input_dir = d.clone(); }
        if let Some(o) = &self.out { opts.export.out_dir = o.clone(); }
        if let Some(f) = self.format { opts.export.format = f; }
        if self.no_report { opts.export.write_report = false; }
        if self.reviews { opts.export.write_reviews = true; }
        if let Some(n) = self.min_chars { opts.analysis.min_review_chars = n; }
        if let Some(n) = self.max_input { opts.analysis.max_input_chars = n.max(1); }
    }
}

/// Status lines on stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Found {total} review files.");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, source: &str, records: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {}: {} reviews", self.done, self.total, source, records);
    }
    fn item_skipped(&mut self, source: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}: skipped ({})", self.done, self.total, source, reason);
    }
}

pub fn top_table(ranking: &Ranking, n: usize) -> String {
    let mut out = format!("TOP {} COMPANIES BY POSITIVE SENTIMENT:\n", n);
    for row in ranking.top(n) {
        out.push_str(&format!("{}. {}: {:.1}% positive\n", row.rank(), row.source_label(), row.positive_percentage()));
    }
    out
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init_stderr();

    let mut opts = AppOptions::load(args.config.as_deref()).wrap_err("loading options")?;
    args.apply_to(&mut opts);

    let model = LexiconModel::new().with_max_input_chars(opts.analysis.max_input_chars);
    let mut progress = StderrProgress { total: 0, done: 0 };
    let batch = run_batch(&opts.analysis, &model, Some(&mut progress))
        .wrap_err_with(|| format!("analyzing {}", opts.analysis.input_dir.display()))?;

    let written = export_batch(&batch, &opts.export, Local::now().date_naive()).wrap_err("writing results")?;

    println!("Analysis complete: {} sources ranked, {} skipped.", batch.sources.len(), batch.skipped.len());
    for p in &written {
        println!("Saved {}", p.display());
    }
    println!();
    print!("{}", top_table(&batch.ranking, args.top));
    Ok(())
}
