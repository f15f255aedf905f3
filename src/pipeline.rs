// src/pipeline.rs
//! Batch orchestration: discover → read → segment → classify → aggregate →
//! rank, then export.
//!
//! Sources are processed one at a time and never share state. Trouble with a
//! single source is recorded as a [`SkippedSource`]; only a batch where every
//! source was skipped is an error.

use std::collections::HashMap;
use std::fmt;
use std::path::{ Path, PathBuf };

use chrono::NaiveDate;
use tracing::{ info, warn };

use crate::aggregate::{ aggregate, SourceAggregate };
use crate::classify::{ ClassifierAdapter, ClassifyStats, SentimentModel };
use crate::config::options::{ AnalysisOptions, ExportOptions };
use crate::core::sanitize::sanitize_file_stem;
use crate::csv::{ comparison_to_string, write_reviews };
use crate::error::{ Error, Result };
use crate::file::{ list_review_files, read_review_file, write_text };
use crate::model::ReviewRecord;
use crate::progress::Progress;
use crate::rank::{ rank, Ranking };
use crate::report::{ render_ranking_report, render_source_report, SourceDetail };
use crate::segment::{ segment_with, Grammar };

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No grammar tier produced a single record.
    NoReviewsParsed,
    /// The file couldn't be read.
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoReviewsParsed => f.write_str("no reviews could be parsed"),
            SkipReason::Unreadable(e) => write!(f, "unreadable: {e}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SourceAnalysis {
    pub source_label: String,
    pub grammar: Grammar,
    pub records: Vec<ReviewRecord>,
    pub aggregate: SourceAggregate,
    pub classify_stats: ClassifyStats,
}

impl SourceAnalysis {
    pub fn detail(&self) -> SourceDetail {
        SourceDetail::from_records(&self.records)
    }

    pub fn report(&self, date: NaiveDate, table_path: Option<&Path>) -> String {
        render_source_report(&self.aggregate, &self.records, date, table_path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedSource {
    pub source_label: String,
    pub path: Option<PathBuf>,
    pub reason: SkipReason,
}

#[derive(Clone, Debug)]
pub struct BatchResult {
    pub sources: Vec<SourceAnalysis>,
    pub skipped: Vec<SkippedSource>,
    pub ranking: Ranking,
}

impl BatchResult {
    pub fn source(&self, label: &str) -> Option<&SourceAnalysis> {
        self.sources.iter().find(|s| s.source_label == label)
    }
}

/// Segment, classify and aggregate one document.
pub fn analyze_document(
    source_label: &str,
    text: &str,
    classifier: &ClassifierAdapter<'_>,
    min_review_chars: usize,
) -> std::result::Result<SourceAnalysis, SkipReason> {
    let seg = segment_with(text, source_label, min_review_chars);
    let Some(grammar) = seg.grammar else {
        return Err(SkipReason::NoReviewsParsed);
    };

    let mut records = seg.records;
    let classify_stats = classifier.classify_records(&mut records);
    if classify_stats.fallbacks > 0 {
        warn!(
            "{}: {} of {} reviews fell back to NEUTRAL",
            source_label, classify_stats.fallbacks, classify_stats.classified
        );
    }
    let aggregate = aggregate(source_label, &records);

    Ok(SourceAnalysis {
        source_label: s!(source_label),
        grammar,
        records,
        aggregate,
        classify_stats,
    })
}

/// Rank already-analysed sources in the order given.
pub fn rank_sources(sources: &[SourceAnalysis]) -> Ranking {
    let aggregates: Vec<SourceAggregate> = sources.iter().map(|s| s.aggregate.clone()).collect();
    rank(&aggregates)
}

/// Run every review file under `options.input_dir` through the pipeline.
/// The model is shared by all sources.
pub fn run_batch(
    options: &AnalysisOptions,
    model: &dyn SentimentModel,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BatchResult> {
    let files = list_review_files(&options.input_dir)?;
    let classifier = ClassifierAdapter::new(model).with_max_chars(options.max_input_chars);
    info!("Analyzing {} sources with model '{}'", files.len(), classifier.model_name());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(files.len());
    }

    let mut seen = HashMap::new();
    let mut sources = Vec::new();
    let mut skipped = Vec::new();

    for file in files {
        let label = unique_label(&file.source_label, &mut seen);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing {label}..."));
        }

        let outcome = match read_review_file(&file.path) {
            Ok(text) => analyze_document(&label, &text, &classifier, options.min_review_chars),
            Err(e) => Err(SkipReason::Unreadable(e.to_string())),
        };

        match outcome {
            Ok(analysis) => {
                info!(
                    "{}: {} reviews via {} grammar, {:.1}% positive",
                    label,
                    analysis.records.len(),
                    analysis.grammar,
                    analysis.aggregate.positive_percentage
                );
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&label, analysis.records.len());
                }
                sources.push(analysis);
            }
            Err(reason) => {
                warn!("Skipping {} ({}): {}", label, file.path.display(), reason);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(&label, &reason.to_string());
                }
                skipped.push(SkippedSource { source_label: label, path: Some(file.path), reason });
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    if sources.is_empty() {
        return Err(Error::NoUsableInput { skipped: skipped.len() });
    }

    let ranking = rank_sources(&sources);
    Ok(BatchResult { sources, skipped, ranking })
}

/// Write the comparison table, and optionally the ranking report and the
/// per-source review tables and reports. Returns every path written.
pub fn export_batch(batch: &BatchResult, export: &ExportOptions, date: NaiveDate) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let delim = export.format.delim();

    let path = export.comparison_path();
    write_text(&path, &comparison_to_string(&batch.ranking, delim)?)?;
    written.push(path);

    if export.write_report {
        let path = export.report_path();
        write_text(&path, &render_ranking_report(&batch.ranking, date))?;
        written.push(path);
    }

    if export.write_reviews {
        let mut seen = HashMap::new();
        for src in &batch.sources {
            let stem = unique_label(&sanitize_file_stem(&src.source_label), &mut seen);
            let path = export.reviews_path(&stem);
            let mut buf = Vec::new();
            write_reviews(&mut buf, &src.records, delim)?;
            write_text(&path, &String::from_utf8_lossy(&buf))?;

            let report_path = export.source_report_path(&stem);
            write_text(&report_path, &src.report(date, Some(&path)))?;
            written.push(path);
            written.push(report_path);
        }
    }

    for p in &written {
        info!("Wrote {}", p.display());
    }
    Ok(written)
}

/// First occurrence keeps the name; later ones become "name (2)", "name (3)", ...
fn unique_label(base: &str, seen: &mut HashMap<String, usize>) -> String {
    let count = seen.entry(s!(base)).or_insert(0);
    *count += 1;
    if *count == 1 { s!(base) } else { format!("{base} ({count})") }
}
