// tests/pipeline_batch.rs
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::TempDir;

use review_sentiment::classify::LexiconModel;
use review_sentiment::config::options::{ AnalysisOptions, ExportFormat, ExportOptions };
use review_sentiment::error::Error;
use review_sentiment::file::list_review_files;
use review_sentiment::pipeline::{ export_batch, run_batch, SkipReason };
use review_sentiment::progress::{ NullProgress, Progress };

const MARKER_DUMP: &str = "\
Jane D. 5 stars
The pizza was delicious and the crust was perfect.
Sam K. 1 star
Cold soggy pizza and rude staff. Terrible.
";

const LABELED_DUMP: &str = "\
Rating: 5 stars
Review: Amazing wings, friendly service, great prices.
Rating: 4 stars
Review: Really good pizza, fresh toppings.
";

fn write(dir: &Path, name: &str, body: impl AsRef<[u8]>) {
    fs::write(dir.join(name), body).unwrap();
}

fn opts_for(dir: &Path) -> AnalysisOptions {
    AnalysisOptions { input_dir: dir.to_path_buf(), ..AnalysisOptions::default() }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(String, usize)>,
    skipped: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, source: &str, records: usize) { self.done.push((source.to_string(), records)); }
    fn item_skipped(&mut self, source: &str, _reason: &str) { self.skipped.push(source.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn discovers_sorted_txt_files_and_strips_suffixes() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "b_yelp.txt", "x");
    write(tmp.path(), "a_reviews_with_ratings.txt", "x");
    write(tmp.path(), ".hidden.txt", "x");
    write(tmp.path(), "notes.md", "x");
    fs::create_dir(tmp.path().join("sub.txt")).unwrap();

    let files = list_review_files(tmp.path()).unwrap();
    let labels: Vec<_> = files.iter().map(|f| f.source_label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b"]);
}

#[test]
fn batch_ranks_sources_and_skips_unparseable_ones() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a_reviews.txt", MARKER_DUMP);
    write(tmp.path(), "b_yelp.txt", LABELED_DUMP);
    write(tmp.path(), "junk_data.txt", "nothing here");

    let model = LexiconModel::new();
    let mut rec = Recorder::default();
    let batch = run_batch(&opts_for(tmp.path()), &model, Some(&mut rec)).unwrap();

    assert_eq!(rec.total, 3);
    assert!(rec.finished);
    assert_eq!(rec.done, vec![("a".to_string(), 2), ("b".to_string(), 2)]);
    assert_eq!(rec.skipped, vec!["junk".to_string()]);

    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].reason, SkipReason::NoReviewsParsed);

    let a = batch.source("a").unwrap();
    assert_eq!((a.aggregate.positive, a.aggregate.negative), (1, 1));
    assert_eq!(a.aggregate.positive_percentage, 50.0);
    assert!(a.records.iter().all(|r| r.is_classified()));

    let order: Vec<_> = batch.ranking.rows().iter().map(|r| (r.source_label(), r.rank())).collect();
    assert_eq!(order, vec![("b", 1), ("a", 2)]);
}

#[test]
fn latin1_files_are_still_read() {
    let tmp = TempDir::new().unwrap();
    let mut body = b"Rating: 5 stars\nReview: Caf".to_vec();
    body.push(0xE9); // é in Latin-1
    body.extend_from_slice(b" style pizza, delicious.\n");
    write(tmp.path(), "cafe.txt", body);

    let batch = run_batch(&opts_for(tmp.path()), &LexiconModel::new(), None).unwrap();
    assert_eq!(batch.sources[0].records[0].text, "Café style pizza, delicious.");
}

#[test]
fn duplicate_labels_are_disambiguated() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "x_google.txt", LABELED_DUMP);
    write(tmp.path(), "x_yelp.txt", MARKER_DUMP);

    let mut null = NullProgress;
    let batch = run_batch(&opts_for(tmp.path()), &LexiconModel::new(), Some(&mut null)).unwrap();
    let labels: Vec<_> = batch.sources.iter().map(|s| s.source_label.as_str()).collect();
    assert_eq!(labels, vec!["x", "x (2)"]);
}

#[test]
fn nothing_usable_is_an_error() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "empty.txt", "");
    let err = run_batch(&opts_for(tmp.path()), &LexiconModel::new(), None).unwrap_err();
    assert!(matches!(err, Error::NoUsableInput { skipped: 1 }));
}

#[test]
fn missing_and_empty_directories() {
    let tmp = TempDir::new().unwrap();
    let err = run_batch(&opts_for(&tmp.path().join("nope")), &LexiconModel::new(), None).unwrap_err();
    assert!(matches!(err, Error::MissingInputDir(_)));

    let err = run_batch(&opts_for(tmp.path()), &LexiconModel::new(), None).unwrap_err();
    assert!(matches!(err, Error::NoReviewFiles { .. }));
}

#[test]
fn export_writes_table_report_and_reviews() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a_reviews.txt", MARKER_DUMP);
    write(tmp.path(), "b_yelp.txt", LABELED_DUMP);
    let batch = run_batch(&opts_for(tmp.path()), &LexiconModel::new(), None).unwrap();

    let out = tmp.path().join("out").join("nested");
    let export = ExportOptions {
        out_dir: out.clone(),
        format: ExportFormat::Csv,
        write_report: true,
        write_reviews: true,
    };
    let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    let written = export_batch(&batch, &export, date).unwrap();

    assert_eq!(written.len(), 6);
    assert_eq!(written[0], out.join("company_sentiment_comparison.csv"));
    assert_eq!(written[1], out.join("company_sentiment_ranking_report.txt"));
    assert_eq!(written[2], out.join("a_sentiment_analysis.csv"));
    assert_eq!(written[3], out.join("a_sentiment_report.txt"));
    assert_eq!(written[5], out.join("b_sentiment_report.txt"));
    assert!(written.iter().all(|p| p.is_file()));

    let source_report = fs::read_to_string(&written[3]).unwrap();
    assert!(source_report.starts_with("SENTIMENT ANALYSIS REPORT\nCompany: a\n"));
    assert!(source_report.contains("Total Reviews Analyzed: 2"));
    assert!(source_report.contains(&format!("Full analysis results saved to: {}", written[2].display())));

    let table = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(table.lines().count(), 3);
    assert!(table.lines().nth(1).unwrap().starts_with("b,"));

    let report = fs::read_to_string(&written[1]).unwrap();
    assert!(report.contains("Analysis Date: 2025-01-02"));
}

#[test]
fn export_without_report_writes_only_the_table() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.txt", LABELED_DUMP);
    let batch = run_batch(&opts_for(tmp.path()), &LexiconModel::new(), None).unwrap();

    let export = ExportOptions {
        out_dir: tmp.path().join("out"),
        format: ExportFormat::Tsv,
        write_report: false,
        write_reviews: false,
    };
    let written = export_batch(&batch, &export, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()).unwrap();
    assert_eq!(written, vec![tmp.path().join("out").join("company_sentiment_comparison.tsv")]);
}
