// tests/aggregate_rank.rs
use review_sentiment::aggregate::{ aggregate, SourceAggregate };
use review_sentiment::model::{ ReviewRecord, Sentiment, SentimentLabel::{ self, * } };
use review_sentiment::rank::rank;

fn rec(label: SentimentLabel, score: f64) -> ReviewRecord {
    ReviewRecord::new("src", "some review text").with_sentiment(Sentiment::new(label, score))
}

fn agg(label: &str, pos: usize, neg: usize, neu: usize) -> SourceAggregate {
    let total = pos + neg + neu;
    SourceAggregate {
        source_label: label.to_string(),
        positive: pos,
        negative: neg,
        neutral: neu,
        total,
        positive_percentage: if total == 0 { 0.0 } else { pos as f64 / total as f64 * 100.0 },
        average_sentiment_score: 0.9,
    }
}

fn with_pct(label: &str, pct: f64) -> SourceAggregate {
    SourceAggregate { positive_percentage: pct, ..agg(label, 0, 0, 0) }
}

#[test]
fn empty_source_is_all_zeros() {
    let a = aggregate("Empty", &[]);
    assert_eq!(a.source_label, "Empty");
    assert_eq!((a.positive, a.negative, a.neutral, a.total), (0, 0, 0, 0));
    assert_eq!(a.positive_percentage, 0.0);
    assert_eq!(a.average_sentiment_score, 0.0);
    assert!(!a.positive_percentage.is_nan());
}

#[test]
fn counts_partition_total() {
    let recs = vec![
        rec(Positive, 0.9),
        rec(Positive, 0.7),
        rec(Negative, 0.8),
        rec(Neutral, 0.5),
    ];
    let a = aggregate("src", &recs);

    assert_eq!(a.total, 4);
    assert_eq!(a.positive + a.negative + a.neutral, a.total);
    assert_eq!(a.positive_percentage, 50.0);
    assert!((a.average_sentiment_score - 0.725).abs() < 1e-12);
    assert_eq!(a.count(Negative), 1);
    assert_eq!(a.percentage(Neutral), 25.0);
}

#[test]
fn unclassified_records_count_as_neutral() {
    let recs = vec![rec(Positive, 1.0), ReviewRecord::new("src", "not yet classified")];
    let a = aggregate("src", &recs);
    assert_eq!((a.positive, a.neutral, a.total), (1, 1, 2));
    assert!((a.average_sentiment_score - 0.75).abs() < 1e-12);
}

#[test]
fn aggregation_is_idempotent() {
    let recs: Vec<_> = (0..50)
        .map(|i| rec([Positive, Negative, Neutral][i % 3], (i as f64 * 0.37).fract()))
        .collect();
    let a = aggregate("src", &recs);
    let b = aggregate("src", &recs);
    assert_eq!(a, b);
    assert_eq!(a.average_sentiment_score.to_bits(), b.average_sentiment_score.to_bits());
    assert!((0.0..=100.0).contains(&a.positive_percentage));
}

#[test]
fn ties_keep_input_order() {
    let r = rank(&[with_pct("A", 80.0), with_pct("B", 80.0), with_pct("C", 60.0)]);
    let got: Vec<_> = r.rows().iter().map(|row| (row.source_label().to_string(), row.rank())).collect();
    assert_eq!(got, vec![("A".to_string(), 1usize), ("B".to_string(), 2), ("C".to_string(), 3)]);

    let r = rank(&[with_pct("C", 60.0), with_pct("B", 80.0), with_pct("A", 80.0)]);
    let order: Vec<_> = r.rows().iter().map(|row| row.source_label()).collect();
    assert_eq!(order, vec!["B", "A", "C"]);
}

#[test]
fn ranks_are_one_to_n_without_gaps() {
    let aggs: Vec<_> = (0..12).map(|i| with_pct(&format!("S{i}"), ((i * 37) % 11) as f64 * 9.0)).collect();
    let r = rank(&aggs);
    let ranks: Vec<_> = r.rows().iter().map(|row| row.rank()).collect();
    assert_eq!(ranks, (1..=12).collect::<Vec<_>>());
    assert!(r.rows().windows(2).all(|w| w[0].positive_percentage() >= w[1].positive_percentage()));
}

#[test]
fn summary_values() {
    let r = rank(&[agg("Mid", 3, 1, 0), agg("Low", 1, 3, 0), agg("High", 4, 0, 0)]);
    let s = r.summary();

    assert_eq!(s.top, Some(("High".to_string(), 100.0)));
    assert_eq!(s.bottom, Some(("Low".to_string(), 25.0)));
    assert_eq!(s.spread, 75.0);
    assert!((s.mean_positive_percentage - 66.666_666_666_666_67).abs() < 1e-9);
    assert_eq!(s.above_mean, 2);
    assert_eq!(s.more_negative, vec!["Low".to_string()]);
}

#[test]
fn empty_input_gives_empty_ranking() {
    let r = rank(&[]);
    assert!(r.is_empty());
    let s = r.summary();
    assert_eq!(s.top, None);
    assert_eq!(s.bottom, None);
    assert_eq!(s.spread, 0.0);
    assert_eq!(s.mean_positive_percentage, 0.0);
    assert_eq!(s.above_mean, 0);
    assert!(r.top(3).is_empty());
}
