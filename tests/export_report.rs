// tests/export_report.rs
use chrono::NaiveDate;

use std::path::Path;

use review_sentiment::aggregate::{ aggregate, SourceAggregate };
use review_sentiment::csv::{ comparison_to_string, read_comparison, write_reviews, COMPARISON_HEADERS };
use review_sentiment::model::{ ReviewRecord, Sentiment, SentimentLabel };
use review_sentiment::rank::rank;
use review_sentiment::report::{ render_ranking_report, render_source_report, ItemMentions, SourceDetail };

fn agg(label: &str, pos: usize, neg: usize, neu: usize) -> SourceAggregate {
    let total = pos + neg + neu;
    SourceAggregate {
        source_label: label.to_string(),
        positive: pos,
        negative: neg,
        neutral: neu,
        total,
        positive_percentage: pos as f64 / total as f64 * 100.0,
        average_sentiment_score: 0.5,
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

#[test]
fn comparison_columns_are_fixed() {
    let r = rank(&[agg("Low", 1, 3, 0), agg("High", 3, 1, 0)]);
    let out = comparison_to_string(&r, b',').unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Company,Positive,Negative,Neutral,Total,Positive_Percentage,Avg_Sentiment_Score,Rank");
    assert_eq!(lines[0].split(',').collect::<Vec<_>>(), COMPARISON_HEADERS);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("High,3,1,0,4,75"));
    assert!(lines[1].ends_with(",1"));
    assert!(lines[2].starts_with("Low,1,3,0,4,25"));
    assert!(lines[2].ends_with(",2"));
}

#[test]
fn header_written_even_without_rows() {
    let out = comparison_to_string(&rank(&[]), b',').unwrap();
    assert_eq!(out.trim_end(), COMPARISON_HEADERS.join(","));
}

#[test]
fn tsv_uses_tabs() {
    let out = comparison_to_string(&rank(&[agg("A", 1, 0, 0)]), b'\t').unwrap();
    assert!(out.starts_with("Company\tPositive\t"));
}

#[test]
fn reader_skips_bad_rows_and_ignores_extra_columns() {
    let text = "\
Company,Positive,Negative,Neutral,Total,Positive_Percentage,Avg_Sentiment_Score,Rank,Note
Alpha,3,1,0,4,75.0,0.9,1,hello
Broken,three,1,0,4,75.0,0.9,2,
Beta,1,1,0,2,50.0,0.8,3,
";
    let rows = read_comparison(text.as_bytes(), b',').unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.company.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert_eq!(rows[0].to_aggregate().positive, 3);
}

#[test]
fn reviews_table_has_empty_cells_for_missing_values() {
    let recs = vec![
        ReviewRecord::new("Acme", "Great, with a comma")
            .with_rating(5)
            .with_sentiment(Sentiment::new(SentimentLabel::Positive, 0.98766)),
        ReviewRecord::new("Acme", "No rating here"),
    ];
    let mut buf = Vec::new();
    write_reviews(&mut buf, &recs, b',').unwrap();
    let out = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "source,reviewer,rating,date,text,sentiment,sentiment_score");
    assert_eq!(lines[1], "Acme,Anonymous,5,,\"Great, with a comma\",POSITIVE,0.9877");
    assert_eq!(lines[2], "Acme,Anonymous,,,No rating here,,");
}

#[test]
fn ranking_report_contents() {
    let r = rank(&[agg("Mid", 3, 1, 0), agg("Low", 1, 3, 0), agg("High", 4, 0, 0)]);
    let text = render_ranking_report(&r, date());

    assert!(text.starts_with("COMPANY SENTIMENT ANALYSIS RANKING REPORT\n"));
    assert!(text.contains("Analysis Date: 2025-03-14"));
    assert!(text.contains("Total Companies Analyzed: 3"));
    assert!(text.contains("1     High                      100.0"));
    assert!(text.contains("• Top ranked company: High with 100.0% positive reviews"));
    assert!(text.contains("• Lowest ranked company: Low with 25.0% positive reviews"));
    assert!(text.contains("• Difference between highest and lowest: 75.0 percentage points"));
    assert!(text.contains("• 2 companies performed above average in positive sentiment"));
    assert!(text.contains("  - Low: 3 negative vs 1 positive"));
}

#[test]
fn empty_ranking_report_has_no_observations() {
    let text = render_ranking_report(&rank(&[]), date());
    assert!(text.contains("Total Companies Analyzed: 0"));
    assert!(!text.contains("SUMMARY OBSERVATIONS"));
}

#[test]
fn source_detail_ratings_and_discrepancies() {
    let s = |l, sc| Sentiment::new(l, sc);
    let recs = vec![
        ReviewRecord::new("x", "a").with_rating(5).with_sentiment(s(SentimentLabel::Positive, 0.91)),
        ReviewRecord::new("x", "b").with_rating(5).with_sentiment(s(SentimentLabel::Negative, 0.70)),
        ReviewRecord::new("x", "c").with_rating(1).with_sentiment(s(SentimentLabel::Positive, 0.99)),
        ReviewRecord::new("x", "d").with_sentiment(s(SentimentLabel::Negative, 0.95)),
        ReviewRecord::new("x", "e").with_rating(3).with_sentiment(s(SentimentLabel::Neutral, 0.5)),
    ];
    let d = SourceDetail::from_records(&recs);

    assert_eq!(d.rating_distribution, [1, 0, 1, 0, 2]);
    assert!((d.average_rating.unwrap() - 3.5).abs() < 1e-12);
    assert_eq!(d.most_positive.map(|r| r.index), Some(2));
    assert_eq!(d.most_negative.map(|r| r.index), Some(3));
    let idx: Vec<_> = d.discrepancies.iter().map(|x| x.index).collect();
    assert_eq!(idx, vec![1, 2]);
}

#[test]
fn source_detail_without_ratings() {
    let d = SourceDetail::from_records(&[ReviewRecord::new("x", "plain prose review")]);
    assert_eq!(d.average_rating, None);
    assert_eq!(d.rating_distribution, [0; 5]);
    assert!(d.most_positive.is_none());
}

#[test]
fn source_detail_ignores_off_scale_ratings() {
    let mut zero = ReviewRecord::new("x", "a review body without stars");
    zero.rating = Some(0);
    let mut nine = ReviewRecord::new("x", "a review body with too many stars")
        .with_sentiment(Sentiment::new(SentimentLabel::Negative, 0.9));
    nine.rating = Some(9);
    let four = ReviewRecord::new("x", "solid four star review").with_rating(4);

    let d = SourceDetail::from_records(&[zero, nine, four]);
    assert_eq!(d.rating_distribution, [0, 0, 0, 1, 0]);
    assert_eq!(d.average_rating, Some(4.0));
    assert!(d.discrepancies.is_empty());
}

fn menu_records() -> Vec<ReviewRecord> {
    let s = |l, sc| Sentiment::new(l, sc);
    vec![
        ReviewRecord::new("Acme", "The Harissa Chicken pizza was great, great service")
            .with_rating(5)
            .with_sentiment(s(SentimentLabel::Positive, 0.9)),
        ReviewRecord::new("Acme", "Korean BBQ and harissa chicken were too pricey")
            .with_rating(2)
            .with_sentiment(s(SentimentLabel::Negative, 0.8)),
        ReviewRecord::new("Acme", "harissa chicken again").with_sentiment(s(SentimentLabel::Neutral, 0.5)),
        ReviewRecord::new("Acme", "Crispy crust, korean bbq flavor was good")
            .with_sentiment(s(SentimentLabel::Positive, 0.7)),
    ]
}

#[test]
fn source_detail_counts_menu_items_and_aspects() {
    let d = SourceDetail::from_records(&menu_records());

    assert_eq!(
        d.item_mentions,
        vec![
            ItemMentions { item: "harissa chicken", positive: 1, negative: 1 },
            ItemMentions { item: "korean bbq", positive: 1, negative: 1 },
        ]
    );
    assert_eq!(d.positive_aspects, vec!["Great service", "Crispy crust", "Good flavors"]);
    assert_eq!(d.negative_aspects, vec!["Price concerns"]);
}

#[test]
fn source_report_contents() {
    let recs = menu_records();
    let text = render_source_report(&aggregate("Acme", &recs), &recs, date(), Some(Path::new("out/Acme.csv")));

    assert!(text.starts_with("SENTIMENT ANALYSIS REPORT\nCompany: Acme\nAnalysis Date: 2025-03-14\n"));
    assert!(text.contains("Total Reviews Analyzed: 4"));
    assert!(text.contains("Average Star Rating: 3.50 / 5.0"));
    assert!(text.contains("Positive Reviews: 2 (50.0%)"));
    assert!(text.contains("Neutral Reviews: 1 (25.0%)"));
    assert!(text.contains("Negative Reviews: 1 (25.0%)"));
    assert!(text.contains(&format!("{:<20} {:<10} {:<10} {:<10}", "harissa chicken", 1, 1, 2)));
    assert!(text.contains("KEY POSITIVE ASPECTS MENTIONED:\n- Great service\n- Crispy crust\n- Good flavors\n"));
    assert!(text.contains("KEY NEGATIVE ASPECTS MENTIONED:\n- Price concerns\n"));
    assert!(text.contains("MOST POSITIVE REVIEW (Score: 0.900):\nRating: 5 stars\nReview: The Harissa Chicken"));
    assert!(text.contains("MOST NEGATIVE REVIEW (Score: 0.800):\nRating: 2 stars\n"));
    assert!(text.contains("Full analysis results saved to: "));
}

#[test]
fn source_report_without_ratings_or_mentions() {
    let recs = vec![ReviewRecord::new("Plain", "nothing to see").with_sentiment(Sentiment::new(SentimentLabel::Neutral, 0.5))];
    let text = render_source_report(&aggregate("Plain", &recs), &recs, date(), None);

    assert!(text.contains("Average Star Rating: N/A (No ratings explicitly provided)"));
    assert!(!text.contains("ASPECTS"));
    assert!(!text.contains("MOST POSITIVE"));
    assert!(!text.contains("Full analysis results"));
}
