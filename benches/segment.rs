// benches/segment.rs
use criterion::{ criterion_group, criterion_main, Criterion, black_box };

use review_sentiment::{
    classify::{ ClassifierAdapter, LexiconModel },
    segment::segment,
};

const BODY: &str = "The crust was crispy and the sauce tasted fresh, but delivery took a while.";

fn marker_dump(n: usize) -> String {
    (0..n).map(|i| format!("Reviewer {i}  {} stars\n{BODY}\nWould order again.\n", i % 5 + 1)).collect()
}

fn labeled_dump(n: usize) -> String {
    (0..n).map(|i| format!("Rating: {} stars\nReview: {BODY}\n", i % 5 + 1)).collect()
}

fn raw_dump(n: usize) -> String {
    (0..n).map(|i| format!("rated {}/5 {BODY} ", i % 5 + 1)).collect()
}

fn prose_dump(n: usize) -> String {
    (0..n).map(|_| format!("{BODY}\nSecond line of the same paragraph.\n\n")).collect()
}

fn bench_segment(c: &mut Criterion) {
    let cases = [
        ("segment_marker", marker_dump(500)),
        ("segment_labeled", labeled_dump(500)),
        ("segment_raw", raw_dump(500)),
        ("segment_paragraphs", prose_dump(500)),
    ];

    for (name, doc) in &cases {
        c.bench_function(name, |b| {
            b.iter(|| {
                let seg = segment(black_box(doc), "bench");
                black_box(seg.len())
            })
        });
    }
}

fn bench_classify(c: &mut Criterion) {
    let model = LexiconModel::new();
    let adapter = ClassifierAdapter::new(&model);
    let mut records = segment(&labeled_dump(200), "bench").records;

    c.bench_function("classify_lexicon_200", |b| {
        b.iter(|| {
            let stats = adapter.classify_records(black_box(&mut records));
            black_box(stats.classified)
        })
    });
}

criterion_group!(benches, bench_segment, bench_classify);
criterion_main!(benches);
