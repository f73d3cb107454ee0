//! アナライザーの構築と問い合わせのベンチマーク
//!
//! 小さなレビューコーパスを繰り返して作った入力で、コーパスの読み込み、
//! レビューの評価値計算、ランキング、レビュー検索の速度を計測します。

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use movie_sentiment::SentimentAnalyzer;

const REVIEWS: &str = include_str!("./resources/reviews.txt");
const STOPWORDS: &str = include_str!("./resources/stopwords.txt");

const NUM_REPEATS: usize = 500;

fn build_corpus() -> String {
    REVIEWS.repeat(NUM_REPEATS)
}

fn bench_load(c: &mut Criterion) {
    let corpus = build_corpus();

    let mut group = c.benchmark_group("Corpus Loading");
    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    group.bench_function(BenchmarkId::new("from_readers", NUM_REPEATS), |b| {
        b.iter(|| {
            SentimentAnalyzer::from_readers(
                STOPWORDS.as_bytes(),
                corpus.as_bytes(),
                std::io::sink(),
            )
        });
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let corpus = build_corpus();
    let analyzer =
        SentimentAnalyzer::from_readers(STOPWORDS.as_bytes(), corpus.as_bytes(), std::io::sink());
    let texts: Vec<&str> = REVIEWS.lines().map(|line| &line[2..]).collect();

    let mut group = c.benchmark_group("Queries");

    group.bench_function("review_sentiment", |b| {
        b.iter(|| {
            for text in &texts {
                criterion::black_box(analyzer.review_sentiment(text));
            }
        });
    });

    group.bench_function("most_positive_words", |b| {
        b.iter(|| analyzer.most_positive_words(10).unwrap());
    });

    group.bench_function("most_frequent_words", |b| {
        b.iter(|| analyzer.most_frequent_words(10).unwrap());
    });

    // No review scores exactly 5.0, so every stored review is scanned.
    group.bench_function("find_review_miss", |b| {
        b.iter(|| analyzer.find_review(5.0));
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_queries);
criterion_main!(benches);
