//! 評価値の推定精度を評価するユーティリティ
//!
//! このバイナリは、学習用コーパスから作ったアナライザーで、ラベル付きのテストコーパスの
//! 各レビューの評価値を推定し、正解の評価値と比較します。
//! 正解率（Accuracy）、推定できたレビューの割合（Coverage）、混同行列を出力します。

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use movie_sentiment::review::Review;
use movie_sentiment::utils::LossyLines;
use movie_sentiment::{SentimentAnalyzer, SentimentLabel};

use clap::Parser;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "evaluate", about = "Evaluate the sentiment accuracy")]
struct Args {
    /// Stopword list, one word per line.
    #[clap(short = 's', long)]
    stopwords_in: PathBuf,

    /// Labeled review corpus used to build the analyzer.
    #[clap(short = 'r', long)]
    reviews_in: PathBuf,

    /// Labeled test corpus.
    #[clap(short = 't', long)]
    test_in: PathBuf,
}

/// 評価の集計
#[derive(Debug, Default, PartialEq, Eq)]
struct Evaluation {
    num_ref: usize,
    num_sys: usize,
    num_cor: usize,
    // confusion[gold][predicted]
    confusion: [[usize; 5]; 5],
}

impl Evaluation {
    /// 1件分の結果を加える
    fn add(&mut self, gold: u8, predicted: SentimentLabel) {
        self.num_ref += 1;
        if let Some(predicted) = predicted.value() {
            self.num_sys += 1;
            self.confusion[usize::from(gold)][usize::from(predicted)] += 1;
            if predicted == gold {
                self.num_cor += 1;
            }
        }
    }

    /// 正解率。評価したレビューが無ければ `None`
    fn accuracy(&self) -> Option<f64> {
        (self.num_ref != 0).then(|| self.num_cor as f64 / self.num_ref as f64)
    }

    /// カバー率。評価したレビューが無ければ `None`
    fn coverage(&self) -> Option<f64> {
        (self.num_ref != 0).then(|| self.num_sys as f64 / self.num_ref as f64)
    }
}

/// メイン関数
///
/// テストコーパスの各レビュー本文の評価値の名前を求め、正解の評価値と比較して
/// 正解率、カバー率、混同行列を出力します。形式が不正な行は読み飛ばします。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    eprintln!("Loading the corpus...");
    let analyzer = SentimentAnalyzer::from_readers(
        File::open(args.stopwords_in)?,
        File::open(args.reviews_in)?,
        std::io::sink(),
    );

    eprintln!("Evaluating...");

    let mut evaluation = Evaluation::default();
    for line in LossyLines::new(File::open(args.test_in)?) {
        let review = match Review::parse(line?) {
            Ok(review) => review,
            Err(e) => {
                eprintln!("Skipped: {e}");
                continue;
            }
        };
        evaluation.add(
            review.sentiment(),
            analyzer.review_sentiment_label(review.body()),
        );
    }

    let (Some(accuracy), Some(coverage)) = (evaluation.accuracy(), evaluation.coverage()) else {
        eprintln!("No labeled reviews in the test corpus");
        return Ok(());
    };
    println!("Accuracy = {accuracy}");
    println!("Coverage = {coverage}");
    println!("gold\\sys\t{}", (0..5).map(|i| i.to_string()).collect::<Vec<_>>().join("\t"));
    for (gold, row) in evaluation.confusion.iter().enumerate() {
        let row: Vec<_> = row.iter().map(|n| n.to_string()).collect();
        println!("{gold}\t{}", row.join("\t"));
    }

    Ok(())
}
