//! レビューの評価値を求めるユーティリティ
//!
//! このバイナリは、標準入力から読み込んだレビューの本文ごとに評価値を求め、
//! 指定された出力形式（score、label、detail）で結果を出力します。

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use movie_sentiment::SentimentAnalyzer;

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Score,
    Label,
    Detail,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"score"、"label"、"detail"のいずれか）
    ///
    /// # 戻り値
    ///
    /// パースに成功した場合は対応する `OutputMode`、失敗した場合はエラーメッセージ
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "score" => Ok(Self::Score),
            "label" => Ok(Self::Label),
            "detail" => Ok(Self::Detail),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "analyze", about = "Predicts the sentiment of reviews")]
struct Args {
    /// Stopword list, one word per line.
    #[clap(short = 's', long)]
    stopwords_in: PathBuf,

    /// Labeled review corpus, one review per line.
    #[clap(short = 'r', long)]
    reviews_in: PathBuf,

    /// Output mode. Choices are score, label, and detail.
    #[clap(short = 'O', long, default_value = "label")]
    output_mode: OutputMode,
}

/// メイン関数
///
/// コーパスを読み込み、標準入力の各行の評価値を求めて、
/// 指定された形式で結果を標準出力に出力します。
/// 評価値が得られない行は、score形式では `unknown` と出力します。
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
    eprintln!(
        "Ready to analyze ({} words from {} reviews)",
        analyzer.dictionary_size(),
        analyzer.reviews().len(),
    );

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        let score = analyzer.review_sentiment(&line);
        match args.output_mode {
            OutputMode::Score => match score {
                Some(score) => writeln!(&mut out, "{score}")?,
                None => out.write_all(b"unknown\n")?,
            },
            OutputMode::Label => {
                writeln!(&mut out, "{}", analyzer.review_sentiment_label(&line))?;
            }
            OutputMode::Detail => {
                let score = score.map_or_else(|| "unknown".to_string(), |s| format!("{s:.4}"));
                writeln!(
                    &mut out,
                    "{}\t{}\t{}",
                    score,
                    analyzer.review_sentiment_label(&line),
                    line,
                )?;
            }
        }
        if is_tty {
            out.flush()?;
        }
    }

    Ok(())
}
