//! レビューの追加
//!
//! レビューファイル自体を追記モードで開き、アナライザーのシンクとして使います。
//! ファイルが改行で終わっていない場合は、追記の前に改行を補います。
//! 追加したレビューは次回の読み込みからコーパスに含まれます。

use std::fs::OpenOptions;
use std::io;

use clap::Parser;
use thiserror::Error;

use movie_sentiment::errors::SentimentError;
use movie_sentiment::utils::terminate_last_line;

use crate::corpus::CorpusArgs;

/// `append` サブコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "append", about = "Appends a labeled review to the corpus")]
pub struct Args {
    /// Review text.
    text: String,

    /// Sentiment value of the review, from 0 (negative) to 4 (positive).
    #[clap(short = 'l', long)]
    sentiment: u8,
}

/// 追加中に発生する可能性のあるエラー
#[derive(Debug, Error)]
pub enum AppendError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 不正な評価値
    #[error(transparent)]
    Sentiment(#[from] SentimentError),
}

/// レビューを追加し、追加後の本文の評価値を出力する
pub fn run(corpus: &CorpusArgs, args: Args) -> Result<(), AppendError> {
    let mut sink = OpenOptions::new()
        .read(true)
        .append(true)
        .open(&corpus.reviews_in)?;
    if terminate_last_line(&mut sink)? {
        log::info!(
            "Added a missing newline at the end of {}",
            corpus.reviews_in.display()
        );
    }
    let mut analyzer = corpus.load(&mut sink)?;

    analyzer.append_review(&args.text, args.sentiment)?;

    let label = analyzer.review_sentiment_label(&args.text);
    eprintln!(
        "Appended to {} ({} reviews, {} words)",
        corpus.reviews_in.display(),
        analyzer.reviews().len(),
        analyzer.dictionary_size(),
    );
    println!("{label}");
    Ok(())
}
