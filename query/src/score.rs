//! 評価値の問い合わせ
//!
//! 単語の平均評価値、テキストの評価値とその名前を出力します。
//! 評価値が得られない場合は `unknown` と出力します。

use std::io;

use clap::Parser;

use crate::corpus::CorpusArgs;

/// `word` サブコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "word", about = "Prints the average sentiment of a word")]
pub struct WordArgs {
    /// Word to look up. It is lowercased before the lookup.
    word: String,
}

/// `review` と `label` サブコマンドの引数
#[derive(Parser, Debug)]
pub struct TextArgs {
    /// Review text. Words are looked up as written, without lowercasing.
    text: String,
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "unknown".to_string(), |s| s.to_string())
}

/// 単語の平均評価値を出力する
pub fn run_word(corpus: &CorpusArgs, args: WordArgs) -> io::Result<()> {
    let analyzer = corpus.load(io::sink())?;
    println!("{}", format_score(analyzer.word_sentiment(&args.word)));
    Ok(())
}

/// テキストの評価値を出力する
pub fn run_review(corpus: &CorpusArgs, args: TextArgs) -> io::Result<()> {
    let analyzer = corpus.load(io::sink())?;
    println!("{}", format_score(analyzer.review_sentiment(&args.text)));
    Ok(())
}

/// テキストの評価値の名前を出力する
pub fn run_label(corpus: &CorpusArgs, args: TextArgs) -> io::Result<()> {
    let analyzer = corpus.load(io::sink())?;
    println!("{}", analyzer.review_sentiment_label(&args.text));
    Ok(())
}
