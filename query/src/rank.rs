//! 単語のランキング

use std::io;

use clap::Parser;
use thiserror::Error;

use movie_sentiment::errors::SentimentError;

use crate::corpus::CorpusArgs;

/// ランキングの種類
#[derive(Clone, Copy, Debug)]
pub enum Ranking {
    /// 出現回数の多い順
    Frequent,
    /// 平均評価値の高い順
    Positive,
    /// 平均評価値の低い順
    Negative,
}

/// ランキング系サブコマンドの引数
#[derive(Parser, Debug)]
pub struct Args {
    /// Maximum number of words to print.
    #[clap(allow_negative_numbers = true)]
    n: i64,

    /// Also prints the count and the average sentiment of each word.
    #[clap(short = 'v', long)]
    verbose: bool,
}

/// ランキングの出力中に発生する可能性のあるエラー
#[derive(Debug, Error)]
pub enum RankError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 不正な件数の指定
    #[error(transparent)]
    Sentiment(#[from] SentimentError),
}

/// 上位の単語を1行に1語ずつ出力する
pub fn run(corpus: &CorpusArgs, args: Args, ranking: Ranking) -> Result<(), RankError> {
    let analyzer = corpus.load(io::sink())?;
    let words = match ranking {
        Ranking::Frequent => analyzer.most_frequent_words(args.n)?,
        Ranking::Positive => analyzer.most_positive_words(args.n)?,
        Ranking::Negative => analyzer.most_negative_words(args.n)?,
    };
    for word in words {
        if args.verbose {
            // Every ranked word comes from the vocabulary.
            if let Some(entry) = analyzer.word_entry(word) {
                println!("{}\t{}\t{:.4}", word, entry.count(), entry.average());
            }
        } else {
            println!("{word}");
        }
    }
    Ok(())
}
