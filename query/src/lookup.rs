//! コーパスの検索
//!
//! 評価値によるレビュー検索、語彙のサイズ、ストップワードの判定を行います。

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::corpus::CorpusArgs;

/// `find` サブコマンドの引数
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Sentiment value to match exactly.
    #[clap(allow_negative_numbers = true)]
    value: f64,
}

/// `stopword` サブコマンドの引数
#[derive(Parser, Debug)]
pub struct StopwordArgs {
    /// Word to test. The comparison is case-sensitive.
    word: String,
}

/// 評価値がちょうど `value` である最初のレビューの本文を出力する
///
/// 見つからない場合は何も出力せず、終了コード1を返します。
pub fn run_find(corpus: &CorpusArgs, args: FindArgs) -> io::Result<ExitCode> {
    let analyzer = corpus.load(io::sink())?;
    match analyzer.find_review(args.value) {
        Some(body) => {
            println!("{body}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No review has the sentiment {}", args.value);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// 語彙に含まれる単語数を出力する
pub fn run_size(corpus: &CorpusArgs) -> io::Result<ExitCode> {
    let analyzer = corpus.load(io::sink())?;
    println!("{}", analyzer.dictionary_size());
    Ok(ExitCode::SUCCESS)
}

/// ストップワードかどうかを `true` または `false` で出力する
pub fn run_stopword(corpus: &CorpusArgs, args: StopwordArgs) -> io::Result<ExitCode> {
    let analyzer = corpus.load(io::sink())?;
    println!("{}", analyzer.is_stop_word(&args.word));
    Ok(ExitCode::SUCCESS)
}
