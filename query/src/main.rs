//! 評価値コーパスへの問い合わせツールのメインエントリーポイント
//!
//! このモジュールは、ラベル付きレビューのコーパスに対する様々なサブコマンドを提供します。
//! 単語やテキストの評価値、単語のランキング、レビューの検索、
//! コーパスへのレビューの追加など、アナライザーの全操作を統合したCLIツールです。

mod append;
mod corpus;
mod lookup;
mod rank;
mod score;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::{append::AppendError, corpus::CorpusArgs, rank::RankError, rank::Ranking};

/// コマンドライン引数の構造体
///
/// `clap`を使用してコマンドライン引数をパースします。
#[derive(Parser, Debug)]
#[clap(name = "query", version)]
struct Cli {
    /// 読み込むコーパス
    #[clap(flatten)]
    corpus: CorpusArgs,

    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the average sentiment of a word
    Word(score::WordArgs),

    /// Prints the average sentiment of a review text
    Review(score::TextArgs),

    /// Prints the sentiment name of a review text
    Label(score::TextArgs),

    /// Prints the most frequent words
    Frequent(rank::Args),

    /// Prints the words with the highest average sentiment
    Positive(rank::Args),

    /// Prints the words with the lowest average sentiment
    Negative(rank::Args),

    /// Prints the first review whose sentiment equals the value
    Find(lookup::FindArgs),

    /// Prints the number of distinct words
    Size,

    /// Tells whether a word is a stopword
    Stopword(lookup::StopwordArgs),

    /// Appends a labeled review to the corpus file
    Append(append::Args),
}

/// 実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum QueryError {
    /// コーパスの読み込み中のエラー
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// ランキング中のエラー
    #[error(transparent)]
    Rank(#[from] RankError),
    /// 追加中のエラー
    #[error(transparent)]
    Append(#[from] AppendError),
}

/// メイン関数
///
/// コマンドライン引数をパースし、指定されたサブコマンドを実行します。
///
/// # 戻り値
///
/// 実行が成功した場合は終了コード、失敗した場合は対応する`QueryError`を返します。
/// `find` で一致するレビューが無い場合の終了コードは1です。
fn main() -> Result<ExitCode, QueryError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let corpus = &cli.corpus;
    match cli.command {
        Command::Word(args) => score::run_word(corpus, args)?,
        Command::Review(args) => score::run_review(corpus, args)?,
        Command::Label(args) => score::run_label(corpus, args)?,
        Command::Frequent(args) => rank::run(corpus, args, Ranking::Frequent)?,
        Command::Positive(args) => rank::run(corpus, args, Ranking::Positive)?,
        Command::Negative(args) => rank::run(corpus, args, Ranking::Negative)?,
        Command::Find(args) => return Ok(lookup::run_find(corpus, args)?),
        Command::Size => return Ok(lookup::run_size(corpus)?),
        Command::Stopword(args) => return Ok(lookup::run_stopword(corpus, args)?),
        Command::Append(args) => append::run(corpus, args)?,
    }
    Ok(ExitCode::SUCCESS)
}
