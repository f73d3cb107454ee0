//! # movie-sentiment
//!
//! ラベル付きの映画レビューコーパスから、単語とレビューの評価値を求めるライブラリです。
//!
//! ## 概要
//!
//! 各レビューは `0`（否定的）から `4`（肯定的）までの評価値で始まる1行です。
//! レビュー中の単語ごとに出現回数と評価値の合計を集計し、単語の平均評価値、
//! 任意のテキストの評価値、出現頻度や評価値によるランキングを提供します。
//!
//! ## 主な機能
//!
//! - **単語の評価値**: 単語が出現したレビューの評価値の平均
//! - **レビューの評価値**: テキスト中の既知の単語の平均評価値と、その名前
//! - **ランキング**: 出現回数・平均評価値による上位の単語
//! - **レビュー検索**: 評価値が一致する最初のレビュー
//! - **追加**: 新しいレビューをコーパスと外部のシンクに追加
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use movie_sentiment::{SentimentAnalyzer, SentimentLabel};
//!
//! let stop_words = "a\nthe";
//! let reviews = "\
//! 1 Narratively , a plodding mess .
//! 4 Narratively, best indie .
//! 0 Worst .";
//!
//! let mut output = vec![];
//! let mut analyzer =
//!     SentimentAnalyzer::from_readers(stop_words.as_bytes(), reviews.as_bytes(), &mut output);
//!
//! assert_eq!(analyzer.word_sentiment("narratively"), Some(2.5));
//! assert_eq!(analyzer.review_sentiment_label("worst"), SentimentLabel::Negative);
//! assert_eq!(analyzer.most_negative_words(2)?, vec!["worst", "plodding"]);
//! assert_eq!(analyzer.find_review(4.0), Some("Narratively, best indie ."));
//!
//! analyzer.append_review("A gorgeous , witty film .", 4)?;
//! assert_eq!(analyzer.word_sentiment("gorgeous"), Some(4.0));
//!
//! drop(analyzer);
//! assert_eq!(output, b"4 A gorgeous , witty film .\n");
//! # Ok(())
//! # }
//! ```

/// 評価値の集計エンジン
pub mod analyzer;

/// エラー型の定義
pub mod errors;

/// 評価値の名前
pub mod label;

/// ラベル付きレビューとレビューストア
pub mod review;

/// ストップワード集合
pub mod stopwords;

/// レビューを単語に分割するトークナイザー
pub mod tokenizer;

/// 行単位の入出力ユーティリティ
pub mod utils;

/// 語彙インデックス
pub mod vocabulary;

#[cfg(test)]
mod tests;

// Re-exports
pub use analyzer::{LoadReport, SentimentAnalyzer};
pub use label::SentimentLabel;
pub use stopwords::StopWords;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
