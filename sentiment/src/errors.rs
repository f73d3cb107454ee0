//! エラー型の定義
//!
//! このモジュールは、movie-sentimentライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

/// movie-sentiment専用のResult型
///
/// エラー型としてデフォルトで[`SentimentError`]を使用します。
pub type Result<T, E = SentimentError> = std::result::Result<T, E>;

/// movie-sentimentのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// 未知語や一致するレビューが無いといった「見つからない」結果はエラーではなく、
/// `Option` で表現されます。
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 入力ソースの読み込みエラー
    ///
    /// ストップワードまたはレビューのソースを読み込む途中で発生したI/Oエラーです。
    #[error("Failed to read the {source_name} source: {error}")]
    SourceRead {
        /// 読み込んでいたソースの名前
        source_name: &'static str,

        /// 元のI/Oエラー
        #[source]
        error: std::io::Error,
    },
}

impl SentimentError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// ソース読み込みエラーを生成します
    pub(crate) fn source_read(source_name: &'static str, error: std::io::Error) -> Self {
        Self::SourceRead { source_name, error }
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl InvalidArgumentError {
    /// 無効だった引数の名前を返します
    pub fn arg(&self) -> &'static str {
        self.arg
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}
