//! ラベル付きレビューとレビューストア
//!
//! レビュー1件は `<評価値><区切り文字><本文>` 形式の1行です。
//! 評価値は `0` から `4` までの1桁の数字です。

use std::ops::Deref;

use crate::errors::{Result, SentimentError};

/// 評価値の最大値。
pub const MAX_SENTIMENT: u8 = 4;

/// 評価値と区切り文字を合わせた接頭辞の文字数。
const PREFIX_LEN: usize = 2;

/// 評価値付きのレビュー1行。
///
/// 元の行をそのまま保持し、評価値と本文はそこから取り出します。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    line: String,
    sentiment: u8,
}

impl Review {
    /// 1行をパースしてレビューを作成します。
    ///
    /// # 引数
    ///
    /// * `line` - 改行を含まないレビュー行
    ///
    /// # エラー
    ///
    /// 先頭の文字が `0` から `4` の数字でない場合、[`SentimentError`] を返します。
    pub fn parse<S>(line: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let line = line.into();
        let sentiment = match line.chars().next() {
            Some(c @ '0'..='4') => c as u8 - b'0',
            Some(c) => {
                return Err(SentimentError::invalid_format(
                    "review",
                    format!("a review must start with a sentiment digit 0-4, but got {c:?}"),
                ));
            }
            None => {
                return Err(SentimentError::invalid_format(
                    "review",
                    "a review must not be empty",
                ));
            }
        };
        Ok(Self { line, sentiment })
    }

    /// 評価値と本文から新しいレビュー行を組み立てます。
    ///
    /// 区切り文字には半角スペースを使います。
    ///
    /// # エラー
    ///
    /// `sentiment` が [`MAX_SENTIMENT`] を超える場合、[`SentimentError`] を返します。
    pub fn with_sentiment(text: &str, sentiment: u8) -> Result<Self> {
        if sentiment > MAX_SENTIMENT {
            return Err(SentimentError::invalid_argument(
                "sentiment",
                format!("must be in 0..={MAX_SENTIMENT}, but got {sentiment}"),
            ));
        }
        Ok(Self {
            line: format!("{sentiment} {text}"),
            sentiment,
        })
    }

    /// 評価値を返します。
    #[inline(always)]
    pub fn sentiment(&self) -> u8 {
        self.sentiment
    }

    /// 評価値の直後から行末までのテキストを返します。
    ///
    /// 区切り文字を含みます。
    #[inline(always)]
    pub fn text(&self) -> &str {
        // The first character is an ASCII digit.
        &self.line[1..]
    }

    /// 評価値と区切り文字を除いた本文を返します。
    ///
    /// 行が2文字に満たない場合は空文字列を返します。
    pub fn body(&self) -> &str {
        self.line
            .char_indices()
            .nth(PREFIX_LEN)
            .map_or("", |(i, _)| &self.line[i..])
    }

    /// 元の行をそのまま返します。
    #[inline(always)]
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// レビューを挿入順に保持するストア。
///
/// 要素は追加されるのみで、削除されることはありません。
#[derive(Default, Clone, Debug)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    /// 空のストアを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// レビューを末尾に追加します。
    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

impl Deref for ReviewStore {
    type Target = [Review];

    fn deref(&self) -> &Self::Target {
        &self.reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let review = Review::parse("1 Narratively , a plodding mess .\t").unwrap();
        assert_eq!(review.sentiment(), 1);
        assert_eq!(review.text(), " Narratively , a plodding mess .\t");
        assert_eq!(review.body(), "Narratively , a plodding mess .\t");
        assert_eq!(review.line(), "1 Narratively , a plodding mess .\t");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Review::parse("").is_err());
        assert!(Review::parse("5 too good").is_err());
        assert!(Review::parse("x bad label").is_err());
        assert!(Review::parse(" 1 leading space").is_err());
    }

    #[test]
    fn test_body_of_short_line() {
        assert_eq!(Review::parse("3").unwrap().body(), "");
        assert_eq!(Review::parse("3 ").unwrap().body(), "");
    }

    #[test]
    fn test_body_with_multibyte_separator() {
        let review = Review::parse("2\u{3000}quiet film").unwrap();
        assert_eq!(review.body(), "quiet film");
    }

    #[test]
    fn test_with_sentiment() {
        let review = Review::with_sentiment("best indie", 4).unwrap();
        assert_eq!(review.line(), "4 best indie");
        assert_eq!(review.sentiment(), 4);
        assert_eq!(review.body(), "best indie");

        assert!(Review::with_sentiment("too good", 5).is_err());
    }

    #[test]
    fn test_store_keeps_order() {
        let mut store = ReviewStore::new();
        store.push(Review::parse("0 Worst .").unwrap());
        store.push(Review::parse("4 Best .").unwrap());
        assert_eq!(store.len(), 2);
        assert_eq!(store[0].body(), "Worst .");
        assert_eq!(store[1].body(), "Best .");
    }
}
