//! レビューを単語に分割するトークナイザー。
//!
//! 単語の区切りはASCIIの単語構成文字（`[0-9A-Za-z_]`）以外の文字の連続です。
//! 語彙インデックスに登録できるのは、小文字化した後に `[a-z0-9]+` に完全一致するトークンのみです。
//! そのため `a_b` のようにアンダースコアを含むトークンは、分割されずにそのまま捨てられます。
//!
//! # 例
//!
//! ```
//! use movie_sentiment::review::Review;
//! use movie_sentiment::stopwords::StopWords;
//! use movie_sentiment::tokenizer;
//!
//! let stop_words: StopWords = ["a"].into_iter().collect();
//! let review = Review::parse("1 Narratively , a plodding_mess .").unwrap();
//!
//! let words: Vec<String> = tokenizer::index_words(&review, &stop_words).collect();
//! assert_eq!(words, vec!["narratively"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::review::Review;
use crate::stopwords::StopWords;

static DELIMITER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").unwrap());
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").unwrap());

/// テキストを区切り文字で分割します。
///
/// ストップワードの除外や小文字化は行いません。
/// テキストが区切り文字で始まる、または終わる場合は空文字列のトークンが含まれます。
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    DELIMITER.split(text)
}

/// トークンを語彙インデックス用に正規化します。
///
/// ストップワードとの照合は小文字化する前のトークンに対して行います。
///
/// # 戻り値
///
/// 登録対象であれば小文字化した単語、そうでなければ `None`
pub fn normalize(token: &str, stop_words: &StopWords) -> Option<String> {
    if stop_words.contains(token) {
        return None;
    }
    let word = token.to_lowercase();
    WORD.is_match(&word).then_some(word)
}

/// レビューの本文から、語彙インデックスに登録する単語を順に返します。
///
/// 先頭の評価値は対象に含みません。
pub fn index_words<'a>(
    review: &'a Review,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    split_words(review.text()).filter_map(move |token| normalize(token, stop_words))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str, stop_words: &[&str]) -> Vec<String> {
        let stop_words: StopWords = stop_words.iter().copied().collect();
        let review = Review::parse(line).unwrap();
        index_words(&review, &stop_words).collect()
    }

    #[test]
    fn test_split_words() {
        let tokens: Vec<_> = split_words("Narratively , a plodding mess .").collect();
        assert_eq!(tokens, vec!["Narratively", "a", "plodding", "mess", ""]);
    }

    #[test]
    fn test_index_words() {
        assert_eq!(
            collect("1 Narratively , a plodding mess .\t", &["a"]),
            vec!["narratively", "plodding", "mess"],
        );
        assert_eq!(
            collect("4 Narratively, best indie .\t", &["a"]),
            vec!["narratively", "best", "indie"],
        );
    }

    #[test]
    fn test_label_is_not_a_word() {
        assert_eq!(collect("3 great", &[]), vec!["great"]);
        assert_eq!(collect("3 2 great", &[]), vec!["2", "great"]);
    }

    #[test]
    fn test_underscore_token_dropped() {
        assert_eq!(collect("2 a_b c", &[]), vec!["c"]);
        assert_eq!(collect("2 _ __init__ ok", &[]), vec!["ok"]);
    }

    #[test]
    fn test_non_ascii_is_delimiter() {
        assert_eq!(collect("3 caf\u{e9} na\u{ef}ve", &[]), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_stop_words_compared_before_lowercasing() {
        assert_eq!(collect("1 The the THE", &["the"]), vec!["the", "the"]);
        assert_eq!(collect("1 The the THE", &["The"]), vec!["the", "the"]);
    }

    #[test]
    fn test_normalize() {
        let stop_words: StopWords = ["of"].into_iter().collect();
        assert_eq!(normalize("Indie", &stop_words), Some("indie".to_string()));
        assert_eq!(normalize("of", &stop_words), None);
        assert_eq!(normalize("", &stop_words), None);
        assert_eq!(normalize("x_y", &stop_words), None);
    }
}
