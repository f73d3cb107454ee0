//! ストップワード集合
//!
//! 語彙インデックスから除外する単語の集合を保持します。
//! 照合は大文字・小文字を区別する完全一致です。

use std::io::Read;

use hashbrown::HashSet;

use crate::errors::{Result, SentimentError};
use crate::utils::LossyLines;

/// ストップワードの集合。
///
/// 入力の各行をそのまま1語として保持します（行末の改行のみ取り除きます）。
#[derive(Default, Clone, Debug)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// 空のストップワード集合を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 1行1語のリーダーからストップワードを読み込みます。
    ///
    /// # 引数
    ///
    /// * `rdr` - ストップワードのリーダー
    ///
    /// # エラー
    ///
    /// 読み込み中にI/Oエラーが発生した場合は [`SentimentError::SourceRead`] を返します。
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut words = Self::new();
        words
            .extend_from_reader(rdr)
            .map_err(|(_, e)| SentimentError::source_read("stopwords", e))?;
        Ok(words)
    }

    /// リーダーから読み込めた行だけを集合に追加します。
    ///
    /// UTF-8として不正なバイト列は `U+FFFD` に置き換えて読み込みます。
    /// リーダー自体が途中で失敗した場合は、それまでに追加した語数とエラーを返します。
    /// 集合には読み込めた分が残ります。
    pub(crate) fn extend_from_reader<R>(
        &mut self,
        rdr: R,
    ) -> std::result::Result<usize, (usize, std::io::Error)>
    where
        R: Read,
    {
        let mut num_read = 0;
        for line in LossyLines::new(rdr) {
            let line = line.map_err(|e| (num_read, e))?;
            self.words.insert(line);
            num_read += 1;
        }
        Ok(num_read)
    }

    /// 単語を追加します。
    pub fn insert<S>(&mut self, word: S) -> bool
    where
        S: Into<String>,
    {
        self.words.insert(word.into())
    }

    /// `word` がストップワードかどうかを、大文字・小文字を区別して判定します。
    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// 登録されている語数を返します。
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 集合が空かどうかを返します。
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S> FromIterator<S> for StopWords
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader() {
        let stop_words = StopWords::from_reader("a\nthe\r\nAn\n".as_bytes()).unwrap();
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("a"));
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("An"));
    }

    #[test]
    fn test_case_sensitive() {
        let stop_words: StopWords = ["a"].into_iter().collect();
        assert!(stop_words.contains("a"));
        assert!(!stop_words.contains("A"));
        assert!(!stop_words.contains("aa"));
    }

    #[test]
    fn test_keeps_surrounding_spaces() {
        let stop_words = StopWords::from_reader(" of\n".as_bytes()).unwrap();
        assert!(stop_words.contains(" of"));
        assert!(!stop_words.contains("of"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let input: &[u8] = b"a\n\xff\xfe\nthe\n";
        let stop_words = StopWords::from_reader(input).unwrap();
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("\u{fffd}\u{fffd}"));
        assert!(stop_words.contains("the"));
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device lost"))
        }
    }

    #[test]
    fn test_reader_error() {
        let mut stop_words = StopWords::new();
        let (num_read, _) = stop_words
            .extend_from_reader("a\nthe\n".as_bytes().chain(Broken))
            .unwrap_err();
        assert_eq!(num_read, 2);
        assert!(stop_words.contains("the"));

        assert!(StopWords::from_reader("a\n".as_bytes().chain(Broken)).is_err());
    }
}
