//! 語彙インデックス
//!
//! 正規化済みの単語ごとに、出現回数と評価値の合計を保持します。
//! エントリは最初に出現した順に並び、ランキングの同順位はこの順序で決まります。

use hashbrown::HashMap;

/// 語彙インデックスの1エントリ。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    count: u64,
    sentiment_sum: u64,
}

impl WordEntry {
    fn new(word: &str, sentiment: u8) -> Self {
        Self {
            word: word.to_string(),
            count: 1,
            sentiment_sum: u64::from(sentiment),
        }
    }

    /// 正規化済みの単語を返します。
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 出現回数を返します。常に1以上です。
    #[inline(always)]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// 評価値の合計を返します。
    #[inline(always)]
    pub fn sentiment_sum(&self) -> u64 {
        self.sentiment_sum
    }

    /// 平均評価値 `sentiment_sum / count` を返します。
    #[inline(always)]
    pub fn average(&self) -> f64 {
        self.sentiment_sum as f64 / self.count as f64
    }
}

/// 単語から [`WordEntry`] への対応表。
#[derive(Default, Clone, Debug)]
pub struct Vocabulary {
    // word -> position in `entries`
    index: HashMap<String, usize>,
    entries: Vec<WordEntry>,
}

impl Vocabulary {
    /// 空の語彙インデックスを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 単語の出現を1回記録します。
    ///
    /// 未登録の単語であれば、出現回数1、合計 `sentiment` のエントリを作成します。
    /// 登録済みであれば、出現回数を1増やし、合計に `sentiment` を加えます。
    ///
    /// # 引数
    ///
    /// * `word` - 正規化済みの単語
    /// * `sentiment` - 単語が出現したレビューの評価値
    pub fn record(&mut self, word: &str, sentiment: u8) {
        if let Some(&i) = self.index.get(word) {
            let entry = &mut self.entries[i];
            entry.count += 1;
            entry.sentiment_sum += u64::from(sentiment);
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push(WordEntry::new(word, sentiment));
        }
    }

    /// 単語のエントリを返します。
    ///
    /// 照合は完全一致です。正規化は呼び出し側で行います。
    #[inline(always)]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    /// 単語が登録されているかどうかを返します。
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// 登録されている単語数を返します。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 語彙が空かどうかを返します。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// エントリを最初に出現した順に返します。
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// エントリのイテレータを最初に出現した順に返します。
    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut vocab = Vocabulary::new();
        vocab.record("narratively", 1);
        vocab.record("plodding", 1);
        vocab.record("narratively", 4);

        assert_eq!(vocab.len(), 2);

        let entry = vocab.get("narratively").unwrap();
        assert_eq!(entry.count(), 2);
        assert_eq!(entry.sentiment_sum(), 5);
        assert_eq!(entry.average(), 2.5);

        let entry = vocab.get("plodding").unwrap();
        assert_eq!(entry.count(), 1);
        assert_eq!(entry.average(), 1.0);
    }

    #[test]
    fn test_insertion_order() {
        let mut vocab = Vocabulary::new();
        for word in ["mess", "best", "indie", "best", "mess"] {
            vocab.record(word, 2);
        }
        let words: Vec<_> = vocab.iter().map(WordEntry::word).collect();
        assert_eq!(words, vec!["mess", "best", "indie"]);
    }

    #[test]
    fn test_exact_lookup() {
        let mut vocab = Vocabulary::new();
        vocab.record("best", 4);
        assert!(vocab.contains("best"));
        assert!(!vocab.contains("Best"));
        assert!(vocab.get("BEST").is_none());
    }

    #[test]
    fn test_zero_sentiment() {
        let mut vocab = Vocabulary::new();
        vocab.record("worst", 0);
        assert_eq!(vocab.get("worst").unwrap().average(), 0.0);
    }
}
