//! 映画レビューの評価値を集計するアナライザー。
//!
//! [`SentimentAnalyzer`] は、ストップワードとラベル付きレビューのコーパスを読み込み、
//! 単語ごとの出現回数と評価値の合計から、単語やレビューの平均評価値を求めます。
//!
//! # 例
//!
//! ```
//! use movie_sentiment::{SentimentAnalyzer, SentimentLabel};
//!
//! let stop_words = "a";
//! let reviews = "1 Narratively , a plodding mess .\n4 Narratively, best indie .";
//!
//! let analyzer =
//!     SentimentAnalyzer::from_readers(stop_words.as_bytes(), reviews.as_bytes(), std::io::sink());
//!
//! assert_eq!(analyzer.dictionary_size(), 5);
//! assert_eq!(analyzer.word_sentiment("Narratively"), Some(2.5));
//! assert_eq!(analyzer.review_sentiment_label("best plodding"), SentimentLabel::SomewhatPositive);
//! assert_eq!(analyzer.most_frequent_words(1)?, vec!["narratively"]);
//! # Ok::<(), movie_sentiment::errors::SentimentError>(())
//! ```

use std::cmp::Ordering;
use std::io::{Read, Write};

use crate::errors::{Result, SentimentError};
use crate::label::SentimentLabel;
use crate::review::{Review, ReviewStore};
use crate::stopwords::StopWords;
use crate::tokenizer;
use crate::utils::LossyLines;
use crate::vocabulary::{Vocabulary, WordEntry};

/// コーパス読み込みの結果。
///
/// 読み込みはベストエフォートで行われます。I/Oエラーが起きたソースはそこで読み込みを打ち切り、
/// エラーはここに記録されます。
#[derive(Debug, Default)]
pub struct LoadReport {
    /// 読み込んだストップワードの行数
    pub num_stop_words: usize,

    /// 読み込んだレビューの件数
    pub num_reviews: usize,

    /// 形式が不正なため読み飛ばしたレビュー行の数
    pub num_skipped: usize,

    /// 読み込み中に発生したエラー
    pub errors: Vec<SentimentError>,
}

impl LoadReport {
    /// すべてのソースを最後まで読み込めたかどうかを返します。
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 評価値の集計エンジン。
///
/// 語彙インデックスとレビューストアを所有します。
/// 追加されたレビューは `W` に書き出されます。`W` に `&mut File` などを渡せば、
/// シンクの所有権は呼び出し側に残ります。
///
/// 内部で排他制御は行いません。複数スレッドから使う場合は、アナライザー全体を
/// 1つの `Mutex` で保護してください。
pub struct SentimentAnalyzer<W> {
    stop_words: StopWords,
    vocabulary: Vocabulary,
    reviews: ReviewStore,
    sink: W,
    load_report: LoadReport,
}

impl<W> SentimentAnalyzer<W>
where
    W: Write,
{
    /// ストップワードとレビューのリーダーからアナライザーを作成します。
    ///
    /// この関数は失敗しません。UTF-8として不正なバイト列は `U+FFFD` に置き換えて読み込みます。
    /// リーダー自体のI/Oエラーはログに出力され、
    /// それまでに読み込めた内容でアナライザーが作られます。
    /// 評価値で始まらないレビュー行は読み飛ばされます。
    /// 詳細は [`SentimentAnalyzer::load_report`] で確認できます。
    ///
    /// # 引数
    ///
    /// * `stop_words_rdr` - 1行1語のストップワードのリーダー
    /// * `reviews_rdr` - 1行1件のラベル付きレビューのリーダー
    /// * `sink` - [`append_review`](Self::append_review) で追加されたレビューの書き出し先
    pub fn from_readers<S, R>(stop_words_rdr: S, reviews_rdr: R, sink: W) -> Self
    where
        S: Read,
        R: Read,
    {
        let mut analyzer = Self::new(StopWords::new(), sink);

        match analyzer.stop_words.extend_from_reader(stop_words_rdr) {
            Ok(n) => analyzer.load_report.num_stop_words = n,
            Err((n, e)) => {
                log::error!("[movie-sentiment] Failed to read the stopwords source: {e}");
                analyzer.load_report.num_stop_words = n;
                analyzer
                    .load_report
                    .errors
                    .push(SentimentError::source_read("stopwords", e));
            }
        }

        for (i, line) in LossyLines::new(reviews_rdr).enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("[movie-sentiment] Failed to read the reviews source: {e}");
                    analyzer
                        .load_report
                        .errors
                        .push(SentimentError::source_read("reviews", e));
                    break;
                }
            };
            match Review::parse(line) {
                Ok(review) => {
                    analyzer.add_review(review);
                    analyzer.load_report.num_reviews += 1;
                }
                Err(e) => {
                    log::warn!("[movie-sentiment] Skipped review line {}: {e}", i + 1);
                    analyzer.load_report.num_skipped += 1;
                }
            }
        }

        log::debug!(
            "[movie-sentiment] Loaded {} stopwords, {} reviews and {} words",
            analyzer.load_report.num_stop_words,
            analyzer.load_report.num_reviews,
            analyzer.vocabulary.len(),
        );

        analyzer
    }

    /// 空のコーパスからアナライザーを作成します。
    ///
    /// # 引数
    ///
    /// * `stop_words` - ストップワード
    /// * `sink` - 追加されたレビューの書き出し先
    pub fn new(stop_words: StopWords, sink: W) -> Self {
        Self {
            stop_words,
            vocabulary: Vocabulary::new(),
            reviews: ReviewStore::new(),
            sink,
            load_report: LoadReport::default(),
        }
    }

    /// 新しいレビューをコーパスに追加します。
    ///
    /// `"{sentiment} {text}"` の行を組み立て、構築時のレビューと同様に語彙インデックスへ登録し、
    /// レビューストアに追加します。同じ行を改行付きでシンクに書き出し、直ちにフラッシュします。
    /// 呼び出すたびに追加されます。
    ///
    /// シンクへの書き込みに失敗してもエラーにはなりません。エラーはログに出力され、
    /// メモリ上の追加はそのまま残ります。
    ///
    /// # 引数
    ///
    /// * `text` - レビューの本文
    /// * `sentiment` - 評価値（`0` から `4`）
    ///
    /// # エラー
    ///
    /// `sentiment` が範囲外の場合、[`SentimentError`] を返します。何も追加されません。
    pub fn append_review(&mut self, text: &str, sentiment: u8) -> Result<()> {
        let review = Review::with_sentiment(text, sentiment)?;
        if let Err(e) = writeln!(&mut self.sink, "{}", review.line()).and_then(|()| self.sink.flush())
        {
            log::error!("[movie-sentiment] Failed to write the appended review: {e}");
        }
        self.add_review(review);
        Ok(())
    }
}

impl<W> SentimentAnalyzer<W> {
    fn add_review(&mut self, review: Review) {
        let sentiment = review.sentiment();
        for word in tokenizer::index_words(&review, &self.stop_words) {
            self.vocabulary.record(&word, sentiment);
        }
        self.reviews.push(review);
    }

    /// 単語の平均評価値を返します。
    ///
    /// 単語は小文字化してから照合します。
    ///
    /// # 戻り値
    ///
    /// 語彙に含まれていれば `sentiment_sum / count`、含まれていなければ `None`
    pub fn word_sentiment(&self, word: &str) -> Option<f64> {
        self.vocabulary
            .get(&word.to_lowercase())
            .map(WordEntry::average)
    }

    /// テキストの平均評価値を返します。
    ///
    /// テキストを区切り文字で分割し、語彙に含まれるトークンの平均評価値を平均します。
    /// 同じ単語が複数回現れた場合は、その回数だけ数えます。
    ///
    /// トークンは小文字化せずに照合するため、大文字を含むトークンは認識されません。
    /// ストップワードの除外も行いません。
    ///
    /// # 戻り値
    ///
    /// 認識された単語が1つも無い場合は `None`
    pub fn review_sentiment(&self, text: &str) -> Option<f64> {
        let mut sum = 0.0;
        let mut num_recognized = 0usize;
        for token in tokenizer::split_words(text) {
            if let Some(entry) = self.vocabulary.get(token) {
                sum += entry.average();
                num_recognized += 1;
            }
        }
        (num_recognized != 0).then(|| sum / num_recognized as f64)
    }

    /// テキストの平均評価値を丸め、対応する名前を返します。
    ///
    /// 評価値が得られない場合や、丸めた結果が `0..=4` の外にある場合は
    /// [`SentimentLabel::Unknown`] を返します。
    pub fn review_sentiment_label(&self, text: &str) -> SentimentLabel {
        SentimentLabel::from_score(self.review_sentiment(text))
    }

    /// 出現回数の多い順に、最大 `n` 個の単語を返します。
    ///
    /// 出現回数が同じ単語は、語彙に最初に現れた順に並びます。
    ///
    /// # エラー
    ///
    /// `n` が負の場合、[`SentimentError`] を返します。
    pub fn most_frequent_words(&self, n: i64) -> Result<Vec<&str>> {
        let n = Self::check_limit(n)?;
        let mut entries: Vec<&WordEntry> = self.vocabulary.iter().collect();
        entries.sort_by(|a, b| b.count().cmp(&a.count()));
        Ok(Self::take_words(entries, n))
    }

    /// 平均評価値の高い順に、最大 `n` 個の単語を返します。
    ///
    /// 結果は [`most_negative_words`](Self::most_negative_words) の全体の順位を逆にしたものです。
    /// そのため平均評価値が同じ単語は、語彙に後から現れたものが先に並びます。
    ///
    /// # エラー
    ///
    /// `n` が負の場合、[`SentimentError`] を返します。
    pub fn most_positive_words(&self, n: i64) -> Result<Vec<&str>> {
        let n = Self::check_limit(n)?;
        let mut entries = self.ranked_by_average();
        entries.reverse();
        Ok(Self::take_words(entries, n))
    }

    /// 平均評価値の低い順に、最大 `n` 個の単語を返します。
    ///
    /// 平均評価値が同じ単語は、語彙に最初に現れた順に並びます。
    ///
    /// # エラー
    ///
    /// `n` が負の場合、[`SentimentError`] を返します。
    pub fn most_negative_words(&self, n: i64) -> Result<Vec<&str>> {
        let n = Self::check_limit(n)?;
        Ok(Self::take_words(self.ranked_by_average(), n))
    }

    /// 評価値がちょうど `value` であるレビューのうち、最初に追加されたものの本文を返します。
    ///
    /// 各レビューの評価値は、保存されている行全体に [`review_sentiment`](Self::review_sentiment)
    /// を適用して求めます。比較は浮動小数点数の完全一致で、許容誤差はありません。
    /// 本文は先頭の評価値と区切り文字の2文字を除いたものです。
    pub fn find_review(&self, value: f64) -> Option<&str> {
        self.reviews
            .iter()
            .find(|review| {
                self.review_sentiment(review.line())
                    .is_some_and(|score| score.total_cmp(&value) == Ordering::Equal)
            })
            .map(Review::body)
    }

    /// 語彙に含まれる単語数を返します。
    pub fn dictionary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// `word` がストップワードかどうかを返します。
    ///
    /// 大文字・小文字を区別する完全一致で判定します。
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// 単語のエントリを返します。単語は小文字化してから照合します。
    pub fn word_entry(&self, word: &str) -> Option<&WordEntry> {
        self.vocabulary.get(&word.to_lowercase())
    }

    /// 語彙インデックスを返します。
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// レビューストアを返します。
    pub fn reviews(&self) -> &ReviewStore {
        &self.reviews
    }

    /// ストップワードを返します。
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// 構築時の読み込み結果を返します。
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// シンクへの参照を返します。
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// シンクへの可変参照を返します。
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// アナライザーを破棄し、シンクを返します。
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn check_limit(n: i64) -> Result<usize> {
        if n < 0 {
            return Err(SentimentError::invalid_argument(
                "n",
                format!("must not be negative, but got {n}"),
            ));
        }
        Ok(usize::try_from(n).unwrap_or(usize::MAX))
    }

    // Stable: equal averages keep the vocabulary order.
    fn ranked_by_average(&self) -> Vec<&WordEntry> {
        let mut entries: Vec<&WordEntry> = self.vocabulary.iter().collect();
        entries.sort_by(|a, b| a.average().total_cmp(&b.average()));
        entries
    }

    fn take_words(entries: Vec<&WordEntry>, n: usize) -> Vec<&str> {
        entries.into_iter().take(n).map(WordEntry::word).collect()
    }
}
