//! コーパスの読み込み
//!
//! すべてのサブコマンドで共通の、ストップワードとレビューのファイル指定を扱います。

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use movie_sentiment::SentimentAnalyzer;

/// コーパスの指定
#[derive(Parser, Debug)]
pub struct CorpusArgs {
    /// Stopword list, one word per line.
    #[clap(short = 's', long)]
    pub stopwords_in: PathBuf,

    /// Labeled review corpus, one review per line.
    #[clap(short = 'r', long)]
    pub reviews_in: PathBuf,
}

impl CorpusArgs {
    /// コーパスを読み込み、アナライザーを作成する
    ///
    /// ファイルを開けない場合はエラーを返します。読み込み途中のエラーは
    /// ログに出力され、読み込めた分でアナライザーが作られます。
    ///
    /// # 引数
    ///
    /// * `sink` - 追加されたレビューの書き出し先
    pub fn load<W>(&self, sink: W) -> io::Result<SentimentAnalyzer<W>>
    where
        W: Write,
    {
        let analyzer = SentimentAnalyzer::from_readers(
            File::open(&self.stopwords_in)?,
            File::open(&self.reviews_in)?,
            sink,
        );
        let report = analyzer.load_report();
        log::info!(
            "Loaded {} stopwords and {} reviews ({} skipped)",
            report.num_stop_words,
            report.num_reviews,
            report.num_skipped,
        );
        Ok(analyzer)
    }
}
