//! 評価値の名前

use std::fmt;
use std::str::FromStr;

use crate::errors::SentimentError;

/// 丸めた評価値に対応する名前。
///
/// `Negative` から `Positive` までは評価値 `0` から `4` の順に並びます。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SentimentLabel {
    /// 評価値0
    Negative,
    /// 評価値1
    SomewhatNegative,
    /// 評価値2
    Neutral,
    /// 評価値3
    SomewhatPositive,
    /// 評価値4
    Positive,
    /// 評価値が得られない、または範囲外
    Unknown,
}

impl SentimentLabel {
    /// 既知の名前を評価値の順に並べたもの。
    pub const KNOWN: [Self; 5] = [
        Self::Negative,
        Self::SomewhatNegative,
        Self::Neutral,
        Self::SomewhatPositive,
        Self::Positive,
    ];

    /// 整数の評価値から名前を返します。範囲外は [`SentimentLabel::Unknown`] です。
    pub fn from_value(value: i64) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::KNOWN.get(i).copied())
            .unwrap_or(Self::Unknown)
    }

    /// 平均評価値から名前を返します。
    ///
    /// 平均値は最も近い整数に丸めます（0.5は0から遠い方へ丸めます）。
    /// `None` や非有限値は [`SentimentLabel::Unknown`] になります。
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(score) if score.is_finite() => Self::from_value(score.round() as i64),
            _ => Self::Unknown,
        }
    }

    /// 対応する評価値を返します。[`SentimentLabel::Unknown`] の場合は `None` です。
    pub fn value(self) -> Option<u8> {
        Self::KNOWN.iter().position(|&l| l == self).map(|i| i as u8)
    }

    /// 名前を文字列で返します。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::SomewhatNegative => "somewhat negative",
            Self::Neutral => "neutral",
            Self::SomewhatPositive => "somewhat positive",
            Self::Positive => "positive",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::KNOWN
            .into_iter()
            .chain([Self::Unknown])
            .find(|l| l.as_str() == s)
            .ok_or_else(|| {
                SentimentError::invalid_argument("label", format!("unknown label name: {s}"))
            })
    }
}
