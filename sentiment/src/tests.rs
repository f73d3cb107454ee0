//! movie-sentimentのテストモジュール群
//!
//! 小さなコーパスを使って、アナライザーの問い合わせと追加の動作を検証します。
