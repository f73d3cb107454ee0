//! 行単位の入出力ユーティリティ
//!
//! コーパスのファイルは1行1件のテキストです。このモジュールは、
//! 不正なUTF-8を含む行でも読み込みを止めない行リーダーと、
//! 追記前に最終行を改行で終端させる関数を提供します。

use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};

/// 行を順に返すイテレータ
///
/// 行末の `\n` と、その直前の `\r` を取り除きます。
/// UTF-8として不正なバイト列は `U+FFFD` に置き換えられ、エラーにはなりません。
/// エラーを返すのは、リーダー自体が失敗した場合のみです。
pub struct LossyLines<R> {
    rdr: BufReader<R>,
    buf: Vec<u8>,
}

impl<R> LossyLines<R>
where
    R: Read,
{
    /// リーダーから行イテレータを作成します。
    pub fn new(rdr: R) -> Self {
        Self {
            rdr: BufReader::new(rdr),
            buf: vec![],
        }
    }
}

impl<R> Iterator for LossyLines<R>
where
    R: Read,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.rdr.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// 空でないファイルが改行で終わっていなければ、末尾に改行を書き込みます。
///
/// 行単位のコーパスに追記する前に呼び出すと、追記した行が既存の最終行と
/// 連結されるのを防げます。
///
/// # 引数
///
/// * `file` - 読み書き可能なファイル。追記モードで開いたものでも構いません。
///
/// # 戻り値
///
/// 改行を書き込んだ場合は `true`
///
/// # エラー
///
/// シーク、読み込み、書き込みに失敗した場合、I/Oエラーを返します。
pub fn terminate_last_line<F>(file: &mut F) -> io::Result<bool>
where
    F: Read + Write + Seek,
{
    if file.seek(SeekFrom::End(0))? == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0; 1];
    file.read_exact(&mut last)?;
    if last[0] == b'\n' {
        return Ok(false);
    }
    file.seek(SeekFrom::End(0))?;
    file.write_all(b"\n")?;
    file.flush()?;
    Ok(true)
}
