//! 入力テキストの内部表現を提供するモジュール
//!
//! 入力文字列を文字単位に分割し、バイト位置のマッピングと各文字の字句クラスを
//! 一度だけ計算して保持します。

use std::borrow::Cow;

use crate::atom::{self, AtomIter};
use crate::char_class::{self, CharClass};
use crate::errors::Result;

/// 入力テキストの内部表現を保持する構造体
///
/// # フィールド
///
/// * `input` - 元の入力文字列
/// * `chars` - 入力文字列を文字単位に分割した配列
/// * `c2b` - 文字位置からバイト位置へのマッピング配列
/// * `classes` - 各文字の字句クラス
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    input: String,
    chars: Vec<char>,
    c2b: Vec<usize>,
    classes: Vec<CharClass>,
}

impl Sentence {
    /// 新しい空の `Sentence` インスタンスを生成します
    pub fn new() -> Self {
        Self::default()
    }

    /// 内部状態をクリアします
    #[inline(always)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.chars.clear();
        self.c2b.clear();
        self.classes.clear();
    }

    /// 入力文字列を設定し、内部データ構造を構築します
    ///
    /// # 引数
    ///
    /// * `input` - 設定する入力文字列
    pub fn set_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
        self.compute_basic();
        self.compute_classes();
    }

    fn compute_basic(&mut self) {
        for (bi, ch) in self.input.char_indices() {
            self.chars.push(ch);
            self.c2b.push(bi);
        }
        self.c2b.push(self.input.len());
    }

    fn compute_classes(&mut self) {
        self.classes = char_class::classify_range(&self.chars, 0, self.chars.len());
    }

    /// 元の入力文字列への参照を返します
    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// 文字配列への参照を返します
    #[inline(always)]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// 文字数を返します
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.chars.len()
    }

    /// 指定された文字位置に対応するバイト位置を返します
    ///
    /// # 引数
    ///
    /// * `pos_char` - 文字位置（0始まり）
    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    /// 指定された文字位置の字句クラスを返します
    #[inline(always)]
    pub fn char_class(&self, pos_char: usize) -> CharClass {
        self.classes[pos_char]
    }

    /// `[start, end)` の区間を、計算済みの字句クラスを使って原子分割します
    ///
    /// # エラー
    ///
    /// 範囲が無効な場合、[`CiwangError::InvalidRange`](crate::errors::CiwangError::InvalidRange)
    /// が返されます。
    pub fn atoms(&self, start: usize, end: usize) -> Result<AtomIter<'_>> {
        atom::check_range(self.len_char(), start, end)?;
        Ok(AtomIter::new(
            &self.chars,
            Cow::Borrowed(&self.classes[start..end]),
            start,
            end,
        ))
    }
}
