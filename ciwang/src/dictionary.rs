//! 辞書インターフェースと語彙データ構造
//!
//! 分詞器は辞書を「文字バッファ上の前向き検索」と「登録語の有無の判定」の
//! 2つの能力だけを通して利用します。コア辞書、ユーザー辞書、音訳人名辞書は
//! いずれも [`WordSearch`] を実装していれば差し替え可能です。
//!
//! 同梱の実装として、ダブル配列トライに基づく [`Lexicon`] を提供します。

pub mod lexicon;
mod trie;

use std::sync::Arc;

use crate::errors::{CiwangError, Result};
use crate::nature::Nature;

pub use crate::dictionary::lexicon::{Lexicon, LexiconBuilder};

/// 辞書に登録された語の属性
///
/// 品詞と頻度の組を辞書に記載された順に保持します。先頭の品詞が最有力候補です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    natures: Vec<(Nature, u32)>,
    total_frequency: u32,
}

impl Attribute {
    /// 品詞が1つだけの属性を作成します。
    pub fn new(nature: Nature, frequency: u32) -> Self {
        Self {
            natures: vec![(nature, frequency)],
            total_frequency: frequency,
        }
    }

    /// 品詞と頻度の組から属性を作成します。
    ///
    /// # エラー
    ///
    /// `natures` が空の場合、[`CiwangError`]が返されます。
    pub fn from_natures<I>(natures: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Nature, u32)>,
    {
        let natures: Vec<_> = natures.into_iter().collect();
        if natures.is_empty() {
            return Err(CiwangError::invalid_argument(
                "natures",
                "an attribute must hold at least one nature",
            ));
        }
        let total_frequency = natures.iter().fold(0u32, |acc, &(_, f)| acc.saturating_add(f));
        Ok(Self {
            natures,
            total_frequency,
        })
    }

    /// 品詞と頻度の組を返します。
    #[inline(always)]
    pub fn natures(&self) -> &[(Nature, u32)] {
        &self.natures
    }

    /// 最有力の品詞を返します。
    #[inline(always)]
    pub fn first_nature(&self) -> Nature {
        self.natures[0].0
    }

    /// 品詞が一意に定まる場合、その品詞を返します。
    #[inline(always)]
    pub fn unique_nature(&self) -> Option<Nature> {
        match self.natures.as_slice() {
            [(nature, _)] => Some(*nature),
            _ => None,
        }
    }

    /// 指定された品詞の頻度を返します。登録されていない品詞は0です。
    pub fn frequency(&self, nature: Nature) -> u32 {
        self.natures
            .iter()
            .find(|(n, _)| *n == nature)
            .map_or(0, |&(_, f)| f)
    }

    /// 全品詞の頻度の合計を返します。
    #[inline(always)]
    pub const fn total_frequency(&self) -> u32 {
        self.total_frequency
    }

    fn merge(&mut self, other: &Attribute) {
        for &(nature, frequency) in &other.natures {
            match self.natures.iter_mut().find(|(n, _)| *n == nature) {
                Some((_, f)) => *f = f.saturating_add(frequency),
                None => self.natures.push((nature, frequency)),
            }
        }
        self.total_frequency = self.total_frequency.saturating_add(other.total_frequency);
    }
}

/// 辞書検索で見つかった1件の語
#[derive(Debug, Clone)]
pub struct LexMatch {
    /// 語の開始位置（文字単位、含む）
    pub begin: usize,
    /// 語の終了位置（文字単位、含まない）
    pub end: usize,
    /// 語の属性
    pub attribute: Arc<Attribute>,
}

impl LexMatch {
    /// 語の文字数を返します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.end - self.begin
    }
}

/// 分詞器が辞書に要求する能力
pub trait WordSearch {
    /// `chars` 上の登録語をすべて、開始位置の昇順に返します。
    fn search<'a>(&'a self, chars: &'a [char]) -> Box<dyn Iterator<Item = LexMatch> + 'a>;

    /// `word` が登録語かどうかを返します。
    fn contains(&self, word: &str) -> bool;
}
