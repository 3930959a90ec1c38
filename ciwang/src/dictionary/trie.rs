//! トライ構造による高速文字列検索
//!
//! crawdadのダブル配列トライをラップし、文字配列に対する共通接頭辞検索と
//! 完全一致検索を提供します。

use crate::errors::{CiwangError, Result};

/// ダブル配列トライ
pub struct Trie {
    da: crawdad::Trie,
}

impl Trie {
    /// レコードからトライを構築します。
    ///
    /// キーは重複なく昇順に並んでいる必要があります。
    pub fn from_records<K>(records: &[(K, u32)]) -> Result<Self>
    where
        K: AsRef<str>,
    {
        Ok(Self {
            da: crawdad::Trie::from_records(records.iter().map(|(k, v)| (k, *v)))
                .map_err(|e| CiwangError::invalid_argument("records", e.to_string()))?,
        })
    }

    /// `input` の先頭から始まる登録語をすべて、短い順に返します。
    #[inline(always)]
    pub fn common_prefix_iterator<'a>(
        &'a self,
        input: &'a [char],
    ) -> impl Iterator<Item = TrieMatch> + 'a {
        self.da
            .common_prefix_search(input.iter().cloned())
            .map(move |(value, end_char)| TrieMatch::new(value, end_char))
    }

    /// `key` に完全一致する登録語の値を返します。
    #[inline(always)]
    pub fn exact_match(&self, key: &str) -> Option<u32> {
        self.da.exact_match(key.chars())
    }
}

/// トライマッチング結果
///
/// `end_char` は検索を開始した位置からの相対文字数です。
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct TrieMatch {
    pub value: u32,
    pub end_char: usize,
}

impl TrieMatch {
    /// 新しいマッチング結果を作成します。
    #[inline(always)]
    pub const fn new(value: u32, end_char: usize) -> Self {
        Self { value, end_char }
    }
}
