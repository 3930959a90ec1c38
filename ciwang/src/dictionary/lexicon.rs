//! トライに基づく辞書の実装
//!
//! 登録語をダブル配列トライに格納し、文の各位置から共通接頭辞検索を行うことで
//! 文中のすべての登録語を開始位置の昇順に列挙します。

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dictionary::trie::Trie;
use crate::dictionary::{Attribute, LexMatch, WordSearch};
use crate::errors::{CiwangError, Result};

/// 登録語とその属性を保持する辞書
pub struct Lexicon {
    trie: Trie,
    attributes: Vec<Arc<Attribute>>,
}

impl Lexicon {
    /// 語と属性の組から辞書を作成します。
    ///
    /// 同じ語が複数回現れた場合、属性は品詞ごとに頻度を合算して1つにまとめられます。
    ///
    /// # エラー
    ///
    /// 空文字列の語が含まれる場合、[`CiwangError`]が返されます。
    ///
    /// # 例
    ///
    /// ```
    /// use ciwang::dictionary::{Attribute, Lexicon, WordSearch};
    /// use ciwang::nature::Nature;
    ///
    /// let lexicon = Lexicon::from_records([
    ///     ("中国", Attribute::new(Nature::Ns, 100)),
    ///     ("中国人", Attribute::new(Nature::N, 20)),
    /// ])?;
    /// assert!(lexicon.contains("中国人"));
    ///
    /// let chars: Vec<char> = "中国人".chars().collect();
    /// let spans: Vec<_> = lexicon.search(&chars).map(|m| (m.begin, m.end)).collect();
    /// assert_eq!(spans, vec![(0, 2), (0, 3)]);
    /// # Ok::<(), ciwang::errors::CiwangError>(())
    /// ```
    pub fn from_records<I, W>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, Attribute)>,
        W: AsRef<str>,
    {
        let mut b = LexiconBuilder::new();
        for (word, attribute) in records {
            b.add_record(word.as_ref(), attribute)?;
        }
        b.build()
    }

    /// 登録語の数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// 登録語がない場合に`true`を返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// 登録語の属性を返します。
    pub fn get(&self, word: &str) -> Option<&Arc<Attribute>> {
        self.trie
            .exact_match(word)
            .map(|value| &self.attributes[value as usize])
    }
}

impl WordSearch for Lexicon {
    fn search<'a>(&'a self, chars: &'a [char]) -> Box<dyn Iterator<Item = LexMatch> + 'a> {
        Box::new((0..chars.len()).flat_map(move |begin| {
            self.trie
                .common_prefix_iterator(&chars[begin..])
                .map(move |m| LexMatch {
                    begin,
                    end: begin + m.end_char,
                    attribute: Arc::clone(&self.attributes[m.value as usize]),
                })
        }))
    }

    fn contains(&self, word: &str) -> bool {
        self.trie.exact_match(word).is_some()
    }
}

/// 辞書を構築するビルダー
#[derive(Default)]
pub struct LexiconBuilder {
    map: BTreeMap<String, Attribute>,
}

impl LexiconBuilder {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// 語を1件追加します。
    ///
    /// # エラー
    ///
    /// `word` が空の場合、[`CiwangError`]が返されます。
    pub fn add_record(&mut self, word: &str, attribute: Attribute) -> Result<()> {
        if word.is_empty() {
            return Err(CiwangError::invalid_argument(
                "word",
                "an empty word cannot be registered",
            ));
        }
        match self.map.get_mut(word) {
            Some(existing) => existing.merge(&attribute),
            None => {
                self.map.insert(word.to_string(), attribute);
            }
        }
        Ok(())
    }

    pub fn build(self) -> Result<Lexicon> {
        let mut entries = Vec::with_capacity(self.map.len());
        let mut attributes = Vec::with_capacity(self.map.len());
        for (word, attribute) in self.map {
            entries.push((word, u32::try_from(attributes.len())?));
            attributes.push(Arc::new(attribute));
        }
        Ok(Lexicon {
            trie: Trie::from_records(&entries)?,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nature::Nature;

    #[test]
    fn test_search_order() {
        let lexicon = Lexicon::from_records([
            ("国人", Attribute::new(Nature::N, 3)),
            ("中国", Attribute::new(Nature::Ns, 100)),
            ("人", Attribute::new(Nature::N, 50)),
        ])
        .unwrap();
        let chars: Vec<char> = "中国人".chars().collect();
        let spans: Vec<_> = lexicon.search(&chars).map(|m| (m.begin, m.end)).collect();
        assert_eq!(spans, vec![(0, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_duplicate_records_are_merged() {
        let lexicon = Lexicon::from_records([
            ("月", Attribute::new(Nature::Q, 10)),
            ("月", Attribute::new(Nature::N, 4)),
        ])
        .unwrap();
        assert_eq!(lexicon.len(), 1);
        let attr = lexicon.get("月").unwrap();
        assert_eq!(attr.first_nature(), Nature::Q);
        assert_eq!(attr.frequency(Nature::N), 4);
        assert!(lexicon.get("日").is_none());
    }

    #[test]
    fn test_empty_word() {
        assert!(Lexicon::from_records([("", Attribute::new(Nature::N, 1))]).is_err());
    }
}
