//! 分詞結果の語
//!
//! [`Term`] は詞網から切り離された所有型の値で、文中の文字位置と品詞を持ちます。

use std::fmt;
use std::ops::Range;

use crate::nature::Nature;
use crate::segmenter::vertex::Vertex;

/// 分詞結果の1語
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    word: String,
    nature: Nature,
    offset: usize,
    len_char: usize,
}

impl Term {
    /// 語を作成します。
    ///
    /// # 引数
    ///
    /// * `word` - 表層形
    /// * `nature` - 品詞
    /// * `offset` - 文頭からの文字位置（0始まり）
    pub fn new<S>(word: S, nature: Nature, offset: usize) -> Self
    where
        S: Into<String>,
    {
        let word = word.into();
        Self {
            len_char: word.chars().count(),
            word,
            nature,
            offset,
        }
    }

    pub(crate) fn from_vertex(vertex: &Vertex, offset: usize) -> Self {
        Self {
            word: vertex.surface().to_string(),
            nature: vertex.guess_nature(),
            offset,
            len_char: vertex.len_char(),
        }
    }

    /// 表層形を返します。
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 品詞を返します。
    #[inline(always)]
    pub const fn nature(&self) -> Nature {
        self.nature
    }

    /// 文頭からの文字位置を返します。
    #[inline(always)]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// 文字数を返します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.len_char
    }

    /// 文字単位の位置範囲を返します。
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        self.offset..self.offset + self.len_char
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.nature)
    }
}
