//! 原子分割
//!
//! 辞書に見つからない区間を最小単位（原子）へ分割します。
//! 漢字や記号は1文字ずつ、英字列と数字列は同じクラスが続く限り1つにまとめます。

use std::borrow::Cow;
use std::ops::Range;

use crate::char_class::{self, CharClass};
use crate::errors::{CiwangError, Result};
use crate::nature::Nature;
use crate::segmenter::vertex::{TAG_CLUSTER, TAG_NUMBER};

/// 原子分割で得られる最小単位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomToken<'a> {
    chars: &'a [char],
    start: usize,
    class: CharClass,
}

impl<'a> AtomToken<'a> {
    /// 原子の文字列を返します。
    pub fn surface(&self) -> String {
        self.chars.iter().collect()
    }

    /// 原子を構成する文字を返します。
    #[inline(always)]
    pub const fn chars(&self) -> &'a [char] {
        self.chars
    }

    /// 原子の文字単位の位置範囲を返します。
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        self.start..self.start + self.chars.len()
    }

    /// 原子の文字数を返します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.chars.len()
    }

    /// 原子の字句クラスを返します。
    #[inline(always)]
    pub const fn class(&self) -> CharClass {
        self.class
    }

    /// 原子を頂点にしたときの品詞を返します。
    pub const fn nature(&self) -> Nature {
        match self.class {
            CharClass::Ideograph => Nature::N,
            CharClass::Digit | CharClass::IndexMarker | CharClass::ChineseNumeral => Nature::M,
            CharClass::Delimiter | CharClass::Other => Nature::W,
            CharClass::LetterRunSeed | CharClass::Letter => Nature::Nx,
        }
    }

    /// 原子を頂点にしたときの辞書上の等価語を返します。
    ///
    /// 数と英字列は個々の文字列ではなくプレースホルダで統計を引きます。
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self.nature() {
            Nature::M => Some(TAG_NUMBER),
            Nature::Nx => Some(TAG_CLUSTER),
            _ => None,
        }
    }
}

/// 原子を前から順に1度だけ生成するイテレータ
pub struct AtomIter<'a> {
    chars: &'a [char],
    classes: Cow<'a, [CharClass]>,
    offset: usize,
    pos: usize,
    end: usize,
}

impl<'a> AtomIter<'a> {
    /// `classes` は `chars[offset..end]` に対応するクラス列です。
    pub(crate) fn new(
        chars: &'a [char],
        classes: Cow<'a, [CharClass]>,
        offset: usize,
        end: usize,
    ) -> Self {
        debug_assert_eq!(classes.len(), end - offset);
        Self {
            chars,
            classes,
            offset,
            pos: offset,
            end,
        }
    }

    #[inline(always)]
    fn class_at(&self, pos: usize) -> CharClass {
        self.classes[pos - self.offset]
    }

    fn token(&self, start: usize, end: usize, class: CharClass) -> AtomToken<'a> {
        AtomToken {
            chars: &self.chars[start..end],
            start,
            class,
        }
    }
}

impl<'a> Iterator for AtomIter<'a> {
    type Item = AtomToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let class = self.class_at(self.pos);
        if class.is_groupable() && self.pos < self.end - 1 {
            let begin = self.pos;
            let mut reach_end = true;
            while self.pos < self.end - 1 {
                self.pos += 1;
                if self.class_at(self.pos) != class {
                    reach_end = false;
                    break;
                }
            }
            if reach_end {
                self.pos += 1;
            }
            Some(self.token(begin, self.pos, class))
        } else {
            let token = self.token(self.pos, self.pos + 1, class);
            self.pos += 1;
            Some(token)
        }
    }
}

/// `chars[start..end]` を原子分割します。
///
/// # 引数
///
/// * `chars` - 文全体の文字配列
/// * `start` - 開始位置（含む）
/// * `end` - 終了位置（含まない）
///
/// # エラー
///
/// `end < start` または `end` がバッファ長を超える場合、[`CiwangError::InvalidRange`]
/// が返されます。
pub fn atomize(chars: &[char], start: usize, end: usize) -> Result<AtomIter<'_>> {
    check_range(chars.len(), start, end)?;
    let classes = char_class::classify_range(chars, start, end);
    Ok(AtomIter::new(chars, Cow::Owned(classes), start, end))
}

pub(crate) fn check_range(len: usize, start: usize, end: usize) -> Result<()> {
    if end < start || end > len {
        return Err(CiwangError::InvalidRange { start, end });
    }
    Ok(())
}
