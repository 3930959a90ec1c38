//! 詞網の頂点
//!
//! 頂点は値として扱います。複数のパスや行が同じ語を持つ場合でもそれぞれが独立した
//! コピーを保持するため、あるパス上で品詞を確定しても他のパスには影響しません。

use std::fmt;
use std::sync::Arc;

use crate::atom::AtomToken;
use crate::dictionary::{Attribute, LexMatch};
use crate::nature::Nature;

/// 数を表すプレースホルダ
pub const TAG_NUMBER: &str = "未##数";
/// 時間を表すプレースホルダ
pub const TAG_TIME: &str = "未##时";
/// 英字列を表すプレースホルダ
pub const TAG_CLUSTER: &str = "未##串";
/// 人名を表すプレースホルダ
pub const TAG_PEOPLE: &str = "未##人";
/// 文頭を表すプレースホルダ
pub const TAG_BEGIN: &str = "始##始";
/// 文末を表すプレースホルダ
pub const TAG_END: &str = "末##末";

/// 規則によって合成された頂点の重み
pub const SYNTHESIZED_WEIGHT: u32 = 1000;
/// 原子から作られた頂点の重み
pub const ATOM_WEIGHT: u32 = 10000;

/// 頂点の品詞の確定状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    /// 未確定。品詞は辞書属性から推定されます。
    Guessed,
    /// 確定済み。後続の規則による上書きを受け付けます。
    Confirmed(Nature),
    /// 確定済み。以降の上書きを受け付けません。
    Locked(Nature),
}

/// 詞網の頂点
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    surface: String,
    word: String,
    len_char: usize,
    tag: TagState,
    attribute: Option<Arc<Attribute>>,
    weight: u32,
}

impl Vertex {
    /// 辞書の属性を持つ頂点を作成します。
    pub fn new<S>(surface: S, attribute: Option<Arc<Attribute>>) -> Self
    where
        S: Into<String>,
    {
        let surface = surface.into();
        Self::with_word(surface.clone(), surface, attribute)
    }

    /// 辞書上の等価語を指定して頂点を作成します。
    pub fn with_word<W, S>(word: W, surface: S, attribute: Option<Arc<Attribute>>) -> Self
    where
        W: Into<String>,
        S: Into<String>,
    {
        let surface = surface.into();
        let weight = attribute.as_ref().map_or(0, |a| a.total_frequency());
        Self {
            len_char: surface.chars().count(),
            surface,
            word: word.into(),
            tag: TagState::Guessed,
            attribute,
            weight,
        }
    }

    fn synthesized<S>(word: &str, surface: S, nature: Nature, weight: u32) -> Self
    where
        S: Into<String>,
    {
        let mut v = Self::with_word(word, surface, Some(Arc::new(Attribute::new(nature, weight))));
        v.weight = weight;
        v
    }

    /// 辞書検索の結果から頂点を作成します。
    pub fn from_match(chars: &[char], m: &LexMatch) -> Self {
        let surface: String = chars[m.begin..m.end].iter().collect();
        Self::new(surface, Some(Arc::clone(&m.attribute)))
    }

    /// 原子から頂点を作成します。
    pub fn from_atom(atom: &AtomToken<'_>) -> Self {
        let surface = atom.surface();
        let word = atom.placeholder().map_or_else(|| surface.clone(), str::to_string);
        Self::synthesized(&word, surface, atom.nature(), ATOM_WEIGHT)
    }

    /// 数詞の頂点を作成します。
    pub fn number<S: Into<String>>(surface: S) -> Self {
        Self::synthesized(TAG_NUMBER, surface, Nature::M, SYNTHESIZED_WEIGHT)
    }

    /// 時間詞の頂点を作成します。
    pub fn time<S: Into<String>>(surface: S) -> Self {
        Self::synthesized(TAG_TIME, surface, Nature::T, SYNTHESIZED_WEIGHT)
    }

    /// 句読点の頂点を作成します。
    pub fn punctuation<S: Into<String>>(surface: S) -> Self {
        let surface = surface.into();
        let word = surface.clone();
        Self::synthesized(&word, surface, Nature::W, SYNTHESIZED_WEIGHT)
    }

    /// 音訳人名の頂点を作成します。
    ///
    /// `weight` は再デコード時にこの頂点を優先させるための重みです。
    pub fn translated_person<S: Into<String>>(surface: S, weight: u32) -> Self {
        Self::synthesized(TAG_PEOPLE, surface, Nature::Nrf, weight)
    }

    /// 文頭の番兵を作成します。
    pub fn begin() -> Self {
        Self::sentinel(TAG_BEGIN, Nature::Begin)
    }

    /// 文末の番兵を作成します。
    pub fn end() -> Self {
        Self::sentinel(TAG_END, Nature::End)
    }

    fn sentinel(word: &str, nature: Nature) -> Self {
        Self {
            surface: String::new(),
            word: word.to_string(),
            len_char: 0,
            tag: TagState::Locked(nature),
            attribute: None,
            weight: 0,
        }
    }

    /// 表層形を返します。
    #[inline(always)]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// 辞書上の等価語を返します。
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// 表層形の文字数を返します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.len_char
    }

    #[inline(always)]
    pub const fn tag(&self) -> TagState {
        self.tag
    }

    #[inline(always)]
    pub fn attribute(&self) -> Option<&Attribute> {
        self.attribute.as_deref()
    }

    /// 頂点の重みを返します。
    #[inline(always)]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// 文頭または文末の番兵かどうかを返します。
    #[inline(always)]
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self.tag,
            TagState::Locked(Nature::Begin) | TagState::Locked(Nature::End)
        )
    }

    /// 一意に定まっている品詞を返します。
    ///
    /// 確定済みの品詞、または属性に品詞が1つしかない場合はその品詞です。
    pub fn nature(&self) -> Option<Nature> {
        match self.tag {
            TagState::Confirmed(n) | TagState::Locked(n) => Some(n),
            TagState::Guessed => self.attribute.as_ref().and_then(|a| a.unique_nature()),
        }
    }

    /// 最も可能性の高い品詞を返します。
    pub fn guess_nature(&self) -> Nature {
        match self.tag {
            TagState::Confirmed(n) | TagState::Locked(n) => n,
            TagState::Guessed => self
                .attribute
                .as_ref()
                .map_or(Nature::Nz, |a| a.first_nature()),
        }
    }

    /// 頂点が指定された品詞を取りうるかどうかを返します。
    pub fn has_nature(&self, nature: Nature) -> bool {
        match self.tag {
            TagState::Confirmed(n) | TagState::Locked(n) => n == nature,
            TagState::Guessed => self
                .attribute
                .as_ref()
                .is_some_and(|a| a.frequency(nature) > 0),
        }
    }

    /// 品詞を確定します。
    ///
    /// `authoritative` が`true`の場合、以降の確定を受け付けなくなります。このとき
    /// 品詞が数詞か時間詞であれば、語のキーも[`TAG_NUMBER`]か[`TAG_TIME`]に
    /// 置き換えます。表層形は変わりません。
    ///
    /// # 戻り値
    ///
    /// 品詞を書き換えた場合は`true`、上書きが禁止されていた場合は`false`
    pub fn confirm_nature(&mut self, nature: Nature, authoritative: bool) -> bool {
        if let TagState::Locked(_) = self.tag {
            return false;
        }
        if authoritative {
            match nature {
                Nature::M => self.word = TAG_NUMBER.to_string(),
                Nature::T => self.word = TAG_TIME.to_string(),
                _ => {}
            }
            self.tag = TagState::Locked(nature);
        } else {
            self.tag = TagState::Confirmed(nature);
        }
        true
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.surface, self.guess_nature())
    }
}
