//! 詞網に基づく分詞器。
//!
//! このモジュールは、辞書検索と原子分割から全詞網を組み立て、デコーダが選んだ
//! 粗分結果を規則で修正し、音訳人名を認識したうえで最終的な語の列を得るまでの
//! 処理をまとめます。
//!
//! # 主要な構造体
//!
//! - [`Segmenter`]: 辞書・デコーダ・設定を保持する分詞器
//! - [`Worker`]: 分詞器のワーカー。文ごとの詞網と結果を保持する
//!
//! # 例
//!
//! ```ignore
//! let segmenter = Segmenter::new(core_lexicon, decoder)
//!     .translated_name_recognize(true)
//!     .index_mode(false);
//! let mut worker = segmenter.new_worker();
//!
//! worker.reset_sentence("他见了克林顿");
//! worker.segment()?;
//!
//! for term in worker.term_iter() {
//!     println!("{term}");
//! }
//! ```
pub mod convert;
pub mod lattice;
pub mod rewrite;
pub mod vertex;
pub mod worker;

use std::sync::Arc;

use crate::dictionary::{LexMatch, WordSearch};
use crate::errors::{CiwangError, Result};
use crate::sentence::Sentence;
use crate::segmenter::lattice::Lattice;
use crate::segmenter::vertex::Vertex;
use crate::segmenter::worker::Worker;

/// 共有される辞書
pub type SharedWordSearch = Arc<dyn WordSearch + Send + Sync>;

/// 詞網から最良のパスを選ぶデコーダ
///
/// 統計モデルによる経路探索は分詞器の外側に置かれ、このトレイトを通じて
/// 呼び出されます。
pub trait Decoder {
    /// 詞網上のパスを良い順に返します。
    ///
    /// 各パスは文頭の番兵で始まり、文末の番兵で終わり、文全体を隙間なく覆います。
    fn decode(&self, lattice: &Lattice) -> Vec<Vec<Vertex>>;
}

/// 分詞の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentConfig {
    /// ユーザー辞書の語を全詞網に加えるかどうか
    pub use_custom_dictionary: bool,
    /// 音訳人名を認識するかどうか
    pub translated_name_recognize: bool,
    /// 索引用に長い語の部分語も出力するかどうか
    pub index_mode: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            use_custom_dictionary: false,
            translated_name_recognize: true,
            index_mode: false,
        }
    }
}

/// 詞網に基づく分詞器
///
/// 辞書とデコーダは[`Arc`]で共有されるため、複製は安価です。スレッドごとに
/// [`Segmenter::new_worker`]でワーカーを作成して使います。
#[derive(Clone)]
pub struct Segmenter {
    core: SharedWordSearch,
    custom: Option<SharedWordSearch>,
    translated: Option<SharedWordSearch>,
    decoder: Arc<dyn Decoder + Send + Sync>,
    config: SegmentConfig,
}

impl Segmenter {
    /// 新しい分詞器を作成します。
    ///
    /// # 引数
    ///
    /// * `core` - コア辞書
    /// * `decoder` - 詞網のデコーダ
    pub fn new<W, D>(core: W, decoder: D) -> Self
    where
        W: WordSearch + Send + Sync + 'static,
        D: Decoder + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(core), Arc::new(decoder))
    }

    /// 共有された辞書とデコーダから新しい分詞器を作成します。
    pub fn from_shared(core: SharedWordSearch, decoder: Arc<dyn Decoder + Send + Sync>) -> Self {
        Self {
            core,
            custom: None,
            translated: None,
            decoder,
            config: SegmentConfig::default(),
        }
    }

    /// ユーザー辞書を設定します。
    ///
    /// 設定しただけでは使われません。[`Segmenter::use_custom_dictionary`]で有効にします。
    pub fn custom_dictionary<W>(mut self, dict: W) -> Self
    where
        W: WordSearch + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(dict));
        self
    }

    /// 音訳人名の断片の辞書を設定します。
    pub fn translated_name_dictionary<W>(mut self, dict: W) -> Self
    where
        W: WordSearch + Send + Sync + 'static,
    {
        self.translated = Some(Arc::new(dict));
        self
    }

    /// ユーザー辞書の語を全詞網に加えるかどうかを設定します。
    ///
    /// ユーザー辞書の語はコア辞書の語を置き換えず、同じ位置の候補として加わります。
    ///
    /// # エラー
    ///
    /// ユーザー辞書が設定されていない状態で有効にしようとした場合、
    /// [`CiwangError`]が返されます。
    pub fn use_custom_dictionary(mut self, yes: bool) -> Result<Self> {
        if yes && self.custom.is_none() {
            return Err(CiwangError::invalid_argument(
                "yes",
                "a custom dictionary must be attached before it is enabled",
            ));
        }
        self.config.use_custom_dictionary = yes;
        Ok(self)
    }

    /// 音訳人名を認識するかどうかを設定します。デフォルトは有効です。
    pub const fn translated_name_recognize(mut self, yes: bool) -> Self {
        self.config.translated_name_recognize = yes;
        self
    }

    /// 索引モードを設定します。デフォルトは無効です。
    pub const fn index_mode(mut self, yes: bool) -> Self {
        self.config.index_mode = yes;
        self
    }

    /// 現在の設定を返します。
    #[inline(always)]
    pub const fn config(&self) -> &SegmentConfig {
        &self.config
    }

    #[inline(always)]
    pub(crate) fn decoder(&self) -> &dyn Decoder {
        self.decoder.as_ref()
    }

    #[inline(always)]
    pub(crate) fn translated_dictionary(&self) -> Option<&dyn WordSearch> {
        self.translated.as_deref().map(|d| d as &dyn WordSearch)
    }

    /// 新しいワーカーを作成します。
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }

    /// 全詞網を構築します。
    ///
    /// コア辞書の語を開始位置の昇順に追加し、どの語にも覆われない区間は原子分割で
    /// 埋めます。ユーザー辞書が有効であれば、その語を既存の頂点に加えます。
    ///
    /// # エラー
    ///
    /// 辞書が文の範囲外の語を返した場合、[`CiwangError`]が返されます。
    pub(crate) fn build_lattice(&self, sent: &Sentence, lattice: &mut Lattice) -> Result<()> {
        let chars = sent.chars();
        let len_char = sent.len_char();
        lattice.reset(len_char);

        let mut p = 0;
        for m in self.core.search(chars) {
            check_match(&m, len_char)?;
            if p < m.begin {
                Self::add_gap(sent, lattice, p, m.begin)?;
            }
            lattice.add(m.begin + 1, Vertex::from_match(chars, &m));
            p = p.max(m.begin + 1);
        }
        if p < len_char {
            Self::add_gap(sent, lattice, p, len_char)?;
        }

        if self.config.use_custom_dictionary {
            if let Some(custom) = &self.custom {
                for m in custom.search(chars) {
                    check_match(&m, len_char)?;
                    lattice.add(m.begin + 1, Vertex::from_match(chars, &m));
                }
            }
        }
        Self::fill_dead_ends(sent, lattice)
    }

    /// 文頭から到達できるのに頂点を持たない行を、次の空でない行まで原子分割で
    /// 埋めます。
    ///
    /// 語の末尾が英字列や数字列の途中にかかると、その直後の行が空のまま残るため、
    /// 行の昇順に到達可能性をたどって補います。
    fn fill_dead_ends(sent: &Sentence, lattice: &mut Lattice) -> Result<()> {
        let end_row = sent.len_char() + 1;
        let mut reachable = vec![false; end_row + 1];
        reachable[1] = true;
        for row in 1..end_row {
            if !reachable[row] {
                continue;
            }
            if lattice.row(row).is_empty() {
                let next = (row + 1..end_row)
                    .find(|&r| !lattice.row(r).is_empty())
                    .unwrap_or(end_row);
                Self::add_gap(sent, lattice, row - 1, next - 1)?;
            }
            for v in lattice.row(row) {
                reachable[row + v.len_char()] = true;
            }
        }
        Ok(())
    }

    fn add_gap(sent: &Sentence, lattice: &mut Lattice, start: usize, end: usize) -> Result<()> {
        let atoms: Vec<_> = sent.atoms(start, end)?.collect();
        if log::log_enabled!(log::Level::Trace) {
            let surfaces: Vec<String> = atoms.iter().map(|a| a.surface()).collect();
            log::trace!("[ciwang] atoms [{start}, {end}): {}", surfaces.join(" "));
        }
        lattice.add_atoms(start + 1, atoms);
        Ok(())
    }
}

fn check_match(m: &LexMatch, len_char: usize) -> Result<()> {
    if m.begin >= m.end || m.end > len_char {
        return Err(CiwangError::invalid_state(
            "dictionary returned a match outside the sentence",
            format!("begin={}, end={}, len_char={len_char}", m.begin, m.end),
        ));
    }
    Ok(())
}
