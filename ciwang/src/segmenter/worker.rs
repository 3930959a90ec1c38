//! 分詞処理のためのルーチンを提供するモジュール。
//!
//! ワーカーは文、全詞網、最適詞網、音訳人名の認識器を保持し、文ごとに再利用する
//! ことで不要なメモリ割り当てを避けます。
use crate::errors::{CiwangError, Result};
use crate::recognition::TranslatedNameRecognizer;
use crate::segmenter::convert::{convert, convert_for_index_mode};
use crate::segmenter::lattice::Lattice;
use crate::segmenter::rewrite::fix_by_rules;
use crate::segmenter::vertex::Vertex;
use crate::segmenter::Segmenter;
use crate::sentence::Sentence;
use crate::term::Term;

/// 分詞処理のためのルーチンを提供する構造体。
///
/// # 例
///
/// ```ignore
/// let mut worker = segmenter.new_worker();
/// worker.reset_sentence("他见了克林顿");
/// worker.segment()?;
/// for term in worker.term_iter() {
///     println!("{}", term);
/// }
/// ```
pub struct Worker {
    pub(crate) segmenter: Segmenter,
    pub(crate) sent: Sentence,
    pub(crate) full: Lattice,
    pub(crate) optimum: Lattice,
    pub(crate) recognizer: TranslatedNameRecognizer,
    pub(crate) terms: Vec<Term>,
}

impl Worker {
    /// 新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    /// * `segmenter` - 使用する分詞器
    pub(crate) fn new(segmenter: Segmenter) -> Self {
        Self {
            segmenter,
            sent: Sentence::new(),
            full: Lattice::default(),
            optimum: Lattice::default(),
            recognizer: TranslatedNameRecognizer::new(),
            terms: vec![],
        }
    }

    /// 分詞する入力文をリセットします。
    ///
    /// # 引数
    ///
    /// * `input` - 分詞する入力文字列
    pub fn reset_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.sent.clear();
        self.terms.clear();
        self.recognizer.reset();
        let input = input.as_ref();
        if !input.is_empty() {
            self.sent.set_sentence(input);
        }
    }

    /// 設定された入力文を分詞します。
    ///
    /// 結果は`term_iter()`や`term()`で参照できます。空の文が設定されている場合は
    /// デコーダを呼ばずに何も行いません。
    ///
    /// # エラー
    ///
    /// デコーダがパスを返さなかった場合は[`CiwangError::InvalidState`]、
    /// パスの両端が番兵でない場合は[`CiwangError::MalformedPath`]が返されます。
    pub fn segment(&mut self) -> Result<()> {
        self.terms.clear();
        if self.sent.chars().is_empty() {
            return Ok(());
        }
        let len_char = self.sent.len_char();
        self.segmenter.build_lattice(&self.sent, &mut self.full)?;

        let coarse = self.segmenter.decoder().decode(&self.full);
        if coarse.is_empty() {
            return Err(no_path("full lattice"));
        }
        self.optimum.reset(len_char);
        for path in coarse {
            let path = fix_by_rules(path);
            self.optimum.add_path(&path);
        }

        let mut path = self.decode_optimum()?;
        if self.segmenter.config().translated_name_recognize {
            let inserted = self.recognizer.recognize(
                &path,
                &mut self.optimum,
                &self.full,
                self.segmenter.translated_dictionary(),
            );
            if inserted > 0 {
                path = self.decode_optimum()?;
            }
        }

        self.terms = if self.segmenter.config().index_mode {
            convert_for_index_mode(&path, &self.full)?
        } else {
            convert(&path)?
        };
        Ok(())
    }

    fn decode_optimum(&self) -> Result<Vec<Vertex>> {
        self.segmenter
            .decoder()
            .decode(&self.optimum)
            .into_iter()
            .next()
            .ok_or_else(|| no_path("optimum lattice"))
    }

    /// 分詞結果の語数を返します。
    #[inline(always)]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// `i`番目の語を返します。
    ///
    /// # 引数
    ///
    /// * `i` - 語のインデックス（0から始まる）
    #[inline(always)]
    pub fn term(&self, i: usize) -> &Term {
        &self.terms[i]
    }

    /// 分詞結果の語をすべて返します。
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// 分詞結果のイテレータを作成します。
    pub fn term_iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// 直前に構築した全詞網を返します。
    #[inline(always)]
    pub fn full_lattice(&self) -> &Lattice {
        &self.full
    }

    /// 直前に構築した最適詞網を返します。
    #[inline(always)]
    pub fn optimum_lattice(&self) -> &Lattice {
        &self.optimum
    }
}

fn no_path(lattice: &str) -> CiwangError {
    CiwangError::invalid_state("decoder returned no path", format!("empty result for the {lattice}"))
}
