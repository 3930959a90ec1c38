//! 音訳人名の認識
//!
//! 粗分結果のパスを1度だけ走査し、音訳人名の断片が2つ以上連続する区間を
//! 1つの人名頂点にまとめて最適詞網へ挿入します。

use crate::dictionary::WordSearch;
use crate::nature::Nature;
use crate::segmenter::lattice::Lattice;
use crate::segmenter::vertex::{Vertex, SYNTHESIZED_WEIGHT};

/// 音訳人名の断片を蓄積する認識器
///
/// 状態は呼び出し側が所有し、[`TranslatedNameRecognizer::recognize`] の開始時に
/// リセットされます。
#[derive(Debug, Default, Clone)]
pub struct TranslatedNameRecognizer {
    buffer: String,
    fragments: usize,
    anchor: usize,
}

impl TranslatedNameRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 蓄積中の状態を破棄します。
    #[inline(always)]
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.fragments = 0;
        self.anchor = 0;
    }

    /// パス上の音訳人名を認識し、合成した頂点を `optimum` に挿入します。
    ///
    /// # 引数
    ///
    /// * `path` - 両端に番兵を持つ粗分結果
    /// * `optimum` - 粗分結果から作られた詞網
    /// * `full` - 同じ文の全詞網。挿入時の接続の補修に使います。
    /// * `dict` - 音訳人名の断片の辞書
    ///
    /// # 戻り値
    ///
    /// 挿入した人名頂点の数
    pub fn recognize(
        &mut self,
        path: &[Vertex],
        optimum: &mut Lattice,
        full: &Lattice,
        dict: Option<&dyn WordSearch>,
    ) -> usize {
        self.reset();
        let mut inserted = 0;
        let mut line = 1;
        for vertex in path.iter().filter(|v| !v.is_sentinel()) {
            let is_fragment = Self::is_fragment(vertex, dict);
            if self.fragments > 0 {
                if is_fragment {
                    self.buffer.push_str(vertex.surface());
                    self.fragments += 1;
                } else {
                    inserted += self.flush(optimum, full);
                }
            } else if is_fragment {
                self.buffer.push_str(vertex.surface());
                self.fragments = 1;
                self.anchor = line;
            }
            line += vertex.len_char();
        }
        if self.fragments > 0 {
            inserted += self.flush(optimum, full);
        }
        inserted
    }

    fn is_fragment(vertex: &Vertex, dict: Option<&dyn WordSearch>) -> bool {
        vertex.guess_nature() == Nature::Nrf
            || dict.is_some_and(|d| d.contains(vertex.surface()))
    }

    fn flush(&mut self, optimum: &mut Lattice, full: &Lattice) -> usize {
        let mut inserted = 0;
        if self.fragments > 1 {
            log::debug!("[ciwang] translated name recognized: {}", self.buffer);
            let name = Vertex::translated_person(self.buffer.as_str(), SYNTHESIZED_WEIGHT);
            if optimum.insert(self.anchor, name, full) {
                inserted = 1;
            }
        }
        self.reset();
        inserted
    }
}
