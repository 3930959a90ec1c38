//! テスト用ユーティリティ
//!
//! テストコードで使用する便利なマクロやデコーダを提供します。

use crate::segmenter::lattice::Lattice;
use crate::segmenter::vertex::Vertex;
use crate::segmenter::Decoder;

macro_rules! lexicon {
    ( $($w:expr => $n:expr),* $(,)? ) => {
        $crate::dictionary::Lexicon::from_records([
            $( ($w, $crate::dictionary::Attribute::new($n, 100)), )*
        ])
        .unwrap()
    };
}

pub(crate) use lexicon;

/// 各行で最も長い頂点を選ぶ決定的なデコーダ
///
/// 同じ長さの頂点が複数ある場合は重みの大きい方を選びます。途中で空の行に
/// 行き当たった場合はパスを返しません。
pub(crate) struct LongestMatch;

impl Decoder for LongestMatch {
    fn decode(&self, lattice: &Lattice) -> Vec<Vec<Vertex>> {
        let end_row = lattice.len_char() + 1;
        let mut path = vec![lattice.begin().clone()];
        let mut row = 1;
        while row < end_row {
            let best = lattice
                .row(row)
                .iter()
                .filter(|v| row + v.len_char() <= end_row)
                .max_by_key(|v| (v.len_char(), v.weight()));
            let Some(best) = best else {
                return vec![];
            };
            row += best.len_char();
            path.push(best.clone());
        }
        path.push(lattice.end().clone());
        vec![path]
    }
}

/// 常にパスを返さないデコーダ
pub(crate) struct NoPath;

impl Decoder for NoPath {
    fn decode(&self, _lattice: &Lattice) -> Vec<Vec<Vertex>> {
        vec![]
    }
}
