//! # ciwang
//!
//! ciwang（词网）は、詞網（ワードネット）に基づく中国語分詞のコア部分の実装です。
//!
//! ## 概要
//!
//! 入力文を文字単位の詞網に展開し、外部のデコーダが選んだ粗分結果を規則で修正し、
//! 音訳人名をまとめたうえで品詞付きの語の列に変換します。
//!
//! ## 主な機能
//!
//! - **原子分割**: 辞書に見つからない区間を漢字・英字列・数字列の単位に分割
//! - **詞網の構築**: コア辞書とユーザー辞書の語を文字位置ごとに配置
//! - **規則による修正**: 数詞の結合、「数-数」の分割、年月日・時刻の合成
//! - **音訳人名の認識**: 連続する音訳断片を1つの人名にまとめて詞網へ挿入
//! - **索引モード**: 長い語の内部にある部分語も出力
//!
//! 経路探索の統計モデルは含みません。[`Decoder`](segmenter::Decoder)を実装して
//! 分詞器に渡します。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ciwang::dictionary::{Attribute, Lexicon};
//! use ciwang::nature::Nature;
//! use ciwang::segmenter::lattice::Lattice;
//! use ciwang::segmenter::vertex::Vertex;
//! use ciwang::segmenter::Decoder;
//! use ciwang::Segmenter;
//!
//! // 各行で最も長い語を選ぶだけのデコーダ
//! struct Greedy;
//!
//! impl Decoder for Greedy {
//!     fn decode(&self, lattice: &Lattice) -> Vec<Vec<Vertex>> {
//!         let mut path = vec![lattice.begin().clone()];
//!         let mut row = 1;
//!         while row <= lattice.len_char() {
//!             let Some(v) = lattice.row(row).iter().max_by_key(|v| v.len_char()) else {
//!                 return vec![];
//!             };
//!             row += v.len_char();
//!             path.push(v.clone());
//!         }
//!         path.push(lattice.end().clone());
//!         vec![path]
//!     }
//! }
//!
//! let core = Lexicon::from_records([
//!     ("他", Attribute::new(Nature::R, 100)),
//!     ("见", Attribute::new(Nature::V, 100)),
//!     ("了", Attribute::new(Nature::U, 100)),
//!     ("克", Attribute::new(Nature::Nrf, 10)),
//!     ("林", Attribute::new(Nature::Nrf, 10)),
//!     ("顿", Attribute::new(Nature::Nrf, 10)),
//! ])?;
//!
//! let segmenter = Segmenter::new(core, Greedy);
//! let mut worker = segmenter.new_worker();
//!
//! worker.reset_sentence("他见了克林顿");
//! worker.segment()?;
//!
//! let terms: Vec<String> = worker.term_iter().map(|t| t.to_string()).collect();
//! assert_eq!(terms, vec!["他/r", "见/v", "了/u", "克林顿/nrf"]);
//! assert_eq!(worker.term(3).offset(), 3);
//! # Ok(())
//! # }
//! ```

/// 原子分割
pub mod atom;

/// 文字種の判定
pub mod char_class;

/// 辞書インターフェースと語彙データ構造
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// 品詞タグ
pub mod nature;

/// 音訳人名の認識
pub mod recognition;

/// 詞網に基づく分詞器の実装
pub mod segmenter;

/// 文の内部表現
pub mod sentence;

/// 分詞結果の語
pub mod term;

/// 数・日付表現の判定
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use dictionary::{Lexicon, WordSearch};
pub use segmenter::{Decoder, Segmenter};
pub use term::Term;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
