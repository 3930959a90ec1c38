//! パスから分詞結果への変換
use crate::errors::{CiwangError, Result};
use crate::segmenter::lattice::Lattice;
use crate::segmenter::vertex::Vertex;
use crate::term::Term;

/// 両端の番兵を検査し、内側の頂点を返します。
fn content(path: &[Vertex]) -> Result<&[Vertex]> {
    match path {
        [first, inner @ .., last] if first.is_sentinel() && last.is_sentinel() => Ok(inner),
        _ => Err(CiwangError::MalformedPath { len: path.len() }),
    }
}

/// デコード済みのパスを語の列に変換します。
///
/// 各語の位置は先行する語の文字数の累積和です。
///
/// # エラー
///
/// パスが2頂点に満たない場合、または両端が番兵でない場合、
/// [`CiwangError::MalformedPath`]が返されます。
pub fn convert(path: &[Vertex]) -> Result<Vec<Term>> {
    let inner = content(path)?;
    let mut terms = Vec::with_capacity(inner.len());
    let mut offset = 0;
    for vertex in inner {
        terms.push(Term::from_vertex(vertex, offset));
        offset += vertex.len_char();
    }
    Ok(terms)
}

/// 索引用にパスを語の列に変換します。
///
/// 3文字以上の語については、その語の範囲内の各行から始まる全詞網上の2文字以上の
/// 頂点を、語自身を除いて続けて出力します。パスは読むだけで変更しません。
///
/// # 引数
///
/// * `path` - デコード済みのパス
/// * `full` - 同じ文の全詞網
///
/// # エラー
///
/// [`convert`]と同じ条件で[`CiwangError::MalformedPath`]が返されます。
pub fn convert_for_index_mode(path: &[Vertex], full: &Lattice) -> Result<Vec<Term>> {
    let inner = content(path)?;
    let mut terms = Vec::with_capacity(inner.len());
    let mut line = 1;
    for vertex in inner {
        let len = vertex.len_char();
        terms.push(Term::from_vertex(vertex, line - 1));
        if len > 2 {
            for cur_line in line..line + len {
                for small in full.row(cur_line) {
                    let is_main = cur_line == line && small.len_char() == len;
                    if small.len_char() > 1 && !is_main {
                        terms.push(Term::from_vertex(small, cur_line - 1));
                    }
                }
            }
        }
        line += len;
    }
    Ok(terms)
}
