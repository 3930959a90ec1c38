//! 粗分結果に対する規則ベースの書き換え
//!
//! デコーダが返した粗いパスを、詞網へ戻す前に4つの規則で修正します。
//! 各規則はパスを先頭から1度だけ走査し、隣接する2頂点（現在と次）を見て
//! 結合・分割・品詞の確定を行います。走査中に要素を挿入・削除する代わりに、
//! 各規則は新しいベクタを組み立てて返します。

use crate::nature::Nature;
use crate::segmenter::vertex::Vertex;
use crate::utils::{is_all_chinese_num, is_all_num, is_year_time};

/// 句読点として扱うダッシュ・ハイフン
const DASHES: [&str; 3] = ["－－", "—", "-"];
/// 数詞に続くと時間詞になる語
const DATE_UNITS: [&str; 6] = ["月", "日", "时", "分", "秒", "月份"];
/// 数詞の末尾に付く区切り記号
const TRAILING_SEPARATORS: &str = "∶·．／./";

/// 4つの規則を定められた順に適用します。
///
/// 1. 連続する数詞の結合
/// 2. ダッシュの品詞の修正
/// 3. 「数-数」形式の語の分割
/// 4. 年月日・時刻の結合と数詞の確定
pub fn fix_by_rules(path: Vec<Vertex>) -> Vec<Vertex> {
    let path = merge_continuous_numbers(path);
    trace_path("merge_continuous_numbers", &path);
    let path = change_delimiter_nature(path);
    trace_path("change_delimiter_nature", &path);
    let path = split_middle_hyphen(path);
    trace_path("split_middle_hyphen", &path);
    let path = check_date_elements(path);
    trace_path("check_date_elements", &path);
    path
}

/// 表層形が数詞（アラビア数字または漢数字）だけからなるかどうか
#[inline(always)]
fn is_numeral(surface: &str) -> bool {
    is_all_num(surface) || is_all_chinese_num(surface)
}

/// 隣接する数詞を1つの数詞にまとめます。
///
/// 結合結果はさらに次の数詞とも比較されるため、何個連続していても1つになります。
pub fn merge_continuous_numbers(path: Vec<Vertex>) -> Vec<Vertex> {
    if path.len() < 2 {
        return path;
    }
    let mut fixed: Vec<Vertex> = Vec::with_capacity(path.len());
    for next in path {
        if let Some(current) = fixed.last_mut() {
            if is_numeral(current.surface()) && is_numeral(next.surface()) {
                let merged = format!("{}{}", current.surface(), next.surface());
                *current = Vertex::number(merged);
                continue;
            }
        }
        fixed.push(next);
    }
    fixed
}

/// ダッシュ・ハイフンの品詞を句読点として確定します。
///
/// 後の規則や辞書による上書きを許すため、確定は非強制です。
pub fn change_delimiter_nature(mut path: Vec<Vertex>) -> Vec<Vertex> {
    if path.len() < 2 {
        return path;
    }
    for vertex in path.iter_mut() {
        if DASHES.contains(&vertex.surface()) {
            vertex.confirm_nature(Nature::W, false);
        }
    }
    path
}

/// 英数字混在の語が「数-数」の形で量詞・名詞の前に現れた場合に分割します。
///
/// 例えば `3-4 / 月` は `3 / - / 4 / 月` になります。分割は最初のハイフンで
/// 高々2つに行います。
pub fn split_middle_hyphen(path: Vec<Vertex>) -> Vec<Vertex> {
    if path.len() < 2 {
        return path;
    }
    let mut fixed = Vec::with_capacity(path.len() + 2);
    let mut iter = path.into_iter().peekable();
    while let Some(current) = iter.next() {
        if let Some(next) = iter.peek() {
            if let Some((left, right)) = split_digits(&current, next) {
                fixed.push(Vertex::number(left));
                fixed.push(Vertex::punctuation("-"));
                fixed.push(Vertex::number(right));
                continue;
            }
        }
        fixed.push(current);
    }
    fixed
}

fn split_digits<'v>(current: &'v Vertex, next: &Vertex) -> Option<(&'v str, &'v str)> {
    if current.nature() != Some(Nature::Nx) {
        return None;
    }
    if !next.has_nature(Nature::Q) && !next.has_nature(Nature::N) {
        return None;
    }
    let (left, right) = current.surface().split_once('-')?;
    (is_all_num(left) && is_all_num(right)).then_some((left, right))
}

/// 数詞とそれに続く語から、時間詞の結合と数詞の確定を行います。
///
/// 数詞の直後の語によって次のように扱います。
///
/// - `月日时分秒` のいずれか1文字、または `月份` なら結合して時間詞にする
/// - `年` なら、数詞が年として妥当な場合に結合して時間詞にし、そうでなければ
///   数詞として非強制に確定する
/// - それ以外で、数詞が `点` で終わるなら時間詞として強制的に確定する
/// - 数詞の末尾が区切り記号でなければ数詞として強制的に確定する
/// - 末尾が区切り記号で2文字以上なら、区切り記号を句読点として切り離す
pub fn check_date_elements(path: Vec<Vertex>) -> Vec<Vertex> {
    if path.len() < 2 {
        return path;
    }
    let mut fixed = Vec::with_capacity(path.len() + 1);
    let mut iter = path.into_iter().peekable();
    while let Some(mut current) = iter.next() {
        let Some(next) = iter.peek() else {
            fixed.push(current);
            break;
        };
        if !is_numeral(current.surface()) {
            fixed.push(current);
            continue;
        }

        let next_word = next.surface();
        if DATE_UNITS.contains(&next_word)
            || (next_word == "年" && is_year_time(current.surface()))
        {
            let merged = format!("{}{}", current.surface(), next_word);
            iter.next();
            fixed.push(Vertex::time(merged));
            continue;
        }
        if next_word == "年" {
            current.confirm_nature(Nature::M, false);
            fixed.push(current);
            continue;
        }

        if current.surface().ends_with('点') {
            current.confirm_nature(Nature::T, true);
            fixed.push(current);
            continue;
        }

        let mut chars = current.surface().chars();
        let last = chars.next_back();
        match last {
            Some(c) if TRAILING_SEPARATORS.contains(c) => {
                let rest = chars.as_str();
                if rest.is_empty() {
                    fixed.push(current);
                } else {
                    let number = Vertex::number(rest);
                    fixed.push(number);
                    fixed.push(Vertex::punctuation(c.to_string()));
                }
            }
            _ => {
                current.confirm_nature(Nature::M, true);
                fixed.push(current);
            }
        }
    }
    fixed
}

fn trace_path(rule: &str, path: &[Vertex]) {
    if log::log_enabled!(log::Level::Trace) {
        let rendered: Vec<String> = path.iter().map(|v| v.to_string()).collect();
        log::trace!("[ciwang] {rule}: {}", rendered.join(" "));
    }
}
