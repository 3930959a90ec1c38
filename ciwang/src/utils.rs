//! 数・日付表現の判定に使う文字列ユーティリティ
//!
//! 書き換え規則が数詞の連結や年月日の合成を決めるための述語を提供します。

const SIGNS: &str = "±+-＋－—";
const FULL_DIGITS: &str = "０１２３４５６７８９";
const FULL_SEPARATORS: &str = "·∶:，,．.／/";
const HALF_SEPARATORS: &str = ",./:∶·，．／";
const MAGNITUDES: &str = "百千万亿佰仟%％‰";

const CHINESE_NUM_CHARS: &str = "零○〇一二两三四五六七八九十廿百千万亿壹贰叁肆伍陆柒捌玖拾佰仟∶·．／点";
const CHINESE_NUM_PREFIXES: &str = "几数上第";
const CHINESE_NUM_SUFFIXES: &str = "几多余来成倍";

const CHINESE_DIGITS: &str = "零○〇一二三四五六七八九壹贰叁肆伍陆柒捌玖";
const HEAVENLY_STEMS: &str = "甲乙丙丁戊己庚辛壬癸";
const EARTHLY_BRANCHES: &str = "子丑寅卯辰巳午未申酉戌亥";

/// 文字列全体がアラビア数字による数表現かどうかを判定します。
///
/// 先頭の符号、小数点などの区切り1つ、末尾の桁・百分率記号1つを許容します。
/// 全角数字と半角数字はそれぞれ独立に判定されます。
///
/// ```
/// use ciwang::utils::is_all_num;
///
/// assert!(is_all_num("2014"));
/// assert!(is_all_num("3.5"));
/// assert!(is_all_num("１２"));
/// assert!(is_all_num("98%"));
/// assert!(!is_all_num("3-4"));
/// assert!(!is_all_num(""));
/// ```
pub fn is_all_num(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return false;
    }
    let mut i = 0;
    if SIGNS.contains(chars[0]) {
        i += 1;
    }

    i = skip_while_in(&chars, i, FULL_DIGITS);
    if i > 0 && i < chars.len() && FULL_SEPARATORS.contains(chars[i]) {
        i = skip_while_in(&chars, i + 1, FULL_DIGITS);
    }
    if i >= chars.len() {
        return true;
    }

    i = skip_while(&chars, i, |c| c.is_ascii_digit());
    if i > 0 && i < chars.len() && HALF_SEPARATORS.contains(chars[i]) {
        i = skip_while(&chars, i + 1, |c| c.is_ascii_digit());
    }
    if i < chars.len() && MAGNITUDES.contains(chars[i]) {
        i += 1;
    }
    i >= chars.len()
}

/// 文字列全体が漢数字による数表現かどうかを判定します。
///
/// `分之` を含む分数表現と、先頭の概数接頭辞（`几`、`第`など）または
/// 末尾の概数接尾辞（`多`、`余`など）を1つ許容します。
pub fn is_all_chinese_num(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return false;
    }
    let last = chars.len() - 1;
    let mut round = false;
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '分' && chars.get(i + 1) == Some(&'之') {
            i += 2;
            continue;
        }
        let c = chars[i];
        if i == 0 && CHINESE_NUM_PREFIXES.contains(c) {
            round = true;
        } else if i == last && !round && CHINESE_NUM_SUFFIXES.contains(c) {
            round = true;
        } else if !CHINESE_NUM_CHARS.contains(c) {
            return false;
        }
        i += 1;
    }
    true
}

/// 数詞の後ろに `年` が続くとき、その数が年として妥当かどうかを判定します。
///
/// ```
/// use ciwang::utils::is_year_time;
///
/// assert!(is_year_time("2014"));
/// assert!(is_year_time("98"));
/// assert!(is_year_time("二零一四"));
/// assert!(is_year_time("二〇一四"));
/// assert!(!is_year_time("35"));
/// ```
pub fn is_year_time(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    let Some(&first) = chars.first() else {
        return false;
    };

    // 1992年, 98年, 06年
    if s.is_ascii() {
        let first_digit = first.to_digit(10);
        if len == 4 || (len == 2 && matches!(first_digit, Some(0) | Some(5..=9))) {
            return true;
        }
    }
    if is_all_num(s) && (len >= 3 || (len == 2 && "０５６７８９".contains(first))) {
        return true;
    }
    if len >= 2 && count_in(&chars, CHINESE_DIGITS) == len {
        return true;
    }
    // 二仟零二年
    if len == 4 && count_in(&chars, "千仟零○〇") == 2 {
        return true;
    }
    if len == 1 && count_in(&chars, "千仟") == 1 {
        return true;
    }
    len == 2 && HEAVENLY_STEMS.contains(chars[0]) && EARTHLY_BRANCHES.contains(chars[1])
}

fn skip_while_in(chars: &[char], from: usize, set: &str) -> usize {
    skip_while(chars, from, |c| set.contains(c))
}

fn skip_while<F>(chars: &[char], mut i: usize, pred: F) -> usize
where
    F: Fn(char) -> bool,
{
    while i < chars.len() && pred(chars[i]) {
        i += 1;
    }
    i
}

fn count_in(chars: &[char], set: &str) -> usize {
    chars.iter().filter(|&&c| set.contains(c)).count()
}
