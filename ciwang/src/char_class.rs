//! 文字種の判定
//!
//! 1文字を粗い字句クラスへ写像します。原子分割はこのクラスの連続性だけを見て
//! 文字列を切り分けるため、ここでの判定が未登録語の最小単位を決めます。

/// 漢数字として扱う文字
pub const CHINESE_NUMERALS: &str = "零○〇一二两三四五六七八九十廿百千万亿壹贰叁肆伍陆柒捌玖拾佰仟";

/// 文字の字句クラス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// 漢字
    Ideograph,
    /// 漢数字
    ChineseNumeral,
    /// 連続して1トークンにまとめられる英字・記号
    LetterRunSeed,
    /// 全角英字。判定の最終段で [`CharClass::LetterRunSeed`] に読み替えられます。
    Letter,
    /// 数字
    Digit,
    /// 区切り記号
    Delimiter,
    /// ローマ数字や丸数字などの番号記号
    IndexMarker,
    /// その他
    Other,
}

impl CharClass {
    /// 原子分割で連続する同種の文字をまとめるクラスかどうかを返します。
    #[inline(always)]
    pub const fn is_groupable(&self) -> bool {
        matches!(self, Self::LetterRunSeed | Self::Digit)
    }
}

/// 先読みを考慮しない文字の基本クラスを返します。
pub fn base_class(c: char) -> CharClass {
    if CHINESE_NUMERALS.contains(c) {
        return CharClass::ChineseNumeral;
    }
    if c.is_ascii() {
        return match c {
            '\u{0}'..='\u{1f}' => CharClass::Delimiter,
            ' ' => CharClass::Other,
            '*' | '"' | '!' | ',' | '.' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '+' | '='
            | '/' | '\\' | ';' | ':' | '|' => CharClass::Delimiter,
            '0'..='9' => CharClass::Digit,
            _ => CharClass::LetterRunSeed,
        };
    }
    match c {
        '\u{FF10}'..='\u{FF19}' => CharClass::Digit,
        '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => CharClass::Letter,
        '\u{2160}'..='\u{217F}' | '\u{2460}'..='\u{249B}' | '\u{3220}'..='\u{3229}' => {
            CharClass::IndexMarker
        }
        '\u{00A7}' | '\u{00A8}' | '\u{00B0}' | '\u{00B1}' | '\u{00B7}' | '\u{00D7}' | '\u{00F7}'
        | '\u{2010}'..='\u{203B}'
        | '\u{2190}'..='\u{22FF}'
        | '\u{2500}'..='\u{26FF}'
        | '\u{3000}'..='\u{303F}'
        | '\u{FE30}'..='\u{FE4F}'
        | '\u{FF01}'..='\u{FF5E}'
        | '\u{FFE0}'..='\u{FFE5}' => CharClass::Delimiter,
        '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}' => {
            CharClass::Ideograph
        }
        _ => CharClass::Other,
    }
}

/// 1文字先読みを使って文字のクラスを判定します。
///
/// 数字が後続する `.` は小数点として数字に含め、全角英字は英字列として扱います。
///
/// # 引数
///
/// * `c` - 判定する文字
/// * `next` - 直後の文字。バッファ末尾では `None`
pub fn classify(c: char, next: Option<char>) -> CharClass {
    let base = base_class(c);
    match (c, next) {
        ('.', Some(n)) if base_class(n) == CharClass::Digit => CharClass::Digit,
        ('.', Some(n)) if n.is_ascii_digit() => CharClass::LetterRunSeed,
        _ if base == CharClass::Letter => CharClass::LetterRunSeed,
        _ => base,
    }
}

/// `chars[start..end]` の各文字のクラスを計算します。
///
/// 先読みは範囲の外であってもバッファ全体から読みます。
pub(crate) fn classify_range(chars: &[char], start: usize, end: usize) -> Vec<CharClass> {
    (start..end)
        .map(|i| classify(chars[i], chars.get(i + 1).copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_classes() {
        assert_eq!(base_class('中'), CharClass::Ideograph);
        assert_eq!(base_class('三'), CharClass::ChineseNumeral);
        assert_eq!(base_class('〇'), CharClass::ChineseNumeral);
        assert_eq!(base_class('7'), CharClass::Digit);
        assert_eq!(base_class('７'), CharClass::Digit);
        assert_eq!(base_class('Ａ'), CharClass::Letter);
        assert_eq!(base_class('a'), CharClass::LetterRunSeed);
        assert_eq!(base_class('-'), CharClass::LetterRunSeed);
        assert_eq!(base_class(','), CharClass::Delimiter);
        assert_eq!(base_class('，'), CharClass::Delimiter);
        assert_eq!(base_class('。'), CharClass::Delimiter);
        assert_eq!(base_class('①'), CharClass::IndexMarker);
        assert_eq!(base_class('Ⅳ'), CharClass::IndexMarker);
        assert_eq!(base_class(' '), CharClass::Other);
        assert_eq!(base_class('α'), CharClass::Other);
    }

    #[test]
    fn test_decimal_point_lookahead() {
        assert_eq!(classify('.', Some('1')), CharClass::Digit);
        assert_eq!(classify('.', Some('１')), CharClass::Digit);
        assert_eq!(classify('.', Some('a')), CharClass::Delimiter);
        assert_eq!(classify('.', None), CharClass::Delimiter);
    }

    #[test]
    fn test_full_width_letter_is_seed() {
        assert_eq!(classify('Ｂ', None), CharClass::LetterRunSeed);
    }

    #[test]
    fn test_lookahead_past_range_end() {
        let chars: Vec<char> = "3.5".chars().collect();
        let classes = classify_range(&chars, 0, 2);
        assert_eq!(classes, vec![CharClass::Digit, CharClass::Digit]);
    }
}
