//! 品詞（詞性）タグの定義
//!
//! 分詞結果や辞書の属性に付与される品詞タグを定義します。
//! タグの文字列表現は中国語コーパスで広く使われる `n`, `nr`, `m` などの略号に従います。

use std::fmt;
use std::str::FromStr;

use crate::errors::CiwangError;

/// 品詞タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nature {
    /// 名詞
    N,
    /// 人名
    Nr,
    /// 音訳人名
    Nrf,
    /// 地名
    Ns,
    /// 機関名
    Nt,
    /// その他の固有名詞
    Nz,
    /// 英字列・英数字混在の文字列
    Nx,
    /// 数詞
    M,
    /// 量詞
    Q,
    /// 時間詞
    T,
    /// 句読点
    W,
    /// 動詞
    V,
    /// 形容詞
    A,
    /// 副詞
    D,
    /// 介詞
    P,
    /// 連詞
    C,
    /// 助詞
    U,
    /// 代詞
    R,
    /// 文字列
    X,
    /// 文頭の番兵
    Begin,
    /// 文末の番兵
    End,
}

impl Nature {
    /// タグの文字列表現を返します。
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Nr => "nr",
            Self::Nrf => "nrf",
            Self::Ns => "ns",
            Self::Nt => "nt",
            Self::Nz => "nz",
            Self::Nx => "nx",
            Self::M => "m",
            Self::Q => "q",
            Self::T => "t",
            Self::W => "w",
            Self::V => "v",
            Self::A => "a",
            Self::D => "d",
            Self::P => "p",
            Self::C => "c",
            Self::U => "u",
            Self::R => "r",
            Self::X => "x",
            Self::Begin => "begin",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Nature {
    type Err = CiwangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nature = match s {
            "n" => Self::N,
            "nr" => Self::Nr,
            "nrf" => Self::Nrf,
            "ns" => Self::Ns,
            "nt" => Self::Nt,
            "nz" => Self::Nz,
            "nx" => Self::Nx,
            "m" => Self::M,
            "q" => Self::Q,
            "t" => Self::T,
            "w" => Self::W,
            "v" => Self::V,
            "a" => Self::A,
            "d" => Self::D,
            "p" => Self::P,
            "c" => Self::C,
            "u" => Self::U,
            "r" => Self::R,
            "x" => Self::X,
            "begin" => Self::Begin,
            "end" => Self::End,
            _ => {
                return Err(CiwangError::invalid_argument(
                    "nature",
                    format!("unknown tag: {s}"),
                ))
            }
        };
        Ok(nature)
    }
}
