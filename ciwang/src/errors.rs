//! エラー型の定義
//!
//! このモジュールは、ciwangで使用されるすべてのエラー型を定義します。
//! ここに現れるエラーはいずれも呼び出し側の契約違反を表し、再試行の対象にはなりません。

use std::error::Error;
use std::fmt;

/// ciwang専用のResult型
///
/// エラー型としてデフォルトで[`CiwangError`]を使用します。
pub type Result<T, E = CiwangError> = std::result::Result<T, E>;

/// ciwangのエラー型
#[derive(Debug, thiserror::Error)]
pub enum CiwangError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 原子分割に渡された範囲が無効
    ///
    /// `end < start` の場合、または `end` がバッファ長を超える場合に発生します。
    #[error("InvalidRange: start={start}, end={end}")]
    InvalidRange {
        /// 開始位置（文字単位、含む）
        start: usize,
        /// 終了位置（文字単位、含まない）
        end: usize,
    },

    /// パスの形式が不正
    ///
    /// 文頭・文末の番兵を含めて2要素に満たないパスが変換に渡された場合に発生します。
    /// 上流のラティスまたはデコーダの不具合を示します。
    #[error("MalformedPath: a path must hold at least the two sentinels, but got {len} vertices")]
    MalformedPath {
        /// 受け取ったパスの頂点数
        len: usize,
    },

    /// 無効な状態エラー
    ///
    /// [`InvalidStateError`]のエラーバリアント。
    #[error(transparent)]
    InvalidState(InvalidStateError),

    /// 整数変換エラー
    #[error(transparent)]
    TryFromInt(#[from] std::num::TryFromIntError),
}

impl CiwangError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効な状態エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    /// * `cause` - エラーの原因
    pub(crate) fn invalid_state<S, M>(msg: S, cause: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Self::InvalidState(InvalidStateError {
            msg: msg.into(),
            cause: cause.into(),
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 状態が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidStateError {
    /// エラーメッセージ
    pub(crate) msg: String,

    /// エラーの根本原因
    pub(crate) cause: String,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidStateError: {}: {}", self.msg, self.cause)
    }
}

impl Error for InvalidStateError {}
