// src/config.rs
//
// 探索上限・表示桁数などの調整可能な定数
//
// 循環節の探索上限は大きな分母の表示結果を左右するため、
// 値を推測で変えずに定数として公開し、呼び出しごとに上書きできるようにする。

use serde::{Deserialize, Serialize};

/// 循環しない小数を表示するときの既定の小数桁数
pub const DEFAULT_DECIMAL_PLACES: usize = 15;

/// 循環節の長さ（10 の位数）を探索する上限
/// 例: 1/7 = 0.(142857) の循環節は 6 桁
pub const MAX_CYCLE_LEN: usize = 2000;

/// 循環節の開始位置を探索する上限
pub const MAX_CYCLE_START: usize = 300;

/// 浮動小数点数を分数に変換するときの Farey 探索の分子・分母の上限
pub const FAREY_BOUND: u64 = 10_000_000;

/// simplify の既定の許容誤差
pub const DEFAULT_EPSILON: f64 = 0.001;

/// 小数表記のオプション
///
/// JSON からは camelCase のキーで受け取り、省略したキーは既定値になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecimalFormat {
    /// 循環しない場合に出力する小数桁数の上限
    pub max_places: usize,
    /// 循環節の長さの探索上限。これを超える循環は非循環として表示する
    pub max_cycle_len: usize,
    /// 循環節の開始位置の探索上限
    pub max_cycle_start: usize,
}

impl DecimalFormat {
    pub fn with_max_places(max_places: usize) -> Self {
        DecimalFormat {
            max_places,
            ..Self::default()
        }
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        DecimalFormat {
            max_places: DEFAULT_DECIMAL_PLACES,
            max_cycle_len: MAX_CYCLE_LEN,
            max_cycle_start: MAX_CYCLE_START,
        }
    }
}
