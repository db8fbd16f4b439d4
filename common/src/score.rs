//! コメドジェニックスコアの分類
//!
//! 分類規則:
//! - 値なし / null / 空文字 → `Unknown`
//! - 整数として読んだ値が 1 以下 → `Safe`
//! - 2 → `Moderate`
//! - 3 以上 → `Risky`
//!
//! 数値として読めない文字列（"N/A" 等）は空チェックを通過し、
//! どの比較にも当てはまらず `Risky` に落ちる。既存の表示と合わせるため
//! この挙動はそのまま残している（警告フラグは立たない）。

use crate::types::ScoreValue;

/// 警告扱いになるスコアの下限
pub const WARNING_THRESHOLD: i64 = 3;

/// スコアの表示区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreClass {
    Safe,
    Moderate,
    Risky,
    Unknown,
}

impl ScoreClass {
    /// CSSクラス名
    pub fn as_class(&self) -> &'static str {
        match self {
            ScoreClass::Safe => "score-safe",
            ScoreClass::Moderate => "score-moderate",
            ScoreClass::Risky => "score-risky",
            ScoreClass::Unknown => "score-unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreClass::Safe => "safe",
            ScoreClass::Moderate => "moderate",
            ScoreClass::Risky => "risky",
            ScoreClass::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ScoreClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// スコアを分類する
pub fn classify(score: &ScoreValue) -> ScoreClass {
    match score {
        ScoreValue::Missing => return ScoreClass::Unknown,
        ScoreValue::Text(s) if s.is_empty() => return ScoreClass::Unknown,
        _ => {}
    }

    match parse_int(score) {
        Some(n) if n <= 1 => ScoreClass::Safe,
        Some(n) if n <= 2 => ScoreClass::Moderate,
        _ => ScoreClass::Risky,
    }
}

/// 警告行かどうか（整数として読めて 3 以上）
pub fn is_warning(score: &ScoreValue) -> bool {
    parse_int(score).is_some_and(|n| n >= WARNING_THRESHOLD)
}

/// スコアを整数として読む
///
/// 数値は 0 方向へ切り捨て、文字列は先頭の整数部分だけを読む
/// （"3 (high)" → 3、"2.9" → 2、"abc" → None）。
pub fn parse_int(score: &ScoreValue) -> Option<i64> {
    match score {
        ScoreValue::Missing => None,
        ScoreValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        ScoreValue::Number(_) => None,
        ScoreValue::Text(s) => parse_int_prefix(s),
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
        seen = true;
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
