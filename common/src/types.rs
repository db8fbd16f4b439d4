//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ScoreValue: コメドジェニックスコアの生の値（null / 数値 / 文字列）
//! - IngredientItem: 全成分リストの1行
//! - ConcernItem: 注意成分
//! - AnalysisResult: 解析成功時の結果（リセットまで不変）
//! - AnalyzeResponse: APIレスポンスのエンベロープ

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// コメドジェニックスコア
///
/// バックエンドは数値を返す想定だが、null や文字列（"N/A" など）も来うるので
/// 受け取った形のまま保持し、分類は [`crate::score`] に任せる。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScoreValue {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl ScoreValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, ScoreValue::Missing)
    }
}

impl From<f64> for ScoreValue {
    fn from(value: f64) -> Self {
        ScoreValue::Number(value)
    }
}

impl From<i64> for ScoreValue {
    fn from(value: i64) -> Self {
        ScoreValue::Number(value as f64)
    }
}

impl From<&str> for ScoreValue {
    fn from(value: &str) -> Self {
        ScoreValue::Text(value.to_string())
    }
}

impl<T: Into<ScoreValue>> From<Option<T>> for ScoreValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ScoreValue::Missing)
    }
}

/// 表示用: 整数値は小数点なしで出す（4.0 → "4"）
impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Missing => Ok(()),
            ScoreValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            ScoreValue::Number(n) => write!(f, "{}", n),
            ScoreValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for ScoreValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScoreValue::Missing => serializer.serialize_none(),
            ScoreValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            ScoreValue::Number(n) => serializer.serialize_f64(*n),
            ScoreValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for ScoreValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreVisitor;

        impl<'de> Visitor<'de> for ScoreVisitor {
            type Value = ScoreValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, a string, a boolean or null")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Text(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Missing)
            }

            fn visit_none<E: de::Error>(self) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Missing)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<ScoreValue, D::Error> {
                d.deserialize_any(ScoreVisitor)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Text(v))
            }
        }

        deserializer.deserialize_any(ScoreVisitor)
    }
}

/// 明示的な `null` もデフォルト値として読む（欠落は `#[serde(default)]` 側で吸収）
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 全成分リストの1行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IngredientItem {
    #[serde(deserialize_with = "null_as_default")]
    pub ingredient: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    pub comedogenic_score: ScoreValue,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
}

/// 注意成分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConcernItem {
    #[serde(deserialize_with = "null_as_default")]
    pub ingredient: String,
    #[serde(deserialize_with = "null_as_default")]
    pub concern: String,
    pub comedogenic_score: ScoreValue,
}

/// 解析結果（成功レスポンスから1回だけ作られ、リセットまで変更しない）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "null_as_default")]
    pub has_concerns: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub concern_ingredients: Vec<ConcernItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub all_ingredients: Vec<IngredientItem>,
}

/// `POST /api/analyze` のレスポンス
///
/// `success` が無い場合は失敗扱い（falsy）。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_concerns: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub concern_ingredients: Vec<ConcernItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub all_ingredients: Vec<IngredientItem>,
    pub error: Option<String>,
}

impl AnalyzeResponse {
    /// 成功時の結果部分だけを取り出す
    pub fn into_result(self) -> AnalysisResult {
        AnalysisResult {
            has_concerns: self.has_concerns,
            concern_ingredients: self.concern_ingredients,
            all_ingredients: self.all_ingredients,
        }
    }
}
