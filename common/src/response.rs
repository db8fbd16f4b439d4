//! APIレスポンスの解釈
//!
//! HTTPステータスは見ない。本文がJSONエンベロープなら中身で判断し、
//! JSONとして読めなければ接続エラー扱いにする。
//! オブジェクト以外のJSON（配列・文字列など）は `success` が無いものとして
//! 解析失敗、`null` は接続エラーになる。

use crate::error::{AnalyzeError, Result};
use crate::types::{AnalysisResult, AnalyzeResponse};
use serde_json::Value;

/// `POST /api/analyze` 応答本文を解析結果またはエラーに変換
///
/// # Examples
/// ```
/// use sinu_common::{parse_response, AnalyzeError};
///
/// let err = parse_response(r#"{"success": false, "error": "Invalid image"}"#).unwrap_err();
/// assert_eq!(err, AnalyzeError::Analysis("Invalid image".into()));
/// ```
pub fn parse_response(body: &str) -> Result<AnalysisResult> {
    let value: Value = serde_json::from_str(body).map_err(|_| AnalyzeError::Connectivity)?;
    match value {
        Value::Null => Err(AnalyzeError::Connectivity),
        Value::Object(_) => {
            let response: AnalyzeResponse =
                serde_json::from_value(value).map_err(|_| AnalyzeError::Connectivity)?;
            interpret(response)
        }
        _ => Err(AnalyzeError::analysis(None)),
    }
}

/// デコード済みのエンベロープを解釈
pub fn interpret(response: AnalyzeResponse) -> Result<AnalysisResult> {
    if response.success {
        Ok(response.into_result())
    } else {
        Err(AnalyzeError::analysis(response.error.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ANALYSIS_FAILED_MESSAGE, CONNECTIVITY_MESSAGE};
    use crate::score::{classify, is_warning, ScoreClass};
    use crate::types::ScoreValue;

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "success": true,
            "hasConcerns": false,
            "concernIngredients": [],
            "allIngredients": [
                {"Ingredient": "Water", "Category": "Solvent", "ComedogenicScore": 0, "Note": ""}
            ]
        }"#;

        let result = parse_response(body).expect("成功レスポンス");
        assert!(!result.has_concerns);
        assert_eq!(result.all_ingredients.len(), 1);
    }

    #[test]
    fn test_parse_logical_failure() {
        let err = parse_response(r#"{"success": false, "error": "Invalid image"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid image");
    }

    #[test]
    fn test_parse_failure_without_message() {
        let err = parse_response(r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);

        // success 自体が無い場合も失敗
        let err = parse_response(r#"{"error": ""}"#).unwrap_err();
        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
    }

    #[test]
    fn test_parse_non_json_is_connectivity() {
        let err = parse_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err, AnalyzeError::Connectivity);
        assert_eq!(err.to_string(), CONNECTIVITY_MESSAGE);

        let err = parse_response("").unwrap_err();
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_parse_non_object_json() {
        let err = parse_response("[1, 2, 3]").unwrap_err();
        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);

        let err = parse_response("null").unwrap_err();
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_parse_malformed_envelope_is_connectivity() {
        let err = parse_response(r#"{"success": true, "allIngredients": "oops"}"#).unwrap_err();
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_parse_success_with_null_text_fields() {
        let body = r#"{
            "success": true,
            "hasConcerns": false,
            "concernIngredients": [],
            "allIngredients": [
                {"Ingredient": "Water", "Category": null, "ComedogenicScore": 0, "Note": null}
            ]
        }"#;

        let result = parse_response(body).expect("null の文字列欄は空文字として読む");
        let water = &result.all_ingredients[0];
        assert_eq!(water.ingredient, "Water");
        assert_eq!(water.category, "");
        assert_eq!(water.note, "");
    }

    #[test]
    fn test_parse_success_with_null_flags_and_lists() {
        let body = r#"{"success": true, "hasConcerns": null, "concernIngredients": null, "allIngredients": null}"#;

        let result = parse_response(body).expect("null のフラグ・リストは既定値として読む");
        assert!(!result.has_concerns);
        assert!(result.concern_ingredients.is_empty());
        assert!(result.all_ingredients.is_empty());
    }

    #[test]
    fn test_parse_success_with_bool_score() {
        let body = r#"{
            "success": true,
            "hasConcerns": false,
            "concernIngredients": [],
            "allIngredients": [
                {"Ingredient": "Mystery", "Category": "Other", "ComedogenicScore": true, "Note": ""}
            ]
        }"#;

        let result = parse_response(body).expect("真偽値のスコアも受け付ける");
        let score = &result.all_ingredients[0].comedogenic_score;
        assert_eq!(score, &ScoreValue::Text("true".into()));
        // 整数として読めないので非数値文字列と同じく risky、警告は出さない
        assert_eq!(classify(score), ScoreClass::Risky);
        assert!(!is_warning(score));
    }
}
