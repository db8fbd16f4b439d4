//! 解析API連携
//!
//! 選択された写真を multipart の `image` フィールドで `POST /api/analyze` に送る。
//! fetch 自体の失敗や本文が読めない場合は接続エラーとして扱う。

use sinu_common::{analyze_url, parse_response, AnalysisResult, AnalyzeError, DEFAULT_API_URL, IMAGE_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 解析APIのオリジン（ビルド時の `SINU_API_URL` で差し替え可能）
pub fn api_url() -> &'static str {
    option_env!("SINU_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// 写真を解析する
pub async fn analyze(file: &File) -> Result<AnalysisResult, AnalyzeError> {
    let body = post_image(file).await.map_err(|e| {
        gloo::console::error!("analyze request failed:", e);
        AnalyzeError::Connectivity
    })?;

    let outcome = parse_response(&body);
    if let Err(e) = &outcome {
        gloo::console::warn!(format!("analysis failed: {}", e));
    }
    outcome
}

async fn post_image(file: &File) -> Result<String, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&analyze_url(api_url()), &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    // ステータスは見ない（エラー時もJSON本文で判断する）
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}
