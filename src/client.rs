//! 解析APIクライアント
//!
//! `POST {api_url}/api/analyze` に multipart の `image` フィールドで写真を送る。
//! 通信失敗・JSONでない応答は接続エラー、`success: false` は解析エラーになる。
//! 自動リトライはしない。

use crate::config::Config;
use crate::error::Result;
use crate::photo::Photo;
use reqwest::multipart::{Form, Part};
use sinu_common::{parse_response, AnalysisResult, AnalyzeError, IMAGE_FIELD};
use std::time::Duration;

pub struct AnalyzeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzeClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.analyze_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn analyze(&self, photo: &Photo) -> std::result::Result<AnalysisResult, AnalyzeError> {
        let part = Part::bytes(photo.bytes.clone())
            .file_name(photo.file_name.clone())
            .mime_str(photo.mime_type)
            .map_err(|e| {
                tracing::warn!(error = %e, "invalid mime type");
                AnalyzeError::Connectivity
            })?;
        let form = Form::new().part(IMAGE_FIELD, part);

        tracing::info!(endpoint = %self.endpoint, file = %photo.file_name, size = photo.size(), "submitting photo");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "request failed");
                AnalyzeError::Connectivity
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, %status, "failed to read response body");
            AnalyzeError::Connectivity
        })?;
        tracing::debug!(%status, bytes = body.len(), "response received");

        let outcome = parse_response(&body);
        match &outcome {
            Ok(result) => tracing::info!(
                ingredients = result.all_ingredients.len(),
                concerns = result.concern_ingredients.len(),
                "analysis succeeded"
            ),
            Err(e) => tracing::warn!(error = %e, %status, "analysis failed"),
        }
        outcome
    }
}
