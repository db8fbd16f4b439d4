//! エラー型定義

use thiserror::Error;

/// 接続失敗時の表示メッセージ
pub const CONNECTIVITY_MESSAGE: &str = "Could not connect to server";

/// サーバーがエラー文言を返さなかった場合の表示メッセージ
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed";

/// 解析リクエストの失敗
///
/// どちらも再送信で回復できる。表示文言は `Display` をそのまま使う。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// 通信自体の失敗（DNS、オフライン、到達不能、JSONでない応答）
    #[error("Could not connect to server")]
    Connectivity,

    /// サーバーは応答したが `success: false`
    #[error("{0}")]
    Analysis(String),
}

impl AnalyzeError {
    /// サーバーのエラー文言から作る。空・無しは既定文言
    pub fn analysis(message: Option<&str>) -> Self {
        match message {
            Some(m) if !m.is_empty() => AnalyzeError::Analysis(m.to_string()),
            _ => AnalyzeError::Analysis(ANALYSIS_FAILED_MESSAGE.to_string()),
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, AnalyzeError::Connectivity)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, AnalyzeError>;
