//! SINU Ingredient Checker Common Library
//!
//! CLIとWeb(WASM)で共有される型・スコア分類・画面状態

pub mod types;
pub mod error;
pub mod score;
pub mod expansion;
pub mod view;
pub mod session;
pub mod response;

pub use types::{AnalysisResult, AnalyzeResponse, ConcernItem, IngredientItem, ScoreValue};
pub use error::{AnalyzeError, Result, ANALYSIS_FAILED_MESSAGE, CONNECTIVITY_MESSAGE};
pub use score::{classify, is_warning, parse_int, ScoreClass};
pub use expansion::ExpandedRows;
pub use view::{ResultView, RowView};
pub use session::{Event, Phase, Session};
pub use response::{interpret, parse_response};

/// 解析APIの既定オリジン
pub const DEFAULT_API_URL: &str = "https://sinu-acne-backend.onrender.com";

/// 解析エンドポイントのパス
pub const ANALYZE_PATH: &str = "/api/analyze";

/// multipart のフィールド名
pub const IMAGE_FIELD: &str = "image";

/// オリジンから解析エンドポイントのURLを組み立てる（末尾の `/` は吸収）
pub fn analyze_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), ANALYZE_PATH)
}
