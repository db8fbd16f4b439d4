//! analyze コマンドのテスト
//!
//! 1回だけの解析がどちらのエラー種別も Err で返すことを検証

use sinu_checker::client::AnalyzeClient;
use sinu_checker::config::Config;
use sinu_checker::error::CheckerError;
use sinu_checker::render::Renderer;
use sinu_checker::runner::run_analyze;
use sinu_common::AnalyzeError;
use tempfile::tempdir;

fn client_for(url: &str) -> AnalyzeClient {
    let config = Config {
        api_url: url.to_string(),
        ..Default::default()
    };
    AnalyzeClient::new(&config).unwrap()
}

/// 成功時は Ok
#[tokio::test]
async fn test_run_analyze_success() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body(r#"{"success": true, "hasConcerns": false, "concernIngredients": [],
            "allIngredients": [{"Ingredient": "Water", "Category": "Solvent", "ComedogenicScore": 0, "Note": ""}]}"#)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("photo.jpg");
    std::fs::write(&path, b"jpeg").unwrap();

    let result = run_analyze(&client_for(&server.url()), &Renderer::plain(), &path, &[1], false, false).await;
    assert!(result.is_ok());
}

/// success:false は解析エラー
#[tokio::test]
async fn test_run_analyze_logical_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body(r#"{"success": false}"#)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("photo.png");
    std::fs::write(&path, b"png").unwrap();

    let err = run_analyze(&client_for(&server.url()), &Renderer::plain(), &path, &[], true, true)
        .await
        .unwrap_err();
    assert!(matches!(err, CheckerError::Analyze(AnalyzeError::Analysis(_))));
    assert_eq!(err.to_string(), "Analysis failed");
}

/// 画像でないファイルは送信しない
#[tokio::test]
async fn test_run_analyze_rejects_non_image() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .expect(0)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("list.txt");
    std::fs::write(&path, "water").unwrap();

    let err = run_analyze(&client_for(&server.url()), &Renderer::plain(), &path, &[], false, false)
        .await
        .unwrap_err();
    assert!(matches!(err, CheckerError::NotAnImage(_)));
    mock.assert_async().await;
}
