//! 解析コマンドの実行
//!
//! `analyze` (1回だけ) と `check` (対話) はどちらも共通の [`Session`] を
//! イベントで進めるだけで、表示は [`Renderer`] に任せる。

use crate::client::AnalyzeClient;
use crate::error::{CheckerError, Result};
use crate::photo::{check_image_path, Photo};
use crate::render::Renderer;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use sinu_common::{Event, Phase, Session};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type PhotoSession = Session<Photo>;

/// 結果表示中の操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// 行の展開切り替え（0始まり）
    Toggle(usize),
    ExpandAll,
    CollapseAll,
    /// 別の写真をアップロード
    Reset,
    Quit,
    Invalid(String),
}

/// 失敗表示中の操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailedAction {
    Retry,
    ChooseFile,
    Quit,
    Invalid(String),
}

/// 結果表示中の入力を解釈（行番号は1始まりで入力）
pub fn parse_result_action(input: &str, row_count: usize) -> ResultAction {
    let trimmed = input.trim();
    match trimmed {
        "a" | "A" => ResultAction::ExpandAll,
        "c" | "C" => ResultAction::CollapseAll,
        "n" | "N" => ResultAction::Reset,
        "q" | "Q" => ResultAction::Quit,
        _ => match trimmed.parse::<usize>() {
            Ok(row) if (1..=row_count).contains(&row) => ResultAction::Toggle(row - 1),
            _ => ResultAction::Invalid(trimmed.to_string()),
        },
    }
}

pub fn parse_failed_action(input: &str) -> FailedAction {
    match input.trim() {
        "" | "r" | "R" => FailedAction::Retry,
        "f" | "F" => FailedAction::ChooseFile,
        "q" | "Q" => FailedAction::Quit,
        other => FailedAction::Invalid(other.to_string()),
    }
}

/// 行番号（1始まり）を展開する。範囲外は無視、既に展開済みならそのまま
pub fn expand_rows(session: &mut PhotoSession, rows: &[usize], all: bool) {
    if all {
        session.apply(Event::ExpandAll);
        return;
    }
    for &row in rows {
        let Some(index) = row.checked_sub(1) else { continue };
        let expanded = session.results().is_some_and(|v| v.is_expanded(index));
        if !expanded {
            session.apply(Event::Toggle(index));
        }
    }
}

/// 選んだ写真で送信し直す。写真が無ければ（空入力）false で終了を示す
pub fn submit_photo(session: &mut PhotoSession, photo: Option<Photo>) -> bool {
    match photo {
        Some(photo) => {
            session.apply(Event::FileSelected(Some(photo)));
            session.apply(Event::Submit);
            true
        }
        None => false,
    }
}

fn spinner(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message("Analyzing... ⏳");
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// 送信中なら通信を1回行い、結果で状態を進める
pub async fn settle(client: &AnalyzeClient, session: &mut PhotoSession, show_progress: bool) {
    let outcome = match session.in_flight() {
        Some(photo) => {
            let bar = spinner(show_progress);
            let outcome = client.analyze(photo).await;
            bar.finish_and_clear();
            outcome
        }
        None => return,
    };
    session.apply(Event::Settled(outcome));
}

/// 1回だけ解析して表示。どちらのエラーも Err で返す
pub async fn run_analyze(
    client: &AnalyzeClient,
    renderer: &Renderer,
    photo: &Path,
    expand: &[usize],
    expand_all: bool,
    json: bool,
) -> Result<()> {
    let photo = Photo::load(photo)?;

    let mut session = PhotoSession::new()
        .next(Event::FileSelected(Some(photo)))
        .next(Event::Submit);
    settle(client, &mut session, std::io::stderr().is_terminal()).await;

    if let Some(error) = session.error() {
        return Err(CheckerError::Analyze(error.clone()));
    }

    expand_rows(&mut session, expand, expand_all);

    if let Some(view) = session.results() {
        if json {
            println!("{}", serde_json::to_string_pretty(view.result())?);
        } else {
            print!("{}", renderer.results(view));
        }
    }
    Ok(())
}

/// 写真のパスを尋ねる。空入力なら None
fn prompt_photo() -> Result<Option<Photo>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Upload a photo (path, empty to quit)")
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    return Ok(());
                }
                check_image_path(Path::new(trimmed))
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match Photo::load(Path::new(trimmed)) {
            Ok(photo) => return Ok(Some(photo)),
            Err(e) => eprintln!("{}", e),
        }
    }
}

/// 対話セッション
pub async fn run_check(
    client: &AnalyzeClient,
    renderer: &Renderer,
    initial: Option<PathBuf>,
) -> Result<()> {
    let mut session = PhotoSession::new();

    if let Some(path) = initial {
        match Photo::load(&path) {
            Ok(photo) => session.apply(Event::FileSelected(Some(photo))),
            Err(e) => eprintln!("{}", e),
        }
    }

    println!("🧴 💖 ✨  SINU INGREDIENT CHECKER");
    println!("Non-Comedogenic? · Safe for Acne?\n");

    loop {
        match session.phase() {
            Phase::Idle => {
                if session.file().is_some() {
                    session.apply(Event::Submit);
                } else if !submit_photo(&mut session, prompt_photo()?) {
                    break;
                }
            }

            Phase::Submitting => {
                settle(client, &mut session, true).await;
            }

            Phase::Succeeded(view) => {
                println!("\n{}", renderer.results(view));
                let row_count = view.len();
                let input: String = Input::new()
                    .with_prompt("Row number to toggle, [a] expand all, [c] collapse, [n] upload another photo, [q] quit")
                    .allow_empty(true)
                    .interact_text()?;

                match parse_result_action(&input, row_count) {
                    ResultAction::Toggle(index) => session.apply(Event::Toggle(index)),
                    ResultAction::ExpandAll => session.apply(Event::ExpandAll),
                    ResultAction::CollapseAll => session.apply(Event::CollapseAll),
                    ResultAction::Reset => session.apply(Event::Reset),
                    ResultAction::Quit => break,
                    ResultAction::Invalid(other) => {
                        if !other.is_empty() {
                            eprintln!("Unknown command: {}", other);
                        }
                    }
                }
            }

            Phase::Failed(error) => {
                eprintln!("{}", renderer.error(error));
                let input: String = Input::new()
                    .with_prompt("[r] retry, [f] choose another photo, [q] quit")
                    .allow_empty(true)
                    .interact_text()?;

                match parse_failed_action(&input) {
                    FailedAction::Retry => session.apply(Event::Submit),
                    FailedAction::ChooseFile => {
                        if !submit_photo(&mut session, prompt_photo()?) {
                            break;
                        }
                    }
                    FailedAction::Quit => break,
                    FailedAction::Invalid(other) => eprintln!("Unknown command: {}", other),
                }
            }
        }
    }

    Ok(())
}
