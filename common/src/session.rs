//! 送信フローの状態機械
//!
//! ```text
//! Idle ──Submit(ファイルあり)──▶ Submitting ──Settled(Ok)──▶ Succeeded
//!  ▲                                 │                          │
//!  │                                 └──Settled(Err)──▶ Failed  │
//!  └───────────────────────Reset────────────────────────────────┘
//! ```
//!
//! - 送信中の Submit / Reset は無視（キャンセル手段は無い）
//! - Submitting 以外で届いた Settled は古い応答として捨てる
//! - Succeeded は明示的な Reset でしか抜けない
//! - Failed から再送信するとエラー表示は消える
//!
//! `F` は選択中ファイルの表現（CLIはパス、Webはブラウザの File）。

use crate::error::AnalyzeError;
use crate::types::AnalysisResult;
use crate::view::ResultView;

/// 送信状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded(ResultView),
    Failed(AnalyzeError),
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
            Phase::Succeeded(_) => "succeeded",
            Phase::Failed(_) => "failed",
        }
    }
}

/// 状態遷移のきっかけ
#[derive(Debug, Clone, PartialEq)]
pub enum Event<F> {
    /// ファイル選択（None は選択解除）
    FileSelected(Option<F>),
    Submit,
    /// 通信の完了
    Settled(Result<AnalysisResult, AnalyzeError>),
    /// 「別の写真をアップロード」
    Reset,
    Toggle(usize),
    ExpandAll,
    CollapseAll,
}

/// 画面全体の状態（選択ファイル + 送信状態 + 結果表示）
#[derive(Debug, Clone, PartialEq)]
pub struct Session<F> {
    file: Option<F>,
    phase: Phase,
}

impl<F> Default for Session<F> {
    fn default() -> Self {
        Self {
            file: None,
            phase: Phase::Idle,
        }
    }
}

impl<F> Session<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを適用して次の状態を返す
    pub fn next(self, event: Event<F>) -> Self {
        let Session { file, phase } = self;

        match (phase, event) {
            (Phase::Succeeded(view), Event::FileSelected(_)) => Session {
                file,
                phase: Phase::Succeeded(view),
            },
            (phase, Event::FileSelected(selected)) => Session {
                file: selected,
                phase,
            },

            (Phase::Idle, Event::Submit) | (Phase::Failed(_), Event::Submit) if file.is_some() => {
                Session {
                    file,
                    phase: Phase::Submitting,
                }
            }

            (Phase::Submitting, Event::Settled(Ok(result))) => Session {
                file,
                phase: Phase::Succeeded(ResultView::new(result)),
            },
            (Phase::Submitting, Event::Settled(Err(error))) => Session {
                file,
                phase: Phase::Failed(error),
            },

            (Phase::Submitting, Event::Reset) => Session {
                file,
                phase: Phase::Submitting,
            },
            (_, Event::Reset) => Session::default(),

            (Phase::Succeeded(mut view), Event::Toggle(index)) => {
                view.toggle(index);
                Session {
                    file,
                    phase: Phase::Succeeded(view),
                }
            }
            (Phase::Succeeded(mut view), Event::ExpandAll) => {
                view.expand_all();
                Session {
                    file,
                    phase: Phase::Succeeded(view),
                }
            }
            (Phase::Succeeded(mut view), Event::CollapseAll) => {
                view.collapse_all();
                Session {
                    file,
                    phase: Phase::Succeeded(view),
                }
            }

            (phase, _) => Session { file, phase },
        }
    }

    /// その場で遷移させる（シグナルの update 用）
    pub fn apply(&mut self, event: Event<F>) {
        let current = std::mem::take(self);
        *self = current.next(event);
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// 送信ボタンが押せるか（ファイルあり、送信中でない、結果表示中でない）
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && matches!(self.phase, Phase::Idle | Phase::Failed(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// 送信中のファイル
    pub fn in_flight(&self) -> Option<&F> {
        if self.is_submitting() {
            self.file.as_ref()
        } else {
            None
        }
    }

    pub fn error(&self) -> Option<&AnalyzeError> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&ResultView> {
        match &self.phase {
            Phase::Succeeded(view) => Some(view),
            _ => None,
        }
    }

    pub fn results_mut(&mut self) -> Option<&mut ResultView> {
        match &mut self.phase {
            Phase::Succeeded(view) => Some(view),
            _ => None,
        }
    }

    /// アップロード欄を出すか（結果表示中は隠す）
    pub fn shows_upload(&self) -> bool {
        self.results().is_none()
    }
}
