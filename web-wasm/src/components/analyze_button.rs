//! 解析ボタンとエラー表示

use leptos::prelude::*;
use leptos::task::spawn_local;
use sinu_common::Event as SessionEvent;
use crate::api;
use crate::app::AppSession;

#[component]
pub fn AnalyzeButton(session: AppSession) -> impl IntoView {
    let is_submitting = move || session.with(|s| s.is_submitting());

    let on_click = move |_| {
        // ファイル未選択・送信中は何もしない
        let Some(file) = session.with_untracked(|s| s.can_submit().then(|| s.file().cloned()).flatten())
        else {
            return;
        };

        session.update(|s| s.apply(SessionEvent::Submit));
        spawn_local(async move {
            let outcome = api::analyze(&file).await;
            session.update(|s| s.apply(SessionEvent::Settled(outcome)));
        });
    };

    view! {
        <button
            class="analyze-btn"
            disabled=move || session.with(|s| !s.can_submit())
            on:click=on_click
        >
            {move || if is_submitting() { "Analyzing... ⏳" } else { "Analyze ingredients ✨" }}
        </button>

        <Show when=move || session.with(|s| s.error().is_some())>
            <p class="error">
                {move || session.with(|s| s.error().map(|e| e.to_string()).unwrap_or_default())}
            </p>
        </Show>
    }
}
