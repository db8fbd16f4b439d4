//! 注意成分ボックス

use leptos::prelude::*;
use sinu_common::ConcernItem;
use crate::app::AppSession;

#[component]
pub fn ConcernBox(session: AppSession) -> impl IntoView {
    let concerns = move || {
        session.with(|s| {
            s.results()
                .filter(|r| r.has_concerns())
                .map(|r| r.concerns().to_vec())
        })
    };

    move || match concerns() {
        Some(items) => view! {
            <div class="concern-box">
                <h3>"⚠️ Ingredients of Concern"</h3>
                {items.into_iter().map(concern_item).collect_view()}
            </div>
        }
        .into_any(),
        None => view! {
            <div class="clear-box">
                <h3>"✨ All Clear!"</h3>
                <p>"No ingredients of concern found."</p>
            </div>
        }
        .into_any(),
    }
}

fn concern_item(item: ConcernItem) -> impl IntoView {
    view! {
        <div class="concern-item">
            <strong>{item.ingredient}</strong>
            <span class="concern-tag">"⚠️ " {item.concern}</span>
            <span class="score">"Comedogenic Score: " {item.comedogenic_score.to_string()}</span>
        </div>
    }
}
