use leptos::prelude::*;
use sinu_common::Event as SessionEvent;
use crate::app::AppSession;

#[component]
pub fn ResetButton(session: AppSession) -> impl IntoView {
    view! {
        <div class="again-wrap">
            <button
                class="reset-btn"
                on:click=move |_| session.update(|s| s.apply(SessionEvent::Reset))
            >
                "Upload another photo 💕"
            </button>
        </div>
    }
}
