//! アップロードエリアコンポーネント

use leptos::prelude::*;
use sinu_common::Event as SessionEvent;
use web_sys::HtmlInputElement;
use crate::app::AppSession;

#[component]
pub fn UploadArea(session: AppSession) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        session.update(|s| s.apply(SessionEvent::FileSelected(file)));
    };

    view! {
        <div class="upload-box">
            <p>"Upload a photo"</p>
            <input type="file" accept="image/*" on:change=on_change />
        </div>
    }
}
