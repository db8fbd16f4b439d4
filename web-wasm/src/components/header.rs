//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="emoji-row">"🧴 💖 ✨"</div>
        <h1>"SINU INGREDIENT CHECKER"</h1>

        <div class="badge-row">
            <span class="badge">"Non-Comedogenic?"</span>
            <span class="badge yellow">"Safe for Acne?"</span>
        </div>

        <div class="hero-image">
            <img src="/illustration.png" alt="illustration" />
        </div>
    }
}
