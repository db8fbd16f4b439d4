//! メインアプリケーションコンポーネント
//!
//! 画面はすべて1つの `Session` シグナルから導出する。

use leptos::prelude::*;
use sinu_common::Session;
use web_sys::File;
use crate::components::{
    header::Header,
    upload_area::UploadArea,
    analyze_button::AnalyzeButton,
    concern_box::ConcernBox,
    ingredient_table::IngredientTable,
    reset_button::ResetButton,
};

/// アプリケーションの状態（ブラウザの File はスレッドをまたげないのでローカル保持）
pub type AppSession = RwSignal<Session<File>, LocalStorage>;

#[component]
pub fn App() -> impl IntoView {
    let session: AppSession = RwSignal::new_local(Session::new());

    let shows_upload = move || session.with(|s| s.shows_upload());
    let has_results = move || session.with(|s| s.results().is_some());

    view! {
        <div class="app">
            <div class="main-card">
                <Header />

                <Show when=shows_upload>
                    <UploadArea session=session />
                    <AnalyzeButton session=session />
                </Show>
            </div>

            <Show when=has_results>
                <div class="result-card">
                    <ConcernBox session=session />
                    <IngredientTable session=session />
                    <ResetButton session=session />
                </div>
            </Show>
        </div>
    }
}
