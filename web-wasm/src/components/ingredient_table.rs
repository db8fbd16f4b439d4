//! 全成分のアコーディオン表
//!
//! 行クリックで備考を開閉。スコアに応じて `score-*`、3以上は `warning` クラスを付ける。

use leptos::prelude::*;
use sinu_common::{Event as SessionEvent, RowView};
use crate::app::AppSession;

/// 描画用に行の状態を取り出したもの
#[derive(Clone)]
struct RowData {
    index: usize,
    row_class: String,
    score_class: &'static str,
    ingredient: String,
    category: String,
    score: String,
    note: String,
    expanded: bool,
}

impl From<RowView<'_>> for RowData {
    fn from(row: RowView<'_>) -> Self {
        Self {
            index: row.index,
            row_class: row.row_class(),
            score_class: row.class.as_class(),
            ingredient: row.item.ingredient.clone(),
            category: row.item.category.clone(),
            score: row.score_text.clone(),
            note: row.item.note.clone(),
            expanded: row.expanded,
        }
    }
}

#[component]
pub fn IngredientTable(session: AppSession) -> impl IntoView {
    let rows = move || {
        session.with(|s| {
            s.results()
                .map(|r| r.rows().map(RowData::from).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let all_expanded = move || session.with(|s| s.results().is_some_and(|r| r.all_expanded()));
    let none_expanded = move || session.with(|s| s.results().map_or(true, |r| r.expanded_count() == 0));

    view! {
        <div class="table-header">
            <h3>"All Ingredients"</h3>
            <div class="accordion-controls">
                <button
                    class="accordion-btn"
                    disabled=all_expanded
                    on:click=move |_| session.update(|s| s.apply(SessionEvent::ExpandAll))
                >
                    "Expand All"
                </button>
                <button
                    class="accordion-btn"
                    disabled=none_expanded
                    on:click=move |_| session.update(|s| s.apply(SessionEvent::CollapseAll))
                >
                    "Collapse"
                </button>
            </div>
        </div>

        <table>
            <thead>
                <tr>
                    <th>"Ingredient"</th>
                    <th>"Category"</th>
                    <th>"Comedogenic"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || rows().into_iter().map(|row| ingredient_row(session, row)).collect_view()}
            </tbody>
        </table>
    }
}

fn ingredient_row(session: AppSession, row: RowData) -> impl IntoView {
    let index = row.index;
    let marker = if row.expanded { "▾" } else { "▸" };
    let note = if row.note.is_empty() { "No note".to_string() } else { row.note };

    view! {
        <tr
            class=row.row_class
            on:click=move |_| session.update(|s| s.apply(SessionEvent::Toggle(index)))
        >
            <td>{row.ingredient}</td>
            <td>{row.category}</td>
            <td><span class=format!("score {}", row.score_class)>{row.score}</span></td>
            <td class="toggle-marker">{marker}</td>
        </tr>
        {row.expanded.then(|| view! {
            <tr class="note-row">
                <td colspan="4">{note}</td>
            </tr>
        })}
    }
}
