//! 端末向けの結果表示
//!
//! 表示は状態（[`ResultView`]）の純粋関数。色付けは crossterm、テストでは無効化する。

use crossterm::style::Stylize;
use sinu_common::{AnalyzeError, ResultView, RowView, ScoreClass};
use std::fmt::Write;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, class: ScoreClass) -> String {
        if !self.color {
            return text.to_string();
        }
        match class {
            ScoreClass::Safe => text.to_string().green().to_string(),
            ScoreClass::Moderate => text.to_string().yellow().to_string(),
            ScoreClass::Risky => text.to_string().red().to_string(),
            ScoreClass::Unknown => text.to_string().dark_grey().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.to_string().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// 注意成分ボックスと全成分表
    pub fn results(&self, view: &ResultView) -> String {
        format!("{}\n{}", self.concerns(view), self.table(view))
    }

    pub fn concerns(&self, view: &ResultView) -> String {
        let mut out = String::new();
        if view.has_concerns() {
            let _ = writeln!(out, "{}", self.bold("⚠️  Ingredients of Concern"));
            for item in view.concerns() {
                let _ = writeln!(
                    out,
                    "  • {}  ⚠️ {}  Comedogenic Score: {}",
                    self.bold(&item.ingredient),
                    item.concern,
                    item.comedogenic_score
                );
            }
        } else {
            let _ = writeln!(out, "{}", self.bold("✨ All Clear!"));
            let _ = writeln!(out, "  No ingredients of concern found.");
        }
        out
    }

    pub fn table(&self, view: &ResultView) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({}/{} expanded)",
            self.bold("All Ingredients"),
            view.expanded_count(),
            view.len()
        );

        let name_width = column_width(view.rows().map(|r| r.item.ingredient.as_str()), "Ingredient");
        let category_width = column_width(view.rows().map(|r| r.item.category.as_str()), "Category");

        let _ = writeln!(
            out,
            "      {:<name_width$}  {:<category_width$}  Comedogenic",
            "Ingredient", "Category"
        );

        for row in view.rows() {
            self.write_row(&mut out, &row, name_width, category_width);
        }
        out
    }

    fn write_row(&self, out: &mut String, row: &RowView<'_>, name_width: usize, category_width: usize) {
        let marker = if row.expanded { "▾" } else { "▸" };
        let score = if row.score_text.is_empty() { "-" } else { row.score_text.as_str() };
        let badge = self.paint(&format!("{} ({})", score, row.class.label()), row.class);
        let warning = if row.warning { " ⚠" } else { "" };

        let _ = writeln!(
            out,
            "{} {:>3} {:<name_width$}  {:<category_width$}  {}{}",
            marker,
            format!("{}.", row.index + 1),
            row.item.ingredient,
            row.item.category,
            badge,
            warning
        );

        if row.expanded {
            let note = if row.item.note.is_empty() { "(no note)" } else { row.item.note.as_str() };
            let _ = writeln!(out, "        Note: {}", note);
        }
    }

    pub fn error(&self, error: &AnalyzeError) -> String {
        let text = format!("✖ {}", error);
        if self.color {
            text.red().to_string()
        } else {
            text
        }
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinu_common::{AnalysisResult, ConcernItem, IngredientItem, ScoreValue};

    fn view() -> ResultView {
        ResultView::new(AnalysisResult {
            has_concerns: true,
            concern_ingredients: vec![ConcernItem {
                ingredient: "Coconut Oil".into(),
                concern: "Comedogenic".into(),
                comedogenic_score: ScoreValue::Number(4.0),
            }],
            all_ingredients: vec![
                IngredientItem {
                    ingredient: "Water".into(),
                    category: "Solvent".into(),
                    comedogenic_score: ScoreValue::Missing,
                    note: String::new(),
                },
                IngredientItem {
                    ingredient: "Coconut Oil".into(),
                    category: "Oil".into(),
                    comedogenic_score: ScoreValue::Number(4.0),
                    note: "Pore-clogging".into(),
                },
            ],
        })
    }

    #[test]
    fn test_concern_box() {
        let text = Renderer::plain().concerns(&view());
        assert!(text.contains("Ingredients of Concern"));
        assert!(text.contains("Coconut Oil"));
        assert!(text.contains("⚠️ Comedogenic"));
        assert!(text.contains("Comedogenic Score: 4"));
    }

    #[test]
    fn test_all_clear_box() {
        let view = ResultView::new(AnalysisResult::default());
        let text = Renderer::plain().concerns(&view);
        assert!(text.contains("All Clear!"));
        assert!(text.contains("No ingredients of concern found."));
    }

    #[test]
    fn test_collapsed_rows_hide_notes() {
        let text = Renderer::plain().table(&view());
        assert!(text.contains("(0/2 expanded)"));
        assert!(text.contains("- (unknown)"));
        assert!(text.contains("4 (risky) ⚠"));
        assert!(!text.contains("Pore-clogging"));
    }

    #[test]
    fn test_expanded_rows_show_notes() {
        let mut view = view();
        view.expand_all();
        let text = Renderer::plain().table(&view);
        assert!(text.contains("Note: Pore-clogging"));
        assert!(text.contains("Note: (no note)"));
        assert!(text.contains("▾"));
        assert!(!text.contains("▸"));
    }

    #[test]
    fn test_error_message() {
        let text = Renderer::plain().error(&AnalyzeError::Connectivity);
        assert_eq!(text, "✖ Could not connect to server");
    }

    #[test]
    fn test_color_output_contains_escape_codes() {
        let text = Renderer::new(true).table(&view());
        assert!(text.contains("\u{1b}["));
    }
}
