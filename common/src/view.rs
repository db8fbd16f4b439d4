//! 結果表示の状態
//!
//! `ResultView` は解析結果（不変）と展開行の集合を持ち、
//! 行ごとの表示状態をその都度導出する。
//! 新しい結果を受け取るたびに作り直すので、展開状態は必ず空から始まる。

use crate::expansion::ExpandedRows;
use crate::score::{classify, is_warning, ScoreClass};
use crate::types::{AnalysisResult, ConcernItem, IngredientItem};

/// アコーディオン1行分の表示モデル
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub index: usize,
    pub item: &'a IngredientItem,
    pub score_text: String,
    pub class: ScoreClass,
    pub warning: bool,
    pub expanded: bool,
}

impl RowView<'_> {
    /// 行のCSSクラス（"ingredient-row warning expanded" など）
    pub fn row_class(&self) -> String {
        let mut classes = vec!["ingredient-row"];
        if self.warning {
            classes.push("warning");
        }
        if self.expanded {
            classes.push("expanded");
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultView {
    result: AnalysisResult,
    expanded: ExpandedRows,
}

impl ResultView {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            result,
            expanded: ExpandedRows::new(),
        }
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn has_concerns(&self) -> bool {
        self.result.has_concerns
    }

    pub fn concerns(&self) -> &[ConcernItem] {
        &self.result.concern_ingredients
    }

    pub fn len(&self) -> usize {
        self.result.all_ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.all_ingredients.is_empty()
    }

    /// 行の展開を反転する。範囲外のインデックスは無視して false を返す
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.expanded.toggle(index)
    }

    pub fn expand_all(&mut self) {
        self.expanded.expand_all(self.len());
    }

    pub fn collapse_all(&mut self) {
        self.expanded.collapse_all();
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(index)
    }

    pub fn expanded(&self) -> &ExpandedRows {
        &self.expanded
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn all_expanded(&self) -> bool {
        !self.is_empty() && self.expanded.len() == self.len()
    }

    pub fn row(&self, index: usize) -> Option<RowView<'_>> {
        let item = self.result.all_ingredients.get(index)?;
        Some(RowView {
            index,
            item,
            score_text: item.comedogenic_score.to_string(),
            class: classify(&item.comedogenic_score),
            warning: is_warning(&item.comedogenic_score),
            expanded: self.expanded.contains(index),
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}

impl From<AnalysisResult> for ResultView {
    fn from(result: AnalysisResult) -> Self {
        Self::new(result)
    }
}
