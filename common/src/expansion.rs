//! アコーディオン行の展開状態

use std::collections::BTreeSet;

/// 展開中の行インデックス集合
///
/// 有効範囲のチェックは持ち主の [`crate::view::ResultView`] が行う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedRows {
    rows: BTreeSet<usize>,
}

impl ExpandedRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// 展開/折りたたみを反転。反転後に展開されていれば true
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.rows.remove(&index) {
            false
        } else {
            self.rows.insert(index);
            true
        }
    }

    /// 0..len をすべて展開
    pub fn expand_all(&mut self, len: usize) {
        self.rows = (0..len).collect();
    }

    pub fn collapse_all(&mut self) {
        self.rows.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.rows.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 昇順
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut rows = ExpandedRows::new();
        rows.toggle(2);
        let before = rows.clone();

        assert!(rows.toggle(5));
        assert!(!rows.toggle(5));
        assert_eq!(rows, before);

        assert!(!rows.toggle(2));
        assert!(rows.toggle(2));
        assert_eq!(rows, before);
    }

    #[test]
    fn test_expand_all_then_collapse_all() {
        for len in [0, 1, 7, 100] {
            let mut rows = ExpandedRows::new();
            rows.expand_all(len);
            assert_eq!(rows.len(), len);
            rows.collapse_all();
            assert!(rows.is_empty());
        }
    }

    #[test]
    fn test_expand_all_replaces_previous_set() {
        let mut rows = ExpandedRows::new();
        rows.toggle(9);
        rows.expand_all(3);
        assert_eq!(rows.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(!rows.contains(9));
    }
}
