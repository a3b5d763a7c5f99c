//! Generic scrollable + filterable card grid cursor.
//!
//! Tracks a cursor over a filtered subset of items laid out in `columns`
//! columns, with a row-based scroll window. Purely positional — rendering
//! is the owner's job.

use std::cmp::Ordering;

pub struct CardGrid<T> {
    pub items: Vec<T>,
    /// Filtered indices into `items`, in display order.
    pub visible: Vec<usize>,
    /// Cursor position within `visible`.
    pub cursor: usize,
    /// First grid row currently on screen.
    pub scroll_row: usize,
    pub filter: String,
    filter_fn: Box<dyn Fn(&T, &str) -> bool + Send + Sync>,
}

impl<T> CardGrid<T> {
    pub fn new(filter_fn: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            cursor: 0,
            scroll_row: 0,
            filter: String::new(),
            filter_fn: Box::new(filter_fn),
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.rebuild_filter();
    }

    pub fn set_filter(&mut self, query: &str) {
        self.filter = query.to_string();
        let old_idx = self.visible.get(self.cursor).copied();
        self.rebuild_filter();
        // Try to keep the same item under the cursor after a filter change
        if let Some(prev) = old_idx {
            if let Some(pos) = self.visible.iter().position(|&i| i == prev) {
                self.cursor = pos;
            } else {
                self.cursor = 0;
            }
        }
        self.scroll_row = 0;
    }

    pub fn rebuild_filter(&mut self) {
        if self.filter.is_empty() {
            self.visible = (0..self.items.len()).collect();
        } else {
            self.visible = self
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| (self.filter_fn)(item, &self.filter))
                .map(|(i, _)| i)
                .collect();
        }
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1).min(self.visible.len() - 1);
    }

    pub fn move_up(&mut self, columns: usize) {
        self.cursor = self.cursor.saturating_sub(columns.max(1));
    }

    pub fn move_down(&mut self, columns: usize) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + columns.max(1)).min(self.visible.len() - 1);
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
        self.scroll_row = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.visible.len().saturating_sub(1);
    }

    pub fn cursor_item(&self) -> Option<&T> {
        let idx = self.visible.get(self.cursor)?;
        self.items.get(*idx)
    }

    pub fn cursor_item_mut(&mut self) -> Option<&mut T> {
        let idx = self.visible.get(self.cursor).copied()?;
        self.items.get_mut(idx)
    }

    pub fn cursor_original_index(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    /// (row, column) of the cursor in the full (unscrolled) grid.
    pub fn cursor_cell(&self, columns: usize) -> (usize, usize) {
        let columns = columns.max(1);
        (self.cursor / columns, self.cursor % columns)
    }

    /// Scroll so the cursor's row is within the `rows`-row window.
    pub fn ensure_visible(&mut self, columns: usize, rows: usize) {
        if rows == 0 {
            return;
        }
        let (row, _) = self.cursor_cell(columns);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    /// Original-index entries on screen, as (position in `visible`, original
    /// index) pairs. Call `ensure_visible` first.
    pub fn window(&self, columns: usize, rows: usize) -> Vec<(usize, usize)> {
        let columns = columns.max(1);
        if rows == 0 || self.visible.is_empty() {
            return Vec::new();
        }
        let start = self.scroll_row * columns;
        let end = (start + rows * columns).min(self.visible.len());
        if start >= end {
            return Vec::new();
        }
        self.visible[start..end]
            .iter()
            .enumerate()
            .map(|(offset, &orig)| (start + offset, orig))
            .collect()
    }

    /// Move the cursor to the card at on-screen cell (`cell_row`,
    /// `cell_col`). Returns true when a card exists there.
    pub fn hit(&mut self, columns: usize, cell_row: usize, cell_col: usize) -> bool {
        let columns = columns.max(1);
        if cell_col >= columns {
            return false;
        }
        let target = (self.scroll_row + cell_row) * columns + cell_col;
        if target < self.visible.len() {
            self.cursor = target;
            return true;
        }
        false
    }

    /// Sort the visible indices by a comparison over the items they point
    /// to. Items themselves stay in place.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.visible
            .sort_by(|&a, &b| cmp(&self.items[a], &self.items[b]));
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(n: usize) -> CardGrid<String> {
        let mut grid = CardGrid::new(|item: &String, q: &str| {
            item.to_lowercase().contains(&q.to_lowercase())
        });
        grid.set_items((0..n).map(|i| format!("item {}", i)).collect());
        grid
    }

    #[test]
    fn cursor_moves_in_two_dimensions() {
        let mut grid = grid_of(7);
        grid.move_right();
        grid.move_down(3);
        assert_eq!(grid.cursor, 4);
        assert_eq!(grid.cursor_cell(3), (1, 1));
        grid.move_up(3);
        assert_eq!(grid.cursor, 1);
        grid.move_down(3);
        grid.move_down(3);
        // Clamped to the last card on the partial final row.
        assert_eq!(grid.cursor, 6);
    }

    #[test]
    fn filter_narrows_and_keeps_cursor_item() {
        let mut grid = grid_of(10);
        grid.cursor = 4;
        grid.set_filter("item 4");
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.cursor_original_index(), Some(4));
        grid.set_filter("");
        assert_eq!(grid.len(), 10);
        assert_eq!(grid.cursor_original_index(), Some(4));
    }

    #[test]
    fn window_follows_scroll() {
        let mut grid = grid_of(12);
        grid.cursor = 11; // row 3 with 3 columns
        grid.ensure_visible(3, 2);
        assert_eq!(grid.scroll_row, 2);
        let window = grid.window(3, 2);
        assert_eq!(window.first(), Some(&(6, 6)));
        assert_eq!(window.last(), Some(&(11, 11)));
    }

    #[test]
    fn hit_selects_only_existing_cells() {
        let mut grid = grid_of(5);
        assert!(grid.hit(3, 1, 1));
        assert_eq!(grid.cursor, 4);
        assert!(!grid.hit(3, 1, 2)); // no sixth card
        assert_eq!(grid.cursor, 4);
    }

    #[test]
    fn sort_reorders_visible_without_moving_items() {
        let mut grid = grid_of(3);
        grid.sort_by(|a, b| b.cmp(a));
        assert_eq!(grid.cursor_original_index(), Some(2));
        assert_eq!(grid.items[0], "item 0");
    }
}
