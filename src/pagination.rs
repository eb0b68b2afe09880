//! Page slicing for the project gallery.

use std::ops::Range;

pub const PROJECTS_PER_PAGE: usize = 4;

/// One-based page cursor over a list of `total_items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    per_page: usize,
    total_items: usize,
    current: usize,
}

impl Paginator {
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            total_items,
            current: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Page controls are only worth rendering with more than one page.
    pub fn has_controls(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current < self.total_pages()
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.total_pages().max(1));
    }

    pub fn range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.per_page).min(self.total_items);
        let end = (self.current * self.per_page).min(self.total_items);
        start..end
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}
