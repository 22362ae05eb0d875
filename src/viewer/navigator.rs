//! Page navigation
//!
//! Tracks the current 1-indexed page within a known page count. Movement
//! clamps at the boundaries; there is no wraparound.

#[derive(Debug, Clone, Copy)]
pub struct PageNavigator {
    current: i64,
    page_count: i64,
}

impl PageNavigator {
    /// Start on page 1 of a document with `page_count` pages.
    pub fn new(page_count: i64) -> Self {
        Self {
            current: 1,
            page_count: page_count.max(1),
        }
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn page_count(&self) -> i64 {
        self.page_count
    }

    pub fn at_first(&self) -> bool {
        self.current == 1
    }

    pub fn at_last(&self) -> bool {
        self.current == self.page_count
    }

    /// Move forward one page. Returns false (no-op) at the last page.
    pub fn next(&mut self) -> bool {
        self.goto(self.current + 1)
    }

    /// Move back one page. Returns false (no-op) at the first page.
    pub fn prev(&mut self) -> bool {
        self.goto(self.current - 1)
    }

    /// Jump to a page, clamped to `[1, page_count]`. Returns whether the
    /// current page actually changed.
    pub fn goto(&mut self, page: i64) -> bool {
        let clamped = page.clamp(1, self.page_count);
        if clamped == self.current {
            false
        } else {
            self.current = clamped;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_page() {
        let nav = PageNavigator::new(5);
        assert_eq!(nav.current(), 1);
        assert!(nav.at_first());
        assert!(!nav.at_last());
    }

    #[test]
    fn test_clamps_at_boundaries() {
        let mut nav = PageNavigator::new(3);
        assert!(!nav.prev());
        assert_eq!(nav.current(), 1);

        assert!(nav.next());
        assert!(nav.next());
        assert!(nav.at_last());
        assert!(!nav.next());
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn test_goto_clamps_and_reports_change() {
        let mut nav = PageNavigator::new(10);
        assert!(nav.goto(7));
        assert_eq!(nav.current(), 7);
        assert!(!nav.goto(7));
        assert!(nav.goto(99));
        assert_eq!(nav.current(), 10);
        assert!(nav.goto(-4));
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_single_page_document() {
        let mut nav = PageNavigator::new(1);
        assert!(nav.at_first() && nav.at_last());
        assert!(!nav.next());
        assert!(!nav.prev());
    }

    #[test]
    fn test_zero_page_count_treated_as_one() {
        let nav = PageNavigator::new(0);
        assert_eq!(nav.page_count(), 1);
        assert_eq!(nav.current(), 1);
    }
}
