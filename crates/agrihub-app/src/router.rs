//! View router - which single page is visible

use agrihub_core::prelude::*;
use agrihub_core::Page;

/// Tracks the active page, the page before it and the page body scroll.
///
/// Exactly one page is active at a time; the nav bar highlights the same
/// page because both read [`ViewRouter::active`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRouter {
    active: Page,
    previous: Option<Page>,
    /// Vertical scroll of the page body, reset on every navigation
    scroll_offset: u16,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Page {
        self.active
    }

    pub fn previous(&self) -> Option<Page> {
        self.previous
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }

    /// Header title of the active page
    pub fn title(&self) -> &'static str {
        self.active.title()
    }

    /// Activate `page` and reset the body scroll
    pub fn navigate(&mut self, page: Page) -> Page {
        if self.active != page {
            debug!("Navigating {} -> {}", self.active, page);
            self.previous = Some(self.active);
        }
        self.active = page;
        self.scroll_offset = 0;
        page
    }

    /// Activate the page with the given id.
    ///
    /// Unknown ids fail with [`Error::InvalidPageId`] and leave the router
    /// untouched.
    pub fn navigate_to(&mut self, page_id: &str) -> Result<Page> {
        let page = page_id.parse::<Page>()?;
        Ok(self.navigate(page))
    }

    pub fn next_page(&mut self) -> Page {
        self.navigate(self.active.next())
    }

    pub fn prev_page(&mut self) -> Page {
        self.navigate(self.active.prev())
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let router = ViewRouter::new();
        assert_eq!(router.active(), Page::Home);
        assert_eq!(router.title(), "Home");
        assert!(router.previous().is_none());
    }

    #[test]
    fn test_navigate_to_every_valid_id() {
        let mut router = ViewRouter::new();
        for page in Page::ALL {
            let result = router.navigate_to(page.id()).unwrap();
            assert_eq!(result, page);
            let active_count = Page::ALL.iter().filter(|p| router.is_active(**p)).count();
            assert_eq!(active_count, 1);
            assert_eq!(router.title(), page.title());
        }
    }

    #[test]
    fn test_navigate_to_invalid_id_leaves_state() {
        let mut router = ViewRouter::new();
        router.navigate(Page::Advisory);
        router.scroll_down(4);
        let before = router.clone();

        let err = router.navigate_to("weather").unwrap_err();
        assert!(matches!(err, Error::InvalidPageId { .. }));
        assert_eq!(router, before);
    }

    #[test]
    fn test_navigate_resets_scroll() {
        let mut router = ViewRouter::new();
        router.scroll_down(10);
        router.navigate(Page::Profile);
        assert_eq!(router.scroll_offset(), 0);
    }

    #[test]
    fn test_previous_page_tracked() {
        let mut router = ViewRouter::new();
        router.navigate(Page::Chat);
        router.navigate(Page::Detection);
        assert_eq!(router.previous(), Some(Page::Chat));

        // Re-selecting the active page keeps the history
        router.navigate(Page::Detection);
        assert_eq!(router.previous(), Some(Page::Chat));
    }

    #[test]
    fn test_page_cycling_wraps() {
        let mut router = ViewRouter::new();
        assert_eq!(router.prev_page(), Page::Profile);
        assert_eq!(router.next_page(), Page::Home);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut router = ViewRouter::new();
        router.scroll_up(3);
        assert_eq!(router.scroll_offset(), 0);
    }
}
