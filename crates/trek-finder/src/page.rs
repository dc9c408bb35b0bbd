//! The host page behind the palette
//!
//! A scrollable list of destinations. The palette reaches it only through
//! [`HostSurface`]: scroll lock and input focus while the palette is open.

use search_palette::HostSurface;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub destinations: Vec<String>,
    pub scroll_offset: usize,
    pub scroll_locked: bool,
    pub input_focused: bool,
    /// Last navigation message
    pub status: Option<String>,
}

impl PageState {
    pub fn new(destinations: Vec<String>) -> Self {
        Self {
            destinations,
            ..Self::default()
        }
    }

    /// Scroll by `delta` rows; ignored while scrolling is locked
    pub fn scroll(&mut self, delta: isize) {
        if self.scroll_locked {
            log::debug!("Page scroll ignored while locked");
            return;
        }
        let max = self.destinations.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(max);
    }

    /// Handle a selection coming from the palette
    pub fn navigate_to(&mut self, label: &str) {
        log::info!("Navigating to: {}", label);
        self.status = Some(format!("Navigating to: {}", label));
        if let Some(index) = self.destinations.iter().position(|d| d == label) {
            self.scroll_offset = index;
        }
    }
}

/// Shared handle to the page, handed to the palette as its surface
#[derive(Debug, Clone, Default)]
pub struct SharedPage(Rc<RefCell<PageState>>);

impl SharedPage {
    pub fn new(page: PageState) -> Self {
        Self(Rc::new(RefCell::new(page)))
    }

    pub fn borrow(&self) -> std::cell::Ref<'_, PageState> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, PageState> {
        self.0.borrow_mut()
    }
}

impl HostSurface for SharedPage {
    fn set_scroll_locked(&mut self, locked: bool) {
        let mut page = self.0.borrow_mut();
        page.scroll_locked = locked;
        if !locked {
            page.input_focused = false;
        }
    }

    fn focus_input(&mut self) {
        self.0.borrow_mut().input_focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageState {
        PageState::new(vec![
            "Kathmandu Valley".to_string(),
            "Annapurna Trek".to_string(),
            "Lumbini".to_string(),
        ])
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut page = page();
        page.scroll(-3);
        assert_eq!(page.scroll_offset, 0);
        page.scroll(10);
        assert_eq!(page.scroll_offset, 2);
    }

    #[test]
    fn test_scroll_ignored_while_locked() {
        let mut shared = SharedPage::new(page());
        shared.set_scroll_locked(true);
        shared.borrow_mut().scroll(1);
        assert_eq!(shared.borrow().scroll_offset, 0);

        shared.set_scroll_locked(false);
        shared.borrow_mut().scroll(1);
        assert_eq!(shared.borrow().scroll_offset, 1);
    }

    #[test]
    fn test_focus_dropped_on_unlock() {
        let mut shared = SharedPage::new(page());
        shared.set_scroll_locked(true);
        shared.focus_input();
        assert!(shared.borrow().input_focused);

        shared.set_scroll_locked(false);
        assert!(!shared.borrow().input_focused);
    }

    #[test]
    fn test_navigate_to_known_destination() {
        let mut page = page();
        page.navigate_to("Lumbini");
        assert_eq!(page.scroll_offset, 2);
        assert_eq!(page.status.as_deref(), Some("Navigating to: Lumbini"));

        page.navigate_to("Illam");
        assert_eq!(page.scroll_offset, 2);
        assert_eq!(page.status.as_deref(), Some("Navigating to: Illam"));
    }
}
