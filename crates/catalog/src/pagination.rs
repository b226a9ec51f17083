//! Pager model for the listing page.

use serde::Serialize;

/// A numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub current: bool,
}

/// Previous / numbered / Next controls for one view.
///
/// `previous` and `next` hold the page they lead to, or `None` when the
/// button is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub previous: Option<usize>,
    pub pages: Vec<PageButton>,
    pub next: Option<usize>,
}

impl PageControls {
    pub fn new(page: usize, page_count: usize) -> Self {
        let previous = (page > 1).then(|| (page - 1).min(page_count.max(1)));
        let next = (page < page_count).then(|| page + 1);
        let pages = (1..=page_count)
            .map(|number| PageButton {
                number,
                current: number == page,
            })
            .collect();

        Self {
            previous,
            pages,
            next,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_disables_previous() {
        let controls = PageControls::new(1, 3);
        assert!(!controls.has_previous());
        assert_eq!(controls.next, Some(2));
        assert_eq!(controls.pages.len(), 3);
        assert!(controls.pages[0].current);
        assert!(!controls.pages[1].current);
    }

    #[test]
    fn last_page_disables_next() {
        let controls = PageControls::new(3, 3);
        assert_eq!(controls.previous, Some(2));
        assert!(!controls.has_next());
        assert!(controls.pages[2].current);
    }

    #[test]
    fn no_pages_disables_both() {
        let controls = PageControls::new(1, 0);
        assert!(!controls.has_previous());
        assert!(!controls.has_next());
        assert!(controls.pages.is_empty());
    }

    #[test]
    fn stale_page_beyond_count_points_back_into_range() {
        // e.g. the list shrank after the page was chosen
        let controls = PageControls::new(5, 2);
        assert_eq!(controls.previous, Some(2));
        assert!(!controls.has_next());
        assert!(controls.pages.iter().all(|b| !b.current));
    }
}
