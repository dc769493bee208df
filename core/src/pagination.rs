use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pages shown on each side of the current page.
pub const PAGE_WINDOW_RADIUS: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageMarker {
    Page(u64),
    Ellipsis,
}

impl PageMarker {
    pub fn page(&self) -> Option<u64> {
        match self {
            PageMarker::Page(p) => Some(*p),
            PageMarker::Ellipsis => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page {current} out of range 1..={total}")]
    CurrentOutOfRange { current: u64, total: u64 },
}

/// Markers for a compact pager: first page, a window of
/// [`PAGE_WINDOW_RADIUS`] pages around `current`, last page, with every
/// skipped range collapsed into one ellipsis.
///
/// `current` is clamped into `1..=total`. An empty collection (`total == 0`)
/// yields no markers.
pub fn page_window(current: u64, total: u64) -> Vec<PageMarker> {
    page_window_with_radius(current, total, PAGE_WINDOW_RADIUS)
}

/// Same as [`page_window`] but rejects a `current` outside `1..=total`.
pub fn try_page_window(current: u64, total: u64) -> Result<Vec<PageMarker>, PageError> {
    if total > 0 && (current < 1 || current > total) {
        return Err(PageError::CurrentOutOfRange { current, total });
    }
    Ok(page_window(current, total))
}

pub fn page_window_with_radius(current: u64, total: u64, radius: u64) -> Vec<PageMarker> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let mut markers = vec![PageMarker::Page(1)];

    // for total == 1 the window is empty: start = 2 > end = 0
    let start = current.saturating_sub(radius).max(2);
    let end = current.saturating_add(radius).min(total - 1);

    if start > 2 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.extend((start..=end).map(PageMarker::Page));

    if end < total.saturating_sub(1) {
        markers.push(PageMarker::Ellipsis);
    }

    if total > 1 {
        markers.push(PageMarker::Page(total));
    }

    markers
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub page_size: u64,
}

impl PageParams {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    pub fn has_more(&self, total: u64) -> bool {
        self.page * self.page_size < total
    }

    pub fn total_pages(&self, count: u64) -> u64 {
        count.div_ceil(self.page_size)
    }

    /// Moves `page` back onto the last page when it runs past `count` items.
    pub fn clamp_to(self, count: u64) -> Self {
        let last = self.total_pages(count).max(1);
        Self {
            page: self.page.min(last),
            ..self
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = start
            .saturating_add(usize::try_from(self.page_size).unwrap_or(usize::MAX))
            .min(len);
        &items[start..end]
    }

    pub fn pager(&self, count: u64) -> Pager {
        Pager::new(self.page, self.total_pages(count))
    }
}

/// Navigation state for a list split into `total` pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u64,
    pub total: u64,
}

impl Pager {
    pub fn new(current: u64, total: u64) -> Self {
        Self {
            current: current.clamp(1, total.max(1)),
            total,
        }
    }

    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }

    pub fn first(&self) -> u64 {
        1
    }

    pub fn last(&self) -> u64 {
        self.total.max(1)
    }

    pub fn prev(&self) -> u64 {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u64 {
        (self.current + 1).min(self.last())
    }

    pub fn markers(&self) -> Vec<PageMarker> {
        page_window(self.current, self.total)
    }
}

/// One page of an already fetched list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pager: Pager,
}

impl<T: Clone> Page<T> {
    pub fn from_items(items: &[T], params: PageParams) -> Self {
        let count = items.len() as u64;
        let params = params.clamp_to(count);
        Self {
            items: params.slice(items).to_vec(),
            pager: params.pager(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page as P};

    #[test]
    fn test_single_page() {
        assert_eq!(page_window(1, 1), vec![P(1)]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(page_window(1, 0).is_empty());
        assert!(page_window(0, 0).is_empty());
        assert_eq!(try_page_window(1, 0), Ok(vec![]));
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(page_window(1, 5), vec![P(1), P(2), P(3), Ellipsis, P(5)]);
        assert_eq!(page_window(1, 10), vec![P(1), P(2), P(3), Ellipsis, P(10)]);
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![P(1), Ellipsis, P(3), P(4), P(5), P(6), P(7), Ellipsis, P(10)]
        );
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(page_window(10, 10), vec![P(1), Ellipsis, P(8), P(9), P(10)]);
    }

    #[test]
    fn test_no_ellipsis_when_window_touches_bounds() {
        assert_eq!(page_window(3, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
        assert_eq!(page_window(1, 2), vec![P(1), P(2)]);
        assert_eq!(page_window(4, 7), vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7)]);
    }

    #[test]
    fn test_single_gap_page_still_elided() {
        // page 2 is skipped by a single ellipsis
        assert_eq!(
            page_window(5, 7),
            vec![P(1), Ellipsis, P(3), P(4), P(5), P(6), P(7)]
        );
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(page_window(0, 10), page_window(1, 10));
        assert_eq!(page_window(42, 10), page_window(10, 10));
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        assert_eq!(
            try_page_window(0, 10),
            Err(PageError::CurrentOutOfRange { current: 0, total: 10 })
        );
        assert_eq!(
            try_page_window(11, 10),
            Err(PageError::CurrentOutOfRange { current: 11, total: 10 })
        );
        assert_eq!(try_page_window(5, 10), Ok(page_window(5, 10)));
    }

    #[test]
    fn test_custom_radius() {
        assert_eq!(
            page_window_with_radius(5, 10, 1),
            vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]
        );
        assert_eq!(
            page_window_with_radius(5, 10, 0),
            vec![P(1), Ellipsis, P(5), Ellipsis, P(10)]
        );
    }

    #[test]
    fn test_invariants_hold_for_all_inputs() {
        for total in 0..40u64 {
            for current in 1..=total {
                let markers = page_window(current, total);
                assert_eq!(markers, page_window(current, total));

                let pages: Vec<u64> = markers.iter().filter_map(PageMarker::page).collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "{current}/{total}");
                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total));
                assert!(pages.contains(&current));

                assert!(markers
                    .windows(2)
                    .all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis)));
                assert_ne!(markers.first(), Some(&Ellipsis));
                assert_ne!(markers.last(), Some(&Ellipsis));
            }
        }
    }

    #[test]
    fn test_page_params() {
        let p = PageParams::new(3, 8);
        assert_eq!(p.offset(), 16);
        assert!(p.has_more(25));
        assert!(!p.has_more(24));
        assert_eq!(p.total_pages(50), 7);
        assert_eq!(p.total_pages(0), 0);

        let p = PageParams::new(0, 0);
        assert_eq!(p, PageParams { page: 1, page_size: 1 });
    }

    #[test]
    fn test_slice() {
        let items: Vec<u32> = (1..=20).collect();
        assert_eq!(PageParams::new(1, 6).slice(&items), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(PageParams::new(4, 6).slice(&items), &[19, 20]);
        assert!(PageParams::new(5, 6).slice(&items).is_empty());
    }

    #[test]
    fn test_page_from_items() {
        let items: Vec<u32> = (1..=30).collect();
        let page = Page::from_items(&items, PageParams::new(9, 8));
        assert_eq!(page.items, vec![25, 26, 27, 28, 29, 30]);
        assert_eq!(page.pager, Pager { current: 4, total: 4 });

        let empty: Vec<u32> = Vec::new();
        let page = Page::from_items(&empty, PageParams::new(1, 8));
        assert!(page.items.is_empty());
        assert!(page.pager.markers().is_empty());
    }

    #[test]
    fn test_pager_navigation() {
        let pager = Pager::new(1, 5);
        assert!(pager.is_first());
        assert_eq!(pager.prev(), 1);
        assert_eq!(pager.next(), 2);

        let pager = Pager::new(5, 5);
        assert!(pager.is_last());
        assert_eq!(pager.next(), 5);
        assert_eq!(pager.prev(), 4);
        assert_eq!(pager.last(), 5);

        let pager = Pager::new(1, 0);
        assert!(pager.is_first() && pager.is_last());
        assert_eq!(pager.next(), 1);
    }
}
