//! Pure pagination algebra
//!
//! Everything here is a function of `(collection length, page size, current
//! page)` with no state of its own, so frontends can re-derive the visible
//! slice and the navigation markers on every observation. Inputs are clamped
//! rather than rejected: this module cannot fail.
//!
//! Pages are 1-based throughout, matching what the navigation controls
//! display.

/// Records shown per page.
pub const PAGE_SIZE: usize = 8;

/// Number of page markers emitted on each side of the current page.
pub const WINDOW_RADIUS: usize = 2;

/// One element of the compact page sequence rendered by navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A clickable page number
    Number(usize),
    /// A non-interactive gap indicator
    Ellipsis,
}

/// Total page count: `max(1, ceil(len / page_size))`.
///
/// An empty collection still renders as a single, empty page.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// The slice of `items` visible on `current_page`.
///
/// Bounds are clamped: a page past the end of the collection yields an
/// empty slice, never an error.
#[must_use]
pub fn page_slice<T>(items: &[T], page_size: usize, current_page: usize) -> &[T] {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Compact page sequence for `current_page` out of `total_pages`.
///
/// Always contains page 1; contains the last page whenever there is more
/// than one; contains a window of [`WINDOW_RADIUS`] pages on each side of
/// the current page; ellipsis markers stand in for the elided runs. The
/// window excludes the first and last pages by construction, so the
/// sequence never repeats a number.
#[must_use]
pub fn page_markers(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    let mut markers = vec![PageMarker::Number(1)];

    if current_page > WINDOW_RADIUS + 2 {
        markers.push(PageMarker::Ellipsis);
    }

    let window_start = current_page.saturating_sub(WINDOW_RADIUS).max(2);
    let window_end = current_page
        .saturating_add(WINDOW_RADIUS)
        .min(total_pages.saturating_sub(1));
    for page in window_start..=window_end {
        markers.push(PageMarker::Number(page));
    }

    if current_page + WINDOW_RADIUS + 1 < total_pages {
        markers.push(PageMarker::Ellipsis);
    }

    if total_pages > 1 {
        markers.push(PageMarker::Number(total_pages));
    }

    markers
}
