//! Fixed-size, 1-based pagination over an ordered sequence.

use crate::error::TriviaError;

/// Number of questions on one page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page served when the caller does not ask for one.
pub const DEFAULT_PAGE: usize = 1;

/// Return page `page` of `items`, i.e. offsets `[(page-1)*page_size, page*page_size)`.
///
/// The caller supplies items already in their final order. A page past the
/// end of `items` is an empty slice, not an error; only a zero page number or
/// a zero page size is rejected.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Result<&[T], TriviaError> {
    if page == 0 {
        return Err(TriviaError::invalid("page numbers start at 1"));
    }
    if page_size == 0 {
        return Err(TriviaError::invalid("page size must be at least 1"));
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(page_size).min(items.len());
    Ok(&items[start..end])
}

/// Number of non-empty pages needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
