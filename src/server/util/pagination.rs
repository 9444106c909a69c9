//! Page size bounds and page counts for paginated listings.

/// Largest page size a client may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Clamps a requested page size to `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: u64) -> u64 {
    per_page.clamp(1, MAX_PER_PAGE)
}

/// Number of pages needed to show `total` items `per_page` at a time.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
