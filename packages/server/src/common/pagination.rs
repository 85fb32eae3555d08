//! Page/limit pagination types
//!
//! Offset pagination over an ordered collection: a page window is
//! `[skip, skip + limit)` with `skip = (page - 1) * limit`. Metadata travels
//! as response headers, never in the body.
//!
//! # Usage
//!
//! ```rust,ignore
//! let request = PageRequest::from_query(&pairs);
//! let slice = store.list(request.bounds()).await?;
//! let meta = PageMeta::new(&request, slice.total);
//! (meta.to_headers(), Json(slice.items))
//! ```

use std::ops::Range;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

pub const X_CURRENT_PAGE: HeaderName = HeaderName::from_static("x-current-page");
pub const X_TOTAL_PAGES: HeaderName = HeaderName::from_static("x-total-pages");
pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");
pub const X_PER_PAGE: HeaderName = HeaderName::from_static("x-per-page");
pub const X_HAS_NEXT_PAGE: HeaderName = HeaderName::from_static("x-has-next-page");
pub const X_HAS_PREV_PAGE: HeaderName = HeaderName::from_static("x-has-prev-page");

/// All pagination headers, in emission order.
pub const PAGINATION_HEADERS: [HeaderName; 6] = [
    X_CURRENT_PAGE,
    X_TOTAL_PAGES,
    X_TOTAL_COUNT,
    X_PER_PAGE,
    X_HAS_NEXT_PAGE,
    X_HAS_PREV_PAGE,
];

// ============================================================================
// Lenient integer parsing
// ============================================================================

/// Parse the leading integer of a string the way a browser `parseInt` does.
///
/// Leading whitespace and a single sign are accepted. A `0x`/`0X` prefix
/// switches to hexadecimal, otherwise decimal digits are read. Trailing
/// garbage is ignored. Returns `None` when no digit is found. Values beyond
/// `i64` saturate.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.chars().fold(0i64, |acc, c| {
        let digit = c.to_digit(radix).map(i64::from).unwrap_or(0);
        acc.saturating_mul(i64::from(radix)).saturating_add(digit)
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Value of a query parameter, or `default` when it is absent, non-numeric
/// or zero. Negative values pass through unchanged.
fn int_param(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(parse_int_prefix)
        .filter(|v| *v != 0)
        .unwrap_or(default)
}

/// Signed integer division rounding toward positive infinity.
fn div_ceil_signed(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder != 0 && ((remainder > 0) == (denominator > 0)) {
        quotient + 1
    } else {
        quotient
    }
}

// ============================================================================
// Slice bounds
// ============================================================================

/// Half-open `[start, end)` bounds over an ordered collection.
///
/// Negative bounds count back from the end of the collection. Bounds are
/// clamped to the collection and an inverted window is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBounds {
    pub start: i64,
    pub end: i64,
}

impl SliceBounds {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Concrete index range for a collection of `len` items.
    pub fn resolve(&self, len: usize) -> Range<usize> {
        let resolve_one = |bound: i64| -> usize {
            if bound < 0 {
                len.saturating_sub(usize::try_from(bound.unsigned_abs()).unwrap_or(usize::MAX))
            } else {
                usize::try_from(bound).unwrap_or(usize::MAX).min(len)
            }
        };
        let start = resolve_one(self.start);
        let end = resolve_one(self.end).max(start);
        start..end
    }
}

// ============================================================================
// Page request
// ============================================================================

/// Page/limit pair as requested by the client.
///
/// Neither value is ever zero. Negative values are kept as sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: i64,
    /// Items per page.
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Build from raw query pairs.
    ///
    /// When a key repeats, the last occurrence wins.
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let last = |key: &str| {
            pairs
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        Self {
            page: int_param(last("page"), DEFAULT_PAGE),
            limit: int_param(last("limit"), DEFAULT_LIMIT),
        }
    }

    /// Number of items before the first item of this page.
    pub fn skip(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Slice bounds of this page: `[skip, skip + limit)`.
    pub fn bounds(&self) -> SliceBounds {
        let skip = self.skip();
        SliceBounds::new(skip, skip.saturating_add(self.limit))
    }
}

// ============================================================================
// Page metadata
// ============================================================================

/// Pagination metadata for one page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: usize,
    pub per_page: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageMeta {
    pub fn new(request: &PageRequest, total_count: usize) -> Self {
        let count = i64::try_from(total_count).unwrap_or(i64::MAX);
        let total_pages = if request.limit == 0 {
            0
        } else {
            div_ceil_signed(count, request.limit)
        };
        Self {
            current_page: request.page,
            total_pages,
            total_count,
            per_page: request.limit,
            has_next_page: request.page < total_pages,
            has_prev_page: request.page > 1,
        }
    }
    /// Render as `X-*` response headers, all values as strings.
    pub fn to_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(X_CURRENT_PAGE, HeaderValue::from(self.current_page));
        headers.insert(X_TOTAL_PAGES, HeaderValue::from(self.total_pages));
        headers.insert(X_TOTAL_COUNT, HeaderValue::from(self.total_count));
        headers.insert(X_PER_PAGE, HeaderValue::from(self.per_page));
        headers.insert(X_HAS_NEXT_PAGE, bool_header(self.has_next_page));
        headers.insert(X_HAS_PREV_PAGE, bool_header(self.has_prev_page));
        headers
    }
}

fn bool_header(value: bool) -> HeaderValue {
    if value {
        HeaderValue::from_static("true")
    } else {
        HeaderValue::from_static("false")
    }
}
