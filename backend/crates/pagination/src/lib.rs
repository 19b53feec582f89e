//! Page-number pagination primitives shared by history endpoints.
//!
//! Requests arrive as optional query-string values. [`PageRequest`] parses
//! them explicitly instead of coercing, so malformed or non-positive values
//! surface as [`PageRequestError`] rather than silently turning into `NaN` or
//! zero-sized pages. [`PageInfo`] derives the response metadata from the
//! request, the number of items returned, and the total number of matches.
//!
//! # Examples
//!
//! ```
//! use pagination::{PageInfo, PageRequest};
//!
//! let request = PageRequest::from_query(Some("2"), Some("2"), 50)?;
//! assert_eq!(request.offset(), 2);
//!
//! let info = PageInfo::new(request, 2, 5);
//! assert_eq!(info.total(), 3);
//! assert!(info.has_next());
//! assert!(info.has_prev());
//! # Ok::<(), pagination::PageRequestError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE: u32 = 1;

/// Largest page size a caller may request.
pub const MAX_LIMIT: u32 = 100;

/// Errors raised while validating pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// `page` was not a positive integer.
    #[error("page must be a positive integer, got {value:?}")]
    InvalidPage {
        /// Raw value supplied by the caller.
        value: String,
    },
    /// `limit` was not a positive integer.
    #[error("limit must be a positive integer, got {value:?}")]
    InvalidLimit {
        /// Raw value supplied by the caller.
        value: String,
    },
    /// `limit` exceeded [`MAX_LIMIT`].
    #[error("limit must be at most {max}, got {limit}")]
    LimitTooLarge {
        /// Requested page size.
        limit: u32,
        /// Largest accepted page size.
        max: u32,
    },
}

impl PageRequestError {
    /// Name of the query parameter that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidPage { .. } => "page",
            Self::InvalidLimit { .. } | Self::LimitTooLarge { .. } => "limit",
        }
    }
}

/// Validated, 1-indexed page request.
///
/// ## Invariants
/// - `page >= 1`
/// - `1 <= limit <= MAX_LIMIT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a request from already-parsed numbers.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when `page` or `limit` is zero or `limit`
    /// exceeds [`MAX_LIMIT`].
    pub fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::InvalidPage {
                value: page.to_string(),
            });
        }
        if limit == 0 {
            return Err(PageRequestError::InvalidLimit {
                value: limit.to_string(),
            });
        }
        if limit > MAX_LIMIT {
            return Err(PageRequestError::LimitTooLarge {
                limit,
                max: MAX_LIMIT,
            });
        }
        Ok(Self { page, limit })
    }

    /// Parse optional query-string values, applying [`DEFAULT_PAGE`] and
    /// `default_limit` when a parameter is absent.
    ///
    /// Present-but-empty values are rejected rather than defaulted.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when a supplied value is not a positive
    /// integer or the resulting limit exceeds [`MAX_LIMIT`].
    pub fn from_query(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u32,
    ) -> Result<Self, PageRequestError> {
        let page_number = match page {
            Some(raw) => parse_positive(raw)
                .ok_or_else(|| PageRequestError::InvalidPage { value: raw.into() })?,
            None => DEFAULT_PAGE,
        };
        let page_size = match limit {
            Some(raw) => parse_positive(raw)
                .ok_or_else(|| PageRequestError::InvalidLimit { value: raw.into() })?,
            None => default_limit,
        };
        Self::new(page_number, page_size)
    }

    /// Requested page, starting at 1.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

/// Pagination metadata returned alongside a page of results.
///
/// Serialises as `{"current", "total", "hasNext", "hasPrev"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    current: u32,
    total: u64,
    has_next: bool,
    has_prev: bool,
}

impl PageInfo {
    /// Derive metadata for `request` given how many items the page holds and
    /// how many items match overall.
    #[must_use]
    pub fn new(request: PageRequest, returned: usize, total_items: u64) -> Self {
        let returned_items = u64::try_from(returned).unwrap_or(u64::MAX);
        Self {
            current: request.page(),
            total: total_items.div_ceil(u64::from(request.limit())),
            has_next: request.offset().saturating_add(returned_items) < total_items,
            has_prev: request.page() > 1,
        }
    }

    /// Requested page number.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Total number of pages, `ceil(total_items / limit)`.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Whether items exist beyond this page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Whether this is not the first page.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.has_prev
    }
}
