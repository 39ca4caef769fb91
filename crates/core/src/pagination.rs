//! Pagination for the list endpoint.
//!
//! Listing is capped at [`MAX_LIST_LIMIT`] records no matter what the client
//! asks for.

use serde::Deserialize;

/// Hard upper bound (and default) for a single list call.
pub const MAX_LIST_LIMIT: i64 = 10;

/// Pagination parameters (`?limit=&offset=`) as sent by the client.
///
/// Kept as raw strings: a value that is not an integer counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Clamped pagination window handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: MAX_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl ListParams {
    pub fn page(&self) -> Page {
        Page {
            limit: clamp_limit(parse_lenient(&self.limit), MAX_LIST_LIMIT, MAX_LIST_LIMIT),
            offset: clamp_offset(parse_lenient(&self.offset)),
        }
    }
}

fn parse_lenient(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> u64 {
    offset.unwrap_or(0).max(0) as u64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, 10, 10), 10);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), 10, 10), 10);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(-3), 10, 10), 1);
        assert_eq!(clamp_limit(Some(0), 10, 10), 1);
    }

    // -- clamp_offset --------------------------------------------------------

    #[test]
    fn clamp_offset_floors_at_zero() {
        assert_eq!(clamp_offset(Some(-7)), 0);
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(4)), 4);
    }

    // -- ListParams::page ----------------------------------------------------

    #[test]
    fn empty_params_yield_default_page() {
        assert_eq!(ListParams::default().page(), Page::default());
    }

    #[test]
    fn page_never_exceeds_cap() {
        let params = ListParams {
            limit: Some("1000".into()),
            offset: Some("20".into()),
        };
        assert_eq!(
            params.page(),
            Page {
                limit: MAX_LIST_LIMIT,
                offset: 20
            }
        );
    }

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let params = ListParams {
            limit: Some("abc".into()),
            offset: Some("99999999999999999999".into()),
        };
        assert_eq!(params.page(), Page::default());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let params = ListParams {
            limit: Some(" 3 ".into()),
            offset: None,
        };
        assert_eq!(params.page().limit, 3);
    }
}
