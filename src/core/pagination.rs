use serde_json::Value;

use crate::core::json::Attr;
use crate::core::payload::{self, get_i64, RawObject};

/// Page state of a result set, read from `results.paging_status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page_length: Option<i64>,
    pub page_number: Option<i64>,
    pub pages_remaining: Option<i64>,
    pub results_remaining: Option<i64>,
    pub total_results: Option<i64>,
}

impl Pagination {
    pub fn new(
        page_length: Option<i64>,
        page_number: Option<i64>,
        pages_remaining: Option<i64>,
        total_results: Option<i64>,
    ) -> Self {
        Self {
            page_length,
            page_number,
            pages_remaining,
            results_remaining: None,
            total_results,
        }
    }

    /// Missing paging status leaves every field `None`.
    pub fn from_raw(payload: Option<&Value>) -> Self {
        let status = payload::get_path(payload, &["results", "paging_status"]);
        Self::from_status(status.and_then(Value::as_object))
    }

    /// Same as [`Pagination::from_raw`] for a payload already known to be a mapping.
    pub fn from_object(raw: &RawObject) -> Self {
        let status = payload::get_path(raw.get("results"), &["paging_status"]);
        Self::from_status(status.and_then(Value::as_object))
    }

    fn from_status(status: Option<&RawObject>) -> Self {
        let Some(status) = status else {
            return Self::default();
        };

        Self {
            page_length: get_i64(status, "page_length"),
            page_number: get_i64(status, "page_number"),
            pages_remaining: get_i64(status, "pages_remaining"),
            results_remaining: get_i64(status, "results_remaining"),
            total_results: get_i64(status, "total_unpaged_results"),
        }
    }

    /// More pages follow, or this is not the first page. Incomplete state is
    /// never paginated.
    pub fn is_paginated(&self) -> bool {
        match (self.page_length, self.page_number, self.pages_remaining) {
            (Some(_), Some(page_number), Some(pages_remaining)) => {
                pages_remaining > 0 || page_number > 1
            }
            _ => false,
        }
    }

    pub fn json_attributes<'a>(&self) -> Vec<(&'static str, Attr<'a>)> {
        vec![
            ("page_length", self.page_length.into()),
            ("page_number", self.page_number.into()),
            ("pages_remaining", self.pages_remaining.into()),
            ("results_remaining", self.results_remaining.into()),
            ("total_results", self.total_results.into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw() {
        let data = json!({
            "results": {
                "paging_status": {
                    "page_length": 50,
                    "page_number": 2,
                    "pages_remaining": 3,
                    "results_remaining": 150,
                    "total_unpaged_results": 250,
                }
            }
        });

        let pagination = Pagination::from_raw(Some(&data));

        assert_eq!(pagination.page_length, Some(50));
        assert_eq!(pagination.page_number, Some(2));
        assert_eq!(pagination.pages_remaining, Some(3));
        assert_eq!(pagination.results_remaining, Some(150));
        assert_eq!(pagination.total_results, Some(250));
        assert!(pagination.is_paginated());
    }

    #[test]
    fn test_from_raw_without_paging_status() {
        assert_eq!(Pagination::from_raw(None), Pagination::default());
        assert_eq!(
            Pagination::from_raw(Some(&json!({"results": {}}))),
            Pagination::default()
        );
    }

    #[test]
    fn test_from_object_matches_from_raw() {
        let data = json!({"results": {"paging_status": {"page_number": 4}}});
        assert_eq!(
            Pagination::from_object(data.as_object().unwrap()),
            Pagination::from_raw(Some(&data))
        );
    }

    #[test]
    fn test_is_paginated_pages_remaining() {
        let pagination = Pagination::new(Some(50), Some(1), Some(15), Some(750));
        assert!(pagination.is_paginated());
    }

    #[test]
    fn test_is_paginated_with_less_results_than_page() {
        let pagination = Pagination::new(Some(50), Some(1), Some(0), Some(30));
        assert!(!pagination.is_paginated());
    }

    #[test]
    fn test_is_paginated_on_last_page() {
        let pagination = Pagination::new(Some(50), Some(15), Some(0), Some(750));
        assert!(pagination.is_paginated());
    }

    #[test]
    fn test_is_paginated_with_incomplete_state() {
        assert!(!Pagination::new(None, None, None, None).is_paginated());
        assert!(!Pagination::new(Some(50), Some(3), None, Some(750)).is_paginated());
        assert!(!Pagination::new(None, Some(3), Some(2), None).is_paginated());
    }
}
