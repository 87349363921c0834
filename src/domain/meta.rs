use serde_json::Value;

use crate::core::from_raw::FromRaw;
use crate::core::json::{Attr, ToJson};
use crate::core::pagination::Pagination;
use crate::core::payload::{get_bool, RawObject};
use crate::domain::currency::CurrencyMeta;

/// Result-set information returned with an event listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventMeta {
    pub pagination: Pagination,
    pub currency: Option<CurrencyMeta>,
}

impl EventMeta {
    pub fn is_paginated(&self) -> bool {
        self.pagination.is_paginated()
    }
}

impl FromRaw for EventMeta {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            pagination: Pagination::from_object(raw),
            currency: CurrencyMeta::from_object(raw),
        })
    }
}

impl ToJson for EventMeta {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        let mut attributes = self.pagination.json_attributes();
        attributes.push(("currency", Attr::entity(self.currency.as_ref())));
        attributes
    }
}

/// Result-set information returned with a performance listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceMeta {
    pub pagination: Pagination,
    pub currency: Option<CurrencyMeta>,
    pub auto_select: Option<bool>,
    pub has_names: Option<bool>,
}

impl PerformanceMeta {
    pub fn is_paginated(&self) -> bool {
        self.pagination.is_paginated()
    }
}

impl FromRaw for PerformanceMeta {
    fn from_object(raw: &RawObject) -> Option<Self> {
        let results = raw.get("results").and_then(Value::as_object);

        Some(Self {
            pagination: Pagination::from_object(raw),
            currency: CurrencyMeta::from_object(raw),
            auto_select: get_bool(raw, "autoselect_this_performance"),
            has_names: results.and_then(|results| get_bool(results, "has_perf_names")),
        })
    }
}

impl ToJson for PerformanceMeta {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        let mut attributes = self.pagination.json_attributes();
        attributes.extend([
            ("currency", Attr::entity(self.currency.as_ref())),
            ("auto_select", Attr::from(self.auto_select)),
            ("has_names", Attr::from(self.has_names)),
        ]);
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing() -> Value {
        json!({
            "autoselect_this_performance": false,
            "currency": {"currency_code": "gbp"},
            "results": {
                "has_perf_names": true,
                "paging_status": {
                    "page_length": 50,
                    "page_number": 2,
                    "pages_remaining": 3,
                    "results_remaining": 150,
                    "total_unpaged_results": 250,
                },
                "performance": [],
            }
        })
    }

    #[test]
    fn test_performance_meta_from_raw() {
        let meta = PerformanceMeta::from_raw(Some(&listing())).unwrap();

        assert_eq!(meta.pagination.page_length, Some(50));
        assert_eq!(meta.pagination.total_results, Some(250));
        assert!(meta.is_paginated());
        assert_eq!(meta.auto_select, Some(false));
        assert_eq!(meta.has_names, Some(true));
        assert_eq!(
            meta.currency.map(|currency| currency.currency.code),
            Some(Some("gbp".to_string()))
        );
    }

    #[test]
    fn test_event_meta_json_splices_pagination() {
        let meta = EventMeta::from_raw(Some(&listing())).unwrap();
        assert_eq!(
            meta.as_json().unwrap(),
            r#"{"page_length":50,"page_number":2,"pages_remaining":3,"results_remaining":150,"total_results":250,"currency":{"currency":{"code":"gbp"}}}"#
        );
    }

    #[test]
    fn test_meta_without_paging_status() {
        let meta = EventMeta::from_raw(Some(&json!({"results": {"event": []}}))).unwrap();
        assert!(!meta.is_paginated());
        assert!(meta.currency.is_none());
        assert!(meta.as_dict_for_json().is_empty());
    }
}
