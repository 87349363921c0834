use crate::core::from_raw::FromRaw;
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{get_bool, get_str, RawObject};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    pub id: Option<String>,
    pub column: Option<String>,
    pub row: Option<String>,
    pub separator: Option<String>,
    pub is_restricted: Option<bool>,
    pub seat_text: Option<String>,
    pub barcode: Option<String>,
}

impl Seat {
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_text(id: &str, seat_text: &str) -> Self {
        Self {
            seat_text: Some(seat_text.to_string()),
            ..Self::new(id)
        }
    }
}

impl FromRaw for Seat {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            id: get_str(raw, "full_id"),
            column: get_str(raw, "col_id"),
            row: get_str(raw, "row_id"),
            separator: get_str(raw, "separator"),
            is_restricted: get_bool(raw, "is_restricted_view"),
            seat_text: get_str(raw, "seat_text"),
            barcode: get_str(raw, "barcode"),
        })
    }
}

impl ToJson for Seat {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("id", (&self.id).into()),
            ("column", (&self.column).into()),
            ("row", (&self.row).into()),
            ("separator", (&self.separator).into()),
            ("is_restricted", self.is_restricted.into()),
            ("seat_text", (&self.seat_text).into()),
            ("barcode", (&self.barcode).into()),
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
            "full_id": "A12",
            "col_id": "12",
            "row_id": "A",
            "separator": "",
            "is_restricted_view": true,
            "seat_text": "Restricted view",
        });

        let seat = Seat::from_raw(Some(&data)).unwrap();

        assert_eq!(seat.id.as_deref(), Some("A12"));
        assert_eq!(seat.column.as_deref(), Some("12"));
        assert_eq!(seat.row.as_deref(), Some("A"));
        assert_eq!(seat.is_restricted, Some(true));
        assert_eq!(seat.seat_text.as_deref(), Some("Restricted view"));
        assert!(seat.barcode.is_none());
    }
}
