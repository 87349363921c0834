use crate::core::from_raw::FromRaw;
use crate::core::json::{Attr, ToJson};
use crate::core::payload::{get_str, RawObject};

/// Postal and contact details, e.g. the address prefilled on a reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub lines: Vec<String>,
    pub town: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub country_code: Option<String>,
    pub email_address: Option<String>,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
}

impl FromRaw for Address {
    fn from_object(raw: &RawObject) -> Option<Self> {
        let lines = ["address_line_one", "address_line_two"]
            .iter()
            .filter_map(|key| get_str(raw, key))
            .filter(|line| !line.is_empty())
            .collect();

        Some(Self {
            lines,
            town: get_str(raw, "town"),
            county: get_str(raw, "county"),
            postcode: get_str(raw, "postcode"),
            country_code: get_str(raw, "country_code"),
            email_address: get_str(raw, "email_address"),
            home_phone: get_str(raw, "home_phone"),
            work_phone: get_str(raw, "work_phone"),
        })
    }
}

impl ToJson for Address {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("lines", (&self.lines).into()),
            ("town", (&self.town).into()),
            ("county", (&self.county).into()),
            ("postcode", (&self.postcode).into()),
            ("country_code", (&self.country_code).into()),
            ("email_address", (&self.email_address).into()),
            ("home_phone", (&self.home_phone).into()),
            ("work_phone", (&self.work_phone).into()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl Country {
    pub fn new(code: &str, description: Option<&str>) -> Self {
        Self {
            code: Some(code.to_string()),
            description: description.map(str::to_string),
        }
    }
}

impl FromRaw for Country {
    fn from_object(raw: &RawObject) -> Option<Self> {
        Some(Self {
            code: get_str(raw, "country_code"),
            description: get_str(raw, "country_desc"),
        })
    }
}

impl ToJson for Country {
    fn json_attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        vec![
            ("code", (&self.code).into()),
            ("description", (&self.description).into()),
        ]
    }
}
