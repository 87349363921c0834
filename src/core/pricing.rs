use crate::core::json::Attr;
use crate::core::payload::{get_f64, RawObject};
use crate::utils::error::Result;
use crate::utils::validation::require_price;

/// Per-seat price pair plus the non-offer (undiscounted) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeatPricing {
    pub seatprice: Option<f64>,
    pub surcharge: Option<f64>,
    pub non_offer_seatprice: Option<f64>,
    pub non_offer_surcharge: Option<f64>,
}

impl SeatPricing {
    pub fn new(seatprice: Option<f64>, surcharge: Option<f64>) -> Self {
        Self {
            seatprice,
            surcharge,
            ..Self::default()
        }
    }

    pub fn non_offer(non_offer_seatprice: Option<f64>, non_offer_surcharge: Option<f64>) -> Self {
        Self {
            non_offer_seatprice,
            non_offer_surcharge,
            ..Self::default()
        }
    }

    // non_offer_sale_seatprice is the API's name for the non-offer seat price
    pub fn from_raw(raw: &RawObject) -> Self {
        Self {
            seatprice: get_f64(raw, "sale_seatprice"),
            surcharge: get_f64(raw, "sale_surcharge"),
            non_offer_seatprice: get_f64(raw, "non_offer_sale_seatprice"),
            non_offer_surcharge: get_f64(raw, "non_offer_sale_surcharge"),
        }
    }

    /// Seat price plus surcharge. Fails with `MissingPrice` if either is absent.
    pub fn combined_price(&self) -> Result<f64> {
        let seatprice = require_price("seatprice", self.seatprice)?;
        let surcharge = require_price("surcharge", self.surcharge)?;
        Ok(seatprice + surcharge)
    }

    pub fn non_offer_combined_price(&self) -> Result<f64> {
        let seatprice = require_price("non_offer_seatprice", self.non_offer_seatprice)?;
        let surcharge = require_price("non_offer_surcharge", self.non_offer_surcharge)?;
        Ok(seatprice + surcharge)
    }

    pub fn json_attributes<'a>(&self) -> Vec<(&'static str, Attr<'a>)> {
        vec![
            ("seatprice", self.seatprice.into()),
            ("surcharge", self.surcharge.into()),
            ("non_offer_seatprice", self.non_offer_seatprice.into()),
            ("non_offer_surcharge", self.non_offer_surcharge.into()),
        ]
    }
}
