//! Fixed catalog of internal booking variables a template can bind to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TemplateError;

/// Default format pattern for date-typed variables.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

/// One internal booking variable. Serialized by its camelCase key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InternalVariable {
    CheckIn,
    CheckOut,
    Adults,
    Children,
    TotalGuests,
    Nights,
    PromoCode,
    Currency,
    HotelId,
}

impl InternalVariable {
    /// Every variable, in catalog order.
    pub const ALL: [InternalVariable; 9] = [
        InternalVariable::CheckIn,
        InternalVariable::CheckOut,
        InternalVariable::Adults,
        InternalVariable::Children,
        InternalVariable::TotalGuests,
        InternalVariable::Nights,
        InternalVariable::PromoCode,
        InternalVariable::Currency,
        InternalVariable::HotelId,
    ];

    /// Stable key used in templates.
    pub fn key(self) -> &'static str {
        match self {
            InternalVariable::CheckIn => "checkIn",
            InternalVariable::CheckOut => "checkOut",
            InternalVariable::Adults => "adults",
            InternalVariable::Children => "children",
            InternalVariable::TotalGuests => "totalGuests",
            InternalVariable::Nights => "nights",
            InternalVariable::PromoCode => "promoCode",
            InternalVariable::Currency => "currency",
            InternalVariable::HotelId => "hotelId",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InternalVariable::CheckIn => "Check-in date",
            InternalVariable::CheckOut => "Check-out date",
            InternalVariable::Adults => "Adults",
            InternalVariable::Children => "Children",
            InternalVariable::TotalGuests => "Total guests",
            InternalVariable::Nights => "Nights",
            InternalVariable::PromoCode => "Promo code",
            InternalVariable::Currency => "Currency",
            InternalVariable::HotelId => "Hotel ID",
        }
    }

    /// Display-only hint shown next to the variable in an editor.
    pub fn format_hint(self) -> Option<&'static str> {
        match self {
            InternalVariable::CheckIn | InternalVariable::CheckOut => Some("e.g. YYYY-MM-DD"),
            InternalVariable::TotalGuests => Some("adults + children"),
            _ => None,
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, InternalVariable::CheckIn | InternalVariable::CheckOut)
    }

    /// Format pattern a freshly created rule gets for this variable.
    pub fn default_format(self) -> &'static str {
        if self.is_date() {
            DEFAULT_DATE_FORMAT
        } else {
            ""
        }
    }
}

impl fmt::Display for InternalVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InternalVariable {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InternalVariable::ALL
            .into_iter()
            .find(|v| v.key() == s)
            .ok_or_else(|| TemplateError::UnknownVariable(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for v in InternalVariable::ALL {
            assert_eq!(v.key().parse::<InternalVariable>().unwrap(), v);
        }
    }

    #[test]
    fn unknown_key_rejected() {
        assert_eq!(
            "checkin".parse::<InternalVariable>(),
            Err(TemplateError::UnknownVariable("checkin".to_string()))
        );
    }

    #[test]
    fn serde_uses_catalog_keys() {
        let json = serde_json::to_string(&InternalVariable::TotalGuests).unwrap();
        assert_eq!(json, "\"totalGuests\"");
        let v: InternalVariable = serde_json::from_str("\"promoCode\"").unwrap();
        assert_eq!(v, InternalVariable::PromoCode);
    }

    #[test]
    fn only_dates_have_default_format() {
        assert_eq!(InternalVariable::CheckIn.default_format(), "YYYY-MM-DD");
        assert_eq!(InternalVariable::CheckOut.default_format(), "YYYY-MM-DD");
        assert_eq!(InternalVariable::Currency.default_format(), "");
        assert!(InternalVariable::TotalGuests.format_hint().is_some());
        assert!(InternalVariable::Adults.format_hint().is_none());
    }
}
