//! Concrete booking values a template is filled with or read back into.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_pattern::format_date;
use crate::catalog::InternalVariable;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adults: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_guests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<String>,
}

impl BookingValues {
    /// Guest total: explicit value, else adults plus children (`None` on overflow).
    pub fn effective_total_guests(&self) -> Option<u32> {
        self.total_guests
            .or_else(|| self.adults?.checked_add(self.children.unwrap_or(0)))
    }

    /// Night count: explicit value, else the span between the two dates.
    pub fn effective_nights(&self) -> Option<u32> {
        self.nights.or_else(|| {
            let span = (self.check_out? - self.check_in?).num_days();
            u32::try_from(span).ok()
        })
    }

    /// Text for `variable`, dates rendered with `pattern`.
    pub fn text_for(&self, variable: InternalVariable, pattern: &str) -> Option<String> {
        match variable {
            InternalVariable::CheckIn => self.check_in.map(|d| format_date(d, pattern)),
            InternalVariable::CheckOut => self.check_out.map(|d| format_date(d, pattern)),
            InternalVariable::Adults => self.adults.map(|n| n.to_string()),
            InternalVariable::Children => self.children.map(|n| n.to_string()),
            InternalVariable::TotalGuests => self.effective_total_guests().map(|n| n.to_string()),
            InternalVariable::Nights => self.effective_nights().map(|n| n.to_string()),
            InternalVariable::PromoCode => self.promo_code.clone(),
            InternalVariable::Currency => self.currency.clone(),
            InternalVariable::HotelId => self.hotel_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_totals() {
        let v = BookingValues {
            check_in: NaiveDate::from_ymd_opt(2024, 12, 30),
            check_out: NaiveDate::from_ymd_opt(2025, 1, 2),
            adults: Some(2),
            children: Some(1),
            ..Default::default()
        };
        assert_eq!(v.effective_total_guests(), Some(3));
        assert_eq!(v.effective_nights(), Some(3));
        assert_eq!(
            v.text_for(InternalVariable::CheckOut, "DDMMYYYY").as_deref(),
            Some("02012025")
        );
    }

    #[test]
    fn explicit_values_win_and_reversed_dates_give_nothing() {
        let v = BookingValues {
            check_in: NaiveDate::from_ymd_opt(2025, 1, 2),
            check_out: NaiveDate::from_ymd_opt(2024, 12, 30),
            total_guests: Some(5),
            adults: Some(2),
            ..Default::default()
        };
        assert_eq!(v.effective_total_guests(), Some(5));
        assert_eq!(v.effective_nights(), None);
        assert_eq!(v.text_for(InternalVariable::Currency, ""), None);
    }

    #[test]
    fn guest_total_overflow_gives_nothing() {
        let v = BookingValues {
            adults: Some(u32::MAX),
            children: Some(1),
            ..Default::default()
        };
        assert_eq!(v.effective_total_guests(), None);
        assert_eq!(v.text_for(InternalVariable::TotalGuests, ""), None);
    }
}
