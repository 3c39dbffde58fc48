use crate::{BookingId, CabinId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const CABIN_NAME_MAX_LEN: usize = 255;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCabin {
    pub cabin_id: CabinId,
    pub cabin_details: crate::CabinDetails,
}

/// Breakfast added at check-in time.
///
/// Without an add-on this serializes to `{}`, which the remote side reads as
/// "leave the booking's breakfast and price untouched".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinBreakfast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_breakfast: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
}

impl CheckinBreakfast {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn added(extra_price: Decimal, total_price: Decimal) -> Self {
        Self {
            has_breakfast: Some(true),
            extra_price: Some(extra_price),
            total_price: Some(total_price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub booking_id: BookingId,
    pub breakfast: CheckinBreakfast,
}
