use crate::{BookingId, BookingStatus, CabinId, CabinSummary, Guest};
use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cabin {
    pub cabin_id: CabinId,
    pub cabin_details: crate::CabinDetails,
    pub created_at: Timestamp,
}

impl std::ops::Deref for Cabin {
    type Target = crate::CabinDetails;

    fn deref(&self) -> &Self::Target {
        &self.cabin_details
    }
}

/// A guest's reserved stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub created_at: Timestamp,
    pub start_date: Date,
    pub end_date: Date,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: Decimal,
    /// Charges on top of the cabin price, currently only breakfast.
    pub extras_price: Decimal,
    pub total_price: Decimal,
    /// Breakfast was already booked, so check-in must not offer it again.
    pub has_breakfast: bool,
    pub is_paid: bool,
    pub status: BookingStatus,
    pub observations: Option<String>,
    pub guest: Guest,
    pub cabin: CabinSummary,
}
