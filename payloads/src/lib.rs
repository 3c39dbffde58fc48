//! Types shared between the back-office core and the remote API, plus the
//! HTTP client used to reach it.

pub mod api_client;
pub mod requests;
pub mod responses;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
pub struct CabinId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
pub struct BookingId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
pub struct GuestId(pub i64);

/// Image attached to a cabin.
///
/// Existing cabins always carry a `Url` pointing at the stored image. A new
/// upload is only present on a create/edit payload and is replaced by a
/// `Url` once the remote side has stored it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CabinImage {
    Url { url: String },
    Upload { file_name: String, data: Vec<u8> },
}

impl CabinImage {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }
}

/// Everything needed to create or update a cabin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinDetails {
    pub name: String,
    pub max_capacity: i32,
    pub regular_price: Decimal,
    /// Absolute amount taken off the regular price, zero when there is no
    /// discount.
    pub discount: Decimal,
    pub description: String,
    pub image: CabinImage,
}

impl CabinDetails {
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }
}

/// Hotel-wide configuration, fetched once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub min_booking_length: i32,
    pub max_booking_length: i32,
    pub max_guests_per_booking: i32,
    /// Price of breakfast for one guest for one night.
    pub breakfast_price: Decimal,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    #[display("unconfirmed")]
    Unconfirmed,
    #[display("checked-in")]
    CheckedIn,
    #[display("checked-out")]
    CheckedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub guest_id: GuestId,
    pub full_name: String,
    pub email: String,
    pub nationality: String,
    pub national_id: String,
    pub country_flag: Option<String>,
}

/// The cabin a booking refers to, without its full details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinSummary {
    pub cabin_id: CabinId,
    pub name: String,
}
