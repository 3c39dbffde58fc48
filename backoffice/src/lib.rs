//! Back-office core for a cabin-rental hotel: cabin inventory, bookings and
//! the guest check-in workflow.
//!
//! Rendering is left to the caller. Everything here works against a
//! [`Backoffice`] context, which bundles the remote API, the query cache and
//! the pending notifications, and is passed explicitly to every operation.

pub mod api;
pub mod bookings;
pub mod cabins;
pub mod cache;
pub mod checkin;
pub mod format;
pub mod notifications;
pub mod pricing;
pub mod queries;
pub mod table;
pub mod validation;

pub use api::BackofficeApi;
pub use cache::{FetchState, QueryCache, QueryKey};
pub use checkin::{
    CheckinDecision, CheckinPhase, CheckinSession, IgnoreReason, Transition,
};
pub use notifications::{Notifications, Toast, ToastType};
pub use validation::{FieldViolation, ValidationError};

use payloads::{BookingId, BookingStatus, ClientError};

/// Services shared by every back-office operation.
pub struct Backoffice<A> {
    pub api: A,
    pub cache: QueryCache,
    pub notifications: Notifications,
}

impl<A> Backoffice<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: QueryCache::default(),
            notifications: Notifications::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Form input rejected before reaching the remote API.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Pricing(#[from] pricing::PricingError),
    /// The remote call failed; the operation can be retried.
    #[error(transparent)]
    Remote(#[from] ClientError),
    #[error("Booking #{booking_id} is {found}, expected {expected}")]
    BookingStatus {
        booking_id: BookingId,
        expected: BookingStatus,
        found: BookingStatus,
    },
}

pub struct Config {
    /// Base url of the remote API, without the `/api` suffix.
    pub api_address: String,
    /// Default log filter, overridden by RUST_LOG.
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("API_ADDRESS must be an http(s) url, got {0:?}")]
    InvalidAddress(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_address = lookup("API_ADDRESS")
            .ok_or(ConfigError::Missing("API_ADDRESS"))?
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(api_address.starts_with("http://")
            || api_address.starts_with("https://"))
        {
            return Err(ConfigError::InvalidAddress(api_address));
        }

        Ok(Config {
            api_address,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
        })
    }
}
