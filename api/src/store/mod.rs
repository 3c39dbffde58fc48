//! In-memory store backing the stand-in API.
//!
//! ## Design Decisions
//!
//! - **Single lock**: the whole inventory sits behind one mutex. Requests are
//!   short and never await while holding it.
//! - **Sequential ids**: cabins, bookings and guests get increasing integer
//!   ids, mirroring the booking numbers staff see ("booking #12").
//! - **Uploads become urls**: a cabin image uploaded with a create/update
//!   request is replaced by a `Url` reference before it is stored, so stored
//!   cabins never carry raw image bytes.
//! - **Fault injection**: tests can arm a number of failures for check-ins or
//!   cabin writes to simulate the remote side rejecting a request.

use anyhow::Context;
use jiff::civil::Date;
use payloads::{
    BookingId, BookingStatus, CabinDetails, CabinId, CabinImage,
    CabinSummary, Guest, GuestId, Settings, requests, responses,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::time::TimeSource;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Cabin not found")]
    CabinNotFound,
    #[error("Booking not found")]
    BookingNotFound,
    #[error("Invalid cabin: {0}")]
    InvalidCabin(&'static str),
    #[error("Booking is {found}, expected {expected}")]
    InvalidBookingStatus {
        expected: BookingStatus,
        found: BookingStatus,
    },
    #[error("Cannot delete a cabin with bookings")]
    CabinHasBookings,
    #[error("Service temporarily unavailable")]
    Unavailable,
    #[error("Unexpected error")]
    UnexpectedError(#[from] anyhow::Error),
}

/// Guest details for a seeded booking.
#[derive(Debug, Clone)]
pub struct NewGuest {
    pub full_name: String,
    pub email: String,
    pub nationality: String,
    pub national_id: String,
    pub country_flag: Option<String>,
}

/// A booking to seed into the store. Prices and the night count are derived
/// from the cabin, the dates and the current settings.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub cabin_id: CabinId,
    pub start_date: Date,
    pub end_date: Date,
    pub num_guests: i32,
    pub has_breakfast: bool,
    pub is_paid: bool,
    pub status: BookingStatus,
    pub observations: Option<String>,
    pub guest: NewGuest,
}

#[derive(Debug, Default)]
struct Faults {
    checkin: u32,
    cabin_writes: u32,
}

impl Faults {
    fn trip(counter: &mut u32) -> Result<(), StoreError> {
        if *counter > 0 {
            *counter -= 1;
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }
}

struct Inventory {
    settings: Settings,
    cabins: BTreeMap<CabinId, responses::Cabin>,
    bookings: BTreeMap<BookingId, responses::Booking>,
    next_cabin_id: i64,
    next_booking_id: i64,
    next_guest_id: i64,
    faults: Faults,
}

pub struct Store {
    inventory: Mutex<Inventory>,
    time_source: TimeSource,
}

impl Store {
    pub fn new(settings: Settings, time_source: TimeSource) -> Self {
        Self {
            inventory: Mutex::new(Inventory {
                settings,
                cabins: BTreeMap::new(),
                bookings: BTreeMap::new(),
                next_cabin_id: 1,
                next_booking_id: 1,
                next_guest_id: 1,
                faults: Faults::default(),
            }),
            time_source,
        }
    }

    fn inventory(&self) -> MutexGuard<'_, Inventory> {
        self.inventory
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Make the next `count` check-in requests fail.
    pub fn fail_next_checkins(&self, count: u32) {
        self.inventory().faults.checkin = count;
    }

    /// Make the next `count` cabin create/update/delete requests fail.
    pub fn fail_next_cabin_writes(&self, count: u32) {
        self.inventory().faults.cabin_writes = count;
    }

    pub fn settings(&self) -> Settings {
        self.inventory().settings.clone()
    }

    pub fn update_settings(&self, settings: Settings) {
        self.inventory().settings = settings;
    }

    pub fn list_cabins(&self) -> Vec<responses::Cabin> {
        self.inventory().cabins.values().cloned().collect()
    }

    pub fn create_cabin(
        &self,
        details: &CabinDetails,
    ) -> Result<responses::Cabin, StoreError> {
        check_cabin_details(details)?;
        let mut inventory = self.inventory();
        Faults::trip(&mut inventory.faults.cabin_writes)?;

        let cabin_id = CabinId(inventory.next_cabin_id);
        inventory.next_cabin_id += 1;
        let cabin = responses::Cabin {
            cabin_id,
            cabin_details: stored_details(cabin_id, details.clone()),
            created_at: self.time_source.now(),
        };
        inventory.cabins.insert(cabin_id, cabin.clone());
        tracing::debug!(%cabin_id, "created cabin");
        Ok(cabin)
    }

    pub fn update_cabin(
        &self,
        details: &requests::UpdateCabin,
    ) -> Result<responses::Cabin, StoreError> {
        check_cabin_details(&details.cabin_details)?;
        let mut inventory = self.inventory();
        Faults::trip(&mut inventory.faults.cabin_writes)?;

        let cabin = inventory
            .cabins
            .get_mut(&details.cabin_id)
            .ok_or(StoreError::CabinNotFound)?;
        cabin.cabin_details =
            stored_details(details.cabin_id, details.cabin_details.clone());
        let updated = cabin.clone();

        // bookings show the cabin name, keep it in sync
        for booking in inventory.bookings.values_mut() {
            if booking.cabin.cabin_id == details.cabin_id {
                booking.cabin.name = updated.cabin_details.name.clone();
            }
        }
        Ok(updated)
    }

    pub fn delete_cabin(&self, cabin_id: &CabinId) -> Result<(), StoreError> {
        let mut inventory = self.inventory();
        Faults::trip(&mut inventory.faults.cabin_writes)?;

        if !inventory.cabins.contains_key(cabin_id) {
            return Err(StoreError::CabinNotFound);
        }
        if inventory
            .bookings
            .values()
            .any(|b| b.cabin.cabin_id == *cabin_id)
        {
            return Err(StoreError::CabinHasBookings);
        }
        inventory.cabins.remove(cabin_id);
        Ok(())
    }

    /// Bookings, most recently created first.
    pub fn list_bookings(&self) -> Vec<responses::Booking> {
        let mut bookings: Vec<_> =
            self.inventory().bookings.values().cloned().collect();
        bookings.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.booking_id.cmp(&a.booking_id))
        });
        bookings
    }

    pub fn get_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::Booking, StoreError> {
        self.inventory()
            .bookings
            .get(booking_id)
            .cloned()
            .ok_or(StoreError::BookingNotFound)
    }

    pub fn create_booking(
        &self,
        new: NewBooking,
    ) -> Result<responses::Booking, StoreError> {
        let mut inventory = self.inventory();
        let cabin = inventory
            .cabins
            .get(&new.cabin_id)
            .ok_or(StoreError::CabinNotFound)?;

        let num_nights = new
            .start_date
            .until(new.end_date)
            .context("booking dates out of range")?
            .get_days();
        let nightly = cabin.regular_price - cabin.discount;
        let cabin_price = nightly * Decimal::from(num_nights);
        let extras_price = if new.has_breakfast {
            inventory.settings.breakfast_price
                * Decimal::from(num_nights)
                * Decimal::from(new.num_guests)
        } else {
            Decimal::ZERO
        };
        let cabin_summary = CabinSummary {
            cabin_id: cabin.cabin_id,
            name: cabin.name.clone(),
        };

        let guest = Guest {
            guest_id: GuestId(inventory.next_guest_id),
            full_name: new.guest.full_name,
            email: new.guest.email,
            nationality: new.guest.nationality,
            national_id: new.guest.national_id,
            country_flag: new.guest.country_flag,
        };
        inventory.next_guest_id += 1;

        let booking_id = BookingId(inventory.next_booking_id);
        inventory.next_booking_id += 1;
        let booking = responses::Booking {
            booking_id,
            created_at: self.time_source.now(),
            start_date: new.start_date,
            end_date: new.end_date,
            num_nights,
            num_guests: new.num_guests,
            cabin_price,
            extras_price,
            total_price: cabin_price + extras_price,
            has_breakfast: new.has_breakfast,
            is_paid: new.is_paid,
            status: new.status,
            observations: new.observations,
            guest,
            cabin: cabin_summary,
        };
        inventory.bookings.insert(booking_id, booking.clone());
        Ok(booking)
    }

    pub fn delete_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<(), StoreError> {
        self.inventory()
            .bookings
            .remove(booking_id)
            .map(|_| ())
            .ok_or(StoreError::BookingNotFound)
    }

    pub fn check_in(
        &self,
        details: &requests::CheckIn,
    ) -> Result<responses::Booking, StoreError> {
        let mut inventory = self.inventory();
        Faults::trip(&mut inventory.faults.checkin)?;

        let booking = inventory
            .bookings
            .get_mut(&details.booking_id)
            .ok_or(StoreError::BookingNotFound)?;
        expect_status(booking, BookingStatus::Unconfirmed)?;

        booking.status = BookingStatus::CheckedIn;
        booking.is_paid = true;
        let breakfast = &details.breakfast;
        if breakfast.has_breakfast == Some(true) {
            booking.has_breakfast = true;
            if let Some(extra_price) = breakfast.extra_price {
                booking.extras_price = extra_price;
            }
            if let Some(total_price) = breakfast.total_price {
                booking.total_price = total_price;
            }
        }
        Ok(booking.clone())
    }

    pub fn check_out(
        &self,
        booking_id: &BookingId,
    ) -> Result<responses::Booking, StoreError> {
        let mut inventory = self.inventory();
        let booking = inventory
            .bookings
            .get_mut(booking_id)
            .ok_or(StoreError::BookingNotFound)?;
        expect_status(booking, BookingStatus::CheckedIn)?;
        booking.status = BookingStatus::CheckedOut;
        Ok(booking.clone())
    }
}

fn expect_status(
    booking: &responses::Booking,
    expected: BookingStatus,
) -> Result<(), StoreError> {
    if booking.status != expected {
        return Err(StoreError::InvalidBookingStatus {
            expected,
            found: booking.status,
        });
    }
    Ok(())
}

/// The remote side repeats the important form checks so a client that skips
/// them cannot store an inconsistent cabin.
fn check_cabin_details(details: &CabinDetails) -> Result<(), StoreError> {
    if details.name.trim().is_empty() {
        return Err(StoreError::InvalidCabin("name is required"));
    }
    if details.name.chars().count() > requests::CABIN_NAME_MAX_LEN {
        return Err(StoreError::InvalidCabin("name is too long"));
    }
    if details.max_capacity < 1 {
        return Err(StoreError::InvalidCabin("capacity must be at least 1"));
    }
    if details.regular_price < Decimal::ONE {
        return Err(StoreError::InvalidCabin("price must be at least 1"));
    }
    if details.discount.is_sign_negative()
        || details.discount > details.regular_price
    {
        return Err(StoreError::InvalidCabin(
            "discount must be between 0 and the regular price",
        ));
    }
    Ok(())
}

fn stored_details(cabin_id: CabinId, mut details: CabinDetails) -> CabinDetails {
    if let CabinImage::Upload { file_name, .. } = &details.image {
        details.image =
            CabinImage::url(format!("/images/cabins/{cabin_id}-{file_name}"));
    }
    details
}
