//! Development dataset for the in-memory api
//!
//! Seeds a handful of cabins and bookings in every lifecycle state so the
//! back-office workflows have something realistic to work on:
//! - cabins with and without a discount
//! - unconfirmed bookings, paid and unpaid, with and without breakfast
//! - a checked-in booking ready for check-out, and a checked-out one

use crate::{TestApp, guest_a};
use anyhow::Result;
use api::store::{NewBooking, NewGuest};
use jiff::civil::date;
use payloads::{BookingStatus, CabinDetails, CabinImage, responses};
use rust_decimal::dec;

pub struct DevDataset {
    pub cabins: Vec<responses::Cabin>,
    /// Unpaid, no breakfast: the plain check-in case.
    pub unconfirmed: responses::Booking,
    /// Paid in advance, breakfast already booked.
    pub prepaid_with_breakfast: responses::Booking,
    pub checked_in: responses::Booking,
    pub checked_out: responses::Booking,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("Creating cabins");
        let mut cabins = Vec::new();
        for details in cabin_catalog() {
            cabins.push(app.client.create_cabin(&details).await?);
        }

        tracing::info!("Creating bookings");
        let unconfirmed = app.store.create_booking(NewBooking {
            cabin_id: cabins[0].cabin_id,
            start_date: date(2025, 1, 10),
            end_date: date(2025, 1, 13),
            num_guests: 2,
            has_breakfast: false,
            is_paid: false,
            status: BookingStatus::Unconfirmed,
            observations: None,
            guest: guest_a(),
        })?;
        let prepaid_with_breakfast = app.store.create_booking(NewBooking {
            cabin_id: cabins[1].cabin_id,
            start_date: date(2025, 1, 12),
            end_date: date(2025, 1, 19),
            num_guests: 4,
            has_breakfast: true,
            is_paid: true,
            status: BookingStatus::Unconfirmed,
            observations: Some("Arriving late, around 23:00".into()),
            guest: guest(
                "Maria Gomez",
                "maria@example.com",
                "Spain",
                "1234567890",
            ),
        })?;
        let checked_in = app.store.create_booking(NewBooking {
            cabin_id: cabins[2].cabin_id,
            start_date: date(2024, 12, 28),
            end_date: date(2025, 1, 2),
            num_guests: 1,
            has_breakfast: true,
            is_paid: true,
            status: BookingStatus::CheckedIn,
            observations: None,
            guest: guest(
                "Fatima Ahmed",
                "fatima@example.com",
                "Egypt",
                "5647382910",
            ),
        })?;
        let checked_out = app.store.create_booking(NewBooking {
            cabin_id: cabins[0].cabin_id,
            start_date: date(2024, 12, 20),
            end_date: date(2024, 12, 23),
            num_guests: 2,
            has_breakfast: false,
            is_paid: true,
            status: BookingStatus::CheckedOut,
            observations: None,
            guest: guest(
                "Emma Watson",
                "emma@example.com",
                "United Kingdom",
                "9988776655",
            ),
        })?;

        Ok(Self {
            cabins,
            unconfirmed,
            prepaid_with_breakfast,
            checked_in,
            checked_out,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("Cabins:");
        for cabin in &self.cabins {
            tracing::info!(
                "   #{} {} (up to {} guests, {})",
                cabin.cabin_id,
                cabin.name,
                cabin.max_capacity,
                cabin.regular_price
            );
        }
        tracing::info!("Bookings:");
        for booking in [
            &self.unconfirmed,
            &self.prepaid_with_breakfast,
            &self.checked_in,
            &self.checked_out,
        ] {
            tracing::info!(
                "   #{} {} in {} ({}, total {})",
                booking.booking_id,
                booking.guest.full_name,
                booking.cabin.name,
                booking.status,
                booking.total_price
            );
        }
    }
}

fn guest(
    full_name: &str,
    email: &str,
    nationality: &str,
    national_id: &str,
) -> NewGuest {
    NewGuest {
        full_name: full_name.into(),
        email: email.into(),
        nationality: nationality.into(),
        national_id: national_id.into(),
        country_flag: None,
    }
}

fn cabin_catalog() -> Vec<CabinDetails> {
    vec![
        crate::cabin_details_a(),
        CabinDetails {
            name: "Mountain Lodge".into(),
            max_capacity: 6,
            regular_price: dec!(350),
            discount: dec!(25),
            description: "Spacious lodge with a fireplace and valley views."
                .into(),
            image: CabinImage::url("/images/cabins/mountain.jpg"),
        },
        CabinDetails {
            name: "Hideaway".into(),
            max_capacity: 2,
            regular_price: dec!(120),
            discount: dec!(0),
            description: "Cosy cabin for two.".into(),
            image: CabinImage::url("/images/cabins/hideaway.jpg"),
        },
    ]
}
