//! Cached reads. Each loader only goes to the remote API when its cache entry
//! is missing.

use payloads::{BookingId, Settings, responses};

use crate::{Backoffice, BackofficeApi, Error};

impl<A: BackofficeApi> Backoffice<A> {
    /// Settings are fetched once per session.
    #[tracing::instrument(skip(self))]
    pub async fn settings(&mut self) -> Result<Settings, Error> {
        if let Some(settings) = self.cache.settings().as_ref() {
            return Ok(settings.clone());
        }
        let settings = self.api.fetch_settings().await?;
        self.cache.set_settings(settings.clone());
        Ok(settings)
    }

    #[tracing::instrument(skip(self))]
    pub async fn cabins(&mut self) -> Result<&[responses::Cabin], Error> {
        if !self.cache.cabins().is_fetched() {
            let cabins = self.api.list_cabins().await?;
            tracing::debug!(count = cabins.len(), "fetched cabins");
            self.cache.set_cabins(cabins);
        }
        Ok(self
            .cache
            .cabins()
            .as_ref()
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    pub async fn bookings(&mut self) -> Result<&[responses::Booking], Error> {
        if !self.cache.bookings().is_fetched() {
            let bookings = self.api.list_bookings().await?;
            tracing::debug!(count = bookings.len(), "fetched bookings");
            self.cache.set_bookings(bookings);
        }
        Ok(self
            .cache
            .bookings()
            .as_ref()
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Fails with `ClientError::NotFound` when the booking does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn booking(
        &mut self,
        booking_id: BookingId,
    ) -> Result<responses::Booking, Error> {
        if let Some(booking) = self.cache.booking(booking_id) {
            return Ok(booking.clone());
        }
        let booking = self.api.fetch_booking(booking_id).await?;
        self.cache.set_booking(booking.clone());
        Ok(booking)
    }
}
