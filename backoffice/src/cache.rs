//! Client-side cache of remote query results.
//!
//! The cache is owned by the [`Backoffice`](crate::Backoffice) context and
//! only written by the completion of a remote call. Mutations invalidate the
//! entries they affect:
//!
//! | Mutation                          | Invalidates                  |
//! |-----------------------------------|------------------------------|
//! | cabin create / update / delete    | `Cabins`                     |
//! | check-in / check-out / delete     | `Bookings`, `Booking(id)`    |
//!
//! Settings are loaded once per session and never invalidated.

use payloads::{BookingId, Settings, responses};
use std::collections::HashMap;

/// Result of a query that may not have run yet.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Cabins,
    Bookings,
    Booking(BookingId),
    Settings,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    cabins: FetchState<Vec<responses::Cabin>>,
    bookings: FetchState<Vec<responses::Booking>>,
    individual_bookings: HashMap<BookingId, responses::Booking>,
    settings: FetchState<Settings>,
}

impl QueryCache {
    pub fn contains(&self, key: QueryKey) -> bool {
        match key {
            QueryKey::Cabins => self.cabins.is_fetched(),
            QueryKey::Bookings => self.bookings.is_fetched(),
            QueryKey::Booking(id) => self.individual_bookings.contains_key(&id),
            QueryKey::Settings => self.settings.is_fetched(),
        }
    }

    pub fn cabins(&self) -> &FetchState<Vec<responses::Cabin>> {
        &self.cabins
    }

    pub fn set_cabins(&mut self, cabins: Vec<responses::Cabin>) {
        self.cabins = FetchState::Fetched(cabins);
    }

    pub fn bookings(&self) -> &FetchState<Vec<responses::Booking>> {
        &self.bookings
    }

    pub fn set_bookings(&mut self, bookings: Vec<responses::Booking>) {
        self.bookings = FetchState::Fetched(bookings);
    }

    /// A single booking, either loaded on its own or as part of the list.
    pub fn booking(&self, booking_id: BookingId) -> Option<&responses::Booking> {
        self.individual_bookings.get(&booking_id).or_else(|| {
            self.bookings
                .as_ref()?
                .iter()
                .find(|b| b.booking_id == booking_id)
        })
    }

    pub fn set_booking(&mut self, booking: responses::Booking) {
        self.individual_bookings.insert(booking.booking_id, booking);
    }

    pub fn settings(&self) -> &FetchState<Settings> {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = FetchState::Fetched(settings);
    }

    pub fn invalidate(&mut self, key: QueryKey) {
        tracing::debug!(?key, "invalidating cache entry");
        match key {
            QueryKey::Cabins => self.cabins = FetchState::NotFetched,
            QueryKey::Bookings => self.bookings = FetchState::NotFetched,
            QueryKey::Booking(id) => {
                self.individual_bookings.remove(&id);
            }
            QueryKey::Settings => self.settings = FetchState::NotFetched,
        }
    }

    /// Drop everything a change to this booking could have made stale.
    pub fn invalidate_booking(&mut self, booking_id: BookingId) {
        self.invalidate(QueryKey::Bookings);
        self.invalidate(QueryKey::Booking(booking_id));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake;

    #[test]
    fn booking_lookup_falls_back_to_the_list() {
        let mut cache = QueryCache::default();
        let booking = fake::booking();
        assert!(cache.booking(booking.booking_id).is_none());

        cache.set_bookings(vec![booking.clone()]);
        assert_eq!(cache.booking(booking.booking_id), Some(&booking));
        assert!(!cache.contains(QueryKey::Booking(booking.booking_id)));
    }

    #[test]
    fn invalidating_a_booking_drops_list_and_entry() {
        let mut cache = QueryCache::default();
        let booking = fake::booking();
        cache.set_bookings(vec![booking.clone()]);
        cache.set_booking(booking.clone());
        cache.set_cabins(vec![fake::cabin()]);

        cache.invalidate_booking(booking.booking_id);

        assert!(!cache.contains(QueryKey::Bookings));
        assert!(!cache.contains(QueryKey::Booking(booking.booking_id)));
        assert!(cache.booking(booking.booking_id).is_none());
        assert!(cache.contains(QueryKey::Cabins));
    }
}
