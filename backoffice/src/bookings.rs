//! Booking operations outside of check-in: check-out, deletion and the
//! bookings table's filter and sort options.

use derive_more::Display;
use payloads::{BookingId, BookingStatus, responses};
use std::str::FromStr;

use crate::table::{ParseOptionError, SortDirection, split_sort};
use crate::{Backoffice, BackofficeApi, Error};

impl<A: BackofficeApi> Backoffice<A> {
    /// Check out a guest. Only checked-in bookings can be checked out.
    #[tracing::instrument(skip(self))]
    pub async fn check_out(
        &mut self,
        booking_id: BookingId,
    ) -> Result<responses::Booking, Error> {
        let booking = self.booking(booking_id).await?;
        if booking.status != BookingStatus::CheckedIn {
            return Err(Error::BookingStatus {
                booking_id,
                expected: BookingStatus::CheckedIn,
                found: booking.status,
            });
        }

        match self.api.check_out(booking_id).await {
            Ok(booking) => {
                self.cache.invalidate_booking(booking_id);
                self.notifications.success(format!(
                    "Booking #{booking_id} successfully checked out"
                ));
                Ok(booking)
            }
            Err(e) => {
                tracing::warn!("check-out failed: {e}");
                self.notifications
                    .error("There was an error while checking out");
                Err(e.into())
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_booking(
        &mut self,
        booking_id: BookingId,
    ) -> Result<(), Error> {
        match self.api.delete_booking(booking_id).await {
            Ok(()) => {
                self.cache.invalidate_booking(booking_id);
                self.notifications.success("Booking successfully deleted");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("booking deletion failed: {e}");
                self.notifications.error(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFilter {
    #[default]
    All,
    Status(BookingStatus),
}

impl BookingFilter {
    pub fn matches(self, booking: &responses::Booking) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => booking.status == status,
        }
    }
}

impl FromStr for BookingFilter {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s {
            "all" => return Ok(Self::All),
            "unconfirmed" => BookingStatus::Unconfirmed,
            "checked-in" => BookingStatus::CheckedIn,
            "checked-out" => BookingStatus::CheckedOut,
            _ => {
                return Err(ParseOptionError {
                    kind: "booking filter",
                    value: s.to_string(),
                });
            }
        };
        Ok(Self::Status(status))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum BookingSortField {
    #[default]
    #[display("start_date")]
    StartDate,
    #[display("total_price")]
    TotalPrice,
}

/// Defaults to the most recent stay first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{field}-{direction}")]
pub struct BookingSort {
    pub field: BookingSortField,
    pub direction: SortDirection,
}

impl Default for BookingSort {
    fn default() -> Self {
        Self {
            field: BookingSortField::StartDate,
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for BookingSort {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = split_sort("booking sort", s)?;
        let field = match field {
            "start_date" => BookingSortField::StartDate,
            "total_price" => BookingSortField::TotalPrice,
            _ => {
                return Err(ParseOptionError {
                    kind: "booking sort",
                    value: s.to_string(),
                });
            }
        };
        Ok(Self { field, direction })
    }
}

pub fn table_rows(
    bookings: &[responses::Booking],
    filter: BookingFilter,
    sort: BookingSort,
) -> Vec<&responses::Booking> {
    let mut rows: Vec<_> =
        bookings.iter().filter(|b| filter.matches(b)).collect();
    rows.sort_by(|a, b| {
        let ordering = match sort.field {
            BookingSortField::StartDate => a.start_date.cmp(&b.start_date),
            BookingSortField::TotalPrice => a.total_price.cmp(&b.total_price),
        };
        sort.direction.apply(ordering)
    });
    rows
}
