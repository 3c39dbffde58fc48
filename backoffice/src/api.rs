//! The narrow interface the back-office needs from the remote API.

use payloads::{
    APIClient, BookingId, CabinDetails, CabinId, ClientError, Settings,
    requests::{self, CheckinBreakfast},
    responses,
};

/// Remote operations used by the back-office workflows.
///
/// Implemented by [`APIClient`] for the real service; tests substitute an
/// in-process fake.
#[allow(async_fn_in_trait)]
pub trait BackofficeApi {
    async fn fetch_booking(
        &self,
        booking_id: BookingId,
    ) -> Result<responses::Booking, ClientError>;

    async fn fetch_settings(&self) -> Result<Settings, ClientError>;

    async fn mutate_checkin(
        &self,
        booking_id: BookingId,
        breakfast: CheckinBreakfast,
    ) -> Result<responses::Booking, ClientError>;

    async fn check_out(
        &self,
        booking_id: BookingId,
    ) -> Result<responses::Booking, ClientError>;

    async fn delete_booking(
        &self,
        booking_id: BookingId,
    ) -> Result<(), ClientError>;

    async fn list_bookings(
        &self,
    ) -> Result<Vec<responses::Booking>, ClientError>;

    async fn list_cabins(&self) -> Result<Vec<responses::Cabin>, ClientError>;

    async fn create_cabin(
        &self,
        details: &CabinDetails,
    ) -> Result<responses::Cabin, ClientError>;

    async fn update_cabin(
        &self,
        cabin_id: CabinId,
        details: &CabinDetails,
    ) -> Result<responses::Cabin, ClientError>;

    async fn delete_cabin(&self, cabin_id: CabinId) -> Result<(), ClientError>;
}

impl BackofficeApi for APIClient {
    async fn fetch_booking(
        &self,
        booking_id: BookingId,
    ) -> Result<responses::Booking, ClientError> {
        self.get_booking(&booking_id).await
    }

    async fn fetch_settings(&self) -> Result<Settings, ClientError> {
        self.get_settings().await
    }

    async fn mutate_checkin(
        &self,
        booking_id: BookingId,
        breakfast: CheckinBreakfast,
    ) -> Result<responses::Booking, ClientError> {
        self.check_in(&requests::CheckIn {
            booking_id,
            breakfast,
        })
        .await
    }

    async fn check_out(
        &self,
        booking_id: BookingId,
    ) -> Result<responses::Booking, ClientError> {
        APIClient::check_out(self, &booking_id).await
    }

    async fn delete_booking(
        &self,
        booking_id: BookingId,
    ) -> Result<(), ClientError> {
        APIClient::delete_booking(self, &booking_id).await
    }

    async fn list_bookings(
        &self,
    ) -> Result<Vec<responses::Booking>, ClientError> {
        APIClient::list_bookings(self).await
    }

    async fn list_cabins(&self) -> Result<Vec<responses::Cabin>, ClientError> {
        APIClient::list_cabins(self).await
    }

    async fn create_cabin(
        &self,
        details: &CabinDetails,
    ) -> Result<responses::Cabin, ClientError> {
        APIClient::create_cabin(self, details).await
    }

    async fn update_cabin(
        &self,
        cabin_id: CabinId,
        details: &CabinDetails,
    ) -> Result<responses::Cabin, ClientError> {
        APIClient::update_cabin(
            self,
            &requests::UpdateCabin {
                cabin_id,
                cabin_details: details.clone(),
            },
        )
        .await
    }

    async fn delete_cabin(&self, cabin_id: CabinId) -> Result<(), ClientError> {
        APIClient::delete_cabin(self, &cabin_id).await
    }
}
