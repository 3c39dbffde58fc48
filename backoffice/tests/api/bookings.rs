use backoffice::Error;
use backoffice::bookings::{BookingFilter, BookingSort, table_rows};
use payloads::{BookingStatus, requests};
use test_helpers::spawn_app;

use crate::backoffice;

#[tokio::test]
async fn check_out_a_checked_in_guest() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;
    let mut ctx = backoffice(&app);

    let err = ctx.check_out(booking.booking_id).await.unwrap_err();
    assert!(matches!(err, Error::BookingStatus { .. }));

    app.client
        .check_in(&requests::CheckIn {
            booking_id: booking.booking_id,
            breakfast: requests::CheckinBreakfast::none(),
        })
        .await?;
    // the cached copy is stale after a check-in made elsewhere
    ctx.cache.invalidate_booking(booking.booking_id);

    let checked_out = ctx.check_out(booking.booking_id).await?;
    assert_eq!(checked_out.status, BookingStatus::CheckedOut);

    let rows = table_rows(
        ctx.bookings().await?,
        BookingFilter::Status(BookingStatus::CheckedOut),
        BookingSort::default(),
    );
    assert_eq!(rows.len(), 1);

    Ok(())
}

#[tokio::test]
async fn delete_a_booking() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;
    let mut ctx = backoffice(&app);
    assert_eq!(ctx.bookings().await?.len(), 1);

    ctx.delete_booking(booking.booking_id).await?;

    assert!(ctx.bookings().await?.is_empty());
    let err = ctx.booking(booking.booking_id).await.unwrap_err();
    assert!(matches!(err, Error::Remote(e) if e.is_not_found()));

    Ok(())
}
