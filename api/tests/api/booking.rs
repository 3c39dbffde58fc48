use payloads::{
    BookingId, BookingStatus,
    requests::{CheckIn, CheckinBreakfast},
};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn seeded_booking_prices() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (cabin, booking) = app.create_cabin_with_booking().await?;

    // 3 nights at 200 - 20
    assert_eq!(booking.num_nights, 3);
    assert_eq!(booking.cabin_price, dec!(540));
    assert_eq!(booking.extras_price, dec!(0));
    assert_eq!(booking.total_price, dec!(540));
    assert_eq!(booking.cabin.cabin_id, cabin.cabin_id);

    let bookings = app.client.list_bookings().await?;
    assert_eq!(bookings, vec![booking.clone()]);
    assert_eq!(app.client.get_booking(&booking.booking_id).await?, booking);

    Ok(())
}

#[tokio::test]
async fn check_in_with_breakfast() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;

    let checked_in = app
        .client
        .check_in(&CheckIn {
            booking_id: booking.booking_id,
            breakfast: CheckinBreakfast::added(dec!(90), dec!(630)),
        })
        .await?;

    assert_eq!(checked_in.status, BookingStatus::CheckedIn);
    assert!(checked_in.is_paid);
    assert!(checked_in.has_breakfast);
    assert_eq!(checked_in.extras_price, dec!(90));
    assert_eq!(checked_in.total_price, dec!(630));

    Ok(())
}

#[tokio::test]
async fn check_in_without_breakfast_keeps_prices() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;

    let checked_in = app
        .client
        .check_in(&CheckIn {
            booking_id: booking.booking_id,
            breakfast: CheckinBreakfast::none(),
        })
        .await?;

    assert_eq!(checked_in.status, BookingStatus::CheckedIn);
    assert!(!checked_in.has_breakfast);
    assert_eq!(checked_in.total_price, booking.total_price);

    // a second check-in is refused
    let result = app
        .client
        .check_in(&CheckIn {
            booking_id: booking.booking_id,
            breakfast: CheckinBreakfast::none(),
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn check_in_fault_leaves_booking_unconfirmed() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;
    app.fail_next_checkins(1);

    let request = CheckIn {
        booking_id: booking.booking_id,
        breakfast: CheckinBreakfast::none(),
    };
    let result = app.client.check_in(&request).await;
    assert_status_code(result, StatusCode::SERVICE_UNAVAILABLE);
    let unchanged = app.client.get_booking(&booking.booking_id).await?;
    assert_eq!(unchanged.status, BookingStatus::Unconfirmed);

    app.client.check_in(&request).await?;

    Ok(())
}

#[tokio::test]
async fn check_out_after_check_in() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;

    let result = app.client.check_out(&booking.booking_id).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    app.client
        .check_in(&CheckIn {
            booking_id: booking.booking_id,
            breakfast: CheckinBreakfast::none(),
        })
        .await?;
    let checked_out = app.client.check_out(&booking.booking_id).await?;
    assert_eq!(checked_out.status, BookingStatus::CheckedOut);

    Ok(())
}

#[tokio::test]
async fn delete_booking() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;

    app.client.delete_booking(&booking.booking_id).await?;

    assert!(app.client.list_bookings().await?.is_empty());
    let err = app
        .client
        .get_booking(&booking.booking_id)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Booking not found"));

    Ok(())
}

#[tokio::test]
async fn missing_booking_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_booking(&BookingId(7)).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn bookings_are_listed_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (cabin, first) = app.create_cabin_with_booking().await?;
    app.time_source.set("2025-01-02T00:00:00Z".parse()?);
    let second = app.create_test_booking(cabin.cabin_id)?;
    assert!(second.created_at > first.created_at);

    let ids: Vec<_> = app
        .client
        .list_bookings()
        .await?
        .iter()
        .map(|b| b.booking_id)
        .collect();
    assert_eq!(ids, [second.booking_id, first.booking_id]);

    Ok(())
}
