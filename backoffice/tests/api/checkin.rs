use backoffice::{CheckinPhase, CheckinSession, Error, ToastType};
use payloads::{BookingStatus, ClientError};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::spawn_app;

use crate::backoffice;

#[tokio::test]
async fn check_in_with_breakfast() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;
    let mut ctx = backoffice(&app);

    let mut session = CheckinSession::start(&mut ctx, booking.booking_id).await?;
    // 3 nights, 2 guests at 15
    assert_eq!(session.breakfast_charge(), dec!(90));
    session.toggle_breakfast();
    session.confirm_payment(true);
    assert_eq!(session.effective_total(), dec!(630));

    let checked_in = session
        .submit(&mut ctx)
        .await?
        .expect("submission should run")
        .clone();
    assert_eq!(checked_in.status, BookingStatus::CheckedIn);
    assert!(checked_in.has_breakfast);
    assert!(checked_in.is_paid);
    assert_eq!(checked_in.extras_price, dec!(90));
    assert_eq!(checked_in.total_price, dec!(630));

    let reloaded = ctx.booking(booking.booking_id).await?;
    assert_eq!(reloaded, checked_in);

    Ok(())
}

#[tokio::test]
async fn check_in_without_breakfast() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;
    let mut ctx = backoffice(&app);

    let mut session = CheckinSession::start(&mut ctx, booking.booking_id).await?;
    session.confirm_payment(true);
    assert!(session.payload().is_empty());

    let checked_in = session
        .submit(&mut ctx)
        .await?
        .expect("submission should run")
        .clone();
    assert!(!checked_in.has_breakfast);
    assert_eq!(checked_in.total_price, dec!(540));

    Ok(())
}

#[tokio::test]
async fn rejected_check_in_can_be_retried() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;
    let mut ctx = backoffice(&app);
    app.fail_next_checkins(1);

    let mut session = CheckinSession::start(&mut ctx, booking.booking_id).await?;
    session.toggle_breakfast();
    session.confirm_payment(true);

    let err = session.submit(&mut ctx).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Remote(ClientError::APIError(
            StatusCode::SERVICE_UNAVAILABLE,
            _
        ))
    ));
    assert_eq!(session.phase(), &CheckinPhase::PaymentConfirmed);
    assert!(session.decision().paid_confirmed);
    assert_eq!(
        ctx.notifications.latest().map(|t| t.toast_type),
        Some(ToastType::Error)
    );

    let checked_in = session
        .submit(&mut ctx)
        .await?
        .expect("retry should run")
        .clone();
    assert_eq!(checked_in.total_price, dec!(630));
    assert_eq!(
        ctx.notifications.latest().map(|t| t.message.clone()),
        Some(format!(
            "Booking #{} successfully checked in",
            booking.booking_id
        ))
    );

    Ok(())
}

#[tokio::test]
async fn checked_in_booking_cannot_start_a_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, booking) = app.create_cabin_with_booking().await?;
    let mut ctx = backoffice(&app);

    let mut session = CheckinSession::start(&mut ctx, booking.booking_id).await?;
    session.confirm_payment(true);
    session.submit(&mut ctx).await?;

    let err = CheckinSession::start(&mut ctx, booking.booking_id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::BookingStatus {
            found: BookingStatus::CheckedIn,
            ..
        }
    ));

    Ok(())
}
