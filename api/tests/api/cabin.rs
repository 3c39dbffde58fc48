use payloads::{CabinId, CabinImage, requests::UpdateCabin};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn create_read_update_delete_cabin() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let cabin = app.create_test_cabin().await?;

    let cabins = app.client.list_cabins().await?;
    assert_eq!(cabins.len(), 1);
    assert_eq!(cabins[0], cabin);

    let mut details = cabin.cabin_details.clone();
    details.name = "Forest Cabin Deluxe".into();
    details.regular_price = dec!(250);
    let updated = app
        .client
        .update_cabin(&UpdateCabin {
            cabin_id: cabin.cabin_id,
            cabin_details: details.clone(),
        })
        .await?;
    assert_eq!(updated.cabin_details, details);
    assert_eq!(updated.created_at, cabin.created_at);

    app.client.delete_cabin(&cabin.cabin_id).await?;
    assert!(app.client.list_cabins().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn uploaded_image_is_stored_as_url() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let cabin = app
        .client
        .create_cabin(&test_helpers::cabin_details_b())
        .await?;

    assert_eq!(
        cabin.image,
        CabinImage::url(format!("/images/cabins/{}-lake.jpg", cabin.cabin_id))
    );

    Ok(())
}

#[tokio::test]
async fn invalid_cabin_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut details = test_helpers::cabin_details_a();
    details.discount = dec!(500);

    let result = app.client.create_cabin(&details).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert!(app.client.list_cabins().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn missing_cabin_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let err = app.client.delete_cabin(&CabinId(99)).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Cabin not found"));

    Ok(())
}

#[tokio::test]
async fn cabin_with_bookings_cannot_be_deleted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (cabin, _) = app.create_cabin_with_booking().await?;

    let result = app.client.delete_cabin(&cabin.cabin_id).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn renaming_a_cabin_updates_its_bookings() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (cabin, booking) = app.create_cabin_with_booking().await?;

    let mut details = cabin.cabin_details.clone();
    details.name = "Pine Retreat".into();
    app.client
        .update_cabin(&UpdateCabin {
            cabin_id: cabin.cabin_id,
            cabin_details: details,
        })
        .await?;

    let booking = app.client.get_booking(&booking.booking_id).await?;
    assert_eq!(booking.cabin.name, "Pine Retreat");

    Ok(())
}

#[tokio::test]
async fn cabin_write_faults_return_unavailable() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_next_cabin_writes(1);

    let result = app
        .client
        .create_cabin(&test_helpers::cabin_details_a())
        .await;
    assert_status_code(result, StatusCode::SERVICE_UNAVAILABLE);

    // only the armed request fails
    app.create_test_cabin().await?;

    Ok(())
}

#[tokio::test]
async fn name_limit_counts_characters() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut details = test_helpers::cabin_details_a();
    details.name = "é".repeat(payloads::requests::CABIN_NAME_MAX_LEN);

    let cabin = app.client.create_cabin(&details).await?;
    assert_eq!(cabin.name, details.name);

    details.name.push('é');
    let result = app.client.create_cabin(&details).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}
