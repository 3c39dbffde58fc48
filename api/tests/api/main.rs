mod booking;
mod cabin;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn settings_are_served() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let settings = app.client.get_settings().await?;
    assert_eq!(settings, test_helpers::default_settings());

    Ok(())
}
