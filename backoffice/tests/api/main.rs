mod bookings;
mod cabins;
mod checkin;

use backoffice::Backoffice;
use payloads::APIClient;
use test_helpers::{TestApp, spawn_app};

/// A back-office context talking to the spawned API over HTTP.
fn backoffice(app: &TestApp) -> Backoffice<APIClient> {
    Backoffice::new(app.client.clone())
}

#[tokio::test]
async fn settings_are_loaded_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut ctx = backoffice(&app);

    let settings = ctx.settings().await?;
    assert_eq!(settings, test_helpers::default_settings());

    // a change on the remote side is not seen during the session
    let mut changed = settings.clone();
    changed.breakfast_price = rust_decimal::dec!(20);
    app.store.update_settings(changed);
    assert_eq!(ctx.settings().await?, settings);

    Ok(())
}
