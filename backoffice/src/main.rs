use backoffice::{
    Backoffice, Config,
    bookings::{self, BookingFilter, BookingSort},
    cabins::{self, CabinFilter, CabinSort},
    format::format_currency,
};
use payloads::APIClient;
use payloads::telemetry::{get_subscriber, init_subscriber, log_error};

/// Cabin back-office overview
///
/// Prints the hotel settings, the cabin inventory and the bookings of a
/// running API. Environment variables can be set directly or loaded from a
/// .env file in the project root.
///
/// Required environment variables:
/// - API_ADDRESS: base url of the API, e.g. http://127.0.0.1:8000
///
/// Optional:
/// - LOG_LEVEL: default log filter (defaults to info, RUST_LOG takes
///   precedence)
///
/// Example, against the dev server:
/// API_ADDRESS=http://127.0.0.1:8000 cargo run -p backoffice
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_subscriber(get_subscriber(&config.log_level))?;

    if let Err(e) = run(&config).await {
        log_error(e);
        std::process::exit(1);
    }
    Ok(())
}

#[tracing::instrument(skip(config), fields(api_address = %config.api_address))]
async fn run(config: &Config) -> anyhow::Result<()> {
    let client = APIClient::new(config.api_address.clone());
    client.health_check().await?;
    let mut ctx = Backoffice::new(client);

    let settings = ctx.settings().await?;
    println!("Settings");
    println!(
        "  nights per booking: {}-{}",
        settings.min_booking_length, settings.max_booking_length
    );
    println!("  max guests: {}", settings.max_guests_per_booking);
    println!(
        "  breakfast: {} per guest per night",
        format_currency(settings.breakfast_price)
    );

    let cabins = ctx.cabins().await?;
    println!("\nCabins");
    for cabin in
        cabins::table_rows(cabins, CabinFilter::All, CabinSort::default())
    {
        let discount = if cabin.has_discount() {
            format_currency(cabin.discount)
        } else {
            "-".to_string()
        };
        println!(
            "  {:<24} up to {:>2} guests  {:>10}  {:>10}",
            cabin.name,
            cabin.max_capacity,
            format_currency(cabin.regular_price),
            discount
        );
    }

    let bookings = ctx.bookings().await?;
    println!("\nBookings");
    for booking in bookings::table_rows(
        bookings,
        BookingFilter::All,
        BookingSort::default(),
    ) {
        println!(
            "  #{:<4} {:<24} {:<24} {} -> {}  {:>12}  {}",
            booking.booking_id,
            booking.cabin.name,
            booking.guest.full_name,
            booking.start_date,
            booking.end_date,
            format_currency(booking.total_price),
            booking.status
        );
    }
    Ok(())
}
