pub mod mock;

use actix_web::web;
use api::Config;
use api::store::{NewBooking, NewGuest, Store};
use api::time::TimeSource;
use jiff::civil::date;
use payloads::{
    BookingStatus, CabinDetails, CabinId, CabinImage, Settings, responses,
    telemetry,
};
use reqwest::StatusCode;
use rust_decimal::dec;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    /// Direct handle on the in-memory store, for seeding and fault injection.
    pub store: web::Data<Store>,
    pub time_source: TimeSource,
}

impl TestApp {
    pub fn address(&self) -> &str {
        &self.client.address
    }

    /// Make the next `count` check-in requests fail with a 503.
    pub fn fail_next_checkins(&self, count: u32) {
        self.store.fail_next_checkins(count);
    }

    /// Make the next `count` cabin writes fail with a 503.
    pub fn fail_next_cabin_writes(&self, count: u32) {
        self.store.fail_next_cabin_writes(count);
    }

    pub async fn create_test_cabin(&self) -> anyhow::Result<responses::Cabin> {
        let details = cabin_details_a();
        let cabin = self.client.create_cabin(&details).await?;
        assert_eq!(cabin.cabin_details, details);
        Ok(cabin)
    }

    /// Seed a booking directly into the store; the remote API has no
    /// endpoint for creating bookings.
    pub fn create_test_booking(
        &self,
        cabin_id: CabinId,
    ) -> anyhow::Result<responses::Booking> {
        Ok(self.store.create_booking(booking_details_a(cabin_id))?)
    }

    /// A cabin and an unconfirmed, unpaid three night booking for two
    /// guests without breakfast.
    pub async fn create_cabin_with_booking(
        &self,
    ) -> anyhow::Result<(responses::Cabin, responses::Booking)> {
        let cabin = self.create_test_cabin().await?;
        let booking = self.create_test_booking(cabin.cabin_id)?;
        Ok((cabin, booking))
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    // several tests share one process, only the first install succeeds
    let subscriber = telemetry::get_subscriber("error");
    let _ = telemetry::init_subscriber(subscriber);

    let time_source =
        TimeSource::pinned("2025-01-01T00:00:00Z".parse().unwrap());
    let store =
        web::Data::new(Store::new(default_settings(), time_source.clone()));

    let mut config = Config::local(port);
    let server = api::build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient::new(format!(
            "http://127.0.0.1:{}",
            config.port
        )),
        store,
        time_source,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        Err(payloads::ClientError::NotFound(_)) => {
            assert_eq!(StatusCode::NOT_FOUND, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn default_settings() -> Settings {
    Settings {
        min_booking_length: 3,
        max_booking_length: 90,
        max_guests_per_booking: 8,
        breakfast_price: dec!(15),
    }
}

pub fn cabin_details_a() -> CabinDetails {
    CabinDetails {
        name: "Forest Cabin".into(),
        max_capacity: 4,
        regular_price: dec!(200),
        discount: dec!(20),
        description: "A quiet cabin at the edge of the pine forest.".into(),
        image: CabinImage::url("/images/cabins/forest.jpg"),
    }
}

pub fn cabin_details_b() -> CabinDetails {
    CabinDetails {
        name: "Lake House".into(),
        max_capacity: 6,
        regular_price: dec!(350),
        discount: dec!(0),
        description: "Lakeside cabin with a private jetty.".into(),
        image: CabinImage::Upload {
            file_name: "lake.jpg".into(),
            data: vec![0xff, 0xd8, 0xff, 0xe0],
        },
    }
}

pub fn guest_a() -> NewGuest {
    NewGuest {
        full_name: "Jonas Schmedtmann".into(),
        email: "jonas@example.com".into(),
        nationality: "Portugal".into(),
        national_id: "3525436345".into(),
        country_flag: Some("https://flagcdn.com/pt.svg".into()),
    }
}

pub fn booking_details_a(cabin_id: CabinId) -> NewBooking {
    NewBooking {
        cabin_id,
        start_date: date(2025, 1, 10),
        end_date: date(2025, 1, 13),
        num_guests: 2,
        has_breakfast: false,
        is_paid: false,
        status: BookingStatus::Unconfirmed,
        observations: None,
        guest: guest_a(),
    }
}
