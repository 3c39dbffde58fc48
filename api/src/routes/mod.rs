pub mod booking;
pub mod cabin;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};

use crate::store::{Store, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(settings)
        .service(cabin::list_cabins)
        .service(cabin::create_cabin)
        .service(cabin::update_cabin)
        .service(cabin::delete_cabin)
        .service(booking::list_bookings)
        .service(booking::get_booking)
        .service(booking::delete_booking)
        .service(booking::check_in)
        .service(booking::check_out)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[tracing::instrument(skip(store), ret)]
#[get("/settings")]
pub async fn settings(store: web::Data<Store>) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(store.settings()))
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Service unavailable")]
    Unavailable(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::Unavailable(e) => HttpResponse::ServiceUnavailable()
                .body(format!("{self}: {e}")),
            Self::UnexpectedError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::CabinNotFound => APIError::NotFound(e.into()),
            StoreError::BookingNotFound => APIError::NotFound(e.into()),
            StoreError::Unavailable => APIError::Unavailable(e.into()),
            StoreError::UnexpectedError(_) => {
                APIError::UnexpectedError(e.into())
            }
            _ => APIError::BadRequest(e.into()),
        }
    }
}
