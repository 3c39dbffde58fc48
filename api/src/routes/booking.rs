use actix_web::{HttpResponse, get, post, web};

use super::APIError;
use crate::store::Store;

#[tracing::instrument(skip(store))]
#[get("/bookings")]
pub async fn list_bookings(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(store.list_bookings()))
}

#[tracing::instrument(skip(store), ret)]
#[post("/booking")]
pub async fn get_booking(
    booking_id: web::Json<payloads::BookingId>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let booking = store.get_booking(&booking_id)?;
    Ok(HttpResponse::Ok().json(booking))
}

#[tracing::instrument(skip(store), ret)]
#[post("/delete_booking")]
pub async fn delete_booking(
    booking_id: web::Json<payloads::BookingId>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    store.delete_booking(&booking_id)?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(store), ret)]
#[post("/check_in")]
pub async fn check_in(
    details: web::Json<payloads::requests::CheckIn>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let booking = store.check_in(&details)?;
    Ok(HttpResponse::Ok().json(booking))
}

#[tracing::instrument(skip(store), ret)]
#[post("/check_out")]
pub async fn check_out(
    booking_id: web::Json<payloads::BookingId>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let booking = store.check_out(&booking_id)?;
    Ok(HttpResponse::Ok().json(booking))
}
