use actix_web::{HttpResponse, get, post, web};

use super::APIError;
use crate::store::Store;

#[tracing::instrument(skip(store), ret)]
#[get("/cabins")]
pub async fn list_cabins(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(store.list_cabins()))
}

#[tracing::instrument(skip(store, details), fields(name = %details.name), ret)]
#[post("/create_cabin")]
pub async fn create_cabin(
    details: web::Json<payloads::CabinDetails>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let cabin = store.create_cabin(&details)?;
    Ok(HttpResponse::Ok().json(cabin))
}

#[tracing::instrument(skip(store, details), fields(cabin_id = %details.cabin_id), ret)]
#[post("/cabin")]
pub async fn update_cabin(
    details: web::Json<payloads::requests::UpdateCabin>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let cabin = store.update_cabin(&details)?;
    Ok(HttpResponse::Ok().json(cabin))
}

#[tracing::instrument(skip(store), ret)]
#[post("/delete_cabin")]
pub async fn delete_cabin(
    cabin_id: web::Json<payloads::CabinId>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    store.delete_cabin(&cabin_id)?;
    Ok(HttpResponse::Ok().finish())
}
