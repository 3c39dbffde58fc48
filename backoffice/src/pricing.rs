//! Breakfast pricing for a stay.

use payloads::{Settings, responses};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid {field}: {value} is negative")]
    InvalidInput { field: &'static str, value: Decimal },
}

/// Breakfast for `guests` people over `nights` nights at `price` per guest
/// per night.
pub fn breakfast_charge_for(
    nights: i32,
    guests: i32,
    price: Decimal,
) -> Result<Decimal, PricingError> {
    let nights = non_negative("number of nights", Decimal::from(nights))?;
    let guests = non_negative("number of guests", Decimal::from(guests))?;
    let price = non_negative("breakfast price", price)?;
    Ok(price * nights * guests)
}

/// The optional breakfast surcharge for a booking under the current
/// settings.
pub fn breakfast_charge(
    booking: &responses::Booking,
    settings: &Settings,
) -> Result<Decimal, PricingError> {
    breakfast_charge_for(
        booking.num_nights,
        booking.num_guests,
        settings.breakfast_price,
    )
}

/// What the guest pays in total once `breakfast_charge` is added.
pub fn effective_total(booking: &responses::Booking, charge: Decimal) -> Decimal {
    booking.total_price + charge
}

fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, PricingError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PricingError::InvalidInput { field, value });
    }
    Ok(value)
}
