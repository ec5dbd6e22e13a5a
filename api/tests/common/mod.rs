//! Helpers shared by the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use serde_json::{json, Value};
use uuid::Uuid;

use rent_api::AppState;
use rent_core::repositories::InMemoryBookingRepository;
use rent_core::services::booking::BookingServiceConfig;
use rent_infra::payment::MockCheckoutGateway;
use rent_infra::{BookingStore, CheckoutProvider};
use rent_shared::config::AppConfig;

pub type TestState = web::Data<AppState<BookingStore, CheckoutProvider>>;

pub const SUCCESS_URL: &str = "http://localhost:3000/payment-success?session_id={CHECKOUT_SESSION_ID}";

pub fn test_config() -> AppConfig {
    AppConfig::development()
}

/// In-memory store and a mock gateway whose sessions settle as paid
pub fn test_state() -> TestState {
    state_with_gateway(MockCheckoutGateway::new(SUCCESS_URL))
}

pub fn state_with_gateway(gateway: MockCheckoutGateway) -> TestState {
    web::Data::new(AppState::new(
        Arc::new(BookingStore::Memory(InMemoryBookingRepository::new())),
        Arc::new(CheckoutProvider::Mock(gateway)),
        BookingServiceConfig::default(),
    ))
}

/// Identities involved in one test booking
#[derive(Debug, Clone, Copy)]
pub struct Parties {
    pub customer_id: Uuid,
    pub host_id: Uuid,
    pub listing_id: Uuid,
}

impl Parties {
    pub fn new() -> Self {
        Self {
            customer_id: Uuid::new_v4(),
            host_id: Uuid::new_v4(),
            listing_id: Uuid::new_v4(),
        }
    }

    pub fn booking_body(&self, start: &str, end: &str, price: f64) -> Value {
        json!({
            "customerId": self.customer_id,
            "hostId": self.host_id,
            "listingId": self.listing_id,
            "startDate": start,
            "endDate": end,
            "totalPrice": price,
        })
    }

    pub fn check_body(&self, start: &str, end: &str) -> Value {
        json!({
            "listingId": self.listing_id,
            "startDate": start,
            "endDate": end,
        })
    }
}

/// Booking id from a create response body
pub fn booking_id(body: &Value) -> Uuid {
    body["booking"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("response carries a booking id")
}
