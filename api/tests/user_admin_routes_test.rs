//! Integration tests for the user and admin booking listings

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{booking_id, test_config, test_state, Parties};
use rent_api::create_app;

#[actix_web::test]
async fn test_trips_and_reservations_are_scoped_to_the_user() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;
    let traveller = Parties::new();
    let other = Parties {
        host_id: traveller.host_id,
        ..Parties::new()
    };

    for (parties, start, end) in [
        (traveller, "2024-09-01", "2024-09-03"),
        (other, "2024-09-10", "2024-09-12"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/bookings/create")
            .set_json(parties.booking_body(start, end, 100.0))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/trips", traveller.customer_id))
        .to_request();
    let trips: Value = test::call_and_read_body_json(&app, req).await;
    let trips = trips.as_array().unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0]["customerId"], json!(traveller.customer_id));

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/reservations", traveller.host_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let reservations: Value = test::read_body_json(resp).await;
    assert_eq!(reservations.as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/trips", Uuid::new_v4()))
        .to_request();
    let empty: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(empty, json!([]));
}

#[actix_web::test]
async fn test_admin_lists_gets_and_deletes() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;
    let parties = Parties::new();

    let create = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(parties.booking_body("2024-10-01", "2024-10-05", 420.0))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, create).await;
    let id = booking_id(&created);

    let req = test::TestRequest::get().uri("/api/v1/admin/bookings").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let uri = format!("/api/v1/admin/bookings/{}", id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let booking: Value = test::read_body_json(resp).await;
    assert_eq!(booking["id"], json!(id));

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/v1/admin/bookings").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all, json!([]));
}
