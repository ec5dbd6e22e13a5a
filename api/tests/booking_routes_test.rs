//! Integration tests for the booking endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{booking_id, test_config, test_state, Parties};
use rent_api::create_app;

#[actix_web::test]
async fn test_create_booking_returns_pending_booking() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &test_config())).await;
    let parties = Parties::new();

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(parties.booking_body("2024-03-01", "2024-03-05", 500.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Booking successfully created!");
    assert_eq!(body["booking"]["paymentStatus"], "pending");
    assert_eq!(body["booking"]["totalPrice"], 500.0);
    assert_eq!(body["booking"]["listingId"], json!(parties.listing_id));

    let stored = state.booking_service.get_booking(booking_id(&body)).await.unwrap();
    assert_eq!(stored.customer_id, parties.customer_id);
}

#[actix_web::test]
async fn test_overlapping_create_is_rejected_even_while_pending() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;
    let parties = Parties::new();

    let first = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(parties.booking_body("2024-03-01", "2024-03-05", 500.0))
        .to_request();
    let first_body: Value = test::call_and_read_body_json(&app, first).await;
    let first_id = booking_id(&first_body);

    let second = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(parties.booking_body("2024-03-03", "2024-03-08", 400.0))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["available"], false);
    assert_eq!(
        body["message"],
        "The selected dates are not available for this property."
    );
    let conflicts = body["conflictingBookings"].as_array().unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0]["id"], json!(first_id));
}

#[actix_web::test]
async fn test_back_to_back_stays_can_both_be_created() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;
    let parties = Parties::new();

    for (start, end) in [("2024-01-01", "2024-01-05"), ("2024-01-05", "2024-01-10")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/bookings/create")
            .set_json(parties.booking_body(start, end, 100.0))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{} -> {}", start, end);
    }
}

#[actix_web::test]
async fn test_check_ignores_pending_and_blocks_paid() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &test_config())).await;
    let parties = Parties::new();

    let create = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(parties.booking_body("2024-03-01", "2024-03-05", 500.0))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, create).await;
    let id = booking_id(&created);

    let check = test::TestRequest::post()
        .uri("/api/v1/bookings/check")
        .set_json(parties.check_body("2024-03-03", "2024-03-04"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, check).await;
    assert_eq!(body["available"], true);
    assert_eq!(body["message"], "Dates are available for booking.");
    assert!(body.get("conflictingBookings").is_none());

    state.booking_service.mark_paid(id).await.unwrap();

    let check = test::TestRequest::post()
        .uri("/api/v1/bookings/check")
        .set_json(parties.check_body("2024-03-03", "2024-03-04"))
        .to_request();
    let resp = test::call_service(&app, check).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["available"], false);
    assert_eq!(
        body["message"],
        "The selected dates are not available because a paid booking already exists."
    );
    assert_eq!(body["conflictingBookings"][0]["id"], json!(id));
}

#[actix_web::test]
async fn test_check_treats_shared_boundary_as_overlap() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &test_config())).await;
    let parties = Parties::new();

    let create = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(parties.booking_body("2024-01-05", "2024-01-10", 250.0))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, create).await;
    state.booking_service.mark_paid(booking_id(&created)).await.unwrap();

    let check = test::TestRequest::post()
        .uri("/api/v1/bookings/check")
        .set_json(parties.check_body("2024-01-01", "2024-01-05"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, check).await;
    assert_eq!(body["available"], false);
}

#[actix_web::test]
async fn test_invalid_input_is_rejected_without_write() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &test_config())).await;
    let parties = Parties::new();

    let cases = [
        (parties.booking_body("2024-03-05", "2024-03-01", 100.0), "INVALID_DATE_RANGE"),
        (parties.booking_body("2024-03-01", "2024-03-01", 100.0), "INVALID_DATE_RANGE"),
        (parties.booking_body("someday", "2024-03-01", 100.0), "INVALID_DATE"),
        (parties.booking_body("2024-03-01", "2024-03-05", -1.0), "VALIDATION_ERROR"),
        (parties.booking_body("", "2024-03-05", 100.0), "VALIDATION_ERROR"),
    ];

    for (body, code) in cases {
        let req = test::TestRequest::post()
            .uri("/api/v1/bookings/create")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", body);

        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["error"], code, "{}", body);
    }

    assert!(state.booking_service.list_all_bookings().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_malformed_ids_are_bad_requests() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(json!({
            "customerId": "not-a-uuid",
            "hostId": "also-not",
            "listingId": "nope",
            "startDate": "2024-03-01",
            "endDate": "2024-03-05",
            "totalPrice": 10.0,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri("/api/v1/bookings/12345")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_delete_twice_reports_not_found() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;
    let parties = Parties::new();

    let create = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(parties.booking_body("2024-05-01", "2024-05-03", 90.0))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, create).await;
    let uri = format!("/api/v1/bookings/{}", booking_id(&created));

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Booking deleted successfully");

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_booked_dates_include_paid_and_pending() {
    let state = test_state();
    let app = test::init_service(create_app(state.clone(), &test_config())).await;
    let parties = Parties::new();

    let mut ids = Vec::new();
    for (start, end) in [("2024-06-01", "2024-06-04"), ("2024-06-10", "2024-06-12")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/bookings/create")
            .set_json(parties.booking_body(start, end, 120.0))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(booking_id(&body));
    }
    state.booking_service.mark_paid(ids[0]).await.unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/booked-dates/{}", parties.listing_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let dates = body["bookedDates"].as_array().unwrap();
    assert_eq!(dates.len(), 2);
    assert!(dates[0]["startDate"].as_str().unwrap().starts_with("2024-06-01"));
    assert!(dates[1]["endDate"].as_str().unwrap().starts_with("2024-06-12"));
}

#[actix_web::test]
async fn test_stats_per_listing() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/bookings/average-per-property")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No bookings data available");

    let busy = Parties::new();
    let quiet = Parties::new();
    for (parties, start, end, price) in [
        (busy, "2024-07-01", "2024-07-03", 200.0),
        (busy, "2024-07-05", "2024-07-07", 300.0),
        (quiet, "2024-07-01", "2024-07-02", 80.0),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/bookings/create")
            .set_json(parties.booking_body(start, end, price))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/bookings/average-per-property")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let stats = body.as_array().unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["listingId"], json!(busy.listing_id));
    assert_eq!(stats[0]["totalBookings"], 2);
    assert_eq!(stats[0]["sumBookingAmount"], 500.0);
    assert_eq!(stats[1]["totalBookings"], 1);
}

#[actix_web::test]
async fn test_deletion_request_sets_flag_only() {
    let app = test::init_service(create_app(test_state(), &test_config())).await;
    let parties = Parties::new();

    let create = test::TestRequest::post()
        .uri("/api/v1/bookings/create")
        .set_json(parties.booking_body("2024-08-01", "2024-08-04", 150.0))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, create).await;
    let id = booking_id(&created);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/bookings/{}/deletion-request", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["booking"]["deletionRequested"], true);
    assert_eq!(body["booking"]["paymentStatus"], "pending");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["deletionRequested"], true);
}
