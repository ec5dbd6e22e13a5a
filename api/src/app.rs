//! Application factory
//!
//! Builds the actix-web `App` from the shared state and configuration so
//! the binary and the integration tests run the exact same routing.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use rent_core::repositories::BookingRepository;
use rent_core::services::payment::CheckoutGateway;
use rent_shared::config::AppConfig;

use crate::dto::{error_codes, ErrorResponse};
use crate::handlers::{json_error_handler, path_error_handler, query_error_handler};
use crate::middleware::{create_cors, RequestIdMiddleware};
use crate::routes::{admin, bookings, health, payment, users, AppState, HealthIndicator};

/// Create and configure the application with all dependencies
pub fn create_app<R, G>(
    app_state: web::Data<AppState<R, G>>,
    config: &AppConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: BookingRepository + HealthIndicator + 'static,
    G: CheckoutGateway + HealthIndicator + 'static,
{
    let cors = create_cors(&config.cors, config.environment);

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);
    let path_config = web::PathConfig::default().error_handler(path_error_handler);
    let query_config = web::QueryConfig::default().error_handler(query_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(path_config)
        .app_data(query_config)
        // Last wrapped runs first: request ids exist before CORS and logging see the request
        .wrap(cors)
        .wrap(Logger::new(r#"%a "%r" %s %b %T req=%{x-request-id}o"#))
        .wrap(RequestIdMiddleware)
        .route("/health", web::get().to(health::health_check::<R, G>))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/bookings")
                        .route("/create", web::post().to(bookings::create_booking::<R, G>))
                        .route("/check", web::post().to(bookings::check_availability::<R, G>))
                        // Fixed segments before `{id}` so they are not parsed as ids
                        .route(
                            "/average-per-property",
                            web::get().to(bookings::booking_stats::<R, G>),
                        )
                        .route(
                            "/booked-dates/{listing_id}",
                            web::get().to(bookings::booked_dates::<R, G>),
                        )
                        .route(
                            "/{id}/deletion-request",
                            web::patch().to(bookings::request_deletion::<R, G>),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(bookings::get_booking::<R, G>))
                                .route(web::delete().to(bookings::delete_booking::<R, G>)),
                        ),
                )
                .service(
                    web::scope("/users/{user_id}")
                        .route("/trips", web::get().to(users::list_trips::<R, G>))
                        .route("/reservations", web::get().to(users::list_reservations::<R, G>)),
                )
                .service(
                    web::scope("/admin/bookings")
                        .route("", web::get().to(admin::list_bookings::<R, G>))
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(admin::get_booking::<R, G>))
                                .route(web::delete().to(admin::delete_booking::<R, G>)),
                        ),
                )
                .service(
                    web::scope("/payment")
                        .route(
                            "/create-checkout-session",
                            web::post().to(payment::create_checkout_session::<R, G>),
                        )
                        .route("/payment-success", web::post().to(payment::payment_success::<R, G>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
