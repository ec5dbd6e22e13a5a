//! Tests for the in-memory booking repository and filter semantics

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::{Booking, PaymentStatus};
use crate::domain::value_objects::{BookingPeriod, OverlapRule};
use crate::repositories::booking::{
    BookingFilter, BookingPatch, BookingRepository, InMemoryBookingRepository,
};

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn booking_on(listing_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>, price: f64) -> Booking {
    let period = BookingPeriod::new(start, end).unwrap();
    Booking::new(Uuid::new_v4(), Uuid::new_v4(), listing_id, period, price)
}

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let repo = InMemoryBookingRepository::new();
    let booking = booking_on(Uuid::new_v4(), day(2024, 1, 1), day(2024, 1, 5), 400.0);

    let stored = repo.insert(booking.clone()).await.unwrap();
    assert_eq!(stored, booking);

    let found = repo.find_by_id(booking.id).await.unwrap();
    assert_eq!(found, Some(booking));
    assert_eq!(repo.write_count(), 1);
}

#[tokio::test]
async fn test_duplicate_insert_is_rejected() {
    let repo = InMemoryBookingRepository::new();
    let booking = booking_on(Uuid::new_v4(), day(2024, 1, 1), day(2024, 1, 5), 400.0);

    repo.insert(booking.clone()).await.unwrap();
    assert!(repo.insert(booking).await.is_err());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_find_by_listing_is_sorted_by_start() {
    let listing = Uuid::new_v4();
    let late = booking_on(listing, day(2024, 2, 10), day(2024, 2, 12), 100.0);
    let early = booking_on(listing, day(2024, 2, 1), day(2024, 2, 3), 100.0);
    let elsewhere = booking_on(Uuid::new_v4(), day(2024, 2, 1), day(2024, 2, 3), 100.0);
    let repo = InMemoryBookingRepository::with_bookings(vec![late.clone(), early.clone(), elsewhere]);

    let found = repo.find(&BookingFilter::for_listing(listing)).await.unwrap();
    let ids: Vec<Uuid> = found.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![early.id, late.id]);
}

#[tokio::test]
async fn test_overlap_filter_respects_rule() {
    let listing = Uuid::new_v4();
    let existing = booking_on(listing, day(2024, 1, 5), day(2024, 1, 10), 100.0);
    let repo = InMemoryBookingRepository::with_bookings(vec![existing.clone()]);
    let requested = BookingPeriod::new(day(2024, 1, 1), day(2024, 1, 5)).unwrap();

    let inclusive = BookingFilter::for_listing(listing).overlapping(requested, OverlapRule::Inclusive);
    assert_eq!(repo.find(&inclusive).await.unwrap().len(), 1);

    let exclusive = BookingFilter::for_listing(listing).overlapping(requested, OverlapRule::Exclusive);
    assert!(repo.find(&exclusive).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_status_filter() {
    let listing = Uuid::new_v4();
    let mut paid = booking_on(listing, day(2024, 1, 1), day(2024, 1, 3), 100.0);
    paid.mark_paid();
    let pending = booking_on(listing, day(2024, 1, 1), day(2024, 1, 3), 100.0);
    let repo = InMemoryBookingRepository::with_bookings(vec![paid.clone(), pending]);

    let found = repo
        .find(&BookingFilter::for_listing(listing).with_status(PaymentStatus::Paid))
        .await
        .unwrap();
    assert_eq!(found, vec![paid]);
}

#[tokio::test]
async fn test_customer_and_host_filters() {
    let booking = booking_on(Uuid::new_v4(), day(2024, 4, 1), day(2024, 4, 2), 80.0);
    let repo = InMemoryBookingRepository::with_bookings(vec![booking.clone()]);

    assert_eq!(repo.find(&BookingFilter::for_customer(booking.customer_id)).await.unwrap().len(), 1);
    assert_eq!(repo.find(&BookingFilter::for_host(booking.host_id)).await.unwrap().len(), 1);
    assert!(repo.find(&BookingFilter::for_host(booking.customer_id)).await.unwrap().is_empty());
    assert_eq!(repo.find(&BookingFilter::all()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_by_id_applies_patch() {
    let booking = booking_on(Uuid::new_v4(), day(2024, 1, 1), day(2024, 1, 5), 400.0);
    let repo = InMemoryBookingRepository::with_bookings(vec![booking.clone()]);

    let updated = repo
        .update_by_id(booking.id, BookingPatch::payment_status(PaymentStatus::Paid))
        .await
        .unwrap()
        .unwrap();
    assert!(updated.is_paid());
    assert!(updated.updated_at >= booking.updated_at);
    assert!(!updated.deletion_requested);

    let flagged = repo
        .update_by_id(booking.id, BookingPatch::deletion_requested(true))
        .await
        .unwrap()
        .unwrap();
    assert!(flagged.deletion_requested);
    assert!(flagged.is_paid());
}

#[tokio::test]
async fn test_guarded_patch_leaves_other_status_untouched() {
    let mut booking = booking_on(Uuid::new_v4(), day(2024, 1, 1), day(2024, 1, 5), 400.0);
    booking.mark_paid();
    let repo = InMemoryBookingRepository::with_bookings(vec![booking.clone()]);
    let writes_before = repo.write_count();

    let result = repo
        .update_by_id(
            booking.id,
            BookingPatch::payment_status(PaymentStatus::Failed).when_status(PaymentStatus::Pending),
        )
        .await
        .unwrap()
        .unwrap();

    assert!(result.is_paid());
    assert_eq!(result.updated_at, booking.updated_at);
    assert_eq!(repo.write_count(), writes_before);
}

#[tokio::test]
async fn test_guarded_patch_applies_when_status_matches() {
    let booking = booking_on(Uuid::new_v4(), day(2024, 1, 1), day(2024, 1, 5), 400.0);
    let repo = InMemoryBookingRepository::with_bookings(vec![booking.clone()]);

    let result = repo
        .update_by_id(
            booking.id,
            BookingPatch::payment_status(PaymentStatus::Failed).when_status(PaymentStatus::Pending),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.payment_status, PaymentStatus::Failed);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let repo = InMemoryBookingRepository::new();
    let result = repo
        .update_by_id(Uuid::new_v4(), BookingPatch::payment_status(PaymentStatus::Paid))
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(repo.write_count(), 0);
}

#[tokio::test]
async fn test_delete_twice() {
    let booking = booking_on(Uuid::new_v4(), day(2024, 1, 1), day(2024, 1, 5), 400.0);
    let repo = InMemoryBookingRepository::with_bookings(vec![booking.clone()]);

    assert!(repo.delete_by_id(booking.id).await.unwrap());
    assert!(!repo.delete_by_id(booking.id).await.unwrap());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_stats_group_by_listing() {
    let busy = Uuid::new_v4();
    let quiet = Uuid::new_v4();
    let repo = InMemoryBookingRepository::with_bookings(vec![
        booking_on(busy, day(2024, 1, 1), day(2024, 1, 2), 100.0),
        booking_on(busy, day(2024, 1, 3), day(2024, 1, 4), 150.5),
        booking_on(quiet, day(2024, 1, 1), day(2024, 1, 2), 75.0),
    ]);

    let stats = repo.stats_by_listing().await.unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].listing_id, busy);
    assert_eq!(stats[0].total_bookings, 2);
    assert_eq!(stats[0].sum_booking_amount, 250.5);
    assert_eq!(stats[1].listing_id, quiet);
    assert_eq!(stats[1].total_bookings, 1);
}

#[tokio::test]
async fn test_unavailable_store_fails_every_call() {
    let repo = InMemoryBookingRepository::new();
    repo.set_unavailable(true);

    assert!(repo.find(&BookingFilter::all()).await.is_err());
    assert!(repo.find_by_id(Uuid::new_v4()).await.is_err());
    assert!(repo.delete_by_id(Uuid::new_v4()).await.is_err());

    repo.set_unavailable(false);
    assert!(repo.find(&BookingFilter::all()).await.unwrap().is_empty());
}
