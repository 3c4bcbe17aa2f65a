use crate::sync_flights::{SyncFailure, SyncFlights};
use crate::tests::{LOCAL_ID, VERIFIED_ID};

use sp_core::{IdentityId, Profile};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use googletest::prelude::*;

fn counting_start(
    id: &IdentityId,
    starts: &Arc<AtomicUsize>,
) -> impl FnOnce() -> futures::future::BoxFuture<'static, std::result::Result<Profile, SyncFailure>>
{
    let id = id.clone();
    let starts = Arc::clone(starts);
    move || {
        starts.fetch_add(1, Ordering::SeqCst);
        async move { Ok(Profile::fallback(&id, None, None)) }.boxed()
    }
}

#[tokio::test]
async fn given_flight_running_when_same_id_joins_then_shares_it_without_starting() {
    // Given
    let flights = SyncFlights::default();
    let id = IdentityId::new(VERIFIED_ID);
    let starts = Arc::new(AtomicUsize::new(0));
    let (first, leader) = flights.join_or_start(&id, counting_start(&id, &starts)).await;

    // When
    let (second, joined_leader) = flights.join_or_start(&id, counting_start(&id, &starts)).await;

    // Then
    assert_that!(leader, eq(true));
    assert_that!(joined_leader, eq(false));
    assert_that!(starts.load(Ordering::SeqCst), eq(1));
    assert_that!(first.await, ok(anything()));
    assert_that!(second.await.map(|profile| profile.auth_user_id), ok(eq(&id)));
}

#[tokio::test]
async fn given_flight_running_when_other_id_requested_then_separate_flight_started() {
    // Given
    let flights = SyncFlights::default();
    let verified = IdentityId::new(VERIFIED_ID);
    let local = IdentityId::new(LOCAL_ID);
    let starts = Arc::new(AtomicUsize::new(0));
    flights
        .join_or_start(&verified, counting_start(&verified, &starts))
        .await;

    // When
    let (_, leader) = flights
        .join_or_start(&local, counting_start(&local, &starts))
        .await;

    // Then
    assert_that!(leader, eq(true));
    assert_that!(starts.load(Ordering::SeqCst), eq(2));
    assert_that!(flights.len().await, eq(2));
}

#[tokio::test]
async fn given_finished_flight_when_same_id_requested_then_new_flight_started() {
    // Given
    let flights = SyncFlights::default();
    let id = IdentityId::new(VERIFIED_ID);
    let starts = Arc::new(AtomicUsize::new(0));
    let (flight, _) = flights.join_or_start(&id, counting_start(&id, &starts)).await;
    let _ = flight.await;

    // When
    flights.finish(&id).await;
    let (_, leader) = flights.join_or_start(&id, counting_start(&id, &starts)).await;

    // Then
    assert_that!(leader, eq(true));
    assert_that!(starts.load(Ordering::SeqCst), eq(2));
}

#[tokio::test]
async fn given_failed_flight_when_awaited_by_every_caller_then_all_see_the_failure() {
    // Given
    let flights = SyncFlights::default();
    let id = IdentityId::new(VERIFIED_ID);
    let (first, _) = flights
        .join_or_start(&id, || {
            async { Err(SyncFailure::Remote("down".to_string())) }.boxed()
        })
        .await;
    let (second, _) = flights
        .join_or_start(&id, || async { unreachable!() }.boxed())
        .await;

    // When
    let (first, second) = tokio::join!(first, second);

    // Then
    assert_that!(first, err(eq(&SyncFailure::Remote("down".to_string()))));
    assert_that!(second, err(eq(&SyncFailure::Remote("down".to_string()))));
}
