//! Tests for the points claiming service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    ClaimLedgerError, FixedPointsSource, MockClaimLedger, MockPointsSource, MockUserRepository,
    UserPersistenceError,
};
use crate::domain::test_fixtures::{fixture_clock, fixture_timestamp, make_user};
use crate::domain::{Actor, ClaimPoints, ErrorCode, User, UserId};
use rstest::{fixture, rstest};

#[fixture]
fn grace() -> User {
    make_user("Grace", 0)
}

#[fixture]
fn ada() -> User {
    make_user("Ada", 12)
}

fn make_service(
    users: MockUserRepository,
    ledger: MockClaimLedger,
    award: u8,
) -> PointsService<MockUserRepository, MockClaimLedger> {
    PointsService::new(
        Arc::new(users),
        Arc::new(ledger),
        Arc::new(FixedPointsSource(ClaimPoints::new(award).expect("award in range"))),
        Arc::new(fixture_clock()),
    )
}

fn request(actor: Option<&User>, target: &User) -> ClaimPointsRequest {
    ClaimPointsRequest {
        actor: actor.map(Actor::from),
        target: target.id().clone(),
    }
}

#[rstest]
#[tokio::test]
async fn claim_appends_then_increments(grace: User, ada: User) {
    let mut users = MockUserRepository::new();
    let target = ada.clone();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(target)));
    let credited = ada.clone().with_total_points(19);
    users
        .expect_increment_points()
        .withf(|_, points| points.value() == 7)
        .times(1)
        .return_once(move |_, _| Ok(Some(credited)));

    let mut ledger = MockClaimLedger::new();
    let ada_id = ada.id().clone();
    let grace_id = grace.id().clone();
    ledger
        .expect_append()
        .withf(move |claim| {
            claim.target == ada_id
                && claim.claimed_by == grace_id
                && claim.points.value() == 7
                && claim.description == "Points claimed by Grace"
                && claim.created_at == fixture_timestamp()
        })
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(users, ledger, 7);
    let receipt = service
        .claim_points(&request(Some(&grace), &ada))
        .await
        .expect("claim succeeds");

    assert_eq!(receipt.points.value(), 7);
    assert_eq!(receipt.new_total, 19);
    assert_eq!(receipt.target_name.as_ref(), "Ada");
    assert_eq!(receipt.actor_name.as_ref(), "Grace");
    assert_eq!(receipt.timestamp, fixture_timestamp());
}

#[rstest]
#[tokio::test]
async fn actor_may_claim_for_themselves(grace: User) {
    let mut users = MockUserRepository::new();
    let target = grace.clone();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(target)));
    let credited = grace.clone().with_total_points(3);
    users
        .expect_increment_points()
        .return_once(move |_, _| Ok(Some(credited)));
    let mut ledger = MockClaimLedger::new();
    ledger.expect_append().times(1).return_once(|_| Ok(()));

    let service = make_service(users, ledger, 3);
    let receipt = service
        .claim_points(&request(Some(&grace), &grace))
        .await
        .expect("self claim succeeds");

    assert_eq!(receipt.target_name, receipt.actor_name);
    assert_eq!(receipt.new_total, 3);
}

#[rstest]
#[tokio::test]
async fn missing_actor_is_unauthorized(ada: User) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().never();
    let mut ledger = MockClaimLedger::new();
    ledger.expect_append().never();

    let service = make_service(users, ledger, 5);
    let error = service
        .claim_points(&request(None, &ada))
        .await
        .expect_err("unauthenticated");

    assert_eq!(error.code(), ErrorCode::Unauthorized);
}

#[rstest]
#[tokio::test]
async fn unknown_target_leaves_ledger_and_balances_untouched(grace: User) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(1).return_once(|_| Ok(None));
    users.expect_increment_points().never();
    let mut ledger = MockClaimLedger::new();
    ledger.expect_append().never();
    let mut source = MockPointsSource::new();
    source.expect_draw().never();

    let service = PointsService::new(
        Arc::new(users),
        Arc::new(ledger),
        Arc::new(source),
        Arc::new(fixture_clock()),
    );
    let missing = ClaimPointsRequest {
        actor: Some(Actor::from(&grace)),
        target: UserId::random(),
    };
    let error = service
        .claim_points(&missing)
        .await
        .expect_err("unknown target");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "User not found");
}

#[rstest]
#[tokio::test]
async fn increment_failure_after_append_is_internal(grace: User, ada: User) {
    let mut users = MockUserRepository::new();
    let target = ada.clone();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(target)));
    users
        .expect_increment_points()
        .return_once(|_, _| Err(UserPersistenceError::connection("pool closed")));
    let mut ledger = MockClaimLedger::new();
    ledger.expect_append().times(1).return_once(|_| Ok(()));

    let service = make_service(users, ledger, 4);
    let error = service
        .claim_points(&request(Some(&grace), &ada))
        .await
        .expect_err("partial failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn target_vanishing_before_increment_is_internal(grace: User, ada: User) {
    let mut users = MockUserRepository::new();
    let target = ada.clone();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(target)));
    users
        .expect_increment_points()
        .return_once(|_, _| Ok(None));
    let mut ledger = MockClaimLedger::new();
    ledger.expect_append().return_once(|_| Ok(()));

    let service = make_service(users, ledger, 4);
    let error = service
        .claim_points(&request(Some(&grace), &ada))
        .await
        .expect_err("partial failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn ledger_failure_skips_increment(grace: User, ada: User) {
    let mut users = MockUserRepository::new();
    let target = ada.clone();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(target)));
    users.expect_increment_points().never();
    let mut ledger = MockClaimLedger::new();
    ledger
        .expect_append()
        .return_once(|_| Err(ClaimLedgerError::connection("refused")));

    let service = make_service(users, ledger, 4);
    let error = service
        .claim_points(&request(Some(&grace), &ada))
        .await
        .expect_err("ledger unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_claims_on_one_target_keep_ledger_and_total_in_step(grace: User) {
    use crate::domain::ports::{ClaimLedger, UserRepository};
    use crate::domain::{HashedPassword, HistoryScope};
    use crate::outbound::memory::{InMemoryClaimLedger, InMemoryUserRepository};
    use crate::outbound::random_points::RandomPointsSource;

    const CLAIMS: usize = 50;
    let target = make_user("Target", 5);
    let users = Arc::new(InMemoryUserRepository::new());
    let ledger = Arc::new(InMemoryClaimLedger::new());
    let hash = HashedPassword::new("$argon2id$fixture");
    users.insert(&grace, &hash).await.expect("insert actor");
    users.insert(&target, &hash).await.expect("insert target");

    let service = Arc::new(PointsService::new(
        users.clone(),
        ledger.clone(),
        Arc::new(RandomPointsSource::seeded(11)),
        Arc::new(fixture_clock()),
    ));
    let tasks: Vec<_> = (0..CLAIMS)
        .map(|_| {
            let service = Arc::clone(&service);
            let claim = request(Some(&grace), &target);
            tokio::spawn(async move { service.claim_points(&claim).await })
        })
        .collect();

    let mut awarded = 0_u64;
    for task in tasks {
        let receipt = task.await.expect("task joins").expect("claim succeeds");
        assert!((1..=10).contains(&receipt.points.value()));
        awarded += u64::from(receipt.points.value());
    }

    let scope = HistoryScope::Target(target.id().clone());
    assert_eq!(ledger.count(&scope).await.expect("count"), CLAIMS as u64);
    assert_eq!(ledger.total_points().await.expect("sum"), awarded);
    let stored = users
        .find_by_id(target.id())
        .await
        .expect("lookup")
        .expect("target exists");
    assert_eq!(stored.total_points(), 5 + awarded);
}
