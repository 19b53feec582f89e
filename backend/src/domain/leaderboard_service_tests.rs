//! Tests for the leaderboard read service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{ClaimLedgerError, MockClaimLedger, MockUserRepository, UserPersistenceError};
use crate::domain::test_fixtures::{fixture_timestamp, make_user};
use crate::domain::{Actor, ClaimPoints, ErrorCode, PointClaim, User};
use chrono::Duration;
use rstest::rstest;

fn make_service(
    users: MockUserRepository,
    ledger: MockClaimLedger,
) -> LeaderboardService<MockUserRepository, MockClaimLedger> {
    LeaderboardService::new(Arc::new(users), Arc::new(ledger))
}

fn claim(actor: &User, target: &User, points: u8, minutes: i64) -> PointClaim {
    PointClaim::record(
        &Actor::from(actor),
        target.id().clone(),
        ClaimPoints::new(points).expect("in range"),
        fixture_timestamp() + Duration::minutes(minutes),
    )
}

#[rstest]
#[tokio::test]
async fn list_users_ranks_store_results() {
    let mut users = MockUserRepository::new();
    let fixtures = vec![
        make_user("Bronze", 3),
        make_user("Gold", 30),
        make_user("Silver", 10),
    ];
    users
        .expect_list_ranked()
        .withf(|limit| *limit == LEADERBOARD_CAP)
        .times(1)
        .return_once(move |_| Ok(fixtures));

    let service = make_service(users, MockClaimLedger::new());
    let board = service.list_users().await.expect("leaderboard");

    let rows: Vec<_> = board
        .iter()
        .map(|entry| (entry.name.as_ref().to_owned(), entry.rank))
        .collect();
    assert_eq!(
        rows,
        [
            ("Gold".to_owned(), 1),
            ("Silver".to_owned(), 2),
            ("Bronze".to_owned(), 3)
        ]
    );
}

#[rstest]
#[tokio::test]
async fn get_user_returns_profile() {
    let ada = make_user("Ada", 8);
    let expected_id = ada.id().clone();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(ada)));

    let service = make_service(users, MockClaimLedger::new());
    let profile = service.get_user(&expected_id).await.expect("profile");

    assert_eq!(profile.id, expected_id);
    assert_eq!(profile.points, 8);
    assert_eq!(profile.joined_at, fixture_timestamp());
}

#[rstest]
#[tokio::test]
async fn get_user_unknown_is_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().return_once(|_| Ok(None));

    let service = make_service(users, MockClaimLedger::new());
    let error = service
        .get_user(&UserId::random())
        .await
        .expect_err("unknown user");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn history_resolves_names_and_paginates() {
    let ada = make_user("Ada", 0);
    let grace = make_user("Grace", 0);
    let newest = claim(&grace, &ada, 4, 2);
    let older = claim(&ada, &grace, 9, 1);
    let page_claims = vec![newest.clone(), older.clone()];
    let known = vec![ada.clone(), grace.clone()];

    let mut ledger = MockClaimLedger::new();
    ledger
        .expect_count()
        .withf(|scope| *scope == HistoryScope::All)
        .return_once(|_| Ok(5));
    ledger
        .expect_list()
        .withf(|scope, offset, limit| *scope == HistoryScope::All && *offset == 0 && *limit == 2)
        .return_once(move |_, _, _| Ok(page_claims));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_ids()
        .withf(|ids| ids.len() == 2)
        .times(1)
        .return_once(move |_| Ok(known));

    let service = make_service(users, ledger);
    let page = service
        .history(&HistoryScope::All, PageRequest::new(1, 2).expect("valid page"))
        .await
        .expect("history page");

    assert_eq!(page.entries.len(), 2);
    assert_eq!(page.entries[0].id, newest.id);
    assert_eq!(page.entries[0].user_name, "Ada");
    assert_eq!(page.entries[0].claimed_by, "Grace");
    assert_eq!(page.entries[0].description, "Points claimed by Grace");
    assert_eq!(page.entries[1].user_name, "Grace");
    assert_eq!(page.pagination.current(), 1);
    assert_eq!(page.pagination.total(), 3);
    assert!(page.pagination.has_next());
    assert!(!page.pagination.has_prev());
}

#[rstest]
#[tokio::test]
async fn scoped_history_for_user_without_claims_is_empty() {
    let target = UserId::random();
    let scope = HistoryScope::Target(target);
    let mut ledger = MockClaimLedger::new();
    ledger.expect_count().return_once(|_| Ok(0));
    ledger.expect_list().return_once(|_, _, _| Ok(Vec::new()));
    let mut users = MockUserRepository::new();
    users.expect_find_by_ids().never();

    let service = make_service(users, ledger);
    let page = service
        .history(&scope, PageRequest::new(1, 20).expect("valid page"))
        .await
        .expect("empty page");

    assert!(page.entries.is_empty());
    assert_eq!(page.pagination.total(), 0);
    assert!(!page.pagination.has_next());
    assert!(!page.pagination.has_prev());
}

#[rstest]
#[tokio::test]
async fn history_passes_offset_for_later_pages() {
    let mut ledger = MockClaimLedger::new();
    ledger.expect_count().return_once(|_| Ok(5));
    ledger
        .expect_list()
        .withf(|_, offset, limit| *offset == 4 && *limit == 2)
        .times(1)
        .return_once(|_, _, _| Ok(Vec::new()));

    let service = make_service(MockUserRepository::new(), ledger);
    let page = service
        .history(&HistoryScope::All, PageRequest::new(3, 2).expect("valid page"))
        .await
        .expect("history page");

    assert_eq!(page.pagination.current(), 3);
    assert!(page.pagination.has_prev());
}

#[rstest]
#[tokio::test]
async fn history_maps_ledger_outage() {
    let mut ledger = MockClaimLedger::new();
    ledger
        .expect_count()
        .return_once(|_| Err(ClaimLedgerError::connection("refused")));

    let service = make_service(MockUserRepository::new(), ledger);
    let error = service
        .history(&HistoryScope::All, PageRequest::new(1, 50).expect("valid page"))
        .await
        .expect_err("outage");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn stats_aggregate_store_and_ledger() {
    let leader = make_user("Leader", 42);
    let leader_id = leader.id().clone();
    let mut users = MockUserRepository::new();
    users.expect_count_active().return_once(|| Ok(3));
    users
        .expect_list_ranked()
        .withf(|limit| *limit == 1)
        .return_once(move |_| Ok(vec![leader]));
    let mut ledger = MockClaimLedger::new();
    ledger.expect_count().return_once(|_| Ok(9));
    ledger.expect_total_points().return_once(|| Ok(51));

    let service = make_service(users, ledger);
    let stats = service.stats().await.expect("stats");

    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.total_claims, 9);
    assert_eq!(stats.total_points_awarded, 51);
    let top = stats.top_user.expect("top user");
    assert_eq!(top.id, leader_id);
    assert_eq!(top.points, 42);
}

#[rstest]
#[tokio::test]
async fn stats_on_empty_store_have_no_top_user() {
    let mut users = MockUserRepository::new();
    users.expect_count_active().return_once(|| Ok(0));
    users.expect_list_ranked().return_once(|_| Ok(Vec::new()));
    let mut ledger = MockClaimLedger::new();
    ledger.expect_count().return_once(|_| Ok(0));
    ledger.expect_total_points().return_once(|| Ok(0));

    let service = make_service(users, ledger);
    let stats = service.stats().await.expect("stats");

    assert_eq!(stats.total_users, 0);
    assert!(stats.top_user.is_none());
}

#[rstest]
#[tokio::test]
async fn stats_surface_store_errors() {
    let mut users = MockUserRepository::new();
    users
        .expect_count_active()
        .return_once(|| Err(UserPersistenceError::query("boom")));

    let service = make_service(users, MockClaimLedger::new());
    let error = service.stats().await.expect_err("store error");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
