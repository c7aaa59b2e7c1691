//! Ledger and Report Lifecycle Rules
//!
//! These tests pin down the status transition table and the ledger entry
//! constructors: which moves a report may make, and what every earn or
//! redeem writes into rewards, transactions and notifications.

use db::dtos::ledger::LedgerEntry;
use db::models::report::{ALLOWED_TRANSITIONS, ReportStatus};
use db::models::reward::RewardKind;
use db::models::transaction::TransactionKind;
use uuid::Uuid;

// ============================================================================
// Report Status Transition Tests
// ============================================================================

#[test]
fn test_forward_path_is_allowed() {
    assert!(ReportStatus::Pending.can_transition_to(ReportStatus::InProgress));
    assert!(ReportStatus::InProgress.can_transition_to(ReportStatus::Collected));
}

#[test]
fn test_collector_can_back_out() {
    assert!(ReportStatus::InProgress.can_transition_to(ReportStatus::Pending));
}

#[test]
fn test_collected_is_terminal() {
    assert!(!ReportStatus::Collected.can_transition_to(ReportStatus::Pending));
    assert!(!ReportStatus::Collected.can_transition_to(ReportStatus::InProgress));
    assert!(!ReportStatus::Collected.can_transition_to(ReportStatus::Collected));
}

#[test]
fn test_no_skipping_straight_to_collected() {
    assert!(!ReportStatus::Pending.can_transition_to(ReportStatus::Collected));
}

#[test]
fn test_no_self_transitions() {
    for status in [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Collected,
    ] {
        assert!(!status.can_transition_to(status));
    }
}

#[test]
fn test_transition_table_has_exactly_three_moves() {
    assert_eq!(ALLOWED_TRANSITIONS.len(), 3);
}

#[test]
fn test_status_wire_strings() {
    assert_eq!(
        serde_json::to_string(&ReportStatus::Pending).unwrap(),
        "\"Pending\""
    );
    assert_eq!(
        serde_json::to_string(&ReportStatus::InProgress).unwrap(),
        "\"in_progress\""
    );
    assert_eq!(
        serde_json::to_string(&ReportStatus::Collected).unwrap(),
        "\"Collected\""
    );
}

// ============================================================================
// Ledger Entry Constructor Tests
// ============================================================================

#[test]
fn test_report_grant_entry() {
    let user_id = Uuid::new_v4();
    let entry = LedgerEntry::grant(user_id, RewardKind::Report, 15);

    assert_eq!(entry.user_id, user_id);
    assert_eq!(entry.kind, TransactionKind::EarnedReport);
    assert_eq!(entry.amount, 15);
    assert_eq!(entry.transaction_description, "Points earned for reporting waste");
    assert_eq!(
        entry.notification_message,
        "You have received 15 points for waste reporting"
    );

    let grant = entry.reward.expect("report grant carries a reward");
    assert_eq!(grant.points, 15);
    assert_eq!(grant.name, RewardKind::Report);
    assert_eq!(grant.description, "points earned for reporting waste");
}

#[test]
fn test_collect_grant_entry() {
    let user_id = Uuid::new_v4();
    let entry = LedgerEntry::grant(user_id, RewardKind::Collect, 35);

    assert_eq!(entry.kind, TransactionKind::EarnedCollect);
    assert_eq!(entry.amount, 35);
    assert_eq!(entry.transaction_description, "Points earned for collecting waste");
    assert_eq!(
        entry.notification_message,
        "You have received 35 points for waste collection"
    );

    let grant = entry.reward.expect("collect grant carries a reward");
    assert_eq!(grant.name, RewardKind::Collect);
    assert_eq!(grant.description, "points earned for collecting waste");
}

#[test]
fn test_single_redemption_entry_is_negative_and_rewardless() {
    let user_id = Uuid::new_v4();
    let entry = LedgerEntry::redemption(user_id, 30);

    assert!(entry.reward.is_none());
    assert_eq!(entry.kind, TransactionKind::RedeemedReward);
    assert_eq!(entry.amount, -30);
    assert_eq!(entry.transaction_description, "Redeemed Points.");
    assert_eq!(entry.notification_message, "You have redeemed 30 points.");
}

#[test]
fn test_full_redemption_entry_sums_flipped_rewards() {
    let user_id = Uuid::new_v4();
    let flipped: Vec<i32> = vec![5, 10, 15];
    let total: i32 = flipped.iter().sum();
    let entry = LedgerEntry::full_redemption(user_id, total);

    assert!(entry.reward.is_none());
    assert_eq!(entry.kind, TransactionKind::RedeemedReward);
    assert_eq!(entry.amount, -30);
    assert_eq!(entry.transaction_description, "Redeemed all Points.");
    assert_eq!(entry.notification_message, "You have redeemed all your points.");
}

// ============================================================================
// Serialization Shape Tests
// ============================================================================

#[test]
fn test_reward_description_serializes_as_desc() {
    use chrono::NaiveDate;
    use db::models::reward::Reward;

    let reward = Reward {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        points: 20,
        description: "points earned for collecting waste".to_string(),
        name: RewardKind::Collect,
        is_available: true,
        created_at: NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    };

    let json = serde_json::to_value(&reward).unwrap();
    assert_eq!(json["desc"], "points earned for collecting waste");
    assert!(json.get("description").is_none());
    assert_eq!(json["name"], "collect");
    assert_eq!(json["isAvailable"], true);
}
