//! Property tests for streak evaluation and entitlement checks.

use proptest::prelude::*;
use streakgate_core::{
    classify, evaluate, has_active_subscription, is_admin, AdminRoster, Config, EntitlementGate,
    Identity, StreakStatus, SubscriptionStatus,
};

const SECURED: &str = "Streak secured for today! Keep it up.";

fn extract_number(message: &str) -> Option<u32> {
    message
        .split(|c: char| !c.is_ascii_digit())
        .find(|part| !part.is_empty())
        .and_then(|part| part.parse().ok())
}

proptest! {
    #[test]
    fn goal_met_is_always_secured(goal in 1u32..1_000, extra in 0u32..1_000, late in any::<bool>()) {
        prop_assert_eq!(evaluate(goal + extra, goal, late), SECURED);
    }

    #[test]
    fn late_unmet_reports_exact_remaining_with_urgency(goal in 1u32..1_000, done in 0u32..1_000) {
        prop_assume!(done < goal);
        let message = evaluate(done, goal, true);
        prop_assert_eq!(extract_number(&message), Some(goal - done));
        prop_assert!(message.contains("streak ends"));
        prop_assert!(classify(done, goal, true).is_urgent());
    }

    #[test]
    fn unmet_not_late_reports_exact_remaining_calmly(goal in 1u32..1_000, done in 0u32..1_000) {
        prop_assume!(done < goal);
        let message = evaluate(done, goal, false);
        prop_assert_eq!(extract_number(&message), Some(goal - done));
        prop_assert!(!message.contains("streak ends"));
        prop_assert!(!message.contains("Act now"));
        prop_assert!(!classify(done, goal, false).is_urgent());
    }

    #[test]
    fn remaining_is_never_zero_when_unmet(goal in 1u32..1_000, done in 0u32..1_000, late in any::<bool>()) {
        let status = classify(done, goal, late);
        if done < goal {
            prop_assert!(status.remaining() >= 1);
        } else {
            prop_assert_eq!(status, StreakStatus::Secured);
        }
    }

    #[test]
    fn secured_is_monotone_in_completed(goal in 1u32..500, done in 0u32..500, step in 0u32..500, late in any::<bool>()) {
        if classify(done, goal, late).is_secured() {
            prop_assert!(classify(done + step, goal, late).is_secured());
        }
    }

    #[test]
    fn admin_requires_exact_email(local in "[a-z]{1,12}", domain in "[a-z]{1,12}") {
        let email = format!("{local}@{domain}.com");
        let roster = AdminRoster::new([email.clone()]);

        prop_assert!(is_admin(&roster, Some(&Identity::with_email(email.clone()))));
        prop_assert!(!is_admin(&roster, Some(&Identity::with_email(email.to_uppercase()))));
        let spaced = format!(" {email}");
        prop_assert!(!is_admin(&roster, Some(&Identity::with_email(spaced))));
        let trailing_newline = format!("{email}\n");
        prop_assert!(!is_admin(&roster, Some(&Identity::with_email(trailing_newline))));
    }

    #[test]
    fn only_literal_active_grants_subscription(status in "[a-zA-Z_]{0,12}") {
        let sub = SubscriptionStatus::with_status(status.clone());
        prop_assert_eq!(has_active_subscription(Some(&sub)), status == "active");
    }
}

#[test]
fn scenario_goal_met() {
    assert_eq!(evaluate(5, 5, false), SECURED);
}

#[test]
fn scenario_late_three_remaining() {
    let message = evaluate(2, 5, true);
    assert_eq!(extract_number(&message), Some(3));
    assert!(message.contains("Act now"));
}

#[test]
fn scenario_three_remaining_not_late() {
    let message = evaluate(2, 5, false);
    assert_eq!(extract_number(&message), Some(3));
    assert!(!message.contains("Act now"));
}

#[test]
fn scenario_admin_roster_case_sensitivity() {
    let roster = AdminRoster::new(["you@yourdomain.com"]);
    assert!(is_admin(&roster, Some(&Identity::with_email("you@yourdomain.com"))));
    assert!(!is_admin(&roster, Some(&Identity::with_email("You@YourDomain.com"))));
    assert!(!is_admin(&roster, None));
    assert!(!is_admin(&roster, Some(&Identity::default())));
}

#[test]
fn scenario_absent_subscription() {
    assert!(!has_active_subscription(None));
    assert!(has_active_subscription(Some(&SubscriptionStatus::with_status("active"))));
    assert!(!has_active_subscription(Some(&SubscriptionStatus::with_status("past_due"))));
    assert!(!has_active_subscription(Some(&SubscriptionStatus::default())));
}

#[test]
fn gate_from_config_file_is_shared_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[admin]\nemails = [\"you@yourdomain.com\"]\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    let gate = EntitlementGate::new(config.admin_roster_with_override(None));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let gate = gate.clone();
            std::thread::spawn(move || {
                gate.is_admin(Some(&Identity::with_email("you@yourdomain.com")))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
