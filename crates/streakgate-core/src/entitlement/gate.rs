//! Administrative privilege and paid-feature access checks.
//!
//! Both predicates are total: absent identities and absent subscription
//! records produce `false`, never an error.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use super::roster::AdminRoster;
use crate::error::ValidationError;

/// The only subscription status that grants paid access.
pub const ACTIVE_STATUS: &str = "active";

/// Authenticated user as supplied by the auth collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

/// Stored subscription record as supplied by the billing collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    #[serde(default)]
    pub status: Option<String>,
}

impl SubscriptionStatus {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }
}

/// Profile tier label. Parsed and reported for callers only; access is
/// decided by [`has_active_subscription`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Pro,
    Elite,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Pro => "pro",
            SubscriptionTier::Elite => "elite",
        }
    }
}

impl FromStr for SubscriptionTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(SubscriptionTier::Free),
            "pro" => Ok(SubscriptionTier::Pro),
            "elite" => Ok(SubscriptionTier::Elite),
            other => Err(ValidationError::InvalidValue {
                field: "tier".to_string(),
                message: format!("unknown tier '{other}'"),
            }),
        }
    }
}

/// Whether `identity` carries an email listed in `roster`.
pub fn is_admin(roster: &AdminRoster, identity: Option<&Identity>) -> bool {
    identity
        .and_then(|id| id.email.as_deref())
        .is_some_and(|email| roster.contains(email))
}

/// Whether a subscription record is present with status `"active"`.
pub fn has_active_subscription(subscription: Option<&SubscriptionStatus>) -> bool {
    subscription
        .and_then(|sub| sub.status.as_deref())
        .is_some_and(|status| status == ACTIVE_STATUS)
}

/// Result of evaluating both predicates for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlements {
    pub is_admin: bool,
    pub has_active_subscription: bool,
}

impl Entitlements {
    /// Admins always pass the paid-feature gate.
    pub fn can_access_paid_features(&self) -> bool {
        self.is_admin || self.has_active_subscription
    }
}

/// Entitlement checks bound to a fixed admin roster.
///
/// Cloning is cheap and shares the roster; swapping rosters means building
/// a new gate.
#[derive(Debug, Clone, Default)]
pub struct EntitlementGate {
    roster: Arc<AdminRoster>,
}

impl EntitlementGate {
    pub fn new(roster: AdminRoster) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }

    pub fn roster(&self) -> &AdminRoster {
        &self.roster
    }

    pub fn is_admin(&self, identity: Option<&Identity>) -> bool {
        is_admin(&self.roster, identity)
    }

    pub fn has_active_subscription(&self, subscription: Option<&SubscriptionStatus>) -> bool {
        has_active_subscription(subscription)
    }

    pub fn evaluate(
        &self,
        identity: Option<&Identity>,
        subscription: Option<&SubscriptionStatus>,
    ) -> Entitlements {
        Entitlements {
            is_admin: self.is_admin(identity),
            has_active_subscription: self.has_active_subscription(subscription),
        }
    }
}
