//! # Streakgate Core Library
//!
//! Decision logic behind the daily engagement streak and feature access:
//! a caller fetches fresh data, hands it over, and gets a plain value back.
//! Nothing here keeps state between calls.
//!
//! ## Key Components
//!
//! - [`streak`]: classifies today's progress toward the daily goal and
//!   renders the status message
//! - [`entitlement`]: admin roster membership and the active-subscription gate
//! - [`Config`]: TOML configuration holding the admin roster and streak defaults

pub mod entitlement;
pub mod error;
pub mod storage;
pub mod streak;

pub use entitlement::{
    has_active_subscription, is_admin, AdminRoster, EntitlementGate, Entitlements, Identity,
    SubscriptionStatus, SubscriptionTier,
};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use storage::Config;
pub use streak::{classify, evaluate, StreakProgress, StreakStatus};
