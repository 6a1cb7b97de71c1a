mod gate;
mod roster;

pub use gate::{
    has_active_subscription, is_admin, EntitlementGate, Entitlements, Identity,
    SubscriptionStatus, SubscriptionTier, ACTIVE_STATUS,
};
pub use roster::AdminRoster;
