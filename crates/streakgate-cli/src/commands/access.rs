use clap::Subcommand;
use serde::Serialize;
use streakgate_core::{Config, Entitlements, Identity, SubscriptionStatus, SubscriptionTier};

#[derive(Subcommand)]
pub enum AccessAction {
    /// Check whether an email is on the admin roster
    Admin {
        /// Authenticated email; omit for an anonymous request
        #[arg(long)]
        email: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a subscription status grants paid access
    Subscription {
        /// Stored subscription status; omit when no subscription is on file
        #[arg(long)]
        status: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate both checks and print the entitlements as JSON
    Check {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Profile tier (free, pro, elite); reported, never used for access
        #[arg(long)]
        tier: Option<SubscriptionTier>,
    },
}

#[derive(Serialize)]
struct CheckOutput {
    #[serde(flatten)]
    entitlements: Entitlements,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<SubscriptionTier>,
}

pub fn run(action: AccessAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AccessAction::Admin { email, json } => {
            let gate = Config::load()?.entitlement_gate();
            let identity = email.map(Identity::with_email);
            let allowed = gate.is_admin(identity.as_ref());
            if json {
                println!("{}", serde_json::json!({ "is_admin": allowed }));
            } else {
                println!("{allowed}");
            }
        }
        AccessAction::Subscription { status, json } => {
            let subscription = status.map(SubscriptionStatus::with_status);
            let allowed = streakgate_core::has_active_subscription(subscription.as_ref());
            if json {
                println!("{}", serde_json::json!({ "has_active_subscription": allowed }));
            } else {
                println!("{allowed}");
            }
        }
        AccessAction::Check {
            email,
            status,
            tier,
        } => {
            let gate = Config::load()?.entitlement_gate();
            let identity = email.map(Identity::with_email);
            let subscription = status.map(SubscriptionStatus::with_status);
            let entitlements = gate.evaluate(identity.as_ref(), subscription.as_ref());
            let output = CheckOutput { entitlements, tier };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
