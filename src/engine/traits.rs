use super::rules::{Rule, RuleUpdate};
use anyhow::Result;

/// The host's dynamic rule table. The synchronizer only ever talks to this;
/// it holds no copy of the rules after submission.
#[async_trait::async_trait]
pub trait RuleEngine: Send + Sync {
    /// Atomically removes the ids named in the update, then installs the new
    /// rules. Removing an id that is not installed is not an error.
    async fn update_dynamic_rules(&self, update: RuleUpdate) -> Result<()>;

    /// Snapshot of the currently installed rules, ordered by id.
    async fn dynamic_rules(&self) -> Vec<Rule>;
}
