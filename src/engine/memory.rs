use super::rules::{Rule, RuleUpdate};
use super::traits::RuleEngine;
use anyhow::Result;
use rustc_hash::FxHashMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory rule table keyed by rule id. Stands in for the browser's
/// engine-owned dynamic rule state.
#[derive(Debug, Default)]
pub struct MemoryRuleEngine {
    rules: RwLock<FxHashMap<u32, Rule>>,
}

impl MemoryRuleEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RuleEngine for MemoryRuleEngine {
    async fn update_dynamic_rules(&self, update: RuleUpdate) -> Result<()> {
        let mut rules = self.rules.write().unwrap();
        for id in &update.remove_rule_ids {
            rules.remove(id);
        }
        for rule in update.add_rules {
            rules.insert(rule.id, rule);
        }
        debug!("Dynamic rule table now holds {} rules", rules.len());
        Ok(())
    }

    async fn dynamic_rules(&self) -> Vec<Rule> {
        let rules = self.rules.read().unwrap();
        let mut snapshot: Vec<Rule> = rules.values().cloned().collect();
        snapshot.sort_by_key(|r| r.id);
        snapshot
    }
}
