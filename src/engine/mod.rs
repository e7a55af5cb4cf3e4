mod memory;
mod rules;
mod traits;

pub use memory::MemoryRuleEngine;
pub use rules::{ResourceType, Rule, RuleAction, RuleActionType, RuleCondition, RuleUpdate};
pub use traits::RuleEngine;
