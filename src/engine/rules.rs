use serde::{Deserialize, Serialize};

/// A dynamic URL-blocking rule, in the host engine's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u32,
    pub priority: u32,
    pub action: RuleAction,
    pub condition: RuleCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleAction {
    #[serde(rename = "type")]
    pub kind: RuleActionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleActionType {
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    pub url_filter: String,
    pub resource_types: Vec<ResourceType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    MainFrame,
    SubFrame,
}

impl Rule {
    /// Standard blocking rule for a blocklist entry: priority 1, block action,
    /// matching top-level and embedded frames.
    pub fn blocking(id: u32, url_filter: impl Into<String>) -> Self {
        Self {
            id,
            priority: 1,
            action: RuleAction {
                kind: RuleActionType::Block,
            },
            condition: RuleCondition {
                url_filter: url_filter.into(),
                resource_types: vec![ResourceType::MainFrame, ResourceType::SubFrame],
            },
        }
    }
}

/// One atomic mutation of the dynamic rule table: remove the listed ids,
/// then install the new rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleUpdate {
    pub remove_rule_ids: Vec<u32>,
    pub add_rules: Vec<Rule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_rule_wire_shape() {
        let rule = Rule::blocking(1, "bad-site.org");
        let value = serde_json::to_value(&rule).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "priority": 1,
                "action": { "type": "block" },
                "condition": {
                    "urlFilter": "bad-site.org",
                    "resourceTypes": ["main_frame", "sub_frame"]
                }
            })
        );
    }

    #[test]
    fn test_rule_update_wire_shape() {
        let update = RuleUpdate {
            remove_rule_ids: vec![1],
            add_rules: vec![Rule::blocking(1, "bad-site.org")],
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["removeRuleIds"], serde_json::json!([1]));
        assert_eq!(value["addRules"][0]["id"], 1);
    }
}
