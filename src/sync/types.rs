use serde::Deserialize;
use tracing::warn;

/// One remote blocklist entry. Ids are assigned by the remote source and are
/// taken as-is; the `url` is a URL-filter pattern, not a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlocklistEntry {
    pub id: u32,
    pub url: String,
}

/// The decoded `/blocklist` response body.
///
/// The field stays an `Option` so that "the server omitted the list" is
/// distinguishable from "the server sent an empty list". Both resolve to no
/// entries, but the omitted case is logged.
#[derive(Debug, Clone, Deserialize)]
pub struct BlocklistResponse {
    pub blocklist: Option<Vec<BlocklistEntry>>,
}

impl BlocklistResponse {
    pub fn into_entries(self) -> Vec<BlocklistEntry> {
        match self.blocklist {
            Some(entries) => entries,
            None => {
                warn!("Blocklist response had no 'blocklist' field, treating as empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_well_formed_response() {
        let body = r#"{ "blocklist": [ { "id": 1, "url": "bad-site.org" } ] }"#;
        let response: BlocklistResponse = serde_json::from_str(body).unwrap();
        let entries = response.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].url, "bad-site.org");
    }

    #[test]
    fn test_missing_field_decodes_to_none() {
        let response: BlocklistResponse = serde_json::from_str("{}").unwrap();
        assert!(response.blocklist.is_none());
        assert!(response.into_entries().is_empty());
    }

    #[test]
    fn test_empty_list_is_present_but_empty() {
        let response: BlocklistResponse = serde_json::from_str(r#"{ "blocklist": [] }"#).unwrap();
        assert_eq!(response.blocklist, Some(vec![]));
    }
}
