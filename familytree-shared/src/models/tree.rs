use serde::{Deserialize, Serialize};

use super::TreeId;

/// Request body for `POST /trees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeCreate {
    pub name: String,
}

/// A family tree as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeResponse {
    pub id: TreeId,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_response_only_needs_an_id() {
        let tree: TreeResponse = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(tree.id, TreeId(3));
        assert!(tree.name.is_empty());
    }

    #[test]
    fn tree_response_reads_name() {
        let tree: TreeResponse = serde_json::from_str(r#"{"id":1,"name":"Family"}"#).unwrap();
        assert_eq!(tree.name, "Family");
    }
}
