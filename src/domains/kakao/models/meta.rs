//! Result-set metadata returned next to `documents`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Region disambiguation for a keyword query that names a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SameName {
    /// Regions recognized in the query
    pub region: Vec<String>,
    /// Query keyword with the region part removed
    pub keyword: String,
    /// Region picked among `region` for this result set
    pub selected_region: String,
}

/// Pagination summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Meta {
    /// Total number of matches
    pub total_count: u64,
    /// Number of matches that can be paged through
    pub pageable_count: u64,
    /// Whether this is the last page
    pub is_end: bool,
    #[serde(default)]
    pub same_name: Option<SameName>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_with_same_name() {
        let meta: Meta = serde_json::from_value(json!({
            "total_count": 4,
            "pageable_count": 4,
            "is_end": true,
            "same_name": {
                "region": [],
                "keyword": "카카오프렌즈",
                "selected_region": ""
            }
        }))
        .unwrap();

        assert_eq!(meta.total_count, 4);
        assert!(meta.is_end);
        let same_name = meta.same_name.unwrap();
        assert!(same_name.region.is_empty());
        assert_eq!(same_name.keyword, "카카오프렌즈");
    }

    #[test]
    fn test_meta_without_same_name() {
        let meta: Meta = serde_json::from_value(json!({
            "total_count": 1,
            "pageable_count": 1,
            "is_end": false
        }))
        .unwrap();
        assert!(meta.same_name.is_none());
        assert!(!meta.is_end);
    }
}
