// Entity types shared across the codebase

use serde::{Deserialize, Serialize};

/// Mutation kinds that are gated per group. Reads are implicitly allowed
/// for any authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    Insert,
    Update,
    Delete,
}

/// A place of interest. `place_id` is assigned by the store on insert;
/// a client-supplied id is overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub place_id: Option<String>,
    pub place_name: String,
    /// Opaque category identifier. Referential existence is not checked.
    pub place_type: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// A place category. `type_id` is assigned by the store on insert;
/// `type_name` is unique among categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub type_id: Option<String>,
    pub type_name: String,
}

/// Permission bundle. Users reference exactly one group; groups are
/// read-mostly reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: String,
    pub group_name: String,
    #[serde(default)]
    pub can_insert: bool,
    #[serde(default)]
    pub can_update: bool,
    #[serde(default)]
    pub can_delete: bool,
}

impl Group {
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Insert => self.can_insert,
            Capability::Update => self.can_update,
            Capability::Delete => self.can_delete,
        }
    }
}

/// A resolved user with its group attached by the lookup layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Opaque credential, compared by equality. Not hashed in this system.
    pub password: String,
    pub email: String,
    pub group: Group,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(can_insert: bool, can_update: bool, can_delete: bool) -> Group {
        Group {
            group_id: "G0001".to_string(),
            group_name: "Test".to_string(),
            can_insert,
            can_update,
            can_delete,
        }
    }

    #[test]
    fn capabilities_are_gated_independently() {
        let g = group(true, false, true);
        assert!(g.allows(Capability::Insert));
        assert!(!g.allows(Capability::Update));
        assert!(g.allows(Capability::Delete));
    }

    #[test]
    fn empty_group_allows_nothing() {
        let g = group(false, false, false);
        assert!(!g.allows(Capability::Insert));
        assert!(!g.allows(Capability::Update));
        assert!(!g.allows(Capability::Delete));
    }

    #[test]
    fn place_deserializes_with_optional_fields_defaulted() {
        let place: Place = serde_json::from_value(serde_json::json!({
            "place_name": "Test Place",
            "place_type": "T0001",
            "latitude": 10.0,
            "longitude": 20.0
        }))
        .unwrap();

        assert_eq!(place.place_id, None);
        assert!(!place.starred);
        assert_eq!(place.picture_url, None);
    }
}
