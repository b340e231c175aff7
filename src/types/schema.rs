//! Top-level exported document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::relation::{Permission, Relation};

/// The exported schema document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub struct Schema {
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caveats: Vec<Caveat>,
}

impl Schema {
    /// Look a definition up by its qualified name (`namespace/name` or `name`).
    pub fn definition(&self, qualified_name: &str) -> Option<&Definition> {
        self.definitions
            .iter()
            .find(|d| d.qualified_name() == qualified_name)
    }
}

/// An exported object type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub struct Definition {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Definition {
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.namespace, self.name)
        }
    }
}

/// An exported caveat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub struct Caveat {
    pub name: String,
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}
