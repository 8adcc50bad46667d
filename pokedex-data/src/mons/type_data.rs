use serde::{
    Deserialize,
    Serialize,
};

/// Data about an elemental type.
///
/// Effectiveness relationships reference other types by name. The species belonging to a type are
/// not stored here; they are resolved by scanning species data at query time.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeData {
    /// Name of the type.
    ///
    /// Lookup by name is case-insensitive.
    pub name: String,
    /// Types this type is super effective against (damage is doubled).
    #[serde(rename = "effectiveAgainst", default)]
    pub effective_against: Vec<String>,
    /// Types this type is weak against (damage is halved).
    #[serde(rename = "weakAgainst", default)]
    pub weak_against: Vec<String>,
}
