use serde::{
    Deserialize,
    Serialize,
};

/// The candy a species family shares.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandyData {
    /// Name of the candy.
    #[serde(rename = "Name")]
    pub name: String,
    /// Family the candy belongs to.
    #[serde(rename = "FamilyID")]
    pub family_id: i64,
}

/// What is required to evolve into the next species of the family.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionRequirements {
    /// Amount of candy required.
    #[serde(rename = "Amount")]
    pub amount: i64,
    /// Family of the required candy.
    #[serde(rename = "Family", default)]
    pub family: i64,
    /// Name of the required candy.
    #[serde(rename = "Name")]
    pub name: String,
}

/// A reference to another species in the same evolution family.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionReference {
    /// Number of the referenced species.
    #[serde(rename = "Number")]
    pub number: String,
    /// Name of the referenced species.
    #[serde(rename = "Name")]
    pub name: String,
}
