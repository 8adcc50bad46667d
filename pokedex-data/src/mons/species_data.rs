use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    CandyData,
    EvolutionReference,
    EvolutionRequirements,
};

/// Data about a particular species.
///
/// Types and moves are referenced by name only. Resolving those references (for example, finding
/// the type data for a species' primary type) is done by the dex at query time.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Dex number of the species, zero-padded (e.g., "001").
    ///
    /// Sorting by number compares this string directly.
    #[serde(rename = "Number")]
    pub number: String,
    /// Name of the species.
    ///
    /// Lookup by name is case-insensitive.
    #[serde(rename = "Name")]
    pub name: String,
    /// The species class, which displays on the Dex page.
    #[serde(rename = "Classification", default)]
    pub classification: String,
    /// Primary type names.
    #[serde(rename = "Type I")]
    pub primary_types: Vec<String>,
    /// Secondary type names, if any.
    #[serde(rename = "Type II", default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_types: Vec<String>,
    /// Names of the types this species is weak to.
    #[serde(rename = "Weaknesses", default)]
    pub weaknesses: Vec<String>,
    /// Names of fast attack moves.
    #[serde(rename = "Fast Attack(s)", default)]
    pub fast_attacks: Vec<String>,
    /// Names of special attack moves.
    #[serde(rename = "Special Attack(s)", default)]
    pub special_attacks: Vec<String>,
    /// Weight with its unit suffix, using a comma as the decimal separator (e.g., "6,9 kg").
    #[serde(rename = "Weight")]
    pub weight: String,
    /// Height with its unit suffix, using a comma as the decimal separator (e.g., "0,71 m").
    #[serde(rename = "Height")]
    pub height: String,
    /// Candy of the species family.
    #[serde(rename = "Candy", default)]
    pub candy: CandyData,
    /// Requirements for evolving into the next species, if it exists.
    #[serde(
        rename = "Next Evolution Requirements",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_evolution_requirements: Option<EvolutionRequirements>,
    /// Species this species evolves into.
    #[serde(
        rename = "Next evolution(s)",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub next_evolutions: Vec<EvolutionReference>,
    /// Species this species evolves from.
    #[serde(
        rename = "Previous evolution(s)",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub previous_evolutions: Vec<EvolutionReference>,
    /// Base attack stat.
    #[serde(rename = "BaseAttack")]
    pub base_attack: i64,
    /// Base defense stat.
    #[serde(rename = "BaseDefense")]
    pub base_defense: i64,
    /// Base stamina stat.
    #[serde(rename = "BaseStamina")]
    pub base_stamina: i64,
    /// Base capture rate.
    #[serde(rename = "CaptureRate", default)]
    pub capture_rate: f64,
    /// Base flee rate.
    #[serde(rename = "FleeRate", default)]
    pub flee_rate: f64,
    /// Walking distance needed to earn candy as a buddy, in kilometers.
    #[serde(rename = "BuddyDistanceNeeded", default)]
    pub buddy_distance_needed: i64,
}

impl SpeciesData {
    /// All type names of the species, primary types first.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.primary_types
            .iter()
            .chain(self.secondary_types.iter())
            .map(String::as_str)
    }

    /// Does the species evolve into another species?
    pub fn has_evolutions(&self) -> bool {
        !self.next_evolutions.is_empty()
    }
}

#[cfg(test)]
mod species_data_test {
    use pretty_assertions::assert_eq;

    use crate::{
        CandyData,
        EvolutionReference,
        EvolutionRequirements,
        SpeciesData,
    };

    const BULBASAUR: &str = r#"{
        "Number": "001",
        "Name": "Bulbasaur",
        "Classification": "Seed Pokèmon",
        "Type I": ["Grass"],
        "Type II": ["Poison"],
        "Weaknesses": ["Fire", "Ice", "Flying", "Psychic"],
        "Fast Attack(s)": ["Tackle", "Vine Whip"],
        "Weight": "6,9 kg",
        "Height": "0,71 m",
        "Candy": { "Name": "Bulbasaur Candy", "FamilyID": 1 },
        "Next Evolution Requirements": { "Amount": 25, "Family": 1, "Name": "Bulbasaur candies" },
        "Next evolution(s)": [
            { "Number": "002", "Name": "Ivysaur" },
            { "Number": "003", "Name": "Venusaur" }
        ],
        "Special Attack(s)": ["Power Whip", "Seed Bomb", "Sludge Bomb"],
        "BaseAttack": 118,
        "BaseDefense": 118,
        "BaseStamina": 90,
        "CaptureRate": 0.16,
        "FleeRate": 0.1,
        "BuddyDistanceNeeded": 3
    }"#;

    #[test]
    fn deserializes_full_species() {
        let species = serde_json::from_str::<SpeciesData>(BULBASAUR).unwrap();
        assert_eq!(species.number, "001");
        assert_eq!(species.name, "Bulbasaur");
        assert_eq!(species.primary_types, Vec::from_iter(["Grass".to_owned()]));
        assert_eq!(species.secondary_types, Vec::from_iter(["Poison".to_owned()]));
        assert_eq!(species.weight, "6,9 kg");
        assert_eq!(species.height, "0,71 m");
        assert_eq!(
            species.candy,
            CandyData {
                name: "Bulbasaur Candy".to_owned(),
                family_id: 1,
            }
        );
        assert_eq!(
            species.next_evolution_requirements,
            Some(EvolutionRequirements {
                amount: 25,
                family: 1,
                name: "Bulbasaur candies".to_owned(),
            })
        );
        assert_eq!(species.base_attack, 118);
        assert_eq!(species.base_defense, 118);
        assert_eq!(species.base_stamina, 90);
        assert_eq!(species.buddy_distance_needed, 3);
        assert!(species.previous_evolutions.is_empty());
        assert!(species.has_evolutions());
    }

    #[test]
    fn omits_optional_sections() {
        let species = serde_json::from_str::<SpeciesData>(
            r#"{
                "Number": "002",
                "Name": "Ivysaur",
                "Type I": ["Grass"],
                "Weight": "13,0 kg",
                "Height": "0,99 m",
                "Previous evolution(s)": [{ "Number": "001", "Name": "Bulbasaur" }],
                "BaseAttack": 151,
                "BaseDefense": 151,
                "BaseStamina": 120
            }"#,
        )
        .unwrap();
        assert_eq!(
            species.previous_evolutions,
            Vec::from_iter([EvolutionReference {
                number: "001".to_owned(),
                name: "Bulbasaur".to_owned(),
            }])
        );
        assert!(species.secondary_types.is_empty());
        assert_eq!(species.next_evolution_requirements, None);
        assert!(!species.has_evolutions());
    }

    #[test]
    fn lists_primary_types_before_secondary_types() {
        let species = serde_json::from_str::<SpeciesData>(BULBASAUR).unwrap();
        assert_eq!(species.types().collect::<Vec<_>>(), ["Grass", "Poison"]);
    }
}
