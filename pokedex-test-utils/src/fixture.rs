use std::path::PathBuf;

use pokedex_data::{
    Dataset,
    SpeciesData,
};

static FIXTURE: &str = include_str!("../data/data.json");

/// Path to the fixture data file shared by tests.
pub fn fixture_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("data.json")
}

/// The fixture dataset: six species, seven types, and six moves.
pub fn fixture_dataset() -> Dataset {
    serde_json::from_str(FIXTURE).unwrap()
}

/// A species with only a number and name set.
///
/// Use struct update syntax to fill in the fields a test cares about.
pub fn test_species(number: &str, name: &str) -> SpeciesData {
    SpeciesData {
        number: number.to_owned(),
        name: name.to_owned(),
        ..Default::default()
    }
}
