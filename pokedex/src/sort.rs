//! Ordering of species sequences by a named key.

use std::{
    cmp::Ordering,
    str::FromStr,
};

use anyhow::Error;
use log::info;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    SpeciesData,
    common::{
        parse_height,
        parse_weight,
    },
    error::invalid_sort_key_error,
};

/// A key species can be sorted by.
///
/// Labels are matched case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum SortKey {
    /// Dex number, compared as a string.
    #[string = "number"]
    #[alias = "id"]
    Number,
    /// Name, compared as a string.
    #[string = "name"]
    Name,
    /// Weight, parsed from its text form.
    #[string = "weight"]
    Weight,
    /// Height, parsed from its text form.
    #[string = "height"]
    Height,
    /// Base attack stat.
    #[string = "baseattack"]
    BaseAttack,
    /// Base defense stat.
    #[string = "basedefense"]
    #[alias = "basedefence"]
    BaseDefense,
    /// Base stamina stat.
    #[string = "basestamina"]
    BaseStamina,
}

impl SortKey {
    /// Every recognized label, aliases included.
    pub const ALL_LABELS: [&'static str; 9] = [
        "number",
        "id",
        "name",
        "weight",
        "height",
        "baseattack",
        "basedefence",
        "basedefense",
        "basestamina",
    ];

    /// Compares two species in ascending order of this key.
    ///
    /// Numbers and names compare as strings, so `"10"` orders before `"2"`. Weights and heights
    /// that fail to parse compare as zero.
    pub fn compare(&self, a: &SpeciesData, b: &SpeciesData) -> Ordering {
        match self {
            Self::Number => a.number.cmp(&b.number),
            Self::Name => a.name.cmp(&b.name),
            Self::Weight => parse_weight(&a.weight).total_cmp(&parse_weight(&b.weight)),
            Self::Height => parse_height(&a.height).total_cmp(&parse_height(&b.height)),
            Self::BaseAttack => a.base_attack.cmp(&b.base_attack),
            Self::BaseDefense => a.base_defense.cmp(&b.base_defense),
            Self::BaseStamina => a.base_stamina.cmp(&b.base_stamina),
        }
    }
}

/// Sorts species in ascending order of the given key.
///
/// The sort is stable: species with equal keys keep their relative order.
pub fn sort_species_by(mut species: Vec<&SpeciesData>, key: SortKey) -> Vec<&SpeciesData> {
    species.sort_by(|a, b| key.compare(a, b));
    info!("Sorted {} species by {key:?}", species.len());
    species
}

/// Sorts species in ascending order of the key with the given label.
///
/// Fails with an [`InvalidSortKeyError`][`crate::error::InvalidSortKeyError`] if the label is
/// not recognized, regardless of how many species there are to sort.
pub fn sort_species<'d>(
    species: Vec<&'d SpeciesData>,
    key: &str,
) -> Result<Vec<&'d SpeciesData>, Error> {
    let key = SortKey::from_str(key).map_err(|_| invalid_sort_key_error(key))?;
    Ok(sort_species_by(species, key))
}

/// Reverses the order of a sequence in place.
pub fn reverse_species<T>(mut species: Vec<T>) -> Vec<T> {
    species.reverse();
    species
}

#[cfg(test)]
mod sort_test {
    use std::str::FromStr;

    use assert_matches::assert_matches;
    use pokedex_test_utils::{
        fixture_dataset,
        test_species,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        SpeciesData,
        error::InvalidSortKeyError,
        sort::{
            SortKey,
            reverse_species,
            sort_species,
            sort_species_by,
        },
    };

    fn names<'d>(species: &[&'d SpeciesData]) -> Vec<&'d str> {
        species.iter().map(|species| species.name.as_str()).collect()
    }

    fn weighted(number: &str, name: &str, weight: &str) -> SpeciesData {
        SpeciesData {
            weight: weight.to_owned(),
            ..test_species(number, name)
        }
    }

    #[test]
    fn parses_all_labels_ignoring_case() {
        for label in SortKey::ALL_LABELS {
            assert!(SortKey::from_str(label).is_ok(), "{label}");
            assert!(SortKey::from_str(&label.to_uppercase()).is_ok(), "{label}");
        }
        assert_eq!(SortKey::from_str("id").ok(), Some(SortKey::Number));
        assert_eq!(SortKey::from_str("BaseDefence").ok(), Some(SortKey::BaseDefense));
        assert_eq!(SortKey::from_str("basedefense").ok(), Some(SortKey::BaseDefense));
        assert!(SortKey::from_str("speed").is_err());
    }

    #[test]
    fn sorts_numbers_as_strings() {
        let species = [
            test_species("10", "Caterpie"),
            test_species("2", "Ivysaur"),
            test_species("001", "Bulbasaur"),
        ];
        let sorted = sort_species_by(species.iter().collect(), SortKey::Number);
        assert_eq!(names(&sorted), ["Bulbasaur", "Caterpie", "Ivysaur"]);
    }

    #[test]
    fn sorts_by_name_bytewise() {
        let species = [
            test_species("001", "bulbasaur"),
            test_species("004", "Charmander"),
            test_species("007", "Squirtle"),
        ];
        let sorted = sort_species(species.iter().collect(), "NAME").unwrap();
        assert_eq!(names(&sorted), ["Charmander", "Squirtle", "bulbasaur"]);
    }

    #[test]
    fn sorts_by_parsed_weight() {
        let dataset = fixture_dataset();
        let sorted = sort_species(dataset.species.iter().collect(), "weight").unwrap();
        assert_eq!(
            names(&sorted),
            [
                "Pidgey",
                "Bulbasaur",
                "Charmander",
                "Squirtle",
                "Ivysaur",
                "Charizard"
            ]
        );
    }

    #[test]
    fn sorts_by_parsed_height() {
        let dataset = fixture_dataset();
        let sorted = sort_species(dataset.species.iter().collect(), "height").unwrap();
        assert_eq!(
            names(&sorted),
            [
                "Pidgey",
                "Squirtle",
                "Charmander",
                "Bulbasaur",
                "Ivysaur",
                "Charizard"
            ]
        );
    }

    #[test]
    fn malformed_weights_sort_as_zero() {
        let species = [
            weighted("001", "Bulbasaur", "6,9 kg"),
            weighted("000", "MissingNo", "?? kg"),
            weighted("004", "Charmander", "8,5 kg"),
        ];
        let sorted = sort_species(species.iter().collect(), "weight").unwrap();
        assert_eq!(names(&sorted), ["MissingNo", "Bulbasaur", "Charmander"]);
    }

    #[test]
    fn sorts_by_base_stats() {
        let dataset = fixture_dataset();
        let species = dataset.species.iter().collect::<Vec<_>>();
        assert_eq!(
            names(&sort_species(species.clone(), "baseattack").unwrap()),
            [
                "Pidgey",
                "Squirtle",
                "Charmander",
                "Bulbasaur",
                "Ivysaur",
                "Charizard"
            ]
        );
        assert_eq!(
            names(&sort_species(species.clone(), "basedefence").unwrap()),
            [
                "Pidgey",
                "Charmander",
                "Bulbasaur",
                "Squirtle",
                "Ivysaur",
                "Charizard"
            ]
        );
        assert_eq!(
            names(&sort_species(species, "basestamina").unwrap()),
            [
                "Charmander",
                "Pidgey",
                "Squirtle",
                "Bulbasaur",
                "Ivysaur",
                "Charizard"
            ]
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let species = [
            weighted("003", "Venusaur", "100,0 kg"),
            weighted("001", "Bulbasaur", "6,9 kg"),
            weighted("002", "Ivysaur", "6,9 kg"),
            weighted("000", "MissingNo", "6,9 kg"),
        ];
        let sorted = sort_species(species.iter().collect(), "weight").unwrap();
        assert_eq!(names(&sorted), ["Bulbasaur", "Ivysaur", "MissingNo", "Venusaur"]);
    }

    #[test]
    fn sorting_sorted_sequence_is_fixed_point() {
        let dataset = fixture_dataset();
        for label in SortKey::ALL_LABELS {
            let once = sort_species(dataset.species.iter().collect(), label).unwrap();
            let twice = sort_species(once.clone(), label).unwrap();
            assert_eq!(names(&once), names(&twice), "{label}");
        }
    }

    #[test]
    fn sorted_sequence_is_ascending_permutation() {
        let dataset = fixture_dataset();
        for label in SortKey::ALL_LABELS {
            let key = SortKey::from_str(label).unwrap();
            let sorted = sort_species_by(dataset.species.iter().collect(), key);
            assert_eq!(sorted.len(), dataset.species.len());
            for species in &dataset.species {
                assert!(sorted.iter().any(|entry| std::ptr::eq(*entry, species)));
            }
            for pair in sorted.windows(2) {
                assert!(key.compare(pair[0], pair[1]).is_le(), "{label}");
            }
        }
    }

    #[test]
    fn unknown_key_is_an_error_not_an_empty_result() {
        let dataset = fixture_dataset();
        assert_matches!(sort_species(dataset.species.iter().collect(), "speed"), Err(err) => {
            assert_matches!(err.downcast_ref::<InvalidSortKeyError>(), Some(err) => {
                assert_eq!(err.key(), "speed");
            });
        });
        assert_matches!(sort_species(Vec::new(), "unknownkey"), Err(err) => {
            assert!(err.is::<InvalidSortKeyError>());
        });
    }

    #[test]
    fn scenario_weight_and_base_attack() {
        let bulbasaur = SpeciesData {
            primary_types: Vec::from_iter(["Grass".to_owned(), "Poison".to_owned()]),
            weight: "6,9 kg".to_owned(),
            base_attack: 118,
            ..test_species("001", "Bulbasaur")
        };
        let charmander = SpeciesData {
            primary_types: Vec::from_iter(["Fire".to_owned()]),
            weight: "8,5 kg".to_owned(),
            base_attack: 116,
            ..test_species("004", "Charmander")
        };
        let species = Vec::from_iter([&bulbasaur, &charmander]);
        assert_eq!(
            names(&sort_species(species.clone(), "weight").unwrap()),
            ["Bulbasaur", "Charmander"]
        );
        assert_eq!(
            names(&sort_species(species, "baseattack").unwrap()),
            ["Charmander", "Bulbasaur"]
        );
    }

    #[test]
    fn reverses_sequence() {
        let dataset = fixture_dataset();
        let sorted = sort_species(dataset.species.iter().collect(), "number").unwrap();
        let reversed = reverse_species(sorted.clone());
        assert_eq!(
            names(&reversed),
            [
                "Pidgey",
                "Squirtle",
                "Charizard",
                "Charmander",
                "Ivysaur",
                "Bulbasaur"
            ]
        );
        assert_eq!(names(&reverse_species(reversed)), names(&sorted));
        assert_eq!(reverse_species(Vec::<&SpeciesData>::new()), Vec::<&SpeciesData>::new());
    }
}
