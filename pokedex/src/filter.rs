//! Predicates selecting species by type, name, or move.

use std::str::FromStr;

use log::debug;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    SpeciesData,
    common::{
        contains_ignore_case,
        eq_ignore_case,
    },
};

/// A field species can be filtered on.
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
pub enum FilterCriterion {
    /// Primary or secondary type.
    #[string = "type"]
    Type,
    /// Species name.
    #[string = "name"]
    Name,
    /// Fast attack move names.
    #[string = "fastattack"]
    FastAttack,
    /// Special attack move names.
    #[string = "specialattack"]
    SpecialAttack,
}

impl FilterCriterion {
    /// Checks if the species matches `value` for this criterion.
    ///
    /// All comparisons ignore case.
    pub fn matches(&self, species: &SpeciesData, value: &str) -> bool {
        match self {
            Self::Type => species
                .types()
                .any(|type_name| eq_ignore_case(type_name, value)),
            Self::Name => eq_ignore_case(&species.name, value),
            Self::FastAttack => contains_ignore_case(&species.fast_attacks, value),
            Self::SpecialAttack => contains_ignore_case(&species.special_attacks, value),
        }
    }
}

/// Selects the species matching `value` for the given criterion.
///
/// The result preserves the relative order of the input. Duplicate names are not collapsed.
pub fn filter_species<'d, I>(
    species: I,
    criterion: FilterCriterion,
    value: &str,
) -> Vec<&'d SpeciesData>
where
    I: IntoIterator<Item = &'d SpeciesData>,
{
    species
        .into_iter()
        .filter(|species| criterion.matches(species, value))
        .collect()
}

/// Selects the species matching `value` for the criterion with the given label.
///
/// An unrecognized criterion selects nothing. It is not reported as an error.
pub fn filter_species_by<'d, I>(
    species: I,
    criterion: &str,
    value: &str,
) -> Vec<&'d SpeciesData>
where
    I: IntoIterator<Item = &'d SpeciesData>,
{
    match FilterCriterion::from_str(criterion) {
        Ok(criterion) => filter_species(species, criterion, value),
        Err(_) => {
            // TODO: Surface unknown criteria to callers once no client depends on the empty result.
            debug!("Unrecognized filter criterion \"{criterion}\" matches no species");
            Vec::new()
        }
    }
}
