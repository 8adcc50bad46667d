use std::fmt::{
    self,
    Display,
};

use crate::{
    SpeciesData,
    filter::{
        FilterCriterion,
        filter_species,
    },
};

/// How species use a move.
///
/// Not stored on the move itself. A move is a fast attack if any species lists it as one;
/// otherwise, it is a special attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    FastAttack,
    SpecialAttack,
}

impl Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FastAttack => write!(f, "Fast Attack"),
            Self::SpecialAttack => write!(f, "Special Attack"),
        }
    }
}

/// The species using a move, along with the resolved kind of the move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveUsers<'d> {
    pub kind: MoveKind,
    pub species: Vec<&'d SpeciesData>,
}

/// Species whose primary or secondary type is `type_name`, in source order.
pub fn type_members<'d>(species: &'d [SpeciesData], type_name: &str) -> Vec<&'d SpeciesData> {
    filter_species(species, FilterCriterion::Type, type_name)
}

/// Resolves the kind of a move and the species using it that way.
///
/// Fast attack usage takes precedence. A move no species uses is a special attack with no users.
pub fn move_users<'d>(species: &'d [SpeciesData], move_name: &str) -> MoveUsers<'d> {
    let fast = filter_species(species, FilterCriterion::FastAttack, move_name);
    if !fast.is_empty() {
        return MoveUsers {
            kind: MoveKind::FastAttack,
            species: fast,
        };
    }
    MoveUsers {
        kind: MoveKind::SpecialAttack,
        species: filter_species(species, FilterCriterion::SpecialAttack, move_name),
    }
}

/// Resolves the kind of a move.
///
/// Same kind as [`move_users`], but stops at the first fast attack user and collects nothing.
pub fn move_kind(species: &[SpeciesData], move_name: &str) -> MoveKind {
    if species
        .iter()
        .any(|species| FilterCriterion::FastAttack.matches(species, move_name))
    {
        MoveKind::FastAttack
    } else {
        MoveKind::SpecialAttack
    }
}
