//! Human-readable text rendering of species, types, and moves.
//!
//! Renderers are [`Display`][`std::fmt::Display`] adapters. Types and moves render their
//! cross-references, which are resolved through a [`Dex`][`crate::dex::Dex`] when formatted.

mod move_entry;
mod species_entry;
mod type_entry;

pub use move_entry::{
    MoveEntry,
    MoveList,
};
pub use species_entry::{
    SpeciesEntry,
    SpeciesList,
};
pub use type_entry::{
    TypeEntry,
    TypeList,
};
