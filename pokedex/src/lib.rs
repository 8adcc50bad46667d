//! # pokedex
//!
//! Query engine over a read-only Pokédex snapshot.
//!
//! A [`Dex`][`dex::Dex`] borrows a [`DataStore`] and answers queries over it: filtering species
//! by type, name, or move, sorting them by a named key, resolving types and moves by name, and
//! cross-referencing the species that belong to a type or use a move. The [`format`] module
//! renders results as text.

extern crate alloc;

pub mod common;
pub mod dex;
pub mod error;
pub mod filter;
pub mod format;
pub mod sort;

pub use pokedex_data::{
    CandyData,
    DataStore,
    Dataset,
    EvolutionReference,
    EvolutionRequirements,
    LocalDataStore,
    MoveData,
    SpeciesData,
    TypeData,
};
