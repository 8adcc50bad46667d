use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    DataStore,
    MoveData,
    SpeciesData,
    TypeData,
};

/// A complete data snapshot: every type, species, and move.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// All types.
    #[serde(default)]
    pub types: Vec<TypeData>,
    /// All species.
    #[serde(rename = "pokemons", default)]
    pub species: Vec<SpeciesData>,
    /// All moves.
    #[serde(default)]
    pub moves: Vec<MoveData>,
}

impl DataStore for Dataset {
    fn types(&self) -> &[TypeData] {
        &self.types
    }

    fn species(&self) -> &[SpeciesData] {
        &self.species
    }

    fn moves(&self) -> &[MoveData] {
        &self.moves
    }
}
