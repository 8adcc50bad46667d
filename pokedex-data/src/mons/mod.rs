mod evolution;
mod species_data;
mod type_data;

pub use evolution::{
    CandyData,
    EvolutionReference,
    EvolutionRequirements,
};
pub use species_data::SpeciesData;
pub use type_data::TypeData;
