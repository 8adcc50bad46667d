use crate::{
    MoveData,
    SpeciesData,
    TypeData,
};

/// Read-only view over a complete data snapshot.
///
/// This trait can be implemented for different data sources, such as an in-memory snapshot or a
/// file on disk. All collections are returned in source order, which is the order used for
/// first-match lookups and cross-reference results.
///
/// Data is never mutated after construction, so implementations can be shared freely across
/// threads.
pub trait DataStore: Send + Sync {
    /// All types.
    fn types(&self) -> &[TypeData];
    /// All species.
    fn species(&self) -> &[SpeciesData];
    /// All moves.
    fn moves(&self) -> &[MoveData];
}
