use anyhow::Error;

use crate::{
    DataStore,
    MoveData,
    SpeciesData,
    TypeData,
    dex::{
        MoveDex,
        MoveKind,
        MoveUsers,
        SpeciesDex,
        TypeDex,
        move_kind,
        move_users,
        type_members,
    },
    filter::filter_species_by,
    sort::{
        reverse_species,
        sort_species,
    },
};

/// Query interface over a complete data snapshot.
///
/// The dex borrows the snapshot and never modifies it, so any number of dexes can be created over
/// the same [`DataStore`].
pub struct Dex<'d> {
    /// Collection of species.
    pub species: SpeciesDex<'d>,
    /// Collection of types.
    pub types: TypeDex<'d>,
    /// Collection of moves.
    pub moves: MoveDex<'d>,
}

impl<'d> Dex<'d> {
    /// Creates a new [`Dex`], backed by the given [`DataStore`].
    pub fn new(data: &'d dyn DataStore) -> Self {
        Self {
            species: SpeciesDex::new(data),
            types: TypeDex::new(data),
            moves: MoveDex::new(data),
        }
    }

    /// Selects all species matching `value` for the criterion with the given label.
    ///
    /// See [`filter_species_by`].
    pub fn filter_species(&self, criterion: &str, value: &str) -> Vec<&'d SpeciesData> {
        filter_species_by(self.species.all(), criterion, value)
    }

    /// Sorts species by the key with the given label.
    ///
    /// See [`sort_species`].
    pub fn sort_species(
        &self,
        species: Vec<&'d SpeciesData>,
        key: &str,
    ) -> Result<Vec<&'d SpeciesData>, Error> {
        sort_species(species, key)
    }

    /// Reverses the order of a species sequence.
    pub fn reverse(&self, species: Vec<&'d SpeciesData>) -> Vec<&'d SpeciesData> {
        reverse_species(species)
    }

    /// Resolves a type by name.
    pub fn resolve_type(&self, name: &str) -> Result<&'d TypeData, Error> {
        self.types.get(name)
    }

    /// Resolves a move by name.
    pub fn resolve_move(&self, name: &str) -> Result<&'d MoveData, Error> {
        self.moves.get(name)
    }

    /// Resolves all species with the given name.
    ///
    /// Names are not required to be unique, so this may return more than one species.
    pub fn resolve_species(&self, name: &str) -> Vec<&'d SpeciesData> {
        self.species.find_all(name)
    }

    /// Species belonging to the given type, in source order.
    pub fn type_members(&self, type_name: &str) -> Vec<&'d SpeciesData> {
        type_members(self.species.all(), type_name)
    }

    /// The kind of the given move and the species using it.
    pub fn move_users(&self, move_name: &str) -> MoveUsers<'d> {
        move_users(self.species.all(), move_name)
    }

    /// The kind of the given move.
    pub fn move_kind(&self, move_name: &str) -> MoveKind {
        move_kind(self.species.all(), move_name)
    }
}

#[cfg(test)]
mod dex_test {
    use assert_matches::assert_matches;
    use pokedex_test_utils::fixture_dataset;
    use pretty_assertions::assert_eq;

    use crate::{
        SpeciesData,
        dex::{
            Dex,
            MoveKind,
        },
        error::{
            InvalidSortKeyError,
            NotFoundError,
        },
    };

    fn names<'d>(species: &[&'d SpeciesData]) -> Vec<&'d str> {
        species.iter().map(|species| species.name.as_str()).collect()
    }

    #[test]
    fn filters_sorts_and_reverses() {
        let dataset = fixture_dataset();
        let dex = Dex::new(&dataset);
        let species = dex.filter_species("type", "Flying");
        assert_eq!(names(&species), ["Charizard", "Pidgey"]);
        let species = dex.sort_species(species, "weight").unwrap();
        assert_eq!(names(&species), ["Pidgey", "Charizard"]);
        let species = dex.reverse(species);
        assert_eq!(names(&species), ["Charizard", "Pidgey"]);
    }

    #[test]
    fn invalid_sort_key_is_distinct_from_not_found() {
        let dataset = fixture_dataset();
        let dex = Dex::new(&dataset);
        let species = dex.filter_species("type", "Fire");
        assert_matches!(dex.sort_species(species, "cuteness"), Err(err) => {
            assert!(err.is::<InvalidSortKeyError>());
            assert!(!err.is::<NotFoundError>());
        });
    }

    #[test]
    fn resolves_entities_ignoring_case() {
        let dataset = fixture_dataset();
        let dex = Dex::new(&dataset);
        assert_eq!(dex.resolve_type("grass").unwrap().name, "Grass");
        assert_eq!(dex.resolve_move("EMBER").unwrap().id, 209);
        assert_eq!(names(&dex.resolve_species("pIdGeY")), ["Pidgey"]);
        assert!(dex.resolve_species("Mew").is_empty());
        assert_matches!(dex.resolve_type("Shadow"), Err(err) => {
            assert!(err.is::<NotFoundError>());
        });
        assert_matches!(dex.resolve_move("Splash"), Err(err) => {
            assert!(err.is::<NotFoundError>());
        });
    }

    #[test]
    fn resolves_cross_references() {
        let dataset = fixture_dataset();
        let dex = Dex::new(&dataset);
        assert_eq!(names(&dex.type_members("fire")), ["Charmander", "Charizard"]);
        let users = dex.move_users("Ember");
        assert_eq!(users.kind, MoveKind::FastAttack);
        assert_eq!(names(&users.species), ["Charmander", "Charizard"]);
        assert_eq!(dex.move_kind("Flamethrower"), MoveKind::SpecialAttack);
        assert_eq!(dex.move_kind("Tackle"), MoveKind::FastAttack);
    }

    #[test]
    fn unknown_filter_criterion_is_empty() {
        let dataset = fixture_dataset();
        let dex = Dex::new(&dataset);
        assert!(dex.filter_species("color", "Green").is_empty());
    }
}
