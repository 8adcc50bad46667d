use anyhow::Error;

use crate::{
    DataStore,
    MoveData,
    SpeciesData,
    TypeData,
    common::eq_ignore_case,
    error::WrapOptionError,
};

/// A resource that is looked up by name.
pub trait NamedResource: Sized {
    /// Name of the resource kind, used in error messages.
    const KIND: &'static str;

    /// Name of the resource.
    fn name(&self) -> &str;

    /// The collection of all resources of this kind in the given [`DataStore`].
    fn collection(data: &dyn DataStore) -> &[Self];
}

impl NamedResource for TypeData {
    const KIND: &'static str = "type";

    fn name(&self) -> &str {
        &self.name
    }

    fn collection(data: &dyn DataStore) -> &[Self] {
        data.types()
    }
}

impl NamedResource for MoveData {
    const KIND: &'static str = "move";

    fn name(&self) -> &str {
        &self.name
    }

    fn collection(data: &dyn DataStore) -> &[Self] {
        data.moves()
    }
}

impl NamedResource for SpeciesData {
    const KIND: &'static str = "species";

    fn name(&self) -> &str {
        &self.name
    }

    fn collection(data: &dyn DataStore) -> &[Self] {
        data.species()
    }
}

/// A collection of resources looked up by name.
///
/// Lookup is a linear, case-insensitive scan in source order. Names are not required to be
/// unique; single lookups return the first match.
pub struct ResourceDex<'d, T> {
    resources: &'d [T],
}

impl<'d, T> ResourceDex<'d, T>
where
    T: NamedResource,
{
    /// Creates a new collection of resources, backed by the given [`DataStore`].
    pub fn new(data: &'d dyn DataStore) -> Self {
        Self {
            resources: T::collection(data),
        }
    }

    /// All resources, in source order.
    pub fn all(&self) -> &'d [T] {
        self.resources
    }

    /// Retrieves the first resource with the given name.
    ///
    /// Fails with a [`NotFoundError`][`crate::error::NotFoundError`] if no resource matches.
    pub fn get(&self, name: &str) -> Result<&'d T, Error> {
        self.resources
            .iter()
            .find(|resource| eq_ignore_case(resource.name(), name))
            .wrap_not_found_error_with_format(format_args!("{} {name}", T::KIND))
    }

    /// Retrieves every resource with the given name, in source order.
    pub fn find_all(&self, name: &str) -> Vec<&'d T> {
        self.resources
            .iter()
            .filter(|resource| eq_ignore_case(resource.name(), name))
            .collect()
    }
}

/// Indexed collection of types.
pub type TypeDex<'d> = ResourceDex<'d, TypeData>;
/// Indexed collection of moves.
pub type MoveDex<'d> = ResourceDex<'d, MoveData>;
/// Indexed collection of species.
pub type SpeciesDex<'d> = ResourceDex<'d, SpeciesData>;
