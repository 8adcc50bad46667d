use std::fmt::{
    self,
    Display,
};

use crate::{
    TypeData,
    dex::Dex,
};

/// Renders a single type, followed by the species belonging to it.
pub struct TypeEntry<'a> {
    dex: &'a Dex<'a>,
    data: &'a TypeData,
}

impl<'a> TypeEntry<'a> {
    /// Creates a new entry, resolving cross-references through the given dex.
    pub fn new(dex: &'a Dex<'a>, data: &'a TypeData) -> Self {
        Self { dex, data }
    }
}

impl Display for TypeEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pokemon Type {}:", self.data.name)?;
        write!(f, "\nEffective Against:")?;
        for name in &self.data.effective_against {
            write!(f, "\n- {name}")?;
        }
        write!(f, "\nWeak Against:")?;
        for name in &self.data.weak_against {
            write!(f, "\n- {name}")?;
        }
        write!(f, "\nExample Pokemons: ")?;
        for species in self.dex.type_members(&self.data.name) {
            write!(f, "\n- {}", species.name)?;
        }
        writeln!(f)
    }
}

/// Renders a sequence of types, each followed by a blank line.
pub struct TypeList<'a> {
    dex: &'a Dex<'a>,
    types: &'a [TypeData],
}

impl<'a> TypeList<'a> {
    /// Creates a new list, resolving cross-references through the given dex.
    pub fn new(dex: &'a Dex<'a>, types: &'a [TypeData]) -> Self {
        Self { dex, types }
    }
}

impl Display for TypeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for data in self.types {
            writeln!(f, "{}", TypeEntry::new(self.dex, data))?;
        }
        Ok(())
    }
}
