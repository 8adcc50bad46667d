use std::fmt::{
    self,
    Display,
};

use crate::{
    MoveData,
    dex::Dex,
};

/// Renders a single move, followed by the species using it.
///
/// The move kind shown in the header is resolved from species data when formatted.
pub struct MoveEntry<'a> {
    dex: &'a Dex<'a>,
    data: &'a MoveData,
}

impl<'a> MoveEntry<'a> {
    /// Creates a new entry, resolving cross-references through the given dex.
    pub fn new(dex: &'a Dex<'a>, data: &'a MoveData) -> Self {
        Self { dex, data }
    }
}

impl Display for MoveEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let users = self.dex.move_users(&self.data.name);
        write!(f, "Pokemon Move {} {}:", users.kind, self.data.name)?;
        write!(f, "\nNumber: {}", self.data.id)?;
        write!(f, "\nDamage: {}", self.data.damage)?;
        write!(f, "\nEnergy: {}", self.data.energy)?;
        write!(f, "\nDps: {:.2}", self.data.dps)?;
        write!(f, "\nDuration: {}", self.data.duration)?;
        write!(f, "\nPokemons with this move: ")?;
        for species in users.species {
            write!(f, "\n- {}", species.name)?;
        }
        writeln!(f)
    }
}

/// Renders a sequence of moves, each followed by a blank line.
pub struct MoveList<'a> {
    dex: &'a Dex<'a>,
    moves: &'a [MoveData],
}

impl<'a> MoveList<'a> {
    /// Creates a new list, resolving cross-references through the given dex.
    pub fn new(dex: &'a Dex<'a>, moves: &'a [MoveData]) -> Self {
        Self { dex, moves }
    }
}

impl Display for MoveList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for data in self.moves {
            writeln!(f, "{}", MoveEntry::new(self.dex, data))?;
        }
        Ok(())
    }
}
