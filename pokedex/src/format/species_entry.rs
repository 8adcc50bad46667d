use std::fmt::{
    self,
    Display,
};

use itertools::Itertools;

use crate::SpeciesData;

/// Renders a single species.
///
/// Optional sections (secondary types, evolutions, evolution requirements) are left out entirely
/// when there is no data for them.
pub struct SpeciesEntry<'a>(pub &'a SpeciesData);

impl SpeciesEntry<'_> {
    fn write_items<S>(f: &mut fmt::Formatter<'_>, items: &[S]) -> fmt::Result
    where
        S: AsRef<str>,
    {
        for item in items {
            write!(f, "\n\t\t{}", item.as_ref())?;
        }
        Ok(())
    }
}

impl Display for SpeciesEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let species = self.0;
        write!(f, "{}:", species.name)?;
        write!(f, "\n\tNumber: {}", species.number)?;
        write!(f, "\n\tType I: {}", species.primary_types.iter().format(", "))?;
        if !species.secondary_types.is_empty() {
            write!(f, "\n\tType II: {}", species.secondary_types.iter().format(", "))?;
        }
        write!(f, "\n\tWeight: {}", species.weight)?;
        write!(f, "\n\tHeight: {}", species.height)?;
        write!(f, "\n\tBase Attack: {}", species.base_attack)?;
        write!(f, "\n\tBase Defense: {}", species.base_defense)?;
        write!(f, "\n\tBase Stamina: {}", species.base_stamina)?;

        write!(f, "\n\tFast Attack(s):")?;
        Self::write_items(f, &species.fast_attacks)?;

        if !species.previous_evolutions.is_empty() {
            write!(f, "\n\tPrevious Evolution(s):")?;
            for evolution in &species.previous_evolutions {
                write!(f, "\n\t\t{}", evolution.name)?;
            }
        }
        if species.has_evolutions() {
            write!(f, "\n\tNext Evolution(s):")?;
            for evolution in &species.next_evolutions {
                write!(f, "\n\t\t{}", evolution.name)?;
            }
            if let Some(requirements) = &species.next_evolution_requirements {
                write!(f, "\n\tNext Evolution Requirements:")?;
                write!(f, "\n\t\tAmount: {}", requirements.amount)?;
                write!(f, "\n\t\tName: {}", requirements.name)?;
            }
        }

        write!(f, "\n\tSpecial Attack(s):")?;
        Self::write_items(f, &species.special_attacks)
    }
}

/// Renders a sequence of species, each followed by a newline.
pub struct SpeciesList<'a>(pub &'a [&'a SpeciesData]);

impl Display for SpeciesList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for species in self.0 {
            writeln!(f, "{}", SpeciesEntry(species))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod species_entry_test {
    use pokedex_test_utils::{
        fixture_dataset,
        test_species,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        SpeciesData,
        format::{
            SpeciesEntry,
            SpeciesList,
        },
    };

    #[test]
    fn renders_species_with_all_sections() {
        let dataset = fixture_dataset();
        assert_eq!(
            SpeciesEntry(&dataset.species[1]).to_string(),
            "Ivysaur:
\tNumber: 002
\tType I: Grass
\tType II: Poison
\tWeight: 13,0 kg
\tHeight: 0,99 m
\tBase Attack: 151
\tBase Defense: 151
\tBase Stamina: 120
\tFast Attack(s):
\t\tRazor Leaf
\t\tVine Whip
\tPrevious Evolution(s):
\t\tBulbasaur
\tNext Evolution(s):
\t\tVenusaur
\tNext Evolution Requirements:
\t\tAmount: 100
\t\tName: Bulbasaur candies
\tSpecial Attack(s):
\t\tPower Whip
\t\tSludge Bomb
\t\tSolar Beam"
        );
    }

    #[test]
    fn omits_sections_without_data() {
        let dataset = fixture_dataset();
        assert_eq!(
            SpeciesEntry(&dataset.species[3]).to_string(),
            "Charizard:
\tNumber: 006
\tType I: Fire
\tType II: Flying
\tWeight: 90,5 kg
\tHeight: 1,70 m
\tBase Attack: 223
\tBase Defense: 176
\tBase Stamina: 156
\tFast Attack(s):
\t\tEmber
\t\tWing Attack
\tPrevious Evolution(s):
\t\tCharmander
\t\tCharmeleon
\tSpecial Attack(s):
\t\tDragon Claw
\t\tFire Blast
\t\tFlamethrower"
        );
    }

    #[test]
    fn joins_multiple_primary_types() {
        let species = SpeciesData {
            primary_types: Vec::from_iter(["Grass".to_owned(), "Poison".to_owned()]),
            weight: "6,9 kg".to_owned(),
            height: "0,71 m".to_owned(),
            base_attack: 118,
            ..test_species("001", "Bulbasaur")
        };
        assert_eq!(
            SpeciesEntry(&species).to_string(),
            "Bulbasaur:
\tNumber: 001
\tType I: Grass, Poison
\tWeight: 6,9 kg
\tHeight: 0,71 m
\tBase Attack: 118
\tBase Defense: 0
\tBase Stamina: 0
\tFast Attack(s):
\tSpecial Attack(s):"
        );
    }

    #[test]
    fn renders_list_with_newline_after_each_species() {
        let first = test_species("001", "Bulbasaur");
        let second = test_species("004", "Charmander");
        let list = [&first, &second];
        let rendered = SpeciesList(&list).to_string();
        assert_eq!(
            rendered,
            format!("{}\n{}\n", SpeciesEntry(&first), SpeciesEntry(&second))
        );
        assert_eq!(SpeciesList(&[]).to_string(), "");
    }

    #[test]
    fn list_entries_end_with_single_newline() {
        let species = test_species("007", "Squirtle");
        let entry = SpeciesEntry(&species).to_string();
        assert!(!entry.ends_with('\n'));
        let rendered = SpeciesList(&[&species]).to_string();
        assert_eq!(rendered, format!("{entry}\n"));
        assert!(!rendered.ends_with("\n\n"));
    }
}
