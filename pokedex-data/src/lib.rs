mod datastore;
mod mons;
mod moves;

#[cfg(test)]
pub mod test_util;

pub use datastore::*;
pub use mons::*;
pub use moves::*;
