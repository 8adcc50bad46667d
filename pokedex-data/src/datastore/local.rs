use std::{
    env,
    fs::File,
    io::BufReader,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    Context,
    Error,
    Result,
};

use crate::{
    DataStore,
    Dataset,
    MoveData,
    SpeciesData,
    TypeData,
};

/// An implementation of [`DataStore`] that reads a data snapshot from a JSON file on disk.
///
/// The file is read exactly once, when the store is created.
#[derive(Debug)]
pub struct LocalDataStore {
    path: PathBuf,
    dataset: Dataset,
}

impl LocalDataStore {
    /// Default snapshot file name.
    pub const DATA_FILE: &str = "data.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given file.
    ///
    /// Fails if the path does not point to a file or if the file cannot be parsed as a snapshot.
    pub fn new<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(Error::msg(format!(
                "Data file for LocalDataStore ({}) does not exist",
                path.display()
            )));
        }
        let dataset = serde_json::from_reader(BufReader::new(
            File::open(&path).context(format!("failed to read {}", path.display()))?,
        ))
        .context(format!("failed to parse {}", path.display()))?;
        Ok(Self { path, dataset })
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the file at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// The file the data was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for LocalDataStore {
    fn types(&self) -> &[TypeData] {
        &self.dataset.types
    }

    fn species(&self) -> &[SpeciesData] {
        &self.dataset.species
    }

    fn moves(&self) -> &[MoveData] {
        &self.dataset.moves
    }
}
