mod data_store;
mod dataset;
mod local;

pub use data_store::DataStore;
pub use dataset::Dataset;
pub use local::LocalDataStore;
