mod context;
mod error;
mod pokedex_error;

pub use context::ContextError;
pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use pokedex_error::{
    GeneralError,
    InvalidSortKeyError,
    NotFoundError,
    general_error,
    invalid_sort_key_error,
    not_found_error,
};
