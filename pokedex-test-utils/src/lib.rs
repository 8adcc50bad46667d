mod error_assert;
mod fixture;
mod setup;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use fixture::{
    fixture_data_path,
    fixture_dataset,
    test_species,
};
pub use setup::setup_test_environment;
