mod measurement;
mod strings;

pub use measurement::{
    HEIGHT_SUFFIX,
    WEIGHT_SUFFIX,
    parse_height,
    parse_measurement,
    parse_weight,
};
pub use strings::{
    contains_ignore_case,
    eq_ignore_case,
};
