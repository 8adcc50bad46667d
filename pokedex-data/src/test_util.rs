#![cfg(test)]

use std::fmt::Debug;

use serde::de::DeserializeOwned;

#[track_caller]
pub fn test_deserialization<T>(s: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    let got = serde_json::from_str::<T>(s).unwrap();
    pretty_assertions::assert_eq!(got, expected);
}
