use unicase::UniCase;

/// Compares two names, ignoring case.
///
/// All cross-references in the dataset (species to type, species to move) are made by name and
/// compared with this function.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    UniCase::new(a) == UniCase::new(b)
}

/// Checks if the list contains the given name, ignoring case.
pub fn contains_ignore_case<S>(list: &[S], name: &str) -> bool
where
    S: AsRef<str>,
{
    list.iter().any(|item| eq_ignore_case(item.as_ref(), name))
}
