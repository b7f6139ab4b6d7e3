//! Unit extraction from raw inputs

/// Separates several queries inside one raw input
pub const UNIT_DELIMITER: char = '|';

/// Split one raw input into units
///
/// Every segment is a unit, empty ones included; nothing is trimmed.
pub fn split_units(raw: &str) -> Vec<String> {
    raw.split(UNIT_DELIMITER).map(str::to_string).collect()
}

/// Split a whole batch, keeping input order
pub fn split_batch<S: AsRef<str>>(batch: &[S]) -> Vec<String> {
    batch
        .iter()
        .flat_map(|raw| split_units(raw.as_ref()))
        .collect()
}
