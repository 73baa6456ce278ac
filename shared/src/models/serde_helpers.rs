//! Serde helpers for upstream nulls

use serde::{Deserialize, Deserializer};

/// Deserialize a value that treats null as `T::default()`
///
/// Pair with `#[serde(default)]` so a missing key behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
