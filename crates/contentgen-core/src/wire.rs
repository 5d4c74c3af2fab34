//! Request-body field helpers. A JSON `null` reads the same as an absent field.

use serde::{Deserialize, Deserializer};

pub(crate) fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}
