use std::str::FromStr;

use crate::error::internal::InternalError;

/// Parses an enum stored as a string column.
///
/// # Arguments
/// - `column` - Column name, reported when parsing fails
/// - `value` - The stored string to parse
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(InternalError::UnknownEnumValue)` - No variant matches the stored string
pub fn parse_stored<T: FromStr>(column: &'static str, value: String) -> Result<T, InternalError> {
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(InternalError::UnknownEnumValue { column, value }),
    }
}
