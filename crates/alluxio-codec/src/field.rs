//! Extraction helpers shared by the entity codecs.
//!
//! Decode helpers return `MalformedWireData` tagged with the caller's entity
//! and field. Encode helpers narrow domain quantities back to wire integers
//! and panic if a value escaped domain validation.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::error::{MalformedWireData, Result};

pub(crate) fn required<T>(
    entity: &'static str,
    field: &'static str,
    value: Option<T>,
) -> Result<T> {
    value.ok_or_else(|| MalformedWireData::missing(entity, field))
}

pub(crate) fn non_negative(entity: &'static str, field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| MalformedWireData::out_of_range(entity, field, value))
}

pub(crate) fn required_quantity(
    entity: &'static str,
    field: &'static str,
    value: Option<i64>,
) -> Result<u64> {
    non_negative(entity, field, required(entity, field, value)?)
}

/// A quantity whose absence is signalled by the presence indicator or by
/// `sentinel` inside a present value. Any other negative value is malformed.
pub(crate) fn sentinel_quantity(
    entity: &'static str,
    field: &'static str,
    value: Option<i64>,
    sentinel: i64,
) -> Result<Option<u64>> {
    match value {
        None => Ok(None),
        Some(value) if value == sentinel => Ok(None),
        Some(value) => non_negative(entity, field, value).map(Some),
    }
}

pub(crate) fn quantities(
    entity: &'static str,
    field: &'static str,
    values: Option<Vec<i64>>,
) -> Result<Vec<u64>> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|value| non_negative(entity, field, value))
        .collect()
}

pub(crate) fn tier_quantities(
    entity: &'static str,
    field: &'static str,
    tiers: Option<BTreeMap<String, i64>>,
) -> Result<BTreeMap<String, u64>> {
    tiers
        .unwrap_or_default()
        .into_iter()
        .map(|(tier, bytes)| Ok((tier, non_negative(entity, field, bytes)?)))
        .collect()
}

pub(crate) fn port(entity: &'static str, field: &'static str, value: i32) -> Result<u16> {
    u16::try_from(value).map_err(|_| MalformedWireData::out_of_range(entity, field, value.into()))
}

pub(crate) fn required_port(
    entity: &'static str,
    field: &'static str,
    value: Option<i32>,
) -> Result<u16> {
    port(entity, field, required(entity, field, value)?)
}

pub(crate) fn percentage(entity: &'static str, field: &'static str, value: i32) -> Result<u8> {
    match u8::try_from(value) {
        Ok(value) if value <= 100 => Ok(value),
        _ => Err(MalformedWireData::out_of_range(entity, field, value.into())),
    }
}

/// A string whose absence is signalled by the presence indicator or by the
/// empty string.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub(crate) fn wire_i64(entity: &'static str, field: &'static str, value: u64) -> i64 {
    match i64::try_from(value) {
        Ok(value) => value,
        Err(_) => invariant_violation(entity, field, format_args!("{value} does not fit i64")),
    }
}

pub(crate) fn wire_i64s(entity: &'static str, field: &'static str, values: &[u64]) -> Vec<i64> {
    values
        .iter()
        .map(|value| wire_i64(entity, field, *value))
        .collect()
}

pub(crate) fn wire_tiers(
    entity: &'static str,
    field: &'static str,
    tiers: &BTreeMap<String, u64>,
) -> BTreeMap<String, i64> {
    tiers
        .iter()
        .map(|(tier, bytes)| (tier.clone(), wire_i64(entity, field, *bytes)))
        .collect()
}

pub(crate) fn wire_millis(entity: &'static str, field: &'static str, value: Duration) -> i64 {
    match i64::try_from(value.as_millis()) {
        Ok(millis) => millis,
        Err(_) => invariant_violation(entity, field, format_args!("{value:?} does not fit i64 ms")),
    }
}

pub(crate) fn wire_u32(entity: &'static str, field: &'static str, value: u32) -> i32 {
    match i32::try_from(value) {
        Ok(value) => value,
        Err(_) => invariant_violation(entity, field, format_args!("{value} does not fit i32")),
    }
}

#[cold]
#[track_caller]
fn invariant_violation(entity: &'static str, field: &'static str, detail: fmt::Arguments<'_>) -> ! {
    panic!("invariant violation while encoding {entity}.{field}: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Malformed;

    #[test]
    fn required_reports_missing() {
        let err = required::<i64>("E", "f", None).unwrap_err();
        assert_eq!(err.reason, Malformed::Missing);
        assert_eq!(required("E", "f", Some(3)).unwrap(), 3);
    }

    #[test]
    fn sentinel_quantity_distinguishes_zero_from_absent() {
        assert_eq!(sentinel_quantity("E", "f", None, -1).unwrap(), None);
        assert_eq!(sentinel_quantity("E", "f", Some(-1), -1).unwrap(), None);
        assert_eq!(sentinel_quantity("E", "f", Some(0), -1).unwrap(), Some(0));
        assert_eq!(
            sentinel_quantity("E", "f", Some(-2), -1).unwrap_err().reason,
            Malformed::OutOfRange(-2)
        );
    }

    #[test]
    fn ports_and_percentages_are_range_checked() {
        assert_eq!(port("E", "p", 65535).unwrap(), 65535);
        assert!(port("E", "p", 65536).is_err());
        assert!(port("E", "p", -1).is_err());
        assert_eq!(percentage("E", "p", 100).unwrap(), 100);
        assert!(percentage("E", "p", 101).is_err());
        assert!(percentage("E", "p", -5).is_err());
    }

    #[test]
    fn empty_string_reads_as_absent() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }

    #[test]
    fn absent_collections_read_as_empty() {
        assert!(quantities("E", "f", None).unwrap().is_empty());
        assert!(tier_quantities("E", "f", None).unwrap().is_empty());
        assert!(quantities("E", "f", Some(vec![1, -1])).is_err());
    }

    #[test]
    #[should_panic(expected = "invariant violation while encoding E.f")]
    fn narrowing_an_invalid_quantity_panics() {
        wire_i64("E", "f", u64::MAX);
    }
}
