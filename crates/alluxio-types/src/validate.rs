use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{Result, ValidationError};

/// Largest quantity (size, id, timestamp) representable on the wire.
pub const MAX_QUANTITY: u64 = i64::MAX as u64;

pub(crate) fn quantity(entity: &'static str, field: &'static str, value: u64) -> Result<()> {
    if value > MAX_QUANTITY {
        return Err(ValidationError::new(
            entity,
            field,
            format!("{value} exceeds {MAX_QUANTITY}"),
        ));
    }
    Ok(())
}

pub(crate) fn quantities(entity: &'static str, field: &'static str, values: &[u64]) -> Result<()> {
    values
        .iter()
        .try_for_each(|value| quantity(entity, field, *value))
}

pub(crate) fn tier_quantities(
    entity: &'static str,
    field: &'static str,
    tiers: &BTreeMap<String, u64>,
) -> Result<()> {
    for (tier, bytes) in tiers {
        if tier.is_empty() {
            return Err(ValidationError::new(entity, field, "empty tier alias"));
        }
        quantity(entity, field, *bytes)?;
    }
    Ok(())
}

pub(crate) fn duration_millis(
    entity: &'static str,
    field: &'static str,
    value: Duration,
) -> Result<()> {
    if value.as_millis() > u128::from(MAX_QUANTITY) {
        return Err(ValidationError::new(
            entity,
            field,
            format!("{}ms exceeds {MAX_QUANTITY}ms", value.as_millis()),
        ));
    }
    if value.subsec_nanos() % 1_000_000 != 0 {
        return Err(ValidationError::new(
            entity,
            field,
            "sub-millisecond precision is not representable",
        ));
    }
    Ok(())
}

pub(crate) fn percentage(entity: &'static str, field: &'static str, value: u8) -> Result<()> {
    if value > 100 {
        return Err(ValidationError::new(
            entity,
            field,
            format!("{value} is not a percentage"),
        ));
    }
    Ok(())
}

pub(crate) fn non_empty(entity: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::new(entity, field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn non_empty_all(
    entity: &'static str,
    field: &'static str,
    values: &[String],
) -> Result<()> {
    values
        .iter()
        .try_for_each(|value| non_empty(entity, field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_bounds() {
        assert!(quantity("E", "f", 0).is_ok());
        assert!(quantity("E", "f", MAX_QUANTITY).is_ok());
        let err = quantity("E", "f", MAX_QUANTITY + 1).unwrap_err();
        assert_eq!(err.entity, "E");
        assert_eq!(err.field, "f");
    }

    #[test]
    fn durations_must_be_whole_millis() {
        let ttl = |duration| duration_millis("E", "ttl", duration);
        assert!(ttl(Duration::from_millis(1500)).is_ok());
        assert!(ttl(Duration::from_micros(1500)).is_err());
        assert!(ttl(Duration::from_secs(u64::MAX)).is_err());
    }

    #[test]
    fn percentage_bounds() {
        assert!(percentage("E", "p", 100).is_ok());
        assert!(percentage("E", "p", 101).is_err());
    }
}
