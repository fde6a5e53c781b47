//! TTL action: a closed two-way table between wire codes and variants.

use alluxio_thrift::TTtlAction;
use alluxio_types::TtlAction;

use crate::convert::{FromWire, ToWire};
use crate::error::{MalformedWireData, Result};

impl FromWire for TtlAction {
    type Wire = TTtlAction;

    fn from_wire(wire: TTtlAction) -> Result<Self> {
        match wire {
            TTtlAction::DELETE => Ok(TtlAction::Delete),
            TTtlAction::FREE => Ok(TtlAction::Free),
            TTtlAction(code) => Err(MalformedWireData::unknown_code("TtlAction", "code", code)),
        }
    }
}

impl ToWire for TtlAction {
    type Wire = TTtlAction;

    fn to_wire(&self) -> TTtlAction {
        match self {
            TtlAction::Delete => TTtlAction::DELETE,
            TtlAction::Free => TTtlAction::FREE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Malformed;

    #[test]
    fn delete_code_round_trips() {
        let action = TtlAction::from_wire(TTtlAction(0)).unwrap();
        assert_eq!(action, TtlAction::Delete);
        assert_eq!(action.to_wire(), TTtlAction(0));
    }

    #[test]
    fn table_is_a_bijection() {
        for code in TTtlAction::ALL {
            let action = TtlAction::from_wire(code).unwrap();
            assert_eq!(action.to_wire(), code);
        }
        for action in TtlAction::ALL {
            assert_eq!(TtlAction::from_wire(action.to_wire()).unwrap(), action);
        }
        assert_eq!(TTtlAction::ALL.len(), TtlAction::ALL.len());
    }

    #[test]
    fn unknown_codes_fail() {
        for code in [99, 2, -1, i32::MIN] {
            let err = TtlAction::from_wire(TTtlAction(code)).unwrap_err();
            assert_eq!(err.entity, "TtlAction");
            assert_eq!(err.reason, Malformed::UnknownEnumCode(code));
        }
    }
}
