//! Blocks, block locations, and the block master summary.
//!
//! Every scalar here is required. Lists and tier maps read an unset value as
//! empty and are always written, even when empty.

use alluxio_thrift as thrift;
use alluxio_types::{BlockInfo, BlockLocation, BlockMasterInfo, WorkerNetAddress};

use crate::convert::{decode_list, encode_list, FromWire, ToWire};
use crate::error::Result;
use crate::field;

const LOCATION: &str = "BlockLocation";
const BLOCK: &str = "BlockInfo";
const MASTER: &str = "BlockMasterInfo";

impl FromWire for BlockLocation {
    type Wire = thrift::BlockLocation;

    fn from_wire(wire: thrift::BlockLocation) -> Result<Self> {
        let worker_id = field::required_quantity(LOCATION, "worker_id", wire.worker_id)?;
        let worker_address = WorkerNetAddress::from_wire(field::required(
            LOCATION,
            "worker_address",
            wire.worker_address,
        )?)?;
        let tier_alias = field::required(LOCATION, "tier_alias", wire.tier_alias)?;
        Ok(BlockLocation::new(worker_id, worker_address, tier_alias)?)
    }
}

impl ToWire for BlockLocation {
    type Wire = thrift::BlockLocation;

    fn to_wire(&self) -> thrift::BlockLocation {
        thrift::BlockLocation {
            worker_id: Some(field::wire_i64(LOCATION, "worker_id", self.worker_id())),
            worker_address: Some(self.worker_address().to_wire()),
            tier_alias: Some(self.tier_alias().to_string()),
        }
    }
}

impl FromWire for BlockInfo {
    type Wire = thrift::BlockInfo;

    fn from_wire(wire: thrift::BlockInfo) -> Result<Self> {
        let block_id = field::required_quantity(BLOCK, "block_id", wire.block_id)?;
        let length = field::required_quantity(BLOCK, "length", wire.length)?;
        let locations = decode_list(wire.locations.unwrap_or_default())?;
        Ok(BlockInfo::new(block_id, length, locations)?)
    }
}

impl ToWire for BlockInfo {
    type Wire = thrift::BlockInfo;

    fn to_wire(&self) -> thrift::BlockInfo {
        thrift::BlockInfo {
            block_id: Some(field::wire_i64(BLOCK, "block_id", self.block_id())),
            length: Some(field::wire_i64(BLOCK, "length", self.length())),
            locations: Some(encode_list(self.locations())),
        }
    }
}

impl FromWire for BlockMasterInfo {
    type Wire = thrift::BlockMasterInfo;

    fn from_wire(wire: thrift::BlockMasterInfo) -> Result<Self> {
        let info = BlockMasterInfo::builder()
            .capacity_bytes(field::required_quantity(
                MASTER,
                "capacity_bytes",
                wire.capacity_bytes,
            )?)
            .capacity_bytes_on_tiers(field::tier_quantities(
                MASTER,
                "capacity_bytes_on_tiers",
                wire.capacity_bytes_on_tiers,
            )?)
            .free_bytes(field::required_quantity(
                MASTER,
                "free_bytes",
                wire.free_bytes,
            )?)
            .used_bytes(field::required_quantity(
                MASTER,
                "used_bytes",
                wire.used_bytes,
            )?)
            .used_bytes_on_tiers(field::tier_quantities(
                MASTER,
                "used_bytes_on_tiers",
                wire.used_bytes_on_tiers,
            )?)
            .build()?;
        Ok(info)
    }
}

impl ToWire for BlockMasterInfo {
    type Wire = thrift::BlockMasterInfo;

    fn to_wire(&self) -> thrift::BlockMasterInfo {
        thrift::BlockMasterInfo {
            capacity_bytes: Some(field::wire_i64(
                MASTER,
                "capacity_bytes",
                self.capacity_bytes(),
            )),
            capacity_bytes_on_tiers: Some(field::wire_tiers(
                MASTER,
                "capacity_bytes_on_tiers",
                self.capacity_bytes_on_tiers(),
            )),
            free_bytes: Some(field::wire_i64(MASTER, "free_bytes", self.free_bytes())),
            used_bytes: Some(field::wire_i64(MASTER, "used_bytes", self.used_bytes())),
            used_bytes_on_tiers: Some(field::wire_tiers(
                MASTER,
                "used_bytes_on_tiers",
                self.used_bytes_on_tiers(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::error::{Malformed, MalformedWireData};

    fn wire_location(worker_id: i64, tier: &str) -> thrift::BlockLocation {
        thrift::BlockLocation {
            worker_id: Some(worker_id),
            worker_address: Some(thrift::WorkerNetAddress {
                host: Some(format!("worker-{worker_id}")),
                rpc_port: Some(29998),
                data_port: Some(29999),
                ..Default::default()
            }),
            tier_alias: Some(tier.to_string()),
        }
    }

    fn wire_block(locations: Option<Vec<thrift::BlockLocation>>) -> thrift::BlockInfo {
        thrift::BlockInfo {
            block_id: Some(16_777_216),
            length: Some(512),
            locations,
        }
    }

    #[test]
    fn locations_keep_order_and_count() {
        let wire = wire_block(Some(vec![
            wire_location(3, "SSD"),
            wire_location(1, "MEM"),
            wire_location(2, "HDD"),
        ]));
        let block = BlockInfo::from_wire(wire.clone()).unwrap();

        let ids: Vec<u64> = block.locations().iter().map(|l| l.worker_id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(block.to_wire(), wire);
    }

    #[test]
    fn empty_locations_stay_empty() {
        let block = BlockInfo::from_wire(wire_block(Some(Vec::new()))).unwrap();
        assert!(block.locations().is_empty());
        assert_eq!(block.to_wire().locations, Some(Vec::new()));
    }

    #[test]
    fn unset_locations_read_as_empty() {
        let block = BlockInfo::from_wire(wire_block(None)).unwrap();
        assert!(block.locations().is_empty());
    }

    #[test]
    fn failing_location_aborts_block() {
        let mut broken = wire_location(2, "MEM");
        broken.tier_alias = None;
        let wire = wire_block(Some(vec![wire_location(1, "MEM"), broken]));

        let err = BlockInfo::from_wire(wire).unwrap_err();
        assert_eq!(
            err,
            MalformedWireData::missing("BlockLocation", "tier_alias")
        );
    }

    #[test]
    fn empty_tier_alias_is_invalid() {
        let err = BlockLocation::from_wire(wire_location(1, "")).unwrap_err();
        assert_eq!(err.entity, "BlockLocation");
        assert_eq!(err.field, "tier_alias");
        assert!(matches!(err.reason, Malformed::Invalid(_)));
    }

    #[test]
    fn negative_length_is_out_of_range() {
        let mut wire = wire_block(None);
        wire.length = Some(-1);
        let err = BlockInfo::from_wire(wire).unwrap_err();
        assert_eq!(
            err,
            MalformedWireData::out_of_range("BlockInfo", "length", -1)
        );
    }

    #[test]
    fn block_master_info_round_trips() {
        let mut capacity = BTreeMap::new();
        capacity.insert("MEM".to_string(), 1 << 30);
        capacity.insert("SSD".to_string(), 1 << 34);
        let wire = thrift::BlockMasterInfo {
            capacity_bytes: Some((1 << 30) + (1 << 34)),
            capacity_bytes_on_tiers: Some(capacity),
            free_bytes: Some(1 << 34),
            used_bytes: Some(1 << 30),
            used_bytes_on_tiers: Some(BTreeMap::new()),
        };

        let info = BlockMasterInfo::from_wire(wire.clone()).unwrap();
        assert_eq!(info.used_bytes(), 1 << 30);
        assert_eq!(info.capacity_bytes_on_tiers().len(), 2);
        assert_eq!(info.to_wire(), wire);
    }

    #[test]
    fn block_master_info_requires_free_bytes() {
        let wire = thrift::BlockMasterInfo {
            capacity_bytes: Some(10),
            used_bytes: Some(5),
            ..Default::default()
        };
        let err = BlockMasterInfo::from_wire(wire).unwrap_err();
        assert_eq!(
            err,
            MalformedWireData::missing("BlockMasterInfo", "free_bytes")
        );
    }
}
