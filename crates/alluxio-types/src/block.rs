//! Blocks, their replica locations, and the block master summary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::validate;
use crate::worker::WorkerNetAddress;

/// One replica of a block on a worker tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockLocation {
    worker_id: u64,
    worker_address: WorkerNetAddress,
    tier_alias: String,
}

impl BlockLocation {
    pub fn new(
        worker_id: u64,
        worker_address: WorkerNetAddress,
        tier_alias: impl Into<String>,
    ) -> Result<Self> {
        let tier_alias = tier_alias.into();
        validate::quantity("BlockLocation", "worker_id", worker_id)?;
        validate::non_empty("BlockLocation", "tier_alias", &tier_alias)?;
        Ok(Self {
            worker_id,
            worker_address,
            tier_alias,
        })
    }

    pub fn worker_id(&self) -> u64 {
        self.worker_id
    }

    pub fn worker_address(&self) -> &WorkerNetAddress {
        &self.worker_address
    }

    /// Storage tier holding the replica, e.g. `MEM`.
    pub fn tier_alias(&self) -> &str {
        &self.tier_alias
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    block_id: u64,
    length: u64,
    locations: Vec<BlockLocation>,
}

impl BlockInfo {
    /// Create a block. `locations` keeps the order given.
    pub fn new(block_id: u64, length: u64, locations: Vec<BlockLocation>) -> Result<Self> {
        validate::quantity("BlockInfo", "block_id", block_id)?;
        validate::quantity("BlockInfo", "length", length)?;
        Ok(Self {
            block_id,
            length,
            locations,
        })
    }

    pub fn block_id(&self) -> u64 {
        self.block_id
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn locations(&self) -> &[BlockLocation] {
        &self.locations
    }
}

/// Cluster-wide storage summary reported by the block master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMasterInfo {
    capacity_bytes: u64,
    capacity_bytes_on_tiers: BTreeMap<String, u64>,
    free_bytes: u64,
    used_bytes: u64,
    used_bytes_on_tiers: BTreeMap<String, u64>,
}

impl BlockMasterInfo {
    pub fn builder() -> BlockMasterInfoBuilder {
        BlockMasterInfoBuilder {
            info: BlockMasterInfo {
                capacity_bytes: 0,
                capacity_bytes_on_tiers: BTreeMap::new(),
                free_bytes: 0,
                used_bytes: 0,
                used_bytes_on_tiers: BTreeMap::new(),
            },
        }
    }

    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_bytes
    }

    pub fn capacity_bytes_on_tiers(&self) -> &BTreeMap<String, u64> {
        &self.capacity_bytes_on_tiers
    }

    pub fn free_bytes(&self) -> u64 {
        self.free_bytes
    }

    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    pub fn used_bytes_on_tiers(&self) -> &BTreeMap<String, u64> {
        &self.used_bytes_on_tiers
    }
}

#[derive(Debug, Clone)]
pub struct BlockMasterInfoBuilder {
    info: BlockMasterInfo,
}

impl BlockMasterInfoBuilder {
    pub fn capacity_bytes(mut self, bytes: u64) -> Self {
        self.info.capacity_bytes = bytes;
        self
    }

    pub fn capacity_bytes_on_tiers(mut self, tiers: BTreeMap<String, u64>) -> Self {
        self.info.capacity_bytes_on_tiers = tiers;
        self
    }

    pub fn free_bytes(mut self, bytes: u64) -> Self {
        self.info.free_bytes = bytes;
        self
    }

    pub fn used_bytes(mut self, bytes: u64) -> Self {
        self.info.used_bytes = bytes;
        self
    }

    pub fn used_bytes_on_tiers(mut self, tiers: BTreeMap<String, u64>) -> Self {
        self.info.used_bytes_on_tiers = tiers;
        self
    }

    pub fn build(self) -> Result<BlockMasterInfo> {
        const ENTITY: &str = "BlockMasterInfo";
        let info = self.info;
        validate::quantity(ENTITY, "capacity_bytes", info.capacity_bytes)?;
        validate::quantity(ENTITY, "free_bytes", info.free_bytes)?;
        validate::quantity(ENTITY, "used_bytes", info.used_bytes)?;
        validate::tier_quantities(
            ENTITY,
            "capacity_bytes_on_tiers",
            &info.capacity_bytes_on_tiers,
        )?;
        validate::tier_quantities(ENTITY, "used_bytes_on_tiers", &info.used_bytes_on_tiers)?;
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_QUANTITY;

    fn address() -> WorkerNetAddress {
        WorkerNetAddress::new("node1", 29998, 29999).unwrap()
    }

    #[test]
    fn location_requires_tier_alias() {
        let err = BlockLocation::new(1, address(), "").unwrap_err();
        assert_eq!(err.field, "tier_alias");
    }

    #[test]
    fn block_keeps_location_order() {
        let first = BlockLocation::new(1, address(), "MEM").unwrap();
        let second = BlockLocation::new(2, address(), "SSD").unwrap();
        let block = BlockInfo::new(7, 64, vec![second.clone(), first.clone()]).unwrap();
        assert_eq!(block.locations(), &[second, first]);
    }

    #[test]
    fn block_rejects_unencodable_length() {
        let err = BlockInfo::new(7, MAX_QUANTITY + 1, Vec::new()).unwrap_err();
        assert_eq!(err.entity, "BlockInfo");
        assert_eq!(err.field, "length");
    }

    #[test]
    fn master_info_builder() {
        let mut tiers = BTreeMap::new();
        tiers.insert("MEM".to_string(), 100);
        let info = BlockMasterInfo::builder()
            .capacity_bytes(100)
            .used_bytes(40)
            .free_bytes(60)
            .capacity_bytes_on_tiers(tiers.clone())
            .build()
            .unwrap();
        assert_eq!(info.free_bytes(), 60);
        assert_eq!(info.capacity_bytes_on_tiers(), &tiers);
        assert!(info.used_bytes_on_tiers().is_empty());
    }
}
