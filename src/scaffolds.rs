use crate::core_types::BlockId;
use crate::error::{ScafForgeError, SfResult};
use serde::{Deserialize, Serialize};

/// Immutable mapping from block id to its ordered sequence of position
/// markers. Read-only for the entire run and shared across workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldTable {
    blocks: Vec<Vec<i64>>,
}

impl ScaffoldTable {
    pub fn new(blocks: Vec<Vec<i64>>) -> SfResult<Self> {
        if blocks.is_empty() {
            return Err(ScafForgeError::Config(
                "scaffold table is empty".to_string(),
            ));
        }
        Ok(Self { blocks })
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn markers(&self, id: BlockId) -> Option<&[i64]> {
        self.blocks.get(id as usize).map(|m| m.as_slice())
    }

    /// Marker count summed over all blocks; the upper bound on any fitness.
    pub fn total_markers(&self) -> usize {
        self.blocks.iter().map(|m| m.len()).sum()
    }
}
