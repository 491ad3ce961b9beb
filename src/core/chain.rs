//! Ordered chain of normalized stages

use crate::core::error::StageResult;
use crate::core::stage::{RawStage, Stage};

/// The full transformation chain
///
/// Built once from raw stages and read-only afterwards; both mapping modes
/// share it.
#[derive(Debug)]
pub struct StageChain {
    stages: Vec<Stage>,
}

impl StageChain {
    /// Normalize every raw stage, keeping their order
    pub fn from_raw(raw_stages: &[RawStage]) -> StageResult<Self> {
        let stages = raw_stages
            .iter()
            .map(Stage::normalize)
            .collect::<StageResult<Vec<_>>>()?;

        log::info!(
            "Built stage chain: {} stages, {} normalized ranges",
            stages.len(),
            stages.iter().map(|s| s.len()).sum::<usize>()
        );

        Ok(Self { stages })
    }

    /// Stages in chain order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
