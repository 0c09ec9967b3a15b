// src/convert/report.rs
//! Conversion report
//!
//! What a conversion did beyond the manifest rewrite itself: extension
//! removal warnings and the blocks vaporized from each target. Presentation
//! only; no decision logic reads this.

use serde::Serialize;

/// A block deleted during PenguinMod -> TurboWarp conversion because its
/// opcode is PenguinMod-exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedBlock {
    /// Owning target's name, or `(stage)` for the stage.
    pub sprite: String,
    pub opcode: String,
}

/// Accumulated warnings and removals from a single conversion.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertReport {
    /// Human-readable warnings, in emission order.
    pub warnings: Vec<String>,
    /// Blocks deleted from targets, in visit order.
    pub removed_blocks: Vec<RemovedBlock>,
}

impl ConvertReport {
    pub fn warn_removed_extension(&mut self, id: &str) {
        self.warnings.push(format!("Removed extension: {}", id));
    }

    pub fn record_removed_block(&mut self, sprite: &str, opcode: &str) {
        self.removed_blocks.push(RemovedBlock {
            sprite: sprite.to_string(),
            opcode: opcode.to_string(),
        });
    }

    /// True when the conversion only relabeled fields and dropped nothing.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.removed_blocks.is_empty()
    }
}
