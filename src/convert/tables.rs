// src/convert/tables.rs
//! Fixed conversion tables
//!
//! Rename maps and prefix sets are owned by a [`ConvertTables`] value that is
//! injected into the converter rather than read from module globals, so the
//! transform stays pure and tests can substitute alternates. The forward and
//! reverse rename tables are distinct and deliberately not mutual inverses:
//! the reverse table is smaller because most PenguinMod ids have no TurboWarp
//! counterpart to come back from.

/// Extension ids renamed when converting PenguinMod -> TurboWarp.
const PM_TO_TW_RENAMES: &[(&str, &str)] = &[
    ("penguinmod.textPlus", "text"),
    ("penguinmod.bitwise", "tw.bitwise"),
];

/// Extension ids renamed when converting TurboWarp -> PenguinMod.
const TW_TO_PM_RENAMES: &[(&str, &str)] = &[("tw.bitwise", "penguinmod.bitwise")];

/// Extension id prefixes that mark a PenguinMod-only extension. The full
/// reset drops both; the rename-only level drops only the first.
const PM_EXTENSION_PREFIXES: &[&str] = &["penguinmod.", "pm."];

/// Opcode prefixes of blocks that exist only in the PenguinMod runtime.
const PM_OPCODE_PREFIXES: &[&str] = &["penguinmod_", "pm_", "textplus_", "pmtext_"];

/// Immutable lookup tables driving a conversion.
#[derive(Debug, Clone)]
pub struct ConvertTables {
    pub pm_to_tw_renames: &'static [(&'static str, &'static str)],
    pub tw_to_pm_renames: &'static [(&'static str, &'static str)],
    pub pm_extension_prefixes: &'static [&'static str],
    pub pm_opcode_prefixes: &'static [&'static str],
}

impl Default for ConvertTables {
    fn default() -> Self {
        Self {
            pm_to_tw_renames: PM_TO_TW_RENAMES,
            tw_to_pm_renames: TW_TO_PM_RENAMES,
            pm_extension_prefixes: PM_EXTENSION_PREFIXES,
            pm_opcode_prefixes: PM_OPCODE_PREFIXES,
        }
    }
}

impl ConvertTables {
    /// TurboWarp name for a PenguinMod extension id, if one exists.
    pub fn rename_pm_to_tw(&self, id: &str) -> Option<&'static str> {
        self.pm_to_tw_renames
            .iter()
            .find(|(from, _)| *from == id)
            .map(|(_, to)| *to)
    }

    /// PenguinMod name for a TurboWarp extension id, if one exists.
    pub fn rename_tw_to_pm(&self, id: &str) -> Option<&'static str> {
        self.tw_to_pm_renames
            .iter()
            .find(|(from, _)| *from == id)
            .map(|(_, to)| *to)
    }

    /// Whether an extension id (post-rename) is PenguinMod-only and must be
    /// dropped when converting to TurboWarp. The rename-only strictness level
    /// matches `penguinmod.` alone.
    pub fn is_pm_extension(&self, id: &str, full_reset: bool) -> bool {
        let prefixes = if full_reset {
            self.pm_extension_prefixes
        } else {
            &self.pm_extension_prefixes[..1]
        };
        prefixes.iter().any(|p| id.starts_with(p))
    }

    /// Whether a block opcode belongs to the PenguinMod runtime. Empty
    /// opcodes never match.
    pub fn is_pm_opcode(&self, opcode: &str) -> bool {
        !opcode.is_empty() && self.pm_opcode_prefixes.iter().any(|p| opcode.starts_with(p))
    }
}
