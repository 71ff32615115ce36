//! Status registry types

use serde::{Deserialize, Serialize};

/// Status of one key+field slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Nothing in flight; displayed as the field's own name
    #[default]
    Idle,
    /// Operation dispatched and not yet settled
    Pending,
    /// Operation settled successfully
    Succeeded,
    /// Operation settled with an error
    Failed,
}

impl SlotStatus {
    /// Display tag for this status on `field`
    ///
    /// Idle slots render as the field name itself.
    pub fn tag<'a>(&self, field: &'a str) -> &'a str {
        match self {
            SlotStatus::Idle => field,
            SlotStatus::Pending => "loading",
            SlotStatus::Succeeded => "check",
            SlotStatus::Failed => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SlotStatus::Succeeded | SlotStatus::Failed)
    }
}

/// Event emitted for every slot write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub key: String,
    pub field: String,
    pub status: SlotStatus,
    /// Generation of the slot at the time of the write
    pub generation: u64,
}

impl StatusChange {
    pub fn tag(&self) -> &str {
        self.status.tag(&self.field)
    }
}
