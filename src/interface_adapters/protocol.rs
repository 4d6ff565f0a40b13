// Wire DTOs for mirroring rotor state to observers.

use crate::use_cases::RotorSync;
use serde::{Deserialize, Serialize};

/// Snapshot sent to observers whenever the rotor changes or samples wind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotorSyncDto {
    pub sail_length: u8,
    #[serde(default)]
    pub wind_speed: f64,
}

impl From<RotorSync> for RotorSyncDto {
    fn from(sync: RotorSync) -> Self {
        Self {
            sail_length: sync.sail_count,
            wind_speed: sync.wind_speed,
        }
    }
}

impl From<RotorSyncDto> for RotorSync {
    fn from(dto: RotorSyncDto) -> Self {
        Self {
            sail_count: dto.sail_length,
            wind_speed: dto.wind_speed,
        }
    }
}

pub fn encode_sync(sync: RotorSync) -> Result<String, serde_json::Error> {
    serde_json::to_string(&RotorSyncDto::from(sync))
}

pub fn decode_sync(text: &str) -> Result<RotorSync, serde_json::Error> {
    serde_json::from_str::<RotorSyncDto>(text).map(RotorSync::from)
}
