//! Strongly-typed constraint parameters.

use hotelforge_core::{SolverError, View};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ConstraintCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VipBestRoomParams {
    /// View that earns the extra quality point.
    pub premium_view: View,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighFloorParams {
    pub min_floor: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuietZoneParams {
    pub min_floor: i32,
    pub min_distance_from_elevator: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BudgetFitParams {
    /// Percentage above the budget that is still tolerated.
    pub tolerance_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoyaltyTierParams {
    pub min_tier: u8,
}

/// Parameters of an active constraint, one variant per code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintParams {
    NoDoubleBooking,
    RoomTypeMatch,
    AccessibilityRequired,
    ValidDateRange,
    BookingUnallocated,
    VipBestRoom(VipBestRoomParams),
    ViewPreference,
    HighFloorPreference(HighFloorParams),
    QuietZonePreference(QuietZoneParams),
    PetFriendlyMatch,
    SmokingPreferenceMatch,
    BudgetFit(BudgetFitParams),
    LoyaltyTierReward(LoyaltyTierParams),
    EarlyLateReadiness,
}

impl ConstraintParams {
    pub fn code(&self) -> ConstraintCode {
        match self {
            ConstraintParams::NoDoubleBooking => ConstraintCode::NoDoubleBooking,
            ConstraintParams::RoomTypeMatch => ConstraintCode::RoomTypeMatch,
            ConstraintParams::AccessibilityRequired => ConstraintCode::AccessibilityRequired,
            ConstraintParams::ValidDateRange => ConstraintCode::ValidDateRange,
            ConstraintParams::BookingUnallocated => ConstraintCode::BookingUnallocated,
            ConstraintParams::VipBestRoom(_) => ConstraintCode::VipBestRoom,
            ConstraintParams::ViewPreference => ConstraintCode::ViewPreference,
            ConstraintParams::HighFloorPreference(_) => ConstraintCode::HighFloorPreference,
            ConstraintParams::QuietZonePreference(_) => ConstraintCode::QuietZonePreference,
            ConstraintParams::PetFriendlyMatch => ConstraintCode::PetFriendlyMatch,
            ConstraintParams::SmokingPreferenceMatch => ConstraintCode::SmokingPreferenceMatch,
            ConstraintParams::BudgetFit(_) => ConstraintCode::BudgetFit,
            ConstraintParams::LoyaltyTierReward(_) => ConstraintCode::LoyaltyTierReward,
            ConstraintParams::EarlyLateReadiness => ConstraintCode::EarlyLateReadiness,
        }
    }

    /// Converts schema-checked parameter values into the typed variant.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming `code` if the values do not fit
    /// the typed parameter struct.
    pub fn from_values(code: ConstraintCode, values: &Map<String, Value>) -> Result<Self, SolverError> {
        let params = match code {
            ConstraintCode::NoDoubleBooking => ConstraintParams::NoDoubleBooking,
            ConstraintCode::RoomTypeMatch => ConstraintParams::RoomTypeMatch,
            ConstraintCode::AccessibilityRequired => ConstraintParams::AccessibilityRequired,
            ConstraintCode::ValidDateRange => ConstraintParams::ValidDateRange,
            ConstraintCode::BookingUnallocated => ConstraintParams::BookingUnallocated,
            ConstraintCode::VipBestRoom => ConstraintParams::VipBestRoom(typed(code, values)?),
            ConstraintCode::ViewPreference => ConstraintParams::ViewPreference,
            ConstraintCode::HighFloorPreference => {
                ConstraintParams::HighFloorPreference(typed(code, values)?)
            }
            ConstraintCode::QuietZonePreference => {
                ConstraintParams::QuietZonePreference(typed(code, values)?)
            }
            ConstraintCode::PetFriendlyMatch => ConstraintParams::PetFriendlyMatch,
            ConstraintCode::SmokingPreferenceMatch => ConstraintParams::SmokingPreferenceMatch,
            ConstraintCode::BudgetFit => ConstraintParams::BudgetFit(typed(code, values)?),
            ConstraintCode::LoyaltyTierReward => {
                ConstraintParams::LoyaltyTierReward(typed(code, values)?)
            }
            ConstraintCode::EarlyLateReadiness => ConstraintParams::EarlyLateReadiness,
        };
        Ok(params)
    }
}

fn typed<T: DeserializeOwned>(
    code: ConstraintCode,
    values: &Map<String, Value>,
) -> Result<T, SolverError> {
    serde_json::from_value(Value::Object(values.clone())).map_err(|e| {
        SolverError::configuration(code.as_str(), format!("invalid parameters: {}", e))
    })
}
