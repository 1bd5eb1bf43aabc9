use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::View;

/// What a guest asked for. Every flag defaults to "no preference".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestPreferences {
    pub high_floor: bool,
    pub accessible: bool,
    pub smoking: bool,
    pub quiet: bool,
    pub pets: bool,
    pub view: Option<View>,
}

/// A hotel guest. Owned exclusively by the booking that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub vip: bool,
    /// 0 = none, 1 = silver, 2 = gold, 3 = platinum.
    #[serde(default)]
    pub loyalty_tier: u8,
    #[serde(default)]
    pub preferences: GuestPreferences,
    /// Maximum acceptable price per night.
    #[serde(default)]
    pub budget: Option<Decimal>,
}

impl Guest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vip: false,
            loyalty_tier: 0,
            preferences: GuestPreferences::default(),
            budget: None,
        }
    }

    pub fn with_vip(mut self, vip: bool) -> Self {
        self.vip = vip;
        self
    }

    pub fn with_loyalty_tier(mut self, tier: u8) -> Self {
        self.loyalty_tier = tier;
        self
    }

    pub fn with_preferences(mut self, preferences: GuestPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_budget(mut self, budget: Decimal) -> Self {
        self.budget = Some(budget);
        self
    }
}
