//! Rooms and their fixed characteristics.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Room category, ordered from plainest to most premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    /// 0 for standard, 1 for deluxe, 2 for suite.
    pub const fn rank(self) -> i64 {
        match self {
            RoomType::Standard => 0,
            RoomType::Deluxe => 1,
            RoomType::Suite => 2,
        }
    }

    /// Whether this room type counts as an upgrade for a loyalty tier.
    ///
    /// Silver (1) is upgraded by a deluxe room, gold (2) by deluxe or suite,
    /// platinum (3) only by a suite.
    pub const fn is_upgrade_for_tier(self, tier: u8) -> bool {
        matches!(
            (tier, self),
            (1, RoomType::Deluxe)
                | (2, RoomType::Deluxe)
                | (2, RoomType::Suite)
                | (3, RoomType::Suite)
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
        }
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RoomType::Standard),
            "deluxe" => Ok(RoomType::Deluxe),
            "suite" => Ok(RoomType::Suite),
            other => Err(format!("unknown room type '{}'", other)),
        }
    }
}

impl TryFrom<String> for RoomType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a room looks out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum View {
    Ocean,
    City,
    Garden,
    Courtyard,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            View::Ocean => "ocean",
            View::City => "city",
            View::Garden => "garden",
            View::Courtyard => "courtyard",
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ocean" => Ok(View::Ocean),
            "city" => Ok(View::City),
            "garden" => Ok(View::Garden),
            "courtyard" => Ok(View::Courtyard),
            other => Err(format!("unknown view '{}'", other)),
        }
    }
}

impl TryFrom<String> for View {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A physical hotel room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub floor: i32,
    pub view: View,
    #[serde(default)]
    pub accessible: bool,
    #[serde(default)]
    pub smoking_allowed: bool,
    #[serde(default)]
    pub pet_friendly: bool,
    /// Walking distance to the nearest elevator, in meters.
    #[serde(default)]
    pub distance_from_elevator: u32,
    pub price_per_night: Decimal,
}

impl Room {
    /// Creates a standard, non-accessible, non-smoking room on floor 1.
    pub fn new(id: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            room_type: RoomType::Standard,
            floor: 1,
            view: View::Courtyard,
            accessible: false,
            smoking_allowed: false,
            pet_friendly: false,
            distance_from_elevator: 0,
            price_per_night: Decimal::ZERO,
        }
    }

    pub fn with_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    pub fn with_smoking_allowed(mut self, smoking_allowed: bool) -> Self {
        self.smoking_allowed = smoking_allowed;
        self
    }

    pub fn with_pet_friendly(mut self, pet_friendly: bool) -> Self {
        self.pet_friendly = pet_friendly;
        self
    }

    pub fn with_distance_from_elevator(mut self, meters: u32) -> Self {
        self.distance_from_elevator = meters;
        self
    }

    pub fn with_price(mut self, price_per_night: Decimal) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    /// Quality rank used to find the best room for VIP guests: the type rank,
    /// plus one when the room has the premium view.
    pub fn quality_rank(&self, premium_view: View) -> i64 {
        self.room_type.rank() + i64::from(self.view == premium_view)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Integer(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
    })
}
