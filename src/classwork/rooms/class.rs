use super::{Price, Room};
use crate::error::{ClassworkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The base room classes. Each is a fixed (description, price) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomClass {
    Economy,
    Standard,
    Luxury,
}

impl RoomClass {
    pub const ALL: [RoomClass; 3] = [RoomClass::Economy, RoomClass::Standard, RoomClass::Luxury];

    /// Machine name, as accepted by [`FromStr`] and used in JSON.
    pub fn name(self) -> &'static str {
        match self {
            RoomClass::Economy => "economy",
            RoomClass::Standard => "standard",
            RoomClass::Luxury => "luxury",
        }
    }

    /// The guest-facing description.
    pub fn label(self) -> &'static str {
        match self {
            RoomClass::Economy => "Эконом",
            RoomClass::Standard => "Стандарт",
            RoomClass::Luxury => "Люкс",
        }
    }

    pub fn base_price(self) -> Price {
        match self {
            RoomClass::Economy => 1000,
            RoomClass::Standard => 2000,
            RoomClass::Luxury => 3000,
        }
    }
}

impl Room for RoomClass {
    fn description(&self) -> String {
        self.label().to_string()
    }

    fn price(&self) -> Price {
        self.base_price()
    }
}

impl fmt::Display for RoomClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoomClass {
    type Err = ClassworkError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        RoomClass::ALL
            .into_iter()
            .find(|class| class.name() == wanted || class.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                ClassworkError::InvalidArgument(format!(
                    "Unknown room class: {} (expected economy, standard or luxury)",
                    s
                ))
            })
    }
}
