use super::{Price, Room, SUFFIX_SEPARATOR};
use crate::error::{ClassworkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// The closed set of decorator kinds. Each adds a fixed suffix and price delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Amenity {
    Internet,
    Sofa,
    FoodDelivery,
    Breakfast,
    Dinner,
}

impl Amenity {
    pub const ALL: [Amenity; 5] = [
        Amenity::Internet,
        Amenity::Sofa,
        Amenity::FoodDelivery,
        Amenity::Breakfast,
        Amenity::Dinner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Amenity::Internet => "internet",
            Amenity::Sofa => "sofa",
            Amenity::FoodDelivery => "food-delivery",
            Amenity::Breakfast => "breakfast",
            Amenity::Dinner => "dinner",
        }
    }

    /// Text appended to the wrapped room's description.
    pub fn suffix(self) -> &'static str {
        match self {
            Amenity::Internet => "выделенный Интернет",
            Amenity::Sofa => "дополнительный диван",
            Amenity::FoodDelivery => "доставка еды в номер",
            Amenity::Breakfast => "завтрак \"шведский стол\"",
            Amenity::Dinner => "ужин",
        }
    }

    pub fn price_delta(self) -> Price {
        match self {
            Amenity::Internet => 100,
            Amenity::Sofa => 700,
            Amenity::FoodDelivery => 100,
            Amenity::Breakfast => 500,
            Amenity::Dinner => 800,
        }
    }

    pub fn decorate<R: Room + 'static>(self, room: R) -> RoomDecorator {
        RoomDecorator::new(self, room)
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Amenity {
    type Err = ClassworkError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        if wanted == "fooddelivery" {
            return Ok(Amenity::FoodDelivery);
        }
        Amenity::ALL
            .into_iter()
            .find(|amenity| amenity.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Amenity::ALL.iter().map(|a| a.name()).collect();
                ClassworkError::InvalidArgument(format!(
                    "Unknown amenity: {} (expected one of {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// One layer of a room chain: an amenity on top of exactly one inner room.
#[derive(Debug)]
pub struct RoomDecorator {
    amenity: Amenity,
    inner: Box<dyn Room>,
}

impl RoomDecorator {
    pub fn new<R: Room + 'static>(amenity: Amenity, inner: R) -> Self {
        trace!(amenity = amenity.name(), "wrapping room");
        Self {
            amenity,
            inner: Box::new(inner),
        }
    }

    /// Like [`RoomDecorator::new`], for callers holding an optional room.
    /// A missing inner room is rejected here rather than at first use.
    pub fn try_new(amenity: Amenity, inner: Option<Box<dyn Room>>) -> Result<Self> {
        let inner = inner.ok_or_else(|| {
            ClassworkError::InvalidArgument(format!(
                "{} decorator needs a room to wrap",
                amenity.name()
            ))
        })?;
        trace!(amenity = amenity.name(), "wrapping room");
        Ok(Self { amenity, inner })
    }

    pub fn amenity(&self) -> Amenity {
        self.amenity
    }

    pub fn inner(&self) -> &dyn Room {
        self.inner.as_ref()
    }
}

impl Room for RoomDecorator {
    fn description(&self) -> String {
        let mut description = self.inner.description();
        description.push_str(SUFFIX_SEPARATOR);
        description.push_str(self.amenity.suffix());
        description
    }

    fn price(&self) -> Price {
        self.inner.price() + self.amenity.price_delta()
    }
}
