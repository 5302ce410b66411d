//! # Room Pricing
//!
//! Rooms are priced by composition. A base [`RoomClass`] carries a fixed
//! description and price; each [`Amenity`] is a decorator kind that wraps
//! any [`Room`] and appends its own text and price on top.
//!
//! ```text
//!   RoomDecorator(Breakfast)
//!     └── RoomDecorator(Internet)
//!           └── RoomClass::Standard
//!
//!   description: "Стандарт, выделенный Интернет, завтрак \"шведский стол\""
//!   price:       2000 + 100 + 500 = 2600
//! ```
//!
//! Calls on the outermost layer delegate inward; every layer adds its
//! contribution after the inner result comes back. The wrap order decides the
//! order of the description suffixes, never the total: price deltas are summed.
//!
//! Chains are owned top-down through `Box<dyn Room>`, so a chain is always
//! finite and ends in exactly one base room.
//!
//! ## Building chains
//!
//! ```
//! use classwork::rooms::{Amenity, Room, RoomClass, RoomExt};
//!
//! let room = RoomClass::Standard
//!     .with(Amenity::Internet)
//!     .with(Amenity::Breakfast);
//!
//! assert_eq!(room.price(), 2600);
//! assert!(room.description().starts_with("Стандарт"));
//! ```
//!
//! When the amenities come from user input, [`RoomOrder`] parses names and
//! builds the chain in list order.

use std::fmt;

mod class;
mod decorator;
mod order;

pub use class::RoomClass;
pub use decorator::{Amenity, RoomDecorator};
pub use order::RoomOrder;

/// Whole roubles.
pub type Price = u32;

/// Separator placed between a room's description and each amenity suffix.
pub const SUFFIX_SEPARATOR: &str = ", ";

/// A priced, described room: either a base class or a decorated one.
pub trait Room: fmt::Debug + Send + Sync {
    fn description(&self) -> String;

    fn price(&self) -> Price;
}

impl<R: Room + ?Sized> Room for Box<R> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn price(&self) -> Price {
        (**self).price()
    }
}

/// Chaining sugar: `room.with(Amenity::Sofa)` wraps `room` in a new layer.
pub trait RoomExt: Room {
    fn with(self, amenity: Amenity) -> RoomDecorator
    where
        Self: Sized + 'static,
    {
        RoomDecorator::new(amenity, self)
    }
}

impl<R: Room + ?Sized> RoomExt for R {}
