use super::{Amenity, Room, RoomClass, RoomDecorator};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A room class plus the amenities to stack on it, innermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOrder {
    pub class: RoomClass,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

impl RoomOrder {
    pub fn new(class: RoomClass) -> Self {
        Self {
            class,
            amenities: Vec::new(),
        }
    }

    pub fn with(mut self, amenity: Amenity) -> Self {
        self.amenities.push(amenity);
        self
    }

    /// Parses a class name and amenity names, failing on the first unknown one.
    pub fn parse<I: AsRef<str>>(class: &str, amenities: &[I]) -> Result<Self> {
        let class: RoomClass = class.parse()?;
        let amenities = amenities
            .iter()
            .map(|name| name.as_ref().parse::<Amenity>())
            .collect::<Result<Vec<Amenity>>>()?;
        Ok(Self { class, amenities })
    }

    pub fn build(&self) -> Box<dyn Room> {
        self.amenities
            .iter()
            .fold(Box::new(self.class) as Box<dyn Room>, |room, amenity| -> Box<dyn Room> {
                Box::new(RoomDecorator::new(*amenity, room))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassworkError;

    #[test]
    fn build_wraps_in_list_order() {
        let order = RoomOrder::new(RoomClass::Economy)
            .with(Amenity::FoodDelivery)
            .with(Amenity::Dinner)
            .with(Amenity::Breakfast);
        let room = order.build();

        assert_eq!(room.price(), 2400);
        assert_eq!(
            room.description(),
            "Эконом, доставка еды в номер, ужин, завтрак \"шведский стол\""
        );
    }

    #[test]
    fn empty_order_is_the_base_room() {
        let room = RoomOrder::new(RoomClass::Luxury).build();
        assert_eq!(room.description(), "Люкс");
        assert_eq!(room.price(), 3000);
    }

    #[test]
    fn parse_reads_names() {
        let order = RoomOrder::parse("standard", &["internet", "breakfast"]).unwrap();
        assert_eq!(order.class, RoomClass::Standard);
        assert_eq!(order.amenities, vec![Amenity::Internet, Amenity::Breakfast]);
        assert_eq!(order.build().price(), 2600);
    }

    #[test]
    fn parse_rejects_unknown_amenity() {
        let err = RoomOrder::parse("standard", &["internet", "spa"]).unwrap_err();
        assert!(matches!(err, ClassworkError::InvalidArgument(_)));
    }

    #[test]
    fn deserializes_without_amenities() {
        let order: RoomOrder = serde_json::from_str(r#"{"class":"economy"}"#).unwrap();
        assert_eq!(order, RoomOrder::new(RoomClass::Economy));

        let order: RoomOrder =
            serde_json::from_str(r#"{"class":"luxury","amenities":["sofa","food-delivery"]}"#)
                .unwrap();
        assert_eq!(order.build().price(), 3800);
    }
}
