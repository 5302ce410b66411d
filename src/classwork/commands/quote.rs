use crate::commands::CmdResult;
use crate::error::Result;
use crate::rooms::{Price, RoomOrder};
use tracing::debug;

/// One line of an itemised bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    pub label: String,
    pub amount: Price,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomQuote {
    pub description: String,
    pub price: Price,
    /// Base room first, then each amenity in wrap order.
    pub lines: Vec<QuoteLine>,
}

pub fn run(order: &RoomOrder) -> Result<CmdResult> {
    let room = order.build();

    let mut lines = Vec::with_capacity(order.amenities.len() + 1);
    lines.push(QuoteLine {
        label: order.class.label().to_string(),
        amount: order.class.base_price(),
    });
    lines.extend(order.amenities.iter().map(|amenity| QuoteLine {
        label: amenity.suffix().to_string(),
        amount: amenity.price_delta(),
    }));

    let quote = RoomQuote {
        description: room.description(),
        price: room.price(),
        lines,
    };
    debug!(class = %order.class, layers = order.amenities.len(), price = quote.price, "quoted room");

    Ok(CmdResult::default().with_quote(quote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::{Amenity, RoomClass};

    #[test]
    fn quote_matches_chain() {
        let order = RoomOrder::new(RoomClass::Standard).with(Amenity::Internet);
        let quote = run(&order).unwrap().quote.unwrap();

        assert_eq!(quote.price, 2100);
        assert_eq!(quote.description, "Стандарт, выделенный Интернет");
    }

    #[test]
    fn lines_add_up_to_total() {
        let order = RoomOrder {
            class: RoomClass::Luxury,
            amenities: Amenity::ALL.to_vec(),
        };
        let quote = run(&order).unwrap().quote.unwrap();

        assert_eq!(quote.lines.len(), 6);
        assert_eq!(quote.lines[0].label, "Люкс");
        assert_eq!(quote.lines[5].label, "ужин");
        let sum: Price = quote.lines.iter().map(|line| line.amount).sum();
        assert_eq!(sum, quote.price);
        assert_eq!(quote.price, 5200);
    }

    #[test]
    fn bare_room_has_single_line() {
        let quote = run(&RoomOrder::new(RoomClass::Economy))
            .unwrap()
            .quote
            .unwrap();
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.price, 1000);
    }
}
