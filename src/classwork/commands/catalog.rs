use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ClassworkError, Result};
use crate::products::{AllFilters, ManufacturerFilter, MaxPriceFilter, ProductCollection};

/// Optional criteria; every criterion given must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub manufacturer: Option<String>,
    pub max_price: Option<f64>,
}

impl ProductQuery {
    pub fn to_filter(&self) -> Result<AllFilters> {
        let mut filters = AllFilters::new();
        if let Some(manufacturer) = &self.manufacturer {
            filters = filters.and(ManufacturerFilter::new(manufacturer.clone()));
        }
        if let Some(max) = self.max_price {
            if !max.is_finite() || max < 0.0 {
                return Err(ClassworkError::InvalidArgument(format!(
                    "Max price must be a non-negative number, got {}",
                    max
                )));
            }
            filters = filters.and(MaxPriceFilter::new(max));
        }
        Ok(filters)
    }
}

pub fn run(collection: &ProductCollection, query: &ProductQuery) -> Result<CmdResult> {
    let filter = query.to_filter()?;
    let matched = collection.filter(&filter);

    let mut result = CmdResult::default();
    if collection.is_empty() {
        result.add_message(CmdMessage::warning("Catalogue is empty."));
    } else if matched.is_empty() {
        result.add_message(CmdMessage::info("No products match."));
    }
    Ok(result.with_products(matched.into_vec()))
}
