use super::Product;

/// A predicate over products.
pub trait ProductFilter {
    fn matches(&self, product: &Product) -> bool;
}

impl<F: ProductFilter + ?Sized> ProductFilter for Box<F> {
    fn matches(&self, product: &Product) -> bool {
        (**self).matches(product)
    }
}

/// Keeps products from one manufacturer. Exact, case-sensitive match.
#[derive(Debug, Clone)]
pub struct ManufacturerFilter {
    manufacturer: String,
}

impl ManufacturerFilter {
    pub fn new(manufacturer: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
        }
    }
}

impl ProductFilter for ManufacturerFilter {
    fn matches(&self, product: &Product) -> bool {
        product.manufacturer == self.manufacturer
    }
}

/// Keeps products whose effective price is at most `max`.
#[derive(Debug, Clone, Copy)]
pub struct MaxPriceFilter {
    max: f64,
}

impl MaxPriceFilter {
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl ProductFilter for MaxPriceFilter {
    fn matches(&self, product: &Product) -> bool {
        product.effective_price() <= self.max
    }
}

/// Composes filters with *AND* logic; an empty [`AllFilters`] matches everything.
#[derive(Default)]
pub struct AllFilters {
    filters: Vec<Box<dyn ProductFilter>>,
}

impl AllFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and<F: ProductFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl ProductFilter for AllFilters {
    fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|filter| filter.matches(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::ProductCollection;

    #[test]
    fn manufacturer_match_is_exact() {
        let product = Product::new("Зефир", 200.0, Some(150.0), "Ламзурь");
        assert!(ManufacturerFilter::new("Ламзурь").matches(&product));
        assert!(!ManufacturerFilter::new("ламзурь").matches(&product));
        assert!(!ManufacturerFilter::new("Ламз").matches(&product));
    }

    #[test]
    fn empty_all_filters_matches_everything() {
        let all = AllFilters::new();
        assert!(all.is_empty());
        assert_eq!(ProductCollection::demo().filter(&all).len(), 4);
    }

    #[test]
    fn all_filters_requires_every_filter() {
        let all = AllFilters::new()
            .and(ManufacturerFilter::new("Ламзурь"))
            .and(MaxPriceFilter::new(120.0));
        assert_eq!(all.len(), 2);

        let filtered = ProductCollection::demo().filter(&all);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.products()[0].name, "Мармелад");
    }

    #[test]
    fn boxed_filters_work_as_filters() {
        let boxed: Box<dyn ProductFilter> = Box::new(MaxPriceFilter::new(80.0));
        assert_eq!(ProductCollection::demo().filter(&boxed).len(), 2);
    }
}
