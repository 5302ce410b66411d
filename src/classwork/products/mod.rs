//! # Product Catalogue
//!
//! A [`ProductCollection`] is an ordered list of products. Narrowing it goes
//! through a [`ProductFilter`]; every `filter` call returns a new collection and
//! leaves the source untouched, so filters chain with AND semantics:
//!
//! ```
//! use classwork::products::{ManufacturerFilter, MaxPriceFilter, ProductCollection};
//!
//! let catalog = ProductCollection::demo();
//! let cheap_lamzur = catalog
//!     .filter(&ManufacturerFilter::new("Ламзурь"))
//!     .filter(&MaxPriceFilter::new(120.0));
//!
//! assert_eq!(cheap_lamzur.len(), 1);
//! assert_eq!(cheap_lamzur.products()[0].name, "Мармелад");
//! ```
//!
//! Prices are compared on the *effective* price: the selling price when the
//! product is discounted, the list price otherwise.

use crate::error::{ClassworkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

mod filter;

pub use filter::{AllFilters, ManufacturerFilter, MaxPriceFilter, ProductFilter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub list_price: f64,
    /// Discounted price; `None` when the product sells at list price.
    #[serde(default)]
    pub selling_price: Option<f64>,
    pub manufacturer: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        list_price: f64,
        selling_price: Option<f64>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            list_price,
            selling_price,
            manufacturer: manufacturer.into(),
        }
    }

    pub fn effective_price(&self) -> f64 {
        self.selling_price.unwrap_or(self.list_price)
    }

    pub fn is_discounted(&self) -> bool {
        self.selling_price.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCollection {
    products: Vec<Product>,
}

impl ProductCollection {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The sample catalogue used by the CLI when no file is given.
    pub fn demo() -> Self {
        Self::new(vec![
            Product::new("Шоколад", 100.0, Some(50.0), "Красный Октябрь"),
            Product::new("Мармелад", 100.0, None, "Ламзурь"),
            Product::new("Зефир", 200.0, Some(150.0), "Ламзурь"),
            Product::new("Пряник", 80.0, None, "Буревестник"),
        ])
    }

    /// Reads a JSON array of products.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(ClassworkError::Io)?;
        let collection: ProductCollection =
            serde_json::from_str(&content).map_err(ClassworkError::Serialization)?;
        debug!(path = %path.display(), count = collection.len(), "loaded catalogue");
        Ok(collection)
    }

    pub fn filter<F: ProductFilter + ?Sized>(&self, filter: &F) -> ProductCollection {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn into_vec(self) -> Vec<Product> {
        self.products
    }
}

impl FromIterator<Product> for ProductCollection {
    fn from_iter<T: IntoIterator<Item = Product>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ProductCollection {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(collection: &ProductCollection) -> Vec<&str> {
        collection.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn filter_by_manufacturer() {
        let filtered = ProductCollection::demo().filter(&ManufacturerFilter::new("Ламзурь"));
        assert_eq!(filtered.len(), 2);
        assert_eq!(names(&filtered), vec!["Мармелад", "Зефир"]);
    }

    #[test]
    fn filter_by_unknown_manufacturer_is_empty() {
        let filtered = ProductCollection::demo()
            .filter(&ManufacturerFilter::new("Несуществующий производитель"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn max_price_uses_discounted_price() {
        let filtered = ProductCollection::demo().filter(&MaxPriceFilter::new(50.0));
        assert_eq!(names(&filtered), vec!["Шоколад"]);
    }

    #[test]
    fn max_price_uses_list_price_without_discount() {
        let filtered = ProductCollection::demo().filter(&MaxPriceFilter::new(80.0));
        assert_eq!(names(&filtered), vec!["Шоколад", "Пряник"]);
    }

    #[test]
    fn max_price_is_inclusive() {
        let filtered = ProductCollection::demo().filter(&MaxPriceFilter::new(100.0));
        assert_eq!(names(&filtered), vec!["Шоколад", "Мармелад", "Пряник"]);
    }

    #[test]
    fn chained_filters_combine() {
        let catalog = ProductCollection::demo();
        let by_maker = catalog.filter(&ManufacturerFilter::new("Ламзурь"));
        let both = by_maker.filter(&MaxPriceFilter::new(120.0));

        assert_eq!(names(&both), vec!["Мармелад"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn effective_price_prefers_selling_price() {
        let chocolate = Product::new("Шоколад", 100.0, Some(50.0), "Красный Октябрь");
        let gingerbread = Product::new("Пряник", 80.0, None, "Буревестник");
        assert_eq!(chocolate.effective_price(), 50.0);
        assert!(chocolate.is_discounted());
        assert_eq!(gingerbread.effective_price(), 80.0);
        assert!(!gingerbread.is_discounted());
    }

    #[test]
    fn load_reads_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"name":"Халва","list_price":120.0,"manufacturer":"Рот Фронт"}]"#,
        )
        .unwrap();

        let catalog = ProductCollection::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].selling_price, None);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProductCollection::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ClassworkError::Io(_)));
    }
}
