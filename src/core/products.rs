//! Purpose: Product records and their catalog operations.
//! Exports: `Product`, `ProductCatalog`.
use serde::{Deserialize, Serialize};

use crate::core::catalog::{Catalog, Record};
use crate::core::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
}

impl Record for Product {
    const CATALOG: &'static str = "Product";

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProductCatalog {
    inner: Catalog<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            inner: Catalog::new(),
        }
    }

    pub fn seeded() -> Self {
        Self {
            inner: Catalog::from_records(vec![
                Product {
                    id: 1,
                    name: "Laptop".to_string(),
                    category: "Electronics".to_string(),
                    price: 1200.0,
                    stock: 30,
                },
                Product {
                    id: 2,
                    name: "Smartphone".to_string(),
                    category: "Electronics".to_string(),
                    price: 800.0,
                    stock: 50,
                },
                Product {
                    id: 3,
                    name: "Headphones".to_string(),
                    category: "Accessories".to_string(),
                    price: 150.0,
                    stock: 100,
                },
            ]),
        }
    }

    pub fn records(&self) -> &[Product] {
        self.inner.records()
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.inner.filter(|product| product.category == category)
    }

    pub fn add(&mut self, product: Product) -> &[Product] {
        self.inner.add(product)
    }

    pub fn get(&self, id: u64) -> Result<&Product, Error> {
        self.inner.get(id)
    }

    pub fn remove(&mut self, id: u64) -> Result<&[Product], Error> {
        self.inner.remove(id)
    }

    pub fn set_price(&mut self, id: u64, price: f64) -> Result<&[Product], Error> {
        self.inner.update(id, |product| product.price = price)
    }

    pub fn set_stock(&mut self, id: u64, stock: u32) -> Result<&[Product], Error> {
        self.inner.update(id, |product| product.stock = stock)
    }
}

#[cfg(test)]
mod tests {
    use super::ProductCatalog;
    use crate::core::error::ErrorKind;

    #[test]
    fn by_category_groups_records() {
        let catalog = ProductCatalog::seeded();
        assert_eq!(catalog.by_category("Electronics").len(), 2);
        assert_eq!(catalog.by_category("Accessories").len(), 1);
    }

    #[test]
    fn set_stock_updates_in_place() {
        let mut catalog = ProductCatalog::seeded();
        let all = catalog.set_stock(2, 70).expect("update");
        assert_eq!(all.iter().find(|p| p.id == 2).expect("record").stock, 70);
    }

    #[test]
    fn get_missing_id_carries_context() {
        let catalog = ProductCatalog::seeded();
        let err = catalog.get(42).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.catalog(), Some("Product"));
        assert_eq!(err.id(), Some("42"));
    }
}
