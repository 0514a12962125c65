//! Purpose: Car records and their catalog operations.
//! Exports: `Car`, `CarCatalog`.
//! Invariants: Wire shape uses `inStock`; `price` and `in_stock` are the
//! updatable fields.
use serde::{Deserialize, Serialize};

use crate::core::catalog::{Catalog, Record};
use crate::core::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u64,
    pub brand: String,
    pub model: String,
    pub year: u32,
    pub price: f64,
    pub in_stock: bool,
}

impl Record for Car {
    const CATALOG: &'static str = "Car";

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Debug, Default)]
pub struct CarCatalog {
    inner: Catalog<Car>,
}

impl CarCatalog {
    pub fn new() -> Self {
        Self {
            inner: Catalog::new(),
        }
    }

    pub fn seeded() -> Self {
        Self {
            inner: Catalog::from_records(vec![
                Car {
                    id: 1,
                    brand: "Toyota".to_string(),
                    model: "Corolla".to_string(),
                    year: 2020,
                    price: 20000.0,
                    in_stock: true,
                },
                Car {
                    id: 2,
                    brand: "Honda".to_string(),
                    model: "Civic".to_string(),
                    year: 2019,
                    price: 22000.0,
                    in_stock: true,
                },
                Car {
                    id: 3,
                    brand: "Ford".to_string(),
                    model: "Mustang".to_string(),
                    year: 2021,
                    price: 35000.0,
                    in_stock: false,
                },
            ]),
        }
    }

    pub fn records(&self) -> &[Car] {
        self.inner.records()
    }

    pub fn by_brand(&self, brand: &str) -> Vec<&Car> {
        self.inner.filter(|car| car.brand == brand)
    }

    pub fn add(&mut self, car: Car) -> &[Car] {
        self.inner.add(car)
    }

    pub fn get(&self, id: u64) -> Result<&Car, Error> {
        self.inner.get(id)
    }

    pub fn remove(&mut self, id: u64) -> Result<&[Car], Error> {
        self.inner.remove(id)
    }

    pub fn set_price(&mut self, id: u64, price: f64) -> Result<&[Car], Error> {
        self.inner.update(id, |car| car.price = price)
    }

    pub fn set_in_stock(&mut self, id: u64, in_stock: bool) -> Result<&[Car], Error> {
        self.inner.update(id, |car| car.in_stock = in_stock)
    }
}
