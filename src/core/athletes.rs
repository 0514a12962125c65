//! Purpose: Athlete records and their catalog operations.
//! Exports: `Athlete`, `AthleteCatalog`.
//! Invariants: Operations mirror the shared catalog contract; only `medals`
//! and `country` are updatable in place.
use serde::{Deserialize, Serialize};

use crate::core::catalog::{Catalog, Record};
use crate::core::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: u64,
    pub name: String,
    pub sport: String,
    pub medals: u32,
    pub country: String,
}

impl Record for Athlete {
    const CATALOG: &'static str = "Athlete";

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Debug, Default)]
pub struct AthleteCatalog {
    inner: Catalog<Athlete>,
}

impl AthleteCatalog {
    pub fn new() -> Self {
        Self {
            inner: Catalog::new(),
        }
    }

    /// Three-record demo fixture.
    pub fn seeded() -> Self {
        Self {
            inner: Catalog::from_records(vec![
                Athlete {
                    id: 1,
                    name: "Usain Bolt".to_string(),
                    sport: "Sprinting".to_string(),
                    medals: 8,
                    country: "Jamaica".to_string(),
                },
                Athlete {
                    id: 2,
                    name: "Michael Phelps".to_string(),
                    sport: "Swimming".to_string(),
                    medals: 23,
                    country: "USA".to_string(),
                },
                Athlete {
                    id: 3,
                    name: "Simone Biles".to_string(),
                    sport: "Gymnastics".to_string(),
                    medals: 7,
                    country: "USA".to_string(),
                },
            ]),
        }
    }

    pub fn records(&self) -> &[Athlete] {
        self.inner.records()
    }

    pub fn by_sport(&self, sport: &str) -> Vec<&Athlete> {
        self.inner.filter(|athlete| athlete.sport == sport)
    }

    pub fn add(&mut self, athlete: Athlete) -> &[Athlete] {
        self.inner.add(athlete)
    }

    pub fn get(&self, id: u64) -> Result<&Athlete, Error> {
        self.inner.get(id)
    }

    pub fn remove(&mut self, id: u64) -> Result<&[Athlete], Error> {
        self.inner.remove(id)
    }

    pub fn set_medals(&mut self, id: u64, medals: u32) -> Result<&[Athlete], Error> {
        self.inner.update(id, |athlete| athlete.medals = medals)
    }

    pub fn set_country(&mut self, id: u64, country: impl Into<String>) -> Result<&[Athlete], Error> {
        let country = country.into();
        self.inner.update(id, |athlete| athlete.country = country)
    }
}
