// Ordered in-memory record collections with linear find/filter/update semantics.
use crate::core::error::{Error, ErrorKind};

/// A flat record stored in a [`Catalog`]. `CATALOG` names the collection in
/// error context; `id` is the lookup key for get/remove/update.
pub trait Record {
    const CATALOG: &'static str;

    fn id(&self) -> u64;
}

/// Insertion-ordered collection of records. All lookups are linear scans;
/// collections stay small enough that nothing smarter is warranted.
#[derive(Clone, Debug)]
pub struct Catalog<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Catalog<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter(&self, keep: impl Fn(&R) -> bool) -> Vec<&R> {
        self.records.iter().filter(|record| keep(record)).collect()
    }

    /// Appends a record and returns the full collection. Id uniqueness is the
    /// caller's concern; duplicates are stored as given.
    pub fn add(&mut self, record: R) -> &[R] {
        self.records.push(record);
        &self.records
    }

    pub fn get(&self, id: u64) -> Result<&R, Error> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| missing(R::CATALOG, id))
    }

    /// Removes the record with the given id, preserving relative order of the
    /// rest. The collection is unchanged when no record matches.
    pub fn remove(&mut self, id: u64) -> Result<&[R], Error> {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return Err(missing(R::CATALOG, id));
        }
        Ok(&self.records)
    }

    /// Applies `apply` to the first record with the given id, in place.
    pub fn update(&mut self, id: u64, apply: impl FnOnce(&mut R)) -> Result<&[R], Error> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| missing(R::CATALOG, id))?;
        apply(record);
        Ok(&self.records)
    }
}

impl<R: Record> Default for Catalog<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(catalog: &'static str, id: u64) -> Error {
    Error::new(ErrorKind::NotFound)
        .with_message(format!("{catalog} with ID {id} not found"))
        .with_catalog(catalog)
        .with_id(id)
}
