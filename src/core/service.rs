//! Purpose: Status-envelope CRUD services over JSON records.
//! Exports: `EntityService`, `Outcome`.
//! Role: HTTP-shaped in-process services (books, games, movies) with fixed
//! message strings and required-field validation.
//! Invariants: Success envelopes carry `message`, failures carry `error`;
//! the two never appear together.
//! Invariants: Message strings are part of the contract and stay stable.
use serde_json::Value;

/// Result envelope for a service call. Mirrors an HTTP response shape:
/// status code plus either a success message, an error string, or data.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub status: u16,
    pub message: Option<String>,
    pub error: Option<String>,
    pub data: Option<Vec<Value>>,
}

impl Outcome {
    fn listing(records: Vec<Value>) -> Self {
        Self {
            status: 200,
            message: None,
            error: None,
            data: Some(records),
        }
    }

    fn ok(message: String) -> Self {
        Self {
            status: 200,
            message: Some(message),
            error: None,
            data: None,
        }
    }

    fn created(message: String) -> Self {
        Self {
            status: 201,
            message: Some(message),
            error: None,
            data: None,
        }
    }

    fn invalid(error: String) -> Self {
        Self {
            status: 400,
            message: None,
            error: Some(error),
            data: None,
        }
    }

    fn missing(error: String) -> Self {
        Self {
            status: 404,
            message: None,
            error: Some(error),
            data: None,
        }
    }
}

/// A CRUD service over loosely-typed JSON records. Each service is configured
/// with an entity name (used in message strings), the required key set for a
/// valid record, and the key updates match on (`id` for most, `name` for
/// movies, which are addressed by title).
pub struct EntityService {
    entity: &'static str,
    required: &'static [&'static str],
    update_key: &'static str,
    records: Vec<Value>,
}

impl EntityService {
    fn new(
        entity: &'static str,
        required: &'static [&'static str],
        update_key: &'static str,
        records: Vec<Value>,
    ) -> Self {
        Self {
            entity,
            required,
            update_key,
            records,
        }
    }

    pub fn books() -> Self {
        Self::new(
            "Book",
            &["id", "title", "author", "year", "genre"],
            "id",
            vec![
                serde_json::json!({
                    "id": "1",
                    "title": "1984",
                    "author": "George Orwell",
                    "year": 1949,
                    "genre": "Dystopian"
                }),
                serde_json::json!({
                    "id": "2",
                    "title": "To Kill a Mockingbird",
                    "author": "Harper Lee",
                    "year": 1960,
                    "genre": "Fiction"
                }),
                serde_json::json!({
                    "id": "3",
                    "title": "The Great Gatsby",
                    "author": "F. Scott Fitzgerald",
                    "year": 1925,
                    "genre": "Classic"
                }),
            ],
        )
    }

    pub fn games() -> Self {
        Self::new(
            "Game",
            &["id", "title", "genre", "year", "developer", "description"],
            "id",
            vec![
                serde_json::json!({
                    "id": "1",
                    "title": "The Legend of Zelda: Breath of the Wild",
                    "genre": "Action-adventure",
                    "year": 2017,
                    "developer": "Nintendo",
                    "description": "An open-world adventure across Hyrule."
                }),
                serde_json::json!({
                    "id": "2",
                    "title": "God of War",
                    "genre": "Action-adventure",
                    "year": 2018,
                    "developer": "Santa Monica Studio",
                    "description": "An action-adventure game set in Norse mythology."
                }),
                serde_json::json!({
                    "id": "3",
                    "title": "Minecraft",
                    "genre": "Sandbox",
                    "year": 2011,
                    "developer": "Mojang",
                    "description": "A sandbox game about placing blocks."
                }),
            ],
        )
    }

    pub fn movies() -> Self {
        Self::new(
            "Movie",
            &[
                "id",
                "name",
                "genre",
                "year",
                "director",
                "rating",
                "duration",
                "language",
                "desc",
            ],
            "name",
            vec![
                serde_json::json!({
                    "id": "1",
                    "name": "Inception",
                    "genre": "Sci-Fi",
                    "year": 2010,
                    "director": "Christopher Nolan",
                    "rating": 8.8,
                    "duration": 148,
                    "language": "English",
                    "desc": "A thief infiltrates dreams to plant an idea."
                }),
                serde_json::json!({
                    "id": "2",
                    "name": "The Matrix",
                    "genre": "Sci-Fi",
                    "year": 1999,
                    "director": "The Wachowskis",
                    "rating": 8.7,
                    "duration": 136,
                    "language": "English",
                    "desc": "A hacker discovers reality is a simulation."
                }),
                serde_json::json!({
                    "id": "3",
                    "name": "Interstellar",
                    "genre": "Sci-Fi",
                    "year": 2014,
                    "director": "Christopher Nolan",
                    "rating": 8.6,
                    "duration": 169,
                    "language": "English",
                    "desc": "Explorers travel through a wormhole in space."
                }),
            ],
        )
    }

    pub fn list(&self) -> Outcome {
        Outcome::listing(self.records.clone())
    }

    pub fn add(&mut self, record: Value) -> Outcome {
        if !self.is_valid(&record) {
            return Outcome::invalid(format!("Invalid {} Data!", self.entity));
        }
        self.records.push(record);
        Outcome::created(format!("{} added successfully.", self.entity))
    }

    pub fn delete(&mut self, id: &str) -> Outcome {
        let before = self.records.len();
        self.records
            .retain(|record| record.get("id").and_then(Value::as_str) != Some(id));
        if self.records.len() == before {
            return Outcome::missing(format!("{} Not Found!", self.entity));
        }
        Outcome::ok(format!("{} deleted successfully.", self.entity))
    }

    /// Replaces the record whose `update_key` field equals `key`. Payload
    /// validity is checked before existence.
    pub fn update(&mut self, key: &str, record: Value) -> Outcome {
        if !self.is_valid(&record) {
            return Outcome::invalid(format!("Invalid {} Data!", self.entity));
        }
        let found = self.records.iter_mut().find(|existing| {
            existing.get(self.update_key).and_then(Value::as_str) == Some(key)
        });
        match found {
            Some(existing) => {
                *existing = record;
                Outcome::ok(format!("{} updated successfully.", self.entity))
            }
            None => Outcome::missing(format!("{} Not Found!", self.entity)),
        }
    }

    fn is_valid(&self, record: &Value) -> bool {
        match record.as_object() {
            Some(fields) => self.required.iter().all(|key| fields.contains_key(*key)),
            None => false,
        }
    }
}
