//! Purpose: In-memory backing store for the directory REST resources.
//! Exports: `DirectoryStore`, `Category`, `Recipe`, `Destination`, `User`.
//! Role: Owns categories/recipes/destinations/users plus session tokens;
//! the HTTP layer holds one store behind a mutex.
//! Invariants: `_id` values are 24 lowercase hex chars and unique per store.
//! Invariants: Create validates required fields; update merges only the
//! fields present in the payload, and a rejected update applies none of them.
//! Invariants: Recipe/destination responses embed the referenced category
//! object when it still exists.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub step: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    /// Category `_id`; embedded as the full object in responses.
    pub category: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub best_time_to_visit: String,
    pub attractions: Vec<String>,
    pub category: String,
    pub created_at: String,
}

#[derive(Clone, Debug)]
pub struct User {
    pub email: String,
    pub password: String,
}

pub struct DirectoryStore {
    categories: Vec<Category>,
    recipes: Vec<Recipe>,
    destinations: Vec<Destination>,
    users: Vec<User>,
    sessions: HashSet<String>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            recipes: Vec::new(),
            destinations: Vec::new(),
            users: vec![User {
                email: "john.doe@example.com".to_string(),
                password: "password123".to_string(),
            }],
            sessions: HashSet::new(),
        }
    }

    /// Store pre-loaded with the demo fixtures the integration suites expect.
    pub fn seeded() -> Result<Self, Error> {
        let mut store = Self::new();
        store.seed()?;
        Ok(store)
    }

    fn seed(&mut self) -> Result<(), Error> {
        let desserts = self.insert_category("Desserts")?;
        let mains = self.insert_category("Main Dishes")?;
        let cities = self.insert_category("Cities")?;
        let nature = self.insert_category("Nature")?;

        let cookie_ingredients = [
            ("all-purpose flour", "280g"),
            ("baking soda", "1tsp"),
            ("salt", "1tsp"),
            ("butter", "226g"),
            ("granulated sugar", "150g"),
            ("brown sugar", "165g"),
            ("vanilla extract", "1tsp"),
            ("eggs", "2"),
            ("chocolate chips", "340g"),
        ];
        let cookie_steps = [
            "Preheat the oven to 190C.",
            "Whisk flour, baking soda, and salt.",
            "Cream butter with both sugars.",
            "Beat in vanilla and eggs.",
            "Fold in the flour mixture.",
            "Stir in the chocolate chips.",
            "Bake 9 to 11 minutes until golden.",
        ];
        self.insert_recipe(
            "Chocolate Chip Cookies",
            25,
            24,
            cookie_ingredients
                .iter()
                .map(|(name, quantity)| Ingredient {
                    name: name.to_string(),
                    quantity: quantity.to_string(),
                })
                .collect(),
            cookie_steps
                .iter()
                .map(|step| Instruction {
                    step: step.to_string(),
                })
                .collect(),
            desserts.clone(),
        )?;
        self.insert_recipe(
            "Roast Chicken",
            90,
            4,
            vec![
                Ingredient {
                    name: "whole chicken".to_string(),
                    quantity: "1.5kg".to_string(),
                },
                Ingredient {
                    name: "butter".to_string(),
                    quantity: "50g".to_string(),
                },
                Ingredient {
                    name: "lemon".to_string(),
                    quantity: "1".to_string(),
                },
            ],
            vec![
                Instruction {
                    step: "Preheat the oven to 200C.".to_string(),
                },
                Instruction {
                    step: "Rub the chicken with butter.".to_string(),
                },
                Instruction {
                    step: "Roast until the juices run clear.".to_string(),
                },
            ],
            mains,
        )?;

        self.insert_destination(
            "New York City",
            "New York, USA",
            "The largest city in the USA, known for its skyscrapers, culture, and entertainment.",
            "Spring",
            &["Statue of Liberty", "Central Park", "Times Square"],
            cities,
        )?;
        self.insert_destination(
            "Machu Picchu",
            "Cusco Region, Peru",
            "A 15th-century Inca citadel set high in the Andes Mountains.",
            "May",
            &["Inca Trail", "Sun Gate", "Temple of the Sun"],
            nature.clone(),
        )?;
        self.insert_destination(
            "Yellowstone National Park",
            "Wyoming, USA",
            "The first national park in the world, famous for its geysers and wildlife.",
            "Summer",
            &["Old Faithful", "Grand Prismatic Spring", "Lamar Valley"],
            nature,
        )?;
        Ok(())
    }

    // --- auth ---

    pub fn login(&mut self, email: &str, password: &str) -> Result<String, Error> {
        let known = self
            .users
            .iter()
            .any(|user| user.email == email && user.password == password);
        if !known {
            return Err(Error::new(ErrorKind::Permission).with_message("invalid email or password"));
        }
        let token = random_hex(16)?;
        self.sessions.insert(token.clone());
        Ok(token)
    }

    pub fn is_session(&self, token: &str) -> bool {
        self.sessions.contains(token)
    }

    // --- categories ---

    pub fn categories(&self) -> Vec<Value> {
        self.categories
            .iter()
            .map(|category| serde_json::to_value(category).unwrap_or(Value::Null))
            .collect()
    }

    pub fn category(&self, id: &str) -> Option<Value> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .and_then(|category| serde_json::to_value(category).ok())
    }

    pub fn create_category(&mut self, payload: &Value) -> Result<Value, Error> {
        let name = require_str(payload, "name").ok_or_else(|| invalid("Category"))?;
        let id = self.insert_category(&name)?;
        self.category(&id)
            .ok_or_else(|| Error::new(ErrorKind::Internal).with_message("category vanished"))
    }

    pub fn update_category(&mut self, id: &str, payload: &Value) -> Result<Value, Error> {
        let category = self
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or_else(|| not_found("Category", id))?;
        if let Some(name) = payload.get("name").and_then(Value::as_str) {
            category.name = name.to_string();
        }
        serde_json::to_value(&*category).map_err(encode_error)
    }

    pub fn delete_category(&mut self, id: &str) -> Result<Value, Error> {
        let index = self
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| not_found("Category", id))?;
        let removed = self.categories.remove(index);
        serde_json::to_value(&removed).map_err(encode_error)
    }

    fn insert_category(&mut self, name: &str) -> Result<String, Error> {
        let category = Category {
            id: new_id()?,
            name: name.to_string(),
            created_at: now_rfc3339()?,
        };
        let id = category.id.clone();
        self.categories.push(category);
        Ok(id)
    }

    // --- recipes ---

    pub fn recipes(&self) -> Vec<Value> {
        self.recipes
            .iter()
            .map(|recipe| self.populate_recipe(recipe))
            .collect()
    }

    pub fn recipe(&self, id: &str) -> Option<Value> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .map(|recipe| self.populate_recipe(recipe))
    }

    pub fn create_recipe(&mut self, payload: &Value) -> Result<Value, Error> {
        let title = require_str(payload, "title").ok_or_else(|| invalid("Recipe"))?;
        let cooking_time = payload
            .get("cookingTime")
            .and_then(Value::as_u64)
            .and_then(|raw| u32::try_from(raw).ok())
            .ok_or_else(|| invalid("Recipe"))?;
        let servings = payload
            .get("servings")
            .and_then(Value::as_u64)
            .and_then(|raw| u32::try_from(raw).ok())
            .ok_or_else(|| invalid("Recipe"))?;
        let ingredients: Vec<Ingredient> = payload
            .get("ingredients")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .ok_or_else(|| invalid("Recipe"))?;
        let instructions: Vec<Instruction> = payload
            .get("instructions")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .ok_or_else(|| invalid("Recipe"))?;
        let category = require_str(payload, "category").ok_or_else(|| invalid("Recipe"))?;

        let id = self.insert_recipe(
            &title,
            cooking_time,
            servings,
            ingredients,
            instructions,
            category,
        )?;
        self.recipe(&id)
            .ok_or_else(|| Error::new(ErrorKind::Internal).with_message("recipe vanished"))
    }

    /// Merges the provided fields into the recipe. Every provided field is
    /// decoded before any is applied, so a rejected payload leaves the
    /// record untouched.
    pub fn update_recipe(&mut self, id: &str, payload: &Value) -> Result<Value, Error> {
        let recipe = self
            .recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| not_found("Recipe", id))?;

        let title = payload
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string);
        let cooking_time = match payload.get("cookingTime").and_then(Value::as_u64) {
            Some(raw) => Some(u32::try_from(raw).map_err(|_| invalid("Recipe"))?),
            None => None,
        };
        let servings = match payload.get("servings").and_then(Value::as_u64) {
            Some(raw) => Some(u32::try_from(raw).map_err(|_| invalid("Recipe"))?),
            None => None,
        };
        let ingredients: Option<Vec<Ingredient>> = payload
            .get("ingredients")
            .map(|value| serde_json::from_value(value.clone()).map_err(|_| invalid("Recipe")))
            .transpose()?;
        let instructions: Option<Vec<Instruction>> = payload
            .get("instructions")
            .map(|value| serde_json::from_value(value.clone()).map_err(|_| invalid("Recipe")))
            .transpose()?;
        let category = payload
            .get("category")
            .and_then(Value::as_str)
            .map(str::to_string);

        if let Some(title) = title {
            recipe.title = title;
        }
        if let Some(cooking_time) = cooking_time {
            recipe.cooking_time = cooking_time;
        }
        if let Some(servings) = servings {
            recipe.servings = servings;
        }
        if let Some(ingredients) = ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = instructions {
            recipe.instructions = instructions;
        }
        if let Some(category) = category {
            recipe.category = category;
        }
        let updated = recipe.clone();
        Ok(self.populate_recipe(&updated))
    }

    pub fn delete_recipe(&mut self, id: &str) -> Result<Value, Error> {
        let index = self
            .recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or_else(|| not_found("Recipe", id))?;
        let removed = self.recipes.remove(index);
        Ok(self.populate_recipe(&removed))
    }

    fn insert_recipe(
        &mut self,
        title: &str,
        cooking_time: u32,
        servings: u32,
        ingredients: Vec<Ingredient>,
        instructions: Vec<Instruction>,
        category: String,
    ) -> Result<String, Error> {
        let recipe = Recipe {
            id: new_id()?,
            title: title.to_string(),
            cooking_time,
            servings,
            ingredients,
            instructions,
            category,
            created_at: now_rfc3339()?,
        };
        let id = recipe.id.clone();
        self.recipes.push(recipe);
        Ok(id)
    }

    fn populate_recipe(&self, recipe: &Recipe) -> Value {
        let mut value = serde_json::to_value(recipe).unwrap_or(Value::Null);
        embed_category(&mut value, &self.categories);
        value
    }

    // --- destinations ---

    pub fn destinations(&self) -> Vec<Value> {
        self.destinations
            .iter()
            .map(|destination| self.populate_destination(destination))
            .collect()
    }

    pub fn destination(&self, id: &str) -> Option<Value> {
        self.destinations
            .iter()
            .find(|destination| destination.id == id)
            .map(|destination| self.populate_destination(destination))
    }

    pub fn create_destination(&mut self, payload: &Value) -> Result<Value, Error> {
        let name = require_str(payload, "name").ok_or_else(|| invalid("Destination"))?;
        let location = require_str(payload, "location").ok_or_else(|| invalid("Destination"))?;
        let description =
            require_str(payload, "description").ok_or_else(|| invalid("Destination"))?;
        let best_time =
            require_str(payload, "bestTimeToVisit").ok_or_else(|| invalid("Destination"))?;
        let attractions: Vec<String> = payload
            .get("attractions")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .ok_or_else(|| invalid("Destination"))?;
        let category = require_str(payload, "category").ok_or_else(|| invalid("Destination"))?;

        let attractions_refs: Vec<&str> =
            attractions.iter().map(String::as_str).collect();
        let id = self.insert_destination(
            &name,
            &location,
            &description,
            &best_time,
            &attractions_refs,
            category,
        )?;
        self.destination(&id)
            .ok_or_else(|| Error::new(ErrorKind::Internal).with_message("destination vanished"))
    }

    /// Merges the provided fields into the destination. Every provided field
    /// is decoded before any is applied, so a rejected payload leaves the
    /// record untouched.
    pub fn update_destination(&mut self, id: &str, payload: &Value) -> Result<Value, Error> {
        let destination = self
            .destinations
            .iter_mut()
            .find(|destination| destination.id == id)
            .ok_or_else(|| not_found("Destination", id))?;

        let name = payload
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let location = payload
            .get("location")
            .and_then(Value::as_str)
            .map(str::to_string);
        let description = payload
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);
        let best_time = payload
            .get("bestTimeToVisit")
            .and_then(Value::as_str)
            .map(str::to_string);
        let attractions: Option<Vec<String>> = payload
            .get("attractions")
            .map(|value| serde_json::from_value(value.clone()).map_err(|_| invalid("Destination")))
            .transpose()?;
        let category = payload
            .get("category")
            .and_then(Value::as_str)
            .map(str::to_string);

        if let Some(name) = name {
            destination.name = name;
        }
        if let Some(location) = location {
            destination.location = location;
        }
        if let Some(description) = description {
            destination.description = description;
        }
        if let Some(best_time) = best_time {
            destination.best_time_to_visit = best_time;
        }
        if let Some(attractions) = attractions {
            destination.attractions = attractions;
        }
        if let Some(category) = category {
            destination.category = category;
        }
        let updated = destination.clone();
        Ok(self.populate_destination(&updated))
    }

    pub fn delete_destination(&mut self, id: &str) -> Result<Value, Error> {
        let index = self
            .destinations
            .iter()
            .position(|destination| destination.id == id)
            .ok_or_else(|| not_found("Destination", id))?;
        let removed = self.destinations.remove(index);
        Ok(self.populate_destination(&removed))
    }

    fn insert_destination(
        &mut self,
        name: &str,
        location: &str,
        description: &str,
        best_time_to_visit: &str,
        attractions: &[&str],
        category: String,
    ) -> Result<String, Error> {
        let destination = Destination {
            id: new_id()?,
            name: name.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            best_time_to_visit: best_time_to_visit.to_string(),
            attractions: attractions.iter().map(|a| a.to_string()).collect(),
            category,
            created_at: now_rfc3339()?,
        };
        let id = destination.id.clone();
        self.destinations.push(destination);
        Ok(id)
    }

    fn populate_destination(&self, destination: &Destination) -> Value {
        let mut value = serde_json::to_value(destination).unwrap_or(Value::Null);
        embed_category(&mut value, &self.categories);
        value
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn embed_category(value: &mut Value, categories: &[Category]) {
    let Some(id) = value.get("category").and_then(Value::as_str) else {
        return;
    };
    let embedded = categories
        .iter()
        .find(|category| category.id == id)
        .and_then(|category| serde_json::to_value(category).ok());
    if let Some(embedded) = embedded {
        value["category"] = embedded;
    }
}

fn require_str(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn invalid(resource: &str) -> Error {
    Error::new(ErrorKind::Invalid).with_message(format!("Invalid {resource} Data!"))
}

fn not_found(resource: &str, id: &str) -> Error {
    Error::new(ErrorKind::NotFound)
        .with_message(format!("{resource} Not Found!"))
        .with_id(id)
}

fn encode_error(err: serde_json::Error) -> Error {
    Error::new(ErrorKind::Internal)
        .with_message("failed to encode entity")
        .with_source(err)
}

fn new_id() -> Result<String, Error> {
    random_hex(12)
}

fn random_hex(bytes: usize) -> Result<String, Error> {
    let mut buf = vec![0u8; bytes];
    getrandom::fill(&mut buf).map_err(|err| {
        Error::new(ErrorKind::Internal).with_message(format!("random source unavailable: {err}"))
    })?;
    let mut out = String::with_capacity(bytes * 2);
    for byte in buf {
        out.push_str(&format!("{byte:02x}"));
    }
    Ok(out)
}

fn now_rfc3339() -> Result<String, Error> {
    use time::format_description::well_known::Rfc3339;
    time::OffsetDateTime::now_utc().format(&Rfc3339).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("timestamp format failed")
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::DirectoryStore;
    use crate::core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn seeded_fixtures_match_contract() {
        let store = DirectoryStore::seeded().expect("store");
        let recipes = store.recipes();
        let cookies = recipes
            .iter()
            .find(|recipe| recipe["title"] == "Chocolate Chip Cookies")
            .expect("cookies");
        assert_eq!(cookies["cookingTime"], json!(25));
        assert_eq!(cookies["servings"], json!(24));
        assert_eq!(cookies["ingredients"].as_array().expect("arr").len(), 9);
        assert_eq!(cookies["instructions"].as_array().expect("arr").len(), 7);

        let destinations = store.destinations();
        for name in [
            "New York City",
            "Machu Picchu",
            "Yellowstone National Park",
        ] {
            assert!(
                destinations.iter().any(|dest| dest["name"] == name),
                "missing {name}"
            );
        }
    }

    #[test]
    fn login_issues_session_tokens() {
        let mut store = DirectoryStore::new();
        let token = store
            .login("john.doe@example.com", "password123")
            .expect("token");
        assert!(store.is_session(&token));

        let err = store
            .login("john.doe@example.com", "wrong")
            .expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Permission);
    }

    #[test]
    fn category_lifecycle() {
        let mut store = DirectoryStore::new();
        let created = store
            .create_category(&json!({"name": "Soups"}))
            .expect("create");
        let id = created["_id"].as_str().expect("id").to_string();
        assert_eq!(id.len(), 24);

        let updated = store
            .update_category(&id, &json!({"name": "Soups_updated"}))
            .expect("update");
        assert_eq!(updated["name"], "Soups_updated");

        store.delete_category(&id).expect("delete");
        assert!(store.category(&id).is_none());
        assert_eq!(
            store.delete_category(&id).expect_err("err").kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn create_category_requires_name() {
        let mut store = DirectoryStore::new();
        let err = store.create_category(&json!({})).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Invalid);
        assert_eq!(err.message(), Some("Invalid Category Data!"));
    }

    #[test]
    fn recipe_responses_embed_category() {
        let mut store = DirectoryStore::seeded().expect("store");
        let category_id = store.categories()[0]["_id"]
            .as_str()
            .expect("id")
            .to_string();
        let created = store
            .create_recipe(&json!({
                "title": "Test Recipe",
                "cookingTime": 50,
                "servings": 4,
                "ingredients": [{"name": "Test", "quantity": "10g"}],
                "instructions": [{"step": "test"}],
                "category": category_id,
            }))
            .expect("create");
        assert_eq!(created["category"]["_id"].as_str(), Some(category_id.as_str()));

        let fetched = store
            .recipe(created["_id"].as_str().expect("id"))
            .expect("fetch");
        assert_eq!(fetched["title"], "Test Recipe");
        assert_eq!(fetched["category"]["_id"].as_str(), Some(category_id.as_str()));
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut store = DirectoryStore::seeded().expect("store");
        let recipes = store.recipes();
        let id = recipes[0]["_id"].as_str().expect("id").to_string();
        let before_servings = recipes[0]["servings"].clone();

        let updated = store
            .update_recipe(&id, &json!({"title": "Renamed"}))
            .expect("update");
        assert_eq!(updated["title"], "Renamed");
        assert_eq!(updated["servings"], before_servings);
    }

    #[test]
    fn rejected_recipe_update_applies_nothing() {
        let mut store = DirectoryStore::seeded().expect("store");
        let recipes = store.recipes();
        let cookies = recipes
            .iter()
            .find(|recipe| recipe["title"] == "Chocolate Chip Cookies")
            .expect("cookies");
        let id = cookies["_id"].as_str().expect("id").to_string();

        let err = store
            .update_recipe(&id, &json!({"title": "Mutated", "ingredients": "garbage"}))
            .expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Invalid);

        let after = store.recipe(&id).expect("recipe");
        assert_eq!(after["title"], "Chocolate Chip Cookies");
        assert_eq!(after["ingredients"].as_array().expect("arr").len(), 9);
    }

    #[test]
    fn rejected_destination_update_applies_nothing() {
        let mut store = DirectoryStore::seeded().expect("store");
        let destinations = store.destinations();
        let nyc = destinations
            .iter()
            .find(|destination| destination["name"] == "New York City")
            .expect("nyc");
        let id = nyc["_id"].as_str().expect("id").to_string();

        let err = store
            .update_destination(&id, &json!({"name": "Mutated", "attractions": "garbage"}))
            .expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Invalid);

        let after = store.destination(&id).expect("destination");
        assert_eq!(after["name"], "New York City");
        assert_eq!(after["attractions"].as_array().expect("arr").len(), 3);
    }

    #[test]
    fn recipe_counters_reject_out_of_range_values() {
        let mut store = DirectoryStore::seeded().expect("store");
        let category_id = store.categories()[0]["_id"]
            .as_str()
            .expect("id")
            .to_string();

        let err = store
            .create_recipe(&json!({
                "title": "Overflow",
                "cookingTime": 4_294_967_321_u64,
                "servings": 4,
                "ingredients": [{"name": "x", "quantity": "1"}],
                "instructions": [{"step": "x"}],
                "category": category_id,
            }))
            .expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Invalid);
        assert_eq!(err.message(), Some("Invalid Recipe Data!"));

        let recipes = store.recipes();
        let id = recipes[0]["_id"].as_str().expect("id").to_string();
        let before = recipes[0]["servings"].clone();
        let err = store
            .update_recipe(&id, &json!({"servings": 4_294_967_321_u64}))
            .expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Invalid);
        assert_eq!(store.recipe(&id).expect("recipe")["servings"], before);
    }

    #[test]
    fn destination_validation_and_not_found() {
        let mut store = DirectoryStore::seeded().expect("store");
        let err = store
            .create_destination(&json!({"name": "Nowhere"}))
            .expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Invalid);
        assert_eq!(err.message(), Some("Invalid Destination Data!"));

        let err = store
            .update_destination("000000000000000000000000", &json!({"name": "X"}))
            .expect_err("err");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), Some("Destination Not Found!"));
    }
}
