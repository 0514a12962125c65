//! Purpose: End-to-end tests for the directory HTTP server and client.
//! Exports: None (integration test module).
//! Role: Validate resource CRUD, auth, and error propagation across TCP.
//! Invariants: Uses a loopback-only server seeded with demo fixtures.
//! Invariants: Bounded waits avoid test flakiness.
//! Invariants: Server processes are cleaned up on drop.

use curio::api::{ErrorKind, RemoteClient};
use serde_json::json;
use std::io::Read;
use std::net::{SocketAddr, TcpListener};
use std::process::{Child, Command, Stdio};
use std::sync::{Mutex, MutexGuard};
use std::thread::sleep;
use std::time::{Duration, Instant};

type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

static SERVER_LOCK: Mutex<()> = Mutex::new(());

const DEMO_EMAIL: &str = "john.doe@example.com";
const DEMO_PASSWORD: &str = "password123";

struct TestServer {
    child: Child,
    base_url: String,
    _server_guard: MutexGuard<'static, ()>,
}

impl TestServer {
    fn start() -> TestResult<Self> {
        Self::start_with_cors(&[])
    }

    fn start_with_cors(cors_origins: &[&str]) -> TestResult<Self> {
        let guard = SERVER_LOCK
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        let mut last_err: Option<Box<dyn std::error::Error>> = None;
        for _attempt in 0..3 {
            let port = pick_port()?;
            let bind = format!("127.0.0.1:{port}");
            let base_url = format!("http://{bind}");

            let mut command = Command::new(env!("CARGO_BIN_EXE_curio"));
            command
                .arg("serve")
                .arg("--bind")
                .arg(&bind)
                .stdout(Stdio::null())
                .stderr(Stdio::piped());
            for origin in cors_origins {
                command.arg("--cors-origin").arg(origin);
            }
            let mut child = command.spawn()?;

            match wait_for_server(&mut child, bind.parse()?) {
                Ok(()) => {
                    return Ok(Self {
                        child,
                        base_url,
                        _server_guard: guard,
                    });
                }
                Err(err) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    last_err = Some(err);
                    sleep(Duration::from_millis(30));
                }
            }
        }

        Err(last_err.unwrap_or_else(|| "server failed to start".into()))
    }

    fn client(&self) -> TestResult<RemoteClient> {
        Ok(RemoteClient::new(self.base_url.clone())?)
    }

    fn authed_client(&self) -> TestResult<RemoteClient> {
        let client = self.client()?;
        let token = client.login(DEMO_EMAIL, DEMO_PASSWORD)?;
        Ok(client.with_token(token))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[test]
fn seeded_recipes_match_fixtures() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.client()?;

    let recipes = client.list_recipes()?;
    assert_eq!(recipes.len(), 2);
    let cookies = recipes
        .iter()
        .find(|recipe| recipe["title"] == "Chocolate Chip Cookies")
        .ok_or("missing cookies fixture")?;
    assert_eq!(cookies["cookingTime"], json!(25));
    assert_eq!(cookies["servings"], json!(24));
    assert_eq!(cookies["ingredients"].as_array().ok_or("arr")?.len(), 9);
    assert_eq!(cookies["instructions"].as_array().ok_or("arr")?.len(), 7);

    // Responses embed the referenced category as a full object.
    assert_eq!(cookies["category"]["name"], "Desserts");
    let category_id = cookies["category"]["_id"].as_str().ok_or("id")?;
    assert_eq!(category_id.len(), 24);
    Ok(())
}

#[test]
fn recipe_crud_roundtrip() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.authed_client()?;

    let category_id = client.list_categories()?[0]["_id"]
        .as_str()
        .ok_or("category id")?
        .to_string();
    let created = client.create_recipe(&json!({
        "title": "Lemon Tart",
        "cookingTime": 45,
        "servings": 8,
        "ingredients": [
            {"name": "lemons", "quantity": "4"},
            {"name": "sugar", "quantity": "200g"}
        ],
        "instructions": [{"step": "Bake the base."}, {"step": "Add the filling."}],
        "category": category_id,
    }))?;
    let id = created["_id"].as_str().ok_or("id")?.to_string();
    assert_eq!(created["title"], "Lemon Tart");
    assert_eq!(
        created["category"]["_id"].as_str(),
        Some(category_id.as_str())
    );

    let fetched = client.get_recipe(&id)?.ok_or("missing recipe")?;
    assert_eq!(fetched["title"], "Lemon Tart");
    assert_eq!(fetched["servings"], json!(8));

    let updated = client.update_recipe(&id, &json!({"title": "Lemon Tart v2", "servings": 10}))?;
    assert_eq!(updated["title"], "Lemon Tart v2");
    assert_eq!(updated["servings"], json!(10));
    assert_eq!(updated["cookingTime"], json!(45));

    client.delete_recipe(&id)?;
    assert!(client.get_recipe(&id)?.is_none());
    Ok(())
}

#[test]
fn seeded_destinations_match_fixtures() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.client()?;

    let destinations = client.list_destinations()?;
    assert_eq!(destinations.len(), 3);
    let nyc = destinations
        .iter()
        .find(|destination| destination["name"] == "New York City")
        .ok_or("missing New York City")?;
    assert_eq!(nyc["location"], "New York, USA");
    assert_eq!(
        nyc["description"],
        "The largest city in the USA, known for its skyscrapers, culture, and entertainment."
    );
    assert!(nyc["attractions"].as_array().ok_or("arr")?.len() >= 3);
    Ok(())
}

#[test]
fn destination_crud_roundtrip() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.authed_client()?;

    let category_id = client.list_categories()?[0]["_id"]
        .as_str()
        .ok_or("category id")?
        .to_string();
    let created = client.create_destination(&json!({
        "name": "Kyoto",
        "location": "Kansai, Japan",
        "description": "The former imperial capital, famous for temples and gardens.",
        "bestTimeToVisit": "April",
        "attractions": ["Fushimi Inari", "Kinkaku-ji"],
        "category": category_id,
    }))?;
    let id = created["_id"].as_str().ok_or("id")?.to_string();
    assert_eq!(created["name"], "Kyoto");

    let machu = client
        .list_destinations()?
        .into_iter()
        .find(|destination| destination["name"] == "Machu Picchu")
        .ok_or("missing Machu Picchu")?;
    let machu_id = machu["_id"].as_str().ok_or("id")?.to_string();
    let updated = client.update_destination(&machu_id, &json!({"bestTimeToVisit": "June"}))?;
    assert_eq!(updated["bestTimeToVisit"], "June");
    assert_eq!(updated["name"], "Machu Picchu");

    let yellowstone = client
        .list_destinations()?
        .into_iter()
        .find(|destination| destination["name"] == "Yellowstone National Park")
        .ok_or("missing Yellowstone")?;
    let yellowstone_id = yellowstone["_id"].as_str().ok_or("id")?.to_string();
    client.delete_destination(&yellowstone_id)?;
    assert!(client.get_destination(&yellowstone_id)?.is_none());

    client.delete_destination(&id)?;
    Ok(())
}

#[test]
fn category_lifecycle_over_http() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.authed_client()?;

    let seeded = client.list_categories()?;
    assert_eq!(seeded.len(), 4);

    let created = client.create_category(&json!({"name": "Soups"}))?;
    let id = created["_id"].as_str().ok_or("id")?.to_string();
    assert_eq!(created["name"], "Soups");
    assert!(created["createdAt"].as_str().ok_or("createdAt")?.contains('T'));

    let updated = client.update_category(&id, &json!({"name": "Soups_updated"}))?;
    assert_eq!(updated["name"], "Soups_updated");

    client.delete_category(&id)?;
    assert!(client.get_category(&id)?.is_none());

    let err = client.delete_category(&id).expect_err("missing category");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.message(), Some("Category Not Found!"));
    Ok(())
}

#[test]
fn get_missing_entity_resolves_to_none() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.client()?;

    assert!(client.get_category("000000000000000000000000")?.is_none());
    assert!(client.get_recipe("000000000000000000000000")?.is_none());
    assert!(client.get_destination("000000000000000000000000")?.is_none());
    Ok(())
}

#[test]
fn mutations_require_bearer_token() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.client()?;

    let err = client
        .create_category(&json!({"name": "Nope"}))
        .expect_err("unauthenticated create");
    assert_eq!(err.kind(), ErrorKind::Permission);

    let stale = server.client()?.with_token("deadbeefdeadbeefdeadbeef");
    let err = stale
        .create_category(&json!({"name": "Nope"}))
        .expect_err("stale token");
    assert_eq!(err.kind(), ErrorKind::Permission);

    // Reads stay open.
    assert!(!client.list_categories()?.is_empty());
    Ok(())
}

#[test]
fn invalid_payloads_are_rejected() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.authed_client()?;

    let err = client
        .create_recipe(&json!({"title": "No fields"}))
        .expect_err("invalid recipe");
    assert_eq!(err.kind(), ErrorKind::Invalid);
    assert_eq!(err.message(), Some("Invalid Recipe Data!"));

    let err = client
        .create_destination(&json!({"name": "Nowhere"}))
        .expect_err("invalid destination");
    assert_eq!(err.kind(), ErrorKind::Invalid);
    assert_eq!(err.message(), Some("Invalid Destination Data!"));
    Ok(())
}

#[test]
fn cors_allows_only_configured_origins() -> TestResult<()> {
    let origin = "http://localhost:5173";
    let server = TestServer::start_with_cors(&[origin])?;
    let url = format!("{}/category", server.base_url);

    let resp = ureq::get(&url).set("Origin", origin).call()?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("access-control-allow-origin"), Some(origin));

    let resp = ureq::get(&url)
        .set("Origin", "http://evil.example")
        .call()?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("access-control-allow-origin"), None);
    Ok(())
}

#[test]
fn cors_is_absent_without_configured_origins() -> TestResult<()> {
    let server = TestServer::start()?;
    let url = format!("{}/category", server.base_url);

    let resp = ureq::get(&url)
        .set("Origin", "http://localhost:5173")
        .call()?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("access-control-allow-origin"), None);
    Ok(())
}

#[test]
fn login_rejects_bad_credentials() -> TestResult<()> {
    let server = TestServer::start()?;
    let client = server.client()?;

    let err = client
        .login(DEMO_EMAIL, "wrong-password")
        .expect_err("bad credentials");
    assert_eq!(err.kind(), ErrorKind::Permission);
    Ok(())
}

fn pick_port() -> TestResult<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(port)
}

fn wait_for_server(child: &mut Child, addr: SocketAddr) -> TestResult<()> {
    let url = format!("http://{addr}/healthz");
    let start = Instant::now();
    loop {
        if let Ok(resp) = ureq::get(&url).call() {
            if resp.status() == 200 {
                return Ok(());
            }
        }
        if let Some(status) = child.try_wait()? {
            let mut stderr = String::new();
            if let Some(mut pipe) = child.stderr.take() {
                let _ = pipe.read_to_string(&mut stderr);
            }
            let detail = stderr.trim();
            return Err(format!(
                "server exited before ready (status: {status}, stderr: {})",
                if detail.is_empty() { "<empty>" } else { detail }
            )
            .into());
        }
        if start.elapsed() > Duration::from_secs(8) {
            return Err("server did not start in time".into());
        }
        sleep(Duration::from_millis(20));
    }
}
