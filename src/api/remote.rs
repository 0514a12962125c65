//! Purpose: Provide a blocking HTTP client for the directory REST contract.
//! Exports: `RemoteClient`.
//! Role: Transport client that mirrors the local directory operations.
//! Invariants: Base URLs use http/https and carry no path.
//! Invariants: A GET body of literal `null` resolves to `Ok(None)`.
//! Invariants: Error envelopes (`{"error": ...}`) round-trip into `Error`
//! values with kinds derived from the HTTP status.
use std::sync::Arc;

use serde_json::{Value, json};
use url::Url;

use crate::core::error::{Error, ErrorKind};

type ApiResult<T> = Result<T, Error>;

#[derive(Clone)]
pub struct RemoteClient {
    inner: Arc<RemoteClientInner>,
}

struct RemoteClientInner {
    base_url: Url,
    token: Option<String>,
    agent: ureq::Agent,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        let agent = ureq::AgentBuilder::new().build();
        Ok(Self {
            inner: Arc::new(RemoteClientInner {
                base_url,
                token: None,
                agent,
            }),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        if let Some(inner) = Arc::get_mut(&mut self.inner) {
            inner.token = Some(token.into());
        } else {
            self.inner = Arc::new(RemoteClientInner {
                base_url: self.inner.base_url.clone(),
                token: Some(token.into()),
                agent: self.inner.agent.clone(),
            });
        }
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Exchanges credentials for a bearer token. The token is returned rather
    /// than installed; pair with [`RemoteClient::with_token`].
    pub fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        let url = build_url(&self.inner.base_url, &["user", "login"])?;
        let body = json!({ "email": email, "password": password });
        let response = self.request_json("POST", &url, Some(&body))?;
        response
            .get("accessToken")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::new(ErrorKind::Internal).with_message("login response missing accessToken")
            })
    }

    // --- categories ---

    pub fn list_categories(&self) -> ApiResult<Vec<Value>> {
        self.list("category")
    }

    pub fn get_category(&self, id: &str) -> ApiResult<Option<Value>> {
        self.get("category", id)
    }

    pub fn create_category(&self, payload: &Value) -> ApiResult<Value> {
        self.create("category", payload)
    }

    pub fn update_category(&self, id: &str, payload: &Value) -> ApiResult<Value> {
        self.update("category", id, payload)
    }

    pub fn delete_category(&self, id: &str) -> ApiResult<Value> {
        self.delete("category", id)
    }

    // --- recipes ---

    pub fn list_recipes(&self) -> ApiResult<Vec<Value>> {
        self.list("recipe")
    }

    pub fn get_recipe(&self, id: &str) -> ApiResult<Option<Value>> {
        self.get("recipe", id)
    }

    pub fn create_recipe(&self, payload: &Value) -> ApiResult<Value> {
        self.create("recipe", payload)
    }

    pub fn update_recipe(&self, id: &str, payload: &Value) -> ApiResult<Value> {
        self.update("recipe", id, payload)
    }

    pub fn delete_recipe(&self, id: &str) -> ApiResult<Value> {
        self.delete("recipe", id)
    }

    // --- destinations ---

    pub fn list_destinations(&self) -> ApiResult<Vec<Value>> {
        self.list("destination")
    }

    pub fn get_destination(&self, id: &str) -> ApiResult<Option<Value>> {
        self.get("destination", id)
    }

    pub fn create_destination(&self, payload: &Value) -> ApiResult<Value> {
        self.create("destination", payload)
    }

    pub fn update_destination(&self, id: &str, payload: &Value) -> ApiResult<Value> {
        self.update("destination", id, payload)
    }

    pub fn delete_destination(&self, id: &str) -> ApiResult<Value> {
        self.delete("destination", id)
    }

    // --- shared plumbing ---

    fn list(&self, resource: &str) -> ApiResult<Vec<Value>> {
        let url = build_url(&self.inner.base_url, &[resource])?;
        let value = self.request_json("GET", &url, None)?;
        value.as_array().cloned().ok_or_else(|| {
            Error::new(ErrorKind::Internal).with_message("expected a JSON array response")
        })
    }

    fn get(&self, resource: &str, id: &str) -> ApiResult<Option<Value>> {
        let url = build_url(&self.inner.base_url, &[resource, id])?;
        let value = self.request_json("GET", &url, None)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(value))
    }

    fn create(&self, resource: &str, payload: &Value) -> ApiResult<Value> {
        let url = build_url(&self.inner.base_url, &[resource])?;
        self.request_json("POST", &url, Some(payload))
    }

    fn update(&self, resource: &str, id: &str, payload: &Value) -> ApiResult<Value> {
        let url = build_url(&self.inner.base_url, &[resource, id])?;
        self.request_json("PUT", &url, Some(payload))
    }

    fn delete(&self, resource: &str, id: &str) -> ApiResult<Value> {
        let url = build_url(&self.inner.base_url, &[resource, id])?;
        self.request_json("DELETE", &url, None)
    }

    fn request_json(&self, method: &str, url: &Url, body: Option<&Value>) -> ApiResult<Value> {
        let request = self.request(method, url).set("Accept", "application/json");
        let response = match body {
            Some(body) => {
                let payload = serde_json::to_string(body).map_err(|err| {
                    Error::new(ErrorKind::Internal)
                        .with_message("failed to encode request json")
                        .with_source(err)
                })?;
                request
                    .set("Content-Type", "application/json")
                    .send_string(&payload)
            }
            None => request.call(),
        };

        match response {
            Ok(resp) => read_json_response(resp),
            Err(ureq::Error::Status(code, resp)) => Err(parse_error_response(code, resp)),
            Err(ureq::Error::Transport(err)) => Err(Error::new(ErrorKind::Io)
                .with_message("request failed")
                .with_source(err)),
        }
    }

    fn request(&self, method: &str, url: &Url) -> ureq::Request {
        let mut request = self.inner.agent.request(method, url.as_str());
        if let Some(token) = &self.inner.token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }
        request
    }
}

fn normalize_base_url(raw: String) -> ApiResult<Url> {
    let mut url = Url::parse(&raw).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid remote base url")
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("remote base url must use http or https scheme"));
    }
    if url.path() != "/" && !url.path().is_empty() {
        return Err(
            Error::new(ErrorKind::Usage).with_message("remote base url must not include a path")
        );
    }
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn build_url(base_url: &Url, segments: &[&str]) -> ApiResult<Url> {
    let mut url = base_url.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            Error::new(ErrorKind::Usage).with_message("remote base url cannot be a base")
        })?;
        path.clear();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}

fn read_json_response(response: ureq::Response) -> ApiResult<Value> {
    let body = response.into_string().map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read response body")
            .with_source(err)
    })?;
    if body.trim() == "null" {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("invalid response json")
            .with_source(err)
    })
}

fn parse_error_response(status: u16, response: ureq::Response) -> Error {
    let kind = error_kind_from_status(status);
    let body = response.into_string().unwrap_or_default();
    if let Ok(envelope) = serde_json::from_str::<Value>(&body) {
        if let Some(message) = envelope.get("error").and_then(Value::as_str) {
            return Error::new(kind).with_message(message);
        }
    }
    Error::new(kind).with_message(format!("remote error status {status}"))
}

fn error_kind_from_status(status: u16) -> ErrorKind {
    match status {
        400 | 413 | 422 => ErrorKind::Invalid,
        401 | 403 => ErrorKind::Permission,
        404 => ErrorKind::NotFound,
        500..=599 => ErrorKind::Internal,
        _ => ErrorKind::Io,
    }
}
