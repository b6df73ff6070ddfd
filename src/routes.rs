//! Route table and request dispatch.
//!
//! Routes are matched on the path with the query string, the context path
//! and any trailing slash removed. Handler failures become a 500 response
//! with a short `{"error": ...}` body; the full error, which may carry the
//! rendered statement, only goes to the log.

use std::fmt;
use std::str::FromStr;

use criteria_core::error::{CriteriaError, Result};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::endpoints;
use crate::schema::DemoSchema;
use crate::session::Session;

pub const ALL_ENTITY_COLUMNS_PATH: &str = "/demo/simple_example_return_all_entity_columns";
pub const SPECIFIC_COLUMNS_PATH: &str = "/demo/with_specific_columns";
pub const JOIN_PATH: &str = "/demo/join";

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown HTTP method `{0}`")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// Runs an endpoint and serializes its result.
pub type Handler = fn(&Session<DemoSchema>) -> Result<Value>;

/// One entry of the route table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub handler: Handler,
}

pub static ROUTES: [Route; 3] = [
    Route {
        method: Method::Get,
        path: ALL_ENTITY_COLUMNS_PATH,
        handler: all_entity_columns,
    },
    Route {
        method: Method::Get,
        path: SPECIFIC_COLUMNS_PATH,
        handler: specific_columns,
    },
    Route {
        method: Method::Get,
        path: JOIN_PATH,
        handler: join,
    },
];

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| CriteriaError::Mapping(e.to_string()))
}

fn all_entity_columns(session: &Session<DemoSchema>) -> Result<Value> {
    to_json(endpoints::simple_example_return_all_entity_columns(session)?)
}

fn specific_columns(session: &Session<DemoSchema>) -> Result<Value> {
    to_json(endpoints::with_specific_columns(session)?)
}

fn join(session: &Session<DemoSchema>) -> Result<Value> {
    to_json(endpoints::join(session)?)
}

/// Client-facing summary of a handler failure.
fn failure_message(error: &CriteriaError) -> &'static str {
    match error {
        CriteriaError::NotFound => "record not found",
        CriteriaError::Mapping(_) => "failed to serialize response",
        _ => "database error",
    }
}

/// Status code and JSON body of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16, message: impl fmt::Display) -> Self {
        Self {
            status,
            body: json!({ "error": message.to_string() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Matches request paths against [`ROUTES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    context_path: Option<String>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts the routes below `context_path`, e.g. `/orm-demo`.
    ///
    /// Surrounding whitespace and trailing slashes are ignored, and a
    /// missing leading slash is added. An empty path or `/` mounts at the
    /// root.
    pub fn with_context_path(mut self, context_path: impl AsRef<str>) -> Self {
        let trimmed = context_path.as_ref().trim().trim_end_matches('/');
        self.context_path = match trimmed {
            "" => None,
            path if path.starts_with('/') => Some(path.to_string()),
            path => Some(format!("/{path}")),
        };
        self
    }

    pub fn context_path(&self) -> Option<&str> {
        self.context_path.as_deref()
    }

    pub fn routes(&self) -> &'static [Route] {
        &ROUTES
    }

    /// The path a client requests to reach `route`.
    pub fn full_path(&self, route: &Route) -> String {
        format!("{}{}", self.context_path().unwrap_or_default(), route.path)
    }

    /// Reduces a request path to the form the route table uses, or `None`
    /// when it lies outside the context path.
    fn route_path<'p>(&self, path: &'p str) -> Option<&'p str> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let path = match self.context_path() {
            Some(prefix) => {
                let rest = path.strip_prefix(prefix)?;
                if !rest.is_empty() && !rest.starts_with('/') {
                    return None;
                }
                rest
            }
            None => path,
        };
        match path.trim_end_matches('/') {
            "" => Some("/"),
            path => Some(path),
        }
    }

    pub fn dispatch(&self, session: &Session<DemoSchema>, method: Method, path: &str) -> Response {
        let Some(route_path) = self.route_path(path) else {
            return Response::error(404, format!("no route for {path}"));
        };

        let mut candidates = ROUTES.iter().filter(|route| route.path == route_path).peekable();
        if candidates.peek().is_none() {
            return Response::error(404, format!("no route for {path}"));
        }
        let Some(route) = candidates.find(|route| route.method == method) else {
            return Response::error(405, format!("method {method} not allowed for {path}"));
        };

        match (route.handler)(session) {
            Ok(body) => Response::ok(body),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!(path = %path, error = %e, "request failed");
                Response::error(500, failure_message(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<DemoSchema> {
        let session = Session::open_in_memory(DemoSchema::new()).unwrap();
        session.create().unwrap();
        session
    }

    #[test]
    fn parses_methods_case_insensitively() {
        assert_eq!("get".parse::<Method>(), Ok(Method::Get));
        assert_eq!("DELETE".parse::<Method>(), Ok(Method::Delete));
        assert_eq!(
            "FETCH".parse::<Method>(),
            Err(UnknownMethod("FETCH".to_string()))
        );
    }

    #[test]
    fn context_path_is_normalized() {
        assert_eq!(
            Router::new().with_context_path("orm-demo/").context_path(),
            Some("/orm-demo")
        );
        assert_eq!(Router::new().with_context_path("/").context_path(), None);
        assert_eq!(
            Router::new().with_context_path("/orm-demo").full_path(&ROUTES[2]),
            "/orm-demo/demo/join"
        );
    }

    #[test]
    fn route_path_strips_query_prefix_and_slash() {
        let router = Router::new().with_context_path("/orm-demo");
        assert_eq!(
            router.route_path("/orm-demo/demo/join/?page=1"),
            Some("/demo/join")
        );
        assert_eq!(router.route_path("/orm-demonstration/demo/join"), None);
        assert_eq!(router.route_path("/demo/join"), None);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let response = Router::new().dispatch(&session(), Method::Get, "/demo/missing");
        assert_eq!(response.status, 404);
        assert_eq!(response.body["error"], "no route for /demo/missing");
    }

    #[test]
    fn wrong_method_is_not_allowed() {
        let response = Router::new().dispatch(&session(), Method::Post, JOIN_PATH);
        assert_eq!(response.status, 405);
        assert!(!response.is_success());
    }

    #[test]
    fn storage_failure_is_internal_error() {
        // No tables created.
        let session = Session::open_in_memory(DemoSchema::new()).unwrap();
        let response = Router::new().dispatch(&session, Method::Get, JOIN_PATH);
        assert_eq!(response.status, 500);
        assert_eq!(response.body["error"], "database error");
    }

    #[test]
    fn failure_body_omits_statement_text() {
        let error = CriteriaError::Other(r#"no such table: "item" in SELECT "item"."id""#.into());
        let response = Response::error(500, failure_message(&error));
        let body = response.body.to_string();
        assert!(!body.contains("SELECT"));
        assert_eq!(
            failure_message(&CriteriaError::Mapping("bad".into())),
            "failed to serialize response"
        );
    }

    #[test]
    fn empty_tables_give_empty_arrays() {
        let session = session();
        for route in Router::new().routes() {
            let response = Router::new().dispatch(&session, route.method, route.path);
            assert_eq!(response, Response::ok(json!([])));
        }
    }
}
