//! Loopback backend for gateway tests.
//!
//! Serves canned responses in order from a `tiny_http` server on
//! `127.0.0.1:0` and records every request it sees.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use tasklog_auth::{MemorySessionStore, SessionContext};
use tasklog_client::TasklogClient;
use tasklog_config::ApiConfig;
use tasklog_core::enums::Role;
use tasklog_core::{Session, UserProfile};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path plus query string.
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let Some((_, query)) = self.url.split_once('?') else {
            return Vec::new();
        };
        url_pairs(query)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

fn url_pairs(query: &str) -> Vec<(String, String)> {
    reqwest::Url::parse(&format!("http://x/?{query}"))
        .expect("query parses")
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Canned {
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string().into_bytes(),
        }
    }

    pub fn bytes(body: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: "application/octet-stream",
            body: body.to_vec(),
        }
    }
}

pub struct MockServer {
    server: Arc<tiny_http::Server>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    handle: Option<JoinHandle<()>>,
    base_url: String,
}

impl MockServer {
    /// Answer each incoming request with the next canned response, then 404.
    pub fn start(responses: Vec<Canned>) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind loopback"));
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("ip listener");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                let mut responses = responses.into_iter();
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let authorization = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Authorization"))
                        .map(|h| h.value.as_str().to_string());
                    requests
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(Recorded {
                            method: request.method().to_string(),
                            url: request.url().to_string(),
                            authorization,
                            body,
                        });

                    let canned = responses.next().unwrap_or_else(|| {
                        Canned::json(404, &serde_json::json!({"detail": "Not Found"}))
                    });
                    let header = tiny_http::Header::from_bytes(
                        &b"Content-Type"[..],
                        canned.content_type.as_bytes(),
                    )
                    .expect("header");
                    let response = tiny_http::Response::from_data(canned.body)
                        .with_status_code(canned.status)
                        .with_header(header);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            requests,
            handle: Some(handle),
            base_url: format!("http://127.0.0.1:{port}/api"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().expect("one request")
    }

    /// Client over an in-memory session store holding `session`.
    pub fn client(&self, session: Option<Session>) -> TasklogClient {
        let store = session.map_or_else(MemorySessionStore::new, MemorySessionStore::with_session);
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
            ..ApiConfig::default()
        };
        TasklogClient::new(&config, Arc::new(SessionContext::init(store))).expect("client")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn session(id: i64, role: Role) -> Session {
    Session {
        token: format!("token-{id}"),
        user: UserProfile {
            id,
            name: format!("User {id}"),
            username: format!("user{id}"),
            role,
        },
    }
}

pub fn task_json(id: i64, title: &str, project_id: i64, start: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": 7,
        "created_by": 7,
        "project_id": project_id,
        "task_title": title,
        "task_details": null,
        "date": "2024-03-01",
        "start_time": start,
        "end_time": null,
        "task_type": "Development",
        "status": "In Progress",
        "is_backdated": false,
        "is_approved": false,
        "total_time_minutes": null,
        "reviewer_id": null
    })
}
