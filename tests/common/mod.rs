//! Local stand-in for PokeAPI used by the integration tests.
//!
//! Binds a rouille server on an ephemeral port and records every requested
//! URL so tests can assert on the exact path the client asked for.
#![allow(dead_code)]

use pokeinfo::Client;
use rouille::{Request, Response};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub const PIKACHU: &str = include_str!("../fixtures/pikachu.json");
pub const GENERATIONS: &str = include_str!("../fixtures/generations.json");
pub const GENERATION_1: &str = include_str!("../fixtures/generation-1.json");

/// How long the `slow` pokemon takes to answer.
pub const SLOW_DELAY: Duration = Duration::from_millis(2000);

pub struct Upstream {
    /// Base URL to hand to `Client::with_base_url`, e.g. `http://127.0.0.1:4321/api/v2`.
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl Upstream {
    /// Raw request URLs (path + query) seen so far, oldest first.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn client(&self) -> Client {
        Client::default().with_base_url(self.base_url.as_str())
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> Client {
        Client::new(timeout)
            .unwrap()
            .with_base_url(self.base_url.as_str())
    }
}

fn json(body: &str) -> Response {
    Response::from_data("application/json", body.as_bytes().to_vec())
}

fn route(request: &Request) -> Response {
    let path = request.url();
    match path.as_str() {
        "/api/v2/pokemon/pikachu" | "/api/v2/pokemon/25" => json(PIKACHU),
        "/api/v2/pokemon/sparse" => json(r#"{"name": "sparse", "id": 9999}"#),
        "/api/v2/pokemon/slow" => {
            thread::sleep(SLOW_DELAY);
            json(PIKACHU)
        }
        "/api/v2/pokemon/truncated" => json(r#"{"name": "pika"#),
        "/api/v2/pokemon/teapot" => Response::text("upstream exploded").with_status_code(500),
        "/api/v2/pokemon/pikachu/encounters" => json(
            r#"[{"location_area": {"name": "viridian-forest-area", "url": "https://pokeapi.co/api/v2/location-area/321/"}, "version_details": []}]"#,
        ),
        "/api/v2/pokemon" => {
            let limit = request.get_param("limit").unwrap_or_default();
            let offset = request.get_param("offset").unwrap_or_default();
            json(&format!(
                r#"{{"count": 1302, "limit": "{limit}", "offset": "{offset}", "results": []}}"#
            ))
        }
        "/api/v2/generation" => json(GENERATIONS),
        "/api/v2/generation/1" => json(GENERATION_1),
        "/api/v2/berry/cheri" => json(r#"{"id": 1, "name": "cheri", "growth_time": 3}"#),
        "/api/v2/berry" => json(r#"{"count": 64, "results": [{"name": "cheri", "url": "https://pokeapi.co/api/v2/berry/1/"}]}"#),
        _ => Response::text("Not Found").with_status_code(404),
    }
}

/// Start the fake upstream on a background thread.
pub fn spawn_upstream() -> Upstream {
    let hits = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&hits);
    let server = rouille::Server::new("127.0.0.1:0", move |request| {
        seen.lock().unwrap().push(request.raw_url().to_string());
        route(request)
    })
    .expect("bind fake upstream");
    let addr = server.server_addr();
    thread::spawn(move || server.run());
    Upstream {
        base_url: format!("http://{addr}/api/v2"),
        hits,
    }
}

/// Base URL on which nothing listens: every request fails to connect.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v2")
}
