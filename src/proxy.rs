//! Local HTTP proxy in front of PokeAPI, plus the browser UI.
//!
//! # Purpose
//!
//! Re-exposes the upstream calls the browser UI needs under `/api`, with ids
//! and sprite URLs already resolved server-side, and serves the UI itself at
//! `/`. Each request turns into at most one upstream GET; nothing is cached
//! and no state is kept between requests.
//!
//! # Endpoints
//!
//! | Method | Path                                   | Description                         |
//! |--------|----------------------------------------|-------------------------------------|
//! | GET    | `/`                                    | Browser UI                          |
//! | GET    | `/api`                                 | Route catalog                       |
//! | GET    | `/api/generations`                     | Generations with ids, sorted        |
//! | GET    | `/api/generation/{id}/species`         | Species with sprites, sorted by name|
//! | GET    | `/api/pokemon?limit=&offset=`          | Paginated pokemon list              |
//! | GET    | `/api/pokemon/{name_or_id}`            | Raw pokemon record                  |
//! | GET    | `/api/pokemon/{name_or_id}/summary`    | Text summary                        |
//! | GET    | `/api/pokemon/{name_or_id}/encounters` | Location-area encounters            |
//! | GET    | `/api/{resource}[/{id}]`               | Passthrough for [`RESOURCES`]       |
//!
//! Failures come back as `{"error": "..."}` with the status from
//! [`FetchError::proxy_status`]. Every response carries a permissive CORS
//! header.

use crate::api::Client;
use crate::error::FetchError;
use crate::models::Listing;
use crate::{species, summary};
use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use percent_encoding::percent_decode_str;
use rouille::{Request, Response, Server};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// The browser UI, compiled into the binary.
pub const INDEX_HTML: &str = include_str!("../web/index.html");

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// One passthrough rule: `(category, resource kind, has a list route)`.
pub type ProxyRule = (&'static str, &'static str, bool);

/// PokeAPI resource kinds forwarded verbatim under `/api/{kind}[/{id}]`.
pub const RESOURCES: &[ProxyRule] = &[
    ("berries", "berry", true),
    ("berries", "berry-firmness", false),
    ("berries", "berry-flavor", false),
    ("contests", "contest-type", false),
    ("contests", "contest-effect", false),
    ("contests", "super-contest-effect", false),
    ("encounters", "encounter-method", false),
    ("encounters", "encounter-condition", false),
    ("encounters", "encounter-condition-value", false),
    ("evolution", "evolution-chain", false),
    ("evolution", "evolution-trigger", false),
    ("games", "generation", false),
    ("games", "pokedex", false),
    ("games", "version", false),
    ("games", "version-group", false),
    ("items", "item", true),
    ("items", "item-attribute", false),
    ("items", "item-category", false),
    ("items", "item-fling-effect", false),
    ("items", "item-pocket", false),
    ("locations", "location", true),
    ("locations", "location-area", false),
    ("locations", "pal-park-area", false),
    ("locations", "region", true),
    ("machines", "machine", false),
    ("moves", "move", true),
    ("moves", "move-ailment", false),
    ("moves", "move-battle-style", false),
    ("moves", "move-category", false),
    ("moves", "move-damage-class", false),
    ("moves", "move-learn-method", false),
    ("moves", "move-target", false),
    ("pokemon", "ability", true),
    ("pokemon", "characteristic", false),
    ("pokemon", "egg-group", false),
    ("pokemon", "gender", false),
    ("pokemon", "growth-rate", false),
    ("pokemon", "nature", false),
    ("pokemon", "pokeathlon-stat", false),
    ("pokemon", "pokemon-color", false),
    ("pokemon", "pokemon-form", false),
    ("pokemon", "pokemon-habitat", false),
    ("pokemon", "pokemon-shape", false),
    ("pokemon", "pokemon-species", false),
    ("pokemon", "stat", false),
    ("pokemon", "type", true),
    ("utility", "language", false),
];

const DEFAULT_PAGE_LIMIT: u32 = 20;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct SummaryBody {
    summary: String,
    name_or_id: String,
    id: Option<u32>,
}

fn rule(kind: &str) -> Option<&'static ProxyRule> {
    RESOURCES.iter().find(|(_, k, _)| *k == kind)
}

fn error_response(status: u16, message: impl Into<String>) -> Response {
    Response::json(&ErrorBody {
        error: message.into(),
    })
    .with_status_code(status)
}

fn fetch_error_response(err: &FetchError) -> Response {
    warn!("upstream call failed: {}", err);
    error_response(err.proxy_status(), err.to_string())
}

fn json_or_error<T: Serialize>(result: Result<T, FetchError>) -> Response {
    match result {
        Ok(v) => Response::json(&v),
        Err(e) => fetch_error_response(&e),
    }
}

/// Route catalog grouped by category, as served at `/api`.
pub fn route_catalog() -> BTreeMap<&'static str, Vec<String>> {
    let mut out: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
    out.entry("games").or_default().extend([
        "/api/generations".to_string(),
        "/api/generation/<id>/species".to_string(),
    ]);
    out.entry("pokemon").or_default().extend([
        "/api/pokemon".to_string(),
        "/api/pokemon/<name_or_id>".to_string(),
        "/api/pokemon/<name_or_id>/summary".to_string(),
        "/api/pokemon/<name_or_id>/encounters".to_string(),
    ]);
    for (category, kind, has_list) in RESOURCES {
        let routes = out.entry(*category).or_default();
        if *has_list {
            routes.push(format!("/api/{kind}"));
        }
        routes.push(format!("/api/{kind}/<id_or_name>"));
    }
    out
}

fn generations(client: &Client) -> Response {
    json_or_error(client.fetch_generations().map(|list| Listing {
        results: species::generation_entries(&list),
    }))
}

fn generation_species(client: &Client, id: &str) -> Response {
    json_or_error(client.fetch_generation(id).map(|generation| Listing {
        results: species::species_entries(&generation),
    }))
}

fn pokemon_list(request: &Request, client: &Client) -> Response {
    let parse = |key: &str, default: u32| -> Result<u32, String> {
        match request.get_param(key) {
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("invalid '{key}' parameter: {raw}")),
            None => Ok(default),
        }
    };
    let (limit, offset) = match (parse("limit", DEFAULT_PAGE_LIMIT), parse("offset", 0)) {
        (Ok(l), Ok(o)) => (l, o),
        (Err(msg), _) | (_, Err(msg)) => return error_response(400, msg),
    };
    json_or_error(client.fetch_pokemon_list(limit, offset))
}

fn pokemon_summary(client: &Client, name_or_id: &str) -> Response {
    let result = client.fetch_pokemon(name_or_id).and_then(|value| {
        let record = crate::api::parse_record(&value)?;
        Ok(SummaryBody {
            summary: summary::summarize(&record).to_string(),
            name_or_id: name_or_id.to_string(),
            id: record.id,
        })
    });
    json_or_error(result)
}

/// Split the raw path (query dropped) on `/`, then percent-decode each piece,
/// so an encoded `%2F` stays inside its segment.
fn path_segments(raw_url: &str) -> Vec<Cow<'_, str>> {
    let path = raw_url.split('?').next().unwrap_or_default();
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy())
        .collect()
}

/// Answer one request. Pure dispatch: all I/O goes through `client`.
pub fn handle(request: &Request, client: &Client) -> Response {
    if request.method() == "OPTIONS" {
        return Response::empty_204()
            .with_additional_header("Access-Control-Allow-Origin", "*")
            .with_additional_header("Access-Control-Allow-Methods", "GET, OPTIONS")
            .with_additional_header("Access-Control-Allow-Headers", "Content-Type");
    }

    debug!("{} {}", request.method(), request.raw_url());
    let decoded = path_segments(request.raw_url());
    let segments: Vec<&str> = decoded.iter().map(|s| s.as_ref()).collect();

    let response = if request.method() != "GET" {
        error_response(405, "method not allowed")
    } else {
        match segments.as_slice() {
            [] => Response::html(INDEX_HTML),
            ["api"] => Response::json(&route_catalog()),
            ["api", "generations"] | ["api", "generation"] => generations(client),
            ["api", "generation", id, "species"] => generation_species(client, id),
            ["api", "pokemon"] => pokemon_list(request, client),
            ["api", "pokemon", id] => json_or_error(client.fetch_pokemon(id)),
            ["api", "pokemon", id, "summary"] => pokemon_summary(client, id),
            ["api", "pokemon", id, "encounters"] => json_or_error(client.fetch_encounters(id)),
            ["api", kind] if rule(kind).is_some_and(|(_, _, list)| *list) => {
                json_or_error::<Value>(client.fetch_resource(kind, None))
            }
            ["api", kind, id] if rule(kind).is_some() => {
                json_or_error::<Value>(client.fetch_resource(kind, Some(*id)))
            }
            _ => error_response(404, "Not found"),
        }
    };

    response.with_additional_header("Access-Control-Allow-Origin", "*")
}

/// Bind the proxy to `addr` (use port 0 for an ephemeral port).
///
/// Call `run()` on the returned server to start serving; it blocks forever.
pub fn bind(
    addr: &str,
    client: Client,
) -> Result<Server<impl Fn(&Request) -> Response + Send + Sync + 'static>> {
    let server = Server::new(addr, move |request| handle(request, &client))
        .map_err(|e| anyhow!("failed to bind {}: {}", addr, e))?;
    info!("proxy listening on http://{}", server.server_addr());
    Ok(server)
}
