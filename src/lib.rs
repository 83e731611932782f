//! pokeinfo
//!
//! A thin Rust client for the public PokeAPI service. Pairs with the
//! `pokeinfo` CLI and the `pokeinfo-proxy` local server/browser UI.
//!
//! ### Features
//! - Fetch one Pokémon by name or numeric id, with a configurable timeout
//! - Summarize the record as ordered, labeled lines (absent fields are skipped)
//! - List generations and their species with ids and sprite URLs resolved
//! - Serve a small browser UI and JSON proxy routes over the same calls
//!
//! ### Example
//! ```no_run
//! use pokeinfo::{Client, api, summary};
//!
//! let client = Client::default();
//! let value = client.fetch_pokemon("pikachu")?;
//! let record = api::parse_record(&value)?;
//! println!("{}", summary::summarize(&record));
//!
//! let generation = client.fetch_generation("1")?;
//! for s in pokeinfo::species::species_entries(&generation) {
//!     println!("{} {}", s.name, s.sprite);
//! }
//! # Ok::<(), pokeinfo::FetchError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod proxy;
pub mod species;
pub mod summary;

pub use api::Client;
pub use error::FetchError;
pub use models::PokemonRecord;
