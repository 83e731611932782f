//! Reshaping of generation data for the drill-down UI.
//!
//! PokeAPI only hands out `{name, url}` references for generations and
//! species; the numeric id lives at the end of the URL. These helpers read it
//! off, derive the sprite URL from it, and put the rows in display order.

use crate::models::{
    Generation, GenerationEntry, GenerationList, NamedResource, ResourceId, SpeciesEntry,
};
use regex::Regex;
use std::sync::LazyLock;

pub const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

static TRAILING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)/?$").expect("valid id regex"));

/// Numeric id at the end of a PokeAPI resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon-species/25/` yields `Some(25)`.
pub fn extract_id_from_url(url: &str) -> Option<u32> {
    TRAILING_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Default front sprite for a pokemon id.
pub fn sprite_url(id: u32) -> String {
    format!("{}/{}.png", SPRITE_BASE_URL, id)
}

fn resource_id(r: &NamedResource) -> Option<u32> {
    r.url.as_deref().and_then(extract_id_from_url)
}

/// Generations with their ids, numeric ids ascending, name-only rows last.
pub fn generation_entries(list: &GenerationList) -> Vec<GenerationEntry> {
    let mut out: Vec<GenerationEntry> = list
        .results
        .iter()
        .filter_map(|r| {
            let name = r.name.clone()?;
            let id = match resource_id(r) {
                Some(n) => ResourceId::Number(n),
                None => ResourceId::Name(name.clone()),
            };
            Some(GenerationEntry {
                id,
                name,
                url: r.url.clone().unwrap_or_default(),
            })
        })
        .collect();
    // ResourceId orders Number before Name.
    out.sort_by(|a, b| a.id.cmp(&b.id));
    out
}

/// Species of one generation, alphabetically by name, each with a sprite URL.
///
/// The upstream order is arbitrary, so the result is always re-sorted.
pub fn species_entries(generation: &Generation) -> Vec<SpeciesEntry> {
    let mut out: Vec<SpeciesEntry> = generation
        .pokemon_species
        .iter()
        .filter_map(|r| {
            let name = r.name.clone()?;
            Some(match resource_id(r) {
                Some(n) => SpeciesEntry {
                    id: ResourceId::Number(n),
                    name,
                    sprite: sprite_url(n),
                },
                None => SpeciesEntry {
                    id: ResourceId::Name(name.clone()),
                    name,
                    sprite: String::new(),
                },
            })
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}
