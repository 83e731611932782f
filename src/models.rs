use serde::{Deserialize, Serialize};

/// `{name, url}` pair PokeAPI uses for every cross-reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u32>,
    #[serde(default, rename = "type")]
    pub kind: Option<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    #[serde(default)]
    pub ability: Option<NamedResource>,
    #[serde(default)]
    pub is_hidden: Option<bool>,
    #[serde(default)]
    pub slot: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    #[serde(default)]
    pub stat: Option<NamedResource>,
    #[serde(default)]
    pub base_stat: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeldItem {
    #[serde(default)]
    pub item: Option<NamedResource>,
}

/// The flat sprite variants. Upstream also nests `other` and `versions`
/// objects here; those are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub front_female: Option<String>,
    #[serde(default)]
    pub back_female: Option<String>,
    #[serde(default)]
    pub front_shiny_female: Option<String>,
    #[serde(default)]
    pub back_shiny_female: Option<String>,
}

impl Sprites {
    /// Every variant other than `front_default`, in display order, with its key.
    pub fn extra_variants(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("back_default", self.back_default.as_deref()),
            ("front_shiny", self.front_shiny.as_deref()),
            ("back_shiny", self.back_shiny.as_deref()),
            ("front_female", self.front_female.as_deref()),
            ("back_female", self.back_female.as_deref()),
            ("front_shiny_female", self.front_shiny_female.as_deref()),
            ("back_shiny_female", self.back_shiny_female.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cries {
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub legacy: Option<String>,
}

/// Decoded `GET /pokemon/{name_or_id}` response.
///
/// Every field is optional: anything the upstream leaves out (or sends as
/// `null`) decodes to `None` or an empty list instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub species: Option<NamedResource>,
    #[serde(default)]
    pub location_area_encounters: Option<String>,
    #[serde(default, deserialize_with = "de_list_or_null")]
    pub types: Vec<TypeSlot>,
    #[serde(default, deserialize_with = "de_list_or_null")]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default, deserialize_with = "de_list_or_null")]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Option<Sprites>,
    #[serde(default, deserialize_with = "de_list_or_null")]
    pub forms: Vec<NamedResource>,
    #[serde(default, deserialize_with = "de_list_or_null")]
    pub held_items: Vec<HeldItem>,
    #[serde(default)]
    pub cries: Option<Cries>,
    #[serde(default, deserialize_with = "de_list_or_null")]
    pub past_types: Vec<serde_json::Value>,
}

/// Serde helper: treat an explicit `null` list the same as a missing one.
fn de_list_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decoded `GET /generation` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationList {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default, deserialize_with = "de_list_or_null")]
    pub results: Vec<NamedResource>,
}

/// Decoded `GET /generation/{id}` response (only the fields the drill-down uses).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main_region: Option<NamedResource>,
    #[serde(default, deserialize_with = "de_list_or_null")]
    pub pokemon_species: Vec<NamedResource>,
}

/// Numeric id when one could be read off the resource URL, otherwise the name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(u32),
    Name(String),
}

/// One row of `/api/generations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationEntry {
    pub id: ResourceId,
    pub name: String,
    pub url: String,
}

/// One row of `/api/generation/<id>/species`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub id: ResourceId,
    pub name: String,
    /// Empty when no numeric id was available.
    pub sprite: String,
}

/// Wrapper the proxy uses for list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub results: Vec<T>,
}
