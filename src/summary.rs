//! Human-readable summary of one pokemon record.
//!
//! [`summarize`] is a pure function: it never performs I/O and never fails.
//! Optional scalars that are absent are skipped. Lists are always shown, with
//! an explicit `none` when empty, so the output keeps a predictable shape.
//! Values are echoed as the upstream sends them (no unit conversion).

use crate::models::{AbilitySlot, PokemonRecord, TypeSlot};
use std::fmt;

/// Marker rendered for an empty list.
pub const NONE_MARKER: &str = "none";

/// One rendered line of a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryLine {
    /// `Label: value`
    Field { label: &'static str, value: String },
    /// `Label:` introducing the [`SummaryLine::Item`]s that follow it.
    Heading(&'static str),
    /// `  - key: value`
    Item { key: String, value: String },
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryLine::Field { label, value } => write!(f, "{label}: {value}"),
            SummaryLine::Heading(label) => write!(f, "{label}:"),
            SummaryLine::Item { key, value } => write!(f, "  - {key}: {value}"),
        }
    }
}

/// Ordered, labeled lines describing one pokemon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: Vec<SummaryLine>,
}

impl Summary {
    /// Value of the first `label: value` line with this label.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            SummaryLine::Field { label: l, value } if *l == label => Some(value.as_str()),
            _ => None,
        })
    }

    /// Items listed directly under `heading`, in order.
    pub fn items(&self, heading: &str) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        let mut inside = false;
        for line in &self.lines {
            match line {
                SummaryLine::Heading(h) => inside = *h == heading,
                SummaryLine::Item { key, value } if inside => out.push((key.as_str(), value.as_str())),
                SummaryLine::Field { .. } => inside = false,
                SummaryLine::Item { .. } => {}
            }
        }
        out
    }

    fn push_field(&mut self, label: &'static str, value: impl Into<String>) {
        self.lines.push(SummaryLine::Field {
            label,
            value: value.into(),
        });
    }

    fn push_opt<T: fmt::Display>(&mut self, label: &'static str, value: Option<T>) {
        if let Some(v) = value {
            self.push_field(label, v.to_string());
        }
    }

    /// `Label: a, b, c`, or `Label: none` when `parts` is empty.
    fn push_list(&mut self, label: &'static str, parts: Vec<String>) {
        if parts.is_empty() {
            self.push_field(label, NONE_MARKER);
        } else {
            self.push_field(label, parts.join(", "));
        }
    }

    /// Heading plus items; nothing at all when `items` is empty.
    fn push_section(&mut self, heading: &'static str, items: Vec<(String, String)>) {
        if items.is_empty() {
            return;
        }
        self.lines.push(SummaryLine::Heading(heading));
        self.lines.extend(
            items
                .into_iter()
                .map(|(key, value)| SummaryLine::Item { key, value }),
        );
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

fn describe_type(t: &TypeSlot) -> Option<String> {
    let name = t.kind.as_ref()?.name.as_deref()?;
    Some(match t.slot {
        Some(slot) => format!("[{slot}] {name}"),
        None => name.to_string(),
    })
}

fn describe_ability(a: &AbilitySlot) -> String {
    let name = a
        .ability
        .as_ref()
        .and_then(|r| r.name.as_deref())
        .unwrap_or("unknown");
    let mut meta = Vec::new();
    if a.is_hidden == Some(true) {
        meta.push("hidden".to_string());
    }
    if let Some(slot) = a.slot {
        meta.push(format!("slot {slot}"));
    }
    if meta.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, meta.join(", "))
    }
}

/// Build the summary for one record.
pub fn summarize(record: &PokemonRecord) -> Summary {
    let mut s = Summary::default();

    s.push_opt("Name", record.name.as_deref());
    s.push_opt("ID", record.id);
    s.push_opt("Height", record.height);
    s.push_opt("Weight", record.weight);
    s.push_opt("Base experience", record.base_experience);
    s.push_opt("Order", record.order);
    s.push_opt("Is default", record.is_default);

    if let Some(species) = &record.species {
        let pieces: Vec<&str> = [species.name.as_deref(), species.url.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect();
        if !pieces.is_empty() {
            s.push_field("Species", pieces.join(", "));
        }
    }

    // Passed through as-is; no URL is derived when upstream leaves it out.
    s.push_opt(
        "Encounters",
        record
            .location_area_encounters
            .as_deref()
            .filter(|u| !u.is_empty()),
    );

    let mut types: Vec<&TypeSlot> = record.types.iter().collect();
    types.sort_by_key(|t| t.slot.unwrap_or(u32::MAX));
    s.push_list("Types", types.into_iter().filter_map(describe_type).collect());

    s.push_list(
        "Abilities",
        record.abilities.iter().map(describe_ability).collect(),
    );

    let stats: Vec<(String, String)> = record
        .stats
        .iter()
        .map(|st| {
            let name = st
                .stat
                .as_ref()
                .and_then(|r| r.name.clone())
                .unwrap_or_else(|| "stat".to_string());
            let value = st.base_stat.map(|v| v.to_string()).unwrap_or_else(|| "?".into());
            (name, value)
        })
        .collect();
    if stats.is_empty() {
        s.push_field("Base stats", NONE_MARKER);
    } else {
        s.push_section("Base stats", stats);
    }

    if let Some(sprites) = &record.sprites {
        s.push_opt(
            "Sprite",
            sprites.front_default.as_deref().filter(|u| !u.is_empty()),
        );
        let extras = sprites
            .extra_variants()
            .into_iter()
            .filter_map(|(k, v)| {
                v.filter(|u| !u.is_empty())
                    .map(|url| (k.to_string(), url.to_string()))
            })
            .collect();
        s.push_section("Sprites (more)", extras);
    }

    s.push_list(
        "Forms",
        record.forms.iter().filter_map(|f| f.name.clone()).collect(),
    );
    s.push_list(
        "Held items",
        record
            .held_items
            .iter()
            .filter_map(|h| h.item.as_ref().and_then(|i| i.name.clone()))
            .collect(),
    );

    if let Some(cries) = &record.cries {
        let items = [("latest", &cries.latest), ("legacy", &cries.legacy)]
            .into_iter()
            .filter_map(|(k, v)| {
                v.as_deref()
                    .filter(|u| !u.is_empty())
                    .map(|url| (k.to_string(), url.to_string()))
            })
            .collect();
        s.push_section("Cries", items);
    }

    if !record.past_types.is_empty() {
        s.push_field("Past types entries", record.past_types.len().to_string());
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedResource;

    fn named(name: &str) -> Option<NamedResource> {
        Some(NamedResource {
            name: Some(name.into()),
            url: None,
        })
    }

    #[test]
    fn ability_flags() {
        let visible = AbilitySlot {
            ability: named("static"),
            is_hidden: Some(false),
            slot: Some(1),
        };
        let hidden = AbilitySlot {
            ability: named("lightning-rod"),
            is_hidden: Some(true),
            slot: Some(3),
        };
        let bare = AbilitySlot::default();
        assert_eq!(describe_ability(&visible), "static (slot 1)");
        assert_eq!(describe_ability(&hidden), "lightning-rod (hidden, slot 3)");
        assert_eq!(describe_ability(&bare), "unknown");
    }

    #[test]
    fn empty_record_keeps_list_shape() {
        let s = summarize(&PokemonRecord::default());
        let text = s.to_string();
        assert_eq!(
            text,
            "Types: none\nAbilities: none\nBase stats: none\nForms: none\nHeld items: none"
        );
    }

    #[test]
    fn items_stop_at_next_field() {
        let s = Summary {
            lines: vec![
                SummaryLine::Heading("Cries"),
                SummaryLine::Item {
                    key: "latest".into(),
                    value: "a.ogg".into(),
                },
                SummaryLine::Field {
                    label: "Past types entries",
                    value: "1".into(),
                },
            ],
        };
        assert_eq!(s.items("Cries"), vec![("latest", "a.ogg")]);
        assert!(s.items("Sprites (more)").is_empty());
    }
}
