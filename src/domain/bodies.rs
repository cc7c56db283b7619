//! Body registry
//!
//! The fixed preset of celestial bodies a ball can be dropped on. Leaf data:
//! everything else looks bodies up here by `BodyId`.

use serde::{Deserialize, Serialize};

/// Identifier of a preset body. Declaration order is registry order.
///
/// Serializes as its lowercase key. Deserializing goes through
/// [`BodyId::from_key`], so config files accept the same spellings the page
/// controls do (`"Earth"`, `" MOON "`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BodyId {
    Earth,
    Moon,
    Mars,
    Jupiter,
    Mercury,
    Venus,
    Saturn,
}

/// Immutable properties of a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub id: BodyId,
    /// Stable key used by the page controls (`value` of the toggles)
    pub key: &'static str,
    pub name: &'static str,
    /// Surface gravitational acceleration (m/s²), always > 0
    pub gravity: f64,
    /// CSS color used for the ball and the chart series
    pub color: &'static str,
}

pub const BODY_COUNT: usize = 7;

pub const BODY_DATA: [Body; BODY_COUNT] = [
    Body { id: BodyId::Earth, key: "earth", name: "Earth", gravity: 9.8, color: "#1976d2" },
    Body { id: BodyId::Moon, key: "moon", name: "Moon", gravity: 1.62, color: "#888888" },
    Body { id: BodyId::Mars, key: "mars", name: "Mars", gravity: 3.71, color: "#e57373" },
    Body { id: BodyId::Jupiter, key: "jupiter", name: "Jupiter", gravity: 24.79, color: "#ffb300" },
    Body { id: BodyId::Mercury, key: "mercury", name: "Mercury", gravity: 3.7, color: "#90a4ae" },
    Body { id: BodyId::Venus, key: "venus", name: "Venus", gravity: 8.87, color: "#ba68c8" },
    Body { id: BodyId::Saturn, key: "saturn", name: "Saturn", gravity: 10.44, color: "#ffd54f" },
];

impl BodyId {
    pub const ALL: [BodyId; BODY_COUNT] = [
        BodyId::Earth,
        BodyId::Moon,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Saturn,
    ];

    #[inline]
    pub fn body(self) -> &'static Body {
        &BODY_DATA[self as usize]
    }

    #[inline]
    pub fn key(self) -> &'static str {
        self.body().key
    }

    pub fn from_key(key: &str) -> Result<Self, String> {
        let key = key.trim();
        BODY_DATA
            .iter()
            .find(|b| b.key.eq_ignore_ascii_case(key))
            .map(|b| b.id)
            .ok_or_else(|| format!("unknown body key '{}'", key))
    }
}

impl TryFrom<String> for BodyId {
    type Error = String;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        BodyId::from_key(&key)
    }
}

#[derive(Serialize)]
struct BodyManifestEntry {
    key: &'static str,
    name: &'static str,
    gravity: f64,
    color: &'static str,
}

/// Registry as JSON, for building the body toggles on the page.
pub fn manifest_json() -> String {
    let entries: Vec<BodyManifestEntry> = BODY_DATA
        .iter()
        .map(|b| BodyManifestEntry {
            key: b.key,
            name: b.name,
            gravity: b.gravity,
            color: b.color,
        })
        .collect();
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}
