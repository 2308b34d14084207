//! Areas: named sub-maps gated by key items

use core::fmt;

use serde::{Deserialize, Serialize};

/// Area identifier (e.g. "suburbs")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(pub String);

impl AreaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AreaId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Static description of an area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaDef {
    pub id: AreaId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Open from the start of the game
    #[serde(default)]
    pub unlocked: bool,
    /// Key item id that opens this area
    #[serde(default)]
    pub required_key: Option<String>,
    pub zombie_count: u32,
    /// Probability (0..=1) that a building holds loot
    pub loot_quality: f32,
}

impl AreaDef {
    /// Loot quality as a whole percentage
    pub fn loot_percent(&self) -> u32 {
        (self.loot_quality * 100.0).round() as u32
    }
}

/// Human-readable form of a key id ("downtown-key" -> "downtown key")
pub fn key_label(key: &str) -> String {
    key.replace('-', " ")
}

/// The built-in area table. The key to each area lies in the one before it.
pub fn default_areas() -> Vec<AreaDef> {
    vec![
        AreaDef {
            id: AreaId::new("suburbs"),
            name: "Suburbs".to_string(),
            description: "Quiet streets lined with abandoned houses.".to_string(),
            unlocked: true,
            required_key: None,
            zombie_count: 5,
            loot_quality: 0.5,
        },
        AreaDef {
            id: AreaId::new("downtown"),
            name: "Downtown".to_string(),
            description: "Stores and offices, crawling with the dead.".to_string(),
            unlocked: false,
            required_key: Some("downtown-key".to_string()),
            zombie_count: 8,
            loot_quality: 0.65,
        },
        AreaDef {
            id: AreaId::new("hospital"),
            name: "Hospital".to_string(),
            description: "Medical supplies, if you can reach them.".to_string(),
            unlocked: false,
            required_key: Some("hospital-key".to_string()),
            zombie_count: 10,
            loot_quality: 0.8,
        },
        AreaDef {
            id: AreaId::new("military"),
            name: "Military Base".to_string(),
            description: "Fortified compound. Overrun.".to_string(),
            unlocked: false,
            required_key: Some("military-key".to_string()),
            zombie_count: 14,
            loot_quality: 0.95,
        },
    ]
}
