use crate::core::constants::{BASE_ATTRIBUTE_VALUE, INITIAL_XP_TO_NEXT_LEVEL, NUM_ATTRIBUTES};
use serde::{Deserialize, Serialize};

/// The three allocatable hero attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Intelligence,
    Vitality,
}

impl Attribute {
    pub fn all() -> [Attribute; NUM_ATTRIBUTES] {
        [
            Attribute::Strength,
            Attribute::Intelligence,
            Attribute::Vitality,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Intelligence => "INT",
            Attribute::Vitality => "VIT",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Intelligence => "Intelligence",
            Attribute::Vitality => "Vitality",
        }
    }
}

/// The player's persistent character record.
///
/// Field names serialize in camelCase to match the on-disk hero record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub level: u32,
    pub current_xp: u32,
    pub xp_to_next_level: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub vitality: u32,
    pub unspent_points: u32,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            level: 1,
            current_xp: 0,
            xp_to_next_level: INITIAL_XP_TO_NEXT_LEVEL,
            strength: BASE_ATTRIBUTE_VALUE,
            intelligence: BASE_ATTRIBUTE_VALUE,
            vitality: BASE_ATTRIBUTE_VALUE,
            unspent_points: 0,
        }
    }
}

impl Hero {
    pub fn attribute(&self, attr: Attribute) -> u32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Vitality => self.vitality,
        }
    }

    pub(crate) fn attribute_mut(&mut self, attr: Attribute) -> &mut u32 {
        match attr {
            Attribute::Strength => &mut self.strength,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Vitality => &mut self.vitality,
        }
    }
}
