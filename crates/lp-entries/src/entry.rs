//! Draft entry rows and volume selections.

use std::fmt;
use std::str::FromStr;

use lp_core::EntryId;

use crate::EntryError;

/// Standard container sizes offered by the volume picker, in millilitres.
pub const STANDARD_VOLUMES_ML: [u32; 7] = [269, 300, 330, 350, 473, 600, 1000];

/// UI value selecting a user-typed volume.
pub const CUSTOM_SENTINEL: &str = "custom";

/// What the volume picker currently shows for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Volume {
    /// Nothing chosen yet (fresh row).
    #[default]
    Unset,
    /// A preset size in millilitres.
    Standard(u32),
    /// The user types the size into `custom_volume`.
    Custom,
}

impl Volume {
    pub fn is_custom(self) -> bool {
        matches!(self, Volume::Custom)
    }

    /// Every option the picker offers, presets first.
    pub fn options() -> impl Iterator<Item = Volume> {
        STANDARD_VOLUMES_ML
            .into_iter()
            .map(Volume::Standard)
            .chain(std::iter::once(Volume::Custom))
    }

    /// Picker label, e.g. `"330 ml"`.
    pub fn label(self) -> String {
        match self {
            Volume::Unset => String::new(),
            Volume::Standard(ml) => format!("{ml} ml"),
            Volume::Custom => "Other".to_string(),
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Volume::Unset => Ok(()),
            Volume::Standard(ml) => write!(f, "{ml}"),
            Volume::Custom => f.write_str(CUSTOM_SENTINEL),
        }
    }
}

/// Parses the picker's string value: `""`, `"custom"` or a millilitre integer.
impl FromStr for Volume {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Volume::Unset);
        }
        if trimmed.eq_ignore_ascii_case(CUSTOM_SENTINEL) {
            return Ok(Volume::Custom);
        }
        trimmed
            .parse::<u32>()
            .map(Volume::Standard)
            .map_err(|_| EntryError::InvalidVolume {
                text: s.to_string(),
            })
    }
}

/// One draft input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub volume: Volume,
    /// Only meaningful while `volume` is [`Volume::Custom`].
    pub custom_volume: Option<String>,
    /// Raw price text as typed.
    pub price: String,
}

impl Entry {
    /// A fresh row: no volume, empty price.
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            volume: Volume::Unset,
            custom_volume: None,
            price: String::new(),
        }
    }

    /// Builder-style constructor for a preset volume.
    pub fn standard(id: EntryId, ml: u32, price: impl Into<String>) -> Self {
        Self {
            id,
            volume: Volume::Standard(ml),
            custom_volume: None,
            price: price.into(),
        }
    }

    /// Builder-style constructor for a typed volume.
    pub fn custom(id: EntryId, custom_volume: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id,
            volume: Volume::Custom,
            custom_volume: Some(custom_volume.into()),
            price: price.into(),
        }
    }

    /// Volume text the engine parses: the typed value for custom rows,
    /// the preset otherwise. `None` when nothing was chosen or typed.
    pub fn volume_text(&self) -> Option<String> {
        match self.volume {
            Volume::Unset => None,
            Volume::Standard(ml) => Some(ml.to_string()),
            Volume::Custom => self.custom_volume.clone(),
        }
    }

    /// Switch the picker. Selecting custom starts with an empty typed value;
    /// anything else discards the typed value.
    pub(crate) fn select_volume(&mut self, volume: Volume) {
        self.volume = volume;
        self.custom_volume = if volume.is_custom() {
            Some(String::new())
        } else {
            None
        };
    }
}
