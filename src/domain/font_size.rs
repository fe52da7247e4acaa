use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontSize {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl FontSize {
    pub const ALL: [Self; 5] = [
        Self::XSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
    ];

    /// Persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::XSmall => "xSmall",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xLarge",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::XSmall => "XS",
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::XLarge => "XL",
        }
    }

    pub fn point_size(self) -> u16 {
        match self {
            Self::XSmall => 10,
            Self::Small => 12,
            Self::Medium => 13,
            Self::Large => 15,
            Self::XLarge => 17,
        }
    }

    /// Text rows per table row.
    pub fn row_height(self) -> u16 {
        match self {
            Self::XSmall | Self::Small | Self::Medium => 1,
            Self::Large | Self::XLarge => 2,
        }
    }

    /// Saturates at `XLarge`.
    pub fn larger(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1).min(Self::ALL.len() - 1)]
    }

    /// Saturates at `XSmall`.
    pub fn smaller(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|size| *size == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown font size `{0}`")]
pub struct UnknownFontSize(pub String);

impl FromStr for FontSize {
    type Err = UnknownFontSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownFontSize(s.to_string()))
    }
}
