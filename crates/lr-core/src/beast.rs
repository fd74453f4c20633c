//! The six guardian beasts (六兽).

use serde::{Deserialize, Serialize};

use crate::error::{LiurenError, LiurenResult};

/// One of the six guardian beasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beast {
    /// 青龙
    AzureDragon,
    /// 朱雀
    VermilionBird,
    /// 勾陈
    HookedArray,
    /// 螣蛇
    SoaringSerpent,
    /// 白虎
    WhiteTiger,
    /// 玄武
    BlackTortoise,
}

impl Beast {
    /// All beasts in traditional order.
    pub fn all() -> &'static [Self] {
        &[
            Self::AzureDragon,
            Self::VermilionBird,
            Self::HookedArray,
            Self::SoaringSerpent,
            Self::WhiteTiger,
            Self::BlackTortoise,
        ]
    }

    /// The Chinese name.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龙",
            Self::VermilionBird => "朱雀",
            Self::HookedArray => "勾陈",
            Self::SoaringSerpent => "螣蛇",
            Self::WhiteTiger => "白虎",
            Self::BlackTortoise => "玄武",
        }
    }

    /// The English name.
    pub fn english(self) -> &'static str {
        match self {
            Self::AzureDragon => "Azure Dragon",
            Self::VermilionBird => "Vermilion Bird",
            Self::HookedArray => "Hooked Array",
            Self::SoaringSerpent => "Soaring Serpent",
            Self::WhiteTiger => "White Tiger",
            Self::BlackTortoise => "Black Tortoise",
        }
    }

    /// Parse a beast from its Chinese or English name.
    pub fn parse(s: &str) -> LiurenResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "青龙" | "azure dragon" | "dragon" => Ok(Self::AzureDragon),
            "朱雀" | "vermilion bird" | "bird" => Ok(Self::VermilionBird),
            "勾陈" | "hooked array" => Ok(Self::HookedArray),
            "螣蛇" | "腾蛇" | "soaring serpent" | "serpent" => Ok(Self::SoaringSerpent),
            "白虎" | "white tiger" | "tiger" => Ok(Self::WhiteTiger),
            "玄武" | "black tortoise" | "tortoise" => Ok(Self::BlackTortoise),
            _ => Err(LiurenError::UnknownSymbol {
                kind: "beast",
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Beast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}
