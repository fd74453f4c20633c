//! The five elements and their generation/conquest cycles.
//!
//! Generation runs Water → Wood → Fire → Earth → Metal → Water.
//! Conquest runs Water ⊣ Fire ⊣ Metal ⊣ Wood ⊣ Earth ⊣ Water.

use serde::{Deserialize, Serialize};

use crate::error::{LiurenError, LiurenResult};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

/// One row of the element cycle table.
struct CycleRow {
    element: Element,
    generates: Element,
    overcomes: Element,
}

/// The canonical cycle table. The reverse directions are derived from it.
const CYCLE: [CycleRow; 5] = [
    CycleRow {
        element: Element::Wood,
        generates: Element::Fire,
        overcomes: Element::Earth,
    },
    CycleRow {
        element: Element::Fire,
        generates: Element::Earth,
        overcomes: Element::Metal,
    },
    CycleRow {
        element: Element::Earth,
        generates: Element::Metal,
        overcomes: Element::Water,
    },
    CycleRow {
        element: Element::Metal,
        generates: Element::Water,
        overcomes: Element::Wood,
    },
    CycleRow {
        element: Element::Water,
        generates: Element::Wood,
        overcomes: Element::Fire,
    },
];

impl Element {
    /// All elements in generation order, starting from Wood.
    pub fn all() -> &'static [Self] {
        &[
            Self::Wood,
            Self::Fire,
            Self::Earth,
            Self::Metal,
            Self::Water,
        ]
    }

    fn row(self) -> &'static CycleRow {
        CYCLE
            .iter()
            .find(|row| row.element == self)
            .unwrap_or_else(|| unreachable!("element cycle table is missing {self:?}"))
    }

    /// The element this one generates (我生).
    pub fn generates(self) -> Self {
        self.row().generates
    }

    /// The element this one overcomes (我克).
    pub fn overcomes(self) -> Self {
        self.row().overcomes
    }

    /// The element that generates this one (生我).
    pub fn generated_by(self) -> Self {
        CYCLE
            .iter()
            .find(|row| row.generates == self)
            .map(|row| row.element)
            .unwrap_or_else(|| unreachable!("no element generates {self:?}"))
    }

    /// The element that overcomes this one (克我).
    pub fn overcome_by(self) -> Self {
        CYCLE
            .iter()
            .find(|row| row.overcomes == self)
            .map(|row| row.element)
            .unwrap_or_else(|| unreachable!("no element overcomes {self:?}"))
    }

    /// The Chinese character for this element.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The English name for this element.
    pub fn english(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Parse an element from its Chinese character, pinyin, or English name.
    pub fn parse(s: &str) -> LiurenResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "木" | "mu" | "wood" => Ok(Self::Wood),
            "火" | "huo" | "fire" => Ok(Self::Fire),
            "土" | "tu" | "earth" => Ok(Self::Earth),
            "金" | "jin" | "metal" => Ok(Self::Metal),
            "水" | "shui" | "water" => Ok(Self::Water),
            _ => Err(LiurenError::UnknownSymbol {
                kind: "element",
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}
