//! The twelve earthly branches (地支).
//!
//! Each branch carries a fixed element, polarity, and guardian beast. The
//! branches alternate yang/yin around the cycle, so stepping by two always
//! stays within one polarity class.

use serde::{Deserialize, Serialize};

use crate::beast::Beast;
use crate::element::Element;
use crate::error::{LiurenError, LiurenResult};

/// Number of branches in the cycle.
pub const BRANCH_COUNT: usize = 12;

/// Yin/yang polarity class of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// 子 寅 辰 午 申 戌
    Yang,
    /// 丑 卯 巳 未 酉 亥
    Yin,
}

impl Polarity {
    /// The Chinese label used in chart output.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yang => write!(f, "Yang"),
            Self::Yin => write!(f, "Yin"),
        }
    }
}

/// One of the twelve earthly branches, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    /// 子
    Zi,
    /// 丑
    Chou,
    /// 寅
    Yin,
    /// 卯
    Mao,
    /// 辰
    Chen,
    /// 巳
    Si,
    /// 午
    Wu,
    /// 未
    Wei,
    /// 申
    Shen,
    /// 酉
    You,
    /// 戌
    Xu,
    /// 亥
    Hai,
}

/// Static attributes of a branch.
struct BranchRow {
    chinese: &'static str,
    pinyin: &'static str,
    element: Element,
    polarity: Polarity,
    beast: Beast,
}

/// Canonical branch table, indexed by cycle position.
const BRANCHES: [BranchRow; BRANCH_COUNT] = [
    BranchRow {
        chinese: "子",
        pinyin: "Zi",
        element: Element::Water,
        polarity: Polarity::Yang,
        beast: Beast::BlackTortoise,
    },
    BranchRow {
        chinese: "丑",
        pinyin: "Chou",
        element: Element::Earth,
        polarity: Polarity::Yin,
        beast: Beast::HookedArray,
    },
    BranchRow {
        chinese: "寅",
        pinyin: "Yin",
        element: Element::Wood,
        polarity: Polarity::Yang,
        beast: Beast::AzureDragon,
    },
    BranchRow {
        chinese: "卯",
        pinyin: "Mao",
        element: Element::Wood,
        polarity: Polarity::Yin,
        beast: Beast::AzureDragon,
    },
    BranchRow {
        chinese: "辰",
        pinyin: "Chen",
        element: Element::Earth,
        polarity: Polarity::Yang,
        beast: Beast::HookedArray,
    },
    BranchRow {
        chinese: "巳",
        pinyin: "Si",
        element: Element::Fire,
        polarity: Polarity::Yin,
        beast: Beast::VermilionBird,
    },
    BranchRow {
        chinese: "午",
        pinyin: "Wu",
        element: Element::Fire,
        polarity: Polarity::Yang,
        beast: Beast::VermilionBird,
    },
    BranchRow {
        chinese: "未",
        pinyin: "Wei",
        element: Element::Earth,
        polarity: Polarity::Yin,
        beast: Beast::SoaringSerpent,
    },
    BranchRow {
        chinese: "申",
        pinyin: "Shen",
        element: Element::Metal,
        polarity: Polarity::Yang,
        beast: Beast::WhiteTiger,
    },
    BranchRow {
        chinese: "酉",
        pinyin: "You",
        element: Element::Metal,
        polarity: Polarity::Yin,
        beast: Beast::WhiteTiger,
    },
    BranchRow {
        chinese: "戌",
        pinyin: "Xu",
        element: Element::Earth,
        polarity: Polarity::Yang,
        beast: Beast::SoaringSerpent,
    },
    BranchRow {
        chinese: "亥",
        pinyin: "Hai",
        element: Element::Water,
        polarity: Polarity::Yin,
        beast: Beast::BlackTortoise,
    },
];

impl Branch {
    /// All branches in cycle order, starting from 子.
    pub fn all() -> &'static [Self; BRANCH_COUNT] {
        &[
            Self::Zi,
            Self::Chou,
            Self::Yin,
            Self::Mao,
            Self::Chen,
            Self::Si,
            Self::Wu,
            Self::Wei,
            Self::Shen,
            Self::You,
            Self::Xu,
            Self::Hai,
        ]
    }

    /// Zero-based position in the cycle (子 = 0, 亥 = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The branch at a cycle position, wrapping past 11.
    pub fn from_index(index: usize) -> Self {
        Self::all()[index % BRANCH_COUNT]
    }

    fn row(self) -> &'static BranchRow {
        &BRANCHES[self.index()]
    }

    /// The branch's element.
    pub fn element(self) -> Element {
        self.row().element
    }

    /// The branch's polarity class.
    pub fn polarity(self) -> Polarity {
        self.row().polarity
    }

    /// The guardian beast attached to this branch.
    pub fn beast(self) -> Beast {
        self.row().beast
    }

    /// The Chinese character.
    pub fn chinese(self) -> &'static str {
        self.row().chinese
    }

    /// The pinyin name, capitalized.
    pub fn pinyin(self) -> &'static str {
        self.row().pinyin
    }

    /// Parse a branch from its Chinese character or pinyin name.
    pub fn parse(s: &str) -> LiurenResult<Self> {
        let trimmed = s.trim().trim_end_matches('时');
        Self::all()
            .iter()
            .copied()
            .find(|b| b.chinese() == trimmed || b.pinyin().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LiurenError::UnknownSymbol {
                kind: "branch",
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}
