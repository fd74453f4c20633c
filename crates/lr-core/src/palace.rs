//! The six palaces (六宫) and their static elements.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{LiurenError, LiurenResult};

/// Number of palaces.
pub const PALACE_COUNT: usize = 6;

/// One of the six palaces, in ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Palace {
    /// 大安, position 1.
    DaAn,
    /// 流连, position 2.
    LiuLian,
    /// 速喜, position 3.
    SuXi,
    /// 赤口, position 4.
    ChiKou,
    /// 小吉, position 5.
    XiaoJi,
    /// 空亡, position 6.
    KongWang,
}

impl Palace {
    /// All palaces in ordinal order.
    pub fn all() -> &'static [Self; PALACE_COUNT] {
        &[
            Self::DaAn,
            Self::LiuLian,
            Self::SuXi,
            Self::ChiKou,
            Self::XiaoJi,
            Self::KongWang,
        ]
    }

    /// Look up a palace by its 1-based position.
    pub fn from_position(position: u32) -> LiurenResult<Self> {
        match position {
            1..=6 => Ok(Self::all()[position as usize - 1]),
            _ => Err(LiurenError::PositionOutOfRange(position)),
        }
    }

    /// The 1-based position (1-6).
    pub fn position(self) -> u32 {
        self as u32 + 1
    }

    /// The palace's static element.
    pub fn element(self) -> Element {
        match self {
            Self::DaAn => Element::Wood,
            Self::LiuLian => Element::Earth,
            Self::SuXi => Element::Fire,
            Self::ChiKou => Element::Metal,
            Self::XiaoJi => Element::Earth,
            Self::KongWang => Element::Water,
        }
    }

    /// The palace that follows this one, wrapping 6 → 1.
    pub fn next(self) -> Self {
        Self::all()[self.position() as usize % PALACE_COUNT]
    }

    /// The Chinese name.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::DaAn => "大安",
            Self::LiuLian => "流连",
            Self::SuXi => "速喜",
            Self::ChiKou => "赤口",
            Self::XiaoJi => "小吉",
            Self::KongWang => "空亡",
        }
    }

    /// The English name.
    pub fn english(self) -> &'static str {
        match self {
            Self::DaAn => "Great Peace",
            Self::LiuLian => "Lingering",
            Self::SuXi => "Swift Joy",
            Self::ChiKou => "Red Mouth",
            Self::XiaoJi => "Minor Fortune",
            Self::KongWang => "Emptiness",
        }
    }

    /// Parse a palace from its Chinese name, pinyin, English name, or position.
    pub fn parse(s: &str) -> LiurenResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        if let Ok(position) = normalized.parse::<u32>() {
            return Self::from_position(position);
        }
        match normalized.as_str() {
            "大安" | "daan" | "greatpeace" => Ok(Self::DaAn),
            "流连" | "留连" | "liulian" | "lingering" => Ok(Self::LiuLian),
            "速喜" | "suxi" | "swiftjoy" => Ok(Self::SuXi),
            "赤口" | "chikou" | "redmouth" => Ok(Self::ChiKou),
            "小吉" | "xiaoji" | "minorfortune" => Ok(Self::XiaoJi),
            "空亡" | "kongwang" | "emptiness" => Ok(Self::KongWang),
            _ => Err(LiurenError::UnknownSymbol {
                kind: "palace",
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Palace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_round_trip() {
        for (i, p) in Palace::all().iter().enumerate() {
            assert_eq!(p.position() as usize, i + 1);
            assert_eq!(Palace::from_position(p.position()).unwrap(), *p);
        }
    }

    #[test]
    fn position_out_of_range() {
        assert!(matches!(
            Palace::from_position(0),
            Err(LiurenError::PositionOutOfRange(0))
        ));
        assert!(Palace::from_position(7).is_err());
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Palace::DaAn.next(), Palace::LiuLian);
        assert_eq!(Palace::KongWang.next(), Palace::DaAn);
    }

    #[test]
    fn only_earth_is_shared() {
        let earth = Palace::all()
            .iter()
            .filter(|p| p.element() == Element::Earth)
            .count();
        assert_eq!(earth, 2);
        for e in [Element::Wood, Element::Fire, Element::Metal, Element::Water] {
            let n = Palace::all().iter().filter(|p| p.element() == e).count();
            assert_eq!(n, 1, "{e:?}");
        }
    }

    #[test]
    fn parse_variants() {
        assert_eq!(Palace::parse("赤口").unwrap(), Palace::ChiKou);
        assert_eq!(Palace::parse("Great Peace").unwrap(), Palace::DaAn);
        assert_eq!(Palace::parse("6").unwrap(), Palace::KongWang);
        assert!(Palace::parse("9").is_err());
        assert!(Palace::parse("lucky").is_err());
    }
}
