//! Kinship relations (六亲) derived from the five-element cycle.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// How a palace's element stands toward the landing palace's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// 兄弟: same element.
    Siblings,
    /// 父母: generates the landing element.
    Parents,
    /// 子孙: generated by the landing element.
    Offspring,
    /// 官鬼: overcomes the landing element.
    Officials,
    /// 妻财: overcome by the landing element.
    Wealth,
}

impl Relation {
    /// All relations.
    pub fn all() -> &'static [Self] {
        &[
            Self::Siblings,
            Self::Parents,
            Self::Offspring,
            Self::Officials,
            Self::Wealth,
        ]
    }

    /// Derive the relation of `current` to the landing element `falling`.
    ///
    /// The five cases partition the element cycle, so exactly one applies.
    pub fn derive(current: Element, falling: Element) -> Self {
        if current == falling {
            Self::Siblings
        } else if falling.generated_by() == current {
            Self::Parents
        } else if falling.generates() == current {
            Self::Offspring
        } else if falling.overcome_by() == current {
            Self::Officials
        } else {
            debug_assert_eq!(falling.overcomes(), current);
            Self::Wealth
        }
    }

    /// The Chinese name.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Siblings => "兄弟",
            Self::Parents => "父母",
            Self::Offspring => "子孙",
            Self::Officials => "官鬼",
            Self::Wealth => "妻财",
        }
    }

    /// The English name.
    pub fn english(self) -> &'static str {
        match self {
            Self::Siblings => "Siblings",
            Self::Parents => "Parents",
            Self::Offspring => "Offspring",
            Self::Officials => "Officials",
            Self::Wealth => "Wealth",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relations_against_wood() {
        let fall = Element::Wood;
        assert_eq!(Relation::derive(Element::Wood, fall), Relation::Siblings);
        assert_eq!(Relation::derive(Element::Water, fall), Relation::Parents);
        assert_eq!(Relation::derive(Element::Fire, fall), Relation::Offspring);
        assert_eq!(Relation::derive(Element::Metal, fall), Relation::Officials);
        assert_eq!(Relation::derive(Element::Earth, fall), Relation::Wealth);
    }

    #[test]
    fn each_landing_element_sees_every_relation_once() {
        for fall in Element::all() {
            let mut seen: Vec<Relation> = Element::all()
                .iter()
                .map(|cur| Relation::derive(*cur, *fall))
                .collect();
            seen.sort_by_key(|r| r.english());
            seen.dedup();
            assert_eq!(seen.len(), 5, "landing {fall:?}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(Relation::Officials.to_string(), "官鬼");
        assert_eq!(Relation::Wealth.english(), "Wealth");
    }
}
