//! Chart construction: branch placement around the palaces and per-palace
//! beast/relation derivation.
//!
//! The current branch sits in the landing palace. The remaining palaces,
//! walked forward from the landing palace, receive the next unused branches
//! of the same polarity, stepping two at a time around the branch cycle.
//! Each palace then takes the beast of its branch and the kinship relation
//! of its element toward the landing palace's element.

use serde::{Deserialize, Serialize};

use crate::beast::Beast;
use crate::branch::{BRANCH_COUNT, Branch, Polarity};
use crate::element::Element;
use crate::error::{LiurenError, LiurenResult};
use crate::palace::{PALACE_COUNT, Palace};
use crate::relation::Relation;

/// One palace slot of a built chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceRecord {
    /// The palace occupying this slot.
    pub palace: Palace,
    /// The branch placed in this palace.
    pub branch: Branch,
    /// Guardian beast of the placed branch.
    pub beast: Beast,
    /// Kinship relation toward the landing palace.
    pub relation: Relation,
    /// The palace's static element.
    pub element: Element,
    /// Whether this is the landing palace itself (本人) rather than a sibling.
    pub is_landing: bool,
}

impl PalaceRecord {
    /// The palace's 1-based position.
    pub fn position(&self) -> u32 {
        self.palace.position()
    }
}

/// A complete Six Palaces chart.
///
/// Loading a chart rebuilds it from its landing palace and that palace's
/// branch; any stored record that differs from the rebuild is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredChart")]
pub struct Chart {
    landing: Palace,
    palaces: [PalaceRecord; PALACE_COUNT],
}

#[derive(Deserialize)]
struct StoredChart {
    landing: Palace,
    palaces: [PalaceRecord; PALACE_COUNT],
}

impl TryFrom<StoredChart> for Chart {
    type Error = LiurenError;

    fn try_from(stored: StoredChart) -> LiurenResult<Self> {
        let current = stored.palaces[stored.landing.position() as usize - 1].branch;
        let rebuilt = build(stored.landing, current);
        if rebuilt.palaces != stored.palaces {
            return Err(LiurenError::InconsistentRecord("chart"));
        }
        Ok(rebuilt)
    }
}

impl Chart {
    /// The palace the inputs landed on.
    pub fn landing(&self) -> Palace {
        self.landing
    }

    /// All six palace records in ordinal order.
    pub fn palaces(&self) -> &[PalaceRecord; PALACE_COUNT] {
        &self.palaces
    }

    /// The record for a given palace.
    pub fn record(&self, palace: Palace) -> &PalaceRecord {
        &self.palaces[palace.position() as usize - 1]
    }

    /// The landing palace's record.
    pub fn landing_record(&self) -> &PalaceRecord {
        self.record(self.landing)
    }

    /// The polarity shared by every branch in the chart.
    pub fn polarity(&self) -> Polarity {
        self.landing_record().branch.polarity()
    }
}

/// Place branches around the palaces, anchored on the landing palace.
///
/// Returns the branches in palace order.
pub fn place_branches(landing: Palace, current: Branch) -> [Branch; PALACE_COUNT] {
    let polarity = current.polarity();
    tracing::debug!(
        landing = %landing,
        current = %current,
        polarity = %polarity,
        "placing branches"
    );

    let mut slots: [Option<Branch>; PALACE_COUNT] = [None; PALACE_COUNT];
    slots[landing.position() as usize - 1] = Some(current);

    let mut cursor = current.index();
    let mut palace = landing;
    for _ in 1..PALACE_COUNT {
        palace = palace.next();
        let slot = palace.position() as usize - 1;
        if slots[slot].is_some() {
            continue;
        }

        let mut probes = 0;
        let placed = loop {
            cursor = (cursor + 2) % BRANCH_COUNT;
            probes += 1;
            let candidate = Branch::from_index(cursor);
            tracing::trace!(palace = %palace, candidate = %candidate, "probing branch");
            if candidate.polarity() == polarity && !slots.contains(&Some(candidate)) {
                break candidate;
            }
            assert!(
                probes <= BRANCH_COUNT,
                "no unused {polarity} branch left for {palace:?}"
            );
        };
        tracing::debug!(palace = %palace, branch = %placed, "placed branch");
        slots[slot] = Some(placed);
    }

    slots.map(|b| b.unwrap_or_else(|| unreachable!("palace slot left empty")))
}

/// Build the full chart for a landing palace and the current time branch.
pub fn build(landing: Palace, current: Branch) -> Chart {
    let branches = place_branches(landing, current);
    let falling = landing.element();

    let palaces = std::array::from_fn(|i| {
        let palace = Palace::all()[i];
        let branch = branches[i];
        let element = palace.element();
        PalaceRecord {
            palace,
            branch,
            beast: branch.beast(),
            relation: Relation::derive(element, falling),
            element,
            is_landing: palace == landing,
        }
    });

    let chart = Chart { landing, palaces };
    tracing::debug!(
        landing = %landing,
        falling = %falling,
        branches = ?branches,
        "built chart"
    );
    chart
}
