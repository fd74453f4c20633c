//! Six Palaces (Xiao Liu Ren, 小六壬) divination engine.
//!
//! Resolves the current two-hour time branch, locates the landing palace
//! from two numbers, and builds the chart: a branch, guardian beast, kinship
//! relation, and element for each of the six palaces. Everything here is a
//! pure function of its inputs apart from [`DivinationConfig::now`].

pub mod beast;
pub mod branch;
pub mod chart;
pub mod config;
pub mod divination;
pub mod element;
pub mod error;
pub mod input;
pub mod interpret;
pub mod locator;
pub mod palace;
pub mod relation;
pub mod summary;
pub mod time;

pub use beast::Beast;
pub use branch::{Branch, Polarity};
pub use chart::{Chart, PalaceRecord, build};
pub use config::{DivinationConfig, Language};
pub use divination::Divination;
pub use element::Element;
pub use error::{LiurenError, LiurenResult};
pub use input::{Numbers, Question};
pub use interpret::{InterpretationRequest, Message, Role};
pub use locator::locate;
pub use palace::Palace;
pub use relation::Relation;
pub use time::{resolve_hour, resolve_time};
