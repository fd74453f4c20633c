//! A single divination request: question, numbers, time, and the chart.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{self, Chart};
use crate::config::{DivinationConfig, Language};
use crate::error::{LiurenError, LiurenResult};
use crate::input::{Numbers, Question};
use crate::interpret::InterpretationRequest;
use crate::locator::locate;
use crate::summary;
use crate::time::resolve_time;

/// A cast divination. Immutable once built.
///
/// A loaded divination is cast again from its question, numbers, and time,
/// and must agree with the stored branch and chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredDivination")]
pub struct Divination {
    question: Question,
    numbers: Numbers,
    cast_at: DateTime<FixedOffset>,
    hour_branch: Branch,
    chart: Chart,
}

#[derive(Deserialize)]
struct StoredDivination {
    question: Question,
    numbers: Numbers,
    cast_at: DateTime<FixedOffset>,
    hour_branch: Branch,
    chart: Chart,
}

impl TryFrom<StoredDivination> for Divination {
    type Error = LiurenError;

    fn try_from(stored: StoredDivination) -> LiurenResult<Self> {
        let recast = stored.question.cast(stored.numbers, stored.cast_at);
        if recast.hour_branch != stored.hour_branch || recast.chart != stored.chart {
            return Err(LiurenError::InconsistentRecord("divination"));
        }
        Ok(recast)
    }
}

impl Question {
    /// Cast a divination for this question with the querent's numbers at `cast_at`.
    pub fn cast(self, numbers: Numbers, cast_at: DateTime<FixedOffset>) -> Divination {
        let hour_branch = resolve_time(&cast_at);
        let landing = locate(numbers.first, numbers.second);
        let chart = chart::build(landing, hour_branch);
        tracing::info!(
            numbers = %numbers,
            hour_branch = %hour_branch,
            landing = %landing,
            "cast divination"
        );
        Divination {
            question: self,
            numbers,
            cast_at,
            hour_branch,
            chart,
        }
    }
}

impl Divination {
    /// Validate the question and cast at an explicit time.
    pub fn cast(
        question: &str,
        numbers: Numbers,
        cast_at: DateTime<FixedOffset>,
    ) -> LiurenResult<Self> {
        Ok(Question::new(question)?.cast(numbers, cast_at))
    }

    /// Validate the question and cast at the configured clock's current time.
    pub fn cast_now(
        question: &str,
        numbers: Numbers,
        config: &DivinationConfig,
    ) -> LiurenResult<Self> {
        Self::cast(question, numbers, config.now())
    }

    /// The question asked.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// The querent's numbers.
    pub fn numbers(&self) -> Numbers {
        self.numbers
    }

    /// When the divination was cast.
    pub fn cast_at(&self) -> DateTime<FixedOffset> {
        self.cast_at
    }

    /// The time branch at casting.
    pub fn hour_branch(&self) -> Branch {
        self.hour_branch
    }

    /// The built chart.
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// Human-readable summary of the result.
    pub fn summary(&self, language: Language) -> String {
        summary::render(self, language)
    }

    /// Request payload for a narrative interpretation service.
    pub fn interpretation_request(&self, language: Language) -> InterpretationRequest {
        InterpretationRequest::new(&self.question, &self.summary(language), language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::Palace;

    fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(&format!("2026-10-18T{hour:02}:{minute:02}:00+08:00")).unwrap()
    }

    #[test]
    fn cast_resolves_branch_and_palace() {
        let d = Divination::cast("career", Numbers::new(3, 5), at(10, 5)).unwrap();
        assert_eq!(d.hour_branch(), Branch::Si);
        assert_eq!(d.chart().landing(), Palace::DaAn);
        assert_eq!(d.chart().landing_record().branch, Branch::Si);
        assert_eq!(d.question().as_str(), "career");
    }

    #[test]
    fn blank_question_rejected() {
        let err = Divination::cast("   ", Numbers::new(1, 1), at(10, 0)).unwrap_err();
        assert!(matches!(err, LiurenError::EmptyQuestion));
    }

    #[test]
    fn midnight_cast_uses_zi() {
        let d = Divination::cast("health", Numbers::new(-5, 0), at(0, 30)).unwrap();
        assert_eq!(d.hour_branch(), Branch::Zi);
        assert_eq!(d.chart().landing(), Palace::LiuLian);
    }

    #[test]
    fn cast_now_respects_hour_override() {
        let cfg = DivinationConfig::default()
            .with_utc_offset_hours(8)
            .with_hour_override(14)
            .unwrap();
        let d = Divination::cast_now("travel", Numbers::new(2, 2), &cfg).unwrap();
        assert_eq!(d.hour_branch(), Branch::Wei);
    }

    #[test]
    fn serde_roundtrip() {
        let d = Divination::cast("career", Numbers::new(3, 5), at(10, 5)).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        let back: Divination = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    fn cast_json() -> serde_json::Value {
        let d = Divination::cast("career", Numbers::new(3, 5), at(10, 5)).unwrap();
        serde_json::to_value(&d).unwrap()
    }

    #[test]
    fn loading_rejects_blank_question() {
        let mut value = cast_json();
        value["question"] = serde_json::json!("   ");
        let err = serde_json::from_value::<Divination>(value).unwrap_err();
        assert!(err.to_string().contains("question must not be empty"));
    }

    #[test]
    fn loading_rejects_branch_not_matching_time() {
        let mut value = cast_json();
        value["hour_branch"] = serde_json::json!("Hai");
        let err = serde_json::from_value::<Divination>(value).unwrap_err();
        assert!(err.to_string().contains("stored divination does not match"));
    }

    #[test]
    fn loading_rejects_chart_from_other_numbers() {
        let mut value = cast_json();
        let other = Divination::cast("career", Numbers::new(3, 4), at(10, 5)).unwrap();
        value["chart"] = serde_json::to_value(other.chart()).unwrap();
        assert!(serde_json::from_value::<Divination>(value).is_err());
    }
}
