//! Configuration for casting a divination.

use chrono::{DateTime, FixedOffset, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LiurenError, LiurenResult};

/// Language used for summaries and interpretation prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Simplified Chinese, the traditional presentation.
    #[default]
    Chinese,
    /// English with the Chinese symbols alongside.
    English,
}

impl Language {
    /// Parse a language from a user-supplied string.
    pub fn parse(s: &str) -> LiurenResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "cn" | "chinese" | "中文" => Ok(Self::Chinese),
            "en" | "english" => Ok(Self::English),
            _ => Err(LiurenError::UnknownSymbol {
                kind: "language",
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for a divination.
#[derive(Debug, Clone, Default)]
pub struct DivinationConfig {
    /// Output language.
    pub language: Language,
    /// Fixed UTC offset for reading the clock. `None` uses the system's local time.
    pub utc_offset: Option<FixedOffset>,
    /// Replace the clock's hour (0-23), keeping its date and minute.
    pub hour_override: Option<u32>,
}

impl DivinationConfig {
    /// Set the output language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Read the clock at a fixed UTC offset in whole hours (clamped to -12..=14).
    pub fn with_utc_offset_hours(mut self, hours: i32) -> Self {
        self.utc_offset = FixedOffset::east_opt(hours.clamp(-12, 14) * 3600);
        self
    }

    /// Cast as if the clock read the given hour.
    pub fn with_hour_override(mut self, hour: u32) -> LiurenResult<Self> {
        if hour > 23 {
            return Err(LiurenError::HourOutOfRange(hour));
        }
        self.hour_override = Some(hour);
        Ok(self)
    }

    /// The current time as this configuration sees it.
    pub fn now(&self) -> DateTime<FixedOffset> {
        let now = match self.utc_offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        };
        self.apply_hour_override(now)
    }

    /// Apply the hour override, if any, to a timestamp.
    pub fn apply_hour_override(&self, time: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self.hour_override {
            Some(hour) => time.with_hour(hour).unwrap_or(time),
            None => time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = DivinationConfig::default();
        assert_eq!(cfg.language, Language::Chinese);
        assert!(cfg.utc_offset.is_none());
        assert!(cfg.hour_override.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = DivinationConfig::default()
            .with_language(Language::English)
            .with_utc_offset_hours(8)
            .with_hour_override(10)
            .unwrap();
        assert_eq!(cfg.language, Language::English);
        assert_eq!(cfg.utc_offset.unwrap().local_minus_utc(), 8 * 3600);
        assert_eq!(cfg.hour_override, Some(10));
    }

    #[test]
    fn offset_clamped() {
        let cfg = DivinationConfig::default().with_utc_offset_hours(-20);
        assert_eq!(cfg.utc_offset.unwrap().local_minus_utc(), -12 * 3600);
        let cfg = DivinationConfig::default().with_utc_offset_hours(99);
        assert_eq!(cfg.utc_offset.unwrap().local_minus_utc(), 14 * 3600);
    }

    #[test]
    fn hour_override_validated() {
        assert!(DivinationConfig::default().with_hour_override(24).is_err());
    }

    #[test]
    fn now_uses_override_hour() {
        let cfg = DivinationConfig::default()
            .with_utc_offset_hours(0)
            .with_hour_override(23)
            .unwrap();
        assert_eq!(cfg.now().hour(), 23);
        assert_eq!(cfg.now().offset().local_minus_utc(), 0);
    }

    #[test]
    fn language_parse() {
        assert_eq!(Language::parse("EN").unwrap(), Language::English);
        assert_eq!(Language::parse("中文").unwrap(), Language::Chinese);
        assert!(matches!(
            Language::parse("fr"),
            Err(LiurenError::UnknownSymbol { kind: "language", .. })
        ));
    }
}
