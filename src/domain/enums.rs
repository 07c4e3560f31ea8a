//! Closed enumerations for competition and snapshot fields
//!
//! Upstream payloads carry these as upper-case strings; parsing is strict
//! and unrecognized values are an error, never a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitionStatus {
    Scheduled,
    Ongoing,
    Completed,
    Cancelled,
}

/// Outcome of a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitionResult {
    Win,
    Loss,
    Draw,
}

/// Sponsor classification rank, ordered from None up to Platinum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SponsorTier {
    None,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Team classification rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamLevel {
    HighSchool,
    College,
    National,
    Professional,
}

/// Error returned when a string does not name a known enum value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownEnumValue {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompetitionStatus::Scheduled => "SCHEDULED",
            CompetitionStatus::Ongoing => "ONGOING",
            CompetitionStatus::Completed => "COMPLETED",
            CompetitionStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

impl FromStr for CompetitionStatus {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCHEDULED" => Ok(CompetitionStatus::Scheduled),
            "ONGOING" => Ok(CompetitionStatus::Ongoing),
            "COMPLETED" => Ok(CompetitionStatus::Completed),
            "CANCELLED" => Ok(CompetitionStatus::Cancelled),
            other => Err(UnknownEnumValue {
                kind: "competition status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CompetitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompetitionResult::Win => "WIN",
            CompetitionResult::Loss => "LOSS",
            CompetitionResult::Draw => "DRAW",
        };
        f.write_str(s)
    }
}

impl FromStr for CompetitionResult {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WIN" => Ok(CompetitionResult::Win),
            "LOSS" => Ok(CompetitionResult::Loss),
            "DRAW" => Ok(CompetitionResult::Draw),
            other => Err(UnknownEnumValue {
                kind: "competition result",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SponsorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SponsorTier::None => "NONE",
            SponsorTier::Bronze => "BRONZE",
            SponsorTier::Silver => "SILVER",
            SponsorTier::Gold => "GOLD",
            SponsorTier::Platinum => "PLATINUM",
        };
        f.write_str(s)
    }
}

impl FromStr for SponsorTier {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(SponsorTier::None),
            "BRONZE" => Ok(SponsorTier::Bronze),
            "SILVER" => Ok(SponsorTier::Silver),
            "GOLD" => Ok(SponsorTier::Gold),
            "PLATINUM" => Ok(SponsorTier::Platinum),
            other => Err(UnknownEnumValue {
                kind: "sponsor level",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TeamLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamLevel::HighSchool => "HIGH_SCHOOL",
            TeamLevel::College => "COLLEGE",
            TeamLevel::National => "NATIONAL",
            TeamLevel::Professional => "PROFESSIONAL",
        };
        f.write_str(s)
    }
}

impl FromStr for TeamLevel {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH_SCHOOL" => Ok(TeamLevel::HighSchool),
            "COLLEGE" => Ok(TeamLevel::College),
            "NATIONAL" => Ok(TeamLevel::National),
            "PROFESSIONAL" => Ok(TeamLevel::Professional),
            other => Err(UnknownEnumValue {
                kind: "team level",
                value: other.to_string(),
            }),
        }
    }
}
