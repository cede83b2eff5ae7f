//! Yearly award catalog and award results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of yearly awards, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardKind {
    EarlyBird,
    NightOwl,
    MachineGun,
    ConsistencyKing,
    WeekendWarrior,
    CompanyTime,
}

impl AwardKind {
    pub const ALL: [AwardKind; 6] = [
        AwardKind::EarlyBird,
        AwardKind::NightOwl,
        AwardKind::MachineGun,
        AwardKind::ConsistencyKing,
        AwardKind::WeekendWarrior,
        AwardKind::CompanyTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AwardKind::EarlyBird => "Early Bird",
            AwardKind::NightOwl => "Night Owl",
            AwardKind::MachineGun => "Machine Gun",
            AwardKind::ConsistencyKing => "Consistency King",
            AwardKind::WeekendWarrior => "Weekend Warrior",
            AwardKind::CompanyTime => "Boss makes a dollar, I make a dime",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AwardKind::EarlyBird => "☀️",
            AwardKind::NightOwl => "🦉",
            AwardKind::MachineGun => "🔫",
            AwardKind::ConsistencyKing => "👑",
            AwardKind::WeekendWarrior => "🎉",
            AwardKind::CompanyTime => "💰",
        }
    }

    /// Hour-of-day predicate for the time-window awards, on the `timestamp` column of `alias`.
    pub(crate) fn hour_window(self, alias: &str) -> Option<String> {
        let hour = format!("CAST(strftime('%H', {}.timestamp) AS INTEGER)", alias);
        match self {
            AwardKind::EarlyBird => Some(format!("{} BETWEEN 5 AND 8", hour)),
            AwardKind::NightOwl => Some(format!("({h} >= 23 OR {h} <= 4)", h = hour)),
            AwardKind::CompanyTime => Some(format!("{} BETWEEN 9 AND 18", hour)),
            _ => None,
        }
    }
}

impl FromStr for AwardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "early_bird" => Ok(AwardKind::EarlyBird),
            "night_owl" => Ok(AwardKind::NightOwl),
            "machine_gun" => Ok(AwardKind::MachineGun),
            "consistency_king" => Ok(AwardKind::ConsistencyKing),
            "weekend_warrior" => Ok(AwardKind::WeekendWarrior),
            "company_time" => Ok(AwardKind::CompanyTime),
            other => Err(format!("unknown award: {}", other)),
        }
    }
}

/// Winning value: an event count, or a percentage for ratio awards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AwardValue {
    Count(i64),
    Percentage(f64),
}

impl AwardValue {
    pub fn is_zero(&self) -> bool {
        match self {
            AwardValue::Count(n) => *n == 0,
            AwardValue::Percentage(p) => *p == 0.0,
        }
    }
}

impl fmt::Display for AwardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwardValue::Count(n) => write!(f, "{}", n),
            AwardValue::Percentage(p) => write!(f, "{:.1}%", p),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub kind: AwardKind,
    pub name: String,
    pub winner_username: String,
    pub value: AwardValue,
    pub icon: String,
}

impl Award {
    pub fn new(kind: AwardKind, winner_username: impl Into<String>, value: AwardValue) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            winner_username: winner_username.into(),
            value,
            icon: kind.icon().to_string(),
        }
    }
}
