//! Stats API Models
//!
//! Response types for the `/stats/api/` endpoints. Split times are in-game or
//! real-time milliseconds; `None` means the split was not reached.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Split ==
/// A run milestone that stats can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    Nether,
    Bastion,
    Fortress,
    FirstStructure,
    SecondStructure,
    FirstPortal,
    SecondPortal,
    Stronghold,
    End,
    Finish,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Nether => "nether",
            Split::Bastion => "bastion",
            Split::Fortress => "fortress",
            Split::FirstStructure => "first_structure",
            Split::SecondStructure => "second_structure",
            Split::FirstPortal => "first_portal",
            Split::SecondPortal => "second_portal",
            Split::Stronghold => "stronghold",
            Split::End => "end",
            Split::Finish => "finish",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Leaderboard Type ==
/// How leaderboard values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardType {
    #[default]
    Count,
    Average,
    Fastest,
    Conversion,
}

impl fmt::Display for LeaderboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LeaderboardType::Count => "count",
            LeaderboardType::Average => "average",
            LeaderboardType::Fastest => "fastest",
            LeaderboardType::Conversion => "conversion",
        })
    }
}

// == Leaderboard Days ==
/// Time window accepted by `getLeaderboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeaderboardDays {
    Day,
    Week,
    #[default]
    Month,
    AllTime,
}

impl LeaderboardDays {
    pub fn as_days(&self) -> u32 {
        match self {
            LeaderboardDays::Day => 1,
            LeaderboardDays::Week => 7,
            LeaderboardDays::Month => 30,
            LeaderboardDays::AllTime => 9999,
        }
    }
}

impl fmt::Display for LeaderboardDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_days())
    }
}

/// Count and formatted average time for one split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitStats {
    pub count: u64,
    pub avg: String,
}

/// Split stats for a whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub nether: SplitStats,
    pub bastion: SplitStats,
    pub fortress: SplitStats,
    pub first_portal: SplitStats,
    pub stronghold: SplitStats,
    pub end: SplitStats,
    pub finish: SplitStats,
}

/// Full record of a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldData {
    /// Run id in the stats database
    pub id: u64,
    /// Hash of the world file path
    pub world_id: String,
    pub nickname: String,
    pub uuid: String,
    pub twitch: Option<String>,
    pub nether: u64,
    pub bastion: Option<u64>,
    pub fortress: Option<u64>,
    #[serde(rename = "first_portal")]
    pub first_portal: Option<u64>,
    pub stronghold: Option<u64>,
    pub end: Option<u64>,
    pub finish: Option<u64>,
    pub nether_rta: u64,
    pub bastion_rta: Option<u64>,
    pub fortress_rta: Option<u64>,
    #[serde(rename = "first_portalRta")]
    pub first_portal_rta: Option<u64>,
    pub stronghold_rta: Option<u64>,
    pub end_rta: Option<u64>,
    pub finish_rta: Option<u64>,
    /// Unix seconds of nether enter
    pub insert_time: i64,
    /// Unix seconds of the last split update
    pub update_time: i64,
    pub vod_id: Option<u64>,
    /// Seconds from VOD start to run start
    pub vod_offset: Option<i64>,
}

impl WorldData {
    pub fn inserted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.insert_time, 0)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.update_time, 0)
    }
}

/// Response of `getWorld`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    pub data: WorldData,
    /// Unix milliseconds when upstream cached this data
    pub time: i64,
    pub is_live: bool,
}

impl World {
    pub fn cached_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

/// Summary of a recent run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: u64,
    pub nether: u64,
    pub bastion: Option<u64>,
    pub fortress: Option<u64>,
    #[serde(rename = "first_portal")]
    pub first_portal: Option<u64>,
    pub stronghold: Option<u64>,
    pub end: Option<u64>,
    pub finish: Option<u64>,
    pub loot_bastion: Option<u64>,
    pub obtain_obsidian: Option<u64>,
    pub obtain_crying_obsidian: Option<u64>,
    pub obtain_rod: Option<u64>,
    /// Unix seconds of nether enter
    pub time: i64,
}

impl Run {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// One player's row on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub uuid: String,
    pub name: String,
    /// Count, average or fastest time depending on the leaderboard type
    pub value: f64,
    pub qty: u64,
    pub avg: f64,
}

/// Wall-clock split timestamps of a recent run (unix seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamp {
    pub id: u64,
    /// Last split of the run
    pub run_name: String,
    pub start: f64,
    pub nether: i64,
    pub bastion: Option<f64>,
    pub fortress: Option<f64>,
    #[serde(rename = "first_portal")]
    pub first_portal: Option<f64>,
    pub stronghold: Option<f64>,
    pub end: Option<f64>,
    pub finish: Option<f64>,
    pub real_update: Option<f64>,
    pub last_updated: f64,
}

impl Timestamp {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis((self.start * 1000.0) as i64)
    }
}
