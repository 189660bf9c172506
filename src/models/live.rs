//! Live Runs Models
//!
//! Response types for the `/api/ars/liveruns` endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A timed event within a live run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,
    pub rta: u64,
    pub igt: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uuid: String,
    #[serde(default)]
    pub live_account: Option<String>,
}

/// Item tracking data reported by the runner's client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    pub estimated_counts: HashMap<String, i64>,
    pub usages: HashMap<String, i64>,
}

/// A run currently in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveRun {
    pub world_id: String,
    pub game_version: String,
    pub event_list: Vec<Event>,
    pub context_event_list: Vec<Event>,
    pub user: User,
    pub is_cheated: bool,
    pub is_hidden: bool,
    pub num_leaves: u32,
    pub last_updated: i64,
    pub nickname: String,
    #[serde(default)]
    pub item_data: Option<ItemData>,
}

impl LiveRun {
    /// The most recent event, if the run has reached any split yet.
    pub fn latest_event(&self) -> Option<&Event> {
        self.event_list.iter().max_by_key(|event| event.igt)
    }
}
