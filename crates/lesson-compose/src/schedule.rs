//! Schedule records as delivered by the schedule API

use crate::format::subgroup_id;
use crate::types::{ComposeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One group's weekly schedule, days keyed by `yyyyMMdd`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub group_name: String,
    #[serde(default)]
    pub days: BTreeMap<String, DaySchedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub alert: Option<String>,
    #[serde(default)]
    pub items: Vec<LessonEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonEntry {
    /// Slot number, string-encoded ("1".."7")
    #[serde(rename = "num")]
    pub number: String,
    #[serde(rename = "name")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub teacher: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub room: String,
    /// Raw sub-group label, e.g. "1 гр"
    #[serde(rename = "grp_short", default)]
    pub subgroup: Option<String>,
    #[serde(rename = "grp", default, skip_serializing_if = "Option::is_none")]
    pub subgroup_full: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<serde_json::Value>,
}

impl LessonEntry {
    pub fn subgroup_label(&self) -> &str {
        self.subgroup.as_deref().unwrap_or("")
    }

    /// Parsed sub-group id, 0 for the whole class.
    pub fn subgroup_id(&self) -> u32 {
        subgroup_id(self.subgroup_label())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// All entries sharing one slot of one day, ordered by sub-group id
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGroup<'a> {
    pub number: &'a str,
    pub entries: Vec<&'a LessonEntry>,
}

impl<'a> SlotGroup<'a> {
    pub fn new(number: &'a str, mut entries: Vec<&'a LessonEntry>) -> Self {
        entries.sort_by_key(|entry| entry.subgroup_id());
        Self { number, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group a day's lessons by slot number.
    pub fn group_day(day: &'a DaySchedule) -> Vec<SlotGroup<'a>> {
        let mut slots: BTreeMap<&'a str, Vec<&'a LessonEntry>> = BTreeMap::new();
        for entry in &day.items {
            slots.entry(entry.number.trim()).or_default().push(entry);
        }
        slots
            .into_iter()
            .map(|(number, entries)| SlotGroup::new(number, entries))
            .collect()
    }
}

// =============================================================================
// API envelope
// =============================================================================

/// Raw schedule API response with the group name the fetcher attaches
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    #[serde(alias = "GroupName", alias = "group")]
    pub group_name: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<ResponseResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseResult {
    #[serde(default)]
    pub days: BTreeMap<String, DaySchedule>,
}

impl ScheduleResponse {
    pub fn into_record(self) -> Result<ScheduleRecord> {
        let ResponseBody { error, result, .. } = self.response;

        if let Some(error) = error.filter(|e| !e.trim().is_empty()) {
            return Err(ComposeError::Record(format!(
                "API error for {}: {}",
                self.group_name, error
            )));
        }
        let result = result.ok_or_else(|| {
            ComposeError::Record(format!("No result in response for {}", self.group_name))
        })?;

        Ok(ScheduleRecord {
            group_name: self.group_name,
            days: result.days,
        })
    }

    pub fn from_json(bytes: &[u8]) -> Result<ScheduleRecord> {
        let response: ScheduleResponse = serde_json::from_slice(bytes)
            .map_err(|e| ComposeError::Record(format!("Failed to parse response: {}", e)))?;
        response.into_record()
    }
}
