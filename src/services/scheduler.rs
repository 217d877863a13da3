// src/services/scheduler.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::model::{GenerativeModel, ModelError, ResponseFormat};
use super::prompts::{SubjectColor, schedule_prompt};

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleItem {
    pub time: String,
    pub subject: String,
    pub topic: String,
    pub duration: String,
    pub color: SubjectColor,
}

/// One week of items; fields serialise in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeeklySchedule {
    #[serde(rename = "Monday")]
    pub monday: Vec<ScheduleItem>,
    #[serde(rename = "Tuesday")]
    pub tuesday: Vec<ScheduleItem>,
    #[serde(rename = "Wednesday")]
    pub wednesday: Vec<ScheduleItem>,
    #[serde(rename = "Thursday")]
    pub thursday: Vec<ScheduleItem>,
    #[serde(rename = "Friday")]
    pub friday: Vec<ScheduleItem>,
    #[serde(rename = "Saturday")]
    pub saturday: Vec<ScheduleItem>,
    #[serde(rename = "Sunday")]
    pub sunday: Vec<ScheduleItem>,
}

impl WeeklySchedule {
    pub fn days(&self) -> [(&'static str, &[ScheduleItem]); 7] {
        [
            (WEEKDAYS[0], self.monday.as_slice()),
            (WEEKDAYS[1], self.tuesday.as_slice()),
            (WEEKDAYS[2], self.wednesday.as_slice()),
            (WEEKDAYS[3], self.thursday.as_slice()),
            (WEEKDAYS[4], self.friday.as_slice()),
            (WEEKDAYS[5], self.saturday.as_slice()),
            (WEEKDAYS[6], self.sunday.as_slice()),
        ]
    }
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("At least one subject is required")]
    NoSubjects,
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("model returned invalid JSON: {0}")]
    InvalidJson(String),
    #[error("model returned a schedule with an invalid shape: {0}")]
    InvalidShape(String),
}

pub async fn generate_schedule(
    model: &dyn GenerativeModel,
    age: u32,
    subjects: &[String],
    goals: &str,
) -> Result<WeeklySchedule, ScheduleError> {
    let subjects: Vec<String> = subjects
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if subjects.is_empty() {
        return Err(ScheduleError::NoSubjects);
    }

    tracing::info!(age, subjects = subjects.len(), "schedule request");

    let raw = model
        .generate_text(&schedule_prompt(age, &subjects, goals), ResponseFormat::Json)
        .await?;

    let schedule = parse_schedule(&raw)?;
    tracing::debug!(
        items = schedule.days().iter().map(|(_, items)| items.len()).sum::<usize>(),
        "schedule validated"
    );
    Ok(schedule)
}

pub fn parse_schedule(raw: &str) -> Result<WeeklySchedule, ScheduleError> {
    let value: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| ScheduleError::InvalidJson(e.to_string()))?;

    let Some(days) = value.as_object() else {
        return Err(ScheduleError::InvalidShape("expected a JSON object".into()));
    };

    let missing: Vec<&str> = WEEKDAYS
        .iter()
        .copied()
        .filter(|day| !days.contains_key(*day))
        .collect();
    if !missing.is_empty() {
        return Err(ScheduleError::InvalidShape(format!(
            "missing weekdays: {}",
            missing.join(", ")
        )));
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::warn!(error = %e, "schedule failed validation");
        ScheduleError::InvalidShape(e.to_string())
    })
}

/// Models sometimes wrap JSON in a Markdown fence even when asked not to.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
