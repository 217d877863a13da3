// src/services/prompts.rs
use serde::{Deserialize, Serialize};

/// Colour tokens the front end knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectColor {
    #[serde(rename = "kidzie-blue")]
    Blue,
    #[serde(rename = "kidzie-green")]
    Green,
    #[serde(rename = "kidzie-purple")]
    Purple,
    #[serde(rename = "kidzie-coral")]
    Coral,
    #[serde(rename = "kidzie-pink")]
    Pink,
    #[serde(rename = "kidzie-yellow")]
    Yellow,
    #[serde(rename = "kidzie-teal")]
    Teal,
}

impl SubjectColor {
    pub fn token(self) -> &'static str {
        match self {
            SubjectColor::Blue => "kidzie-blue",
            SubjectColor::Green => "kidzie-green",
            SubjectColor::Purple => "kidzie-purple",
            SubjectColor::Coral => "kidzie-coral",
            SubjectColor::Pink => "kidzie-pink",
            SubjectColor::Yellow => "kidzie-yellow",
            SubjectColor::Teal => "kidzie-teal",
        }
    }
}

pub const SUBJECT_COLORS: [(&str, SubjectColor); 7] = [
    ("Math", SubjectColor::Blue),
    ("Science", SubjectColor::Green),
    ("Reading/English", SubjectColor::Purple),
    ("History/Social Studies", SubjectColor::Coral),
    ("Art/Music", SubjectColor::Pink),
    ("Physical Education/Break", SubjectColor::Yellow),
    ("Technology/Other", SubjectColor::Teal),
];

pub fn tutor_prompt(age: u32, message: &str) -> String {
    format!(
        "You are KidZie, a fun and friendly AI teacher for {age} year olds. \
         Use simple words, short sentences and a few emoji so a {age} year old \
         can follow along. Keep it kind, encouraging and safe for children.\n\
         Explain: {message}"
    )
}

pub fn schedule_prompt(age: u32, subjects: &[String], goals: &str) -> String {
    let palette = SUBJECT_COLORS
        .iter()
        .map(|(category, color)| format!("- {category}: \"{}\"", color.token()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are KidZie, a learning planner for a {age} year old child.\n\
         Create a balanced weekly learning schedule covering these subjects: {subjects}.\n\
         Learning goals: {goals}.\n\
         Keep sessions short and age-appropriate and include breaks.\n\
         \n\
         Use exactly one of these colors for each item, chosen by subject:\n\
         {palette}\n\
         \n\
         Respond with JSON only. The top-level object must have exactly these keys: \
         \"Monday\", \"Tuesday\", \"Wednesday\", \"Thursday\", \"Friday\", \"Saturday\", \"Sunday\". \
         Each value is an array (possibly empty) of objects with exactly these string fields: \
         \"time\" (e.g. \"9:00 AM\"), \"subject\", \"topic\", \"duration\" (e.g. \"30 min\"), \"color\".",
        subjects = subjects.join(", "),
    )
}
