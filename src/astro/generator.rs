//! Deterministic daily prediction engine.
//!
//! Everything derives from the sign's fixed attributes, the date's panchang
//! values and an md5-based date seed. Same sign and date always produce the
//! same [`PredictionResult`]; no clock or RNG is consulted.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::astro::panchang::{self, MoonPhase, PanchangDay, PanchangSnapshot};
use crate::astro::sign::Sign;
use crate::astro::tables;

/// Overall tone of a day, derived from the favorability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Favorable,
    Neutral,
    Challenging,
}

impl Tone {
    pub fn from_score(score: i32) -> Self {
        if score >= 3 {
            Tone::Favorable
        } else if score <= -2 {
            Tone::Challenging
        } else {
            Tone::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Favorable => "Favorable",
            Tone::Neutral => "Normal",
            Tone::Challenging => "Caution",
        }
    }

    fn templates(self) -> &'static [&'static str] {
        match self {
            Tone::Favorable => &tables::FAVORABLE_TEMPLATES,
            Tone::Neutral => &tables::NEUTRAL_TEMPLATES,
            Tone::Challenging => &tables::CHALLENGING_TEMPLATES,
        }
    }
}

/// Complete daily reading for one sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub panchang: PanchangSnapshot,
    pub lucky_color: String,
    pub lucky_number: String,
    pub lucky_time: String,
    pub lucky_direction: String,
    pub remedies: Vec<String>,
    pub favorability: String,
}

/// 32-bit seed from the md5 digest of the ISO date string.
pub fn date_seed(date: NaiveDate) -> u32 {
    let digest = md5::compute(date.format("%Y-%m-%d").to_string().as_bytes());
    let hex = format!("{:x}", digest);
    u32::from_str_radix(&hex[..8], 16).unwrap_or(0)
}

/// Favorability score for a sign on a day. Weekday bonus +3, seed influence
/// -5..=+4, asterism bonus +1; total always within -5..=+8.
pub fn favorability_score(sign: Sign, day: &PanchangDay, seed: u32) -> i32 {
    let mut score = 0i32;
    if sign.favorable_weekdays().contains(&day.weekday_index()) {
        score += 3;
    }
    score += (seed % 10) as i32 - 5;
    if day.nakshatra_index % 3 == 0 {
        score += 1;
    }
    score
}

pub fn generate(sign: Sign, date: NaiveDate) -> PredictionResult {
    let day = panchang::panchang_for(date);
    let seed = date_seed(date);
    let score = favorability_score(sign, &day, seed);
    let tone = Tone::from_score(score);

    let (lucky_color, lucky_number, lucky_time, lucky_direction) =
        lucky_elements(sign, date, seed, score);

    PredictionResult {
        prediction: compose_prediction(sign, &day, seed, tone),
        panchang: day.snapshot(),
        lucky_color,
        lucky_number,
        lucky_time,
        lucky_direction,
        remedies: daily_remedies(sign, &day, tone),
        favorability: tone.label().to_string(),
    }
}

fn compose_prediction(sign: Sign, day: &PanchangDay, seed: u32, tone: Tone) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(tables::WEEKDAY_OPENINGS[day.weekday_index() as usize].to_string());

    // Two sentences for the sign's leading life areas. The seed picks one
    // template per tone bucket, so both sentences share the same shape.
    let templates = tone.templates();
    let template = templates[seed as usize % templates.len()];
    for area in sign.life_areas().iter().take(2) {
        parts.push(template.replace("{area}", area.label()));
    }

    if let Some(effect) = tables::nakshatra_effect(day.nakshatra_index) {
        parts.push(format!(
            "{} nakshatra brings {}.",
            day.nakshatra_name(),
            effect
        ));
    }

    match day.moon_phase {
        MoonPhase::Full => parts.push(tables::FULL_MOON_SENTENCE.to_string()),
        MoonPhase::New => parts.push(tables::NEW_MOON_SENTENCE.to_string()),
        MoonPhase::Waxing | MoonPhase::Waning => {}
    }

    parts.join(" ")
}

/// Two weekday remedies, plus the sign's own remedy where curated, plus a
/// fallback prayer on challenging days. Between two and four entries.
fn daily_remedies(sign: Sign, day: &PanchangDay, tone: Tone) -> Vec<String> {
    let weekday = day.weekday_index() as usize;
    let mut remedies: Vec<String> = tables::WEEKDAY_REMEDIES[weekday]
        .iter()
        .take(2)
        .map(|r| (*r).to_string())
        .collect();

    if let Some(remedy) = sign.remedy() {
        remedies.push(remedy.to_string());
    }
    if tone == Tone::Challenging {
        remedies.push(tables::CHALLENGING_REMEDY.to_string());
    }

    remedies
}

fn lucky_elements(
    sign: Sign,
    date: NaiveDate,
    seed: u32,
    score: i32,
) -> (String, String, String, String) {
    let colors = sign.colors();
    let color = colors[seed as usize % colors.len()].to_string();

    let number_index = (date.day() as i32 + score).rem_euclid(9) as usize;
    let number = tables::LUCKY_NUMBERS[number_index].to_string();

    let time = tables::TIME_SLOTS[seed as usize % tables::TIME_SLOTS.len()].to_string();
    let direction = tables::DIRECTIONS[seed as usize % tables::DIRECTIONS.len()].to_string();

    (color, number, time, direction)
}
