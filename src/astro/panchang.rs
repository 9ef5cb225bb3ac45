//! Simplified panchang arithmetic over whole civil dates.
//!
//! The lunar cycle is idealized as exactly 30 days anchored on the
//! 2024-01-11 new moon, and the asterism advances 13 positions per day
//! from the 2000-01-01 epoch. Both offsets use euclidean remainders so
//! dates before the anchors stay in range.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::astro::tables;

const REFERENCE_NEW_MOON: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 11) {
    Some(date) => date,
    None => panic!("reference new moon is a valid date"),
};

const NAKSHATRA_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("nakshatra epoch is a valid date"),
};

/// Waxing or waning half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub fn label(self) -> &'static str {
        match self {
            Paksha::Shukla => "Shukla Paksha",
            Paksha::Krishna => "Krishna Paksha",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    Full,
    Waxing,
    Waning,
}

impl MoonPhase {
    pub fn label(self) -> &'static str {
        match self {
            MoonPhase::New => "Amavasya (New Moon)",
            MoonPhase::Full => "Pournami (Full Moon)",
            MoonPhase::Waxing => "Waxing Moon",
            MoonPhase::Waning => "Waning Moon",
        }
    }
}

/// Typed panchang values for one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanchangDay {
    /// Offset in the 30-day cycle, 0..=29. Zero is the new moon day.
    pub lunar_day: u8,
    pub paksha: Paksha,
    /// Position within the paksha, 0..=14.
    pub tithi_index: u8,
    /// Position in the 27-asterism cycle, 0..=26.
    pub nakshatra_index: u8,
    pub weekday: Weekday,
    pub moon_phase: MoonPhase,
}

impl PanchangDay {
    /// "Shukla Paksha Padyami" style label.
    pub fn tithi_label(&self) -> String {
        format!(
            "{} {}",
            self.paksha.label(),
            tables::TITHI_NAMES[self.tithi_index as usize]
        )
    }

    pub fn nakshatra_name(&self) -> &'static str {
        tables::NAKSHATRA_NAMES[self.nakshatra_index as usize]
    }

    pub fn weekday_index(&self) -> u32 {
        self.weekday.num_days_from_monday()
    }

    pub fn weekday_name(&self) -> &'static str {
        tables::WEEKDAY_NAMES[self.weekday_index() as usize]
    }

    pub fn snapshot(&self) -> PanchangSnapshot {
        PanchangSnapshot {
            tithi: self.tithi_label(),
            nakshatra: self.nakshatra_name().to_string(),
            weekday: self.weekday_name().to_string(),
            moon_phase: self.moon_phase.label().to_string(),
        }
    }
}

/// Display strings carried into rendered emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanchangSnapshot {
    pub tithi: String,
    pub nakshatra: String,
    pub weekday: String,
    pub moon_phase: String,
}

/// Days into the 30-day cycle, 0..=29 for any date.
pub fn lunar_day_offset(date: NaiveDate) -> u8 {
    let days = date.signed_duration_since(REFERENCE_NEW_MOON).num_days();
    days.rem_euclid(30) as u8
}

/// Asterism index for a date, 0..=26.
pub fn nakshatra_index(date: NaiveDate) -> u8 {
    let days = date.signed_duration_since(NAKSHATRA_EPOCH).num_days();
    (days * 13).rem_euclid(27) as u8
}

pub fn panchang_for(date: NaiveDate) -> PanchangDay {
    let lunar_day = lunar_day_offset(date);
    let paksha = if lunar_day < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };

    PanchangDay {
        lunar_day,
        paksha,
        tithi_index: lunar_day % 15,
        nakshatra_index: nakshatra_index(date),
        weekday: date.weekday(),
        moon_phase: moon_phase_for_offset(lunar_day),
    }
}

fn moon_phase_for_offset(lunar_day: u8) -> MoonPhase {
    let phase = f64::from(lunar_day) / 30.0;
    if phase < 0.03 || phase > 0.97 {
        MoonPhase::New
    } else if phase > 0.22 && phase < 0.28 {
        MoonPhase::Full
    } else if phase < 0.25 {
        MoonPhase::Waxing
    } else {
        MoonPhase::Waning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_new_moon_day() {
        let day = panchang_for(date(2024, 1, 11));
        assert_eq!(day.lunar_day, 0);
        assert_eq!(day.paksha, Paksha::Shukla);
        assert_eq!(day.tithi_label(), "Shukla Paksha Padyami");
        assert_eq!(day.nakshatra_index, 13);
        assert_eq!(day.nakshatra_name(), "Chitta");
        assert_eq!(day.weekday, Weekday::Thu);
        assert_eq!(day.moon_phase, MoonPhase::New);
    }

    #[test]
    fn test_dates_before_reference_stay_in_range() {
        // Ten days before the anchor lands at offset 20.
        let day = panchang_for(date(2024, 1, 1));
        assert_eq!(day.lunar_day, 20);
        assert_eq!(day.paksha, Paksha::Krishna);
        assert_eq!(day.tithi_label(), "Krishna Paksha Shashti");
        assert_eq!(day.moon_phase, MoonPhase::Waning);
    }

    #[test]
    fn test_full_moon_band_covers_offsets_seven_and_eight() {
        assert_eq!(panchang_for(date(2024, 1, 18)).moon_phase, MoonPhase::Full);
        assert_eq!(panchang_for(date(2024, 1, 19)).moon_phase, MoonPhase::Full);
    }

    #[test]
    fn test_phase_bands_partition_the_cycle() {
        for offset in 0u8..30 {
            let expected = match offset {
                0 => MoonPhase::New,
                1..=6 => MoonPhase::Waxing,
                7 | 8 => MoonPhase::Full,
                _ => MoonPhase::Waning,
            };
            assert_eq!(moon_phase_for_offset(offset), expected, "offset {offset}");
        }
    }

    #[test]
    fn test_lunar_cycle_repeats_every_thirty_days() {
        let base = date(2025, 6, 1);
        for step in 0i64..60 {
            let d = base + chrono::Duration::days(step);
            let shifted = d + chrono::Duration::days(30);
            assert_eq!(lunar_day_offset(d), lunar_day_offset(shifted));
        }
    }

    #[test]
    fn test_asterism_cycle_repeats_every_twenty_seven_days() {
        let base = date(2025, 6, 1);
        for step in 0i64..54 {
            let d = base + chrono::Duration::days(step);
            let shifted = d + chrono::Duration::days(27);
            assert_eq!(nakshatra_index(d), nakshatra_index(shifted));
        }
    }

    #[test]
    fn test_snapshot_carries_all_four_labels() {
        let snapshot = panchang_for(date(2024, 1, 5)).snapshot();
        assert_eq!(snapshot.tithi, "Krishna Paksha Dashami");
        assert_eq!(snapshot.nakshatra, "Anuradha");
        assert_eq!(snapshot.weekday, "Friday");
        assert_eq!(snapshot.moon_phase, "Waning Moon");
    }
}
