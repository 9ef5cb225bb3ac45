//! Fixed lookup data for panchang labels, prediction text, remedies and
//! lucky attributes. Indices are weekday (Monday=0) or positions in the
//! 30-day / 27-asterism cycles; none of this is computed at runtime.

/// The 15 tithi names of a paksha. Index 14 doubles as full/new moon day.
pub const TITHI_NAMES: [&str; 15] = [
    "Padyami",
    "Vidiya",
    "Thadiya",
    "Chavithi",
    "Panchami",
    "Shashti",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Pournami/Amavasya",
];

/// The 27 nakshatras in canonical order (0 = Ashwini .. 26 = Revati).
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Arudra",
    "Punarvasu",
    "Pushyami",
    "Ashlesha",
    "Makha",
    "Pubba",
    "Uttara",
    "Hasta",
    "Chitta",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Moola",
    "Purvashadha",
    "Uttarashadha",
    "Shravanam",
    "Dhanishta",
    "Shatabhisham",
    "Purvabhadra",
    "Uttarabhadra",
    "Revati",
];

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Opening sentence of every prediction, one per weekday.
pub const WEEKDAY_OPENINGS: [&str; 7] = [
    "Monday's Moon influence keeps your mind steady and calm.",
    "Tuesday's Mars energy grants you courage and strength.",
    "Wednesday's Mercury blessing sharpens your communication skills.",
    "Thursday's Jupiter grace brings growing wisdom and fortune.",
    "Friday's Venus influence deepens relationships and beauty.",
    "Saturday's Saturn influence rewards hard, patient work.",
    "Sunday's Sun radiance makes your personality shine.",
];

/// Per-tone sentence templates; `{area}` is replaced with a life-area label.
pub const FAVORABLE_TEMPLATES: [&str; 3] = [
    "Today is a favorable day for you. Good progress awaits in {area} matters.",
    "There are strong chances of success in {area} matters.",
    "Undertakings connected to {area} bring auspicious results today.",
];

pub const NEUTRAL_TEMPLATES: [&str; 2] = [
    "Expect ordinary conditions in {area} matters. Proceed with care.",
    "Practice patience in {area} today. Good results may follow.",
];

pub const CHALLENGING_TEMPLATES: [&str; 2] = [
    "Caution is needed in {area} matters. Avoid hasty decisions.",
    "Obstacles may appear in {area} today. Face them with courage.",
];

/// Curated effect phrases for 11 of the 27 nakshatras. The rest produce no
/// extra sentence.
pub fn nakshatra_effect(index: u8) -> Option<&'static str> {
    match index {
        0 => Some("swift progress"),
        3 => Some("stability and growth"),
        7 => Some("nourishment and prosperity"),
        9 => Some("honor and authority"),
        12 => Some("skill and creativity"),
        14 => Some("independence and positivity"),
        16 => Some("friendship and cooperation"),
        18 => Some("transformation and strong foundations"),
        21 => Some("knowledge and understanding"),
        23 => Some("healing and hidden truths"),
        26 => Some("compassion and completeness"),
        _ => None,
    }
}

pub const FULL_MOON_SENTENCE: &str = "The full moon's influence strengthens your emotions.";
pub const NEW_MOON_SENTENCE: &str = "The new moon period is auspicious for fresh beginnings.";

/// Three remedy candidates per weekday; predictions carry the first two.
pub const WEEKDAY_REMEDIES: [[&str; 3]; 7] = [
    [
        "Worship Lord Shiva on Monday",
        "Donate milk",
        "Wear white clothing",
    ],
    [
        "Offer Tuesday prayers to Hanuman",
        "Donate red lentils",
        "Recite the Hanuman Chalisa",
    ],
    [
        "Worship Lord Vishnu on Wednesday",
        "Donate green gram",
        "Help students with their studies",
    ],
    [
        "Worship Lord Brihaspati on Thursday",
        "Donate turmeric",
        "Show respect to your teachers",
    ],
    [
        "Perform Mahalakshmi puja on Friday",
        "Donate honey",
        "Offer white flowers",
    ],
    [
        "Bow to Lord Shani on Saturday",
        "Donate black sesame",
        "Help those in need",
    ],
    [
        "Offer water to the Sun on Sunday",
        "Donate wheat",
        "Pray to your ancestors",
    ],
];

/// Appended when the day's tone is challenging.
pub const CHALLENGING_REMEDY: &str =
    "Pray to your chosen deity today - obstacles will fall away";

pub const TIME_SLOTS: [&str; 5] = [
    "Morning 6:00 - 9:00",
    "Morning 10:00 - 12:00",
    "Afternoon 12:00 - 3:00",
    "Evening 4:00 - 6:00",
    "Evening 6:00 - 8:00",
];

pub const DIRECTIONS: [&str; 5] = ["East", "West", "North", "South", "Northeast"];

pub const LUCKY_NUMBERS: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_curated_effect_points_at_a_real_nakshatra() {
        let curated: Vec<u8> = (0..27).filter(|&i| nakshatra_effect(i).is_some()).collect();
        assert_eq!(curated, vec![0, 3, 7, 9, 12, 14, 16, 18, 21, 23, 26]);
        assert!(nakshatra_effect(27).is_none());
    }

    #[test]
    fn test_template_buckets_are_nonempty() {
        assert_eq!(FAVORABLE_TEMPLATES.len(), 3);
        assert_eq!(NEUTRAL_TEMPLATES.len(), 2);
        assert_eq!(CHALLENGING_TEMPLATES.len(), 2);
        for template in FAVORABLE_TEMPLATES
            .iter()
            .chain(NEUTRAL_TEMPLATES.iter())
            .chain(CHALLENGING_TEMPLATES.iter())
        {
            assert!(template.contains("{area}"));
        }
    }
}
