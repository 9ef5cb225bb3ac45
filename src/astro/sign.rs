//! Zodiac signs and their fixed attributes: element, ruling body, modality,
//! favorable weekdays, life areas, lucky colors and sign-specific remedies.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::utils::error::HoroscopeError;

/// The twelve signs in zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Classical modality (chara / sthira / dvisvabhava).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

/// Graha that lords over a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulingBody {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Sign::Aries | Sign::Leo | Sign::Sagittarius => Element::Fire,
            Sign::Taurus | Sign::Virgo | Sign::Capricorn => Element::Earth,
            Sign::Gemini | Sign::Libra | Sign::Aquarius => Element::Air,
            Sign::Cancer | Sign::Scorpio | Sign::Pisces => Element::Water,
        }
    }

    pub fn ruling_body(self) -> RulingBody {
        match self {
            Sign::Aries | Sign::Scorpio => RulingBody::Mars,
            Sign::Taurus | Sign::Libra => RulingBody::Venus,
            Sign::Gemini | Sign::Virgo => RulingBody::Mercury,
            Sign::Cancer => RulingBody::Moon,
            Sign::Leo => RulingBody::Sun,
            Sign::Sagittarius | Sign::Pisces => RulingBody::Jupiter,
            Sign::Capricorn | Sign::Aquarius => RulingBody::Saturn,
        }
    }

    pub fn modality(self) -> Modality {
        match self {
            Sign::Aries | Sign::Cancer | Sign::Libra | Sign::Capricorn => Modality::Movable,
            Sign::Taurus | Sign::Leo | Sign::Scorpio | Sign::Aquarius => Modality::Fixed,
            Sign::Gemini | Sign::Virgo | Sign::Sagittarius | Sign::Pisces => Modality::Dual,
        }
    }

    /// Weekdays (Monday=0) on which the sign earns its +3 score bonus.
    pub fn favorable_weekdays(self) -> &'static [u32] {
        match self {
            Sign::Aries => &[1, 6],
            Sign::Taurus => &[4, 5],
            Sign::Gemini => &[2],
            Sign::Cancer => &[0],
            Sign::Leo => &[6],
            Sign::Virgo => &[2],
            Sign::Libra => &[4],
            Sign::Scorpio => &[1],
            Sign::Sagittarius => &[3],
            Sign::Capricorn => &[5],
            Sign::Aquarius => &[5],
            Sign::Pisces => &[3],
        }
    }

    /// Life areas in priority order; predictions use the first two.
    pub fn life_areas(self) -> &'static [LifeArea] {
        match self {
            Sign::Aries => &[
                LifeArea::Action,
                LifeArea::Courage,
                LifeArea::Initiative,
                LifeArea::Competition,
            ],
            Sign::Taurus => &[
                LifeArea::Finance,
                LifeArea::Family,
                LifeArea::Comfort,
                LifeArea::Relationships,
            ],
            Sign::Gemini => &[
                LifeArea::Communication,
                LifeArea::Learning,
                LifeArea::Networking,
                LifeArea::Versatility,
            ],
            Sign::Cancer => &[
                LifeArea::Emotions,
                LifeArea::Home,
                LifeArea::Family,
                LifeArea::Nurturing,
            ],
            Sign::Leo => &[
                LifeArea::Leadership,
                LifeArea::Career,
                LifeArea::Recognition,
                LifeArea::Authority,
            ],
            Sign::Virgo => &[
                LifeArea::Service,
                LifeArea::Health,
                LifeArea::Analysis,
                LifeArea::Perfection,
            ],
            Sign::Libra => &[
                LifeArea::Relationships,
                LifeArea::Balance,
                LifeArea::Art,
                LifeArea::Harmony,
            ],
            Sign::Scorpio => &[
                LifeArea::Transformation,
                LifeArea::Intensity,
                LifeArea::Secrets,
                LifeArea::Power,
            ],
            Sign::Sagittarius => &[
                LifeArea::Education,
                LifeArea::Travel,
                LifeArea::Spirituality,
                LifeArea::Fortune,
            ],
            Sign::Capricorn => &[
                LifeArea::Discipline,
                LifeArea::Career,
                LifeArea::Ambition,
                LifeArea::Responsibility,
            ],
            Sign::Aquarius => &[
                LifeArea::Innovation,
                LifeArea::Social,
                LifeArea::Freedom,
                LifeArea::Uniqueness,
            ],
            Sign::Pisces => &[
                LifeArea::Spirituality,
                LifeArea::Compassion,
                LifeArea::Intuition,
                LifeArea::Dreams,
            ],
        }
    }

    /// Lucky color candidates; the date seed picks one.
    pub fn colors(self) -> &'static [&'static str] {
        match self {
            Sign::Aries => &["Red", "Orange"],
            Sign::Taurus => &["White", "Pink", "Green"],
            Sign::Gemini => &["Green", "Yellow"],
            Sign::Cancer => &["White", "Silver"],
            Sign::Leo => &["Gold", "Orange", "Red"],
            Sign::Virgo => &["Green", "Brown"],
            Sign::Libra => &["Pink", "Blue"],
            Sign::Scorpio => &["Red", "Black"],
            Sign::Sagittarius => &["Yellow", "Orange", "Purple"],
            Sign::Capricorn => &["Black", "Brown"],
            Sign::Aquarius => &["Blue", "Violet"],
            Sign::Pisces => &["Yellow", "Sea Green"],
        }
    }

    /// Sign-specific remedy, only curated for a few signs.
    pub fn remedy(self) -> Option<&'static str> {
        match self {
            Sign::Taurus => Some("Chant the Shukra mantra (Om Shukraya Namaha)"),
            Sign::Leo => Some("Recite the Gayatri mantra"),
            Sign::Sagittarius => Some("Read the Vishnu Sahasranamam"),
            _ => None,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = HoroscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aries" => Ok(Sign::Aries),
            "taurus" => Ok(Sign::Taurus),
            "gemini" => Ok(Sign::Gemini),
            "cancer" => Ok(Sign::Cancer),
            "leo" => Ok(Sign::Leo),
            "virgo" => Ok(Sign::Virgo),
            "libra" => Ok(Sign::Libra),
            "scorpio" => Ok(Sign::Scorpio),
            "sagittarius" => Ok(Sign::Sagittarius),
            "capricorn" => Ok(Sign::Capricorn),
            "aquarius" => Ok(Sign::Aquarius),
            "pisces" => Ok(Sign::Pisces),
            _ => Err(HoroscopeError::InvalidSignError {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Sun sign from a birth date using tropical month/day boundaries.
pub fn sign_from_birth_date(birth_date: NaiveDate) -> Sign {
    // Earlier arms consume the low day ranges, so `(m, _)` arms only see
    // the tail of each month.
    match (birth_date.month(), birth_date.day()) {
        (3, 21..) | (4, ..=19) => Sign::Aries,
        (4, _) | (5, ..=20) => Sign::Taurus,
        (5, _) | (6, ..=20) => Sign::Gemini,
        (6, _) | (7, ..=22) => Sign::Cancer,
        (7, _) | (8, ..=22) => Sign::Leo,
        (8, _) | (9, ..=22) => Sign::Virgo,
        (9, _) | (10, ..=22) => Sign::Libra,
        (10, _) | (11, ..=21) => Sign::Scorpio,
        (11, _) | (12, ..=21) => Sign::Sagittarius,
        (12, _) | (1, ..=19) => Sign::Capricorn,
        (1, _) | (2, ..=18) => Sign::Aquarius,
        _ => Sign::Pisces,
    }
}

/// Life areas a prediction can speak about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeArea {
    Action,
    Courage,
    Initiative,
    Competition,
    Finance,
    Family,
    Comfort,
    Relationships,
    Communication,
    Learning,
    Networking,
    Versatility,
    Emotions,
    Home,
    Nurturing,
    Leadership,
    Career,
    Recognition,
    Authority,
    Service,
    Health,
    Analysis,
    Perfection,
    Balance,
    Art,
    Harmony,
    Transformation,
    Intensity,
    Secrets,
    Power,
    Education,
    Travel,
    Spirituality,
    Fortune,
    Discipline,
    Ambition,
    Responsibility,
    Innovation,
    Social,
    Freedom,
    Uniqueness,
    Compassion,
    Intuition,
    Dreams,
}

impl LifeArea {
    /// Label inserted into `{area}` template slots.
    pub fn label(self) -> &'static str {
        match self {
            LifeArea::Action => "action",
            LifeArea::Courage => "courage",
            LifeArea::Initiative => "initiative",
            LifeArea::Competition => "competition",
            LifeArea::Finance => "financial",
            LifeArea::Family => "family",
            LifeArea::Comfort => "comfort",
            LifeArea::Relationships => "relationship",
            LifeArea::Communication => "communication",
            LifeArea::Learning => "learning",
            LifeArea::Networking => "networking",
            LifeArea::Versatility => "versatility",
            LifeArea::Emotions => "emotional",
            LifeArea::Home => "home",
            LifeArea::Nurturing => "nurturing",
            LifeArea::Leadership => "leadership",
            LifeArea::Career => "career",
            LifeArea::Recognition => "recognition",
            LifeArea::Authority => "authority",
            LifeArea::Service => "service",
            LifeArea::Health => "health",
            LifeArea::Analysis => "analysis",
            LifeArea::Perfection => "perfection",
            LifeArea::Balance => "balance",
            LifeArea::Art => "art",
            LifeArea::Harmony => "harmony",
            LifeArea::Transformation => "transformation",
            LifeArea::Intensity => "intensity",
            LifeArea::Secrets => "secret",
            LifeArea::Power => "power",
            LifeArea::Education => "educational",
            LifeArea::Travel => "travel",
            LifeArea::Spirituality => "spiritual",
            LifeArea::Fortune => "fortune",
            LifeArea::Discipline => "discipline",
            LifeArea::Ambition => "ambition",
            LifeArea::Responsibility => "responsibility",
            LifeArea::Innovation => "innovation",
            LifeArea::Social => "social",
            LifeArea::Freedom => "freedom",
            LifeArea::Uniqueness => "uniqueness",
            LifeArea::Compassion => "compassion",
            LifeArea::Intuition => "intuition",
            LifeArea::Dreams => "dream",
        }
    }
}
