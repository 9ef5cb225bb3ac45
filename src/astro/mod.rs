//! Astrological core: signs, panchang arithmetic and the prediction engine.

pub mod generator;
pub mod panchang;
pub mod sign;
pub mod tables;

pub use generator::{date_seed, favorability_score, generate, PredictionResult, Tone};
pub use panchang::{panchang_for, MoonPhase, Paksha, PanchangDay, PanchangSnapshot};
pub use sign::{sign_from_birth_date, Element, LifeArea, Modality, RulingBody, Sign};
