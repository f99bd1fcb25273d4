pub mod enums;

pub use enums::{BodyPart, DurationBand, Language, Region, RiskTier, Severity};
