use crate::triage::TriageError;

/// Macro to generate a tag enum with as_str + std::str::FromStr + string serde.
///
/// Variant order is the declaration order, so `Ord` follows it.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = TriageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(TriageError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(Language {
    English => "en",
    Hindi => "hi",
    Marathi => "mr",
    Bengali => "bn",
    Punjabi => "pa",
    Tamil => "ta",
    Telugu => "te",
    Gujarati => "gu",
});

str_enum!(Region {
    North => "north",
    West => "west",
    East => "east",
    South => "south",
    General => "general",
});

str_enum!(RiskTier {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(BodyPart {
    Head => "head",
    Chest => "chest",
    Stomach => "stomach",
    Throat => "throat",
    Body => "body",
    Skin => "skin",
    Joints => "joints",
    Other => "other",
});

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(DurationBand {
    OneDay => "1-day",
    FewDays => "2-3-days",
    WeekPlus => "week-plus",
});

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::General
    }
}

impl Language {
    /// Remedy region a speaker of this language most likely lives in.
    pub fn default_region(&self) -> Region {
        match self {
            Self::Hindi | Self::Punjabi => Region::North,
            Self::Marathi | Self::Gujarati => Region::West,
            Self::Bengali => Region::East,
            Self::Tamil | Self::Telugu => Region::South,
            Self::English => Region::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn language_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_str(lang.as_str()).unwrap(), *lang);
        }
        assert_eq!(Language::ALL.len(), 8);
    }

    #[test]
    fn risk_tier_is_totally_ordered() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
        assert_eq!(
            [RiskTier::Medium, RiskTier::High, RiskTier::Low].iter().max(),
            Some(&RiskTier::High)
        );
    }

    #[test]
    fn duration_band_uses_hyphenated_tags() {
        assert_eq!(DurationBand::from_str("week-plus").unwrap(), DurationBand::WeekPlus);
        assert_eq!(DurationBand::FewDays.as_str(), "2-3-days");
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&RiskTier::High).unwrap();
        assert_eq!(json, "\"high\"");
        let region: Region = serde_json::from_str("\"south\"").unwrap();
        assert_eq!(region, Region::South);
        assert!(serde_json::from_str::<Region>("\"mars\"").is_err());
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Language::from_str("fr").is_err());
        assert!(Severity::from_str("").is_err());
        assert!(matches!(
            BodyPart::from_str("elbow"),
            Err(TriageError::InvalidEnum { .. })
        ));
    }

    #[test]
    fn default_region_follows_language() {
        assert_eq!(Language::Hindi.default_region(), Region::North);
        assert_eq!(Language::Gujarati.default_region(), Region::West);
        assert_eq!(Language::Bengali.default_region(), Region::East);
        assert_eq!(Language::Telugu.default_region(), Region::South);
        assert_eq!(Language::English.default_region(), Region::General);
    }
}
