use serde::{Deserialize, Serialize};

use crate::models::record::RecordError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(RecordError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(InteriorExterior {
    Interior => "interior",
    Exterior => "exterior",
    Neutral => "neutral",
});

str_enum!(HotCold {
    Hot => "hot",
    Warm => "warm",
    Neutral => "neutral",
    Cool => "cool",
    Cold => "cold",
});

str_enum!(ExcessDeficiency {
    Excess => "excess",
    MildExcess => "mild_excess",
    Neutral => "neutral",
    MildDeficiency => "mild_deficiency",
    Deficiency => "deficiency",
});

str_enum!(YinYang {
    YangExcess => "yang_excess",
    YangDeficiency => "yang_deficiency",
    YinDeficiency => "yin_deficiency",
    YinExcess => "yin_excess",
    Neutral => "neutral",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn round_trips_through_str() {
        assert_eq!(HotCold::from_str("warm").unwrap(), HotCold::Warm);
        assert_eq!(HotCold::Warm.as_str(), "warm");
        assert_eq!(
            ExcessDeficiency::from_str("mild_deficiency").unwrap(),
            ExcessDeficiency::MildDeficiency
        );
        assert_eq!(YinYang::YangExcess.as_str(), "yang_excess");
        assert!(InteriorExterior::from_str("sideways").is_err());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&YinYang::YinDeficiency).unwrap(),
            "\"yin_deficiency\""
        );
        assert_eq!(
            serde_json::from_str::<HotCold>("\"cool\"").unwrap(),
            HotCold::Cool
        );
    }
}
