//! Plotting dimensionality and physical length units of a probe.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of spatial dimensions a probe is described in.
///
/// The wire format writes this as the string `"2"` or `"3"`. Bare integers
/// are accepted on input since many probeinterface files in the wild use
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NumDimensions {
    #[default]
    Two,
    Three,
}

impl NumDimensions {
    /// Returns the dimension count as a number.
    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            NumDimensions::Two => 2,
            NumDimensions::Three => 3,
        }
    }

    fn from_u64(value: u64) -> Option<Self> {
        match value {
            2 => Some(NumDimensions::Two),
            3 => Some(NumDimensions::Three),
            _ => None,
        }
    }
}

impl fmt::Display for NumDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for NumDimensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            NumDimensions::Two => "2",
            NumDimensions::Three => "3",
        })
    }
}

impl<'de> Deserialize<'de> for NumDimensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NdimVisitor;

        impl Visitor<'_> for NdimVisitor {
            type Value = NumDimensions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"2\", \"3\", 2 or 3")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                NumDimensions::from_u64(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                u64::try_from(value)
                    .ok()
                    .and_then(NumDimensions::from_u64)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                match value {
                    "2" => Ok(NumDimensions::Two),
                    "3" => Ok(NumDimensions::Three),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(NdimVisitor)
    }
}

/// Real-world length unit used by every coordinate of a probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiUnits {
    Mm,
    #[default]
    Um,
}

impl fmt::Display for SiUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiUnits::Mm => write!(f, "mm"),
            SiUnits::Um => write!(f, "um"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndim_accepts_string_and_integer() {
        let from_str: NumDimensions = serde_json::from_str("\"3\"").unwrap();
        let from_int: NumDimensions = serde_json::from_str("2").unwrap();
        assert_eq!(from_str, NumDimensions::Three);
        assert_eq!(from_int, NumDimensions::Two);
    }

    #[test]
    fn test_ndim_rejects_other_values() {
        assert!(serde_json::from_str::<NumDimensions>("\"4\"").is_err());
        assert!(serde_json::from_str::<NumDimensions>("1").is_err());
        assert!(serde_json::from_str::<NumDimensions>("-2").is_err());
    }

    #[test]
    fn test_ndim_serializes_as_string() {
        assert_eq!(serde_json::to_string(&NumDimensions::Two).unwrap(), "\"2\"");
    }

    #[test]
    fn test_si_units_lowercase() {
        assert_eq!(serde_json::to_string(&SiUnits::Um).unwrap(), "\"um\"");
        let mm: SiUnits = serde_json::from_str("\"mm\"").unwrap();
        assert_eq!(mm, SiUnits::Mm);
    }
}
