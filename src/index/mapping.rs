//! Order-preserving mapping from 32-bit ordinal values to `u32` keys
//!
//! Signed integers and floats do not compare correctly as raw bit patterns.
//! Each supported domain rewrites its bit pattern so that plain unsigned
//! comparison of the result agrees with the natural ordering of the value.
//!
//! Only `u32`, `i32` and `f32` implement [`LutKey`]. The trait is sealed, so
//! any other element type is rejected at compile time.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unsigned comparison key produced by the mapping
pub type MappedKey = u32;

const SIGN_BIT: u32 = 0x8000_0000;

/// The closed set of value domains the lookup table understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum ValueDomain {
    /// 32-bit unsigned integer
    #[value(name = "u32")]
    #[serde(rename = "u32")]
    Unsigned32,
    /// 32-bit two's complement integer
    #[value(name = "i32")]
    #[serde(rename = "i32")]
    Signed32,
    /// 32-bit IEEE-754 float (NaN and -0.0 are outside the contract)
    #[value(name = "f32")]
    #[serde(rename = "f32")]
    Float32,
}

impl ValueDomain {
    pub const ALL: [ValueDomain; 3] = [
        ValueDomain::Unsigned32,
        ValueDomain::Signed32,
        ValueDomain::Float32,
    ];

    /// Map the raw bit pattern of a value in this domain to its comparison key
    #[inline]
    pub const fn map_bits(self, raw: u32) -> MappedKey {
        match self {
            ValueDomain::Unsigned32 => raw,
            ValueDomain::Signed32 => raw ^ SIGN_BIT,
            ValueDomain::Float32 => {
                if raw & SIGN_BIT != 0 {
                    !raw
                } else {
                    raw ^ SIGN_BIT
                }
            }
        }
    }

    /// Short name used on the command line and in reports
    pub const fn name(self) -> &'static str {
        match self {
            ValueDomain::Unsigned32 => "u32",
            ValueDomain::Signed32 => "i32",
            ValueDomain::Float32 => "f32",
        }
    }

    /// Human-readable description
    pub const fn description(self) -> &'static str {
        match self {
            ValueDomain::Unsigned32 => "Unsigned 32-bit integer",
            ValueDomain::Signed32 => "Signed 32-bit integer",
            ValueDomain::Float32 => "32-bit floating point",
        }
    }
}

impl fmt::Display for ValueDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueDomain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u32" | "unsigned" => Ok(ValueDomain::Unsigned32),
            "i32" | "signed" => Ok(ValueDomain::Signed32),
            "f32" | "float" => Ok(ValueDomain::Float32),
            other => bail!("unsupported value domain '{}': expected u32, i32 or f32", other),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// Element types that can be indexed by a lookup table
pub trait LutKey: Copy + PartialOrd + fmt::Debug + Send + Sync + sealed::Sealed {
    /// Domain tag carrying the mapping for this type
    const DOMAIN: ValueDomain;

    /// Raw 32-bit pattern of the value
    fn to_raw_bits(self) -> u32;

    /// Order-preserving comparison key
    #[inline]
    fn mapped(self) -> MappedKey {
        Self::DOMAIN.map_bits(self.to_raw_bits())
    }
}

impl LutKey for u32 {
    const DOMAIN: ValueDomain = ValueDomain::Unsigned32;

    #[inline]
    fn to_raw_bits(self) -> u32 {
        self
    }
}

impl LutKey for i32 {
    const DOMAIN: ValueDomain = ValueDomain::Signed32;

    #[inline]
    fn to_raw_bits(self) -> u32 {
        self as u32
    }
}

impl LutKey for f32 {
    const DOMAIN: ValueDomain = ValueDomain::Float32;

    #[inline]
    fn to_raw_bits(self) -> u32 {
        self.to_bits()
    }
}

/// Map a value to its comparison key
#[inline]
pub fn map_value<T: LutKey>(value: T) -> MappedKey {
    value.mapped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unsigned_identity() {
        assert_eq!(map_value(0u32), 0);
        assert_eq!(map_value(12345u32), 12345);
        assert_eq!(map_value(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_signed_boundaries() {
        assert!(map_value(-1i32) < map_value(0i32));
        assert!(map_value(i32::MIN) < map_value(i32::MAX));
        assert_eq!(map_value(i32::MIN), 0);
        assert_eq!(map_value(i32::MAX), u32::MAX);
        assert_eq!(map_value(0i32), SIGN_BIT);
    }

    #[test]
    fn test_float_boundaries() {
        // largest negative vs smallest positive magnitude
        let neg = -f32::from_bits(1);
        let pos = f32::from_bits(1);
        assert!(map_value(neg) < map_value(0.0f32));
        assert!(map_value(0.0f32) < map_value(pos));
        assert!(map_value(-1.0f32) < map_value(-0.5f32));
        assert!(map_value(f32::MIN) < map_value(f32::MAX));
        assert!(map_value(f32::NEG_INFINITY) < map_value(f32::MIN));
        assert!(map_value(f32::MAX) < map_value(f32::INFINITY));
    }

    #[test]
    fn test_domain_tags() {
        assert_eq!(<u32 as LutKey>::DOMAIN, ValueDomain::Unsigned32);
        assert_eq!(<i32 as LutKey>::DOMAIN, ValueDomain::Signed32);
        assert_eq!(<f32 as LutKey>::DOMAIN, ValueDomain::Float32);
    }

    #[test]
    fn test_domain_parse() {
        assert_eq!("u32".parse::<ValueDomain>().unwrap(), ValueDomain::Unsigned32);
        assert_eq!(" Signed ".parse::<ValueDomain>().unwrap(), ValueDomain::Signed32);
        assert_eq!("f32".parse::<ValueDomain>().unwrap(), ValueDomain::Float32);
        assert!("u64".parse::<ValueDomain>().is_err());
        assert!("f64".parse::<ValueDomain>().is_err());
    }

    #[test]
    fn test_domain_serde_names() {
        let json = serde_json::to_string(&ValueDomain::ALL).unwrap();
        assert_eq!(json, r#"["u32","i32","f32"]"#);
        let back: Vec<ValueDomain> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ValueDomain::ALL);
    }

    fn finite_non_zero() -> impl Strategy<Value = f32> {
        any::<f32>().prop_filter("finite, non-zero", |f| f.is_finite() && *f != 0.0)
    }

    proptest! {
        #[test]
        fn prop_signed_order_preserved(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(a.cmp(&b), map_value(a).cmp(&map_value(b)));
        }

        #[test]
        fn prop_float_order_preserved(a in finite_non_zero(), b in finite_non_zero()) {
            let expected = a.partial_cmp(&b).unwrap();
            prop_assert_eq!(expected, map_value(a).cmp(&map_value(b)));
        }
    }
}
