use crate::database;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The ID of a submitted idea, encoded as base62 for usage in the API
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Hash)]
#[serde(from = "Base62Id")]
#[serde(into = "Base62Id")]
pub struct IdeaId(pub u64);

/// The ID of a stored idea-analysis report
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Hash)]
#[serde(from = "Base62Id")]
#[serde(into = "Base62Id")]
pub struct ResponseId(pub u64);

/// The ID of a feedback comment left alongside a vote
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Hash)]
#[serde(from = "Base62Id")]
#[serde(into = "Base62Id")]
pub struct FeedbackId(pub u64);

/// An ID encoded as base62 for use in the API.
///
/// All ids should be random and encode to 8-10 character base62 strings,
/// to avoid enumeration and other attacks.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Base62Id(pub u64);

/// An error decoding a number from base62.
#[derive(Error, Debug)]
pub enum DecodingError {
    /// Encountered a non base62 character in a base62 string
    #[error("Invalid character `{0:?}` in base62 encoding")]
    InvalidBase62(char),
    /// Encountered integer overflow when decoding a base62 id.
    #[error("Base62 decoding overflowed")]
    Overflow,
}

macro_rules! from_base62id {
    ($($struct:ty, $con:expr;)+) => {
        $(
            impl From<Base62Id> for $struct {
                fn from(id: Base62Id) -> $struct {
                    $con(id.0)
                }
            }
            impl From<$struct> for Base62Id {
                fn from(id: $struct) -> Base62Id {
                    Base62Id(id.0)
                }
            }
        )+
    };
}

macro_rules! impl_base62_display {
    ($struct:ty) => {
        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", base62_impl::to_base62(self.0))
            }
        }
    };
}
impl_base62_display!(Base62Id);
impl_base62_display!(IdeaId);
impl_base62_display!(ResponseId);
impl_base62_display!(FeedbackId);

from_base62id! {
    IdeaId, IdeaId;
    ResponseId, ResponseId;
    FeedbackId, FeedbackId;
}

impl From<database::models::IdeaId> for IdeaId {
    fn from(id: database::models::IdeaId) -> Self {
        IdeaId(id.0 as u64)
    }
}
impl From<IdeaId> for database::models::IdeaId {
    fn from(id: IdeaId) -> Self {
        database::models::IdeaId(id.0 as i64)
    }
}
impl From<database::models::ResponseId> for ResponseId {
    fn from(id: database::models::ResponseId) -> Self {
        ResponseId(id.0 as u64)
    }
}
impl From<ResponseId> for database::models::ResponseId {
    fn from(id: ResponseId) -> Self {
        database::models::ResponseId(id.0 as i64)
    }
}
impl From<database::models::FeedbackId> for FeedbackId {
    fn from(id: database::models::FeedbackId) -> Self {
        FeedbackId(id.0 as u64)
    }
}
impl From<FeedbackId> for database::models::FeedbackId {
    fn from(id: FeedbackId) -> Self {
        database::models::FeedbackId(id.0 as i64)
    }
}

pub use base62_impl::random_base62_rng;

pub mod base62_impl {
    use rand::Rng;
    use serde::de::{self, Deserializer, Visitor};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    use super::{Base62Id, DecodingError};

    impl<'de> Deserialize<'de> for Base62Id {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct Base62Visitor;

            impl<'de> Visitor<'de> for Base62Visitor {
                type Value = Base62Id;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("a base62 string id")
                }

                fn visit_str<E>(self, string: &str) -> Result<Base62Id, E>
                where
                    E: de::Error,
                {
                    parse_base62(string).map(Base62Id).map_err(E::custom)
                }
            }

            deserializer.deserialize_str(Base62Visitor)
        }
    }

    impl Serialize for Base62Id {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&to_base62(self.0))
        }
    }

    const BASE62_CHARS: [u8; 62] = [
        b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'A', b'B', b'C', b'D', b'E',
        b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M', b'N', b'O', b'P', b'Q', b'R', b'S', b'T',
        b'U', b'V', b'W', b'X', b'Y', b'Z', b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i',
        b'j', b'k', b'l', b'm', b'n', b'o', b'p', b'q', b'r', b's', b't', b'u', b'v', b'w', b'x',
        b'y', b'z',
    ];

    /// Generates a random 64 bit integer that is exactly `n` characters
    /// long when encoded as base62.
    ///
    /// # Panics
    ///
    /// This method panics if `n` is 0 or greater than 11, since a `u64`
    /// can only represent up to 11 character base62 strings
    pub fn random_base62_rng<R: Rng>(rng: &mut R, n: usize) -> u64 {
        assert!(n > 0 && n <= 11);
        // gen_range is [low, high): max value is `MULTIPLES[n] - 1`,
        // which is n characters long when encoded
        rng.gen_range(MULTIPLES[n - 1]..MULTIPLES[n])
    }

    /// Array of multiples of 62, such that `MULTIPLES[n]` is 62^n,
    /// saturating at `u64::MAX` since 62^11 does not fit in a u64
    const MULTIPLES: [u64; 12] = [
        1,
        62,
        62 * 62,
        62 * 62 * 62,
        62u64.pow(4),
        62u64.pow(5),
        62u64.pow(6),
        62u64.pow(7),
        62u64.pow(8),
        62u64.pow(9),
        62u64.pow(10),
        u64::MAX,
    ];

    pub fn to_base62(mut num: u64) -> String {
        let length = (num as f64).log(62.0).ceil() as usize;
        let mut output = String::with_capacity(length);

        while num > 0 {
            // Could be done more efficiently, but requires byte
            // manipulation of strings & Vec<u8> -> String conversion
            output.insert(0, BASE62_CHARS[(num % 62) as usize] as char);
            num /= 62;
        }
        output
    }

    pub fn parse_base62(string: &str) -> Result<u64, DecodingError> {
        let mut num: u64 = 0;
        for c in string.chars() {
            let next_digit;
            if c.is_ascii_digit() {
                next_digit = (c as u8 - b'0') as u64;
            } else if c.is_ascii_uppercase() {
                next_digit = 10 + (c as u8 - b'A') as u64;
            } else if c.is_ascii_lowercase() {
                next_digit = 36 + (c as u8 - b'a') as u64;
            } else {
                return Err(DecodingError::InvalidBase62(c));
            }

            // We don't want this panicking or wrapping on integer overflow
            if let Some(n) = num.checked_mul(62).and_then(|n| n.checked_add(next_digit)) {
                num = n;
            } else {
                return Err(DecodingError::Overflow);
            }
        }
        Ok(num)
    }
}

#[cfg(test)]
mod tests {
    use super::base62_impl::{parse_base62, random_base62_rng, to_base62};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn base62_round_trips() {
        for num in [1u64, 61, 62, 3844, 1_000_000, u64::MAX] {
            assert_eq!(parse_base62(&to_base62(num)).unwrap(), num);
        }
    }

    #[test]
    fn base62_known_values() {
        assert_eq!(to_base62(61), "z");
        assert_eq!(to_base62(62), "10");
        assert_eq!(parse_base62("z").unwrap(), 61);
        assert_eq!(parse_base62("10").unwrap(), 62);
    }

    #[test]
    fn base62_rejects_invalid_characters() {
        assert!(parse_base62("hello world!").is_err());
        assert!(parse_base62("idea-id").is_err());
    }

    #[test]
    fn random_ids_encode_to_requested_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        // n = 11 covers the top of the u64 range
        for n in 1..=11 {
            let id = random_base62_rng(&mut rng, n);
            assert_eq!(to_base62(id).len(), n);
        }
    }

    #[test]
    fn base62_rejects_overflow() {
        // u64::MAX is LygHa16AHYF; one character longer must overflow
        assert!(parse_base62("LygHa16AHYFF").is_err());
    }
}
