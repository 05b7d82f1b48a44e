use std::convert::TryInto;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};

pub const DIGEST_SIZE: usize = 32; // 32 bytes / 256 bits

/// A 256-bit digest, stored big-endian as produced by the hasher.
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Debug, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Digest(bytes)
    }

    pub const fn zero() -> Self {
        Digest::new([0; DIGEST_SIZE])
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Digest {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string")?;
        let bytes: [u8; DIGEST_SIZE] = bytes.try_into().map_err(|_| "Invalid digest length")?;
        Ok(Digest::new(bytes))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", &self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        if hex.len() != DIGEST_SIZE * 2 {
            return Err(SerdeError::custom("Invalid hex length"));
        }

        Digest::from_str(&hex).map_err(SerdeError::custom)
    }
}
