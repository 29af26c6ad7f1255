//! Loading recovery requests from JSON.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": 2, "value": "111" }
//! }
//! ```

use crate::error::InputError;
use crate::types::{RecoveryRequest, Share};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Deserialize)]
struct Keys {
    n: usize,
    k: usize,
}

/// Bases show up both as JSON numbers and as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBase {
    Number(u32),
    Text(String),
}

#[derive(Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

/// Share entries are kept in document order, repeats included, so that a
/// repeated index can be reported instead of silently overwritten.
struct RawRequest {
    keys: Keys,
    shares: Vec<(String, RawShare)>,
}

impl<'de> Deserialize<'de> for RawRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawRequestVisitor;

        impl<'de> Visitor<'de> for RawRequestVisitor {
            type Value = RawRequest;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map with a `keys` entry and indexed shares")
            }

            fn visit_map<V>(self, mut map: V) -> Result<RawRequest, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut keys: Option<Keys> = None;
                let mut shares = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "keys" {
                        if keys.is_some() {
                            return Err(de::Error::duplicate_field("keys"));
                        }
                        keys = Some(map.next_value()?);
                    } else {
                        let share: RawShare = map.next_value()?;
                        shares.push((key, share));
                    }
                }

                let keys = keys.ok_or_else(|| de::Error::missing_field("keys"))?;
                Ok(RawRequest { keys, shares })
            }
        }

        deserializer.deserialize_map(RawRequestVisitor)
    }
}

/// Parses a request from a JSON string.
pub fn parse_request(json: &str) -> Result<RecoveryRequest, InputError> {
    let raw: RawRequest = serde_json::from_str(json)?;
    build_request(raw)
}

/// Reads a request from any reader holding JSON.
pub fn read_request<R: Read>(reader: R) -> Result<RecoveryRequest, InputError> {
    let raw: RawRequest = serde_json::from_reader(reader)?;
    build_request(raw)
}

/// Loads a request from a JSON file.
pub fn load_request(path: impl AsRef<Path>) -> Result<RecoveryRequest, InputError> {
    let file = File::open(path)?;
    read_request(BufReader::new(file))
}

fn build_request(raw: RawRequest) -> Result<RecoveryRequest, InputError> {
    let mut request = RecoveryRequest::new(raw.keys.n, raw.keys.k);

    for (key, share) in raw.shares {
        let index = match key.trim().parse::<u64>() {
            Ok(index) if index >= 1 => index,
            _ => return Err(InputError::InvalidIndex(key)),
        };
        let base = match share.base {
            RawBase::Number(base) => base,
            RawBase::Text(text) => text
                .trim()
                .parse::<u32>()
                .map_err(|_| InputError::InvalidBase { index, base: text })?,
        };
        if request.shares.contains_key(&index) {
            return Err(InputError::DuplicateIndex(index));
        }
        request.shares.insert(index, Share::new(index, base, share.value));
    }

    Ok(request)
}
