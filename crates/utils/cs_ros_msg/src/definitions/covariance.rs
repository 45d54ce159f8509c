//! `float64[36]` fields, which serde's derive does not cover.
//!
//! CDR writes fixed-size arrays without a length prefix, so these are driven as tuples.
//! Use with `#[serde(with = "covariance")]` on a `Vec<f64>`.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{self, SerializeTuple as _, Serializer};

/// Number of entries in a row-major 6x6 covariance matrix.
pub const COVARIANCE_LEN: usize = 36;

/// Fails unless there are exactly [`COVARIANCE_LEN`] values; anything else would not decode.
pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    if values.len() != COVARIANCE_LEN {
        return Err(ser::Error::custom(format!(
            "covariance has {} entries, expected {COVARIANCE_LEN}",
            values.len()
        )));
    }

    let mut tuple = serializer.serialize_tuple(COVARIANCE_LEN)?;
    for value in values {
        tuple.serialize_element(value)?;
    }
    tuple.end()
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    deserializer.deserialize_tuple(COVARIANCE_LEN, CovarianceVisitor)
}

struct CovarianceVisitor;

impl<'de> Visitor<'de> for CovarianceVisitor {
    type Value = Vec<f64>;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a row-major 6x6 float64 covariance matrix")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(COVARIANCE_LEN);
        for index in 0..COVARIANCE_LEN {
            let value = seq
                .next_element::<f64>()?
                .ok_or_else(|| de::Error::invalid_length(index, &self))?;
            values.push(value);
        }
        Ok(values)
    }
}
