//! Serde support for outcomes.
//!
//! Outcomes serialize as flat records (`success`, `error`, `warnings` and, for
//! [`ValueOutcome`], `value`). The `value` key is only written on success, and its
//! presence is what marks a value as held, so values that serialize to `null` round trip.
//! Deserialization goes through `from_parts`, so a payload claiming success alongside an
//! error (or failure without one) is rejected.

use serde::{de, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Outcome, Report, ValueOutcome, Warning};

#[derive(Deserialize)]
struct RawOutcome {
    success: bool,
    #[serde(default)]
    error: Option<Error>,
    #[serde(default)]
    warnings: Vec<Warning>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawValueOutcome<T> {
    success: bool,
    #[serde(default)]
    error: Option<Error>,
    #[serde(default)]
    warnings: Vec<Warning>,
    // `None` only when the key is absent, so a value that is itself `null` survives.
    #[serde(default, deserialize_with = "present")]
    value: Option<T>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 3)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("error", &self.error())?;
        state.serialize_field("warnings", self.warnings())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawOutcome::deserialize(deserializer)?;
        Outcome::from_parts(raw.success, raw.error, raw.warnings).map_err(de::Error::custom)
    }
}

impl<T: Serialize> Serialize for ValueOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValueOutcome", 4)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("error", &self.error())?;
        state.serialize_field("warnings", self.warnings())?;
        match self.value() {
            Some(value) => state.serialize_field("value", value)?,
            None => state.skip_field("value")?,
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ValueOutcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawValueOutcome::<T>::deserialize(deserializer)?;
        ValueOutcome::from_parts(raw.success, raw.error, raw.warnings, raw.value)
            .map_err(de::Error::custom)
    }
}
