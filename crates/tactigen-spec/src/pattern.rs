//! Pattern record types.
//!
//! A [`Pattern`] is the top-level output of one generation call. Its serde
//! shape is the wire contract consumed by renderers and binary exporters:
//!
//! ```json
//! { "pattern": [ { "iteration": [ { "coord": 11, "amplitude": 100, "frequency": 300 } ],
//!                  "time": 10.0 } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::grid::GridPosition;
use crate::ubjson;

/// One actuator's instruction within one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotorEvent {
    /// Actuator position, written as its fused integer.
    #[serde(with = "crate::grid::fused")]
    pub coord: GridPosition,
    /// Drive amplitude.
    pub amplitude: i32,
    /// Carrier frequency in Hz.
    pub frequency: u32,
}

impl MotorEvent {
    /// Creates an event.
    pub fn new(coord: GridPosition, amplitude: i32, frequency: u32) -> Self {
        Self {
            coord,
            amplitude,
            frequency,
        }
    }
}

/// The set of events active during one discrete time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternIteration {
    /// Concurrently active events.
    #[serde(rename = "iteration")]
    pub events: Vec<MotorEvent>,
    /// Duration of the step in milliseconds.
    pub time: f64,
}

impl PatternIteration {
    /// Creates an iteration.
    pub fn new(events: Vec<MotorEvent>, time: f64) -> Self {
        Self { events, time }
    }
}

/// A complete generated pattern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pattern {
    /// Iterations in playback order.
    pub pattern: Vec<PatternIteration>,
}

impl Pattern {
    /// Wraps a list of iterations.
    pub fn new(iterations: Vec<PatternIteration>) -> Self {
        Self {
            pattern: iterations,
        }
    }

    /// Iterations in playback order.
    pub fn iterations(&self) -> &[PatternIteration] {
        &self.pattern
    }

    /// Number of iterations.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Returns true if the pattern has no iterations.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Total event count across iterations.
    pub fn event_count(&self) -> usize {
        self.pattern.iter().map(|it| it.events.len()).sum()
    }

    /// Summed iteration time in milliseconds.
    pub fn total_time_ms(&self) -> f64 {
        self.pattern.iter().map(|it| it.time).sum()
    }

    /// Serializes to compact JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a JSON record.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encodes the record as UBJSON.
    pub fn to_ubjson(&self) -> Result<Vec<u8>, SpecError> {
        ubjson::to_vec(&self.to_value()?)
    }

    /// Decodes a UBJSON record.
    pub fn from_ubjson(bytes: &[u8]) -> Result<Self, SpecError> {
        let value = ubjson::from_slice(bytes)?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Pattern {
        Pattern::new(vec![
            PatternIteration::new(
                vec![
                    MotorEvent::new(GridPosition::new(1, 1), 100, 300),
                    MotorEvent::new(GridPosition::new(4, 6), -255, 300),
                ],
                10.0,
            ),
            PatternIteration::new(vec![MotorEvent::new(GridPosition::new(2, 3), 0, 60)], 65.5),
        ])
    }

    #[test]
    fn test_field_names_on_the_wire() {
        let json = sample().to_json().unwrap();
        assert!(json.starts_with(r#"{"pattern":[{"iteration":[{"coord":11,"amplitude":100,"frequency":300}"#));
        assert!(json.contains(r#""time":10.0"#));
        assert!(json.contains(r#""coord":46"#));
    }

    #[test]
    fn test_parses_integer_times_and_legacy_records() {
        let json = r#"{"pattern":[{"iteration":[{"coord":23,"amplitude":7,"frequency":300}],"time":10}]}"#;
        let pattern = Pattern::from_json(json).unwrap();
        assert_eq!(pattern.len(), 1);
        assert_eq!(pattern.pattern[0].time, 10.0);
        assert_eq!(pattern.pattern[0].events[0].coord, GridPosition::new(2, 3));
    }

    #[test]
    fn test_bad_coordinate_rejected() {
        let json = r#"{"pattern":[{"iteration":[{"coord":40,"amplitude":7,"frequency":300}],"time":10}]}"#;
        assert!(Pattern::from_json(json).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let pattern = sample();
        let back = Pattern::from_json(&pattern.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, pattern);
    }

    #[test]
    fn test_ubjson_round_trip() {
        let pattern = sample();
        let bytes = pattern.to_ubjson().unwrap();
        assert_eq!(bytes[0], b'{');
        assert_eq!(Pattern::from_ubjson(&bytes).unwrap(), pattern);
    }

    #[test]
    fn test_summaries() {
        let pattern = sample();
        assert_eq!(pattern.event_count(), 3);
        assert_eq!(pattern.total_time_ms(), 75.5);
        assert!(!pattern.is_empty());
        assert!(Pattern::default().is_empty());
    }
}
