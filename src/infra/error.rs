use std::error::Error;
use std::fmt;

use super::ScreenFeature;

#[derive(Debug)]
pub enum AgentError {
    /// A screen feature layer was requested that the observation does not carry.
    MissingLayer { feature: ScreenFeature, available: usize },
    ShapeMismatch {
        what: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    InvalidDistribution(String),
    Checkpoint { path: String, message: String },
    Environment(String),
    Config { key: String, value: String },
}

impl fmt::Display for AgentError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AgentError::MissingLayer { feature, available } => write!(
                formatter,
                "Screen layer {:?} (index {}) missing, observation has {} layers",
                feature,
                feature.index(),
                available
            ),
            AgentError::ShapeMismatch {
                what,
                expected,
                actual,
            } => write!(
                formatter,
                "Shape mismatch for {}: expected {:?}, got {:?}",
                what, expected, actual
            ),
            AgentError::InvalidDistribution(reason) => {
                write!(formatter, "Invalid action distribution: {}", reason)
            }
            AgentError::Checkpoint { path, message } => {
                write!(formatter, "Checkpoint {} failed: {}", path, message)
            }
            AgentError::Environment(message) => write!(formatter, "Environment error: {}", message),
            AgentError::Config { key, value } => {
                write!(formatter, "Invalid value {:?} for {}", value, key)
            }
        }
    }
}

impl Error for AgentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_layer_message_names_index() {
        let err = AgentError::MissingLayer {
            feature: ScreenFeature::Pathable,
            available: 8,
        };
        let message = err.to_string();
        assert!(message.contains("Pathable"));
        assert!(message.contains("index 24"));
    }

    #[test]
    fn test_config_message() {
        let err = AgentError::Config {
            key: "MARINEBOT_GAMMA".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value \"abc\" for MARINEBOT_GAMMA");
    }
}
