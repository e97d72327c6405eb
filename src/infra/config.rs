use std::env;
use std::str::FromStr;

use dotenv::dotenv;

use super::AgentError;

/// Agent construction parameters
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Learning rate handed to the network's optimizer
    pub alpha: f32,
    /// Discount factor
    pub gamma: f32,
    /// Size of the discrete action space
    pub n_actions: usize,
    /// Path of the network weight checkpoint
    pub checkpoint_file: String,
    /// Seed for action sampling and unit selection; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Route sampled actions through the macro-action dispatch table.
    /// When false, `step` only observes and always answers no-op.
    pub dispatch_actions: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            alpha: 1e-4,
            gamma: 0.99,
            n_actions: 11,
            checkpoint_file: "checkpoints/actor_critic".to_string(),
            seed: None,
            dispatch_actions: false,
        }
    }
}

fn parse_env_var<T: FromStr>(key: &str) -> Result<Option<T>, AgentError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AgentError::Config {
                key: key.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

impl AgentConfig {
    /// Build a configuration from `MARINEBOT_*` environment variables,
    /// loading a `.env` file first when one is present.
    pub fn from_env() -> Result<Self, AgentError> {
        dotenv().ok();

        let mut config = Self::default();
        if let Some(alpha) = parse_env_var("MARINEBOT_ALPHA")? {
            config.alpha = alpha;
        }
        if let Some(gamma) = parse_env_var("MARINEBOT_GAMMA")? {
            config.gamma = gamma;
        }
        if let Some(n_actions) = parse_env_var("MARINEBOT_N_ACTIONS")? {
            config.n_actions = n_actions;
        }
        if let Ok(path) = env::var("MARINEBOT_CHECKPOINT") {
            config.checkpoint_file = path;
        }
        config.seed = parse_env_var("MARINEBOT_SEED")?;
        if let Some(dispatch) = parse_env_var("MARINEBOT_DISPATCH")? {
            config.dispatch_actions = dispatch;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AgentError> {
        if self.n_actions == 0 {
            return Err(AgentError::Config {
                key: "n_actions".to_string(),
                value: self.n_actions.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(AgentError::Config {
                key: "gamma".to_string(),
                value: self.gamma.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.n_actions, 11);
        assert!((config.alpha - 1e-4).abs() < 1e-9);
        assert!((config.gamma - 0.99).abs() < 1e-6);
        assert!(!config.dispatch_actions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_action_space() {
        let config = AgentConfig {
            n_actions: 0,
            ..AgentConfig::default()
        };
        assert!(matches!(config.validate(), Err(AgentError::Config { .. })));
    }

    #[test]
    fn test_validate_rejects_gamma_out_of_range() {
        let config = AgentConfig {
            gamma: 1.5,
            ..AgentConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_env_var_absent_and_invalid() {
        let missing: Option<u64> = parse_env_var("MARINEBOT_TEST_SURELY_UNSET").unwrap();
        assert!(missing.is_none());

        // SAFETY: the variable name is unique to this test
        unsafe { env::set_var("MARINEBOT_TEST_BAD_FLOAT", "not-a-number") };
        let parsed: Result<Option<f32>, _> = parse_env_var("MARINEBOT_TEST_BAD_FLOAT");
        assert!(matches!(parsed, Err(AgentError::Config { .. })));
        unsafe { env::remove_var("MARINEBOT_TEST_BAD_FLOAT") };
    }
}
