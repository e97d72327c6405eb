use crate::state::Observation;

use super::FunctionCall;

/// Trait for observing game events during execution
pub trait GameObserver {
    /// Called once before the first episode
    fn on_game_start(&mut self, episodes: usize, screen_height: usize, screen_width: usize);

    /// Called when a new episode starts
    fn on_episode_start(&mut self, episode: usize);

    /// Called after the policy sampled an action
    fn on_action_sampled(&mut self, _action: usize, _x: f32, _y: f32) {
        // Default implementation does nothing
    }

    /// Called when a command is about to be sent to the environment
    fn on_command(&mut self, call: &FunctionCall, obs: &Observation);

    /// Called when an episode finishes
    fn on_episode_finished(&mut self, episode: usize, steps: usize, total_reward: f32);
}
