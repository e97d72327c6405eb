use time::{OffsetDateTime, format_description};
use tracing::{debug, info};

use crate::state::Observation;

use super::{FunctionCall, GameObserver};

pub struct DefaultObserver;

impl DefaultObserver {
    fn local_timestamp() -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
            .ok()
            .and_then(|format| now.format(&format).ok())
            .unwrap_or_else(|| now.to_string())
    }
}

impl GameObserver for DefaultObserver {
    fn on_game_start(&mut self, episodes: usize, screen_height: usize, screen_width: usize) {
        info!("Game started at {}", Self::local_timestamp());
        info!("- episodes: {}", episodes);
        info!("- screen size: {}x{}", screen_height, screen_width);
    }

    fn on_episode_start(&mut self, episode: usize) {
        info!("Episode {} started", episode);
    }

    fn on_action_sampled(&mut self, action: usize, x: f32, y: f32) {
        debug!("sampled action: {} at ({:.3}, {:.3})", action, x, y);
    }

    fn on_command(&mut self, call: &FunctionCall, obs: &Observation) {
        debug!(
            "minerals: {}, supply: {}/{}, command: {}",
            obs.player.minerals,
            obs.player.food_used,
            obs.player.food_cap,
            call.function_id().as_str_name()
        );
    }

    fn on_episode_finished(&mut self, episode: usize, steps: usize, total_reward: f32) {
        info!(
            "Episode {} finished after {} steps, reward {:.2}",
            episode, steps, total_reward
        );
    }
}
