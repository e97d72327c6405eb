use tracing::{info, warn};

use crate::agent::{Agent, PolicyModel};
use crate::infra::{AgentError, Environment, GameObserver};

/// Totals for one finished episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    pub episode: usize,
    pub steps: usize,
    pub total_reward: f32,
    /// True when the step limit ended the episode before the environment did
    pub truncated: bool,
}

/// Drives an agent against an environment, one command per tick
pub struct Game<E: Environment, M: PolicyModel, O: GameObserver> {
    environment: E,
    agent: Agent<M>,
    observer: O,
    max_steps: Option<usize>,
}

impl<E: Environment, M: PolicyModel, O: GameObserver> Game<E, M, O> {
    pub fn new(environment: E, agent: Agent<M>, observer: O) -> Self {
        Self {
            environment,
            agent,
            observer,
            max_steps: None,
        }
    }

    /// Stop an episode after this many ticks even if the environment has not
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn agent(&self) -> &Agent<M> {
        &self.agent
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn run(&mut self, episodes: usize) -> Result<Vec<EpisodeSummary>, AgentError> {
        let (height, width) = self.environment.screen_size();
        self.observer.on_game_start(episodes, height, width);

        let mut summaries = Vec::with_capacity(episodes);
        for episode in 0..episodes {
            summaries.push(self.run_episode(episode)?);
        }

        let total: f32 = summaries.iter().map(|s| s.total_reward).sum();
        info!(
            "Finished {} episodes, mean reward {:.2}",
            summaries.len(),
            if summaries.is_empty() {
                0.0
            } else {
                total / summaries.len() as f32
            }
        );
        Ok(summaries)
    }

    fn run_episode(&mut self, episode: usize) -> Result<EpisodeSummary, AgentError> {
        self.observer.on_episode_start(episode);
        let mut obs = self.environment.reset()?;
        let mut steps = 0;
        let mut total_reward = 0.0;
        let mut truncated = false;

        loop {
            let call = self.agent.step(&obs)?;
            if let Some(sampled) = self.agent.last_action() {
                self.observer
                    .on_action_sampled(sampled.index, sampled.x, sampled.y);
            }
            self.observer.on_command(&call, &obs);

            let time_step = self.environment.step(call)?;
            steps += 1;
            total_reward += time_step.reward;
            self.agent
                .learn(&obs, time_step.reward, &time_step.observation, time_step.last);
            obs = time_step.observation;

            if time_step.last {
                break;
            }
            if self.max_steps.is_some_and(|max| steps >= max) {
                warn!("Episode {} truncated after {} steps", episode, steps);
                truncated = true;
                break;
            }
        }

        self.observer
            .on_episode_finished(episode, steps, total_reward);
        Ok(EpisodeSummary {
            episode,
            steps,
            total_reward,
            truncated,
        })
    }
}
