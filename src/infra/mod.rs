mod config;
mod default_observer;
mod environment;
mod error;
mod function_call;
mod game_observer;
pub mod logging;
mod types;

pub use config::AgentConfig;
pub use default_observer::DefaultObserver;
pub use environment::{Environment, TimeStep};
pub use error::AgentError;
pub use function_call::{FunctionCall, Queued, SelectPointAct};
pub use game_observer::GameObserver;
pub use logging::init_logging;
pub use types::{FunctionId, Position, ScreenFeature, Structure, TrainableUnit, UnitType};
