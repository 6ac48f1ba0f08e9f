//! 业务逻辑服务层

mod roster_service;
mod roulette_service;

pub use roster_service::RosterService;
pub use roulette_service::{RandomSource, RouletteService, ThreadRngSource};
