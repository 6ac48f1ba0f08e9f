//! 各区域状态定义

mod form;
mod modal;
mod roster;
mod roulette;

pub use form::{FormField, FormState};
pub use modal::{Modal, ModalState};
pub use roster::RosterState;
pub use roulette::RouletteState;
