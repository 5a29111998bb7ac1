//! God Card abilities.
//!
//! - `power`: the `GodPower` hook contract and its follow-up types
//! - `ability`: `Ability`, the closed set of cards, dispatching to each
//! - `apollo`, `demeter`: the two shipped cards

pub mod power;
pub mod ability;
pub mod apollo;
pub mod demeter;

pub use power::{BuildContext, BuildFollowUp, GodPower, MoveContext, MoveFollowUp};
pub use ability::Ability;
pub use apollo::Apollo;
pub use demeter::Demeter;
