//! Time ledger: pure, stateless computations over a session snapshot.

pub mod ledger;
pub mod status;

pub use crate::utils::formatting::format_duration;
pub use ledger::{break_seconds, compute_net_working_seconds, elapsed_seconds};
pub use status::derive_status;
