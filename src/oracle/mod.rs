//! Boundary to the external move oracle that plays the Hare.
//!
//! The oracle is advisory and fallible. Whatever it returns, the Hare ends
//! up playing a move from the legal set it was offered:
//!
//! - `request`: what the oracle is told and how its reply is parsed
//! - `policy`: the `HareOracle` trait and the random fallback
//! - `error`: failure kinds, all recovered the same way

pub mod error;
pub mod request;
pub mod policy;

pub use error::OracleError;
pub use request::{parse_reply, OracleRequest};
pub use policy::{
    choose_hare_move, fallback_move, play_hare_turn, resolve_reply, HareOracle, RandomOracle,
};
