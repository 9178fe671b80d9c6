//! Oracle boundary and the random-move fallback.
//!
//! The engine stays synchronous. An integrator with an asynchronous
//! oracle builds an [`OracleRequest`], awaits the reply with its own
//! timeout, then hands whatever it got to [`resolve_reply`]:
//!
//! ```
//! use hare_hounds::core::{GameRng, MatchState};
//! use hare_hounds::oracle::{parse_reply, resolve_reply, OracleError, OracleRequest};
//! use hare_hounds::rules::Move;
//!
//! let mut rng = GameRng::new(7);
//! let state = MatchState::new().apply_move(Move::new(
//!     hare_hounds::core::Position::new(8).unwrap(),
//!     hare_hounds::core::Position::new(5).unwrap(),
//! )).unwrap();
//!
//! let request = OracleRequest::for_state(&state).unwrap();
//! // ... send request.to_json(), await with a timeout ...
//! let reply: Result<Move, OracleError> = parse_reply("not json");
//!
//! let mv = resolve_reply(&request, reply, &mut rng);
//! assert!(request.legal_destinations().contains(&mv.to));
//! let state = state.apply_move(mv).unwrap();
//! ```

use tracing::warn;

use crate::core::{GameRng, MatchState, Side};
use crate::rules::{apply_move, Move, RuleError};

use super::error::OracleError;
use super::request::OracleRequest;

/// Something that proposes the Hare's move.
pub trait HareOracle: Send + Sync {
    /// Propose a move for the request. May fail or return nonsense;
    /// callers validate.
    fn propose(&self, request: &OracleRequest, rng: &mut GameRng) -> Result<Move, OracleError>;
}

/// Oracle that picks uniformly among the legal destinations.
///
/// Used when no real oracle is configured.
#[derive(Clone, Debug, Default)]
pub struct RandomOracle;

impl HareOracle for RandomOracle {
    fn propose(&self, request: &OracleRequest, rng: &mut GameRng) -> Result<Move, OracleError> {
        Ok(fallback_move(request, rng))
    }
}

/// A uniformly random legal Hare move.
#[must_use]
pub fn fallback_move(request: &OracleRequest, rng: &mut GameRng) -> Move {
    let legal = request.legal_destinations();
    let to = legal[rng.gen_range_usize(0..legal.len())];
    Move::new(request.hare(), to)
}

/// Turn an oracle outcome into a move that is guaranteed legal.
///
/// Valid proposals are used as-is. Failures, timeouts, malformed replies
/// and out-of-set moves all fall back to a uniformly random legal move.
#[must_use]
pub fn resolve_reply(
    request: &OracleRequest,
    reply: Result<Move, OracleError>,
    rng: &mut GameRng,
) -> Move {
    match reply.and_then(|mv| request.validate(mv)) {
        Ok(mv) => mv,
        Err(err) => {
            let mv = fallback_move(request, rng);
            warn!(error = %err, fallback = %mv, "oracle reply unusable, playing random move");
            mv
        }
    }
}

/// Ask `oracle` for the Hare's move and resolve it. `None` unless the Hare
/// is on move in a running match.
#[must_use]
pub fn choose_hare_move<O: HareOracle + ?Sized>(
    state: &MatchState,
    oracle: &O,
    rng: &mut GameRng,
) -> Option<Move> {
    let request = OracleRequest::for_state(state)?;
    let reply = oracle.propose(&request, rng);
    Some(resolve_reply(&request, reply, rng))
}

/// Play the Hare's turn with a synchronous oracle.
///
/// # Errors
///
/// - [`RuleError::GameOver`] if the match has ended
/// - [`RuleError::NotYourTurn`] if the Hounds are on move
pub fn play_hare_turn<O: HareOracle + ?Sized>(
    state: &MatchState,
    oracle: &O,
    rng: &mut GameRng,
) -> Result<MatchState, RuleError> {
    if state.is_terminal() {
        return Err(RuleError::GameOver);
    }
    if state.turn() != Side::Hare {
        return Err(RuleError::NotYourTurn { expected: state.turn() });
    }

    match choose_hare_move(state, oracle, rng) {
        Some(mv) => apply_move(state, mv),
        // A running match with the Hare on move always has a Hare move
        None => Err(RuleError::GameOver),
    }
}
