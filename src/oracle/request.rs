//! Wire contract with the Hare's oracle.
//!
//! The request is everything the oracle may know: public board, the skill
//! tag, the Hare's true visibility and its legal destinations. The reply is
//! a single `{"from": n, "to": m}` object.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Difficulty, MatchState, Position, Side};
use crate::rules::{hare_destinations, Destinations, Move};

use super::error::OracleError;

/// A request for the Hare's next move.
///
/// Only built by [`OracleRequest::for_state`], so the legal set is never
/// empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OracleRequest {
    board: Board,
    turn: Side,
    difficulty: Difficulty,
    hare_visible: bool,
    hare: Position,
    legal_destinations: Destinations,
}

impl OracleRequest {
    /// Build the request for a state with the Hare on move.
    ///
    /// `None` if the match is over or the Hounds are on move.
    #[must_use]
    pub fn for_state(state: &MatchState) -> Option<Self> {
        if state.is_terminal() || state.turn() != Side::Hare {
            return None;
        }

        let board = *state.board();
        let legal_destinations = hare_destinations(&board);
        if legal_destinations.is_empty() {
            return None;
        }

        Some(Self {
            board,
            turn: Side::Hare,
            difficulty: state.difficulty(),
            hare_visible: state.is_hare_visible(),
            hare: board.hare(),
            legal_destinations,
        })
    }

    /// Board the oracle is asked about.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move; always the Hare.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Skill tag for the oracle's heuristic.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether a Hound currently sees the Hare.
    #[must_use]
    pub fn hare_visible(&self) -> bool {
        self.hare_visible
    }

    /// The Hare's node.
    #[must_use]
    pub fn hare(&self) -> Position {
        self.hare
    }

    /// Legal destinations of the Hare. Never empty.
    #[must_use]
    pub fn legal_destinations(&self) -> &[Position] {
        &self.legal_destinations
    }

    /// Encode the request as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Accept `mv` only if it moves the Hare to one of the offered nodes.
    ///
    /// # Errors
    ///
    /// [`OracleError::Rejected`] otherwise.
    pub fn validate(&self, mv: Move) -> Result<Move, OracleError> {
        if mv.from == self.hare && self.legal_destinations.contains(&mv.to) {
            Ok(mv)
        } else {
            Err(OracleError::Rejected {
                from: i64::from(mv.from.id()),
                to: i64::from(mv.to.id()),
            })
        }
    }
}

/// Raw reply shape. Integers are checked against the board afterwards.
#[derive(Deserialize)]
struct Reply {
    from: i64,
    to: i64,
}

/// Parse an oracle reply of the form `{"from": n, "to": m}`.
///
/// Extra fields are ignored.
///
/// # Errors
///
/// - [`OracleError::Malformed`] if the text is not such an object
/// - [`OracleError::Rejected`] if either number is not a board node
pub fn parse_reply(text: &str) -> Result<Move, OracleError> {
    let reply: Reply = serde_json::from_str(text.trim())?;

    let node = |id: i64| u8::try_from(id).ok().and_then(Position::new);
    match (node(reply.from), node(reply.to)) {
        (Some(from), Some(to)) => Ok(Move::new(from, to)),
        _ => Err(OracleError::Rejected {
            from: reply.from,
            to: reply.to,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::INITIAL_BOARD;

    fn pos(id: u8) -> Position {
        Position::new(id).unwrap()
    }

    fn hare_to_move() -> MatchState {
        MatchState::from_position(INITIAL_BOARD, Side::Hare)
    }

    #[test]
    fn test_request_for_hare_turn() {
        let request = OracleRequest::for_state(&hare_to_move()).unwrap();

        assert_eq!(request.turn(), Side::Hare);
        assert_eq!(request.hare(), pos(0));
        assert_eq!(request.legal_destinations(), &[pos(1), pos(2), pos(3)]);
        assert!(!request.hare_visible());
        assert_eq!(request.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_no_request_on_hounds_turn() {
        assert!(OracleRequest::for_state(&MatchState::new()).is_none());
    }

    #[test]
    fn test_no_request_when_trapped() {
        let board = Board::from_pieces(pos(0), [pos(1), pos(2), pos(3)]).unwrap();
        let state = MatchState::from_position(board, Side::Hare);
        assert!(OracleRequest::for_state(&state).is_none());
    }

    #[test]
    fn test_validate() {
        let request = OracleRequest::for_state(&hare_to_move()).unwrap();

        assert!(request.validate(Move::new(pos(0), pos(2))).is_ok());
        assert!(matches!(
            request.validate(Move::new(pos(0), pos(5))),
            Err(OracleError::Rejected { from: 0, to: 5 })
        ));
        assert!(matches!(
            request.validate(Move::new(pos(8), pos(5))),
            Err(OracleError::Rejected { from: 8, to: 5 })
        ));
    }

    #[test]
    fn test_parse_reply() {
        assert_eq!(parse_reply(r#"{"from": 0, "to": 3}"#).unwrap(), Move::new(pos(0), pos(3)));
        assert_eq!(
            parse_reply(" {\"to\": 2, \"from\": 0, \"why\": \"hide\"}\n").unwrap(),
            Move::new(pos(0), pos(2))
        );
    }

    #[test]
    fn test_parse_reply_garbage() {
        assert!(matches!(parse_reply("move to 3"), Err(OracleError::Malformed(_))));
        assert!(matches!(parse_reply(r#"{"from": 0}"#), Err(OracleError::Malformed(_))));
        assert!(matches!(
            parse_reply(r#"{"from": 0, "to": 42}"#),
            Err(OracleError::Rejected { from: 0, to: 42 })
        ));
        assert!(matches!(
            parse_reply(r#"{"from": -1, "to": 2}"#),
            Err(OracleError::Rejected { from: -1, to: 2 })
        ));
    }

    #[test]
    fn test_request_json() {
        let json = OracleRequest::for_state(&hare_to_move()).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["turn"], "Hare");
        assert_eq!(value["hare"], 0);
        assert_eq!(value["legal_destinations"], serde_json::json!([1, 2, 3]));
        assert_eq!(value["board"][8], "Hound");
    }
}
