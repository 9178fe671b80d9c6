//! Renderer-facing input handling for the human (Hounds) side.
//!
//! The renderer sends two gestures: "select piece" and "target position".
//! The controller keeps the current selection, filters gestures that make
//! no sense in the current state, and turns a valid target into a move.

mod selection;

pub use selection::HoundsController;
