//! Set queries over a loaded deck.
//!
//! ## Key Types
//!
//! - `DeckEngine`: Holds the current schema + validated cards, answers
//!   set-validity, enumeration, and completion queries
//! - `Combinations`: Lazy index-based k-combination generator
//! - `SetIds`: One valid set, as member card ids in card-list index order

pub mod combinations;
pub mod solver;

pub use combinations::{Combinations, ComboIndices};
pub use solver::{DeckEngine, SetIds};
