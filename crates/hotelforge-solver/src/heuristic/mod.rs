//! Moves and move selection for local search.

mod r#move;
mod selector;

pub use r#move::AllocationMove;
pub use selector::MoveSelector;

#[cfg(test)]
mod tests;
