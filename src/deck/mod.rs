//! Deck state.
//!
//! - `DeckComposition`: the master card set of a game, which shrinks by one
//!   hazard after each bust
//! - `DrawPile`: one round's shuffle with a reveal cursor
//! - `CardPool`: one round's remaining/revealed partition for a card kind

mod composition;
mod draw_pile;
mod pool;

pub use composition::DeckComposition;
pub use draw_pile::DrawPile;
pub use pool::CardPool;
