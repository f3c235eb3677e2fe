//! Model-View-Intent (MVI) primitives shared by the widget components.
//!
//! ```text
//! key / timer ──→ Intent ──→ Reducer ──→ State ──→ view
//! ```
//!
//! Reducers only compute the next state. Components (`Cell`, `PinField`)
//! run timers and callbacks around each dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
