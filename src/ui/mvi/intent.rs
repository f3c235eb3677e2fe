/// Marker trait for intents: keystrokes, focus moves and timer expiries
/// that request a state transition.
pub trait Intent: Send + 'static {}
