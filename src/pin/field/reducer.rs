use crate::ui::mvi::Reducer;

use super::intent::FieldIntent;
use super::state::FieldState;

pub struct FieldReducer;

impl Reducer for FieldReducer {
    type State = FieldState;
    type Intent = FieldIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FieldIntent::Write { index, value } => {
                let mut code = state.code;
                // Out of range writes are dropped; the array length is fixed.
                if let Some(slot) = code.get_mut(index) {
                    *slot = value;
                }
                FieldState { code }
            }
            FieldIntent::Reset => FieldState::empty(state.code.len()),
        }
    }
}
