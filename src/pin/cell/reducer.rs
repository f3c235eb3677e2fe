use crate::ui::mvi::Reducer;

use super::intent::CellIntent;
use super::state::CellState;

/// Pure state transitions for a cell. Timers and owner notifications are
/// handled by [`super::Cell`] around the dispatch.
pub struct CellReducer;

impl Reducer for CellReducer {
    type State = CellState;
    type Intent = CellIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CellIntent::SetValue { value } => CellState {
                value,
                selected: false,
                ..state
            },
            CellIntent::Clear => CellState {
                value: String::new(),
                revealed: false,
                selected: false,
                ..state
            },
            CellIntent::Reveal => CellState {
                revealed: true,
                ..state
            },
            CellIntent::Conceal => {
                if state.is_empty() {
                    state
                } else {
                    CellState {
                        revealed: false,
                        ..state
                    }
                }
            }
            CellIntent::Focus { select } => CellState {
                focused: true,
                selected: select && !state.is_empty(),
                ..state
            },
            CellIntent::Blur => CellState {
                focused: false,
                selected: false,
                ..state
            },
        }
    }
}
