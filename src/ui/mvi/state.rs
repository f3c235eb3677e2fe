/// Marker trait for component state.
///
/// `Default` lets components move state out with `std::mem::take` while
/// dispatching; `PartialEq` lets tests compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
