/// Marker trait for screen state. States are plain values, replaced whole
/// on each transition.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
