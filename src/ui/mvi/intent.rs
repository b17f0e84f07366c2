/// Marker trait for intents: user input or system events such as a
/// completed fetch.
pub trait Intent: Send + 'static {}
