/// Errors returned when a picker is configured with unusable dimensions.
///
/// Configuration is validated before any state is touched, so a rejected call leaves the picker
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("item height must be positive and finite (got {0})")]
    InvalidItemHeight(f64),

    #[error("container height must be positive and finite (got {0})")]
    InvalidContainerHeight(f64),
}
