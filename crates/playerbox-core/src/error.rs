use thiserror::Error;

/// Configuration failures surfaced by the host-facing entry points.
#[derive(Debug, Error)]
pub enum PlayerboxError {
    /// The trigger selector matched nothing; event binding would be a no-op,
    /// so this is treated as fatal rather than silently ignored.
    #[error("no element matches trigger selector `{0}`")]
    TriggerNotFound(String),
}
