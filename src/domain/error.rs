use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("balloon unit size must be positive, got {0}")]
    InvalidUnit(i32),
    #[error("panel width {width} must exceed the largest balloon unit {max_unit}")]
    PanelTooNarrow { width: i32, max_unit: i32 },
    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),
    #[error("a single balloon cannot hold other balloons")]
    LeafCannotHold,
}
