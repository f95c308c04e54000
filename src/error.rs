use thiserror::Error;

/// Configuration rejected before any generator runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("maze dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("max room size ({max}) must be greater than min room size ({min})")]
    RoomSizeRange { min: usize, max: usize },

    #[error("room distance from wall ({distance}) leaves no room anchors on a {width}x{height} grid")]
    RoomMarginTooLarge {
        distance: usize,
        width: usize,
        height: usize,
    },
}
