use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the course")]
    OutOfBounds,
    #[error("Course layout is empty")]
    EmptyLayout,
    #[error("Course layout rows have different lengths")]
    RaggedLayout,
    #[error("Course layout is too large")]
    LayoutTooLarge,
    #[error("Unknown cell glyph {0:?}")]
    UnknownCell(char),
    #[error("Course has no hole")]
    MissingHole,
    #[error("Course has more than one hole")]
    MultipleHoles,
    #[error("Course has more than one start cell")]
    MultipleStarts,
    #[error("Tee must be an in-bounds cell that is not water, tree or hole")]
    InvalidTee,
    #[error("Course has no start cell and no tee was given")]
    MissingTee,
    #[error("Recorded hole or start does not match the layout")]
    InconsistentLayout,
}

pub type Result<T> = core::result::Result<T, GameError>;
