use thiserror::Error;

/// Errors returned by the image matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageMatchError {
    #[error("{0} image has no pixels")]
    EmptyImage(&'static str),

    #[error(
        "candidate is {actual_width}x{actual_height} but the reference needs at least \
         {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}
