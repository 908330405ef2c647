use crate::domain::model::SaveFormat;
use crate::utils::error::SwapError;

impl SaveFormat {
    /// Exact match of a dump length against the known save sizes.
    pub fn classify(len: usize) -> Option<SaveFormat> {
        SaveFormat::ALL.into_iter().find(|format| format.size() == len)
    }

    /// Like [`SaveFormat::classify`], but an unknown length is an error.
    pub fn from_size(len: usize) -> Result<SaveFormat, SwapError> {
        SaveFormat::classify(len).ok_or_else(|| SwapError::UnrecognizedSize {
            len,
            nearest: SaveFormat::padding_target(len).map(SaveFormat::size),
        })
    }

    /// Smallest known format a dump of `len` bytes would fit into once padded.
    pub fn padding_target(len: usize) -> Option<SaveFormat> {
        SaveFormat::ALL.into_iter().find(|format| format.size() >= len)
    }
}
