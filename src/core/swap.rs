use crate::domain::model::{SwapMode, SwapRequest};
use crate::utils::error::SwapError;

impl SwapMode {
    /// Permute `data` in place. The caller guarantees `data.len()` is a
    /// multiple of [`SwapMode::increment`].
    fn apply(self, data: &mut [u8]) {
        match self {
            SwapMode::BytesOnly => {
                for pair in data.chunks_exact_mut(2) {
                    pair.swap(0, 1);
                }
            }
            SwapMode::Both | SwapMode::WordsOnly => {
                for group in data.chunks_exact_mut(4) {
                    let word = u32::from_be_bytes([group[0], group[1], group[2], group[3]]);

                    let swapped = match self {
                        SwapMode::Both => word.swap_bytes(),
                        _ => word.rotate_left(16),
                    };

                    group.copy_from_slice(&swapped.to_be_bytes());
                }
            }
        }
    }
}

impl SwapRequest<'_> {
    /// Run the swap, returning a new buffer the same length as the input.
    pub fn execute(&self) -> Result<Vec<u8>, SwapError> {
        let len = self.data.len();

        if self.padding != 0 && len % self.padding != 0 {
            return Err(SwapError::MisalignedSize {
                len,
                increment: self.padding,
                forced: self.force_padding,
            });
        }

        let increment = self.mode.increment();
        if len % increment != 0 {
            return Err(SwapError::MisalignedSize {
                len,
                increment,
                forced: false,
            });
        }

        let mut output = self.data.to_vec();
        self.mode.apply(&mut output);

        Ok(output)
    }
}

/// Byte-swap `data` with the given mode and padding.
///
/// A nonzero `padding` requires the length to be an exact multiple of it.
/// The engine does not consult the size classifier; when `force_padding` is
/// false the caller is expected to have derived `padding` from a recognized
/// save size.
pub fn swap(
    data: &[u8],
    mode: SwapMode,
    padding: usize,
    force_padding: bool,
) -> Result<Vec<u8>, SwapError> {
    SwapRequest::new(data, mode, padding, force_padding).execute()
}
