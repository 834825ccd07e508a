use thiserror::Error;

/// Errors returned by [`Generator::generate`][`crate::Generator::generate`].
///
/// Decoding is the only stage that can fail: once the input parses, every
/// shape has a rendering, falling back to `any` where needed.
#[derive(Error, Debug)]
pub enum Error {
    /// The input was not valid JSON. The decoder's message is kept as is.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
