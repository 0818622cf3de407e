use derive_more::{Display, Error, From};

/// The input was not a well-formed list of set items.
#[derive(Debug, Display, Error, From)]
#[display("Unable to decode Set from list: {source}")]
pub struct DecodeError {
    source: serde_json::Error,
}

impl DecodeError {
    /// The line of the input at which decoding failed, starting at 1.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// The column of the input at which decoding failed, starting at 1.
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

/// An item of the Set could not be encoded.
#[derive(Debug, Display, Error, From)]
#[display("Unable to encode Set as list: {source}")]
pub struct EncodeError {
    source: serde_json::Error,
}
