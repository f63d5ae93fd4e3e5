use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Odd number of hex digits ({0})")]
    OddLength(usize),
    #[error("Invalid hex digit byte {byte:#04x} at position {index}")]
    InvalidHexCharacter { byte: u8, index: usize },
}

#[derive(Debug, Error)]
pub enum PipeError {
    #[error("IO Error while reading/writing stream")]
    Io(#[from] std::io::Error),
    #[error("Could not decode line {line}: {source}")]
    Decode { line: usize, source: DecodeError },
}
