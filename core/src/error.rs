use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VrnError {
    /// The input does not hold the two letters and one digit a check letter is
    /// computed from.
    #[error(
        "malformed VRN {vrn:?}: needs at least 2 letters and 1 digit, found {letters} letter(s) and {digits} digit(s)"
    )]
    MalformedInput {
        vrn: String,
        letters: usize,
        digits: usize,
    },

    #[error("plate {0:?} does not end in a check letter")]
    MissingCheckLetter(String),
}
