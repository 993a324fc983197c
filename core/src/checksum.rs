//! Check letter computation for vehicle registration numbers (VRNs).
//!
//! A VRN such as `SKA1` is reduced to six integers: the alphabet positions of
//! its last two letters, then its digits left-padded with zeros to four places.
//! The weighted sum of those six values modulo 19 indexes [`CHECKSUM_MAPPING`].
//!
//! ```text
//! SKA1 -> letters [S, K, A] -> [K, A] -> [11, 1]
//!      -> digits  [1]       -> [0, 0, 0, 1]
//!      -> 11*9 + 1*4 + 0*5 + 0*4 + 0*3 + 1*2 = 105
//!      -> 105 % 19 = 10 -> 'L'
//! ```

use smallvec::SmallVec;

use crate::error::VrnError;

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const WEIGHTS: [u32; 6] = [9, 4, 5, 4, 3, 2];

pub const CHECKSUM_MAPPING: &[u8; 19] = b"AZYXUTSRPMLKJHGEDCB";

pub const SIGNIFICANT_LETTERS: usize = 2;
pub const SIGNIFICANT_DIGITS: usize = 4;

/// 1-based position of `c` in [`ALPHABET`], ignoring case.
///
/// Returns `None` for anything outside `A-Z` / `a-z`.
pub fn letter_value(c: char) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    ALPHABET
        .iter()
        .position(|&b| b as char == upper)
        .map(|idx| idx as u32 + 1)
}

/// Left-pads `items` with `fill` and keeps the trailing `N` elements.
///
/// Shorter inputs gain leading `fill` values, longer inputs lose their head.
pub fn pad_tail<T: Copy, const N: usize>(items: &[T], fill: T) -> [T; N] {
    let mut out = [fill; N];
    let keep = items.len().min(N);
    out[N - keep..].copy_from_slice(&items[items.len() - keep..]);
    out
}

/// The six weighted positions of a VRN: two letter values, four digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VrnNumeric(pub [u32; SIGNIFICANT_LETTERS + SIGNIFICANT_DIGITS]);

impl VrnNumeric {
    pub fn letters(&self) -> &[u32] {
        &self.0[..SIGNIFICANT_LETTERS]
    }

    pub fn digits(&self) -> &[u32] {
        &self.0[SIGNIFICANT_LETTERS..]
    }

    pub fn weighted_sum(&self) -> u32 {
        self.0.iter().zip(WEIGHTS.iter()).map(|(v, w)| v * w).sum()
    }

    pub fn checksum(&self) -> char {
        let idx = self.weighted_sum() as usize % CHECKSUM_MAPPING.len();
        CHECKSUM_MAPPING[idx] as char
    }
}

impl TryFrom<&str> for VrnNumeric {
    type Error = VrnError;

    fn try_from(vrn: &str) -> Result<Self, Self::Error> {
        let letters: SmallVec<[u32; 8]> = vrn.chars().filter_map(letter_value).collect();
        // to_digit(10) only accepts ASCII 0-9
        let digits: SmallVec<[u32; 8]> = vrn.chars().filter_map(|c| c.to_digit(10)).collect();

        if letters.len() < SIGNIFICANT_LETTERS || digits.is_empty() {
            return Err(VrnError::MalformedInput {
                vrn: vrn.to_string(),
                letters: letters.len(),
                digits: digits.len(),
            });
        }

        let [l1, l2]: [u32; SIGNIFICANT_LETTERS] = pad_tail(&letters[..], 0);
        let [d1, d2, d3, d4]: [u32; SIGNIFICANT_DIGITS] = pad_tail(&digits[..], 0);

        let numeric = Self([l1, l2, d1, d2, d3, d4]);
        tracing::trace!(vrn, vector = ?numeric.0, "vrn numeric vector");
        Ok(numeric)
    }
}

/// Computes the check letter of `vrn`.
pub fn compute_checksum(vrn: &str) -> Result<char, VrnError> {
    Ok(VrnNumeric::try_from(vrn)?.checksum())
}

/// Returns `vrn` with its check letter appended, e.g. `SKA1` -> `SKA1L`.
pub fn append_checksum(vrn: &str) -> Result<String, VrnError> {
    let check = compute_checksum(vrn)?;
    let mut plate = String::with_capacity(vrn.len() + 1);
    plate.push_str(vrn);
    plate.push(check);
    Ok(plate)
}

/// Splits a full plate into its VRN and trailing check letter.
pub fn split_check_letter(plate: &str) -> Result<(&str, char), VrnError> {
    let trimmed = plate.trim_end();
    match trimmed.char_indices().next_back() {
        Some((idx, c)) if c.is_ascii_alphabetic() => Ok((&trimmed[..idx], c)),
        _ => Err(VrnError::MissingCheckLetter(plate.to_string())),
    }
}

/// Computed and printed check letters of a plate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlateCheck {
    pub expected: char,
    pub found: char,
}

impl PlateCheck {
    /// The printed letter is compared case-insensitively.
    pub fn is_valid(&self) -> bool {
        self.expected == self.found.to_ascii_uppercase()
    }
}

pub fn check_plate(plate: &str) -> Result<PlateCheck, VrnError> {
    let (vrn, found) = split_check_letter(plate)?;
    Ok(PlateCheck {
        expected: compute_checksum(vrn)?,
        found,
    })
}

/// Whether the trailing letter of `plate` matches the check letter of the rest.
pub fn verify_checksum(plate: &str) -> Result<bool, VrnError> {
    Ok(check_plate(plate)?.is_valid())
}
