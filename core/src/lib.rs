pub mod checksum;
pub mod error;
pub mod series;

pub use checksum::{append_checksum, compute_checksum, verify_checksum};
pub use error::VrnError;
