//! Physical storage: the flat field buffer and its addressing schemes.

mod buffer;
mod layout;

pub use buffer::{TableBuffer, FIELD_LEN};
pub use layout::{buffer_len, Layout};
