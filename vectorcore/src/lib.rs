#![cfg_attr(not(test), no_std)]

//! Two and three dimensional vector arithmetic.
//!
//! Every operation comes in two flavours: `get_*` methods borrow the vector and
//! return a new value, `set_*` methods overwrite the receiver in place.

mod matrix;
pub mod parse;
mod utils;
pub mod vector2;
pub mod vector3;

pub use parse::ParseVectorError;
pub use utils::{DEFAULT_LENGTH, DEFAULT_PRECISION};
pub use vector2::Vector2;
pub use vector3::Vector3;
