//! Quantized fixed-layout encodings for positions, orientations and velocities.
//!
//! Each codec maps a transform quantity to a fixed number of bytes and back:
//!
//! | Codec | Bytes | Precision |
//! |---|---|---|
//! | [`encode_vector`] | 12 | exact (raw `f32`) |
//! | [`encode_quaternion`] | 7 | smallest-three, `i16` per component |
//! | [`encode_velocity`] | 6 | `i16` over `[-max, max]` |
//! | [`encode_relative_position`] | 6 | `i16` truncation |
//!
//! Layouts are positional and little-endian with no tags or length prefixes.
//! Each `encode_*` has a paired `decode_*` taking a byte slice, and a
//! `write_*`/`read_*` pair for embedding values inside a larger packet.
//!
//! # Design Principles
//!
//! - **Wire-compatible by default** - Truncation and wraparound match existing
//!   encoders bit for bit.
//! - **Stateless** - Free functions on value types; safe to call from any thread.
//! - **No panics on input** - Short buffers are reported, never read past.
//!
//! # Example
//!
//! ```
//! use codec::{decode_quaternion, encode_quaternion, Quat};
//!
//! let bytes = encode_quaternion(Quat::IDENTITY);
//! assert_eq!(bytes[0], 3);
//! assert_eq!(decode_quaternion(&bytes).unwrap(), Quat::IDENTITY);
//! ```

mod bounded;
mod error;
mod layout;
mod options;
pub mod quant;
mod quaternion;
mod types;
mod vector;

pub use bounded::{
    decode_relative_position, decode_velocity, encode_relative_position,
    encode_relative_position_with, encode_velocity, encode_velocity_with, read_relative_position,
    read_velocity, validate_max_velocity, write_relative_position, write_relative_position_with,
    write_velocity, write_velocity_with, RELATIVE_POSITION_MAX, RELATIVE_POSITION_MIN,
};
pub use error::{CodecError, CodecResult, DomainReason};
pub use layout::{
    QUATERNION_ENCODED_LEN, RELATIVE_POSITION_ENCODED_LEN, VECTOR_ENCODED_LEN,
    VELOCITY_ENCODED_LEN,
};
pub use options::{CodecOptions, OverflowPolicy};
pub use quaternion::{
    decode_quaternion, decode_quaternion_with, encode_quaternion, encode_quaternion_with,
    largest_component, read_quaternion, read_quaternion_with, write_quaternion,
    write_quaternion_with,
};
pub use types::{Quat, Vec3};
pub use vector::{decode_vector, encode_vector, read_vector, write_vector};
