//! The bitstream module is the bit-level I/O subsystem of the hfz codec.
//!
//! Codes are packed most significant bit first into bytes, and the final byte is padded with
//! zeros. The payload holds no length of its own. The original byte count stored in the
//! container header tells the unpacker when to stop, so padding is never decoded as data.
//!
pub mod bitpacker;
pub mod bitreader;
pub mod bitunpacker;
