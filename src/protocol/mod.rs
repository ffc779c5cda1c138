pub mod checksum;
pub mod packet;

pub use packet::{assemble_grid, decode_packet, encode_grid};
