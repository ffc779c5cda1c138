use std::fmt::Write as _;
use thiserror::Error;

use super::checksum;
use crate::canvas::error::GridError;
use crate::canvas::{Color, Grid};
use crate::shared::constants::{BYTES_PER_PIXEL, MATRIX_SIZE, PACKETS_PER_ROW};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// Row and column share one address byte, four bits each
    #[error("grid is {rows}x{cols}, packets address at most {max}x{max}", max = MATRIX_SIZE)]
    GridTooLarge { rows: usize, cols: usize },

    #[error("grid width {0} is not divisible into {n} packets per row", n = PACKETS_PER_ROW)]
    UnevenWidth(usize),

    #[error("row {row} is outside a grid of {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("packet part {0} is outside 0..{n}", n = PACKETS_PER_ROW)]
    PartOutOfRange(usize),

    #[error("packet is not valid hex: {0}")]
    InvalidHex(String),

    #[error("packet has {0} bytes, expected a whole number of pixels plus one checksum byte")]
    BadLength(usize),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("checksum mismatch: packet carries 0x{found:02x}, data sums to 0x{expected:02x}")]
    ChecksumMismatch { expected: u8, found: u8 },
}

/// One pixel as carried on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacketPixel {
    pub row: u8,
    pub col: u8,
    pub color: Color,
}

impl PacketPixel {
    fn address(&self) -> u8 {
        (self.row << 4) | (self.col & 0x0F)
    }
}

fn check_grid(grid: &Grid) -> Result<(), PacketError> {
    if grid.rows() > MATRIX_SIZE || grid.cols() > MATRIX_SIZE {
        return Err(PacketError::GridTooLarge {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if grid.cols() % PACKETS_PER_ROW != 0 {
        return Err(PacketError::UnevenWidth(grid.cols()));
    }
    Ok(())
}

/// Encode one quarter of `row` as lowercase hex: address, red, green, blue per
/// pixel, then the checksum byte.
pub fn encode_quarter_row(grid: &Grid, row: usize, part: usize) -> Result<String, PacketError> {
    check_grid(grid)?;
    if part >= PACKETS_PER_ROW {
        return Err(PacketError::PartOutOfRange(part));
    }
    let pixels = grid.row(row).map_err(|_| PacketError::RowOutOfRange {
        row,
        rows: grid.rows(),
    })?;

    let per_part = grid.cols() / PACKETS_PER_ROW;
    let start = part * per_part;

    let mut bytes = Vec::with_capacity(per_part * BYTES_PER_PIXEL + 1);
    for (offset, color) in pixels[start..start + per_part].iter().enumerate() {
        // check_grid keeps both indices below 16
        let pixel = PacketPixel {
            row: row as u8,
            col: (start + offset) as u8,
            color: *color,
        };
        let (r, g, b) = pixel.color.rgb();
        bytes.extend_from_slice(&[pixel.address(), r, g, b]);
    }
    bytes.push(checksum::checksum(&bytes));

    Ok(to_hex(&bytes))
}

/// Every packet of the grid, row by row, quarter by quarter
pub fn encode_grid(grid: &Grid) -> Result<Vec<String>, PacketError> {
    check_grid(grid)?;
    let mut packets = Vec::with_capacity(grid.rows() * PACKETS_PER_ROW);
    for row in 0..grid.rows() {
        for part in 0..PACKETS_PER_ROW {
            packets.push(encode_quarter_row(grid, row, part)?);
        }
    }
    Ok(packets)
}

/// Parse a packet back into pixels after checking its checksum
pub fn decode_packet(hex: &str) -> Result<Vec<PacketPixel>, PacketError> {
    let bytes = from_hex(hex.trim())?;
    if bytes.len() < BYTES_PER_PIXEL + 1 || (bytes.len() - 1) % BYTES_PER_PIXEL != 0 {
        return Err(PacketError::BadLength(bytes.len()));
    }

    let (data, tail) = bytes.split_at(bytes.len() - 1);
    let found = tail[0];
    if !checksum::verify(data, found) {
        return Err(PacketError::ChecksumMismatch {
            expected: checksum::checksum(data),
            found,
        });
    }

    Ok(data
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|chunk| PacketPixel {
            row: chunk[0] >> 4,
            col: chunk[0] & 0x0F,
            color: Color::from_rgb(chunk[1], chunk[2], chunk[3]),
        })
        .collect())
}

/// Place decoded pixels onto a black matrix-sized grid; pixels never sent stay black
pub fn assemble_grid<I>(pixels: I) -> Result<Grid, PacketError>
where
    I: IntoIterator<Item = PacketPixel>,
{
    let mut grid = Grid::filled(MATRIX_SIZE, MATRIX_SIZE, Color::BLACK)?;
    for pixel in pixels {
        grid.set(pixel.row as usize, pixel.col as usize, pixel.color)?;
    }
    Ok(grid)
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

fn from_hex(hex: &str) -> Result<Vec<u8>, PacketError> {
    if hex.len() % 2 != 0 || !hex.is_ascii() {
        return Err(PacketError::InvalidHex(hex.to_string()));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| PacketError::InvalidHex(hex.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::sprites;

    #[test]
    fn test_quarter_row_layout() {
        let mut grid = Grid::filled(16, 16, Color::BLACK).unwrap();
        grid.set(2, 5, Color::new(0x008000).unwrap()).unwrap();

        let packet = encode_quarter_row(&grid, 2, 1).unwrap();
        // 4 pixels * 4 bytes + checksum, two hex digits each
        assert_eq!(packet.len(), 34);
        assert!(packet.starts_with("24000000"));
        assert_eq!(&packet[8..16], "25008000");
        assert_eq!(&packet[24..32], "27000000");
    }

    #[test]
    fn test_narrow_grid_packets_carry_quarter_of_width() {
        let grid = Grid::filled(2, 8, Color::BLACK).unwrap();

        let packet = encode_quarter_row(&grid, 1, 3).unwrap();
        // 2 pixels * 4 bytes + checksum
        assert_eq!(packet.len(), 18);
        assert!(packet.starts_with("16000000"));
        assert_eq!(&packet[8..16], "17000000");

        let pixels = decode_packet(&packet).unwrap();
        assert_eq!(pixels.len(), 2);
        assert_eq!((pixels[1].row, pixels[1].col), (1, 7));
    }

    #[test]
    fn test_encoded_packets_verify_and_decode() {
        let mut grid = Grid::filled(16, 16, Color::BLACK).unwrap();
        crate::canvas::overlay(&sprites::snake().unwrap(), &mut grid).unwrap();

        let packets = encode_grid(&grid).unwrap();
        assert_eq!(packets.len(), 64);

        for (index, packet) in packets.iter().enumerate() {
            let pixels = decode_packet(packet).unwrap();
            assert_eq!(pixels.len(), 4);
            for pixel in pixels {
                assert_eq!(pixel.row as usize, index / 4);
                assert_eq!(
                    pixel.color,
                    grid.get(pixel.row as usize, pixel.col as usize).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_assemble_rebuilds_sent_pixels() {
        let mut grid = Grid::filled(16, 16, Color::BLACK).unwrap();
        crate::canvas::overlay(&sprites::snake().unwrap(), &mut grid).unwrap();

        let mut pixels = Vec::new();
        for packet in encode_grid(&grid).unwrap() {
            pixels.extend(decode_packet(&packet).unwrap());
        }
        assert_eq!(assemble_grid(pixels).unwrap(), grid);
    }

    #[test]
    fn test_assemble_leaves_unsent_pixels_black() {
        let white = Color::new(0xffffff).unwrap();
        let grid = assemble_grid(vec![PacketPixel { row: 15, col: 3, color: white }]).unwrap();
        assert_eq!(grid.get(15, 3).unwrap(), white);
        assert_eq!(grid.get(0, 0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_corrupted_packet_fails_checksum() {
        let grid = Grid::from_rows(&sprites::OVERLAY_TEMPLATE).unwrap();
        let packet = encode_quarter_row(&grid, 3, 0).unwrap();

        // Flip a nibble inside the first pixel's green byte
        let mut corrupted: Vec<char> = packet.chars().collect();
        corrupted[4] = if corrupted[4] == 'f' { 'e' } else { 'f' };
        let corrupted: String = corrupted.into_iter().collect();

        assert!(matches!(
            decode_packet(&corrupted),
            Err(PacketError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_unaddressable_grids() {
        let wide = Grid::filled(1, 20, Color::BLACK).unwrap();
        assert_eq!(
            encode_grid(&wide),
            Err(PacketError::GridTooLarge { rows: 1, cols: 20 })
        );

        let uneven = Grid::filled(2, 6, Color::BLACK).unwrap();
        assert_eq!(encode_grid(&uneven), Err(PacketError::UnevenWidth(6)));
    }

    #[test]
    fn test_rejects_bad_row_and_part() {
        let grid = Grid::filled(4, 8, Color::BLACK).unwrap();
        assert_eq!(
            encode_quarter_row(&grid, 4, 0),
            Err(PacketError::RowOutOfRange { row: 4, rows: 4 })
        );
        assert_eq!(
            encode_quarter_row(&grid, 0, 4),
            Err(PacketError::PartOutOfRange(4))
        );
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        assert!(matches!(decode_packet("zz"), Err(PacketError::InvalidHex(_))));
        assert!(matches!(decode_packet("abc"), Err(PacketError::InvalidHex(_))));
        assert_eq!(decode_packet("00112233"), Err(PacketError::BadLength(4)));
    }
}
