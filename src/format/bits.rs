//! Pure bit-unpacking arithmetic over fixed byte windows.
//!
//! Positions, name lengths, and socket counts are not byte-aligned on disk.
//! Two window shapes exist, both packed MSB-first:
//!
//! - The **root window** (5 bytes): four 10-bit coordinate fields, 40 bits
//!   exactly. Decoded by [`root_positions`].
//! - The **instance header window** (4 bytes): two 10-bit coordinate fields
//!   followed by a 6-bit name length and a 6-bit socket count, 32 bits
//!   exactly. Decoded by [`instance_header`].
//!
//! Every coordinate field is bias-corrected by 500 (see
//! [`crate::format::position::POSITION_BIAS`]). The functions here are
//! stateless; they take the raw window and return decoded integers, so they
//! can be tested exhaustively at the field boundaries without involving a
//! cursor.

use crate::format::position::Position;

/// Fields packed into an instance's 4-byte header window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InstanceHeader {
    /// The instance's bias-corrected position.
    pub position: Position,
    /// Length of the instance name in bytes (0..=63).
    pub name_len: u8,
    /// Number of sockets that follow the name (0..=63).
    pub socket_count: u8,
}

/// Unpack the two root positions from the 5-byte root window.
///
/// Layout, MSB-first across `w[0]..w[4]`: input-root X (10 bits), input-root
/// Y (10 bits), output-root X (10 bits), output-root Y (10 bits).
pub(crate) fn root_positions(w: &[u8; 5]) -> (Position, Position) {
    let input = Position::from_raw(
        i16::from(w[0]) << 2 | i16::from(w[1] >> 6),
        i16::from(w[1] & 0x3F) << 4 | i16::from(w[2] >> 4),
    );
    let output = Position::from_raw(
        i16::from(w[2] & 0x0F) << 6 | i16::from(w[3] >> 2),
        i16::from(w[3] & 0x03) << 8 | i16::from(w[4]),
    );
    (input, output)
}

/// Unpack an instance's 4-byte header window.
///
/// Layout, MSB-first across `w[0]..w[3]`: X (10 bits), Y (10 bits), name
/// length (6 bits), socket count (6 bits).
pub(crate) fn instance_header(w: &[u8; 4]) -> InstanceHeader {
    InstanceHeader {
        position: Position::from_raw(
            i16::from(w[0]) << 2 | i16::from(w[1] >> 6),
            i16::from(w[1] & 0x3F) << 4 | i16::from(w[2] >> 4),
        ),
        name_len: (w[2] & 0x0F) << 2 | w[3] >> 6,
        socket_count: w[3] & 0x3F,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Inverse of `root_positions`, for building test windows.
    fn pack_root(x1: u16, y1: u16, x2: u16, y2: u16) -> [u8; 5] {
        [
            (x1 >> 2) as u8,
            ((x1 & 0x03) << 6) as u8 | (y1 >> 4) as u8,
            ((y1 & 0x0F) << 4) as u8 | (x2 >> 6) as u8,
            ((x2 & 0x3F) << 2) as u8 | (y2 >> 8) as u8,
            (y2 & 0xFF) as u8,
        ]
    }

    // Inverse of `instance_header`.
    fn pack_instance(x: u16, y: u16, name_len: u8, socket_count: u8) -> [u8; 4] {
        [
            (x >> 2) as u8,
            ((x & 0x03) << 6) as u8 | (y >> 4) as u8,
            ((y & 0x0F) << 4) as u8 | (name_len >> 2),
            (name_len & 0x03) << 6 | (socket_count & 0x3F),
        ]
    }

    #[test]
    fn root_window_all_zero() {
        let (input, output) = root_positions(&[0; 5]);
        assert_eq!(input, Position { x: -500, y: -500 });
        assert_eq!(output, Position { x: -500, y: -500 });
    }

    #[test]
    fn root_window_all_max() {
        let (input, output) = root_positions(&[0xFF; 5]);
        assert_eq!(input, Position { x: 523, y: 523 });
        assert_eq!(output, Position { x: 523, y: 523 });
    }

    #[test]
    fn root_window_distinct_fields() {
        let w = pack_root(0, 1023, 500, 623);
        let (input, output) = root_positions(&w);
        assert_eq!(input, Position { x: -500, y: 523 });
        assert_eq!(output, Position { x: 0, y: 123 });
    }

    #[test]
    fn root_window_does_not_bleed_across_fields() {
        // A single set bit at the very end of field 1 must not affect field 2.
        let w = pack_root(1, 0, 0, 0);
        let (input, output) = root_positions(&w);
        assert_eq!(input, Position { x: -499, y: -500 });
        assert_eq!(output, Position { x: -500, y: -500 });
    }

    #[test]
    fn instance_window_all_zero() {
        let header = instance_header(&[0; 4]);
        assert_eq!(header.position, Position { x: -500, y: -500 });
        assert_eq!(header.name_len, 0);
        assert_eq!(header.socket_count, 0);
    }

    #[test]
    fn instance_window_all_max() {
        let header = instance_header(&[0xFF; 4]);
        assert_eq!(header.position, Position { x: 523, y: 523 });
        assert_eq!(header.name_len, 63);
        assert_eq!(header.socket_count, 63);
    }

    #[test]
    fn instance_window_distinct_fields() {
        let w = pack_instance(512, 12, 5, 2);
        let header = instance_header(&w);
        assert_eq!(header.position, Position { x: 12, y: -488 });
        assert_eq!(header.name_len, 5);
        assert_eq!(header.socket_count, 2);
    }

    #[test]
    fn instance_window_name_len_straddles_bytes() {
        // Name length occupies the low nibble of w[2] and the top two bits of
        // w[3]; check a value that needs both halves.
        let w = pack_instance(0, 0, 0b10_1101, 0);
        let header = instance_header(&w);
        assert_eq!(header.name_len, 45);
        assert_eq!(header.socket_count, 0);
    }

    #[test]
    fn pack_helpers_round_trip_boundaries() {
        for &(x1, y1, x2, y2) in &[(0, 0, 0, 0), (1023, 1023, 1023, 1023), (1, 2, 3, 4)] {
            let (input, output) = root_positions(&pack_root(x1, y1, x2, y2));
            assert_eq!(input, Position::from_raw(x1 as i16, y1 as i16));
            assert_eq!(output, Position::from_raw(x2 as i16, y2 as i16));
        }
    }
}
