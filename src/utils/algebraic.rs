//! Board location conversions for algebraic coordinates.
//!
//! Files are letters from `a` at column 0; ranks count up from the bottom row,
//! so on a board of height `h` row `r` is rank `h - r`. Boards up to 26 files
//! wide are supported, and ranks may run past 9 (`a10`).

use crate::game_state::chess_types::BoardLocation;

const MAX_FILES: i32 = 26;

/// Convert a location to algebraic notation (for example: `(6, 4)` is "e2"
/// on an 8-row board).
#[inline]
pub fn location_to_algebraic(location: BoardLocation, height: usize) -> Result<String, String> {
    let (row, col) = location;
    let height = height as i32;
    if row < 0 || row >= height || !(0..MAX_FILES).contains(&col) {
        return Err(format!("Location out of bounds: {location:?}"));
    }

    let file_char = char::from(b'a' + col as u8);
    Ok(format!("{file_char}{}", height - row))
}

/// Convert algebraic notation (for example: "e4") to a location on a board of
/// the given size.
#[inline]
pub fn algebraic_to_location(
    square: &str,
    height: usize,
    width: usize,
) -> Result<BoardLocation, String> {
    let mut chars = square.chars();
    let file = chars
        .next()
        .ok_or_else(|| format!("Invalid algebraic square: {square}"))?;
    if !file.is_ascii_lowercase() {
        return Err(format!("Invalid algebraic file: {file}"));
    }
    let col = (file as u8 - b'a') as usize;
    if col >= width {
        return Err(format!("Algebraic file {file} is off a {width}-file board"));
    }

    let rank_text = chars.as_str();
    if !rank_text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("Invalid algebraic rank: {rank_text}"));
    }
    let rank = rank_text
        .parse::<usize>()
        .map_err(|_| format!("Invalid algebraic rank: {rank_text}"))?;
    if rank == 0 || rank > height {
        return Err(format!("Algebraic rank {rank} is off a {height}-rank board"));
    }

    Ok(((height - rank) as i32, col as i32))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_location, location_to_algebraic};

    #[test]
    fn standard_board_corners_and_centre() {
        assert_eq!(location_to_algebraic((7, 0), 8).expect("a1 should convert"), "a1");
        assert_eq!(location_to_algebraic((0, 7), 8).expect("h8 should convert"), "h8");
        assert_eq!(location_to_algebraic((4, 4), 8).expect("e4 should convert"), "e4");

        assert_eq!(algebraic_to_location("a1", 8, 8).expect("a1 should parse"), (7, 0));
        assert_eq!(algebraic_to_location("e2", 8, 8).expect("e2 should parse"), (6, 4));
    }

    #[test]
    fn tall_boards_use_multi_digit_ranks() {
        assert_eq!(location_to_algebraic((0, 2), 12).expect("c12 should convert"), "c12");
        assert_eq!(algebraic_to_location("c12", 12, 8).expect("c12 should parse"), (0, 2));
    }

    #[test]
    fn rejects_off_board_coordinates() {
        assert!(location_to_algebraic((8, 0), 8).is_err());
        assert!(location_to_algebraic((0, -1), 8).is_err());
        assert!(algebraic_to_location("i1", 8, 8).is_err());
        assert!(algebraic_to_location("a9", 8, 8).is_err());
        assert!(algebraic_to_location("a0", 8, 8).is_err());
        assert!(algebraic_to_location("E4", 8, 8).is_err());
        assert!(algebraic_to_location("", 8, 8).is_err());
    }

    #[test]
    fn rejects_signed_or_padded_ranks() {
        assert!(algebraic_to_location("a+1", 8, 8).is_err());
        assert!(algebraic_to_location("e+4", 8, 8).is_err());
        assert!(algebraic_to_location("a 1", 8, 8).is_err());
        assert!(algebraic_to_location("a", 8, 8).is_err());
    }
}
