use regex::Regex;

use crate::lianliankan::prelude::*;

/// Parses the compact mask notation into a literal shape mask.
///
/// Rows are separated by `/`; `.` marks a playable cell and `#` a blocked
/// one, so a 4x3 plus-shape reads `.##./..../.##.`. Rows may be ragged;
/// resolution overlays them onto the full rectangle (see
/// [`ShapeMask::resolve`]).
pub fn parse_mask(s: &str) -> Result<ShapeMask> {
    let pattern = Regex::new(r"^[.#]+(/[.#]+)*$").expect("mask pattern is well-formed");
    if !pattern.is_match(s) {
        return Err(anyhow!("unrecognized mask string {s:?}; expected rows of . and # separated by /"));
    }

    let rows = s
        .split('/')
        .map(|row| row.chars().map(|ch| ch == '.').collect())
        .collect();
    Ok(ShapeMask::Literal(rows))
}

/// Notates a resolved mask back into the row notation.
pub fn notate_mask(mask: &Mask) -> String {
    (0..mask.height)
        .map(|y| {
            (0..mask.width)
                .map(|x| if mask.playable(&Cell::new(x, y)) { '.' } else { '#' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let mask = parse_mask(".##./..../.##.").unwrap().resolve(4, 3);
        assert_eq!(mask.playable_cells().len(), 8);
        assert_eq!(notate_mask(&mask), ".##./..../.##.");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_mask("").is_err());
        assert!(parse_mask("..x.").is_err());
        assert!(parse_mask("..//..").is_err());
    }

    #[test]
    fn short_rows_leave_the_remainder_playable() {
        let mask = parse_mask("#/#").unwrap().resolve(2, 2);
        assert_eq!(notate_mask(&mask), "#./#.");
    }
}
