use crate::model::choices::StartSide;

pub const DEFAULT_COURSE_NAME: &str = "Kakegawa GH";
pub const HOLE_COUNT: usize = 18;
pub const LAST_HOLE_INDEX: usize = HOLE_COUNT - 1;
pub const DEFAULT_PAR: u8 = 4;

/// Par for holes 1..=18, in hole-number order.
const PAR_TABLE: [u8; HOLE_COUNT] = [4, 3, 4, 4, 4, 5, 3, 5, 4, 5, 4, 3, 4, 4, 4, 3, 4, 5];

#[must_use]
pub fn par_for_hole(hole_no: u8) -> u8 {
    usize::from(hole_no)
        .checked_sub(1)
        .and_then(|i| PAR_TABLE.get(i))
        .copied()
        .unwrap_or(DEFAULT_PAR)
}

/// Hole number played at `index` (0-based, clamped to the last hole).
///
/// OUT plays 1..=18; IN plays 10..=18 then 1..=9.
#[must_use]
pub fn hole_number(side: StartSide, index: usize) -> u8 {
    let index = index.min(LAST_HOLE_INDEX);
    let offset = match side {
        StartSide::Out => 0,
        StartSide::In => 9,
    };
    // HOLE_COUNT fits in u8, so the narrowing never truncates
    ((index + offset) % HOLE_COUNT + 1) as u8
}

#[must_use]
pub fn hole_order(side: StartSide) -> Vec<u8> {
    (0..HOLE_COUNT).map(|i| hole_number(side, i)).collect()
}
