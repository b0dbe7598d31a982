//! Block state layout.
//!
//! The cipher views a 16-byte block as a 4×4 byte matrix stored
//! column-major: element (row, col) lives at index `row + 4 * col`. Round
//! operations mutate a caller-owned block in place and never alias the
//! constant lookup tables.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Maps a (row, column) pair to its index in the column-major layout.
#[inline]
pub(crate) fn at(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// Extracts column `col` of the state as an array.
#[inline]
pub(crate) fn column(state: &Block, col: usize) -> [u8; 4] {
    [
        state[at(0, col)],
        state[at(1, col)],
        state[at(2, col)],
        state[at(3, col)],
    ]
}
