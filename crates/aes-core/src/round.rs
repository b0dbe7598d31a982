//! The four round transformations over the 4×4 state.

use crate::gf::{mul03, mul09, mul0b, mul0d, mul0e, xtime};
use crate::key::KeySchedule;
use crate::sbox::{inv_sbox, sbox};
use crate::state::{at, column, Block};

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub(crate) fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions; row 0 stays put.
pub(crate) fn shift_rows(state: &mut Block) {
    let copy = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[at(row, col)] = copy[at(row, (col + row) % 4)];
        }
    }
}

/// Rotates row `r` right by `r` positions, undoing [`shift_rows`].
pub(crate) fn inv_shift_rows(state: &mut Block) {
    let copy = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[at(row, (col + row) % 4)] = copy[at(row, col)];
        }
    }
}

/// Multiplies each state column by the fixed polynomial {02 03 01 01}.
pub(crate) fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let [a0, a1, a2, a3] = column(state, col);
        state[at(0, col)] = xtime(a0) ^ mul03(a1) ^ a2 ^ a3;
        state[at(1, col)] = a0 ^ xtime(a1) ^ mul03(a2) ^ a3;
        state[at(2, col)] = a0 ^ a1 ^ xtime(a2) ^ mul03(a3);
        state[at(3, col)] = mul03(a0) ^ a1 ^ a2 ^ xtime(a3);
    }
}

/// Multiplies each state column by the inverse polynomial {0e 0b 0d 09}.
pub(crate) fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let [a0, a1, a2, a3] = column(state, col);
        state[at(0, col)] = mul0e(a0) ^ mul0b(a1) ^ mul0d(a2) ^ mul09(a3);
        state[at(1, col)] = mul09(a0) ^ mul0e(a1) ^ mul0b(a2) ^ mul0d(a3);
        state[at(2, col)] = mul0d(a0) ^ mul09(a1) ^ mul0e(a2) ^ mul0b(a3);
        state[at(3, col)] = mul0b(a0) ^ mul0d(a1) ^ mul09(a2) ^ mul0e(a3);
    }
}

/// XORs the four schedule columns selected by `round` into the state.
#[inline]
pub(crate) fn add_round_key(state: &mut Block, schedule: &KeySchedule, round: usize) {
    for col in 0..4 {
        let key_col = schedule.column(4 * round + col);
        for row in 0..4 {
            state[at(row, col)] ^= key_col[row];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn shift_rows_applies_the_expected_permutation() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        let expected: Block = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];
        assert_eq!(state, expected);
    }

    #[test]
    fn shift_rows_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn mix_columns_matches_fips_example() {
        // Input column db 13 53 45 mixes to 8e 4d a1 bc.
        let mut state: Block = [
            0xdb, 0x13, 0x53, 0x45, 0xf2, 0x0a, 0x22, 0x5c, 0x01, 0x01, 0x01, 0x01, 0xc6, 0xc6,
            0xc6, 0xc6,
        ];
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(&state[4..8], &[0x9f, 0xdc, 0x58, 0x9d]);
        assert_eq!(&state[8..12], &[0x01, 0x01, 0x01, 0x01]);
        assert_eq!(&state[12..16], &[0xc6, 0xc6, 0xc6, 0xc6]);
    }

    #[test]
    fn mix_columns_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn sub_bytes_round_trips() {
        let mut state: Block = core::array::from_fn(|i| (i * 17) as u8);
        let original = state;
        sub_bytes(&mut state);
        assert_ne!(state, original);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }
}
