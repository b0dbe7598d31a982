//! Key schedule expansion and single-block encryption/decryption.

use crate::key::{Aes128Key, KeySchedule, SCHEDULE_COLS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;
use crate::state::Block;

/// Round constants: successive doublings of 0x01 in GF(2^8).
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

const ROUNDS: usize = 10;

/// Expands a 16-byte root key into the 4×44 schedule.
///
/// Columns 0–3 copy the root key. Every fourth column thereafter takes the
/// previous column, rotates it up by one byte, substitutes each byte once
/// through the forward S-box and folds the round constant into row 0; the
/// remaining columns XOR the column four back with the previous column.
pub fn expand_key(key: &Aes128Key) -> KeySchedule {
    let mut cols = [[0u8; 4]; SCHEDULE_COLS];
    for (col, chunk) in cols.iter_mut().zip(key.0.chunks_exact(4)) {
        col.copy_from_slice(chunk);
    }

    for c in 4..SCHEDULE_COLS {
        let mut temp = cols[c - 1];
        if c % 4 == 0 {
            temp = [temp[1], temp[2], temp[3], temp[0]];
            for byte in temp.iter_mut() {
                *byte = sbox(*byte);
            }
            temp[0] ^= RCON[c / 4 - 1];
        }
        for row in 0..4 {
            cols[c][row] = cols[c - 4][row] ^ temp[row];
        }
    }

    KeySchedule::from_columns(cols)
}

/// Encrypts a single 16-byte block with a pre-expanded schedule.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;

    add_round_key(&mut state, schedule, 0);

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule, round);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule, ROUNDS);

    state
}

/// Decrypts a single 16-byte block with a pre-expanded schedule.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;

    add_round_key(&mut state, schedule, ROUNDS);
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule, round);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule, 0);

    state
}
