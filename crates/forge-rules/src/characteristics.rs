//! Valid characteristic arrays.
//!
//! Every hero distributes the same multiset of scores, `{2, 1, 0, 0, -1}`,
//! across the five characteristics. A class's primary characteristics may
//! never receive the negative score.

use forge_core::{Characteristic, CharacteristicArray};

/// The score multiset as `(value, copies)`, highest value first.
const BASE_SCORES: [(i32, usize); 4] = [(2, 1), (1, 1), (0, 2), (-1, 1)];

/// Every valid array for a class with the given primary characteristics.
///
/// Arrays are distinct permutations of the base scores in descending
/// lexicographic order (canonical characteristic order), filtered so each
/// primary characteristic is non-negative. The order is stable across calls.
pub fn calculate_characteristic_arrays(primaries: &[Characteristic]) -> Vec<CharacteristicArray> {
    let mut remaining = BASE_SCORES;
    let mut current = [0; 5];
    let mut arrays = Vec::new();
    permute(0, &mut current, &mut remaining, primaries, &mut arrays);
    arrays
}

/// True if `array` is one of the valid arrays for these primaries.
pub fn is_valid_array(array: &CharacteristicArray, primaries: &[Characteristic]) -> bool {
    let mut sorted = array.values();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted == [2, 1, 0, 0, -1] && primaries.iter().all(|c| array.value(*c) >= 0)
}

fn permute(
    position: usize,
    current: &mut [i32; 5],
    remaining: &mut [(i32, usize); 4],
    primaries: &[Characteristic],
    out: &mut Vec<CharacteristicArray>,
) {
    if position == current.len() {
        out.push(CharacteristicArray::new(*current));
        return;
    }
    let primary = primaries.contains(&Characteristic::ALL[position]);
    for slot in 0..remaining.len() {
        let (value, copies) = remaining[slot];
        if copies == 0 || (primary && value < 0) {
            continue;
        }
        remaining[slot].1 -= 1;
        current[position] = value;
        permute(position + 1, current, remaining, primaries, out);
        remaining[slot].1 += 1;
    }
}
