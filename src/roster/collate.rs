//! Turkish-alphabet string comparison.
//!
//! Member and sub-team names are Turkish; byte order misplaces ç/ğ/ı/ö/ş/ü
//! and the dotted/dotless i pair. Comparison is case-insensitive on a
//! dictionary-order weight table, with a byte-order tiebreak so the result
//! is a total order even for strings that differ only in case.

use std::cmp::Ordering;

/// Turkish dictionary order, with q/w/x interleaved at their Latin positions.
const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'q', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'w', 'x', 'y', 'z',
];

/// Lowercase a single character under Turkish casing rules.
///
/// 'I' folds to dotless 'ı' and 'İ' to dotted 'i'; everything else uses the
/// Unicode simple mapping.
fn fold(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Collation weight of a folded character.
///
/// Characters outside the alphabet sort after every letter, ordered by code
/// point, so unexpected input still compares deterministically.
fn weight(c: char) -> u32 {
    match ALPHABET.iter().position(|&a| a == c) {
        Some(idx) => idx as u32,
        None => ALPHABET.len() as u32 + c as u32,
    }
}

/// Compare two strings in Turkish dictionary order.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut wa = a.chars().map(fold).map(weight);
    let mut wb = b.chars().map(fold).map(weight);

    loop {
        match (wa.next(), wb.next()) {
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => continue,
                other => return other,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => break,
        }
    }

    // Same primary weights (e.g. case-only difference): fall back to byte
    // order so equal-weight strings still order deterministically.
    a.cmp(b)
}

/// Case-insensitive equality under Turkish folding.
pub fn eq_folded(a: &str, b: &str) -> bool {
    let mut fa = a.chars().map(fold);
    let mut fb = b.chars().map(fold);
    loop {
        match (fa.next(), fb.next()) {
            (Some(x), Some(y)) if x == y => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}
