//! Natural, case-insensitive ordering of parameter names.
//!
//! Runs of ASCII digits compare by numeric value (`ITEMID2` < `ITEMID10`),
//! every other character compares by its ASCII upper-case form. Names that
//! are equal under those rules fall back to plain byte order, so the result
//! is a total order that does not depend on locale or platform.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compares two parameter names in natural, case-insensitive order.
pub fn compare(a: &str, b: &str) -> Ordering {
    natural_cmp(a, b)
        .then_with(|| a.to_ascii_uppercase().cmp(&b.to_ascii_uppercase()))
        .then_with(|| a.cmp(b))
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let left_run = take_digits(&mut left);
                let right_run = take_digits(&mut right);
                match compare_digit_runs(&left_run, &right_run) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                }
            }
            (Some(l), Some(r)) => {
                match l.to_ascii_uppercase().cmp(&r.to_ascii_uppercase()) {
                    Ordering::Equal => {
                        left.next();
                        right.next();
                    }
                    unequal => return unequal,
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compares two digit runs by numeric value without parsing, so runs of any
/// length are supported.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');

    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}
