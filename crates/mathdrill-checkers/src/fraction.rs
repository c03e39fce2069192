//! Fraction answer checking.
//!
//! Answers are compared as exact rationals: both sides are parsed into
//! gcd-reduced fractions, so "6/8", "3/4", and "0.75" all name the same
//! value.

use mathdrill_core::model::Answer;
use mathdrill_core::traits::Checker;

/// Checker for fraction quizzes.
#[derive(Debug, Default)]
pub struct FractionChecker;

impl Checker for FractionChecker {
    fn name(&self) -> &str {
        "fraction"
    }

    fn check_answer(&self, input: &str, expected: &Answer) -> bool {
        let Some(user) = parse_fraction(input) else {
            return false;
        };
        let expected = match expected {
            Answer::Text(s) => parse_fraction(s),
            Answer::Int(v) => Some((*v, 1)),
            Answer::Float(v) => parse_fraction(&v.to_string()),
        };
        expected.map_or(false, |e| user == e)
    }
}

/// Parse "a/b", "a", or decimal notation into a reduced fraction.
///
/// The result carries the sign on the numerator and a positive denominator;
/// a zero denominator is unparseable, not an error.
fn parse_fraction(s: &str) -> Option<(i64, i64)> {
    let s = s.trim();
    if let Some((num, den)) = s.split_once('/') {
        let num: i64 = num.trim().parse().ok()?;
        let den: i64 = den.trim().parse().ok()?;
        normalize(num, den)
    } else if s.contains('.') {
        parse_decimal(s)
    } else {
        let num: i64 = s.parse().ok()?;
        Some((num, 1))
    }
}

/// Decimal notation: "0.75" == 3/4, "-1.5" == -3/2.
fn parse_decimal(s: &str) -> Option<(i64, i64)> {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, s),
    };
    let (whole, frac) = digits.split_once('.')?;
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = if whole.is_empty() {
        0
    } else {
        if !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        whole.parse().ok()?
    };
    let scale = 10i64.checked_pow(frac.len() as u32)?;
    let frac: i64 = frac.parse().ok()?;
    let num = sign * whole.checked_mul(scale)?.checked_add(frac)?;
    normalize(num, scale)
}

fn normalize(num: i64, den: i64) -> Option<(i64, i64)> {
    if den == 0 {
        return None;
    }
    let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
    let mut num = num / g;
    let mut den = den / g;
    if den < 0 {
        num = -num;
        den = -den;
    }
    Some((num, den))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.max(1)
}
