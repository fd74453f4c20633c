//! Locating the landing palace from two numbers.
//!
//! The sum less one is counted around the six palaces. A non-negative count
//! runs forward from 大安; a negative count runs backward using its own table.

use crate::error::{LiurenError, LiurenResult};
use crate::palace::Palace;

/// Positions reached when counting backward from 大安, indexed by `|y| mod 6`.
const REVERSE_POSITIONS: [u32; 6] = [2, 1, 6, 5, 4, 3];

/// Locate the landing palace for two input numbers.
pub fn locate(a: i64, b: i64) -> Palace {
    let y = i128::from(a) + i128::from(b) - 1;
    let position = if y >= 0 {
        match y % 6 {
            0 => 6,
            r => r as u32,
        }
    } else {
        let steps = (y.unsigned_abs() % 6) as usize;
        REVERSE_POSITIONS[steps]
    };
    let palace = Palace::all()[position as usize - 1];
    tracing::debug!(a, b, position, palace = %palace, "located landing palace");
    palace
}

/// Convert a floating-point input to a whole number, rejecting NaN,
/// infinities, and fractions.
pub fn whole_number(value: f64) -> LiurenResult<i64> {
    if !value.is_finite() {
        return Err(LiurenError::NonFiniteNumber(value));
    }
    if value.fract() != 0.0 {
        return Err(LiurenError::FractionalNumber(value));
    }
    if !(i64::MIN as f64..i64::MAX as f64).contains(&value) {
        return Err(LiurenError::NumberOutOfRange(value.to_string()));
    }
    Ok(value as i64)
}

/// Locate the landing palace from floating-point inputs.
pub fn locate_f64(a: f64, b: f64) -> LiurenResult<Palace> {
    Ok(locate(whole_number(a)?, whole_number(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_count() {
        assert_eq!(locate(3, 5), Palace::DaAn);
        assert_eq!(locate(1, 1), Palace::DaAn);
        assert_eq!(locate(1, 2), Palace::LiuLian);
        assert_eq!(locate(3, 4), Palace::KongWang);
    }

    #[test]
    fn zero_sum_minus_one_wraps_to_six() {
        // y = 0
        assert_eq!(locate(0, 1), Palace::KongWang);
        // y = 12
        assert_eq!(locate(6, 7), Palace::KongWang);
    }

    #[test]
    fn reverse_table() {
        // y = -1 .. -6
        assert_eq!(locate(0, 0), Palace::DaAn);
        assert_eq!(locate(-1, 0), Palace::KongWang);
        assert_eq!(locate(-2, 0), Palace::XiaoJi);
        assert_eq!(locate(-3, 0), Palace::ChiKou);
        assert_eq!(locate(-4, 0), Palace::SuXi);
        assert_eq!(locate(-5, 0), Palace::LiuLian);
        // y = -7 wraps back to one step
        assert_eq!(locate(-6, 0), Palace::DaAn);
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let p = locate(i64::MAX, i64::MAX);
        assert!((1..=6).contains(&p.position()));
        let p = locate(i64::MIN, i64::MIN);
        assert!((1..=6).contains(&p.position()));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(matches!(
            locate_f64(f64::NAN, 1.0),
            Err(LiurenError::NonFiniteNumber(_))
        ));
        assert!(locate_f64(1.0, f64::INFINITY).is_err());
        assert!(matches!(
            locate_f64(1.5, 1.0),
            Err(LiurenError::FractionalNumber(_))
        ));
        assert_eq!(locate_f64(3.0, 5.0).unwrap(), Palace::DaAn);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            whole_number(1e20),
            Err(LiurenError::NumberOutOfRange(_))
        ));
        assert!(matches!(
            whole_number(-1e19),
            Err(LiurenError::NumberOutOfRange(_))
        ));
        // 2^63 is one past i64::MAX.
        assert!(whole_number(2f64.powi(63)).is_err());
        assert_eq!(whole_number(-(2f64.powi(63))).unwrap(), i64::MIN);
    }
}
