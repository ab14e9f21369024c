/// Hard threshold activation.
///
/// Returns `1` when `sum` is strictly positive and `0` otherwise, so a sum of
/// exactly zero (and `NaN`) classifies as the negative class.
pub fn step(sum: f64) -> u8 {
    if sum > 0.0 { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn positive_sum_fires() {
        assert_eq!(step(0.1), 1);
        assert_eq!(step(f64::MIN_POSITIVE), 1);
    }

    #[test]
    fn zero_and_negative_do_not_fire() {
        assert_eq!(step(0.0), 0);
        assert_eq!(step(-0.0), 0);
        assert_eq!(step(-3.5), 0);
    }

    #[test]
    fn nan_does_not_fire() {
        assert_eq!(step(f64::NAN), 0);
    }
}
