use super::rational::Rational;

/**
 * Whole-number literal as a rational: `r(5)` is 5/1.
 */
pub fn r(value: u64) -> Rational<u64> {
    Rational::from(value)
}

#[cfg(test)]
mod tests {
    use super::r;

    #[test]
    fn literal_has_unit_denominator() {
        let five = r(5);
        assert_eq!(five.numerator(), 5);
        assert_eq!(five.denominator(), 1);
        assert_eq!(five.to_string(), "5/1");
    }

    #[test]
    fn literal_arithmetic() {
        assert_eq!(r(1) / r(4) + r(3) / r(4), r(1));
        assert_eq!((r(7) / r(2)).to_integer(), 3);
    }
}
