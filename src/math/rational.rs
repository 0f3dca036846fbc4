use std::{
    cmp::Ordering,
    fmt::Display,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::AsPrimitive;

use super::{
    rational_error::{RationalError, Result},
    traits::{Integral, One, Signed, Zero},
};

/**
 * An exact fraction over a fixed-width integer type.
 *
 * Every live value is kept in canonical form: the denominator is positive, and numerator and
 * denominator are coprime (zero is always 0/1). Equality and hashing therefore work on the fields directly.
 *
 * Intermediate results are not checked for overflow; they inherit the behaviour of `T`.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational<T: Integral> {
    numerator: T,
    denominator: T,
}

impl<T: Integral> Rational<T> {
    /// Creates the rational `numerator / denominator` in canonical form.
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        if denominator == T::zero() {
            log::debug!("rejected rational {}/0", numerator);
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn numerator(&self) -> T {
        self.numerator
    }

    pub fn denominator(&self) -> T {
        self.denominator
    }

    /**
     * Divides out the greatest common divisor and moves the sign into the numerator.
     * The caller guarantees that `denominator` is not zero.
     */
    fn reduced(numerator: T, denominator: T) -> Self {
        let g = numerator.gcd(&denominator);
        if g == T::zero() {
            return Self::default();
        }

        let mut numerator = numerator / g;
        let mut denominator = denominator / g;
        if denominator.is_negative() {
            numerator = numerator.negated();
            denominator = denominator.negated();
        }

        Self {
            numerator,
            denominator,
        }
    }

    /// Returns an equal value (unary plus).
    pub fn pos(self) -> Self {
        self
    }

    /**
     * Adds 1 to self and returns the updated value.
     */
    pub fn pre_increment(&mut self) -> &mut Self {
        *self += T::one();
        self
    }

    /**
     * Adds 1 to self and returns the value from before the addition.
     */
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.pre_increment();
        previous
    }

    pub fn pre_decrement(&mut self) -> &mut Self {
        *self -= T::one();
        self
    }

    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.pre_decrement();
        previous
    }

    /**
     * self / rhs, failing if rhs is zero.
     */
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.numerator == T::zero() {
            log::debug!("rejected division of {} by zero", self);
            return Err(RationalError::DivideByZeroOperand);
        }

        //multiply with the reciprocal, cancelling crosswise first; the sign is fixed by the reduction
        let g1 = self.numerator.gcd(&rhs.numerator);
        let g2 = self.denominator.gcd(&rhs.denominator);
        Ok(Self::reduced(
            (self.numerator / g1) * (rhs.denominator / g2),
            (self.denominator / g2) * (rhs.numerator / g1),
        ))
    }

    pub fn checked_div_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /**
     * 1/self
     */
    pub fn checked_recip(&self) -> Result<Self> {
        Self::one().checked_div(self)
    }

    /// Converts to f64, promoting both fields before dividing.
    pub fn to_f64(&self) -> f64 {
        AsPrimitive::<f64>::as_(self.numerator) / AsPrimitive::<f64>::as_(self.denominator)
    }

    /// Converts to f32, promoting both fields before dividing.
    pub fn to_f32(&self) -> f32 {
        AsPrimitive::<f32>::as_(self.numerator) / AsPrimitive::<f32>::as_(self.denominator)
    }

    /// Integer part of the value, truncated toward zero.
    pub fn to_integer(&self) -> T {
        self.numerator / self.denominator
    }

    fn add_rational(self, rhs: Self) -> Self {
        //bring both to the least common multiple of the denominators rather than their product
        let g = self.denominator.gcd(&rhs.denominator);
        let lcm = (self.denominator / g) * rhs.denominator;
        let numerator =
            self.numerator * (lcm / self.denominator) + rhs.numerator * (lcm / rhs.denominator);
        Self::reduced(numerator, lcm)
    }

    fn sub_rational(self, rhs: Self) -> Self {
        let g = self.denominator.gcd(&rhs.denominator);
        let lcm = (self.denominator / g) * rhs.denominator;
        let numerator =
            self.numerator * (lcm / self.denominator) - rhs.numerator * (lcm / rhs.denominator);
        Self::reduced(numerator, lcm)
    }

    fn mul_rational(self, rhs: Self) -> Self {
        let g1 = self.numerator.gcd(&rhs.denominator);
        let g2 = self.denominator.gcd(&rhs.numerator);
        Self::reduced(
            (self.numerator / g1) * (rhs.numerator / g2),
            (self.denominator / g2) * (rhs.denominator / g1),
        )
    }

    fn div_rational(self, rhs: Self) -> Self {
        match self.checked_div(&rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Integral> Default for Rational<T> {
    fn default() -> Self {
        Self {
            numerator: T::zero(),
            denominator: T::one(),
        }
    }
}

impl<T: Integral> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self {
            numerator: value,
            denominator: T::one(),
        }
    }
}

impl<T: Integral> TryFrom<(T, T)> for Rational<T> {
    type Error = RationalError;

    fn try_from(value: (T, T)) -> Result<Self> {
        Self::new(value.0, value.1)
    }
}

impl<T: Integral> From<Rational<T>> for f64 {
    fn from(value: Rational<T>) -> Self {
        value.to_f64()
    }
}

impl<T: Integral> From<Rational<T>> for f32 {
    fn from(value: Rational<T>) -> Self {
        value.to_f32()
    }
}

impl<T: Integral> Display for Rational<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T: Integral> Zero for Rational<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.numerator == T::zero()
    }
}

impl<T: Integral> One for Rational<T> {
    fn one() -> Self {
        Self::from(T::one())
    }

    fn is_one(&self) -> bool {
        self.numerator == T::one() && self.denominator == T::one()
    }
}

impl<T: Integral> Signed for Rational<T> {
    fn abs(&self) -> Self {
        if self.numerator.is_negative() {
            Self {
                numerator: self.numerator.negated(),
                denominator: self.denominator,
            }
        } else {
            *self
        }
    }

    fn is_positive(&self) -> bool {
        self.numerator > T::zero()
    }

    fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

impl<T: Integral + Neg<Output = T>> Neg for Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl<'a, T: Integral + Neg<Output = T>> Neg for &'a Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<T: Integral> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integral> Ord for Rational<T> {
    /**
     * Compares by cross-multiplication. Denominators are positive, so the order of the products is the
     * order of the values, as long as the products fit in `T`.
     */
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl<T: Integral> Sum for Rational<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |sum, f| sum + f)
    }
}

impl<'a, T: Integral> Sum<&'a Rational<T>> for Rational<T> {
    fn sum<I: Iterator<Item = &'a Rational<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |sum, f| sum + *f)
    }
}

impl<T: Integral> Product for Rational<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |product, f| product * f)
    }
}

impl<'a, T: Integral> Product<&'a Rational<T>> for Rational<T> {
    fn product<I: Iterator<Item = &'a Rational<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), |product, f| product * *f)
    }
}

//======================== operators ========================//

macro_rules! binary_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $inner:ident) => {
        impl<T: Integral> $op for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: Rational<T>) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl<'a, T: Integral> $op<&'a Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: &'a Rational<T>) -> Self::Output {
                (*self).$inner(*rhs)
            }
        }

        impl<T: Integral> $op<T> for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, rhs: T) -> Self::Output {
                self.$inner(Rational::from(rhs))
            }
        }

        impl<T: Integral> $op_assign for Rational<T> {
            fn $method_assign(&mut self, rhs: Rational<T>) {
                *self = self.$inner(rhs);
            }
        }

        impl<'a, T: Integral> $op_assign<&'a Rational<T>> for Rational<T> {
            fn $method_assign(&mut self, rhs: &'a Rational<T>) {
                *self = self.$inner(*rhs);
            }
        }

        impl<T: Integral> $op_assign<T> for Rational<T> {
            fn $method_assign(&mut self, rhs: T) {
                *self = self.$inner(Rational::from(rhs));
            }
        }
    };
}

binary_op!(Add, add, AddAssign, add_assign, add_rational);
binary_op!(Sub, sub, SubAssign, sub_assign, sub_rational);
binary_op!(Mul, mul, MulAssign, mul_assign, mul_rational);
binary_op!(Div, div, DivAssign, div_assign, div_rational);

//a primitive on the left-hand side is promoted to a rational with denominator 1
macro_rules! ttype {
    ($t:ident) => {
        impl Add<Rational<$t>> for $t {
            type Output = Rational<$t>;

            fn add(self, rhs: Rational<$t>) -> Self::Output {
                Rational::from(self) + rhs
            }
        }

        impl Sub<Rational<$t>> for $t {
            type Output = Rational<$t>;

            fn sub(self, rhs: Rational<$t>) -> Self::Output {
                Rational::from(self) - rhs
            }
        }

        impl Mul<Rational<$t>> for $t {
            type Output = Rational<$t>;

            fn mul(self, rhs: Rational<$t>) -> Self::Output {
                Rational::from(self) * rhs
            }
        }

        impl Div<Rational<$t>> for $t {
            type Output = Rational<$t>;

            fn div(self, rhs: Rational<$t>) -> Self::Output {
                Rational::from(self) / rhs
            }
        }
    };
}

ttype!(usize);
ttype!(u128);
ttype!(u64);
ttype!(u32);
ttype!(u16);
ttype!(u8);
ttype!(isize);
ttype!(i128);
ttype!(i64);
ttype!(i32);
ttype!(i16);
ttype!(i8);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::math::{
        rational::Rational,
        rational_error::RationalError,
        traits::{One, Signed, Zero},
    };

    fn q(numerator: i64, denominator: i64) -> Rational<i64> {
        Rational::new(numerator, denominator).unwrap()
    }

    #[test]
    fn rational_default_is_zero() {
        let zero = Rational::<i32>::default();
        assert_eq!(zero.numerator(), 0);
        assert_eq!(zero.denominator(), 1);
        assert!(zero.is_zero());
    }

    #[test]
    fn rational_reduces_on_construction() {
        let r = q(6, 8);
        assert_eq!((r.numerator(), r.denominator()), (3, 4));

        let r = q(0, -7);
        assert_eq!((r.numerator(), r.denominator()), (0, 1));

        let r = q(-10, -4);
        assert_eq!((r.numerator(), r.denominator()), (5, 2));
    }

    #[test]
    fn rational_zero_denominator() {
        assert_eq!(Rational::new(3i32, 0), Err(RationalError::DivisionByZero));
        assert_eq!(Rational::new(0u8, 0), Err(RationalError::DivisionByZero));
        assert_eq!(
            Rational::<i16>::try_from((1, 0)),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn rational_add_uses_common_multiple() {
        assert_eq!(q(1, 6) + q(1, 4), q(5, 12));
        assert_eq!(q(1, 2) + q(-1, 2), Rational::zero());

        //the product of the denominators does not fit in an i8, their least common multiple does
        let hundredth = Rational::new(1i8, 100).unwrap();
        let sum = hundredth + hundredth;
        assert_eq!((sum.numerator(), sum.denominator()), (1, 50));

        let difference = Rational::new(3i8, 100).unwrap() - hundredth;
        assert_eq!((difference.numerator(), difference.denominator()), (1, 50));
    }

    #[test]
    fn rational_mul_cancels_crosswise() {
        assert_eq!(q(2, 3) * q(9, 4), q(3, 2));
        assert_eq!(q(-2, 3) * q(3, 2), q(-1, 1));

        let a = Rational::new(100i8, 3).unwrap();
        let b = Rational::new(3i8, 100).unwrap();
        assert!((a * b).is_one());
    }

    #[test]
    fn rational_div() {
        assert_eq!(q(1, 2) / q(1, 4), q(2, 1));
        assert_eq!(q(1, 2) / q(-1, 3), q(-3, 2));
        assert_eq!(q(-1, 2).checked_div(&q(-1, 2)), Ok(q(1, 1)));
        assert_eq!(
            q(1, 2).checked_div(&Rational::zero()),
            Err(RationalError::DivideByZeroOperand)
        );
    }

    #[test]
    fn rational_div_assign_sign() {
        let mut r = q(3, 4);
        r.checked_div_assign(&q(-3, 8)).unwrap();
        assert_eq!((r.numerator(), r.denominator()), (-2, 1));

        r /= -2;
        assert_eq!(r, q(1, 1));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn rational_div_by_zero_panics() {
        let _ = q(1, 2) / q(0, 5);
    }

    #[test]
    fn rational_recip() {
        assert_eq!(q(-2, 7).checked_recip(), Ok(q(-7, 2)));
        assert_eq!(
            Rational::<i64>::zero().checked_recip(),
            Err(RationalError::DivideByZeroOperand)
        );
    }

    #[test]
    fn rational_scalar_operands() {
        assert_eq!(q(1, 3) + 1, q(4, 3));
        assert_eq!(q(1, 3) - 1, q(-2, 3));
        assert_eq!(q(1, 3) * 6, q(2, 1));
        assert_eq!(q(1, 3) / 2, q(1, 6));

        assert_eq!(1 + q(1, 3), q(4, 3));
        assert_eq!(1 - q(1, 3), q(2, 3));
        assert_eq!(2 * q(3, 4), q(3, 2));
        assert_eq!(1 / q(1, 3), q(3, 1));

        let mut r = q(1, 2);
        r += 2;
        r *= 2;
        r -= 1;
        assert_eq!(r, q(4, 1));
    }

    #[test]
    fn rational_by_reference() {
        let a = q(1, 2);
        let b = q(1, 3);
        assert_eq!(&a + &b, q(5, 6));
        assert_eq!(&a - &b, q(1, 6));
        assert_eq!(&a * &b, q(1, 6));
        assert_eq!(&a / &b, q(3, 2));
        assert_eq!(-&a, q(-1, 2));

        let mut c = a;
        c += &b;
        assert_eq!(c, q(5, 6));
    }

    #[test]
    fn rational_unary() {
        let r = q(-3, 5);
        assert_eq!(r.pos(), r);
        assert_eq!(-r, q(3, 5));
        assert_eq!(r.abs(), q(3, 5));
        assert!(r.is_negative());
        assert!((-r).is_positive());
        assert!(!Rational::<i64>::zero().is_positive());
    }

    #[test]
    fn rational_increment_decrement() {
        let mut r = q(1, 2);
        assert_eq!(*r.pre_increment(), q(3, 2));
        assert_eq!(r.post_decrement(), q(3, 2));
        assert_eq!(r, q(1, 2));
        assert_eq!(*r.pre_decrement(), q(-1, 2));
    }

    #[test]
    fn rational_conversions() {
        assert_eq!(q(1, 4).to_f64(), 0.25);
        assert_eq!(q(-3, 8).to_f32(), -0.375);
        assert_eq!(f64::from(q(5, 2)), 2.5);
        assert_eq!(f32::from(Rational::new(1u8, 2).unwrap()), 0.5);
        assert_eq!(q(9, 4).to_integer(), 2);
        assert_eq!(q(-9, 4).to_integer(), -2);
    }

    #[test]
    fn rational_ordering() {
        let mut values = vec![q(2, 3), q(-1, 2), q(1, 3), q(0, 1)];
        values.sort();
        assert_eq!(values, vec![q(-1, 2), q(0, 1), q(1, 3), q(2, 3)]);
        assert_eq!(q(2, 4).cmp(&q(1, 2)), std::cmp::Ordering::Equal);
        assert_eq!(q(1, 3).max(q(1, 2)), q(1, 2));
    }

    #[test]
    fn rational_hash_follows_value() {
        let set: HashSet<Rational<i64>> = [q(1, 2), q(2, 4), q(-3, -6), q(1, 3)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn rational_display() {
        assert_eq!(q(4, 2).to_string(), "2/1");
        assert_eq!(q(3, -9).to_string(), "-1/3");
        assert_eq!(Rational::<u16>::default().to_string(), "0/1");
    }

    #[test]
    fn rational_sum_product() {
        let values = vec![q(1, 2), q(1, 3), q(1, 6)];
        assert!(values.iter().sum::<Rational<i64>>().is_one());
        assert_eq!(values.into_iter().product::<Rational<i64>>(), q(1, 36));
        assert_eq!(vec![q(2, 3), q(3, 4)].iter().product::<Rational<i64>>(), q(1, 2));
        assert!(Vec::<Rational<i64>>::new().into_iter().sum::<Rational<i64>>().is_zero());
    }

    #[test]
    fn rational_unsigned() {
        let a = Rational::new(6u32, 8).unwrap();
        assert_eq!((a.numerator(), a.denominator()), (3, 4));
        let b = Rational::new(1u32, 4).unwrap();
        assert_eq!(a - b, Rational::new(1, 2).unwrap());
        assert_eq!(a / b, Rational::from(3));
        assert_eq!(a.abs(), a);
        assert!(!a.is_negative());
        assert!(b < a);
    }

    #[test]
    fn rational_wide_types() {
        let a = Rational::new(i128::MAX, 2).unwrap();
        assert_eq!(a.denominator(), 2);
        let b = Rational::new(u128::MAX, 5).unwrap();
        assert_eq!(b.numerator(), u128::MAX / 5);
        assert_eq!(b.denominator(), 1);
        let c = Rational::new(-4isize, 6).unwrap();
        assert_eq!(c.to_string(), "-2/3");
    }
}
