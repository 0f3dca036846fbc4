use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_integer::Integer;
use num_traits::AsPrimitive;

pub trait One: Sized {
    fn one() -> Self;

    fn set_one(&mut self) {
        *self = One::one();
    }

    fn is_one(&self) -> bool;
}

pub trait Zero: Sized {
    fn zero() -> Self;

    fn set_zero(&mut self) {
        *self = Zero::zero();
    }

    fn is_zero(&self) -> bool;
}

pub trait Signed: Sized {
    fn abs(&self) -> Self;

    /// Returns true if the number is positive and false if the number is zero or negative.
    fn is_positive(&self) -> bool;

    /// Returns true if the number is negative and false if the number is zero or positive.
    fn is_negative(&self) -> bool;
}

/**
 * A fixed-width primitive integer that can serve as the numerator and denominator of a rational.
 *
 * Only the primitive integer types implement this trait, so instantiating a rational over a float or
 * an arbitrary-precision integer is rejected by the compiler.
 */
pub trait Integral:
    Integer + Copy + Debug + Display + Hash + AsPrimitive<f64> + AsPrimitive<f32>
{
    /// Returns true if the value is below zero. Always false for unsigned types.
    fn is_negative(&self) -> bool;

    /// Additive inverse. Unsigned types wrap, but they never hold a negative value that would need flipping.
    fn negated(self) -> Self;
}

// ============ implementations ============

macro_rules! ttype_signed {
    ($t:ident) => {
        impl Integral for $t {
            fn is_negative(&self) -> bool {
                *self < 0
            }

            fn negated(self) -> Self {
                -self
            }
        }
    };
}

macro_rules! ttype {
    ($t:ident) => {
        impl Integral for $t {
            fn is_negative(&self) -> bool {
                false
            }

            fn negated(self) -> Self {
                self.wrapping_neg()
            }
        }
    };
}

ttype!(usize);
ttype!(u128);
ttype!(u16);
ttype!(u32);
ttype!(u64);
ttype!(u8);
ttype_signed!(isize);
ttype_signed!(i128);
ttype_signed!(i16);
ttype_signed!(i32);
ttype_signed!(i64);
ttype_signed!(i8);
