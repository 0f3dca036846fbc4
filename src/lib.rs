pub mod math {
    pub mod literals;
    pub mod rational;
    pub mod rational_error;
    pub mod traits;
}

pub use math::{
    literals::r,
    rational::Rational,
    rational_error::{RationalError, Result},
    traits::{Integral, One, Signed, Zero},
};
