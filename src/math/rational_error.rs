use strum_macros::EnumIter;

/// An error encountered while constructing or dividing a rational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum RationalError {
    /// A rational was constructed with a denominator of zero.
    DivisionByZero,
    /// A rational was divided by a rational equal to zero.
    DivideByZeroOperand,
}

impl std::fmt::Display for RationalError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let msg = match self {
            RationalError::DivisionByZero => "denominator cannot be zero",
            RationalError::DivideByZeroOperand => "division by zero",
        };
        msg.fmt(f)
    }
}

impl std::error::Error for RationalError {}

pub type Result<T> = std::result::Result<T, RationalError>;
