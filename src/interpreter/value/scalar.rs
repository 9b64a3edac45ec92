use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::{MathError, MathResult};

/// An exact rational number.
///
/// The numerator and denominator are arbitrary-precision integers, always
/// reduced to lowest terms with a positive denominator. Sums, differences,
/// products and negations cannot fail; only division by zero does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar(BigRational);

impl Scalar {
    /// Creates the reduced rational `numer / denom`.
    ///
    /// # Errors
    /// `MathError::DivisionByZero` if `denom` is zero.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::scalar::Scalar;
    ///
    /// let half = Scalar::new(-3, -6).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    /// assert!(Scalar::new(1, 0).is_err());
    /// ```
    pub fn new(numer: i64, denom: i64) -> MathResult<Self> {
        Self::from_parts(BigInt::from(numer), BigInt::from(denom))
    }

    /// Creates the reduced rational `numer / denom` from big integers.
    ///
    /// # Errors
    /// `MathError::DivisionByZero` if `denom` is zero.
    pub fn from_parts(numer: BigInt, denom: BigInt) -> MathResult<Self> {
        if denom.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numer, denom)))
    }

    /// The additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Numerator in lowest terms; carries the sign.
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator in lowest terms; always positive.
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        Self(&self.0 + &rhs.0)
    }

    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(&self.0 - &rhs.0)
    }

    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(&self.0 * &rhs.0)
    }

    /// Exact quotient.
    ///
    /// # Errors
    /// `MathError::DivisionByZero` if `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use ratmat::{error::MathError, interpreter::value::scalar::Scalar};
    ///
    /// let third = Scalar::from(1).div(&Scalar::from(3)).unwrap();
    /// assert_eq!(third.mul(&Scalar::from(3)), Scalar::one());
    ///
    /// assert_eq!(Scalar::one().div(&Scalar::zero()), Err(MathError::DivisionByZero));
    /// ```
    pub fn div(&self, rhs: &Self) -> MathResult<Self> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        Self(-&self.0)
    }

    /// `1 / self`.
    ///
    /// # Errors
    /// `MathError::DivisionByZero` if `self` is zero.
    pub fn recip(&self) -> MathResult<Self> {
        Self::one().div(self)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl From<BigInt> for Scalar {
    fn from(value: BigInt) -> Self {
        Self(BigRational::from_integer(value))
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
