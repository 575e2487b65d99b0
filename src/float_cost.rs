use std::fmt::Debug;
use std::str::FromStr;

use derive_more::Display;
use num_traits::One;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;
use ordered_float::FloatCore;
use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::cost::Cost;

/// A fractional cost.
///
/// Needed by domains whose step costs are not integral, like mazes that
/// discount moves towards one side. NaN sorts above everything, so it never
/// looks cheap.
#[derive(Copy, Clone, Default, Debug, Display)]
#[repr(transparent)]
#[display("{_0}")]
pub struct FloatCost<F: FloatCore>(pub OrderedFloat<F>);

impl<F> Cost for FloatCost<F> where F: FloatCore + Debug + std::fmt::Display {}

impl<F> FloatCost<F>
where
    F: FloatCore,
{
    pub fn new(f: F) -> Self {
        Self(OrderedFloat(f))
    }
    pub fn get(&self) -> F {
        self.0.0
    }
}

impl<F> From<F> for FloatCost<F>
where
    F: FloatCore,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FloatCostParseError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite cost")]
    NotFinite(String),
    #[error("'{0}' is negative")]
    Negative(String),
}

/// Reads costs a search can use, finite and not negative.
impl<F> FromStr for FloatCost<F>
where
    F: FloatCore + FromStr,
{
    type Err = FloatCostParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let f: F = s
            .parse()
            .map_err(|_| FloatCostParseError::NotANumber(s.to_string()))?;
        if !f.is_finite() {
            return Err(FloatCostParseError::NotFinite(s.to_string()));
        }
        if f < F::zero() {
            return Err(FloatCostParseError::Negative(s.to_string()));
        }
        Ok(Self::new(f))
    }
}

macro_rules! forward_binop {
    ($op:ident, $f:ident) => {
        impl<F: FloatCore> std::ops::$op for FloatCost<F> {
            type Output = Self;
            #[inline(always)]
            fn $f(self, rhs: Self) -> Self {
                Self(std::ops::$op::$f(self.0, rhs.0))
            }
        }
    };
}
forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl<F: FloatCore> std::ops::AddAssign for FloatCost<F> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Floats already saturate at infinity.
impl<F: FloatCore> SaturatingAdd for FloatCost<F> {
    #[inline(always)]
    fn saturating_add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }
}

impl<F: FloatCore> std::iter::Sum for FloatCost<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, c| acc + c)
    }
}

impl<F: FloatCore> Zero for FloatCost<F> {
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
    #[inline(always)]
    fn zero() -> Self {
        Self(OrderedFloat::zero())
    }
}
impl<F: FloatCore> One for FloatCost<F> {
    #[inline(always)]
    fn one() -> Self {
        Self(OrderedFloat::one())
    }
}
impl<F: FloatCore> UpperBounded for FloatCost<F> {
    fn max_value() -> Self {
        Self(OrderedFloat(F::infinity()))
    }
}

// Ordering and equality go through `OrderedFloat`.
impl<F: FloatCore> PartialEq for FloatCost<F> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<F: FloatCore> Eq for FloatCost<F> {}
impl<F: FloatCore> PartialOrd for FloatCost<F> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<F: FloatCore> Ord for FloatCost<F> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert!(FloatCost::new(0.0f32).is_zero());
        assert!(FloatCost::<f64>::zero().is_zero());
        assert!(!FloatCost::<f64>::one().is_zero());
    }

    #[test]
    fn float_costs_are_costs() {
        fn step<C: Cost>(a: C, b: C) -> C {
            a.saturating_add(&b) - C::one()
        }
        assert_eq!(step(FloatCost::new(1.5f64), FloatCost::new(2.0)), FloatCost::new(2.5));
        assert_eq!(
            FloatCost::new(0.5f64) * FloatCost::new(4.0),
            FloatCost::new(2.0)
        );
        assert_eq!(FloatCost::new(3.0f32) * FloatCost::one(), FloatCost::new(3.0));
    }

    #[test]
    fn order() {
        assert!(FloatCost::new(0.0f32) <= FloatCost::new(0.0f32));
        assert!(FloatCost::new(0.0f32) == FloatCost::new(0.0f32));
        assert!(FloatCost::new(0.5f64) < FloatCost::new(1.0f64));
        assert!(FloatCost::new(f64::NAN) > FloatCost::max_value());
    }

    #[test]
    fn sum() {
        let mut f = FloatCost::new(0.0f32);
        f += FloatCost::new(1.0f32);
        f += FloatCost::new(1.0f32);
        assert_eq!(f, FloatCost::new(2.0f32));
        assert_eq!(f.get(), 2.0);

        let total: FloatCost<f64> = [0.5, 0.25, 0.25].into_iter().map(FloatCost::from).sum();
        assert_eq!(total, FloatCost::one());

        f += FloatCost::max_value();
        assert_eq!(f, FloatCost::max_value());
        assert!(!f.valid());
    }

    #[test]
    fn negative() {
        assert!(FloatCost::new(-1.0f64).non_negative("step cost").is_err());
        assert!(FloatCost::new(0.0f64).non_negative("step cost").is_ok());
    }

    #[test]
    fn parse() {
        assert_eq!("2.5".parse::<FloatCost<f64>>(), Ok(FloatCost::new(2.5)));
        assert_eq!("3".parse::<FloatCost<f64>>(), Ok(FloatCost::new(3.0)));
        assert_eq!(
            "-1".parse::<FloatCost<f64>>(),
            Err(FloatCostParseError::Negative("-1".to_string()))
        );
        assert_eq!(
            "inf".parse::<FloatCost<f64>>(),
            Err(FloatCostParseError::NotFinite("inf".to_string()))
        );
        assert_eq!(
            "NaN".parse::<FloatCost<f64>>(),
            Err(FloatCostParseError::NotFinite("NaN".to_string()))
        );
        assert_eq!(
            "one".parse::<FloatCost<f64>>(),
            Err(FloatCostParseError::NotANumber("one".to_string()))
        );

        // Printed costs read back.
        let c = FloatCost::new(0.125f64);
        assert_eq!(c.to_string().parse::<FloatCost<f64>>(), Ok(c));
    }
}
