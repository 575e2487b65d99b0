use crate::error::SearchError;

/// Numeric cost of actions, paths and estimates.
pub trait Cost:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
    + num_traits::One
    + std::ops::Add<Self, Output = Self>
    + std::ops::Sub<Self, Output = Self>
    + std::ops::AddAssign
{
    #[inline(always)]
    fn valid(&self) -> bool {
        *self != num_traits::bounds::UpperBounded::max_value()
    }

    /// Rejects costs below zero.
    ///
    /// `what` names the offending value in the error.
    #[inline(always)]
    fn non_negative(self, what: &'static str) -> Result<Self, SearchError> {
        if self < Self::zero() {
            return Err(SearchError::NegativeCost {
                what,
                value: self.to_string(),
            });
        }
        Ok(self)
    }
}

impl Cost for u8 {}
impl Cost for u16 {}
impl Cost for u32 {}
impl Cost for u64 {}
impl Cost for u128 {}
impl Cost for usize {}
