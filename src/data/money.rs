use std::{
    fmt,
    iter::Sum,
    ops::Add,
};

use serde::Deserialize;

/// Currency amount in euro cents.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub fn times(self, quantity: usize) -> Self {
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Self(self.0.saturating_mul(quantity))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}€", self.0 / 100, self.0 % 100)
    }
}
