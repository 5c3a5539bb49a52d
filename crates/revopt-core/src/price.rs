//! Typed money amounts.
//!
//! Prices and revenues are both THB amounts but mean different things in
//! the tables: a room price per booking versus a sum over many bookings.
//! Keeping them as separate newtypes stops a revenue total from being fed
//! back into the simulator as a price.
//!
//! ```
//! use revopt_core::price::{Price, Revenue};
//!
//! let price = Price(1200.0);
//! let revenue = price * 3.0;
//! assert_eq!(revenue, Revenue(3600.0));
//! assert_eq!(Price(2000.0) / Price(1000.0), 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

macro_rules! impl_money_ops {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Div<$type> for $type {
            type Output = f64;
            fn div(self, rhs: $type) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.2}", self.0)
            }
        }

        impl $type {
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self(self.0.clamp(min.0, max.0))
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }
    };
}

/// Room price for a single booking, in THB.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Price(pub f64);

impl_money_ops!(Price);

/// Revenue over one or more bookings, in THB.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Revenue(pub f64);

impl_money_ops!(Revenue);

/// Price times a (possibly fractional) booking count.
impl Mul<f64> for Price {
    type Output = Revenue;
    fn mul(self, bookings: f64) -> Revenue {
        Revenue(self.0 * bookings)
    }
}

impl From<Price> for Revenue {
    fn from(price: Price) -> Self {
        Revenue(price.0)
    }
}

/// Formats an amount as `THB 12,345.67`.
pub fn format_thb(amount: f64) -> String {
    format!("THB {}", group_thousands(amount))
}

/// Two-decimal rendering with `,` thousands separators.
pub fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
