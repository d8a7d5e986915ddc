//! Discounts
//!
//! Discount classes the host may request, and the fixed VIP rate.

use std::{fmt, str::FromStr};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

/// Percent points taken off the order subtotal for qualifying customers.
///
/// Shared by the discount rule and the savings banner copy.
pub const DISCOUNT_PERCENTAGE: u32 = 15;

/// The VIP discount as percent points (e.g. `15`).
pub fn discount_percent_points() -> Decimal {
    Decimal::from(DISCOUNT_PERCENTAGE)
}

/// The VIP discount as a fractional percentage (e.g. `0.15`).
pub fn discount_rate() -> Percentage {
    Percentage::from(Decimal::new(i64::from(DISCOUNT_PERCENTAGE), 2))
}

/// Error returned when a discount class name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown discount class: {0}")]
pub struct UnknownDiscountClass(pub String);

/// Category of discount computation the host is currently running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountClass {
    /// Discounts applied to the order subtotal.
    Order,

    /// Discounts applied to individual cart lines.
    Product,

    /// Discounts applied to delivery.
    Shipping,
}

impl DiscountClass {
    /// Host name of the class.
    pub fn as_str(self) -> &'static str {
        match self {
            DiscountClass::Order => "ORDER",
            DiscountClass::Product => "PRODUCT",
            DiscountClass::Shipping => "SHIPPING",
        }
    }
}

impl fmt::Display for DiscountClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountClass {
    type Err = UnknownDiscountClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORDER" => Ok(DiscountClass::Order),
            "PRODUCT" => Ok(DiscountClass::Product),
            "SHIPPING" => Ok(DiscountClass::Shipping),
            other => Err(UnknownDiscountClass(other.to_string())),
        }
    }
}

/// The discount classes active for the current evaluation pass.
///
/// Only membership is ever queried, so ordering and duplicates are irrelevant. Class names the
/// crate does not know are dropped while parsing, so new host classes never fail a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountContext {
    /// Active discount classes. Absent on the wire means none.
    #[serde(default, deserialize_with = "deserialize_known_classes")]
    discount_classes: FxHashSet<DiscountClass>,
}

impl DiscountContext {
    /// Create a context from the given classes.
    pub fn new(classes: impl IntoIterator<Item = DiscountClass>) -> Self {
        Self {
            discount_classes: classes.into_iter().collect(),
        }
    }

    /// Check whether the given class is active.
    pub fn contains(&self, class: DiscountClass) -> bool {
        self.discount_classes.contains(&class)
    }

    /// Check if no discount class is active.
    pub fn is_empty(&self) -> bool {
        self.discount_classes.is_empty()
    }

    /// Iterate over the active classes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = DiscountClass> + '_ {
        self.discount_classes.iter().copied()
    }
}

impl FromIterator<DiscountClass> for DiscountContext {
    fn from_iter<I: IntoIterator<Item = DiscountClass>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Reads the host's class names, keeping the ones this crate can act on.
fn deserialize_known_classes<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<FxHashSet<DiscountClass>, D::Error> {
    let names = Vec::<String>::deserialize(deserializer)?;

    Ok(names
        .iter()
        .filter_map(|name| {
            name.parse::<DiscountClass>()
                .inspect_err(|error| debug!(%error, "ignoring discount class"))
                .ok()
        })
        .collect())
}
