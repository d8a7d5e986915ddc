//! Cart
//!
//! The cart snapshot handed to a discount function by the host.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A snapshot of the cart being evaluated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Cart lines, in host order.
    pub lines: Vec<CartLine>,

    /// Identity of the buyer, if the host could resolve one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_identity: Option<BuyerIdentity>,
}

impl CartSnapshot {
    /// Create a cart with the given lines and no buyer identity.
    #[must_use]
    pub fn new(lines: impl Into<Vec<CartLine>>) -> Self {
        Self {
            lines: lines.into(),
            buyer_identity: None,
        }
    }

    /// Attach a buyer identity whose customer carries (or lacks) the qualifying tag.
    #[must_use]
    pub fn with_customer_tag(mut self, has_any_tag: bool) -> Self {
        self.buyer_identity = Some(BuyerIdentity {
            customer: Some(Customer {
                has_any_tag: Some(has_any_tag),
            }),
        });

        self
    }

    /// Whether the buyer carries the qualifying tag.
    ///
    /// Every missing link (no buyer identity, no customer, no flag) reads as `false`.
    pub fn has_qualifying_tag(&self) -> bool {
        self.buyer_identity
            .as_ref()
            .and_then(|identity| identity.customer.as_ref())
            .and_then(|customer| customer.has_any_tag)
            .unwrap_or(false)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of every line's subtotal amount.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

/// A single line of the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Opaque host identifier of the line.
    pub id: String,

    /// Cost of the line.
    pub cost: CartLineCost,
}

impl CartLine {
    /// Create a cart line with the given identifier and subtotal.
    pub fn new(id: impl Into<String>, subtotal: Decimal) -> Self {
        Self {
            id: id.into(),
            cost: CartLineCost {
                subtotal_amount: MoneyAmount { amount: subtotal },
            },
        }
    }

    /// Returns the subtotal of the line
    pub fn subtotal(&self) -> Decimal {
        self.cost.subtotal_amount.amount
    }
}

/// Cost breakdown of a cart line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineCost {
    /// Line subtotal before order-level discounts.
    pub subtotal_amount: MoneyAmount,
}

/// A bare monetary amount in the cart's presentment currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// The decimal amount.
    pub amount: Decimal,
}

/// The shopper tied to the cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerIdentity {
    /// Customer record, present only for identified shoppers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

/// Customer facts the discount function asked the host for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Whether the customer carries any of the queried tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_any_tag: Option<bool>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_lines() -> [CartLine; 2] {
        [
            CartLine::new("gid://shopify/CartLine/0", Decimal::new(100_00, 2)),
            CartLine::new("gid://shopify/CartLine/1", Decimal::new(25_50, 2)),
        ]
    }

    #[test]
    fn qualifying_tag_defaults_to_false_without_buyer_identity() {
        let cart = CartSnapshot::new(test_lines());

        assert!(!cart.has_qualifying_tag());
    }

    #[test]
    fn qualifying_tag_defaults_to_false_without_customer() {
        let mut cart = CartSnapshot::new(test_lines());
        cart.buyer_identity = Some(BuyerIdentity { customer: None });

        assert!(!cart.has_qualifying_tag());
    }

    #[test]
    fn qualifying_tag_defaults_to_false_without_flag() {
        let mut cart = CartSnapshot::new(test_lines());
        cart.buyer_identity = Some(BuyerIdentity {
            customer: Some(Customer { has_any_tag: None }),
        });

        assert!(!cart.has_qualifying_tag());
    }

    #[test]
    fn qualifying_tag_reads_customer_flag() {
        let tagged = CartSnapshot::new(test_lines()).with_customer_tag(true);
        let untagged = CartSnapshot::new(test_lines()).with_customer_tag(false);

        assert!(tagged.has_qualifying_tag());
        assert!(!untagged.has_qualifying_tag());
    }

    #[test]
    fn subtotal_sums_line_amounts() {
        let cart = CartSnapshot::new(test_lines());

        assert_eq!(cart.subtotal(), Decimal::new(125_50, 2));
        assert_eq!(cart.len(), 2);
        assert!(!cart.is_empty());
    }

    #[test]
    fn deserializes_host_shape_with_missing_identity_levels() -> TestResult {
        let cart: CartSnapshot = serde_json::from_str(
            r#"{
                "lines": [
                    { "id": "L1", "cost": { "subtotalAmount": { "amount": 100 } } },
                    { "id": "L1", "cost": { "subtotalAmount": { "amount": "2.50" } } }
                ],
                "buyerIdentity": {}
            }"#,
        )?;

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal(), Decimal::new(102_50, 2));
        assert!(!cart.has_qualifying_tag());

        Ok(())
    }
}
