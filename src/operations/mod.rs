//! Operations
//!
//! The structured instructions a discount function hands back to the host.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// Result of a single discount function run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    /// Operations to apply, in the order they were proposed.
    pub operations: Vec<DiscountOperation>,
}

impl FunctionResult {
    /// A result proposing nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A result proposing a single operation.
    pub fn single(operation: DiscountOperation) -> Self {
        Self {
            operations: vec![operation],
        }
    }

    /// Check if no operation was proposed.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A single discount instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountOperation {
    /// Add one of the candidates as an order-level discount.
    OrderDiscountsAdd(OrderDiscountsAddOperation),
}

/// Candidates for an order-level discount, and how the host should pick one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDiscountsAddOperation {
    /// Proposed discounts.
    pub candidates: Vec<OrderDiscountCandidate>,

    /// How the host chooses among candidates.
    pub selection_strategy: OrderDiscountSelectionStrategy,
}

/// One proposed order-level discount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDiscountCandidate {
    /// Buyer-facing label.
    pub message: String,

    /// What the discount applies to.
    pub targets: Vec<OrderDiscountTarget>,

    /// How much is taken off.
    pub value: OrderDiscountValue,
}

/// Target of an order-level discount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderDiscountTarget {
    /// The order subtotal, minus any excluded lines.
    OrderSubtotal(OrderSubtotalTarget),
}

impl OrderDiscountTarget {
    /// The whole order subtotal with no lines excluded.
    pub fn whole_order() -> Self {
        OrderDiscountTarget::OrderSubtotal(OrderSubtotalTarget {
            excluded_cart_line_ids: Vec::new(),
        })
    }
}

/// Order subtotal target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubtotalTarget {
    /// Cart lines left out of the discounted subtotal.
    pub excluded_cart_line_ids: Vec<String>,
}

/// Value of an order-level discount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderDiscountValue {
    /// Percentage off the target.
    Percentage(PercentageValue),
}

impl OrderDiscountValue {
    /// Percent points carried by the value.
    pub fn percent_points(&self) -> Decimal {
        match self {
            OrderDiscountValue::Percentage(percentage) => percentage.value,
        }
    }
}

/// Percentage discount value, in percent points (`15` means 15%).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentageValue {
    /// Percent points.
    #[serde(serialize_with = "serialize_percent_points")]
    pub value: Decimal,
}

/// Host policy for picking among candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderDiscountSelectionStrategy {
    /// Take the first candidate.
    First,

    /// Take the candidate with the largest saving.
    Maximum,
}

/// Writes whole percent points as JSON integers and anything else as a float.
fn serialize_percent_points<S: Serializer>(
    value: &Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let whole = if value.fract().is_zero() {
        value.to_i64()
    } else {
        None
    };

    if let Some(whole) = whole {
        return serializer.serialize_i64(whole);
    }

    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => serializer.collect_str(value),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn vip_operation(points: Decimal) -> DiscountOperation {
        DiscountOperation::OrderDiscountsAdd(OrderDiscountsAddOperation {
            candidates: vec![OrderDiscountCandidate {
                message: "15% VIP Discount".to_string(),
                targets: vec![OrderDiscountTarget::whole_order()],
                value: OrderDiscountValue::Percentage(PercentageValue { value: points }),
            }],
            selection_strategy: OrderDiscountSelectionStrategy::First,
        })
    }

    #[test]
    fn serializes_host_operation_shape() -> TestResult {
        let result = FunctionResult::single(vip_operation(Decimal::new(15, 0)));

        assert_eq!(
            serde_json::to_value(&result)?,
            json!({
                "operations": [{
                    "orderDiscountsAdd": {
                        "candidates": [{
                            "message": "15% VIP Discount",
                            "targets": [{ "orderSubtotal": { "excludedCartLineIds": [] } }],
                            "value": { "percentage": { "value": 15 } }
                        }],
                        "selectionStrategy": "FIRST"
                    }
                }]
            })
        );

        Ok(())
    }

    #[test]
    fn whole_points_with_scale_serialize_as_integers() -> TestResult {
        let value = PercentageValue {
            value: Decimal::new(1500, 2),
        };

        assert_eq!(serde_json::to_value(value)?, json!({ "value": 15 }));

        Ok(())
    }

    #[test]
    fn fractional_points_serialize_as_floats() -> TestResult {
        let value = PercentageValue {
            value: Decimal::new(125, 1),
        };

        assert_eq!(serde_json::to_value(value)?, json!({ "value": 12.5 }));

        Ok(())
    }

    #[test]
    fn empty_result_serializes_as_empty_list() -> TestResult {
        assert_eq!(
            serde_json::to_value(FunctionResult::empty())?,
            json!({ "operations": [] })
        );

        Ok(())
    }

    #[test]
    fn deserializes_host_output() -> TestResult {
        let result: FunctionResult = serde_json::from_value(json!({
            "operations": [{
                "orderDiscountsAdd": {
                    "candidates": [{
                        "message": "15% VIP Discount",
                        "targets": [{ "orderSubtotal": { "excludedCartLineIds": ["L2"] } }],
                        "value": { "percentage": { "value": 15 } }
                    }],
                    "selectionStrategy": "MAXIMUM"
                }
            }]
        }))?;

        let Some(DiscountOperation::OrderDiscountsAdd(operation)) = result.operations.first()
        else {
            return Err("expected an order discount operation".into());
        };

        assert_eq!(
            operation.selection_strategy,
            OrderDiscountSelectionStrategy::Maximum
        );
        assert_eq!(
            operation.candidates.first().map(|c| c.value.percent_points()),
            Some(Decimal::new(15, 0))
        );

        Ok(())
    }
}
