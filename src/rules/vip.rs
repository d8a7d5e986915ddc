//! VIP Order Discount
//!
//! Tagged customers get a fixed percentage off the whole order subtotal.

use tracing::{debug, warn};

use crate::{
    cart::CartSnapshot,
    discounts::{DISCOUNT_PERCENTAGE, DiscountClass, DiscountContext, discount_percent_points},
    locale::{DISCOUNT_MESSAGE, ERROR_NO_CART_LINES, LocaleError, LocaleTable},
    operations::{
        DiscountOperation, FunctionResult, OrderDiscountCandidate, OrderDiscountSelectionStrategy,
        OrderDiscountTarget, OrderDiscountValue, OrderDiscountsAddOperation, PercentageValue,
    },
    rules::{DiscountRule, EvaluationError},
};

/// Grants [`DISCOUNT_PERCENTAGE`] off the order subtotal to customers carrying the qualifying tag.
///
/// Locale strings are resolved once at construction, so evaluation never fails on configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VipDiscountRule {
    message: String,
    no_cart_lines: String,
}

impl VipDiscountRule {
    /// Build the rule from a locale table.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError::MissingKey`] if the table lacks the discount message or the
    /// empty-cart error.
    pub fn new(locale: &LocaleTable) -> Result<Self, LocaleError> {
        let phrase = locale.get(DISCOUNT_MESSAGE)?;
        let no_cart_lines = locale.get(ERROR_NO_CART_LINES)?;

        Ok(Self {
            message: format!("{DISCOUNT_PERCENTAGE}% {phrase}"),
            no_cart_lines: no_cart_lines.to_string(),
        })
    }

    /// Buyer-facing label of the discount.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn operation(&self) -> DiscountOperation {
        DiscountOperation::OrderDiscountsAdd(OrderDiscountsAddOperation {
            candidates: vec![OrderDiscountCandidate {
                message: self.message.clone(),
                targets: vec![OrderDiscountTarget::whole_order()],
                value: OrderDiscountValue::Percentage(PercentageValue {
                    value: discount_percent_points(),
                }),
            }],
            selection_strategy: OrderDiscountSelectionStrategy::First,
        })
    }
}

impl DiscountRule for VipDiscountRule {
    fn evaluate(
        &self,
        cart: &CartSnapshot,
        context: &DiscountContext,
    ) -> Result<FunctionResult, EvaluationError> {
        if cart.is_empty() {
            warn!("rejecting cart without lines");

            return Err(EvaluationError::InvalidCart(self.no_cart_lines.clone()));
        }

        let is_vip = cart.has_qualifying_tag();
        let order_class_active = context.contains(DiscountClass::Order);

        debug!(
            lines = cart.len(),
            is_vip, order_class_active, "evaluated VIP discount eligibility"
        );

        if !is_vip || !order_class_active {
            return Ok(FunctionResult::empty());
        }

        Ok(FunctionResult::single(self.operation()))
    }
}
