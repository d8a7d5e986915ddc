//! Rules
//!
//! Discount rules turn a cart snapshot and the active discount classes into operations.

use thiserror::Error;

use crate::{cart::CartSnapshot, discounts::DiscountContext, operations::FunctionResult};

pub mod vip;

/// Errors raised while evaluating a rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The cart has no lines, so no decision can be made.
    #[error("{0}")]
    InvalidCart(String),
}

/// A discount rule the host can run.
///
/// Implementations must be pure: the same inputs always yield the same result.
pub trait DiscountRule {
    /// Evaluate the rule against a cart.
    ///
    /// An empty operation list means the rule has nothing to propose.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the input cannot be evaluated.
    fn evaluate(
        &self,
        cart: &CartSnapshot,
        context: &DiscountContext,
    ) -> Result<FunctionResult, EvaluationError>;
}
