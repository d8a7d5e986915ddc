//! Schema
//!
//! The host-facing boundary: the function input document, its validation, and
//! serialisation of the result.

use std::io::{Read, Write};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::CartSnapshot,
    discounts::DiscountContext,
    operations::FunctionResult,
    rules::{DiscountRule, EvaluationError},
};

/// Errors raised at the host boundary.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document is not valid JSON or does not match the input schema.
    #[error("Invalid function input: {0}")]
    Json(#[from] serde_json::Error),

    /// A cart line has an empty identifier (line index).
    #[error("Cart line {index} has an empty id")]
    EmptyLineId {
        /// Position of the offending line.
        index: usize,
    },

    /// A cart line has a negative subtotal (line id).
    #[error("Cart line {id} has a negative subtotal")]
    NegativeAmount {
        /// Identifier of the offending line.
        id: String,
    },
}

/// Errors raised while running a rule over a raw input document.
#[derive(Debug, Error)]
pub enum RunError {
    /// The input failed to parse or validate.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The rule rejected the input.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Input document for a discount function run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInput {
    /// The cart being evaluated.
    pub cart: CartSnapshot,

    /// Active discount classes. Absent means none.
    #[serde(default)]
    pub discount: DiscountContext,
}

impl FunctionInput {
    /// Parse and validate an input document.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if the document fails to parse or validate.
    pub fn from_json(contents: &str) -> Result<Self, SchemaError> {
        let input: Self = serde_json::from_str(contents)?;
        input.validate()?;

        Ok(input)
    }

    /// Parse and validate an input document from a reader.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if the document fails to parse or validate.
    pub fn from_reader(reader: impl Read) -> Result<Self, SchemaError> {
        let input: Self = serde_json::from_reader(reader)?;
        input.validate()?;

        Ok(input)
    }

    /// Check the constraints serde cannot express.
    ///
    /// An empty cart is left for the rule to reject.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] for the first offending cart line.
    pub fn validate(&self) -> Result<(), SchemaError> {
        self.cart
            .lines
            .iter()
            .enumerate()
            .try_for_each(|(index, line)| {
                if line.id.is_empty() {
                    Err(SchemaError::EmptyLineId { index })
                } else if line.subtotal() < Decimal::ZERO {
                    Err(SchemaError::NegativeAmount {
                        id: line.id.clone(),
                    })
                } else {
                    Ok(())
                }
            })
    }
}

impl FunctionResult {
    /// Serialise the result as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialise the result as a JSON document into a writer.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialisation or writing fails.
    pub fn to_writer(&self, writer: impl Write) -> Result<(), serde_json::Error> {
        serde_json::to_writer(writer, self)
    }
}

/// Evaluate a validated input with the given rule.
///
/// # Errors
///
/// Returns an [`EvaluationError`] if the rule rejects the input.
pub fn run<R: DiscountRule + ?Sized>(
    rule: &R,
    input: &FunctionInput,
) -> Result<FunctionResult, EvaluationError> {
    rule.evaluate(&input.cart, &input.discount)
}

/// Parse, validate and evaluate a raw input document.
///
/// # Errors
///
/// Returns a [`RunError`] if the document is invalid or the rule rejects it.
pub fn run_json<R: DiscountRule + ?Sized>(
    rule: &R,
    contents: &str,
) -> Result<FunctionResult, RunError> {
    let input = FunctionInput::from_json(contents)?;
    let result = run(rule, &input)?;

    debug!(operations = result.operations.len(), "discount function run complete");

    Ok(result)
}
