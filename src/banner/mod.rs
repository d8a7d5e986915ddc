//! Savings Banner
//!
//! Copy for the checkout banner that tells a VIP how much the discount saved them.
//! Only the text is produced here; rendering belongs to the checkout surface.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    discounts::{DISCOUNT_PERCENTAGE, discount_rate},
    locale::{DEFAULT_DESCRIPTION, DEFAULT_HEADING, LocaleError, LocaleTable},
};

/// Separator merchants use to break the description into paragraphs.
const LINE_BREAK: &str = "<br />";

/// Errors raised while building banner copy.
#[derive(Debug, Error)]
pub enum BannerError {
    /// A default string is missing from the locale table.
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// The discounted total is below zero.
    #[error("order total cannot be negative: {0}")]
    NegativeTotal(Decimal),

    /// The saving could not be represented (for example a 100% rate).
    #[error("savings calculation overflowed or divided by zero")]
    SavingsOverflow,
}

/// Visual tone of the banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerTone {
    /// Let the checkout decide.
    Auto,

    /// Informational.
    Info,

    /// Positive outcome.
    #[default]
    Success,

    /// Needs attention.
    Warning,

    /// Something went wrong.
    Critical,
}

/// Merchant overrides for the banner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerSettings {
    /// Heading to show instead of the locale default.
    #[serde(default)]
    pub heading: Option<String>,

    /// Description to show instead of the interpolated locale default.
    #[serde(default)]
    pub description: Option<String>,

    /// Tone override.
    #[serde(default)]
    pub tone: Option<BannerTone>,

    /// Whether the banner can be collapsed.
    #[serde(default)]
    pub collapsible: Option<bool>,
}

/// Text content of the savings banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsBanner {
    /// Banner heading.
    pub heading: String,

    /// Description paragraphs, trimmed.
    pub lines: SmallVec<[String; 3]>,

    /// Visual tone.
    pub tone: BannerTone,

    /// Whether the banner can be collapsed.
    pub collapsible: bool,

    /// The saving, formatted to the currency's minor units.
    pub saving_amount: String,
}

impl SavingsBanner {
    /// Build banner copy for an order whose discounted total is `total`.
    ///
    /// With no total the saving reads as zero.
    ///
    /// # Errors
    ///
    /// Returns a [`BannerError`] if a default string is missing or the saving overflows.
    pub fn build(
        locale: &LocaleTable,
        total: Option<Decimal>,
        currency: &'static Currency,
        settings: &BannerSettings,
    ) -> Result<Self, BannerError> {
        let saving = match total {
            Some(total) => savings_amount(&Money::from_decimal(total, currency), discount_rate())?,
            None => Money::from_decimal(Decimal::ZERO, currency),
        };
        let saving_amount = format_amount(&saving);

        let heading = match &settings.heading {
            Some(heading) => heading.clone(),
            None => locale.get(DEFAULT_HEADING)?.to_string(),
        };

        let percentage = DISCOUNT_PERCENTAGE.to_string();
        let description = match &settings.description {
            Some(description) => description.clone(),
            None => locale.translate(
                DEFAULT_DESCRIPTION,
                &[
                    ("savingAmount", saving_amount.as_str()),
                    ("percentageAmount", percentage.as_str()),
                ],
            )?,
        };

        Ok(Self {
            heading,
            lines: description
                .split(LINE_BREAK)
                .map(|line| line.trim().to_string())
                .collect(),
            tone: settings.tone.unwrap_or_default(),
            collapsible: settings.collapsible.unwrap_or(false),
            saving_amount,
        })
    }
}

/// Works back from a discounted total to the amount the discount removed.
///
/// If `total` is what remains after taking `rate` off, the saving is `total * rate / (1 - rate)`,
/// rounded half away from zero to the currency's minor units.
///
/// # Errors
///
/// Returns [`BannerError::NegativeTotal`] for a total below zero, and
/// [`BannerError::SavingsOverflow`] if the rate is 100% or the arithmetic overflows.
pub fn savings_amount<'a>(
    total: &Money<'a, Currency>,
    rate: Percentage,
) -> Result<Money<'a, Currency>, BannerError> {
    if *total.amount() < Decimal::ZERO {
        return Err(BannerError::NegativeTotal(*total.amount()));
    }

    let rate = rate * Decimal::ONE;
    let remaining = Decimal::ONE - rate;

    let saving = total
        .amount()
        .checked_mul(rate)
        .and_then(|discounted| discounted.checked_div(remaining))
        .ok_or(BannerError::SavingsOverflow)?;

    let rounded = saving.round_dp_with_strategy(
        total.currency().exponent,
        RoundingStrategy::MidpointAwayFromZero,
    );

    Ok(Money::from_decimal(rounded, total.currency()))
}

/// Formats an amount with exactly as many decimals as the currency has minor units.
fn format_amount(money: &Money<'_, Currency>) -> String {
    let mut amount = money.amount().round_dp_with_strategy(
        money.currency().exponent,
        RoundingStrategy::MidpointAwayFromZero,
    );
    amount.rescale(money.currency().exponent);

    amount.to_string()
}
