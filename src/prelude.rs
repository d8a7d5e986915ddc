//! VIP Discount prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    banner::{BannerError, BannerSettings, BannerTone, SavingsBanner, savings_amount},
    cart::{BuyerIdentity, CartLine, CartLineCost, CartSnapshot, Customer, MoneyAmount},
    discounts::{
        DISCOUNT_PERCENTAGE, DiscountClass, DiscountContext, UnknownDiscountClass,
        discount_percent_points, discount_rate,
    },
    locale::{LocaleError, LocaleTable},
    operations::{
        DiscountOperation, FunctionResult, OrderDiscountCandidate, OrderDiscountSelectionStrategy,
        OrderDiscountTarget, OrderDiscountValue, OrderDiscountsAddOperation, OrderSubtotalTarget,
        PercentageValue,
    },
    rules::{DiscountRule, EvaluationError, vip::VipDiscountRule},
    schema::{FunctionInput, RunError, SchemaError, run, run_json},
    tags::{CustomerTags, QUALIFYING_TAG, VipStatus},
};
