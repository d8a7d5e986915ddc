//! VIP Discount
//!
//! An order discount function: customers carrying the qualifying tag get a fixed percentage off
//! the order subtotal whenever the host is evaluating order-level discounts.
//!
//! The decision itself is a pure function of the cart snapshot and the active discount classes,
//! see [`rules::vip::VipDiscountRule`].

pub mod banner;
pub mod cart;
pub mod discounts;
pub mod locale;
pub mod operations;
pub mod prelude;
pub mod rules;
pub mod schema;
pub mod tags;
