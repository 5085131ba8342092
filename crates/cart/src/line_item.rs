use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storecart_core::{DomainError, DomainResult};
use storecart_products::Product;

/// A product together with the unit price and quantity a customer selected.
///
/// Equality and hashing cover the whole triple (product, unit price,
/// quantity). Carts never rely on that equality for uniqueness; they key
/// their items by product code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct LineItem {
    product: Product,
    unit_price: Decimal,
    quantity: i64,
}

#[derive(Deserialize)]
struct RawLineItem {
    product: Product,
    unit_price: Decimal,
    quantity: i64,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = DomainError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        Self::new(raw.product, raw.unit_price, raw.quantity)
    }
}

/// Rejects negative prices and quantities.
pub(crate) fn ensure_non_negative(unit_price: Decimal, quantity: i64) -> DomainResult<()> {
    ensure_price(unit_price)?;
    ensure_quantity(quantity)
}

/// `unit_price * quantity`, or `InvalidArgument` when it does not fit a `Decimal`.
pub(crate) fn checked_line_total(unit_price: Decimal, quantity: i64) -> DomainResult<Decimal> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| DomainError::invalid_argument("total overflow"))
}

fn ensure_price(unit_price: Decimal) -> DomainResult<()> {
    if unit_price < Decimal::ZERO {
        return Err(DomainError::invalid_argument("unit price is below zero"));
    }
    Ok(())
}

fn ensure_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::invalid_argument("quantity is below zero"));
    }
    Ok(())
}

impl LineItem {
    /// Build a line item. Construction goes through the same checks as the
    /// setters, so a negative price or quantity is rejected here too, as is
    /// a pair whose extended total would overflow.
    pub fn new(product: Product, unit_price: Decimal, quantity: i64) -> DomainResult<Self> {
        let mut item = Self {
            product,
            unit_price: Decimal::ZERO,
            quantity: 0,
        };
        item.replace(unit_price, quantity)?;
        Ok(item)
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn set_unit_price(&mut self, unit_price: Decimal) -> DomainResult<()> {
        self.replace(unit_price, self.quantity)
    }

    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        self.replace(self.unit_price, quantity)
    }

    /// Set price and quantity together; nothing changes if the pair is rejected.
    pub(crate) fn replace(&mut self, unit_price: Decimal, quantity: i64) -> DomainResult<()> {
        ensure_non_negative(unit_price, quantity)?;
        checked_line_total(unit_price, quantity)?;
        self.unit_price = unit_price;
        self.quantity = quantity;
        Ok(())
    }

    /// `unit_price * quantity`, exact. Every item's total fits a `Decimal`.
    pub fn extended_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl core::fmt::Display for LineItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} x{} @ {}",
            self.product, self.quantity, self.unit_price
        )
    }
}
