use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use storecart_core::{DomainError, DomainResult, ProductCode};
use storecart_products::Product;

use crate::line_item::{LineItem, checked_line_total, ensure_non_negative};

/// A customer's cart: line items in insertion order, at most one per product code.
///
/// Items are only ever inserted by [`Cart::add_item`], which merges into an
/// existing item when the product code is already present. That keeps the
/// one-item-per-product invariant structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartSnapshot", into = "CartSnapshot")]
pub struct Cart {
    items: Vec<LineItem>,
}

/// Wire form of a cart. Rebuilt through `add_item` on the way in, so duplicate
/// products merge and negative values are rejected.
#[derive(Serialize, Deserialize)]
struct CartSnapshot {
    items: Vec<LineItem>,
}

impl TryFrom<CartSnapshot> for Cart {
    type Error = DomainError;

    fn try_from(snapshot: CartSnapshot) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();
        cart.add_items(&snapshot.items)?;
        Ok(cart)
    }
}

impl From<Cart> for CartSnapshot {
    fn from(cart: Cart) -> Self {
        Self { items: cart.items }
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product` at `unit_price`.
    ///
    /// If the product is already in the cart, the quantities are summed and the
    /// unit price is replaced by `unit_price` (last write wins). Negative
    /// prices or quantities are rejected whether or not the product is present.
    /// Any failure is reported as a single `InvalidArgument` carrying the cause.
    pub fn add_item(
        &mut self,
        product: &Product,
        unit_price: Decimal,
        quantity: i64,
    ) -> DomainResult<()> {
        self.try_add_item(product, unit_price, quantity)
            .map_err(|e| DomainError::invalid_argument(format!("failed to add item: {}", e.detail())))
    }

    fn try_add_item(
        &mut self,
        product: &Product,
        unit_price: Decimal,
        quantity: i64,
    ) -> DomainResult<()> {
        ensure_non_negative(unit_price, quantity)?;

        if let Some(idx) = self.position_of(product.code()) {
            let merged = self.items[idx]
                .quantity()
                .checked_add(quantity)
                .ok_or_else(|| DomainError::invalid_argument("quantity overflow"))?;
            let line_total = checked_line_total(unit_price, merged)?;
            self.ensure_total_fits(Some(idx), line_total)?;

            self.items[idx].replace(unit_price, merged)?;
            debug!(
                product_code = %product.code(),
                quantity = merged,
                unit_price = %unit_price,
                "merged cart item"
            );
            return Ok(());
        }

        let item = LineItem::new(product.clone(), unit_price, quantity)?;
        self.ensure_total_fits(None, item.extended_total())?;
        self.items.push(item);
        debug!(
            product_code = %product.code(),
            quantity,
            unit_price = %unit_price,
            "added cart item"
        );
        Ok(())
    }

    /// Keeps `total()` representable. Sums in the same order `total()` does,
    /// with `line_total` replacing the item at `replacing` or appended last.
    fn ensure_total_fits(&self, replacing: Option<usize>, line_total: Decimal) -> DomainResult<()> {
        let overflow = || DomainError::invalid_argument("total overflow");
        let mut total = Decimal::ZERO;
        for (idx, item) in self.items.iter().enumerate() {
            let amount = if replacing == Some(idx) {
                line_total
            } else {
                item.extended_total()
            };
            total = total.checked_add(amount).ok_or_else(overflow)?;
        }
        if replacing.is_none() {
            total.checked_add(line_total).ok_or_else(overflow)?;
        }
        Ok(())
    }

    /// Apply [`Cart::add_item`] once per element, in order.
    ///
    /// Stops at the first rejected element; elements before it stay applied.
    pub fn add_items<'a, I>(&mut self, items: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = &'a LineItem>,
    {
        for item in items {
            self.add_item(item.product(), item.unit_price(), item.quantity())?;
        }
        Ok(())
    }

    /// Remove the item for `product` (matched by code). Returns whether one was removed.
    pub fn remove_item(&mut self, product: &Product) -> bool {
        match self.position_of(product.code()) {
            Some(idx) => {
                self.items.remove(idx);
                debug!(product_code = %product.code(), "removed cart item");
                true
            }
            None => false,
        }
    }

    /// Remove the item at zero-based `position` in insertion order.
    ///
    /// Later items shift down by one. Out-of-range positions return `false`.
    pub fn remove_item_at(&mut self, position: usize) -> bool {
        if position >= self.items.len() {
            return false;
        }
        let removed = self.items.remove(position);
        debug!(
            position,
            product_code = %removed.product().code(),
            "removed cart item"
        );
        true
    }

    /// Sum of every item's extended total. `add_item` refuses any item that
    /// would push this past `Decimal::MAX`.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::extended_total).sum()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, product: &Product) -> Option<&LineItem> {
        self.position_of(product.code()).map(|idx| &self.items[idx])
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.position_of(product.code()).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position_of(&self, code: ProductCode) -> Option<usize> {
        self.items.iter().position(|item| item.product().code() == code)
    }
}
