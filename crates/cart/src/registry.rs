use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;
use tracing::debug;

use storecart_core::{CustomerId, DomainError, DomainResult};

use crate::cart::Cart;
use crate::config::TicketConfig;

/// Owns one cart per customer, created lazily and kept until invalidated.
///
/// Registries are independent: a cart created in one is never visible from
/// another.
#[derive(Debug, Default)]
pub struct CartRegistry {
    carts: HashMap<CustomerId, Cart>,
    // Creation order of the keys in `carts`, which a `HashMap` does not keep.
    // Only `create` and `invalidate` touch either structure.
    order: Vec<CustomerId>,
    config: TicketConfig,
}

impl CartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TicketConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &TicketConfig {
        &self.config
    }

    /// Return the cart for `customer_id`, creating an empty one on first use.
    ///
    /// Repeated calls hand back the same cart until it is invalidated.
    pub fn create(&mut self, customer_id: impl Into<CustomerId>) -> &mut Cart {
        let customer_id = customer_id.into();
        if !self.carts.contains_key(&customer_id) {
            debug!(customer_id = %customer_id, "created cart");
            self.order.push(customer_id.clone());
        }
        self.carts.entry(customer_id).or_default()
    }

    pub fn get<Q>(&self, customer_id: &Q) -> Option<&Cart>
    where
        CustomerId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.carts.get(customer_id)
    }

    /// Mean of every registered cart's total, rounded per [`TicketConfig`].
    ///
    /// Averaging zero carts is a division by zero and is reported as
    /// `DomainError::Arithmetic` rather than defaulted.
    pub fn average_ticket(&self) -> DomainResult<Decimal> {
        if self.carts.is_empty() {
            return Err(DomainError::arithmetic(
                "division by zero: no carts registered",
            ));
        }

        let overflow = || DomainError::arithmetic("average ticket overflow");
        let sum = self
            .carts
            .values()
            .try_fold(Decimal::ZERO, |acc, cart| acc.checked_add(cart.total()))
            .ok_or_else(overflow)?;
        let mean = sum
            .checked_div(Decimal::from(self.carts.len()))
            .ok_or_else(overflow)?;

        let mut ticket = mean.round_dp_with_strategy(self.config.scale, self.config.rounding);
        ticket.rescale(self.config.scale);
        Ok(ticket)
    }

    /// Drop the cart for `customer_id`. Returns whether one existed.
    pub fn invalidate<Q>(&mut self, customer_id: &Q) -> bool
    where
        CustomerId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((removed, _)) = self.carts.remove_entry(customer_id) else {
            return false;
        };
        if let Some(pos) = self.order.iter().position(|id| *id == removed) {
            self.order.remove(pos);
        }
        debug!(customer_id = %removed, remaining = self.carts.len(), "invalidated cart");
        true
    }

    /// Customers holding a cart, in creation order.
    pub fn customers(&self) -> impl Iterator<Item = &CustomerId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}
