//! Registry configuration.

use rust_decimal::RoundingStrategy;

/// How the average ticket is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketConfig {
    /// Decimal places kept in the average ticket.
    pub scale: u32,
    /// Rounding applied when trimming to `scale`.
    pub rounding: RoundingStrategy,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            scale: 2,
            // Half-up: 0-4 rounds down, 5-9 rounds up (totals are never negative).
            rounding: RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

impl TicketConfig {
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingStrategy) -> Self {
        self.rounding = rounding;
        self
    }
}
