use serde::{Deserialize, Serialize};

use storecart_core::{Entity, ProductCode};

/// A product that can be placed into a cart.
///
/// Identity is the code alone: two products with the same code are
/// interchangeable regardless of their descriptions. Immutable after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawProduct")]
pub struct Product {
    code: ProductCode,
    description: String,
}

#[derive(Deserialize)]
struct RawProduct {
    code: ProductCode,
    description: String,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self::new(raw.code.as_i64(), raw.description)
    }
}

impl Product {
    /// Build a product; surrounding whitespace in `description` is dropped.
    pub fn new(code: i64, description: impl AsRef<str>) -> Self {
        Self {
            code: ProductCode::new(code),
            description: description.as_ref().trim().to_owned(),
        }
    }

    pub fn code(&self) -> ProductCode {
        self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Product {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{} {}", self.code, self.description)
    }
}
