//! # Domain Types
//!
//! Core domain types shared by the cart, pricing and validation modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   PizzaSize     │   │   CrustType     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ProductId) │   │  Small   5.00   │   │  Thin           │       │
//! │  │  name           │   │  Medium 10.00   │   │  Regular        │       │
//! │  │  unit_price     │   │  Large  15.00   │   │  CheeseStuffed  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   bps (u32): 2100 = 21%                           │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 2100 bps = 21%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// Catalog identifier of a product. Merge identity in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A purchasable extra ingredient.
///
/// Created once when the catalog is built and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within the catalog.
    pub id: ProductId,

    /// Display name shown on the order and the summary.
    pub name: String,

    /// Price of one unit (non-negative).
    pub unit_price: Money,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, unit_price: Money) -> Self {
        Product {
            id: ProductId(id),
            name: name.into(),
            unit_price,
        }
    }
}

// =============================================================================
// Pizza Size
// =============================================================================

/// Pizza size, which drives the fixed size surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
}

impl PizzaSize {
    /// All sizes in the order they are offered.
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    /// Fixed surcharge added on top of the extras.
    pub const fn surcharge(&self) -> Money {
        match self {
            PizzaSize::Small => Money::from_cents(500),
            PizzaSize::Medium => Money::from_cents(1000),
            PizzaSize::Large => Money::from_cents(1500),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        }
    }

    /// Lenient lookup used by the pricing layer: `None` for anything unknown.
    ///
    /// Accepts English labels and the Spanish labels used on the menu board.
    pub fn from_label(label: &str) -> Option<PizzaSize> {
        match label.trim().to_lowercase().as_str() {
            "small" | "pequeña" | "pequena" => Some(PizzaSize::Small),
            "medium" | "mediana" => Some(PizzaSize::Medium),
            "large" | "grande" => Some(PizzaSize::Large),
            _ => None,
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for PizzaSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PizzaSize::from_label(s).ok_or_else(|| CoreError::UnknownSize(s.to_string()))
    }
}

// =============================================================================
// Crust Type
// =============================================================================

/// Dough choice. Does not affect the price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CrustType {
    Thin,
    #[default]
    Regular,
    CheeseStuffed,
}

impl CrustType {
    pub const ALL: [CrustType; 3] = [CrustType::Thin, CrustType::Regular, CrustType::CheeseStuffed];

    pub const fn label(&self) -> &'static str {
        match self {
            CrustType::Thin => "Thin",
            CrustType::Regular => "Regular",
            CrustType::CheeseStuffed => "Cheese-stuffed",
        }
    }
}

impl fmt::Display for CrustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for CrustType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "thin" | "fina" => Ok(CrustType::Thin),
            "regular" | "normal" => Ok(CrustType::Regular),
            "cheese stuffed" | "cheesestuffed" | "rellena de queso" => {
                Ok(CrustType::CheeseStuffed)
            }
            _ => Err(CoreError::UnknownCrust(s.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(2100);
        assert_eq!(rate.bps(), 2100);
        assert!((rate.percentage() - 21.0).abs() < 0.001);
    }

    #[test]
    fn test_size_surcharges() {
        assert_eq!(PizzaSize::Small.surcharge().cents(), 500);
        assert_eq!(PizzaSize::Medium.surcharge().cents(), 1000);
        assert_eq!(PizzaSize::Large.surcharge().cents(), 1500);
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("large".parse::<PizzaSize>().unwrap(), PizzaSize::Large);
        assert_eq!(" Medium ".parse::<PizzaSize>().unwrap(), PizzaSize::Medium);
        assert_eq!("Pequeña".parse::<PizzaSize>().unwrap(), PizzaSize::Small);
        assert_eq!(PizzaSize::from_label("Grande"), Some(PizzaSize::Large));
        assert_eq!(PizzaSize::from_label("Normal"), None);

        let err = "family".parse::<PizzaSize>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSize(s) if s == "family"));
    }

    #[test]
    fn test_crust_parsing() {
        assert_eq!("thin".parse::<CrustType>().unwrap(), CrustType::Thin);
        assert_eq!("Normal".parse::<CrustType>().unwrap(), CrustType::Regular);
        assert_eq!(
            "cheese-stuffed".parse::<CrustType>().unwrap(),
            CrustType::CheeseStuffed
        );
        assert_eq!(
            "Rellena de Queso".parse::<CrustType>().unwrap(),
            CrustType::CheeseStuffed
        );
        assert!("deep dish".parse::<CrustType>().is_err());
    }

    #[test]
    fn test_crust_default() {
        assert_eq!(CrustType::default(), CrustType::Regular);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new(1, "Ham", Money::from_cents(100));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["unitPrice"], 100);
    }
}
