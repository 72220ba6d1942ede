//! Platen
//!
//! Platen is the pricing and promotion engine for an online print shop:
//! page/colour/duplex document pricing, option-based product pricing, and
//! promotion discount evaluation with best-offer selection.

pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod promotions;
pub mod receipt;
