//! Service layer for the supplier scout.
//!
//! This module contains the business logic for:
//! - Overpass querying (`OverpassClient`)
//! - Supplier classification (`SupplierFilter`)

mod filter;
mod overpass;

pub use filter::SupplierFilter;
pub use overpass::OverpassClient;
