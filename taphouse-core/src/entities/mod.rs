//! Domain entities for the brewery order service.

pub mod beer;
pub mod beer_order;

pub use beer::{Beer, BeerStyle};
pub use beer_order::{BeerOrder, BeerOrderLine, OrderStatus};
