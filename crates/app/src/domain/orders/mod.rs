//! Orders

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use records::{OrderRecord, OrderStatus, OrderUuid};
pub use repository::{MemoryOrdersRepository, OrdersRepository};
pub use service::{CreatedOrder, OrdersService};
