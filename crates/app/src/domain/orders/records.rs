//! Orders Records

use jiff::Timestamp;
use platen::{
    orders::{Document, PrintOptions},
    prices::Money,
};
use serde::Serialize;

use crate::uuids::TypedUuid;

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Lifecycle of a print order. Transitions are externally driven; the
/// service records whatever status an administrator sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Printing,
    Done,
    Expired,
}

/// Order Record
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    pub uuid: OrderUuid,

    /// Print options snapshot taken at quoting time.
    pub options: PrintOptions,

    /// Uploaded document descriptors the quote was computed from.
    pub documents: Vec<Document>,

    /// Pages summed across every document.
    pub total_pages: u32,

    /// Final quoted price.
    pub total_price: Money,

    pub status: OrderStatus,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
