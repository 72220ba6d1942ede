//! Orders command payloads.

use platen::orders::{Document, PrintOptions};

use super::records::OrderUuid;

/// Fields for placing an order. The price is computed, never supplied.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub documents: Vec<Document>,
    pub options: PrintOptions,
}
