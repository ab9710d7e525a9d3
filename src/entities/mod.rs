//! Entity module - Contains the inventory records exchanged with the REST backend.
//! Raw JSON from the backend is normalized here: `_id`/`id` collapse to one canonical
//! `id`, quantities are coerced to non-negative integers, and response envelopes are unwrapped.

pub mod godown;
pub mod product;
pub mod transaction;
pub(crate) mod wire;

pub use godown::{Godown, NewGodown};
pub use product::{NewProduct, Product, ProductDetails};
pub use transaction::{Movement, StockAdjustment, Transaction};
pub use wire::{ItemResponse, ListResponse};
