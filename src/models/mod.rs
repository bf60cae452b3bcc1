//! Domain models

pub mod audit;
pub mod cart;
pub mod product;

pub use audit::{AuditAction, AuditEntry};
pub use cart::CartItem;
pub use product::{Product, ProductCreate, ProductUpdate, Variation};
