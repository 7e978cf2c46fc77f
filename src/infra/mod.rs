// ============================================================
// Layer 6 — Infrastructure
// ============================================================
// Everything that touches the filesystem for persistence. The
// upper layers only see the `QaStore` trait; this module owns
// the on-disk JSON layout behind it.

pub mod store;

pub use store::JsonStore;
