//! Document store for vitrine project records.
//!
//! One JSON document per project under a single collection directory. The
//! document id is the file stem, a uuid generated on insert; the document body
//! never contains it. Mutation is full-document replace, matching the editor's
//! save model.

pub mod store;

pub use store::{ProjectStore, StoreError, StoredProject};
