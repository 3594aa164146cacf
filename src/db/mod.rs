//! Database layer (Firestore, with an in-memory stand-in).

pub mod firestore;
pub mod memory;
pub mod seed;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

/// Collection names as constants.
pub mod collections {
    pub const CURATORS: &str = "curators";
    pub const INVESTORS: &str = "investors";
}

/// Field holding the unique login name in every entity collection.
pub const USERNAME_FIELD: &str = "username";
