//! Utility Module
//!
//! - [`interner`]: String interning for node and channel names
//!
//! # String Interning
//!
//! Names are interned once when a skeleton or clip is built. Interned
//! strings (Symbols) compare and hash in O(1) time.
//!
//! ```rust,ignore
//! use armature::utils::interner;
//!
//! let sym1 = interner::intern("Hip");
//! let sym2 = interner::intern("Hip");
//! assert_eq!(sym1, sym2); // O(1) comparison
//! ```

pub mod interner;

pub use interner::Symbol;
