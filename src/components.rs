//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the index, chapter and preview pages
//! so every generated document has the same skeleton and navigation.

pub mod layout;
pub mod nav;
