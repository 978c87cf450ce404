//! df-data: Stock pattern bestiary for Deckfall
//!
//! Authored pattern sets per tier plus a few named species, tagged so
//! every strategy branch has content to find.

pub mod bestiary;

pub use bestiary::standard_catalog;
