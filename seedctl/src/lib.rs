//! Bulk-seeding toolkit for the research portal backend
//!
//! The crate is a thin CLI over a generic record pipeline: spreadsheet and
//! CSV sources are mapped onto declared field sets and submitted one record
//! at a time, plus standalone sheet splitting/export utilities.

pub mod cli;
pub mod datasets;
pub mod pipeline;
pub mod seeds;
pub mod split;
