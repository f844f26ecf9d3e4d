//! Aggregation layer for the bike share rental tables.
//!
//! Everything in this crate is a pure transform: the operations in
//! [`aggregate`] take date-sorted slices of the base tables, never mutate
//! them, and produce small summary tables ([`models`]). [`report`] bundles
//! one reporting pass's worth of those views (the set a dashboard renders
//! for a single date-range selection) and is rebuilt from scratch on every
//! selection change.
//!
//! An empty input slice is valid everywhere and yields zero sums or empty
//! views, never an error.

pub mod aggregate;
pub mod models;
pub mod report;
