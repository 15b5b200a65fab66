// fixtures/mod.rs - Compiled-in fixture data
//
// The tracker has no data source: suppliers, products and exchange rates
// are hardcoded tables. Each table is a zero-sized struct implementing
// FixtureTable, built once on first access and shared for the rest of
// the session.

pub mod tables;

/// A static table of rows built on first access
pub trait FixtureTable {
    type Row: 'static;

    /// All rows in declaration order
    fn rows() -> &'static [Self::Row];
}
