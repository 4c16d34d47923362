//! Error types for the epiweek-core crate.

/// Error type for all fallible operations in the epiweek-core crate.
///
/// Week and day numbers are never range-checked: out-of-range values are
/// carried through the arithmetic literally. The only conversion failure is a
/// calendar date that chrono cannot represent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EpiweekError {
    /// Returned when a date needed by the computation falls outside the
    /// range representable by [`chrono::NaiveDate`].
    #[error("date out of range: year {year} is not representable")]
    DateOutOfRange {
        /// The epi-year (or calendar year) whose dates could not be built.
        year: i64,
    },

    /// Returned when a `yyyyww` string cannot be parsed.
    #[error("invalid compact epiweek: {input:?} (expected yyyyww)")]
    InvalidCompact {
        /// The rejected input.
        input: String,
    },

    /// Returned when a week numbering system name is not recognised.
    #[error("unknown week system: {name:?} (expected mmwr, cdc or iso)")]
    UnknownSystem {
        /// The rejected name.
        name: String,
    },
}
