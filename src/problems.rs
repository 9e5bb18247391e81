//! The collection of implemented problems.
//!
//! Problems are grouped by their field of engineering:
//!
//! * [Industrial chemical processes](chemical)
//! * [Process design and synthesis](synthesis)
//! * [Mechanical design](mechanical)
//!
//! All problems are minimization problems with a single objective. Use the
//! [`catalog`](crate::catalog) to look a problem up by its code or
//! abbreviation.

pub mod chemical;
pub mod mechanical;
pub mod synthesis;

pub use chemical::*;
pub use mechanical::*;
pub use synthesis::*;
