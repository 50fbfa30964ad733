//! # domus-core
//!
//! The billing domain. Single-threaded and fully synchronous: every
//! operation runs to completion before the next command is processed.
//!
//! * [`registry::Registry`]: the aggregate owning all residents, the
//!   shared tariff table, and the cumulative revenue. The sole source of
//!   truth for billing queries.
//! * [`resident::Resident`]: a billed occupant accumulating consumption
//!   entries over time.
//! * [`report`]: read-only snapshot types handed to the front end.
//!
//! There is no global state here. Construct a [`registry::Registry`] and
//! pass it by reference into whatever drives it.

pub mod registry;
pub mod report;
pub mod resident;
