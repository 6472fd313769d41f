//! Relatedness estimation over collected ancestor maps.

pub mod inbreeding;

pub use inbreeding::{CommonAncestor, InbreedingEstimate, estimate_inbreeding, find_common_ancestors};
