//! Constants for post-quantum lattice signature schemes

pub mod ntrumls;
