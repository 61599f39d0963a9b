//! Constant parameter sets for the ntrumls library

#![no_std]

pub mod pqc;

pub use pqc::ntrumls::{
    NtruMls443Params, NtruMls563Params, NtruMlsParamSet, NtruMlsParams, NTRUMLS_443, NTRUMLS_563,
};
