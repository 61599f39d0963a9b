//! Common implementations and shared functionality for the ntrumls library
//!
//! This crate provides the scalar modular arithmetic that the polynomial
//! ring engine builds on.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod math_common;

pub use math_common::{ceil_log2, egcd, is_power_of_two, is_prime, mod_inv, modulo};
