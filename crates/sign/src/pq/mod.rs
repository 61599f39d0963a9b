pub mod ntrumls;

pub use ntrumls::{NtruMls, NtruMls443, NtruMls563, NtruMlsScheme};
