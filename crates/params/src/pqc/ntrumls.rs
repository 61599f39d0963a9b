//! Constants for the NTRUMLS modular lattice signature scheme

/// Default cap on rejection-sampling attempts per signature
pub const DEFAULT_MAX_SIGN_ATTEMPTS: u32 = 1000;

/// Default cap on fresh private key draws when `f` is not invertible
pub const DEFAULT_MAX_KEYGEN_ATTEMPTS: u32 = 32;

/// Default cap on division and Euclid loop iterations inside the ring
pub const DEFAULT_RING_ITERATION_LIMIT: usize = 5000;

/// NTRUMLS parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NtruMlsParams {
    /// Human-readable name
    pub name: &'static str,

    /// Ring dimension (reduction x^N = 1)
    pub n: usize,

    /// Small prime modulus
    pub p: i64,

    /// Large modulus, a power of two
    pub q: i64,

    /// Private key weight: `f` holds d+1 ones and d minus-ones, `g` holds d of each
    pub d: usize,

    /// Norm bound on the `s` side
    pub bs: i64,

    /// Norm bound on the `t` side
    pub bt: i64,

    /// Rejection-sampling attempts before signing gives up
    pub max_sign_attempts: u32,

    /// Private key draws before key generation gives up
    pub max_keygen_attempts: u32,

    /// Iteration cap handed to the polynomial ring
    pub ring_iteration_limit: usize,
}

impl NtruMlsParams {
    /// Parameter set with default limits
    pub const fn new(name: &'static str, n: usize, p: i64, q: i64, d: usize, bs: i64, bt: i64) -> Self {
        Self {
            name,
            n,
            p,
            q,
            d,
            bs,
            bt,
            max_sign_attempts: DEFAULT_MAX_SIGN_ATTEMPTS,
            max_keygen_attempts: DEFAULT_MAX_KEYGEN_ATTEMPTS,
            ring_iteration_limit: DEFAULT_RING_ITERATION_LIMIT,
        }
    }

    /// Override the signing attempt cap
    pub const fn with_max_sign_attempts(mut self, attempts: u32) -> Self {
        self.max_sign_attempts = attempts;
        self
    }

    /// Override the key generation attempt cap
    pub const fn with_max_keygen_attempts(mut self, attempts: u32) -> Self {
        self.max_keygen_attempts = attempts;
        self
    }

    /// Override the ring iteration cap
    pub const fn with_ring_iteration_limit(mut self, limit: usize) -> Self {
        self.ring_iteration_limit = limit;
        self
    }
}

/// NTRUMLS-443 parameters
pub const NTRUMLS_443: NtruMlsParams = NtruMlsParams::new("NTRUMLS-443", 443, 3, 65536, 10, 138, 46);

/// NTRUMLS-563 parameters
pub const NTRUMLS_563: NtruMlsParams = NtruMlsParams::new("NTRUMLS-563", 563, 3, 65536, 10, 174, 58);

/// Type-level marker for an NTRUMLS parameter set
pub trait NtruMlsParamSet: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    /// The parameter values
    const PARAMS: NtruMlsParams;
}

/// Marker for [`NTRUMLS_443`]
#[derive(Debug, Clone, Copy)]
pub struct NtruMls443Params;

impl NtruMlsParamSet for NtruMls443Params {
    const NAME: &'static str = "NTRUMLS-443";
    const PARAMS: NtruMlsParams = NTRUMLS_443;
}

/// Marker for [`NTRUMLS_563`]
#[derive(Debug, Clone, Copy)]
pub struct NtruMls563Params;

impl NtruMlsParamSet for NtruMls563Params {
    const NAME: &'static str = "NTRUMLS-563";
    const PARAMS: NtruMlsParams = NTRUMLS_563;
}
