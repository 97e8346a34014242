// Limits for the solver
pub const MAX_NUMBERS: usize = 32;
pub const MASK_BITS: usize = u64::BITS as usize;
