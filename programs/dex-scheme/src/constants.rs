pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["scheme", avatar]
pub const SCHEME: &[u8] = b"scheme";

// Seeds for PDA derivation: ["proposal", scheme, proposal_id]
pub const PROPOSAL: &[u8] = b"proposal";

// Seeds for PDA derivation: ["treasury", scheme]
pub const TREASURY: &[u8] = b"treasury";

// Parts-per-million denominator for slippage tolerances (1_000_000 = 100%)
pub const PPM: u64 = 1_000_000;

// Router calls expire this many seconds after submission
pub const ROUTER_DEADLINE_WINDOW: i64 = 1200;
