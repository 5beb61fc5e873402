//! Allowance gate
//!
//! Approval and swap are separate transactions with their own latency, so
//! allowances are read fresh before every planning cycle and never cached.

use tracing::debug;

/// Whether `spender` must be approved before it can pull `required` of `token`
pub fn needs_approval(
    owner: &str,
    spender: &str,
    token: &str,
    required: u128,
    current_allowance: u128,
) -> bool {
    let needed = current_allowance < required;
    debug!(
        owner,
        spender,
        token,
        required,
        current_allowance,
        needs_approval = needed,
        "Checked allowance"
    );
    needed
}
