/// Classification for retry policy.
///
/// Used to determine how a caller should respond to errors from a provider.
///
/// # Behavior Summary
///
/// | Class | Retry Same Provider? | Try Next Provider? |
/// |-------|---------------------|--------------------|
/// | `Never` | No | No |
/// | `WithBackoff` | Yes, after a delay | Yes, once attempts run out |
/// | `NextProvider` | No | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad symbol, invalid credentials, or terminal failure.
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Retry the same provider after a backoff delay.
    ///
    /// Used for transient errors like rate limiting (HTTP 429) or timeout.
    /// Each subsequent attempt should wait longer than the previous one.
    WithBackoff,

    /// Give up on this provider without recording any penalty.
    ///
    /// Used when the provider can't handle the request but another source
    /// might succeed.
    NextProvider,
}
