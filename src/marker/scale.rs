/// Maps a landmark's population count to a visual magnitude.
///
/// Defined for `group_size >= 1`. `scale(1)` is 0, so callers wanting a
/// minimum render size must clamp on their side; the engine does not.
/// The mapping is exactly `log10(group_size) * 10` under IEEE-754 `f64`
/// semantics, which downstream snapshots and tests rely on.
pub fn scale(group_size: u32) -> f64 {
    (group_size as f64).log10() * 10.0
}
