/// Recommended log filter for applications which use this crate.
///
/// It hides the per-triple trace records emitted while the rotation registry is built.
/// Everything else passes.
#[allow(clippy::missing_inline_in_public_items)]
pub fn standard_filter(metadata: &log::Metadata<'_>) -> bool {
    !(metadata.level() >= log::Level::Trace
        && metadata.target().starts_with("cubic_grid::math::rotation"))
}
