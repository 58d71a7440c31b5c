pub const OPTIMIZED_SUFFIX: &str = "_optimized.glb";

/// Replaces every `.step`, then every `.stp`, with `_optimized.glb`.
///
/// Matching is plain and case-sensitive, anywhere in the path. Paths without
/// either substring come back unchanged, so the "output" can equal the input.
pub fn optimized_output_path(input_path: &str) -> String {
    input_path
        .replace(".step", OPTIMIZED_SUFFIX)
        .replace(".stp", OPTIMIZED_SUFFIX)
}
