// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_answer(size: usize) -> String {
    let base = "# Options\n\nComparing **Signatera** and *Guardant Reveal* for `MRD` monitoring.\n\n- Tumor-informed assay\n- Plasma-only assay with __methylation__ signals\n\n1. Order the kit\n2. Draw blood, see [guide](https://openonco.org/guide)\n\n";
    base.repeat(size)
}

/// Unpaired openers that force every closer search to fail.
#[allow(dead_code)]
pub fn generate_unpaired_delimiters(size: usize) -> String {
    "**a _b [c `d ".repeat(size)
}
