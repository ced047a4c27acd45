//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `skillbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("skillbook_core ping={}", skillbook_core::ping());
    println!("skillbook_core version={}", skillbook_core::core_version());
}
