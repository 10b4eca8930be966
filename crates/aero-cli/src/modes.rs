//! Interactive mode, behind the optional `tui` feature.

#[cfg(feature = "tui")]
pub use aero_tui::run_interactive;

#[cfg(not(feature = "tui"))]
pub fn run_interactive(_config: &aero_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
