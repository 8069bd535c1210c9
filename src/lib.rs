//! Parley library exports for testing

use clap::ValueEnum;

use crate::core::session::Mode;

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// CLI-facing mode names (`--mode ai|human`).
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Ai,
    Human,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Ai => Mode::Ai,
            ModeArg::Human => Mode::Human,
        }
    }
}
