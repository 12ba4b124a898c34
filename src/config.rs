// src/config.rs
use derive_builder::Builder;
use range_match_shared_kernel::PresentationError;

use crate::args::Args;
use crate::options::{ColorChoice, OutputFormat};

/// Settings for one invocation. Fields left `None` are prompted for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub password: Option<String>,
    #[builder(default)]
    pub start: Option<String>,
    #[builder(default)]
    pub end: Option<String>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub color: ColorChoice,
    #[builder(default)]
    pub verbosity: u8,
}

impl Config {
    /// True when every field was supplied up front.
    pub fn is_complete(&self) -> bool {
        self.password.is_some() && self.start.is_some() && self.end.is_some()
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .password(args.password)
            .start(args.start)
            .end(args.end)
            .format(args.format)
            .color(args.color)
            .verbosity(args.verbose)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
