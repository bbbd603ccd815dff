//! Command-plan derivation.
//!
//! A plan is an ordered list of [`CommandSpec`] values derived deterministically
//! from the user's menu selection. Commands are structured as a program plus an
//! explicit argument list so nothing is ever interpreted by a shell.

use std::fmt::{Display, Formatter};

use crate::target::{BuildKind, Platform, Selection};

/// The external build toolchain every plan invokes.
pub const TOOL: &str = "dotnet";

/// A single external command: program plus argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// The build command for a platform, using the command shape its
    /// [`BuildKind`] requires.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        match platform.build_kind() {
            BuildKind::DebianPackage => Self::debian_package(platform),
            BuildKind::SelfContainedPublish => Self::self_contained_publish(platform),
        }
    }

    fn debian_package(platform: Platform) -> Self {
        Self::new(
            TOOL,
            &[
                "deb",
                "--runtime",
                platform.runtime_identifier(),
                "--configuration",
                "Release",
            ],
        )
    }

    fn self_contained_publish(platform: Platform) -> Self {
        Self::new(
            TOOL,
            &[
                "publish",
                "-c",
                "Release",
                "-r",
                platform.runtime_identifier(),
                "--self-contained",
                "true",
            ],
        )
    }
}

impl Display for CommandSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.program)?;
        for arg in &self.args {
            write!(formatter, " {arg}")?;
        }
        Ok(())
    }
}

/// Derives the ordered command plan for a selection.
///
/// "All Platforms" yields one command per platform in [`Platform::ALL`] order;
/// a single platform yields exactly its one command. The result is built once
/// and never mutated afterwards.
#[must_use]
pub fn plan_for(selection: Selection) -> Vec<CommandSpec> {
    match selection {
        Selection::AllPlatforms => Platform::ALL
            .iter()
            .map(|platform| CommandSpec::for_platform(*platform))
            .collect(),
        Selection::Single(platform) => vec![CommandSpec::for_platform(platform)],
    }
}
