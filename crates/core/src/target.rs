//! The fixed table of publishable targets and their menu options.
//!
//! The platform set, the build kind per platform and the menu ordering are all
//! fixed at compile time. The menu table is constructed once at startup and
//! passed explicitly to the selection code rather than living in global state.

use std::fmt::{Display, Formatter};

/// A publishable target platform, identified by its runtime identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinuxX64,
    LinuxArm64,
    OsxX64,
    OsxArm64,
    WinX64,
    WinArm64,
}

impl Platform {
    /// Every platform, in the order the "All Platforms" plan runs them.
    pub const ALL: [Platform; 6] = [
        Platform::LinuxX64,
        Platform::LinuxArm64,
        Platform::OsxX64,
        Platform::OsxArm64,
        Platform::WinX64,
        Platform::WinArm64,
    ];

    #[must_use]
    pub fn runtime_identifier(self) -> &'static str {
        match self {
            Platform::LinuxX64 => "linux-x64",
            Platform::LinuxArm64 => "linux-arm64",
            Platform::OsxX64 => "osx-x64",
            Platform::OsxArm64 => "osx-arm64",
            Platform::WinX64 => "win-x64",
            Platform::WinArm64 => "win-arm64",
        }
    }

    /// Linux targets build an installable Debian package; every other target
    /// gets a self-contained publish.
    #[must_use]
    pub fn build_kind(self) -> BuildKind {
        match self {
            Platform::LinuxX64 | Platform::LinuxArm64 => BuildKind::DebianPackage,
            _ => BuildKind::SelfContainedPublish,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.runtime_identifier())
    }
}

/// The shape of the build command a platform requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    DebianPackage,
    SelfContainedPublish,
}

/// What the user picked from the menu: everything, or one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    AllPlatforms,
    Single(Platform),
}

/// One selectable entry in the platform menu.
#[derive(Debug, Clone)]
pub struct MenuOption {
    /// 1-based index the user types to pick this option
    pub index: usize,
    pub label: &'static str,
    pub selection: Selection,
}

impl Display for MenuOption {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}. {}", self.index, self.label)
    }
}

/// Builds the menu table. Ordered by index, starting at 1.
#[must_use]
pub fn menu_options() -> Vec<MenuOption> {
    let entries: [(&'static str, Selection); 7] = [
        ("All Platforms", Selection::AllPlatforms),
        ("Win-x64", Selection::Single(Platform::WinX64)),
        ("Win-ARM64", Selection::Single(Platform::WinArm64)),
        ("Linux-x64 (Debian PKG)", Selection::Single(Platform::LinuxX64)),
        ("Linux-ARM64 (Debian PKG)", Selection::Single(Platform::LinuxArm64)),
        ("OSX-x64", Selection::Single(Platform::OsxX64)),
        ("OSX-ARM64", Selection::Single(Platform::OsxArm64)),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(position, (label, selection))| MenuOption {
            index: position + 1,
            label,
            selection,
        })
        .collect()
}
