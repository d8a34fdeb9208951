//! Compiler flag composition
//!
//! The flag set handed to `odin build` is assembled deterministically:
//! profile base flags, then collection flags from the configuration, then
//! the fixed extras, then platform-conditional entries. Order only matters
//! for readability of the echoed command line.

pub mod platform;

use std::fmt;

use crate::config::ProjectConfig;
use platform::HostOs;

/// Build profile selecting the optimization/diagnostic flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    /// Directory name under the build root
    pub fn dir_name(self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }

    /// Profile-specific compiler flags
    pub fn base_flags(self) -> &'static [&'static str] {
        match self {
            Profile::Debug => &["-debug", "-o:minimal"],
            Profile::Release => &["-o:speed", "-vet", "-no-bounds-check"],
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Flags shared by every profile
const EXTRA_FLAGS: &[&str] = &["-strict-style", "-microarch:native"];

/// Compose the full ordered flag set for one compiler invocation
pub fn compose_flags(profile: Profile, config: &ProjectConfig, os: HostOs) -> Vec<String> {
    let mut flags: Vec<String> = profile
        .base_flags()
        .iter()
        .map(|f| f.to_string())
        .collect();
    flags.extend(config.collection_flags());
    flags.extend(EXTRA_FLAGS.iter().map(|f| f.to_string()));
    flags.extend(platform::platform_extras(os).iter().map(|f| f.to_string()));
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_enables_speed_and_drops_bounds_checks() {
        let flags = compose_flags(Profile::Release, &ProjectConfig::default(), HostOs::Macos);
        assert!(flags.contains(&"-o:speed".to_string()));
        assert!(flags.contains(&"-vet".to_string()));
        assert!(flags.contains(&"-no-bounds-check".to_string()));
        assert!(!flags.contains(&"-debug".to_string()));
        assert!(!flags.contains(&"-o:minimal".to_string()));
    }

    #[test]
    fn debug_enables_debug_info() {
        let flags = compose_flags(Profile::Debug, &ProjectConfig::default(), HostOs::Macos);
        assert!(flags.contains(&"-debug".to_string()));
        assert!(flags.contains(&"-o:minimal".to_string()));
        assert!(!flags.contains(&"-o:speed".to_string()));
        assert!(!flags.contains(&"-no-bounds-check".to_string()));
    }

    #[test]
    fn profile_base_comes_first() {
        let flags = compose_flags(Profile::Debug, &ProjectConfig::default(), HostOs::Linux);
        assert_eq!(flags[0], "-debug");
        assert_eq!(flags[1], "-o:minimal");
    }

    #[test]
    fn collections_and_extras_appear_in_every_profile() {
        for profile in [Profile::Debug, Profile::Release] {
            let flags = compose_flags(profile, &ProjectConfig::default(), HostOs::Other);
            assert!(flags.contains(&"-collection:sokol=sokol-odin/sokol".to_string()));
            assert!(flags.contains(&"-strict-style".to_string()));
            assert!(flags.contains(&"-microarch:native".to_string()));
        }
    }

    #[test]
    fn platform_extras_come_last() {
        let flags = compose_flags(Profile::Release, &ProjectConfig::default(), HostOs::Linux);
        assert_eq!(flags.last().unwrap(), "-linker:mold");
    }
}
