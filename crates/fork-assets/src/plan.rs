//! Which release assets a platform needs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const SEGLIB_TAG: &str = "seglib-2025.12.09";
const SEGLIB_LIBRARY_DIR: &str = "third_party/seglib";
const SEGLIB_RESOURCES_DIR: &str = "seglib";

/// One release archive and where it is unpacked inside the checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBundle {
    /// Release tag to download from
    pub tag: String,
    /// Asset file name within the release
    pub asset: String,
    /// Destination relative to the chromium `src` directory
    pub target: PathBuf,
}

impl AssetBundle {
    pub fn new(tag: &str, asset: &str, target: &str) -> Self {
        Self {
            tag: tag.to_string(),
            asset: asset.to_string(),
            target: PathBuf::from(target),
        }
    }
}

/// Ordered list of bundles to install.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetPlan {
    pub bundles: Vec<AssetBundle>,
}

impl AssetPlan {
    /// Built-in plan for `os` (as in [`std::env::consts::OS`]).
    pub fn for_os(os: &str) -> Result<Self> {
        let bundles = match os {
            "macos" => vec![
                AssetBundle::new(
                    SEGLIB_TAG,
                    "seglib-0.1.2-Darwin-universal-shared-Release.tar.gz",
                    SEGLIB_LIBRARY_DIR,
                ),
                AssetBundle::new(
                    SEGLIB_TAG,
                    "mac-seglib-config-2025.12.09.tar.gz",
                    SEGLIB_RESOURCES_DIR,
                ),
            ],
            "windows" => vec![
                AssetBundle::new(
                    SEGLIB_TAG,
                    "seglib-0.1.2-Windows-AMD64-shared-Release.tar.gz",
                    SEGLIB_LIBRARY_DIR,
                ),
                AssetBundle::new(
                    SEGLIB_TAG,
                    "win-seglib-config-2025.05.20.tar.gz",
                    SEGLIB_RESOURCES_DIR,
                ),
            ],
            other => {
                return Err(Error::UnsupportedPlatform {
                    os: other.to_string(),
                });
            }
        };
        Ok(Self { bundles })
    }

    pub fn for_current_platform() -> Result<Self> {
        Self::for_os(std::env::consts::OS)
    }
}

/// A copy of local SDK files into the checkout, run after the assets are
/// installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxCopy {
    /// Source folder relative to the fork repository root
    pub from: PathBuf,
    /// Destination relative to the chromium `src` directory
    pub to: PathBuf,
    /// Copy only this file instead of every file in `from`
    #[serde(default)]
    pub file: Option<String>,
}

impl AuxCopy {
    /// Built-in copies for `os`: the camera client headers and import
    /// library on Windows, nothing elsewhere.
    pub fn builtin_for_os(os: &str) -> Vec<Self> {
        if os != "windows" {
            return Vec::new();
        }
        vec![
            Self {
                from: PathBuf::from("win/Camera/Include"),
                to: PathBuf::from("third_party/mmhmmCameraClient/include"),
                file: None,
            },
            Self {
                from: PathBuf::from("win/Camera/Client"),
                to: PathBuf::from("third_party/mmhmmCameraClient/lib"),
                file: Some("mmhmmCameraClient.lib".to_string()),
            },
        ]
    }
}

/// `[assets]` section of the forksync config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Program used to download release assets
    pub gh: String,
    /// `owner/name` of the repository hosting the releases. When unset, gh
    /// resolves it from the current directory.
    pub repo: Option<String>,
    /// Replaces the built-in per-platform plan when set
    pub bundles: Option<Vec<AssetBundle>>,
    /// Replaces the built-in per-platform auxiliary copies when set
    pub aux_copies: Option<Vec<AuxCopy>>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            gh: "gh".to_string(),
            repo: None,
            bundles: None,
            aux_copies: None,
        }
    }
}

impl AssetsConfig {
    /// The configured bundles, or the built-in plan for this platform.
    pub fn plan(&self) -> Result<AssetPlan> {
        match &self.bundles {
            Some(bundles) => Ok(AssetPlan {
                bundles: bundles.clone(),
            }),
            None => AssetPlan::for_current_platform(),
        }
    }

    /// The configured auxiliary copies, or the built-in ones for this
    /// platform.
    pub fn aux_plan(&self) -> Vec<AuxCopy> {
        match &self.aux_copies {
            Some(copies) => copies.clone(),
            None => AuxCopy::builtin_for_os(std::env::consts::OS),
        }
    }
}
