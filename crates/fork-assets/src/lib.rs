//! Release asset fetching and unpacking for forksync
//!
//! After the curated tree is synced into a chromium checkout, prebuilt
//! libraries and resources are downloaded from GitHub releases and unpacked
//! into the checkout. On Windows a few auxiliary SDK files are copied in too.

pub mod archive;
pub mod error;
pub mod plan;
pub mod release;
pub mod setup;
pub mod subfolder;

pub use archive::{first_component, unpack_tar_gz};
pub use error::{Error, Result};
pub use plan::{AssetBundle, AssetPlan, AssetsConfig, AuxCopy};
pub use release::{GhRelease, ReleaseFetcher};
pub use setup::{BundleOutcome, setup_bundle, setup_plan};
pub use subfolder::copy_files_from_subfolder;
