//! Generated project files.

mod biome;
mod changeset;
mod erc20_abi;
mod gitignore;
mod index_ts;
mod package_json;
mod readme;
mod test_config;
mod tsconfig;
mod typedoc;

pub use biome::Biome;
pub use changeset::ChangesetConfig;
pub use erc20_abi::Erc20Abi;
pub use gitignore::GitIgnore;
pub use index_ts::IndexTs;
pub use package_json::PackageJson;
pub use readme::Readme;
pub use sdk_test::SdkTest;
pub use test_config::{TestConfig, TestUtils};
pub use tsconfig::{BuildTarget, TsConfigBase, TsConfigRoot, TsConfigTarget};
pub use typedoc::TypeDoc;
