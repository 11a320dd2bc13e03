//! Feature-gated composition of generated records.
//!
//! A record (script map, dependency map, build pipeline) starts from its
//! unconditional part. Each feature contributes a patch that is merged in,
//! in order, only when the feature is enabled. Keys of disabled patches
//! never appear, not even as empty values.
//!
//! ```
//! use sdkforge_templates::compose::{Block, compose};
//!
//! let base = Block::from([("viem".to_string(), "^2.21.0".to_string())]);
//! let patch = Block::from([("ethers".to_string(), "^6.13.0".to_string())]);
//!
//! let deps = compose(base.clone(), [(false, patch.clone())]);
//! assert_eq!(deps, base);
//!
//! let deps = compose(base, [(true, patch)]);
//! assert_eq!(deps.len(), 2);
//! ```

use indexmap::IndexMap;

/// An ordered string-to-string record, e.g. `scripts` or `dependencies`.
pub type Block = IndexMap<String, String>;

/// Shallow merge of a patch into a record.
pub trait Merge {
    fn merge(&mut self, patch: Self);
}

impl Merge for Block {
    /// Patch keys overwrite existing values in place; new keys are appended.
    fn merge(&mut self, patch: Self) {
        for (key, value) in patch {
            self.insert(key, value);
        }
    }
}

impl<T> Merge for Vec<T> {
    fn merge(&mut self, patch: Self) {
        self.extend(patch);
    }
}

/// Apply each `(enabled, patch)` pair to `base` in order.
pub fn compose<T: Merge>(base: T, toggles: impl IntoIterator<Item = (bool, T)>) -> T {
    toggles
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .fold(base, |mut acc, (_, patch)| {
            acc.merge(patch);
            acc
        })
}

/// Build a [`Block`] from string pairs.
pub fn block<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Block {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
