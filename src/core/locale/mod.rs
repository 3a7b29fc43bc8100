//! Locale files and the operations over them.
//!
//! ## Module Structure
//!
//! - `tree`: LocaleTree loading, saving, flattening and key surgery
//! - `skip`: SkipPolicy shared by the synchronizer and the untranslated check
//! - `dictionary`: Static per-language lookup tables
//! - `diff`: Missing-key and untranslated-value detection
//! - `sync`: Recursive baseline → target merge

pub mod dictionary;
pub mod diff;
pub mod skip;
pub mod sync;
pub mod tree;

pub use dictionary::Dictionary;
pub use diff::{missing_keys, untranslated_keys};
pub use skip::{SkipPolicy, SkipReason};
pub use sync::{LeafTranslator, SyncReport, TranslationFailure, synchronize};
pub use tree::{
    LocaleFile, LocaleTree, deep_merge, discover_locales, flatten_keys, get_key, locale_path,
    remove_key, target_locales,
};
