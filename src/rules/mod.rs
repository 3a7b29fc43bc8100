//! Rule implementations for parley.
//!
//! Each function takes only the specific inputs it needs (a source file, a
//! project layout, locale trees) and returns a specific finding type.
//!
//! ## Module Structure
//!
//! - `responsive`: Breakpoint counting and fixed-size detection
//! - `images`: Raw `<img>` tags (performance and accessibility)
//! - `imports`: Navigation imports bypassing the locale-aware wrappers
//! - `hardcoded`: Literal heading text
//! - `pages`: Localized pages using translations on the server
//! - `project`: Directory layout, root layout, i18n wiring, environment
//! - `translations`: Missing and untranslated keys per locale

pub mod hardcoded;
pub mod images;
pub mod imports;
pub mod pages;
pub mod project;
pub mod responsive;
pub mod translations;
