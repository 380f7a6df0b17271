//! TOML guide loading and validation.
//!
//! Guides are authored as TOML files: a `[guide]` header, `[[sections]]` in
//! hub order, `[[sections.steps]]` within each section and optional
//! `[[resources]]`. The [`validator`] reports every structural problem in a
//! file at once; [`ContentStore`] loads validated files into shared
//! [`Guide`](guidepost_core::Guide) handles.

mod raw;
mod store;
pub mod validator;

pub use store::{ContentStore, load_guide_file, load_guide_str, load_guide_str_with_config};
pub use validator::{
    ValidationConfig, ValidationError, ValidationErrorKind, ValidationLocation, ValidationResult,
    ValidationWarning, ValidationWarningKind, validate_guide_file, validate_guide_file_with_config,
    validate_guide_toml, validate_guide_toml_with_config,
};
