//! Action dispatch code generation
//!
//! Turns action containers found in a declaration model into companion source text:
//!
//! ```text
//! DeclarationModel → predicates → field collection → type rendering → artifact data → templates → text
//! ```
//!
//! ## Module Organization
//!
//! - `predicates` - which declarations and fields qualify
//! - `fields` - field collection across the supertype chain
//! - `types` - type signature rendering and builder-slot correction
//! - `actions` - artifact data for one container
//! - `templates` - artifact data to text
//! - `emitter` - indentation-tracking text buffer
//! - `driver` - whole compilation unit entry point

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod actions;
pub mod driver;
pub mod emitter;
pub mod fields;
pub mod predicates;
pub mod templates;
pub mod types;

use miette::Diagnostic;
use thiserror::Error;

use crate::model::ModelError;

pub use actions::{ActionGenerator, GeneratedActions};
pub use driver::{generate_actions, generate_unit, render_unit};
pub use types::{correct_type_arguments, render_type};

/// Error during action code generation.
///
/// Any error aborts generation for the whole compilation unit.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    /// The declaration model could not supply requested data
    #[error(transparent)]
    #[diagnostic(
        code(actiongen::model),
        help("every supertype must be declared in the unit's `declarations` or `library`")
    )]
    Model(#[from] ModelError),

    /// A generic type's declared parameters and supplied arguments are not aligned
    #[error("type `{type_name}` declares {params} type parameters but is given {args} type arguments")]
    #[diagnostic(
        code(actiongen::misaligned_type_arguments),
        help("supply one type argument per declared type parameter, or omit the parameters")
    )]
    MisalignedTypeArguments {
        type_name: String,
        params: usize,
        args: usize,
    },
}
