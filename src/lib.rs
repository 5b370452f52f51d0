#![forbid(unsafe_code)]
//! actiongen - action dispatcher boilerplate generator
//!
//! Given a model of class declarations (fields, declared types, supertype chains, constructors), actiongen emits the
//! companion source a Redux-style action container needs: a subclass wiring every dispatchable field to the runtime
//! dispatcher, and a names class exposing a stable identifier per action.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `generator` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Example
//!
//! ```rust
//! use actiongen::{CompilationUnit, Declaration, GeneratorConfig, TypeRef, generate_unit};
//!
//! let unit = CompilationUnit::new()
//!     .with_library(Declaration::new("ReduxActions"))
//!     .with_declaration(
//!         Declaration::new("Foo")
//!             .with_supertype("ReduxActions")
//!             .with_constructor("")
//!             .with_field("bar", TypeRef::generic("ActionDispatcher", vec![TypeRef::named("Baz")])),
//!     );
//!
//! let dart = generate_unit(&unit, &GeneratorConfig::default()).unwrap();
//! assert!(dart.contains("static final bar = new ActionName<Baz>('Foo-bar');"));
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod model;
pub mod version;

pub use config::GeneratorConfig;
pub use generator::{GenerationError, generate_actions, generate_unit};
pub use model::{CompilationUnit, Declaration, DeclarationModel, Field, ModelError, TypeParam, TypeRef};
