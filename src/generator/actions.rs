//! Action class generation.
//!
//! Gathers the data for the two artifacts of a qualifying container `D`:
//!
//! - the dispatcher subclass `_$D`, only when `D` declares more than one constructor (a single constructor marks a
//!   plain container that is never instantiated through generated code);
//! - the names class `DNames`, always.
//!
//! Dispatcher instances and name identifiers share the key `"D-field"`.

use actiongen_core::conventions;
use actiongen_core::dart;

use crate::config::GeneratorConfig;
use crate::model::{Declaration, DeclarationModel, Field};

use super::emitter::DartEmitter;
use super::fields::collect_fields;
use super::predicates;
use super::templates::{ActionField, DispatcherSubclass, NamesClass, NestedField};
use super::types::{render_type, render_type_arguments};
use super::GenerationError;

/// Both artifacts generated for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedActions {
    /// Name of the container the artifacts belong to
    pub container: String,
    pub dispatcher: Option<DispatcherSubclass>,
    pub names: NamesClass,
}

impl GeneratedActions {
    /// Render the artifacts, each separated from preceding output by a blank line.
    pub fn render(&self, out: &mut DartEmitter) {
        if let Some(dispatcher) = &self.dispatcher {
            if !out.is_empty() {
                out.blank_line();
            }
            dispatcher.render(out);
        }
        if !out.is_empty() {
            out.blank_line();
        }
        self.names.render(out);
    }
}

/// Generates action artifacts for containers of one declaration model.
pub struct ActionGenerator<'m, M: DeclarationModel + ?Sized> {
    model: &'m M,
    config: &'m GeneratorConfig,
}

impl<'m, M: DeclarationModel + ?Sized> ActionGenerator<'m, M> {
    pub fn new(model: &'m M, config: &'m GeneratorConfig) -> Self {
        Self { model, config }
    }

    /// Whether `decl` qualifies for generation.
    pub fn needs_generation(&self, decl: &Declaration) -> Result<bool, GenerationError> {
        predicates::needs_generation(self.model, decl, self.config)
    }

    /// Gather both artifacts for the qualifying container `decl`.
    pub fn generate(&self, decl: &'m Declaration) -> Result<GeneratedActions, GenerationError> {
        let dispatchers = self.dispatcher_fields(decl)?;

        let dispatcher = if decl.constructors.len() > 1 {
            Some(DispatcherSubclass {
                class_name: self.config.generated_name(&decl.name),
                base_name: decl.name.clone(),
                dispatcher_type: self.config.dispatcher_marker.clone(),
                dispatchers: dispatchers.clone(),
                nested: self.nested_fields(decl)?,
            })
        } else {
            None
        };

        let names = NamesClass {
            class_name: conventions::names_class_name(&decl.name),
            name_type: self.config.action_name_type.clone(),
            entries: dispatchers,
        };

        Ok(GeneratedActions {
            container: decl.name.clone(),
            dispatcher,
            names,
        })
    }

    fn dispatcher_fields(&self, decl: &'m Declaration) -> Result<Vec<ActionField>, GenerationError> {
        collect_fields(
            self.model,
            decl,
            |field| Ok(predicates::is_dispatcher_field(&field.ty, self.config)),
            |_, field| action_field(decl, field),
        )
    }

    fn nested_fields(&self, decl: &'m Declaration) -> Result<Vec<NestedField>, GenerationError> {
        collect_fields(
            self.model,
            decl,
            |field| predicates::is_nested_container(self.model, &field.ty, self.config),
            |_, field| {
                Ok(NestedField {
                    name: field.name.clone(),
                    type_name: render_type(&field.ty)?,
                })
            },
        )
    }
}

/// Template data for a dispatcher field of `container`.
fn action_field(container: &Declaration, field: &Field) -> Result<ActionField, GenerationError> {
    let args = render_type_arguments(&field.ty)?;
    let payload = if args.is_empty() {
        dart::DYNAMIC.to_string()
    } else {
        args.join(",")
    };
    Ok(ActionField {
        name: field.name.clone(),
        payload,
        key: conventions::action_key(&container.name, &field.name),
    })
}
