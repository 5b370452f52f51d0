//! Declaration model consumed by the generator.
//!
//! The generator never introspects source code itself. It reads an immutable snapshot of class-like declarations
//! through the [`DeclarationModel`] trait: which declarations a compilation unit contains, their fields and
//! constructors, the types of those fields, and the transitive supertype set of any declaration.
//!
//! ## Notes
//!
//! - [`memory::CompilationUnit`] is the in-memory implementation used by the CLI (loaded from JSON) and by tests.
//! - Every accessor is fallible. A failure is a declaration-model access failure and aborts generation for the unit.

pub mod memory;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::CompilationUnit;

/// Failure to supply data from the declaration model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("declaration `{declaration}` names unknown supertype `{supertype}`")]
    UnknownSupertype { declaration: String, supertype: String },

    #[error("declaration `{declaration}` is its own supertype")]
    CyclicHierarchy { declaration: String },

    #[error("declaration `{name}` is declared more than once")]
    DuplicateDeclaration { name: String },

    #[error("invalid declaration model: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Kind of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    #[default]
    Class,
    Mixin,
    Enum,
    Typedef,
}

impl DeclarationKind {
    /// Whether declarations of this kind can host action fields.
    pub fn is_class_like(self) -> bool {
        matches!(self, DeclarationKind::Class | DeclarationKind::Mixin)
    }
}

/// A class-like declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    /// Name as presented to users; falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub kind: DeclarationKind,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Direct supertypes (superclass, interfaces, mixins) in declaration order.
    #[serde(default)]
    pub supertypes: Vec<String>,
}

impl Declaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            kind: DeclarationKind::Class,
            constructors: Vec::new(),
            fields: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_constructor(mut self, name: impl Into<String>) -> Self {
        self.constructors.push(Constructor { name: name.into() });
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(Field { name: name.into(), ty });
        self
    }

    pub fn with_supertype(mut self, name: impl Into<String>) -> Self {
        self.supertypes.push(name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// A constructor; only the count matters to the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    /// Empty for the unnamed constructor.
    #[serde(default)]
    pub name: String,
}

/// A field declared directly on a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A declared type parameter of a generic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<TypeRef>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
        }
    }

    pub fn bounded(name: impl Into<String>, bound: TypeRef) -> Self {
        Self {
            name: name.into(),
            bound: Some(bound),
        }
    }
}

/// A reference to a type as seen by the declaration model.
///
/// `params` on generic variants are the declared type parameters (with their bounds) and `args` the supplied type
/// arguments. When `params` is non-empty the two lists are positionally aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A non-generic named type.
    Named { name: String },
    /// A class type with type arguments.
    Parameterized {
        name: String,
        #[serde(default)]
        params: Vec<TypeParam>,
        #[serde(default)]
        args: Vec<TypeRef>,
    },
    /// A (possibly generic) function type alias.
    Function {
        name: String,
        #[serde(default)]
        params: Vec<TypeParam>,
        #[serde(default)]
        args: Vec<TypeRef>,
    },
    Void,
    Dynamic,
    /// A type the model could not resolve yet, such as a builder generated in the same pass.
    Unresolved,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named { name: name.into() }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Parameterized {
            name: name.into(),
            params: Vec::new(),
            args,
        }
    }

    pub fn parameterized(name: impl Into<String>, params: Vec<TypeParam>, args: Vec<TypeRef>) -> Self {
        TypeRef::Parameterized {
            name: name.into(),
            params,
            args,
        }
    }

    pub fn function(name: impl Into<String>, params: Vec<TypeParam>, args: Vec<TypeRef>) -> Self {
        TypeRef::Function {
            name: name.into(),
            params,
            args,
        }
    }

    /// Element name without type arguments, if the type has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeRef::Named { name } | TypeRef::Parameterized { name, .. } | TypeRef::Function { name, .. } => {
                Some(name)
            }
            TypeRef::Void | TypeRef::Dynamic | TypeRef::Unresolved => None,
        }
    }
}

/// Read-only access to the declarations visible while generating one compilation unit.
pub trait DeclarationModel {
    /// Declarations of the compilation unit, in source order.
    fn unit_declarations(&self) -> Result<Vec<&Declaration>, ModelError>;

    /// Any visible declaration by name; `None` when the name is not a declaration the model knows.
    fn lookup(&self, name: &str) -> Result<Option<&Declaration>, ModelError>;

    /// Transitive supertype set of `decl`.
    ///
    /// Depth-first pre-order over the direct supertypes as declared; each declaration appears once, at its first
    /// occurrence.
    fn all_supertypes<'a>(&'a self, decl: &'a Declaration) -> Result<Vec<&'a Declaration>, ModelError> {
        let mut out: Vec<&Declaration> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        // Stack of (declaration, index of next direct supertype to visit)
        let mut stack: Vec<(&Declaration, usize)> = vec![(decl, 0)];

        while let Some((current, next)) = stack.pop() {
            let Some(super_name) = current.supertypes.get(next) else {
                continue;
            };
            stack.push((current, next + 1));

            if super_name == &decl.name {
                return Err(ModelError::CyclicHierarchy {
                    declaration: decl.name.clone(),
                });
            }
            if !seen.insert(super_name.as_str()) {
                continue;
            }
            let Some(resolved) = self.lookup(super_name)? else {
                return Err(ModelError::UnknownSupertype {
                    declaration: current.name.clone(),
                    supertype: super_name.clone(),
                });
            };
            out.push(resolved);
            stack.push((resolved, 0));
        }

        Ok(out)
    }
}
