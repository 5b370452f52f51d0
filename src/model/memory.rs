//! In-memory declaration model.
//!
//! A [`CompilationUnit`] owns the declarations of one unit plus the library declarations visible to it (runtime
//! marker types, containers imported from other units). It is built by hand in tests and deserialized from JSON by
//! the CLI:
//!
//! ```json
//! {
//!   "declarations": [
//!     { "name": "CounterActions", "supertypes": ["ReduxActions"], "constructors": [{}],
//!       "fields": [{ "name": "increment", "type": { "kind": "parameterized", "name": "ActionDispatcher",
//!                                                    "args": [{ "kind": "named", "name": "int" }] } }] }
//!   ],
//!   "library": [{ "name": "ReduxActions" }]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Declaration, DeclarationModel, ModelError};

/// Declarations of one compilation unit and the library around it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "UnitDocument", into = "UnitDocument")]
pub struct CompilationUnit {
    declarations: Vec<Declaration>,
    library: Vec<Declaration>,
    /// Name -> (is_unit, index)
    index: HashMap<String, (bool, usize)>,
    /// First name declared twice, reported on access
    duplicate: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UnitDocument {
    #[serde(default)]
    declarations: Vec<Declaration>,
    #[serde(default)]
    library: Vec<Declaration>,
}

impl From<UnitDocument> for CompilationUnit {
    fn from(doc: UnitDocument) -> Self {
        let mut unit = CompilationUnit::new();
        for decl in doc.library {
            unit.add_library(decl);
        }
        for decl in doc.declarations {
            unit.add_declaration(decl);
        }
        unit
    }
}

impl From<CompilationUnit> for UnitDocument {
    fn from(unit: CompilationUnit) -> Self {
        UnitDocument {
            declarations: unit.declarations,
            library: unit.library,
        }
    }
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a unit from its JSON document.
    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        let unit: CompilationUnit = serde_json::from_str(source)?;
        unit.check_duplicates()?;
        Ok(unit)
    }

    /// Add a declaration belonging to the unit.
    pub fn add_declaration(&mut self, decl: Declaration) {
        self.register(&decl.name, true, self.declarations.len());
        self.declarations.push(decl);
    }

    /// Add a declaration visible to the unit but generated elsewhere.
    pub fn add_library(&mut self, decl: Declaration) {
        self.register(&decl.name, false, self.library.len());
        self.library.push(decl);
    }

    pub fn with_declaration(mut self, decl: Declaration) -> Self {
        self.add_declaration(decl);
        self
    }

    pub fn with_library(mut self, decl: Declaration) -> Self {
        self.add_library(decl);
        self
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn library(&self) -> &[Declaration] {
        &self.library
    }

    fn register(&mut self, name: &str, is_unit: bool, idx: usize) {
        if self.index.contains_key(name) {
            if self.duplicate.is_none() {
                self.duplicate = Some(name.to_string());
            }
            return;
        }
        self.index.insert(name.to_string(), (is_unit, idx));
    }

    fn check_duplicates(&self) -> Result<(), ModelError> {
        match &self.duplicate {
            Some(name) => Err(ModelError::DuplicateDeclaration { name: name.clone() }),
            None => Ok(()),
        }
    }
}

impl DeclarationModel for CompilationUnit {
    fn unit_declarations(&self) -> Result<Vec<&Declaration>, ModelError> {
        self.check_duplicates()?;
        Ok(self.declarations.iter().collect())
    }

    fn lookup(&self, name: &str) -> Result<Option<&Declaration>, ModelError> {
        self.check_duplicates()?;
        Ok(self.index.get(name).and_then(|&(is_unit, idx)| {
            if is_unit {
                self.declarations.get(idx)
            } else {
                self.library.get(idx)
            }
        }))
    }
}
