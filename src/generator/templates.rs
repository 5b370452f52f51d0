//! Artifact templates.
//!
//! The generator gathers everything it needs into the plain data types here; rendering turns that data into text and
//! consults nothing else. Templates can therefore be exercised without a declaration model.

use actiongen_core::conventions;
use actiongen_core::dart;

use super::emitter::DartEmitter;

/// A dispatcher-typed field: its name, rendered payload type and action key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionField {
    pub name: String,
    pub payload: String,
    pub key: String,
}

/// A field holding a nested action container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedField {
    pub name: String,
    pub type_name: String,
}

/// The generated subclass wiring a container's fields to the runtime dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherSubclass {
    pub class_name: String,
    pub base_name: String,
    pub dispatcher_type: String,
    pub dispatchers: Vec<ActionField>,
    pub nested: Vec<NestedField>,
}

impl DispatcherSubclass {
    pub fn render(&self, out: &mut DartEmitter) {
        let class = &self.class_name;
        out.block(&format!("class {} extends {}", class, self.base_name), |out| {
            out.linef(format_args!("factory {class}() => new {class}._();"));
            out.linef(format_args!("{class}._() : super._();"));

            if !self.dispatchers.is_empty() || !self.nested.is_empty() {
                out.blank_line();
            }
            for field in &self.dispatchers {
                out.linef(format_args!(
                    "final {} = new {}<{}>({});",
                    field.name,
                    self.dispatcher_type,
                    field.payload,
                    dart::string_literal(&field.key)
                ));
            }
            for field in &self.nested {
                out.linef(format_args!("final {} = new {}();", field.name, field.type_name));
            }

            out.blank_line();
            out.line(dart::OVERRIDE_ANNOTATION);
            let header = format!(
                "{} {}({} {})",
                dart::VOID,
                conventions::SET_DISPATCHER_METHOD,
                conventions::DISPATCHER,
                conventions::DISPATCHER_PARAM
            );
            out.block(&header, |out| {
                let forwarded = self
                    .dispatchers
                    .iter()
                    .map(|f| &f.name)
                    .chain(self.nested.iter().map(|f| &f.name));
                for name in forwarded {
                    out.linef(format_args!(
                        "{}.{}({});",
                        name,
                        conventions::SET_DISPATCHER_METHOD,
                        conventions::DISPATCHER_PARAM
                    ));
                }
            });
        });
    }
}

/// The companion class exposing a static name per dispatcher field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesClass {
    pub class_name: String,
    pub name_type: String,
    pub entries: Vec<ActionField>,
}

impl NamesClass {
    pub fn render(&self, out: &mut DartEmitter) {
        out.block(&format!("class {}", self.class_name), |out| {
            for entry in &self.entries {
                out.linef(format_args!(
                    "static final {} = new {}<{}>({});",
                    entry.name,
                    self.name_type,
                    entry.payload,
                    dart::string_literal(&entry.key)
                ));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, payload: &str) -> ActionField {
        ActionField {
            name: name.to_string(),
            payload: payload.to_string(),
            key: format!("Foo-{name}"),
        }
    }

    fn render(f: impl FnOnce(&mut DartEmitter)) -> String {
        let mut out = DartEmitter::new(2);
        f(&mut out);
        out.finish()
    }

    #[test]
    fn test_names_class() {
        let names = NamesClass {
            class_name: "FooNames".to_string(),
            name_type: "ActionName".to_string(),
            entries: vec![field("bar", "Baz"), field("qux", "List<int>")],
        };
        assert_eq!(
            render(|out| names.render(out)),
            "class FooNames {\n  static final bar = new ActionName<Baz>('Foo-bar');\n  static final qux = new ActionName<List<int>>('Foo-qux');\n}\n"
        );
    }

    #[test]
    fn test_empty_names_class() {
        let names = NamesClass {
            class_name: "FooNames".to_string(),
            name_type: "ActionName".to_string(),
            entries: vec![],
        };
        assert_eq!(render(|out| names.render(out)), "class FooNames {\n}\n");
    }

    #[test]
    fn test_dispatcher_subclass() {
        let sub = DispatcherSubclass {
            class_name: "_$Foo".to_string(),
            base_name: "Foo".to_string(),
            dispatcher_type: "ActionDispatcher".to_string(),
            dispatchers: vec![field("bar", "Baz")],
            nested: vec![NestedField {
                name: "child".to_string(),
                type_name: "ChildActions".to_string(),
            }],
        };
        let expected = "\
class _$Foo extends Foo {
  factory _$Foo() => new _$Foo._();
  _$Foo._() : super._();

  final bar = new ActionDispatcher<Baz>('Foo-bar');
  final child = new ChildActions();

  @override
  void setDispatcher(Dispatcher dispatcher) {
    bar.setDispatcher(dispatcher);
    child.setDispatcher(dispatcher);
  }
}
";
        assert_eq!(render(|out| sub.render(out)), expected);
    }

    #[test]
    fn test_dispatcher_subclass_without_fields() {
        let sub = DispatcherSubclass {
            class_name: "_$Foo".to_string(),
            base_name: "Foo".to_string(),
            dispatcher_type: "ActionDispatcher".to_string(),
            dispatchers: vec![],
            nested: vec![],
        };
        let expected = "\
class _$Foo extends Foo {
  factory _$Foo() => new _$Foo._();
  _$Foo._() : super._();

  @override
  void setDispatcher(Dispatcher dispatcher) {
  }
}
";
        assert_eq!(render(|out| sub.render(out)), expected);
    }

    #[test]
    fn test_keys_are_escaped() {
        let names = NamesClass {
            class_name: "ANames".to_string(),
            name_type: "ActionName".to_string(),
            entries: vec![ActionField {
                name: "a$b".to_string(),
                payload: "int".to_string(),
                key: "A-a$b".to_string(),
            }],
        };
        assert!(render(|out| names.render(out)).contains(r"new ActionName<int>('A-a\$b');"));
    }
}
