//! C++ code emitter
//!
//! Renders each populated [`HandleModel`] into a textual struct definition:
//! a single raw-handle field, forwarding constructors, a copy-suppressing
//! destructor block when the handle owns its resource, and forwarding
//! methods. Emission order is catalog order; within a model, constructors,
//! then the destructor block, then methods, each in declaration order.

use crate::backend::model::HandleModel;
use crate::backend::registry::HandleRegistry;
use crate::frontend::parser::{Declaration, Parameter};
use crate::names;

/// A line-oriented builder for C++ source with 4-space indentation.
#[derive(Debug, Default)]
pub struct CppEmitter {
    lines: Vec<String>,
    indent_level: usize,
}

impl CppEmitter {
    const INDENT: &'static str = "    ";

    pub fn new() -> Self {
        Self::default()
    }

    /// Write a line at the current indentation.
    pub fn line(&mut self, s: &str) {
        self.lines
            .push(format!("{}{}", Self::INDENT.repeat(self.indent_level), s));
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// The newline-joined output, without a trailing newline.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Render every model in the registry, in catalog order.
///
/// Each model's block is followed by a newline; unused models contribute an
/// empty block, leaving a bare newline. Output is a pure function of the
/// registry contents, so re-running the pipeline is byte-identical.
pub fn emit_all(registry: &HandleRegistry) -> String {
    let mut out = String::new();
    for model in registry.models() {
        out.push_str(&emit_model(registry, model));
        out.push('\n');
    }
    out
}

/// Render one wrapper struct, or the empty string for an unused model.
pub fn emit_model(registry: &HandleRegistry, model: &HandleModel) -> String {
    if model.is_unused() {
        return String::new();
    }

    let name = model.wrapper_name();
    let mut e = CppEmitter::new();

    e.line(&format!("struct {name}"));
    e.line("{");
    e.indent();
    e.line(&format!("{} self;", model.handle_type()));

    for ctor in model.constructors() {
        e.line(&format!(
            "{name}{} : self({})",
            signature_params(registry, ctor.parameters.as_slice()),
            forward_call(registry, &ctor.name, ctor.parameters.as_slice(), false),
        ));
        e.line("{}");
    }

    if let Some(dtor) = model.destructor() {
        e.line(&format!("{name}(const {name}&)=delete;"));
        e.line(&format!("{name}& operator=(const {name}&)=delete;"));
        e.line(&format!("~{name}()"));
        e.line("{");
        e.indent();
        e.line(&format!("{}(self);", dtor.name));
        e.dedent();
        e.line("}");
    }

    for method in model.methods() {
        emit_method(&mut e, registry, method);
    }

    e.dedent();
    e.line("};");
    e.finish()
}

fn emit_method(e: &mut CppEmitter, registry: &HandleRegistry, method: &Declaration) {
    // The owning handle's name is conventionally a prefix of the flat
    // function name; only the last underscore-delimited segment survives.
    let segment = method.name.rsplit('_').next().unwrap_or(&method.name);
    let method_name = names::to_snake_case(segment);
    let return_type = names::map_type(registry, &method.return_type);

    // The first parameter becomes the implicit receiver.
    let rest = method.parameters.get(1..).unwrap_or(&[]);

    e.line(&format!(
        "{return_type} {method_name}{}",
        signature_params(registry, rest)
    ));
    e.line("{");
    e.indent();
    let prefix = if return_type != "void" { "return " } else { "" };
    e.line(&format!(
        "{prefix}{};",
        forward_call(registry, &method.name, rest, true)
    ));
    e.dedent();
    e.line("}");
}

/// `(type name, type name, ...)` with normalized types and names.
fn signature_params(registry: &HandleRegistry, params: &[Parameter]) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|p| {
            format!(
                "{} {}",
                names::map_type(registry, &p.ty),
                names::map_name(registry, &p.name)
            )
        })
        .collect();
    format!("({})", rendered.join(", "))
}

/// `flat_name(arg, arg, ...)`, prepending the raw receiver handle when
/// `with_receiver` is set. Shared-owned wrapper arguments forward the raw
/// underlying handle, never the wrapper itself.
fn forward_call(
    registry: &HandleRegistry,
    flat_name: &str,
    params: &[Parameter],
    with_receiver: bool,
) -> String {
    let mut args: Vec<String> = Vec::with_capacity(params.len() + 1);
    if with_receiver {
        args.push("self".to_string());
    }
    for p in params {
        args.push(forward_arg(registry, p));
    }
    format!("{flat_name}({})", args.join(", "))
}

fn forward_arg(registry: &HandleRegistry, param: &Parameter) -> String {
    let ty = names::map_type(registry, &param.ty);
    let name = names::map_name(registry, &param.name);
    if ty.starts_with("std::shared_ptr") {
        format!("{name}.get()")
    } else {
        name
    }
}
