//! C binding emitter.
//!
//! Produces one translation unit of C-linkage glue: an opaque typedef, the
//! Free function, and one exported function per method dispatching to the
//! native class. The output is compiled together with the native library
//! and loaded by the wrapper module through the FFI.

use crate::error::GenResult;
use crate::schema::{ClassDef, MethodDef};
use crate::sig::{CallKind, Signature};
use crate::types::{ctype, qualified_type};

/// Render the `extern "C"` glue source for one class definition.
pub fn generate_cpp(class: &ClassDef) -> GenResult<String> {
    class.validate()?;

    let ct = ctype(class);
    let qt = qualified_type(class);

    let mut out = String::new();
    out.push_str(&format!("#include <{}>\n\n", class.header));
    out.push_str("extern \"C\" {\n\n");
    out.push_str(&format!("typedef void {ct};\n\n"));

    if class.destructor {
        // The definition keeps the legacy fixed-prefix label shipped by
        // prior output; declarations elsewhere use the generic symbol. The
        // two coincide for the frc namespace existing consumers link
        // against. No null check: the native destructor's own contract
        // applies.
        out.push_str(&format!(
            "void frc{}Free ({ct}* self) {{\n    delete ({qt}*) self;\n}}\n\n",
            class.typename
        ));
    }

    for (key, method) in &class.methods {
        let sig = Signature::of(class, key, method);
        out.push_str(&function(&qt, &ct, &sig, method));
        out.push('\n');
    }

    out.push_str("}\n");
    Ok(out)
}

/// Render one exported function: header, body, close.
fn function(qt: &str, ct: &str, sig: &Signature, method: &MethodDef) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}{} {{\n",
        sig.return_type,
        sig.symbol,
        parens(&sig.param_list())
    ));

    if let Some(body) = &method.c_body {
        out.push_str(body.trim_end_matches('\n'));
        out.push('\n');
    } else if !method.stub {
        out.push_str(&format!("    {}\n", synthesized_call(qt, ct, sig)));
    }

    out.push_str("}\n");
    out
}

/// The one-line dispatch body for a method without an override.
fn synthesized_call(qt: &str, ct: &str, sig: &Signature) -> String {
    let args = parens(&sig.declared_args());
    let ret = if sig.returns_value() { "return " } else { "" };

    match sig.call {
        CallKind::Factory => format!("return ({ct}*) new {qt}{args};"),
        CallKind::Static => format!("{ret}{qt}::{}{args};", sig.key),
        CallKind::Instance { is_const } => {
            let qual = if is_const { "const " } else { "" };
            format!("{ret}(({qual}{qt}*) self)->{}{args};", sig.key)
        }
    }
}

/// Parenthesize a comma-joined list: `()` when empty, ` (a, b)` otherwise.
///
/// The space before a non-empty list matches prior generated output.
fn parens(list: &str) -> String {
    if list.is_empty() {
        "()".to_string()
    } else {
        format!(" ({list})")
    }
}
