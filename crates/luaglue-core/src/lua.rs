//! Lua wrapper module emitter.
//!
//! Produces the LuaJIT module that binds to the glue library: an `ffi.cdef`
//! block mirroring the C emitter's signatures, an `ffi.load` of the shared
//! library, constructor bindings for factory methods, one call wrapper per
//! remaining method, and the `ffi.metatype` registration that routes values
//! of the opaque type through the wrapper's method table.

use crate::error::GenResult;
use crate::naming::lower_first;
use crate::schema::ClassDef;
use crate::sig::{CallKind, Signature};
use crate::types::{ctype, symbol};

/// Render the Lua FFI wrapper module for one class definition.
///
/// `library` is the name passed to `ffi.load`; it is configuration, not
/// derived from the schema.
pub fn generate_lua(class: &ClassDef, library: &str) -> GenResult<String> {
    class.validate()?;

    let ct = ctype(class);
    let tn = &class.typename;

    let mut out = String::new();
    out.push_str("local ffi = require ('ffi')\n\n");
    out.push_str("ffi.cdef[[\n");
    out.push_str(&cdef(class, &ct));
    out.push_str("]]\n\n");
    out.push_str(&format!("local lib = ffi.load ('{library}')\n\n"));
    out.push_str(&format!("local {tn} = {{}}\n"));
    out.push_str(&format!("local {tn}_mt = {{\n    __index = {tn}\n}}\n\n"));

    let methods = wrappers(class, tn);
    if !methods.is_empty() {
        out.push_str(&methods);
        out.push_str("\n\n");
    }

    out.push_str(&format!("ffi.metatype('{ct}', {tn}_mt)\n"));
    out.push_str(&format!("return {tn}\n"));
    Ok(out)
}

/// The foreign-function declaration block.
///
/// Every declaration renders from the same [`Signature`] the C emitter
/// uses; the two artifacts agreeing on each method's external shape is the
/// binding contract between them.
fn cdef(class: &ClassDef, ct: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("typedef struct {ct} {ct};\n\n"));

    if class.destructor {
        out.push_str(&format!("void {} ({ct}* self);\n\n", symbol(class, "Free")));
    }

    for (key, method) in &class.methods {
        let sig = Signature::of(class, key, method);
        out.push_str(&format!(
            "{} {}({});\n",
            sig.return_type,
            sig.symbol,
            sig.param_list()
        ));
    }

    out
}

/// Constructor bindings followed by per-method call wrappers, both in
/// document order.
fn wrappers(class: &ClassDef, tn: &str) -> String {
    let mut out = String::new();

    for (key, method) in &class.methods {
        let sig = Signature::of(class, key, method);
        if sig.call == CallKind::Factory {
            out.push_str(&constructor(tn, &sig, method.lua_body.as_deref()));
        }
    }

    for (key, method) in &class.methods {
        let sig = Signature::of(class, key, method);
        if sig.call != CallKind::Factory {
            out.push_str(&wrapper(tn, &sig, method.lua_body.as_deref()));
        }
    }

    out.trim_end().to_string()
}

/// A factory method bound on the type table: `Pose2d.new(...)` constructs
/// through the foreign factory call. Factories never join the per-instance
/// method table.
fn constructor(tn: &str, sig: &Signature, lua_body: Option<&str>) -> String {
    let name = lower_first(&sig.key);
    let args = sig.declared_args();
    let mut out = format!("function {tn}.{name}({args})\n");
    out.push_str(&body(sig, lua_body, &args));
    out.push_str("end\n\n");
    out
}

/// A non-factory call wrapper: colon form for instance methods (Lua
/// supplies `self`), dot form for statics.
fn wrapper(tn: &str, sig: &Signature, lua_body: Option<&str>) -> String {
    let sep = if sig.has_self() { ':' } else { '.' };
    let name = lower_first(&sig.key);
    let declared = sig.declared_args();

    let call_args = if sig.has_self() {
        if declared.is_empty() {
            "self".to_string()
        } else {
            format!("self, {declared}")
        }
    } else {
        declared.clone()
    };

    let mut out = format!("function {tn}{sep}{name}({declared})\n");
    out.push_str(&body(sig, lua_body, &call_args));
    out.push_str("end\n\n");
    out
}

fn body(sig: &Signature, lua_body: Option<&str>, call_args: &str) -> String {
    if let Some(body) = lua_body {
        let mut out = body.trim_end_matches('\n').to_string();
        out.push('\n');
        return out;
    }

    let call = format!("lib.{}({call_args})", sig.symbol);
    if sig.returns_value() {
        format!("    return {call}\n")
    } else {
        format!("    {call}\n")
    }
}

#[cfg(test)]
#[path = "lua/lua_tests.rs"]
mod lua_tests;
