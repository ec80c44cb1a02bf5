//! Shared signature computation.
//!
//! Both emitters render every method from one [`Signature`] value: the C
//! function header and the Lua `ffi.cdef` declaration are two renderings of
//! the same parameter walk. Deriving them separately is exactly how the two
//! artifacts drift out of link-time agreement.

use crate::schema::{ClassDef, MethodDef};
use crate::types;

/// How the synthesized C body dispatches to the native class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// `new namespace::Type(args)`, returned as the opaque pointer
    Factory,
    /// `namespace::Type::Method(args)`
    Static,
    /// `((namespace::Type*) self)->Method(args)`
    Instance {
        /// Receiver is const-qualified
        is_const: bool,
    },
}

/// The externally visible shape of one bound method.
#[derive(Debug, Clone)]
pub struct Signature {
    /// Method key from the schema document
    pub key: String,

    /// Exported symbol name
    pub symbol: String,

    /// Mapped C return type, `void` when the method returns nothing
    pub return_type: String,

    /// Mapped parameters as `(C type, name)` pairs in declaration order,
    /// with the implicit `self` receiver first for instance methods
    pub params: Vec<(String, String)>,

    /// Call form the C emitter synthesizes
    pub call: CallKind,
}

impl Signature {
    /// Compute the signature of one method.
    ///
    /// A method flagged both `static` and `factory` resolves to a factory:
    /// neither takes a receiver, and the factory routing decides where the
    /// wrapper exposes it.
    pub fn of(class: &ClassDef, key: &str, method: &MethodDef) -> Signature {
        let call = if method.factory {
            CallKind::Factory
        } else if method.is_static {
            CallKind::Static
        } else {
            CallKind::Instance {
                is_const: method.is_const,
            }
        };

        let mut params = Vec::with_capacity(method.params.len() + 1);
        if let CallKind::Instance { is_const } = call {
            let receiver = if is_const {
                format!("const {}*", types::ctype(class))
            } else {
                format!("{}*", types::ctype(class))
            };
            params.push((receiver, "self".to_string()));
        }

        for (name, token) in &method.params {
            params.push((types::map_param_type(class, token), name.clone()));
        }

        Signature {
            key: key.to_string(),
            symbol: types::symbol(class, key),
            return_type: types::map_return_type(class, method.return_type.as_deref()),
            params,
            call,
        }
    }

    /// Whether the method produces a value, i.e. emits a `return` keyword.
    pub fn returns_value(&self) -> bool {
        self.return_type != "void"
    }

    /// Whether the signature carries an implicit receiver.
    pub fn has_self(&self) -> bool {
        matches!(self.call, CallKind::Instance { .. })
    }

    /// Render the parameter list, e.g. `const FrcPose2d* self, double x`.
    ///
    /// Used verbatim by both the C function header and the cdef declaration;
    /// the parity property of the two artifacts reduces to this one string.
    pub fn param_list(&self) -> String {
        self.params
            .iter()
            .map(|(ty, name)| format!("{ty} {name}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Declared argument names in order, without the implicit receiver.
    pub fn declared_args(&self) -> String {
        let skip = usize::from(self.has_self());
        self.params
            .iter()
            .skip(skip)
            .map(|(_, name)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
