//! luaglue-core - Class definition model and binding emitters
//!
//! This crate turns a YAML class definition into two correlated artifacts:
//! - [`cpp::generate_cpp`] emits the `extern "C"` glue translation unit that
//!   exposes an opaque-pointer API over the native class
//! - [`lua::generate_lua`] emits the LuaJIT FFI wrapper module that loads the
//!   compiled library and exposes idiomatic method-call syntax
//!
//! Both emitters render every method from the same [`Signature`] value, so
//! the Lua `ffi.cdef` declarations always agree with the C function headers.

mod error;
mod naming;
mod schema;
mod sig;
mod types;

pub mod cpp;
pub mod lua;

pub use error::{GenError, GenResult};
pub use naming::{capitalize, lower_first};
pub use schema::{ClassDef, MethodDef};
pub use sig::{CallKind, Signature};
pub use types::{ctype, map_param_type, map_return_type, qualified_type, symbol};

use std::str::FromStr;

/// Output formats a class definition can be rendered to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// C-linkage glue source, compiled into the shared library
    Native,
    /// LuaJIT FFI wrapper module
    Wrapper,
}

impl Format {
    /// File extension of generated output for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Native => "cpp",
            Format::Wrapper => "lua",
        }
    }
}

impl FromStr for Format {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(Format::Native),
            "wrapper" => Ok(Format::Wrapper),
            other => Err(GenError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Native => write!(f, "native"),
            Format::Wrapper => write!(f, "wrapper"),
        }
    }
}

/// Render a class definition to the requested format.
///
/// `library` names the shared library the wrapper module opens; the native
/// format ignores it.
pub fn generate(class: &ClassDef, format: Format, library: &str) -> GenResult<String> {
    match format {
        Format::Native => cpp::generate_cpp(class),
        Format::Wrapper => lua::generate_lua(class, library),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
