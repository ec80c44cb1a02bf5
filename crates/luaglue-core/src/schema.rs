//! Class definition model loaded from YAML schema documents.
//!
//! A schema document describes one native class: its namespace, type name,
//! declaration header, and an ordered set of methods. Document order is
//! load-bearing — it decides emission order in both generated artifacts —
//! so `methods` and `params` are kept as ordered `(key, value)` pairs
//! rather than maps.

use crate::error::{GenError, GenResult};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

/// One native class to bind.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDef {
    /// Lowercase symbol prefix, also capitalized into the opaque type name
    #[serde(default)]
    pub namespace: String,

    /// Bare class name
    #[serde(default)]
    pub typename: String,

    /// Path of the native declaration header, emitted into the include
    #[serde(default)]
    pub header: String,

    /// Whether a Free function and its call are emitted
    #[serde(default = "default_true")]
    pub destructor: bool,

    /// Methods in document order
    #[serde(default, deserialize_with = "ordered_map")]
    pub methods: Vec<(String, MethodDef)>,
}

/// One operation on a class.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDef {
    /// Parameters in document order: name to type token (`cptr`,
    /// `const-cptr`, or a literal C type name)
    #[serde(default, deserialize_with = "ordered_map")]
    pub params: Vec<(String, String)>,

    /// Return type token; absent or `void` means no return value
    #[serde(default)]
    pub return_type: Option<String>,

    /// No implicit receiver; exposed with dot-call syntax in the wrapper
    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Constructs a new instance; bound into the wrapper's constructor
    /// rather than its per-instance method table
    #[serde(default)]
    pub factory: bool,

    /// Receiver parameter is const-qualified in the C signature
    #[serde(default, rename = "const")]
    pub is_const: bool,

    /// Emit the signature with an empty body, for hand-written overrides
    #[serde(default)]
    pub stub: bool,

    /// Verbatim C body, emitted instead of a synthesized call
    #[serde(default)]
    pub c_body: Option<String>,

    /// Verbatim Lua body, emitted instead of a synthesized foreign call
    #[serde(default)]
    pub lua_body: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ClassDef {
    /// Load a class definition from a schema document on disk.
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<ClassDef> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GenError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a class definition from schema document text.
    pub fn from_str(content: &str) -> GenResult<ClassDef> {
        let class: ClassDef = serde_yaml::from_str(content)
            .map_err(|err| GenError::InvalidSchema(err.to_string()))?;
        class.validate()?;
        Ok(class)
    }

    /// Validate the definition.
    ///
    /// `namespace` and `typename` are required; together they must already
    /// form a symbol-safe identifier — no sanitizing happens here.
    pub fn validate(&self) -> GenResult<()> {
        if self.namespace.is_empty() {
            return Err(GenError::InvalidSchema("missing namespace".to_string()));
        }

        if self.typename.is_empty() {
            return Err(GenError::InvalidSchema("missing typename".to_string()));
        }

        for (key, method) in &self.methods {
            if method.is_static && method.factory {
                tracing::warn!(
                    method = %key,
                    "both static and factory set; factory takes precedence"
                );
            }
        }

        Ok(())
    }
}

/// Deserialize a mapping into `(key, value)` pairs, preserving document
/// order. YAML mappings are unordered in most map types; the pair list is
/// what makes emission order an enforceable contract.
fn ordered_map<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct OrderedMapVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
}
