//! Type and symbol mapping from class definitions.
//!
//! Pure functions computing the C type strings, exported symbol names, and
//! qualified native names both emitters build on. The naming rules are a
//! link-compatibility contract: `ctype` and `symbol` must stay stable or
//! existing consumers of generated libraries stop resolving.

use crate::naming::capitalize;
use crate::schema::ClassDef;

/// Opaque C type name: capitalized namespace plus typename.
///
/// `frc` + `Pose2d` becomes `FrcPose2d`.
pub fn ctype(class: &ClassDef) -> String {
    format!("{}{}", capitalize(&class.namespace), class.typename)
}

/// Fully qualified native type reference, `namespace::typename`.
pub fn qualified_type(class: &ClassDef) -> String {
    format!("{}::{}", class.namespace, class.typename)
}

/// Exported symbol for a method key: namespace plus typename plus key.
///
/// `frc` + `Pose2d` + `Translation` becomes `frcPose2dTranslation`.
pub fn symbol(class: &ClassDef, key: &str) -> String {
    format!("{}{}{}", class.namespace, class.typename, key)
}

/// Map a parameter type token to its C spelling.
///
/// `cptr` and `const-cptr` become pointers to the opaque type; any other
/// token passes through unchanged and is assumed to already be a valid
/// C type name.
pub fn map_param_type(class: &ClassDef, token: &str) -> String {
    match token {
        "cptr" => format!("{}*", ctype(class)),
        "const-cptr" => format!("const {}*", ctype(class)),
        other => other.to_string(),
    }
}

/// Map a return type token to its C spelling.
///
/// Absent or `void` means no return value; `cptr` becomes a pointer to the
/// opaque type; anything else passes through.
pub fn map_return_type(class: &ClassDef, token: Option<&str>) -> String {
    match token {
        None | Some("void") => "void".to_string(),
        Some("cptr") => format!("{}*", ctype(class)),
        Some(other) => other.to_string(),
    }
}
