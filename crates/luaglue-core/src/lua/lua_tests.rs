#![allow(non_snake_case)]

use super::*;
use crate::cpp::generate_cpp;

const LIB: &str = "luabot-wpic";

fn pose2d(methods_yaml: &str) -> ClassDef {
    ClassDef::from_str(&format!(
        r#"
namespace: frc
typename: Pose2d
header: frc/geometry/Pose2d.h
methods:
{methods_yaml}
"#
    ))
    .unwrap()
}

#[test]
fn generate_lua___single_instance_method___emits_full_module() {
    let class = pose2d(
        r#"
  Translation:
    return_type: cptr
"#,
    );
    let out = generate_lua(&class, LIB).unwrap();

    assert_eq!(
        out,
        "local ffi = require ('ffi')\n\
         \n\
         ffi.cdef[[\n\
         typedef struct FrcPose2d FrcPose2d;\n\
         \n\
         void frcPose2dFree (FrcPose2d* self);\n\
         \n\
         FrcPose2d* frcPose2dTranslation(FrcPose2d* self);\n\
         ]]\n\
         \n\
         local lib = ffi.load ('luabot-wpic')\n\
         \n\
         local Pose2d = {}\n\
         local Pose2d_mt = {\n\
         \x20   __index = Pose2d\n\
         }\n\
         \n\
         function Pose2d:translation()\n\
         \x20   return lib.frcPose2dTranslation(self)\n\
         end\n\
         \n\
         ffi.metatype('FrcPose2d', Pose2d_mt)\n\
         return Pose2d\n"
    );
}

#[test]
fn generate_lua___instance_method_with_params___passes_self_first() {
    let class = pose2d(
        r#"
  RotateBy:
    return_type: cptr
    const: true
    params:
      other: const-cptr
"#,
    );
    let out = generate_lua(&class, LIB).unwrap();

    assert!(out.contains(
        "function Pose2d:rotateBy(other)\n\
         \x20   return lib.frcPose2dRotateBy(self, other)\n\
         end\n"
    ));
}

#[test]
fn generate_lua___static_method___uses_dot_syntax_without_self() {
    let class = pose2d(
        r#"
  Nearest:
    static: true
    return_type: cptr
    params:
      candidate: const-cptr
"#,
    );
    let out = generate_lua(&class, LIB).unwrap();

    assert!(out.contains(
        "function Pose2d.nearest(candidate)\n\
         \x20   return lib.frcPose2dNearest(candidate)\n\
         end\n"
    ));
}

#[test]
fn generate_lua___factory___bound_as_constructor_not_instance_method() {
    let class = pose2d(
        r#"
  New:
    factory: true
    return_type: cptr
    params:
      x: double
      y: double
      r: double
"#,
    );
    let out = generate_lua(&class, LIB).unwrap();

    assert!(out.contains(
        "function Pose2d.new(x, y, r)\n\
         \x20   return lib.frcPose2dNew(x, y, r)\n\
         end\n"
    ));
    assert!(!out.contains("Pose2d:new"));
}

#[test]
fn generate_lua___factories_precede_instance_wrappers() {
    let class = pose2d(
        r#"
  X:
    return_type: double
    const: true
  New:
    factory: true
    return_type: cptr
"#,
    );
    let out = generate_lua(&class, LIB).unwrap();

    let new_pos = out.find("function Pose2d.new()").unwrap();
    let x_pos = out.find("function Pose2d:x()").unwrap();
    assert!(new_pos < x_pos);
}

#[test]
fn generate_lua___void_method___omits_return_keyword() {
    let class = pose2d(
        r#"
  Reset: {}
"#,
    );
    let out = generate_lua(&class, LIB).unwrap();

    assert!(out.contains(
        "function Pose2d:reset()\n\
         \x20   lib.frcPose2dReset(self)\n\
         end\n"
    ));
    assert!(!out.contains("return lib."));
}

#[test]
fn generate_lua___lua_body_override___emitted_verbatim() {
    let class = pose2d(
        r#"
  Equals:
    return_type: bool
    const: true
    params:
      other: const-cptr
    lua_body: "    return lib.frcPose2dEquals(self, other) == true"
"#,
    );
    let out = generate_lua(&class, LIB).unwrap();

    assert!(out.contains(
        "function Pose2d:equals(other)\n\
         \x20   return lib.frcPose2dEquals(self, other) == true\n\
         end\n"
    ));
}

#[test]
fn generate_lua___destructor_disabled___omits_free_declaration() {
    let class = ClassDef::from_str(
        r#"
namespace: frc
typename: Translation2d
header: frc/geometry/Translation2d.h
destructor: false
"#,
    )
    .unwrap();
    let out = generate_lua(&class, LIB).unwrap();

    assert!(!out.contains("Free"));
    assert!(out.contains("typedef struct FrcTranslation2d FrcTranslation2d;"));
}

#[test]
fn generate_lua___library_name_is_configuration() {
    let class = pose2d("  {}");
    let out = generate_lua(&class, "customlib").unwrap();

    assert!(out.contains("local lib = ffi.load ('customlib')\n"));
}

#[test]
fn generate_lua___cdef_params_match_c_function_headers() {
    // Signature parity: every cdef declaration's parameter list must appear
    // character-for-character in the C translation unit.
    let class = pose2d(
        r#"
  New:
    factory: true
    return_type: cptr
    params:
      x: double
      y: double
  RotateBy:
    return_type: cptr
    const: true
    params:
      other: const-cptr
  Nearest:
    static: true
    return_type: cptr
    params:
      candidate: const-cptr
"#,
    );
    let lua = generate_lua(&class, LIB).unwrap();
    let cpp = generate_cpp(&class).unwrap();

    for (key, method) in &class.methods {
        let sig = Signature::of(&class, key, method);
        let params = sig.param_list();

        assert!(lua.contains(&format!("{} {}({});", sig.return_type, sig.symbol, params)));
        assert!(cpp.contains(&format!("{} {} ({}) {{", sig.return_type, sig.symbol, params)));
    }
}

#[test]
fn generate_lua___deterministic_across_runs() {
    let class = pose2d(
        r#"
  New:
    factory: true
    return_type: cptr
  X:
    return_type: double
    const: true
"#,
    );

    assert_eq!(
        generate_lua(&class, LIB).unwrap(),
        generate_lua(&class, LIB).unwrap()
    );
}
