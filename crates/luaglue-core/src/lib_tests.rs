#![allow(non_snake_case)]

use super::*;

#[test]
fn Format___from_str___parses_recognized_formats() {
    assert_eq!("native".parse::<Format>().unwrap(), Format::Native);
    assert_eq!("wrapper".parse::<Format>().unwrap(), Format::Wrapper);
}

#[test]
fn Format___from_str___rejects_unknown_format() {
    let result = "java".parse::<Format>();

    assert!(matches!(result, Err(GenError::UnsupportedFormat(_))));
}

#[test]
fn Format___extension___maps_to_output_extension() {
    assert_eq!(Format::Native.extension(), "cpp");
    assert_eq!(Format::Wrapper.extension(), "lua");
}

#[test]
fn generate___dispatches_on_format() {
    let class = ClassDef::from_str(
        r#"
namespace: frc
typename: Pose2d
header: frc/geometry/Pose2d.h
methods:
  Translation:
    return_type: cptr
"#,
    )
    .unwrap();

    let native = generate(&class, Format::Native, "luabot-wpic").unwrap();
    let wrapper = generate(&class, Format::Wrapper, "luabot-wpic").unwrap();

    assert!(native.contains("FrcPose2d* frcPose2dTranslation (FrcPose2d* self) {"));
    assert!(wrapper.contains("function Pose2d:translation()"));
    assert!(wrapper.contains("return lib.frcPose2dTranslation(self)"));
}
