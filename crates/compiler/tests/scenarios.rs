//! End-to-end compile scenarios.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use stencil_compiler::{CompileError, Compiler, Node, Registry, compile, set_diagnostics, transform};
use stencil_validator::prelude::*;

fn node(value: Value) -> Node {
    Node::try_from(value).unwrap()
}

fn schema_of(value: Value) -> Schema {
    transform(&node(value)).unwrap().into_schema().unwrap()
}

// ============================================================================
// BOUNDED NUMBER
// ============================================================================

#[rstest]
#[case(Some(json!(50)), true)]
#[case(Some(json!(500)), true)]
#[case(Some(json!(123.5)), true)]
#[case(Some(json!(49)), false)]
#[case(Some(json!(501)), false)]
#[case(Some(json!("100")), false)]
#[case(Some(json!(true)), false)]
#[case(Some(json!(null)), false)]
#[case(None, false)]
fn bounded_number(#[case] input: Option<Value>, #[case] valid: bool) {
    let schema = schema_of(json!([
        ["stencil.number"],
        ["stencil.required"],
        ["stencil.min", 50],
        ["stencil.max", 500]
    ]));
    assert_eq!(schema.is_valid_opt(input.as_ref()), valid);
}

// ============================================================================
// BARE MAPPING
// ============================================================================

fn form() -> Value {
    json!({
        "test": [["stencil.number"], ["stencil.required"], ["stencil.max", 500]],
        "name": [["stencil.string"], ["stencil.required"], ["stencil.min", 4], ["stencil.max", 12]]
    })
}

#[rstest]
#[case(json!({"test": 500, "name": "1234"}), true)]
#[case(json!({"test": 500, "name": "123"}), false)]
#[case(json!({"test": 501, "name": "1234"}), false)]
#[case(json!({}), false)]
#[case(json!([]), false)]
fn bare_mapping(#[case] input: Value, #[case] valid: bool) {
    assert_eq!(schema_of(form()).is_valid(&input), valid);
}

#[test]
fn bare_mapping_is_required_object() {
    let schema = schema_of(form());
    assert!(!schema.is_valid_opt(None));
    assert!(!schema.is_valid(&json!(null)));
}

#[test]
fn bare_mapping_matches_explicit_chain() {
    let implicit = schema_of(form());
    let explicit = schema_of(json!([
        ["stencil.object"],
        ["stencil.required"],
        ["stencil.shape", form()]
    ]));

    assert_eq!(implicit.describe(), explicit.describe());
    for doc in [
        json!({"test": 1, "name": "abcd"}),
        json!({"test": 1, "name": "abc"}),
        json!({"name": "abcd"}),
        json!("nope"),
    ] {
        assert_eq!(implicit.is_valid(&doc), explicit.is_valid(&doc), "{doc}");
    }
}

#[test]
fn shape_keeps_exactly_the_input_keys() {
    let first = schema_of(json!({"a": [["stencil.string"]], "b": {"c": [["stencil.number"]]}}));
    let second = schema_of(json!({"b": {"c": [["stencil.number"]]}, "a": [["stencil.string"]]}));

    let fields: Vec<_> = first.fields().unwrap().keys().cloned().collect();
    assert_eq!(fields, vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(first.describe(), second.describe());
}

#[test]
fn nested_mapping_is_optional_object() {
    let schema = schema_of(json!({"inner": {"flag": [["stencil.boolean"], ["stencil.required"]]}}));
    assert!(schema.is_valid(&json!({})));
    assert!(schema.is_valid(&json!({"inner": {"flag": false}})));
    assert!(!schema.is_valid(&json!({"inner": {}})));

    let err = schema.validate(&json!({"inner": {"flag": "yes"}})).unwrap_err();
    let flattened = err.flatten();
    let leaf = flattened.iter().find(|e| e.code == "type_mismatch").unwrap();
    assert_eq!(leaf.field.as_deref(), Some("inner.flag"));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn unresolved_name_fails_compile() {
    let input = node(json!([["number"], ["required"]]));
    // Without the marker nothing is an invocation at all.
    assert!(compile(&input).unwrap().is_list());

    let input = node(json!([["stencil.numbr"], ["stencil.required"]]));
    let err = compile(&input).unwrap_err();
    assert!(matches!(err, CompileError::NameResolution { ref name } if name == "stencil.numbr"));
}

#[test]
fn unresolved_name_is_wrapped_by_transform() {
    let input = json!([["stencil.number"], ["lookup"]]);
    let err = transform(&node(input.clone())).unwrap_err();

    let CompileError::Compilation { node, source } = &err else {
        panic!("expected a compilation error, got {err:?}");
    };
    assert_eq!(node, &input.to_string());
    assert!(matches!(**source, CompileError::NameResolution { ref name } if name == "lookup"));
    assert!(err.to_string().contains("cannot resolve invocation name `lookup`"));
}

#[test]
fn numeric_pattern_is_argument_shape_error() {
    let input = node(json!([["stencil.string"], ["stencil.matches", 42]]));
    let err = compile(&input).unwrap_err();
    assert!(matches!(err, CompileError::ArgumentShape { ref builder, .. } if builder == "matches"));

    let err = transform(&input).unwrap_err();
    assert!(err.node().is_some());
}

#[test]
fn build_errors_are_not_wrapped() {
    let input = node(json!([["stencil.number"], ["stencil.min", "five"]]));
    let err = transform(&input).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Build(BuildError::InvalidArgument { ref builder, position: 0, .. }) if builder == "min"
    ));
}

#[test]
fn member_on_wrong_kind_is_unresolved() {
    let input = node(json!([["stencil.boolean"], ["stencil.matches", "^a$"]]));
    let err = compile(&input).unwrap_err();
    assert!(matches!(err, CompileError::NameResolution { .. }));
}

// ============================================================================
// ARGUMENT FORMS
// ============================================================================

#[rstest]
#[case(json!("abc"), true)]
#[case(json!("ABC"), false)]
#[case(json!("ab1"), false)]
fn pattern_from_string(#[case] input: Value, #[case] valid: bool) {
    let schema = schema_of(json!([["stencil.string"], ["stencil.matches", "^[a-z]+$"]]));
    assert_eq!(schema.is_valid(&input), valid);
}

#[test]
fn pattern_from_regex_literal_with_message() {
    let schema = schema_of(json!([
        ["stencil.string"],
        ["stencil.matches", {"$regex": "^[a-z]+$", "$flags": "i"}, "letters only"]
    ]));
    assert!(schema.is_valid(&json!("ABC")));

    let err = schema.validate(&json!("A1")).unwrap_err();
    assert_eq!(err.message, "letters only");
}

#[test]
fn array_of_chained_elements() {
    let schema = schema_of(json!([
        ["stencil.array", [["stencil.string"], ["stencil.min", 2]]],
        ["stencil.required"],
        ["stencil.max", 3]
    ]));
    assert!(schema.is_valid(&json!(["ab", "cd"])));
    assert!(!schema.is_valid(&json!(["ab", "c"])));
    assert!(!schema.is_valid(&json!(["ab", "cd", "ef", "gh"])));
}

#[test]
fn one_of_values_and_references() {
    let schema = schema_of(json!({
        "role": [["stencil.string"], ["stencil.oneOf", ["admin", "user"], "Pick a role"]],
        "password": [["stencil.string"], ["stencil.required"]],
        "confirm": [["stencil.string"], ["stencil.oneOf", [null, ["stencil.ref", "password"]]]]
    }));

    assert!(schema.is_valid(&json!({"role": "admin", "password": "pw", "confirm": "pw"})));
    assert!(!schema.is_valid(&json!({"password": "pw", "confirm": "other"})));

    let err = schema
        .validate(&json!({"role": "root", "password": "pw"}))
        .unwrap_err();
    let messages: Vec<_> = err.nested.iter().map(|e| e.message.to_string()).collect();
    assert_eq!(messages, vec!["Pick a role".to_owned()]);
}

#[test]
fn reference_led_one_of_keeps_trailing_message() {
    let schema = schema_of(json!({
        "password": [["stencil.string"], ["stencil.required"]],
        "confirm": [
            ["stencil.string"],
            ["stencil.oneOf", [["stencil.ref", "password"], null], "Passwords must match"]
        ]
    }));

    assert!(schema.is_valid(&json!({"password": "secret", "confirm": "secret"})));
    assert!(!schema.is_valid(&json!({"password": "secret", "confirm": "Passwords must match"})));

    let err = schema
        .validate(&json!({"password": "secret", "confirm": "other"}))
        .unwrap_err();
    let messages: Vec<_> = err.nested.iter().map(|e| e.message.to_string()).collect();
    assert_eq!(messages, vec!["Passwords must match".to_owned()]);
}

#[test]
fn integral_float_length_bound() {
    let schema = schema_of(json!([["stencil.string"], ["stencil.min", 4.0]]));
    assert!(schema.is_valid(&json!("abcd")));
    assert!(!schema.is_valid(&json!("abc")));
}

#[test]
fn zero_bound_survives_falsy_argument_rule() {
    let schema = schema_of(json!([["stencil.number"], ["stencil.min", 0]]));
    assert!(schema.is_valid(&json!(0)));
    assert!(!schema.is_valid(&json!(-1)));
}

#[test]
fn plain_list_compiles_items_independently() {
    let term = compile(&node(json!([1, ["stencil.string"], {"a": [["stencil.number"]]}]))).unwrap();
    let items = term.as_list().unwrap();
    assert_eq!(items[0].as_literal(), Some(&json!(1)));
    assert!(items[1].as_schema().is_some());
    assert!(items[2].as_shape().is_some());
}

// ============================================================================
// CONFIGURATION AND REGISTRY
// ============================================================================

#[test]
fn custom_marker() {
    let compiler = Compiler::builder().marker("y.").build().unwrap();
    let schema = compiler
        .transform(&node(json!({"n": [["y.number"], ["y.required"]]})))
        .unwrap()
        .into_schema()
        .unwrap();
    assert!(schema.is_valid(&json!({"n": 1})));

    let term = compiler.compile(&node(json!([["stencil.number"]]))).unwrap();
    assert!(term.is_list());
}

#[test]
fn custom_builder_wins_over_library() {
    let registry = Registry::new()
        .with("slug", |_| {
            let pattern = regex::Regex::new("^[a-z0-9-]+$").unwrap();
            Ok(Schema::string().rule(matches(pattern)).into())
        })
        .with("stencil.number", |_| Ok(Schema::string().into()))
        .with("handle", |_| {
            let handle = Predicate::new("handle", "Must start with @", |v| {
                v.as_str().is_none_or(|s| s.starts_with('@'))
            });
            Ok(Schema::string().rule(handle).into())
        });
    let compiler = Compiler::builder().registry(registry).build().unwrap();

    let handle = compiler
        .transform(&node(json!({"user": [["stencil.handle"], ["stencil.min", 2]]})))
        .unwrap()
        .into_schema()
        .unwrap();
    assert!(handle.is_valid(&json!({"user": "@ada"})));
    let err = handle.validate(&json!({"user": "ada"})).unwrap_err();
    assert_eq!(err.nested[0].code, "handle");
    assert_eq!(err.nested[0].message, "Must start with @");

    let schema = compiler
        .transform(&node(json!({"id": [["stencil.slug"], ["stencil.required"]]})))
        .unwrap()
        .into_schema()
        .unwrap();
    assert!(schema.is_valid(&json!({"id": "hello-world"})));
    assert!(!schema.is_valid(&json!({"id": "Hello World"})));

    let shadowed = compiler
        .compile(&node(json!(["stencil.number"])))
        .unwrap()
        .into_schema()
        .unwrap();
    assert_eq!(shadowed.tag(), KindTag::String);
}

#[test]
fn custom_builder_errors_are_build_errors() {
    let registry = Registry::new().with("broken", |_| Err(BuildError::custom("broken builder")));
    let compiler = Compiler::builder().registry(registry).build().unwrap();
    let err = compiler.transform(&node(json!([["stencil.broken"]]))).unwrap_err();
    assert_eq!(err.to_string(), "broken builder");
}

#[test]
fn diagnostics_do_not_change_output() {
    let input = form();
    set_diagnostics(true);
    let with = schema_of(input.clone()).describe();
    set_diagnostics(false);
    let without = schema_of(input).describe();
    assert_eq!(with, without);
}

#[test]
fn concurrent_compilations() {
    let compiler = Compiler::new();
    let input = node(form());
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| compiler.transform(&input).unwrap().into_schema().unwrap()))
            .collect();
        for handle in handles {
            let schema = handle.join().unwrap();
            assert!(schema.is_valid(&json!({"test": 1, "name": "abcd"})));
        }
    });
}

#[test]
fn resolving_twice_behaves_the_same() {
    let compiler = Compiler::new();
    let context = Term::Schema(Schema::number());
    let name = Node::from("stencil.max");
    let first = compiler.resolve(&name, Some(&context)).unwrap();
    let second = compiler.resolve(&name, Some(&context)).unwrap();

    let args = || vec![Term::Literal(json!(10))];
    let a = first.call(args()).unwrap().into_schema().unwrap();
    let b = second.call(args()).unwrap().into_schema().unwrap();
    for value in [json!(9), json!(10), json!(11)] {
        assert_eq!(a.is_valid(&value), b.is_valid(&value));
    }
}
