//! A compiled chain behaves exactly like calling the same builders by hand.

use proptest::prelude::*;
use serde_json::{Value, json};
use stencil_compiler::{Node, compile};
use stencil_validator::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Min(i32),
    Max(i32),
    MoreThan(i32),
    Integer,
    Positive,
    Required,
    Nullable,
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::MoreThan(_) => "moreThan",
            Self::Integer => "integer",
            Self::Positive => "positive",
            Self::Required => "required",
            Self::Nullable => "nullable",
        }
    }

    fn args(&self) -> Vec<Value> {
        match self {
            Self::Min(n) | Self::Max(n) | Self::MoreThan(n) => vec![json!(n)],
            _ => vec![],
        }
    }

    fn invocation(&self) -> Value {
        let mut items = vec![json!(format!("stencil.{}", self.name()))];
        items.extend(self.args());
        Value::Array(items)
    }
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (-50i32..50).prop_map(Step::Min),
        (-50i32..50).prop_map(Step::Max),
        (-50i32..50).prop_map(Step::MoreThan),
        Just(Step::Integer),
        Just(Step::Positive),
        Just(Step::Required),
        Just(Step::Nullable),
    ]
}

fn input() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        (-100i32..100).prop_map(|n| Some(json!(n))),
        (-100.0f64..100.0).prop_map(|n| Some(json!(n))),
        Just(Some(Value::Null)),
        Just(Some(json!("12"))),
        Just(None),
    ]
}

fn by_hand(steps: &[Step]) -> Schema {
    let library = Library::new();
    let mut term = library.call_root("number", vec![]).unwrap().unwrap();
    for step in steps {
        let args = step.args().into_iter().map(Term::Literal).collect();
        let schema = term.into_schema().unwrap();
        term = library.call_member(schema, step.name(), args).unwrap().unwrap();
    }
    term.into_schema().unwrap()
}

fn compiled(steps: &[Step]) -> Schema {
    let mut chain = vec![json!(["stencil.number"])];
    chain.extend(steps.iter().map(Step::invocation));
    let node = Node::try_from(Value::Array(chain)).unwrap();
    compile(&node).unwrap().into_schema().unwrap()
}

proptest! {
    #[test]
    fn chain_matches_manual_calls(
        steps in prop::collection::vec(step(), 0..6),
        values in prop::collection::vec(input(), 1..8),
    ) {
        let expected = by_hand(&steps);
        let actual = compiled(&steps);
        prop_assert_eq!(actual.describe(), expected.describe());
        for value in &values {
            prop_assert_eq!(
                actual.is_valid_opt(value.as_ref()),
                expected.is_valid_opt(value.as_ref()),
                "value {:?}", value
            );
        }
    }
}
