use crate::engine::fanout;
use crate::merge::merge_into;
use crate::path::{DottedPath, extract, store_at};
use crate::spec::{Condition, SpecNode};
use serde_json::{Map, Value};

static ROOT: DottedPath = DottedPath::root();

/// The parts of a node that drive one evaluation.
///
/// Array fan-out evaluates each element through a copy that keeps the gating
/// and children but drops the paths, since the array was already located.
#[derive(Clone, Copy)]
pub(super) struct Step<'a> {
    pub source: &'a DottedPath,
    pub target: &'a DottedPath,
    pub group_by: &'a DottedPath,
    pub condition: Option<&'a Condition>,
    pub children: &'a [SpecNode],
}

impl<'a> Step<'a> {
    fn of(node: &'a SpecNode) -> Self {
        Self {
            source: &node.source_path,
            target: &node.target_path,
            group_by: &node.group_by,
            condition: node.condition.as_ref(),
            children: &node.children,
        }
    }

    pub(super) fn per_element(self) -> Self {
        Self {
            source: &ROOT,
            target: &ROOT,
            group_by: &ROOT,
            ..self
        }
    }
}

/// What one child contributes to its parent's mapping.
enum ChildOutcome {
    Skip,
    Merge(Map<String, Value>),
    /// A bare non-mapping with nowhere to nest: it becomes the parent's result.
    Replace(Value),
}

/// Evaluate `node` against `input`.
pub fn process(node: &SpecNode, input: &Value) -> Value {
    run(Step::of(node), input)
}

impl SpecNode {
    pub fn process(&self, input: &Value) -> Value {
        process(self, input)
    }
}

pub(super) fn run(step: Step<'_>, input: &Value) -> Value {
    if input.is_null() {
        return Value::Null;
    }

    let value = extract(input, step.source);
    match value.as_ref() {
        Value::Null => return Value::Null,
        Value::Array(items) => return fanout::process_array(step, items),
        _ => {}
    }

    if let Some(condition) = step.condition {
        if !condition.evaluate(&value) {
            tracing::trace!(source = %step.source, "condition rejected value");
            return Value::Null;
        }
    }

    // Scalars are copied through; children only apply to mappings.
    if !value.is_object() {
        return value.into_owned();
    }

    let mut merged = Map::new();
    for child in step.children {
        match evaluate_child(child, &value) {
            ChildOutcome::Skip => {}
            ChildOutcome::Merge(map) => merge_into(&mut merged, map),
            ChildOutcome::Replace(bare) => {
                tracing::trace!(child = %child.source_path, "bare child result replaces parent");
                return bare;
            }
        }
    }

    store_at(Value::Object(merged), step.target)
}

fn evaluate_child(child: &SpecNode, scope: &Value) -> ChildOutcome {
    match process(child, scope) {
        Value::Null => ChildOutcome::Skip,
        Value::Object(map) => ChildOutcome::Merge(map),
        other => match store_at(other, &child.target_path) {
            Value::Object(map) => ChildOutcome::Merge(map),
            bare => ChildOutcome::Replace(bare),
        },
    }
}
