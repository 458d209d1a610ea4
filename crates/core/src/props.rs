//! Property bags passed to components and the merge that builds invocation arguments.

use serde_json::{Map, Value};

/// Ordered mapping of prop names to values.
pub type Props = Map<String, Value>;

/// Ordered mapping of raw slot identifiers to slot content.
pub type Slots = Map<String, Value>;

/// Key under which the default slot content reaches a component.
pub const CHILDREN_PROP: &str = "children";

/// Builds the single argument a component is invoked with.
///
/// Later sources override earlier ones: `props`, then the normalized `slots`,
/// then `children`. The inputs are copied, never mutated.
pub fn merge_props(props: &Props, slots: &Props, children: Value) -> Props {
    let mut merged = props.clone();
    for (key, value) in slots {
        merged.insert(key.clone(), value.clone());
    }
    merged.insert(CHILDREN_PROP.to_string(), children);
    merged
}
