//! Deep merge of output mappings.
//!
//! Mappings are folded left to right:
//! - a key missing from the accumulator is copied in as-is
//! - a key holding a mapping on both sides is merged recursively
//! - a key holding a mapping in the accumulator but a non-mapping incoming is
//!   merged as `{key: incoming}`, one level deeper
//! - a key holding a non-mapping in the accumulator keeps its first value

use serde_json::map::Entry;
use serde_json::{Map, Value};

/// Merge all `maps` into a fresh mapping. No input yields an empty mapping.
pub fn deep_merge<I>(maps: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    let mut out = Map::new();
    for map in maps {
        merge_into(&mut out, map);
    }
    out
}

/// Fold `incoming` into `out` in place.
pub fn merge_into(out: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match out.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => {
                let nested = match value {
                    Value::Object(map) => map,
                    other => {
                        let mut wrapped = Map::with_capacity(1);
                        wrapped.insert(slot.key().clone(), other);
                        wrapped
                    }
                };
                if let Value::Object(existing) = slot.get_mut() {
                    merge_into(existing, nested);
                }
            }
        }
    }
}
