//! ESTree JSON rendering of a parsed program.

use crate::ParserConfig;
use ast::Program;
use global_common::{BytePos, LineIndex};
use serde_json::{json, Value};

/// Renders `program` as ESTree JSON, applying the `ranges` and `locations`
/// output switches. `src` must be the text the program was parsed from; it
/// is only consulted when `locations` is on.
pub fn to_value(program: &Program, src: &str, config: &ParserConfig) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(program)?;

    let line_index = if config.locations {
        Some(LineIndex::new(src))
    } else {
        None
    };

    rewrite_spans(&mut value, config.ranges, line_index.as_ref());

    Ok(value)
}

/// Every serialized node carries numeric `start`/`end` from its flattened
/// span. Attach `loc` and strip the offsets as the switches dictate.
fn rewrite_spans(value: &mut Value, ranges: bool, line_index: Option<&LineIndex>) {
    match value {
        Value::Object(map) => {
            let span = match (offset(map.get("start")), offset(map.get("end"))) {
                (Some(start), Some(end)) => Some((start, end)),
                _ => None,
            };

            for (_, v) in map.iter_mut() {
                rewrite_spans(v, ranges, line_index);
            }

            if let Some((start, end)) = span {
                if let Some(index) = line_index {
                    map.insert("loc".into(), loc_value(index, start, end));
                }
                if !ranges {
                    map.remove("start");
                    map.remove("end");
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_spans(item, ranges, line_index);
            }
        }
        _ => {}
    }
}

fn offset(value: Option<&Value>) -> Option<u32> {
    value.and_then(Value::as_u64).map(|n| n as u32)
}

fn loc_value(index: &LineIndex, start: u32, end: u32) -> Value {
    let lo = index.lookup(BytePos(start));
    let hi = index.lookup(BytePos(end));
    json!({
        "start": { "line": lo.line, "column": lo.col },
        "end": { "line": hi.line, "column": hi.col },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str, config: ParserConfig) -> Program {
        crate::parse_program(src, config).unwrap()
    }

    #[test]
    fn offsets_stripped_by_default() {
        let config = ParserConfig::default();
        let value = to_value(&parse("a", config), "a", &config).unwrap();

        assert_eq!(value["type"], "Program");
        assert!(value.get("start").is_none());
        assert!(value["body"][0].get("end").is_none());
    }

    #[test]
    fn ranges_kept_when_requested() {
        let config = ParserConfig {
            ranges: true,
            ..Default::default()
        };
        let value = to_value(&parse("a + b", config), "a + b", &config).unwrap();

        let expr = &value["body"][0]["expression"];
        assert_eq!(expr["start"], 0);
        assert_eq!(expr["end"], 5);
    }

    #[test]
    fn locations_use_one_based_lines() {
        let src = "a;\nb;";
        let config = ParserConfig {
            locations: true,
            ..Default::default()
        };
        let value = to_value(&parse(src, config), src, &config).unwrap();

        let second = &value["body"][1];
        assert_eq!(second["loc"]["start"]["line"], 2);
        assert_eq!(second["loc"]["start"]["column"], 0);
    }
}
