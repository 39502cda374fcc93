//! Structural before/after diffs as tagged patch operations.

use serde_json::Value;

use flipgate_core::types::DiffOp;

/// Compute a patch-style diff between two optional JSON values.
///
/// Only-`after` is a creation (one whole-value add); only-`before` is a
/// deletion (one whole-value remove). With both present, objects are
/// walked key-by-key; scalars and arrays are compared atomically and
/// produce a single replace at their path.
pub fn compute(before: Option<&Value>, after: Option<&Value>) -> Vec<DiffOp> {
    match (before, after) {
        (None, None) => Vec::new(),
        (None, Some(after)) => vec![DiffOp::Add {
            path: "/".to_string(),
            value: after.clone(),
        }],
        (Some(before), None) => vec![DiffOp::Remove {
            path: "/".to_string(),
            value: before.clone(),
        }],
        (Some(before), Some(after)) => {
            let mut ops = Vec::new();
            diff_value("", before, after, &mut ops);
            ops
        }
    }
}

fn diff_value(path: &str, before: &Value, after: &Value, ops: &mut Vec<DiffOp>) {
    if before == after {
        return;
    }

    match (before, after) {
        (Value::Object(b), Value::Object(a)) => {
            for (key, before_value) in b {
                let child = format!("{path}/{key}");
                match a.get(key) {
                    Some(after_value) => {
                        diff_value(&child, before_value, after_value, ops)
                    }
                    None => ops.push(DiffOp::Remove {
                        path: child,
                        value: before_value.clone(),
                    }),
                }
            }
            for (key, after_value) in a {
                if !b.contains_key(key) {
                    ops.push(DiffOp::Add {
                        path: format!("{path}/{key}"),
                        value: after_value.clone(),
                    });
                }
            }
        }
        _ => ops.push(DiffOp::Replace {
            path: if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            },
            before: before.clone(),
            after: after.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn creation_is_a_whole_value_add() {
        let after = json!({"status": "proposed"});
        let ops = compute(None, Some(&after));
        assert_eq!(
            ops,
            vec![DiffOp::Add {
                path: "/".to_string(),
                value: after.clone(),
            }]
        );
    }

    #[test]
    fn deletion_is_a_whole_value_remove() {
        let before = json!({"status": "proposed"});
        let ops = compute(Some(&before), None);
        assert_eq!(
            ops,
            vec![DiffOp::Remove {
                path: "/".to_string(),
                value: before.clone(),
            }]
        );
    }

    #[test]
    fn identical_values_diff_to_nothing() {
        let v = json!({"a": 1, "b": [1, 2]});
        assert!(compute(Some(&v), Some(&v)).is_empty());
    }

    #[test]
    fn structural_diff_walks_nested_objects() {
        let before = json!({"status": "proposed", "budget": {"total": 100, "held": 5}});
        let after = json!({"status": "approved", "budget": {"total": 120}, "decided": true});
        let mut ops = compute(Some(&before), Some(&after));
        ops.sort_by(|a, b| a.path().cmp(b.path()));

        assert_eq!(
            ops,
            vec![
                DiffOp::Remove {
                    path: "/budget/held".to_string(),
                    value: json!(5),
                },
                DiffOp::Replace {
                    path: "/budget/total".to_string(),
                    before: json!(100),
                    after: json!(120),
                },
                DiffOp::Add {
                    path: "/decided".to_string(),
                    value: json!(true),
                },
                DiffOp::Replace {
                    path: "/status".to_string(),
                    before: json!("proposed"),
                    after: json!("approved"),
                },
            ]
        );
    }

    #[test]
    fn arrays_replace_atomically() {
        let before = json!({"trades": ["roofing"]});
        let after = json!({"trades": ["roofing", "drywall"]});
        let ops = compute(Some(&before), Some(&after));
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], DiffOp::Replace { path, .. } if path == "/trades"));
    }

    #[test]
    fn scalar_root_replaces_at_root() {
        let ops = compute(Some(&json!(1)), Some(&json!(2)));
        assert_eq!(
            ops,
            vec![DiffOp::Replace {
                path: "/".to_string(),
                before: json!(1),
                after: json!(2),
            }]
        );
    }
}
