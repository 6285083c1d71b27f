use serde_json::{json, Value};

use crate::refusal::RefusalCode;

const REFUSAL_CODES: [RefusalCode; 4] = [
    RefusalCode::Config,
    RefusalCode::Generate,
    RefusalCode::Io,
    RefusalCode::UnsafePath,
];

/// Return the compiled-in operator manifest for `--describe`.
pub fn operator_json() -> Value {
    let refusal_codes: serde_json::Map<String, Value> = REFUSAL_CODES
        .iter()
        .map(|code| (code.as_str().to_string(), json!(code.default_message())))
        .collect();

    json!({
        "name": "iconset",
        "schema_version": "operator.v0",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Resolve icon sources per platform, write generated favicon artifacts, and inject their HTML tags.",
        "output_mode": "mixed",
        "subcommands": {
            "build": {
                "description": "Generate and write all artifacts, then print the build summary",
                "output_mode": "directory_artifact",
                "exit_codes": {
                    "0": "BUILT",
                    "2": "REFUSAL"
                }
            },
            "resolve": {
                "description": "Print the resolved per-platform source mapping",
                "output_mode": "report",
                "exit_codes": {
                    "0": "OK",
                    "2": "REFUSAL"
                }
            },
            "inject": {
                "description": "Insert generated tags before </head> of an HTML document",
                "output_mode": "document",
                "exit_codes": {
                    "0": "OK",
                    "2": "REFUSAL"
                }
            },
            "normalize": {
                "description": "Normalize a destination path",
                "output_mode": "status",
                "exit_codes": {
                    "0": "OK"
                }
            }
        },
        "refusal_codes": refusal_codes,
        "global_flags": ["--describe", "--version", "--verbose"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_manifest_has_required_fields() {
        let op = operator_json();
        assert_eq!(op["name"], "iconset");
        assert_eq!(op["schema_version"], "operator.v0");
        assert_eq!(op["output_mode"], "mixed");
        assert!(op["version"].as_str().is_some());
    }

    #[test]
    fn operator_manifest_has_all_subcommands() {
        let op = operator_json();
        let subs = op["subcommands"].as_object().unwrap();
        for name in ["build", "resolve", "inject", "normalize"] {
            assert!(subs.contains_key(name), "missing {name}");
        }
        assert_eq!(subs.len(), 4);
    }

    #[test]
    fn operator_manifest_lists_every_refusal_code() {
        let op = operator_json();
        let codes = op["refusal_codes"].as_object().unwrap();
        assert_eq!(codes.len(), 4);
        assert_eq!(codes["E_UNSAFE_PATH"], RefusalCode::UnsafePath.default_message());
        assert!(codes.contains_key("E_CONFIG"));
        assert!(codes.contains_key("E_GENERATE"));
        assert!(codes.contains_key("E_IO"));
    }

    #[test]
    fn operator_manifest_has_exit_codes() {
        let op = operator_json();
        let build = &op["subcommands"]["build"]["exit_codes"];
        assert_eq!(build["0"], "BUILT");
        assert_eq!(build["2"], "REFUSAL");
        assert!(op["subcommands"]["normalize"]["exit_codes"]["2"].is_null());
    }
}
