/// Derive the exported type name for a schema entry.
///
/// Rules: strip one trailing `schema` token (with its separating underscore,
/// if any), then capitalise each remaining underscore-separated segment and
/// concatenate. The transform is a pure function of the entry name, so two
/// runs over the same roster always derive the same identifiers.
pub fn derive_type_name(name: &str) -> String {
    strip_schema_suffix(name)
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Derive the output file name for a schema entry.
///
/// Strips the trailing `schema` token and appends the Rust source suffix.
/// Underscores are kept: generated files follow module naming, so they can be
/// included verbatim.
pub fn derive_output_file(name: &str) -> String {
    format!("{}.rs", strip_schema_suffix(name))
}

/// Strip exactly one trailing `schema` token. Names that consist of nothing
/// but the token are returned unchanged rather than collapsing to "".
fn strip_schema_suffix(name: &str) -> &str {
    let stripped = name
        .strip_suffix("_schema")
        .or_else(|| name.strip_suffix("schema"))
        .map(|base| base.trim_end_matches('_'))
        .unwrap_or(name);

    if stripped.is_empty() {
        name
    } else {
        stripped
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_output_file, derive_type_name};

    #[test]
    fn derives_simple_type_name() {
        assert_eq!(derive_type_name("client_schema"), "Client");
        assert_eq!(derive_type_name("user_schema"), "User");
    }

    #[test]
    fn pascal_cases_every_segment() {
        assert_eq!(derive_type_name("document_metadata_schema"), "DocumentMetadata");
        assert_eq!(derive_type_name("co_applicant_schema"), "CoApplicant");
    }

    #[test]
    fn squashed_and_separated_names_stay_distinct() {
        let squashed = derive_type_name("documentmetadata_schema");
        let separated = derive_type_name("document_metadata_schema");
        assert_eq!(squashed, "Documentmetadata");
        assert_eq!(separated, "DocumentMetadata");
        assert_ne!(squashed, separated);
    }

    #[test]
    fn strips_bare_schema_token() {
        assert_eq!(derive_type_name("assessmentschema"), "Assessment");
    }

    #[test]
    fn name_that_is_only_the_token_survives() {
        assert_eq!(derive_type_name("schema"), "Schema");
        assert_eq!(derive_output_file("schema"), "schema.rs");
    }

    #[test]
    fn derives_output_file() {
        assert_eq!(derive_output_file("client_schema"), "client.rs");
        assert_eq!(derive_output_file("documentmetadata_schema"), "documentmetadata.rs");
    }

    #[test]
    fn derivation_is_stable_across_calls() {
        for _ in 0..3 {
            assert_eq!(derive_type_name("widget_schema"), "Widget");
            assert_eq!(derive_output_file("widget_schema"), "widget.rs");
        }
    }
}
