//! Integration tests for the pattern compiler.
//!
//! Tests cover: tokenizing, recognizer options, parameter capture, template
//! rendering, and agreement between recognizers and templates compiled from
//! the same pattern.

use std::collections::HashMap;

use pathmatch_core::PathMatchError;
use pathmatch_pattern::{compile_pattern, compile_template, parse, CompileOptions, Token};

const PREFIX: CompileOptions = CompileOptions::new(false, false, false);
const EXACT: CompileOptions = CompileOptions::new(true, false, false);

// ═════════════════════════════════════════════════════════════════════
// 1. Tokenizing
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_tokens_for_mixed_pattern() {
    let tokens = parse(r"/blog/:year(\d{4})/:slug?");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], Token::Literal("/blog".into()));
    let year = tokens[1].as_key().unwrap();
    assert_eq!(year.name, "year");
    assert_eq!(year.pattern, r"\d{4}");
    let slug = tokens[2].as_key().unwrap();
    assert!(slug.optional);
}

// ═════════════════════════════════════════════════════════════════════
// 2. Recognizers
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_recognizer_prefix_vs_exact() {
    let (prefix, _) = compile_pattern("/users/:id", PREFIX).unwrap();
    let (exact, _) = compile_pattern("/users/:id", EXACT).unwrap();

    assert_eq!(prefix.exec("/users/42/edit").unwrap().matched(), "/users/42");
    assert!(exact.exec("/users/42/edit").is_none());
    assert_eq!(exact.exec("/users/42").unwrap().matched(), "/users/42");
}

#[test]
fn test_recognizer_reports_options() {
    let options = CompileOptions::new(true, true, true);
    let (recognizer, keys) = compile_pattern("/a/:b", options).unwrap();
    assert_eq!(recognizer.options(), options);
    assert_eq!(recognizer.key_count(), keys.len());
    assert_eq!(options.discriminator(), "truetruetrue");
}

#[test]
fn test_recognizer_values_follow_declaration_order() {
    let (recognizer, keys) = compile_pattern("/:org/:repo/tree/:branch", EXACT).unwrap();
    let m = recognizer.exec("/rust-lang/regex/tree/main").unwrap();
    let pairs: Vec<_> = keys
        .iter()
        .zip(m.values())
        .map(|(k, v)| (k.name.as_str(), v.unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![("org", "rust-lang"), ("repo", "regex"), ("branch", "main")]
    );
}

#[test]
fn test_recognizer_rejects_bad_custom_group() {
    let err = compile_pattern("/:id([a-)", PREFIX).unwrap_err();
    assert!(matches!(err, PathMatchError::InvalidPattern(_)));
}

// ═════════════════════════════════════════════════════════════════════
// 3. Templates
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_template_render_and_errors() {
    let template = compile_template(r"/posts/:id(\d+)").unwrap();

    let mut params = HashMap::new();
    params.insert("id", "12");
    assert_eq!(template.render(&params).unwrap(), "/posts/12");

    params.insert("id", "twelve");
    assert!(template.render(&params).unwrap_err().is_parameter_error());

    let empty: HashMap<&str, &str> = HashMap::new();
    assert_eq!(
        template.render(&empty).unwrap_err().to_string(),
        "Missing parameter: expected \"id\" to be defined"
    );
}

// ═════════════════════════════════════════════════════════════════════
// 4. Recognizer and template agree
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_rendered_path_is_recognized() {
    let patterns = [
        ("/users/:id", vec![("id", "42")]),
        ("/:org/:repo", vec![("org", "a"), ("repo", "b")]),
        (r"/posts/:year(\d+)/:slug", vec![("year", "2024"), ("slug", "hello")]),
        ("/files/:name.:ext", vec![("name", "report"), ("ext", "pdf")]),
    ];

    for (pattern, values) in patterns {
        let map: HashMap<&str, &str> = values.iter().copied().collect();
        let path = compile_template(pattern).unwrap().render(&map).unwrap();

        let (recognizer, keys) = compile_pattern(pattern, EXACT).unwrap();
        let m = recognizer
            .exec(&path)
            .unwrap_or_else(|| panic!("{path} should match {pattern}"));
        assert_eq!(m.matched(), path);
        for (index, key) in keys.iter().enumerate() {
            assert_eq!(m.value(index), map.get(key.name.as_str()).copied());
        }
    }
}
