//! Tests for `{{name}}` placeholder substitution.

use serde_json::json;
use tintlog::fmt::{render_value, substitute};
use tintlog::Context;

#[test]
fn empty_context_leaves_message() {
    assert_eq!(
        substitute("{{variable}} in message", &Context::new()),
        "{{variable}} in message"
    );
}

#[test]
fn replaces_known_variable() {
    let ctx = Context::new().with("variable", "food");
    assert_eq!(substitute("{{variable}} in message", &ctx), "food in message");
}

#[test]
fn keeps_unknown_variable() {
    let ctx = Context::new().with("variable", "food");
    assert_eq!(
        substitute("{{variable}} in {{message}}", &ctx),
        "food in {{message}}"
    );
}

#[test]
fn replaces_every_occurrence() {
    let ctx = Context::new()
        .with("variable", "food")
        .with("message", "message");
    assert_eq!(
        substitute("{{variable}} in {{message}}, {{variable}}", &ctx),
        "food in message, food"
    );
}

#[test]
fn zero_and_null_render_literally() {
    let ctx = Context::new().with("variable", 0);
    assert_eq!(substitute("0 === {{variable}}", &ctx), "0 === 0");

    let ctx = Context::new().with("variable", json!(null));
    assert_eq!(substitute("null === {{variable}}", &ctx), "null === null");
}

#[test]
fn key_match_is_case_sensitive() {
    let ctx = Context::new().with("name", "ada");
    assert_eq!(substitute("{{Name}} {{name}} {{NAME}}", &ctx), "{{Name}} ada {{NAME}}");

    let ctx = Context::new().with("Name", "ada");
    assert_eq!(substitute("{{Name}}", &ctx), "ada");
}

#[test]
fn only_identifier_tokens_match() {
    let ctx = Context::new().with("a1", "x").with("1a", "y").with("a_b", "z");
    assert_eq!(substitute("{{a1}}", &ctx), "x");
    assert_eq!(substitute("{{1a}}", &ctx), "{{1a}}");
    assert_eq!(substitute("{{a_b}}", &ctx), "{{a_b}}");
    assert_eq!(substitute("{{ a1 }}", &ctx), "{{ a1 }}");
    assert_eq!(substitute("{a1}", &ctx), "{a1}");
}

#[test]
fn replacement_is_not_rescanned() {
    let ctx = Context::new().with("a", "{{b}}").with("b", "nope");
    assert_eq!(substitute("{{a}}", &ctx), "{{b}}");
}

#[test]
fn idempotent_without_matching_keys() {
    let ctx = Context::new().with("other", 1);
    let once = substitute("keep {{this}} and {{that}}", &ctx);
    assert_eq!(substitute(&once, &ctx), once);
}

#[test]
fn scalar_values_render_naturally() {
    assert_eq!(render_value(&json!(true)), "true");
    assert_eq!(render_value(&json!(-12)), "-12");
    assert_eq!(render_value(&json!(1.5)), "1.5");
    assert_eq!(render_value(&json!("plain")), "plain");
}

#[test]
fn compound_values_render_shallow() {
    assert_eq!(render_value(&json!([1, "two", null])), "1,two,null");
    assert_eq!(render_value(&json!({"a": 1})), "[object]");
    assert_eq!(render_value(&json!([{"a": 1}])), "[object]");
}

#[test]
fn context_from_iterator() {
    let ctx: Context = [("x", "cool"), ("y", "warm")].into_iter().collect();
    assert_eq!(ctx.len(), 2);
    assert_eq!(substitute("{{x}}/{{y}}", &ctx), "cool/warm");
}
