use std::collections::HashMap;
use ui_text::{TextResolver, UiText};

/// Table-backed resolver; `{0}`, `{1}`, ... are positional argument slots.
struct TableResolver {
    table: HashMap<&'static str, &'static str>,
}

impl TableResolver {
    fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            table: entries.iter().copied().collect(),
        }
    }
}

impl TextResolver for TableResolver {
    fn lookup(&self, id: &str, args: &[String]) -> String {
        let Some(template) = self.table.get(id) else {
            return format!("!{id}!");
        };
        let mut resolved = (*template).to_string();
        for (position, arg) in args.iter().enumerate() {
            resolved = resolved.replace(&format!("{{{position}}}"), arg);
        }
        resolved
    }
}

#[test]
fn literal_resolves_verbatim() {
    let resolver = TableResolver::new(&[]);
    assert_eq!(UiText::literal("try again").resolve(&resolver), "try again");
}

#[test]
fn resource_resolves_through_table() {
    let resolver = TableResolver::new(&[("wrong_code", "Incorrect code")]);
    assert_eq!(UiText::resource("wrong_code").resolve(&resolver), "Incorrect code");
}

#[test]
fn resource_arguments_fill_slots() {
    let resolver = TableResolver::new(&[("attempts", "attempt {0} of {1}")]);
    let text = UiText::resource_with("attempts", vec!["2".into(), "3".into()]);
    assert_eq!(text.resolve(&resolver), "attempt 2 of 3");
}

#[test]
fn unknown_resource_uses_resolver_fallback() {
    let resolver = TableResolver::new(&[]);
    assert_eq!(UiText::resource("missing").resolve(&resolver), "!missing!");
}

#[test]
fn combined_concatenates_in_order() {
    let resolver = TableResolver::new(&[("wrong_code", "Incorrect code")]);
    let text = UiText::resource("wrong_code").and(UiText::literal(", try again"));
    assert_eq!(text.resolve(&resolver), "Incorrect code, try again");
}

#[test]
fn nested_combined_resolves_depth_first() {
    let resolver = TableResolver::new(&[("a", "A"), ("b", "B")]);
    let inner = UiText::resource("a").and(UiText::resource("b"));
    let text = UiText::literal("[").and(inner).and(UiText::literal("]"));
    assert_eq!(text.resolve(&resolver), "[AB]");
}

#[test]
fn resolution_is_repeatable() {
    // Pure projection: resolving twice gives the same string.
    let resolver = TableResolver::new(&[("wrong_code", "Incorrect code")]);
    let text = UiText::resource("wrong_code");
    assert_eq!(text.resolve(&resolver), text.resolve(&resolver));
}
