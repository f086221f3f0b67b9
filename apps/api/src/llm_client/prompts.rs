// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains the cross-cutting template renderer.

/// Fills `{name}` placeholders in `template` from `vars` in a single pass.
///
/// Substituted text is never re-scanned, so user-supplied resume or job text
/// containing braces cannot pull in other variables. Unknown placeholders are
/// left as written.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template_replaces_known_placeholders() {
        let rendered = render_template(
            "Hello {name}, welcome to {place}.",
            &[("name", "Ada"), ("place", "Acme")],
        );
        assert_eq!(rendered, "Hello Ada, welcome to Acme.");
    }

    #[test]
    fn test_render_template_does_not_rescan_substituted_text() {
        let rendered = render_template(
            "{resume} | {culture}",
            &[("resume", "I wrote {culture}"), ("culture", "open")],
        );
        assert_eq!(rendered, "I wrote {culture} | open");
    }

    #[test]
    fn test_render_template_leaves_unknown_and_unbalanced_braces() {
        let rendered = render_template("{\"question\": {x}} and {unclosed", &[("x", "1")]);
        assert_eq!(rendered, "{\"question\": 1} and {unclosed");
    }
}
