//! `{variable}` substitution for catalog templates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Undefined variables are an error rather than an empty substitution, so a
//! typo in a catalog entry shows up in the catalog tests instead of in a
//! sent auto-reply.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// Render a template string by substituting variables.
///
/// ```
/// use ooo_reply::template::{render_template, vars};
///
/// let vars = vars([("reason", "vacation")]);
/// let result = render_template("Taking some {reason}!", &vars).unwrap();
/// assert_eq!(result, "Taking some vacation!");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(at) = rest.find(|c: char| c == '{' || c == '}') {
        let position = template.len() - rest.len() + at;
        out.push_str(&rest[..at]);
        let tail = &rest[at..];

        // Doubled braces and a lone `}` are literal.
        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let close = tail
            .find('}')
            .ok_or(TemplateError::UnmatchedBrace { position })?;
        let name = tail[1..close].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyVariableName { position });
        }
        let value = variables
            .get(name)
            .ok_or_else(|| TemplateError::UndefinedVariable {
                name: name.to_string(),
                position,
            })?;
        out.push_str(value);
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("name", "Alex"), ("backup", "Jordan")]);
        let result = render_template("Ask {backup}, not {name}.", &vars).unwrap();
        assert_eq!(result, "Ask Jordan, not Alex.");
    }

    #[test]
    fn test_no_variables() {
        let result = render_template("[REDACTED]", &HashMap::new()).unwrap();
        assert_eq!(result, "[REDACTED]");
    }

    #[test]
    fn test_escape_braces() {
        let result = render_template("Use {{var}} for variables", &HashMap::new()).unwrap();
        assert_eq!(result, "Use {var} for variables");
    }

    #[test]
    fn test_lone_closing_brace_is_literal() {
        let result = render_template("a } b", &HashMap::new()).unwrap();
        assert_eq!(result, "a } b");
    }

    #[test]
    fn test_undefined_variable_error() {
        let err = render_template("Hello {name}", &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "name".to_string(),
                position: 6
            }
        );
    }

    #[test]
    fn test_unmatched_brace_error() {
        let err = render_template("Hello {name", &HashMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::UnmatchedBrace { position: 6 });
    }

    #[test]
    fn test_empty_variable_name_error() {
        let err = render_template("Hello {}", &HashMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::EmptyVariableName { position: 6 });
    }

    #[test]
    fn test_position_counts_bytes_before_brace() {
        let err = render_template("Né {x}", &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "x".to_string(),
                position: 4
            }
        );
    }

    #[test]
    fn test_escaped_braces_around_variable() {
        let vars = vars([("reason", "vacation")]);
        let result = render_template("{{{reason}}}", &vars).unwrap();
        assert_eq!(result, "{vacation}");
    }

    #[test]
    fn test_whitespace_in_variable_name() {
        let vars = vars([("name", "Alex")]);
        let result = render_template("— { name }", &vars).unwrap();
        assert_eq!(result, "— Alex");
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        let vars = vars([("reason", "vacation")]);
        let result = render_template("Sailed away for {reason} 🏴‍☠️", &vars).unwrap();
        assert_eq!(result, "Sailed away for vacation 🏴‍☠️");
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UnmatchedBrace { position: 3 };
        assert_eq!(err.to_string(), "unmatched '{' at position 3 in template");
    }
}
