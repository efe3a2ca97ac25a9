//! Evaluator for the tiny boolean expression language used by the article
//! templates ("clauseArbitrage && !associeUnique",
//! "typeApport === 'NATURE'", ...).
//!
//! A malformed condition never raises: it evaluates to false and the
//! corresponding variant is simply treated as inapplicable.

use crate::variables::VarMap;
use serde_json::Value;

/// Parsed form of a template condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(bool),
    /// Truthiness of a variable.
    Var(String),
    /// Negated truthiness of a variable.
    Not(String),
    /// String comparison of a variable against a literal.
    Eq { var: String, literal: String },
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

/// Parses a condition string into an [`Expr`].
///
/// Precedence, from the outside in: literal `true`/`false`, `&&`, `||`,
/// `!ident`, `ident === literal`, bare identifier. Anything that fits none
/// of these parses to `Literal(false)` — the fail-safe the renderer relies
/// on. Parentheses are not supported; the templates never nest conditions
/// beyond one `&&`/`||` level.
pub fn parse(condition: &str) -> Expr {
    let condition = condition.trim();
    match condition {
        "true" => return Expr::Literal(true),
        "false" => return Expr::Literal(false),
        _ => {}
    }
    if condition.contains("&&") {
        return Expr::And(condition.split("&&").map(parse).collect());
    }
    if condition.contains("||") {
        return Expr::Or(condition.split("||").map(parse).collect());
    }
    parse_atom(condition)
}

fn parse_atom(token: &str) -> Expr {
    if let Some(ident) = token.strip_prefix('!') {
        let ident = ident.trim();
        if is_identifier(ident) {
            return Expr::Not(ident.to_string());
        }
        return Expr::Literal(false);
    }
    if let Some((lhs, rhs)) = token.split_once("===") {
        let var = lhs.trim();
        if is_identifier(var) {
            let literal = rhs.trim().trim_matches('\'').trim_matches('"');
            return Expr::Eq {
                var: var.to_string(),
                literal: literal.to_string(),
            };
        }
        return Expr::Literal(false);
    }
    if is_identifier(token) {
        return Expr::Var(token.to_string());
    }
    Expr::Literal(false)
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Evaluates a condition string against the variable dictionary.
pub fn evaluate(condition: &str, vars: &VarMap) -> bool {
    eval_expr(&parse(condition), vars)
}

fn eval_expr(expr: &Expr, vars: &VarMap) -> bool {
    match expr {
        Expr::Literal(value) => *value,
        Expr::Var(name) => is_truthy(vars.get(name)),
        Expr::Not(name) => !is_truthy(vars.get(name)),
        Expr::Eq { var, literal } => match literal.as_str() {
            // "x === true" compares truthiness, not the string "true"
            "true" => is_truthy(vars.get(var)),
            "false" => !is_truthy(vars.get(var)),
            _ => vars
                .get(var)
                .map(|value| value_to_string(value) == *literal)
                .unwrap_or(false),
        },
        Expr::And(operands) => operands.iter().all(|op| eval_expr(op, vars)),
        Expr::Or(operands) => operands.iter().any(|op| eval_expr(op, vars)),
    }
}

/// Truthiness of a variable: missing, null, false, "" and 0 are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(_)) => true,
    }
}

/// Plain-text form of a variable value, used for `===` comparison and for
/// `{{name}}` substitution. Strings come out unquoted.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars() -> VarMap {
        let mut map = VarMap::new();
        map.insert("clauseArbitrage".to_string(), json!(true));
        map.insert("associeUnique".to_string(), json!(false));
        map.insert("typeApport".to_string(), json!("NATURE"));
        map.insert("nombreParts".to_string(), json!(100));
        map.insert("denomination".to_string(), json!(""));
        map.insert("zero".to_string(), json!(0));
        map
    }

    #[test]
    fn test_literals() {
        assert!(evaluate("true", &vars()));
        assert!(!evaluate("false", &vars()));
    }

    #[test]
    fn test_bare_identifier_truthiness() {
        assert!(evaluate("clauseArbitrage", &vars()));
        assert!(!evaluate("associeUnique", &vars()));
        assert!(!evaluate("denomination", &vars())); // empty string
        assert!(!evaluate("zero", &vars()));
        assert!(!evaluate("missingVariable", &vars()));
        assert!(evaluate("nombreParts", &vars()));
    }

    #[test]
    fn test_negation() {
        assert!(evaluate("!associeUnique", &vars()));
        assert!(!evaluate("!clauseArbitrage", &vars()));
        assert!(evaluate("!missingVariable", &vars()));
    }

    #[test]
    fn test_equality_quoted_and_bare() {
        assert!(evaluate("typeApport === 'NATURE'", &vars()));
        assert!(evaluate("typeApport === NATURE", &vars()));
        assert!(!evaluate("typeApport === 'MIXTE'", &vars()));
        assert!(evaluate("nombreParts === '100'", &vars()));
    }

    #[test]
    fn test_equality_boolean_literal() {
        assert!(evaluate("clauseArbitrage === true", &vars()));
        assert!(evaluate("associeUnique === false", &vars()));
        // truthiness comparison, not string comparison
        assert!(evaluate("nombreParts === true", &vars()));
        assert!(evaluate("missingVariable === false", &vars()));
    }

    #[test]
    fn test_and_or() {
        assert!(evaluate("clauseArbitrage && !associeUnique", &vars()));
        assert!(!evaluate("clauseArbitrage && associeUnique", &vars()));
        assert!(evaluate("associeUnique || clauseArbitrage", &vars()));
        assert!(!evaluate("associeUnique || denomination", &vars()));
        assert!(evaluate(
            "typeApport === 'NATURE' && clauseArbitrage",
            &vars()
        ));
    }

    #[test]
    fn test_malformed_defaults_to_false() {
        assert!(!evaluate("", &vars()));
        assert!(!evaluate("a b c", &vars()));
        assert!(!evaluate("typeApport ==", &vars()));
        assert!(!evaluate("(clauseArbitrage)", &vars()));
    }

    #[test]
    fn test_parse_ast_shape() {
        let expr = parse("a && b || c");
        // && splits first; the second operand then splits on ||
        match expr {
            Expr::And(ops) => assert_eq!(ops.len(), 2),
            other => panic!("Expected And, got {:?}", other),
        }
    }
}
