//! Switch, conditionals and binary operators.

use cfgx_syntax::ast::{Decl, ModuleItem, Stmt};
use cfgx_syntax::Node;
use pretty_assertions::assert_eq;
use serde_json::json;

use super::{eval_err, eval_json, evaluate_with};
use crate::EvalError;

mod switch {
    use super::*;
    use pretty_assertions::assert_eq;

    const PICK: &str = r"
        const pick = (k) => {
            switch (k) {
                case 1: return new Date();
                case 2: return 'two';
                case 3: return counter++;
            }
        };
    ";

    #[test]
    fn only_the_matching_clause_is_evaluated() {
        let source = format!("{PICK}\nconst entry = pick(2);");
        assert_eq!(eval_json(&source, "entry"), Ok(json!("two")));
    }

    #[test]
    fn no_match_without_default_is_undefined() {
        let source = format!("{PICK}\nconst entry = [pick(7)];");
        assert_eq!(eval_json(&source, "entry"), Ok(json!([null])));
    }

    #[test]
    fn matched_body_with_unsupported_construct_fails() {
        let source = format!("{PICK}\nconst entry = pick(1);");
        assert!(matches!(
            eval_err(&source, "entry"),
            EvalError::UnsupportedConstruct { kind: "NewExpression", .. }
        ));
    }

    #[test]
    fn empty_clauses_fall_through() {
        let source = r"
            const size = (kind) => {
                switch (kind) {
                    case 'int':
                    case 'float':
                        return 8;
                    case 'bool':
                        return 1;
                    default:
                        return 0;
                }
            };
            const entry = [size('int'), size('float'), size('bool'), size('text')];
        ";
        assert_eq!(eval_json(source, "entry"), Ok(json!([8, 8, 1, 0])));
    }

    #[test]
    fn default_returns_as_soon_as_the_scan_reaches_it() {
        let source = r"
            const pick = (k) => {
                switch (k) {
                    default: return 'default';
                    case 2: return 'two';
                }
            };
            const entry = pick(2);
        ";
        assert_eq!(eval_json(source, "entry"), Ok(json!("default")));
    }

    #[test]
    fn empty_default_falls_into_next_body() {
        let source = r"
            const pick = (k) => {
                switch (k) {
                    case 1: return 'one';
                    default:
                    case 2: return 'two';
                    case 3: return 'three';
                }
            };
            const entry = [pick(1), pick(2), pick(3), pick(9)];
        ";
        assert_eq!(eval_json(source, "entry"), Ok(json!(["one", "two", "two", "two"])));
    }

    #[test]
    fn tests_after_a_match_are_not_evaluated() {
        let source = r"
            const pick = (k) => {
                switch (k) {
                    case 1:
                    case missing:
                        return 'low';
                }
            };
            const entry = pick(1);
        ";
        assert_eq!(eval_json(source, "entry"), Ok(json!("low")));
    }

    #[test]
    fn clause_with_several_statements_is_an_arity_error() {
        let source = r"
            const pick = (k) => {
                switch (k) {
                    case 1:
                        'ignored';
                        return 1;
                }
            };
            const entry = pick(1);
        ";
        assert_eq!(
            eval_err(source, "entry"),
            EvalError::ArityError {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn braced_clause_counts_as_one_statement() {
        let source = r"
            const pick = (k) => {
                switch (k) {
                    case 'a': { return 'braced'; }
                }
            };
            const entry = pick('a');
        ";
        assert_eq!(eval_json(source, "entry"), Ok(json!("braced")));
    }
}

mod conditionals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ternary_evaluates_only_the_taken_branch() {
        let source = r"
            const yes = true ? 'then' : new Date();
            const no = 0 ? counter++ : 'else';
        ";
        assert_eq!(eval_json(source, "yes"), Ok(json!("then")));
        assert_eq!(eval_json(source, "no"), Ok(json!("else")));
    }

    #[test]
    fn or_short_circuits_and_returns_operands() {
        let source = r"
            const left = 'x' || counter++;
            const right = 0 || 'fallback';
            const empty = '' || null;
        ";
        assert_eq!(eval_json(source, "left"), Ok(json!("x")));
        assert_eq!(eval_json(source, "right"), Ok(json!("fallback")));
        assert_eq!(eval_json(source, "empty"), Ok(json!(null)));
    }

    #[test]
    fn strict_equality() {
        let source = r"
            const entry = [1 === 1, 'a' === 'b', [1, 2] === [1, 2], { a: 1 } === { a: 1 }, null === undefined];
        ";
        assert_eq!(eval_json(source, "entry"), Ok(json!([true, false, true, true, false])));
    }

    #[test]
    fn other_binary_operators_are_rejected_before_evaluation() {
        assert_eq!(
            eval_err("const entry = 1 + missing;", "entry"),
            EvalError::UnsupportedOperator { op: "+" }
        );
        assert_eq!(
            eval_err("const entry = a && b;", "entry"),
            EvalError::UnsupportedOperator { op: "&&" }
        );
        assert_eq!(
            eval_err("const entry = 1 == 1;", "entry"),
            EvalError::UnsupportedOperator { op: "==" }
        );
    }

    #[test]
    fn type_wrappers_are_transparent() {
        let source = r"
            type Kind = 'entity';
            const entry = ((('entity' as Kind) satisfies string)!);
            const frozen = [1, 2] as const;
            const cast = <number>(5);
        ";
        assert_eq!(eval_json(source, "entry"), Ok(json!("entity")));
        assert_eq!(eval_json(source, "frozen"), Ok(json!([1, 2])));
        assert_eq!(eval_json(source, "cast"), Ok(json!(5)));
    }
}

#[test]
fn declaration_statement_needs_exactly_one_declarator() {
    let source = "const a = 1, b = 2;\nconst single = 3;";
    evaluate_with(&[("main.ts", source)], |evaluator, project| {
        let module = project.module("main.ts").unwrap();
        let vars: Vec<_> = module
            .body
            .iter()
            .filter_map(|item| match item {
                ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => Some(&**var),
                _ => None,
            })
            .collect();

        assert_eq!(
            evaluator.evaluate_entry(Node::VarDecl(vars[0])),
            Err(EvalError::ArityError {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            evaluator.evaluate_entry(Node::VarDecl(vars[1])).map(|value| value.to_json()),
            Ok(json!(3))
        );
    });
}
