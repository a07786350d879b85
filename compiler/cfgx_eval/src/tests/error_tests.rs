//! Failure kinds and diagnostic text.

use pretty_assertions::assert_eq;

use super::{eval_err, evaluate_with};
use crate::{EvalError, Evaluator};

mod unsupported_construct {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quotes_node_and_parent() {
        let err = eval_err("let i = 0;\nconst entry = [1, i++];", "entry");
        assert_eq!(
            err,
            EvalError::UnsupportedConstruct {
                kind: "UpdateExpression",
                text: "i++".into(),
                parent: Some("[1, i++]".into()),
            }
        );
        assert_eq!(err.to_string(), "unsupported UpdateExpression: `i++` in `[1, i++]`");
    }

    #[test]
    fn byte_order_mark_does_not_shift_quotes() {
        assert_eq!(
            eval_err("\u{feff}const entry = [1, this];", "entry"),
            EvalError::UnsupportedConstruct {
                kind: "ThisExpression",
                text: "this".into(),
                parent: Some("[1, this]".into()),
            }
        );
    }

    #[test]
    fn prefix_update_is_an_update_expression() {
        assert!(matches!(
            eval_err("let x = 0;\nconst entry = ++x;", "entry"),
            EvalError::UnsupportedConstruct { kind: "UpdateExpression", .. }
        ));
    }

    #[test]
    fn long_parents_are_abbreviated() {
        let names: Vec<String> = (0..40).map(|i| format!("'name{i}'")).collect();
        let source = format!("const entry = [{}, this];", names.join(", "));
        let EvalError::UnsupportedConstruct { kind, text, parent } = eval_err(&source, "entry")
        else {
            panic!("expected an unsupported construct");
        };
        assert_eq!(kind, "ThisExpression");
        assert_eq!(text, "this");
        let parent = parent.unwrap();
        assert_eq!(parent.chars().count(), 120);
        assert!(parent.starts_with("['name0', "));
        assert!(parent.ends_with("..."));
    }

    #[test]
    fn declarations_without_a_value() {
        let source = "function helper() { return 1; }\nconst entry = helper;";
        assert!(matches!(
            eval_err(source, "entry"),
            EvalError::UnsupportedConstruct { kind: "FunctionDeclaration", .. }
        ));
    }

    #[test]
    fn namespace_import_candidate() {
        let sources = [
            ("main.ts", "import * as shared from './shared';\nconst entry = shared;"),
            ("shared.ts", "export const a = 1;"),
        ];
        evaluate_with(&sources, |evaluator, project| {
            let node = project.find_declaration("main.ts", "entry").unwrap();
            assert!(matches!(
                evaluator.evaluate_entry(node),
                Err(EvalError::UnsupportedConstruct { kind: "NamespaceImport", .. })
            ));
        });
    }
}

#[test]
fn unresolved_identifier() {
    assert_eq!(
        eval_err("const entry = [missing];", "entry"),
        EvalError::UnresolvedIdentifier {
            name: "missing".into()
        }
    );
}

mod recursion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mutually_referencing_declarations() {
        assert_eq!(
            eval_err("const a = b;\nconst b = a;", "a"),
            EvalError::RecursionLimit { limit: 1024 }
        );
    }

    #[test]
    fn self_recursive_closure() {
        let source = "const f = (n) => f(n);\nconst entry = f(1);";
        assert_eq!(eval_err(source, "entry"), EvalError::RecursionLimit { limit: 1024 });
    }

    fn nested_list(depth: usize) -> String {
        format!("const entry = {}1{};", "[".repeat(depth), "]".repeat(depth))
    }

    #[test]
    fn deep_literal_hits_the_limit_not_the_stack() {
        let source = nested_list(1000);
        let project = cfgx_syntax::Project::from_sources([("main.ts", source.as_str())]).unwrap();
        let resolver = project.resolver();
        let node = project.find_declaration("main.ts", "entry").unwrap();

        let shallow = Evaluator::builder(&resolver).max_depth(100).build();
        assert_eq!(shallow.evaluate_entry(node), Err(EvalError::RecursionLimit { limit: 100 }));

        let deep = Evaluator::builder(&resolver).max_depth(4096).build();
        assert!(deep.evaluate_entry(node).is_ok());
    }

    #[test]
    fn nesting_past_the_parser_bound_fails_to_load() {
        let source = nested_list(5000);
        assert!(matches!(
            cfgx_syntax::Project::from_sources([("main.ts", source.as_str())]),
            Err(cfgx_syntax::SyntaxError::Parse { .. })
        ));
    }

    #[test]
    fn configured_limit() {
        let source = "const entry = [[[[[[[[[1]]]]]]]]];\nconst small = [1];";
        let project = cfgx_syntax::Project::from_sources([("main.ts", source)]).unwrap();
        let resolver = project.resolver();
        let node = project.find_declaration("main.ts", "entry").unwrap();

        let shallow = Evaluator::builder(&resolver).max_depth(8).build();
        assert_eq!(shallow.max_depth(), 8);
        assert_eq!(shallow.evaluate_entry(node), Err(EvalError::RecursionLimit { limit: 8 }));
        assert!(Evaluator::new(&resolver).evaluate_entry(node).is_ok());

        // A failed evaluation leaves the trail empty.
        let small = project.find_declaration("main.ts", "small").unwrap();
        assert!(shallow.evaluate_entry(small).is_ok());
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        EvalError::UnsupportedMethod {
            name: "push".into(),
            target: "list"
        }
        .to_string(),
        "method `push` is not allowed on list values"
    );
    assert_eq!(
        EvalError::RecursionLimit { limit: 8 }.to_string(),
        "evaluation exceeded the maximum depth of 8"
    );
}
