//! Borrowed, kind-tagged views into the parsed tree.

use swc_common::{Span, Spanned};
use swc_ecma_ast::{Decl, Expr, Lit, MemberProp, Stmt, VarDecl, VarDeclarator};

/// A non-owning reference to one element of a parsed source tree.
///
/// The variants cover every syntax form the evaluator can be handed directly
/// (by a consumer, or as a resolver candidate). `Unsupported` stands for
/// declarations the resolver can point at but which have no value in the
/// declarative sub-language, such as function declarations or namespace
/// imports.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Expr(&'a Expr),
    Stmt(&'a Stmt),
    /// A `const`/`let`/`var` statement, possibly with several declarators.
    VarDecl(&'a VarDecl),
    /// A single `name = init` declarator.
    Declarator(&'a VarDeclarator),
    Unsupported { kind: &'static str, span: Span },
}

impl Node<'_> {
    /// Name of the syntax form this node represents.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Expr(expr) => expr_kind(expr),
            Node::Stmt(stmt) => stmt_kind(stmt),
            Node::VarDecl(_) => "VariableStatement",
            Node::Declarator(_) => "VariableDeclaration",
            Node::Unsupported { kind, .. } => kind,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Expr(expr) => expr.span(),
            Node::Stmt(stmt) => stmt.span(),
            Node::VarDecl(decl) => decl.span,
            Node::Declarator(declarator) => declarator.span,
            Node::Unsupported { span, .. } => *span,
        }
    }
}

/// Syntax kind of an expression, used in diagnostics.
pub fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::This(_) => "ThisExpression",
        Expr::Array(_) => "ArrayLiteral",
        Expr::Object(_) => "ObjectLiteral",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Unary(_) => "PrefixUnaryExpression",
        Expr::Update(_) => "UpdateExpression",
        Expr::Bin(_) => "BinaryExpression",
        Expr::Assign(_) => "AssignmentExpression",
        Expr::Member(member) => match member.prop {
            MemberProp::Computed(_) => "ElementAccess",
            _ => "PropertyAccess",
        },
        Expr::SuperProp(_) => "SuperPropertyAccess",
        Expr::Cond(_) => "ConditionalExpression",
        Expr::Call(_) => "CallExpression",
        Expr::New(_) => "NewExpression",
        Expr::Seq(_) => "CommaExpression",
        Expr::Ident(_) => "Identifier",
        Expr::Lit(lit) => lit_kind(lit),
        Expr::Tpl(_) => "TemplateLiteral",
        Expr::TaggedTpl(_) => "TaggedTemplate",
        Expr::Arrow(_) => "ArrowFunction",
        Expr::Class(_) => "ClassExpression",
        Expr::Yield(_) => "YieldExpression",
        Expr::Await(_) => "AwaitExpression",
        Expr::Paren(_) => "ParenthesizedExpression",
        Expr::TsAs(_) => "AsExpression",
        Expr::TsSatisfies(_) => "SatisfiesExpression",
        Expr::TsConstAssertion(_) => "ConstAssertion",
        Expr::TsNonNull(_) => "NonNullExpression",
        Expr::TsTypeAssertion(_) => "TypeAssertion",
        Expr::OptChain(_) => "OptionalChain",
        _ => "Expression",
    }
}

fn lit_kind(lit: &Lit) -> &'static str {
    match lit {
        Lit::Str(_) => "StringLiteral",
        Lit::Num(_) => "NumericLiteral",
        Lit::Bool(_) => "BooleanLiteral",
        Lit::Null(_) => "NullLiteral",
        Lit::BigInt(_) => "BigIntLiteral",
        Lit::Regex(_) => "RegularExpressionLiteral",
        _ => "Literal",
    }
}

/// Syntax kind of a statement, used in diagnostics.
pub fn stmt_kind(stmt: &Stmt) -> &'static str {
    match stmt {
        Stmt::Block(_) => "Block",
        Stmt::Empty(_) => "EmptyStatement",
        Stmt::Return(_) => "ReturnStatement",
        Stmt::Expr(_) => "ExpressionStatement",
        Stmt::Switch(_) => "SwitchStatement",
        Stmt::If(_) => "IfStatement",
        Stmt::Throw(_) => "ThrowStatement",
        Stmt::Try(_) => "TryStatement",
        Stmt::Break(_) => "BreakStatement",
        Stmt::Continue(_) => "ContinueStatement",
        Stmt::For(_) | Stmt::ForIn(_) | Stmt::ForOf(_) => "ForStatement",
        Stmt::While(_) | Stmt::DoWhile(_) => "WhileStatement",
        Stmt::Decl(decl) => decl_kind(decl),
        _ => "Statement",
    }
}

pub(crate) fn decl_kind(decl: &Decl) -> &'static str {
    match decl {
        Decl::Var(_) => "VariableStatement",
        Decl::Fn(_) => "FunctionDeclaration",
        Decl::Class(_) => "ClassDeclaration",
        Decl::TsEnum(_) => "EnumDeclaration",
        Decl::TsModule(_) => "ModuleDeclaration",
        Decl::TsInterface(_) => "InterfaceDeclaration",
        Decl::TsTypeAlias(_) => "TypeAliasDeclaration",
        _ => "Declaration",
    }
}
