//! Single-file parsing through the swc TypeScript parser.

use std::path::Path;

use swc_common::input::StringInput;
use swc_common::sync::Lrc;
use swc_common::{BytePos, FileName, SourceFile, SourceMap, Spanned, DUMMY_SP};
use swc_ecma_ast::{EsVersion, Module};
use swc_ecma_parser::lexer::Lexer;
use swc_ecma_parser::token::Token;
use swc_ecma_parser::{Parser, Syntax, TsSyntax};

use crate::SyntaxError;

/// Deepest bracket nesting (`(`, `[`, `{`, `${`) a source file may contain.
pub const MAX_NESTING: usize = 1024;

/// Stack given to one parse. The parser recurses several frames per nesting
/// level and is not guarded internally.
const PARSE_STACK_SIZE: usize = 128 * 1024 * 1024;

/// A parsed module together with its entry in the shared `SourceMap`.
pub struct ParsedSource {
    pub module: Module,
    pub file: Lrc<SourceFile>,
}

/// Parse `source` as a TypeScript module and register it in `cm`.
///
/// Parsing is strict: recoverable errors the parser reports alongside a
/// module are fatal too, and the earliest one in the file is returned.
#[tracing::instrument(level = "debug", skip(cm, source), fields(path = %path.display()))]
pub fn parse_source(
    cm: &Lrc<SourceMap>,
    path: &Path,
    source: String,
) -> Result<ParsedSource, SyntaxError> {
    let tsx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsx") || ext.eq_ignore_ascii_case("jsx"));

    let file = cm.new_source_file(FileName::Real(path.to_path_buf()).into(), source);
    let syntax = Syntax::Typescript(TsSyntax {
        tsx,
        ..Default::default()
    });
    if let Some(lo) = nesting_overflow(syntax, &file) {
        let loc = cm.lookup_char_pos(lo);
        return Err(SyntaxError::Parse {
            path: path.to_path_buf(),
            line: loc.line,
            column: loc.col.0 + 1,
            message: format!("nesting exceeds {MAX_NESTING} levels"),
        });
    }

    let (result, mut errors) = stacker::grow(PARSE_STACK_SIZE, || {
        let lexer = Lexer::new(syntax, EsVersion::EsNext, StringInput::from(&*file), None);
        let mut parser = Parser::new_from(lexer);
        let result = parser.parse_module();
        (result, parser.take_errors())
    });
    let module = match result {
        Ok(module) => module,
        Err(err) => {
            errors.push(err);
            Module {
                span: DUMMY_SP,
                body: Vec::new(),
                shebang: None,
            }
        }
    };

    let Some(first) = errors.into_iter().min_by_key(|err| err.span().lo) else {
        return Ok(ParsedSource { module, file });
    };

    let loc = cm.lookup_char_pos(first.span().lo);
    Err(SyntaxError::Parse {
        path: path.to_path_buf(),
        line: loc.line,
        column: loc.col.0 + 1,
        message: first.kind().msg().into_owned(),
    })
}

/// Scan the token stream for the first opening bracket past `MAX_NESTING`.
///
/// Lexing is iterative, so this runs on the caller's stack regardless of
/// how deep the file nests.
fn nesting_overflow(syntax: Syntax, file: &SourceFile) -> Option<BytePos> {
    let lexer = Lexer::new(syntax, EsVersion::EsNext, StringInput::from(file), None);
    let mut depth = 0usize;
    for token in lexer {
        match token.token {
            Token::LParen | Token::LBracket | Token::LBrace | Token::DollarLBrace => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Some(token.span.lo);
                }
            }
            Token::RParen | Token::RBracket | Token::RBrace => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}
