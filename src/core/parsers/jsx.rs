use std::{path::Path, sync::Arc};

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, FilePathMapping, GLOBALS, Globals, SourceMap, Span, Spanned};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprOrSpread, JSXAttrName, JSXAttrOrSpread, JSXAttrValue,
    JSXElement, JSXExpr, Lit, OptChainBase, OptChainExpr,
};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{
    SourceSpan, SourceText,
    locate::{SyntaxHost, SyntaxNode, TagAttribute},
};

/// A parsed JS/TS source file reduced to the nodes the locator cares about.
///
/// The swc AST is dropped after the single collection pass, so this value is
/// plain data and can move freely between threads.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub file_path: String,
    source: SourceText,
    nodes: Vec<SyntaxNode>,
}

impl SyntaxHost for ParsedSource {
    fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    fn source(&self) -> &SourceText {
        &self.source
    }
}

/// Pick the parser syntax from the file extension.
///
/// Plain `.ts` files are parsed without JSX so generic arrow functions
/// (`<T>(x: T) => x`) are not mistaken for elements.
fn syntax_for(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse JS/JSX/TS/TSX source code and collect call and element nodes.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::new(FilePathMapping::empty()));
        let source = SourceText::new(code.clone());
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            None,
        );
        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        let mut collector = NodeCollector {
            source: &source,
            start_pos: source_file.start_pos,
            nodes: Vec::new(),
        };
        module.visit_with(&mut collector);
        let nodes = collector.nodes;

        Ok(ParsedSource {
            file_path: file_path.to_string(),
            source,
            nodes,
        })
    })
}

struct NodeCollector<'a> {
    source: &'a SourceText,
    start_pos: BytePos,
    nodes: Vec<SyntaxNode>,
}

impl NodeCollector<'_> {
    fn to_source_span(&self, span: Span) -> SourceSpan {
        SourceSpan::new(
            (span.lo.0 - self.start_pos.0) as usize,
            (span.hi.0 - self.start_pos.0) as usize,
        )
    }

    fn text_of(&self, span: Span) -> String {
        self.source
            .slice(self.to_source_span(span))
            .unwrap_or_default()
            .to_string()
    }

    fn push_call(&mut self, callee: Span, args: &[ExprOrSpread], span: Span) {
        let arguments = args
            .iter()
            .map(|arg| self.text_of(arg.expr.span()))
            .collect();
        self.nodes.push(SyntaxNode::Call {
            callee: self.text_of(callee),
            arguments,
            span: self.to_source_span(span),
        });
    }
}

impl Visit for NodeCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(callee) = &node.callee {
            self.push_call(callee.span(), &node.args, node.span);
        }
        node.visit_children_with(self);
    }

    /// `i18n?.t(...)` is an optional chain, not a `CallExpr`.
    fn visit_opt_chain_expr(&mut self, node: &OptChainExpr) {
        if let OptChainBase::Call(call) = &*node.base {
            self.push_call(call.callee.span(), &call.args, node.span);
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let attributes = node
            .opening
            .attrs
            .iter()
            .filter_map(|attr| match attr {
                JSXAttrOrSpread::JSXAttr(attr) => Some(attr),
                JSXAttrOrSpread::SpreadElement(_) => None,
            })
            .map(|attr| TagAttribute {
                name: match &attr.name {
                    JSXAttrName::Ident(ident) => ident.sym.to_string(),
                    JSXAttrName::JSXNamespacedName(ns) => {
                        format!("{}:{}", ns.ns.sym, ns.name.sym)
                    }
                },
                value: attr.value.as_ref().and_then(literal_attr_value),
            })
            .collect();

        self.nodes.push(SyntaxNode::Tag {
            name: self.text_of(node.opening.name.span()),
            attributes,
            span: self.to_source_span(node.span),
        });
        node.visit_children_with(self);
    }
}

/// `attr="x"`, `attr={"x"}` or ``attr={`x`}`` without substitutions.
fn literal_attr_value(value: &JSXAttrValue) -> Option<String> {
    match value {
        JSXAttrValue::Str(s) => s.value.as_str().map(str::to_string),
        JSXAttrValue::JSXExprContainer(container) => match &container.expr {
            JSXExpr::Expr(expr) => literal_string(expr),
            JSXExpr::JSXEmptyExpr(_) => None,
        },
        _ => None,
    }
}

fn literal_string(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()?
            .cooked
            .as_ref()?
            .as_str()
            .map(str::to_string),
        Expr::Paren(paren) => literal_string(&paren.expr),
        _ => None,
    }
}
