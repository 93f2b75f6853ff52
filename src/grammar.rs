//! Hand-written recursive-descent parser for the expression grammar (spec §4.1, §4.2).
//!
//! Precedence ladder, tightest to loosest, in the shape of
//! `src/doc/tutorial/parser/parser5.rs`'s `Value`/`Product`/`Sum`:
//!
//! ```text
//! factor      <- '(' expression ')' | function_call | vector_variable
//!              | indexed_vector_variable | scalar_variable | scalar_constant | number
//! term        <- factor (('*' | '/') factor)*
//! expression  <- ('+' | '-')? term (('+' | '-') term)*
//! ```
//!
//! Kind (scalar vs. vectorial) is not resolved here — see [`crate::kind`] — so, unlike the
//! original grammar this crate is modeled on, there is no parallel scalar/vector production
//! family: a bare `factor` covers both, and `*`/`/` combinations that turn out to be ill-kinded
//! are rejected later as a [`crate::error::KindError`], not here as a parse error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::symbol::Symbol;
use crate::ASTNode;

type Node = ASTNode<Symbol>;
type PResult<T> = Result<T, ParseError>;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?").unwrap());
static INDEXED_VECTOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[xy]_[0-9]+").unwrap());
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// Parse `text` into the final, rearranged-and-collapsed parse tree.
///
/// This is the crate's `parse(text) -> Tree` entry point (spec §6): internally it runs the raw
/// recursive-descent grammar (this module) and the tree rearranger (`rearrange`/`collapse`)
/// inline as each node is built, rather than as a separate whole-tree pass, because the parser
/// already produces each node's children bottom-up.
pub fn parse(text: &str) -> Result<ASTNode<Symbol>, ParseError> {
    let mut parser = Parser { text, pos: 0 };
    let tree = parser.expression()?;
    parser.skip_ws();
    if parser.pos != text.len() {
        return Err(ParseError::new(
            parser.pos,
            format!("expected end of input, found {:?}", &text[parser.pos..]),
        ));
    }
    Ok(tree)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

fn classify_word(word: &str) -> Symbol {
    match word {
        "x" | "y" => Symbol::VectorVariable,
        "pi" | "e" => Symbol::ScalarConstant,
        "rand" => Symbol::NullaryA2SFunctionName,
        "exp" | "sqrt" => Symbol::UnaryS2SFunctionName,
        "norm2" | "sum" => Symbol::UnaryV2SFunctionName,
        "dot" => Symbol::BinaryV2SFunctionName,
        "abs" => Symbol::AmbiguousAbsFunctionName,
        _ => Symbol::ScalarVariable,
    }
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        while self.pos < self.text.len() && self.text.as_bytes()[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.pos, message.into())
    }

    fn expect_byte(&mut self, b: u8, what: &str) -> PResult<()> {
        self.skip_ws();
        if self.peek_byte() == Some(b) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected {}", what)))
        }
    }

    /// `expression <- ('+' | '-')? term (('+' | '-') term)*`, rearranged immediately.
    fn expression(&mut self) -> PResult<Node> {
        self.skip_ws();
        let start = self.pos;
        let mut children = Vec::new();

        if let Some(sign) = self.try_consume_sign() {
            children.push(sign);
        }

        children.push(self.term()?);

        loop {
            self.skip_ws();
            match self.peek_byte() {
                Some(b'+') => {
                    let op_start = self.pos;
                    self.pos += 1;
                    children.push(Node::new(Symbol::Plus, op_start, self.pos, Vec::new()));
                }
                Some(b'-') => {
                    let op_start = self.pos;
                    self.pos += 1;
                    children.push(Node::new(Symbol::Minus, op_start, self.pos, Vec::new()));
                }
                _ => break,
            }
            children.push(self.term()?);
        }

        let end = self.pos;
        let wrapper = Node::new(Symbol::Expression, start, end, children);
        Ok(crate::rearrange::rearrange(wrapper))
    }

    fn try_consume_sign(&mut self) -> Option<Node> {
        self.skip_ws();
        let start = self.pos;
        match self.peek_byte() {
            Some(b'+') => {
                self.pos += 1;
                Some(Node::new(Symbol::PrefixPlus, start, self.pos, Vec::new()))
            }
            Some(b'-') => {
                self.pos += 1;
                Some(Node::new(Symbol::PrefixMinus, start, self.pos, Vec::new()))
            }
            _ => None,
        }
    }

    /// `term <- factor (('*' | '/') factor)*`, rearranged immediately.
    fn term(&mut self) -> PResult<Node> {
        self.skip_ws();
        let start = self.pos;
        let mut children = vec![self.factor()?];

        loop {
            self.skip_ws();
            match self.peek_byte() {
                Some(b'*') => {
                    let op_start = self.pos;
                    self.pos += 1;
                    children.push(Node::new(Symbol::Multiply, op_start, self.pos, Vec::new()));
                }
                Some(b'/') => {
                    let op_start = self.pos;
                    self.pos += 1;
                    children.push(Node::new(Symbol::Divide, op_start, self.pos, Vec::new()));
                }
                _ => break,
            }
            children.push(self.factor()?);
        }

        let end = self.pos;
        let wrapper = Node::new(Symbol::Term, start, end, children);
        Ok(crate::rearrange::rearrange(wrapper))
    }

    /// `factor <- '(' expression ')' | function_call | vector_variable
    ///          | indexed_vector_variable | scalar_variable | scalar_constant | number`
    fn factor(&mut self) -> PResult<Node> {
        self.skip_ws();
        let start = self.pos;

        if self.peek_byte() == Some(b'(') {
            self.pos += 1;
            let inner = self.expression()?;
            self.expect_byte(b')', "')'")?;
            return Ok(inner);
        }

        if let Some(m) = NUMBER_RE.find(self.rest()) {
            let text = m.as_str().to_string();
            let end = start + m.end();
            self.pos = end;
            return Ok(Node::leaf(Symbol::Number, start, end, text));
        }

        if let Some(m) = INDEXED_VECTOR_RE.find(self.rest()) {
            let text = m.as_str().to_string();
            let end = start + m.end();
            self.pos = end;
            let underscore = text.find('_').unwrap();
            let var_name = text[..underscore].to_string();
            let index_text = text[underscore + 1..].to_string();
            let var_node = Node::leaf(Symbol::VectorVariable, start, start + underscore, var_name);
            let index_node = Node::leaf(Symbol::Index, start + underscore + 1, end, index_text);
            return Ok(Node::new(
                Symbol::IndexedVectorVariable,
                start,
                end,
                vec![var_node, index_node],
            ));
        }

        if let Some(m) = WORD_RE.find(self.rest()) {
            let word = m.as_str().to_string();
            let end = start + m.end();
            self.pos = end;
            let symbol = classify_word(&word);
            if symbol.is_function_name() {
                return self.function_call(symbol, word, start, end);
            }
            return Ok(Node::leaf(symbol, start, end, word));
        }

        Err(self.error(format!(
            "expected an expression, found {:?}",
            self.rest().chars().next().map(|c| c.to_string()).unwrap_or_default()
        )))
    }

    /// `function_call <- name '(' (expression (',' expression)*)? ')'`, arity fixed by `name`'s
    /// class; collapsed immediately (§4.4).
    fn function_call(
        &mut self,
        symbol: Symbol,
        name: String,
        start: usize,
        name_end: usize,
    ) -> PResult<Node> {
        let arity = symbol.function_arity().expect("checked by caller");
        self.expect_byte(b'(', "'('")?;

        let mut args = Vec::with_capacity(arity);
        if arity > 0 {
            args.push(self.expression()?);
            for _ in 1..arity {
                self.expect_byte(b',', "','")?;
                args.push(self.expression()?);
            }
        }
        self.expect_byte(b')', "')'")?;
        let end = self.pos;

        let name_node = Node::leaf(symbol, start, name_end, name);
        Ok(crate::collapse::collapse(name_node, args, end))
    }
}
