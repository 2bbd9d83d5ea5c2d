//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] owns the cursor state for one parse: a
//! [`GraphQLTokenStream`] plus the end offset of the last consumed
//! token. Every grammar production is one `parse_*` method that peeks,
//! consumes the tokens it expects, and assembles an AST node; state is
//! threaded through `&mut self`, never ambient.
//!
//! There is no error recovery: the first grammar or lexical violation
//! aborts the whole parse via `?`, and one call to
//! [`parse_document`](GraphQLParser::parse_document) yields exactly one
//! [`Document`] or exactly one [`GraphQLSyntaxError`].
//!
//! Two error forms cover every grammar failure:
//!
//! - `Expected <expected>, found <actual>` when a production knows the
//!   single token it needs;
//! - `Unexpected <actual>` at dispatch points with no single
//!   expectation.

use crate::GraphQLLexer;
use crate::GraphQLSyntaxError;
use crate::GraphQLTokenStream;
use crate::Source;
use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveVec;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ListTypeAnnotation;
use crate::ast::ListValue;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedTypeAnnotation;
use crate::ast::NonNullTypeAnnotation;
use crate::ast::NullValue;
use crate::ast::NullableTypeAnnotation;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::sync::Arc;

/// Options controlling how a document is parsed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Omit the `source` back-reference from every [`Location`] in the
    /// produced tree. Byte offsets are still populated; this only trades
    /// the ability to slice raw text back out of the AST for a tree
    /// that holds no reference to the source buffer.
    pub no_source: bool,
}

/// Parses a complete GraphQL document with default options.
///
/// Accepts anything convertible into a [`Source`]; a bare string gets
/// the default display name `"GraphQL"`.
///
/// # Example
///
/// ```
/// use graphql_syntax::ast::Definition;
///
/// let document = graphql_syntax::parse("{ hero { name } }").unwrap();
/// assert!(matches!(document.definitions[0], Definition::Operation(_)));
/// ```
pub fn parse(source: impl Into<Source>) -> Result<Document, GraphQLSyntaxError> {
    GraphQLParser::new(source).parse_document()
}

/// Parses a complete GraphQL document with explicit [`ParseOptions`].
pub fn parse_with_options(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<Document, GraphQLSyntaxError> {
    GraphQLParser::with_options(source, options).parse_document()
}

/// A recursive descent parser over a [`GraphQLTokenStream`].
///
/// One parser instance performs one parse: construct it, call
/// [`parse_document`](Self::parse_document), done. Parses of distinct
/// sources share nothing and may run on separate threads freely.
pub struct GraphQLParser {
    source: Arc<Source>,
    stream: GraphQLTokenStream,
    options: ParseOptions,

    /// End offset of the most recently consumed token; closes the
    /// location of every node built after its last child token.
    prev_end: usize,
}

impl GraphQLParser {
    pub fn new(source: impl Into<Source>) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: impl Into<Source>, options: ParseOptions) -> Self {
        let source = Arc::new(source.into());
        let lexer = GraphQLLexer::new(source.clone());
        Self {
            source,
            stream: GraphQLTokenStream::new(lexer),
            options,
            prev_end: 0,
        }
    }

    /// Parses the document loop: definitions until EOF.
    pub fn parse_document(mut self) -> Result<Document, GraphQLSyntaxError> {
        let start = self.stream.peek()?.start;
        let mut definitions = Vec::new();
        loop {
            if self.skip(GraphQLTokenKind::Eof)? {
                break;
            }
            definitions.push(self.parse_definition()?);
        }
        let loc = self.loc(start);
        Ok(Document { definitions, loc })
    }

    // =========================================================================
    // Token cursor helpers
    // =========================================================================

    /// Consumes the next token, tracking its end offset for location
    /// building.
    fn next_token(&mut self) -> Result<GraphQLToken, GraphQLSyntaxError> {
        let token = self.stream.consume()?;
        self.prev_end = token.end;
        Ok(token)
    }

    fn peek(&mut self) -> Result<&GraphQLToken, GraphQLSyntaxError> {
        self.stream.peek()
    }

    fn peek_start(&mut self) -> Result<usize, GraphQLSyntaxError> {
        Ok(self.stream.peek()?.start)
    }

    fn peek_is(&mut self, kind: GraphQLTokenKind) -> Result<bool, GraphQLSyntaxError> {
        Ok(self.stream.peek()?.kind == kind)
    }

    /// Whether the current token is a `Name` with the given text.
    fn peek_keyword(&mut self, keyword: &str) -> Result<bool, GraphQLSyntaxError> {
        let token = self.stream.peek()?;
        Ok(token.kind == GraphQLTokenKind::Name && token.value_str() == keyword)
    }

    /// Consumes the current token if it matches `kind`.
    fn skip(&mut self, kind: GraphQLTokenKind) -> Result<bool, GraphQLSyntaxError> {
        if self.peek_is(kind)? {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a token of the given kind or fails with
    /// `Expected <kind>, found <actual>`.
    fn expect(&mut self, kind: GraphQLTokenKind) -> Result<GraphQLToken, GraphQLSyntaxError> {
        if self.peek_is(kind)? {
            self.next_token()
        } else {
            let token = self.peek()?.clone();
            Err(self.syntax_error(
                token.start,
                format!(
                    "Expected {}, found {}",
                    kind.description(),
                    token.description()
                ),
            ))
        }
    }

    /// Consumes a `Name` token with the given text or fails with
    /// `Expected "<keyword>", found <actual>`.
    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLToken, GraphQLSyntaxError> {
        if self.peek_keyword(keyword)? {
            self.next_token()
        } else {
            let token = self.peek()?.clone();
            Err(self.syntax_error(
                token.start,
                format!("Expected \"{keyword}\", found {}", token.description()),
            ))
        }
    }

    /// `Unexpected <token>` at the token's position. Used at dispatch
    /// points where no single token was expected.
    fn unexpected(&self, token: &GraphQLToken) -> GraphQLSyntaxError {
        self.syntax_error(token.start, format!("Unexpected {}", token.description()))
    }

    fn syntax_error(&self, position: usize, description: String) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(&self.source, position, description)
    }

    // =========================================================================
    // Location helpers
    // =========================================================================

    /// A location spanning `start` to the end of the last consumed
    /// token, honoring `no_source`.
    fn loc(&self, start: usize) -> Location {
        self.span_loc(start, self.prev_end)
    }

    /// A location covering exactly one token.
    fn token_loc(&self, token: &GraphQLToken) -> Location {
        self.span_loc(token.start, token.end)
    }

    fn span_loc(&self, start: usize, end: usize) -> Location {
        if self.options.no_source {
            Location::new(start, end)
        } else {
            Location::with_source(start, end, self.source.clone())
        }
    }

    fn name_from_token(&self, token: GraphQLToken) -> Name {
        let loc = self.token_loc(&token);
        Name {
            value: token.value.unwrap_or_default(),
            loc,
        }
    }

    // =========================================================================
    // List combinators
    // =========================================================================

    /// Parses `open item* close` (zero or more items).
    fn any<T>(
        &mut self,
        open: GraphQLTokenKind,
        parse_item: impl Fn(&mut Self) -> Result<T, GraphQLSyntaxError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLSyntaxError> {
        self.expect(open)?;
        let mut items = Vec::new();
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// Parses `open item+ close` (at least one item).
    fn many<T>(
        &mut self,
        open: GraphQLTokenKind,
        parse_item: impl Fn(&mut Self) -> Result<T, GraphQLSyntaxError>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>, GraphQLSyntaxError> {
        self.expect(open)?;
        let mut items = vec![parse_item(self)?];
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    /// Dispatches one top-level definition on the current token.
    fn parse_definition(&mut self) -> Result<Definition, GraphQLSyntaxError> {
        let token = self.peek()?.clone();
        match token.kind {
            GraphQLTokenKind::BraceL => {
                Ok(Definition::Operation(self.parse_operation_definition()?))
            }
            GraphQLTokenKind::Name => match token.value_str() {
                "query" | "mutation" | "subscription" => {
                    Ok(Definition::Operation(self.parse_operation_definition()?))
                }
                "fragment" => Ok(Definition::Fragment(self.parse_fragment_definition()?)),
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "directive" | "extend" => self.parse_type_system_definition(),
                _ => Err(self.unexpected(&token)),
            },
            GraphQLTokenKind::String | GraphQLTokenKind::BlockString => {
                self.parse_type_system_definition()
            }
            _ => Err(self.unexpected(&token)),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses an operation: either the `{ ... }` query shorthand or
    /// `query|mutation|subscription Name? (vars)? dirs? { ... }`.
    fn parse_operation_definition(&mut self) -> Result<OperationDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;

        if self.peek_is(GraphQLTokenKind::BraceL)? {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: DirectiveVec::new(),
                selection_set,
                loc: self.loc(start),
            });
        }

        let operation_token = self.expect(GraphQLTokenKind::Name)?;
        let operation = OperationType::from_keyword(operation_token.value_str())
            .ok_or_else(|| self.unexpected(&operation_token))?;
        let name = if self.peek_is(GraphQLTokenKind::Name)? {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<VariableDefinition>, GraphQLSyntaxError> {
        if self.peek_is(GraphQLTokenKind::ParenL)? {
            self.many(
                GraphQLTokenKind::ParenL,
                Self::parse_variable_definition,
                GraphQLTokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_variable_definition(&mut self) -> Result<VariableDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_const_value()?)
        } else {
            None
        };
        Ok(VariableDefinition {
            variable,
            type_annotation,
            default_value,
            loc: self.loc(start),
        })
    }

    fn parse_variable(&mut self) -> Result<Variable, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            loc: self.loc(start),
        })
    }

    fn parse_name(&mut self) -> Result<Name, GraphQLSyntaxError> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        Ok(self.name_from_token(token))
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<SelectionSet, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let selections = self.many(
            GraphQLTokenKind::BraceL,
            Self::parse_selection,
            GraphQLTokenKind::BraceR,
        )?;
        Ok(SelectionSet {
            selections,
            loc: self.loc(start),
        })
    }

    fn parse_selection(&mut self) -> Result<Selection, GraphQLSyntaxError> {
        if self.peek_is(GraphQLTokenKind::Spread)? {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// Parses the constructs introduced by `...`.
    ///
    /// After the spread token: a `Name` other than `on` is a fragment
    /// spread; the keyword `on` commits to an inline fragment with a
    /// required type condition (there is no fallback to treating `on`
    /// as a spread name); anything else — `@`, `{`, or an error — is an
    /// inline fragment with no type condition.
    fn parse_fragment(&mut self) -> Result<Selection, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        self.expect(GraphQLTokenKind::Spread)?;

        let token = self.peek()?.clone();
        if token.kind == GraphQLTokenKind::Name && token.value_str() != "on" {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives()?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            }));
        }

        let type_condition = if token.kind == GraphQLTokenKind::Name {
            // The `on` keyword; a named type must follow.
            self.next_token()?;
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    fn parse_field(&mut self) -> Result<Field, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek_is(GraphQLTokenKind::BraceL)? {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument>, GraphQLSyntaxError> {
        if self.peek_is(GraphQLTokenKind::ParenL)? {
            self.many(
                GraphQLTokenKind::ParenL,
                Self::parse_argument,
                GraphQLTokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_argument(&mut self) -> Result<Argument, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value()?;
        Ok(Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// A fragment's own name or a spread's referenced name: any `Name`
    /// except the literal `on`.
    fn parse_fragment_name(&mut self) -> Result<Name, GraphQLSyntaxError> {
        let token = self.peek()?.clone();
        if token.kind == GraphQLTokenKind::Name && token.value_str() == "on" {
            return Err(self.unexpected(&token));
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self) -> Result<Value, GraphQLSyntaxError> {
        self.parse_value_literal(false)
    }

    fn parse_const_value(&mut self) -> Result<Value, GraphQLSyntaxError> {
        self.parse_value_literal(true)
    }

    /// Parses one value. `is_const` is threaded through every nested
    /// list/object call: in a constant context a `$` at any depth is
    /// `Unexpected $`.
    fn parse_value_literal(&mut self, is_const: bool) -> Result<Value, GraphQLSyntaxError> {
        let token = self.peek()?.clone();
        match token.kind {
            GraphQLTokenKind::BracketL => self.parse_list_value(is_const),
            GraphQLTokenKind::BraceL => self.parse_object_value(is_const),
            GraphQLTokenKind::Dollar if !is_const => {
                Ok(Value::Variable(self.parse_variable()?))
            }
            GraphQLTokenKind::Int => {
                let token = self.next_token()?;
                let loc = self.token_loc(&token);
                Ok(Value::Int(IntValue {
                    value: token.value.unwrap_or_default(),
                    loc,
                }))
            }
            GraphQLTokenKind::Float => {
                let token = self.next_token()?;
                let loc = self.token_loc(&token);
                Ok(Value::Float(FloatValue {
                    value: token.value.unwrap_or_default(),
                    loc,
                }))
            }
            GraphQLTokenKind::String | GraphQLTokenKind::BlockString => {
                let token = self.next_token()?;
                let loc = self.token_loc(&token);
                Ok(Value::String(StringValue {
                    value: token.value.unwrap_or_default(),
                    loc,
                }))
            }
            GraphQLTokenKind::Name => match token.value_str() {
                "true" | "false" => {
                    let token = self.next_token()?;
                    let loc = self.token_loc(&token);
                    Ok(Value::Boolean(BooleanValue {
                        value: token.value_str() == "true",
                        loc,
                    }))
                }
                "null" => {
                    let token = self.next_token()?;
                    let loc = self.token_loc(&token);
                    Ok(Value::Null(NullValue { loc }))
                }
                _ => {
                    let token = self.next_token()?;
                    let loc = self.token_loc(&token);
                    Ok(Value::Enum(EnumValue {
                        value: token.value.unwrap_or_default(),
                        loc,
                    }))
                }
            },
            _ => Err(self.unexpected(&token)),
        }
    }

    fn parse_list_value(&mut self, is_const: bool) -> Result<Value, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let values = self.any(
            GraphQLTokenKind::BracketL,
            |parser| parser.parse_value_literal(is_const),
            GraphQLTokenKind::BracketR,
        )?;
        Ok(Value::List(ListValue {
            values,
            loc: self.loc(start),
        }))
    }

    fn parse_object_value(&mut self, is_const: bool) -> Result<Value, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let fields = self.any(
            GraphQLTokenKind::BraceL,
            |parser| parser.parse_object_field(is_const),
            GraphQLTokenKind::BraceR,
        )?;
        Ok(Value::Object(ObjectValue {
            fields,
            loc: self.loc(start),
        }))
    }

    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectField, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self) -> Result<DirectiveVec, GraphQLSyntaxError> {
        let mut directives = DirectiveVec::new();
        while self.peek_is(GraphQLTokenKind::At)? {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self) -> Result<Directive, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(Directive {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Parses a type reference: `Name`, `[Type]`, with an optional
    /// trailing `!`. A `!` wraps only the named or list type it
    /// follows, never another non-null.
    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let nullable = if self.skip(GraphQLTokenKind::BracketL)? {
            let wrapped = self.parse_type_annotation()?;
            self.expect(GraphQLTokenKind::BracketR)?;
            NullableTypeAnnotation::List(ListTypeAnnotation {
                wrapped: Box::new(wrapped),
                loc: self.loc(start),
            })
        } else {
            NullableTypeAnnotation::Named(self.parse_named_type()?)
        };

        if self.skip(GraphQLTokenKind::Bang)? {
            Ok(TypeAnnotation::NonNull(NonNullTypeAnnotation {
                wrapped: nullable,
                loc: self.loc(start),
            }))
        } else {
            Ok(nullable.into())
        }
    }

    fn parse_named_type(&mut self) -> Result<NamedTypeAnnotation, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let name = self.parse_name()?;
        Ok(NamedTypeAnnotation {
            name,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    /// Dispatches a type-system definition, looking one token past a
    /// leading description when present. A description followed by
    /// anything other than a type-system keyword is a dangling
    /// description: `Unexpected <token>` at the would-be keyword.
    fn parse_type_system_definition(&mut self) -> Result<Definition, GraphQLSyntaxError> {
        let keyword_token = if self.peek_is_description()? {
            self.stream.peek_nth(1)?.clone()
        } else {
            self.peek()?.clone()
        };

        if keyword_token.kind != GraphQLTokenKind::Name {
            return Err(self.unexpected(&keyword_token));
        }
        match keyword_token.value_str() {
            "schema" => Ok(Definition::Schema(self.parse_schema_definition()?)),
            "scalar" => Ok(Definition::Scalar(self.parse_scalar_type_definition()?)),
            "type" => Ok(Definition::Object(self.parse_object_type_definition()?)),
            "interface" => Ok(Definition::Interface(
                self.parse_interface_type_definition()?,
            )),
            "union" => Ok(Definition::Union(self.parse_union_type_definition()?)),
            "enum" => Ok(Definition::Enum(self.parse_enum_type_definition()?)),
            "input" => Ok(Definition::InputObject(
                self.parse_input_object_type_definition()?,
            )),
            "directive" => Ok(Definition::Directive(self.parse_directive_definition()?)),
            "extend" => Ok(Definition::TypeExtension(
                self.parse_type_extension_definition()?,
            )),
            _ => Err(self.unexpected(&keyword_token)),
        }
    }

    fn peek_is_description(&mut self) -> Result<bool, GraphQLSyntaxError> {
        let kind = self.stream.peek()?.kind;
        Ok(kind == GraphQLTokenKind::String || kind == GraphQLTokenKind::BlockString)
    }

    /// Consumes a leading `String`/`BlockString` description when
    /// present. Only type-system definitions (and their nested field,
    /// input-value, and enum-value definitions) call this; executable
    /// definitions never carry descriptions.
    fn parse_description(&mut self) -> Result<Option<StringValue>, GraphQLSyntaxError> {
        if self.peek_is_description()? {
            let token = self.next_token()?;
            let loc = self.token_loc(&token);
            Ok(Some(StringValue {
                value: token.value.unwrap_or_default(),
                loc,
            }))
        } else {
            Ok(None)
        }
    }

    fn parse_schema_definition(&mut self) -> Result<SchemaDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives()?;
        let operation_types = self.many(
            GraphQLTokenKind::BraceL,
            Self::parse_operation_type_definition,
            GraphQLTokenKind::BraceR,
        )?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    fn parse_operation_type_definition(
        &mut self,
    ) -> Result<OperationTypeDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let operation_token = self.expect(GraphQLTokenKind::Name)?;
        let operation = OperationType::from_keyword(operation_token.value_str())
            .ok_or_else(|| self.unexpected(&operation_token))?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_named_type()?;
        Ok(OperationTypeDefinition {
            operation,
            type_annotation,
            loc: self.loc(start),
        })
    }

    fn parse_scalar_type_definition(&mut self) -> Result<ScalarTypeDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_object_type_definition(&mut self) -> Result<ObjectTypeDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::BraceL,
            Self::parse_field_definition,
            GraphQLTokenKind::BraceR,
        )?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// Parses `implements A & B` with an optional leading `&`, or
    /// nothing.
    fn parse_implements_interfaces(
        &mut self,
    ) -> Result<Vec<NamedTypeAnnotation>, GraphQLSyntaxError> {
        let mut interfaces = Vec::new();
        if self.peek_keyword("implements")? {
            self.next_token()?;
            self.skip(GraphQLTokenKind::Amp)?;
            loop {
                interfaces.push(self.parse_named_type()?);
                if !self.skip(GraphQLTokenKind::Amp)? {
                    break;
                }
            }
        }
        Ok(interfaces)
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        let directives = self.parse_directives()?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            type_annotation,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<InputValueDefinition>, GraphQLSyntaxError> {
        if self.peek_is(GraphQLTokenKind::ParenL)? {
            self.many(
                GraphQLTokenKind::ParenL,
                Self::parse_input_value_definition,
                GraphQLTokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_input_value_definition(
        &mut self,
    ) -> Result<InputValueDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_const_value()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        Ok(InputValueDefinition {
            description,
            name,
            type_annotation,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<InterfaceTypeDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::BraceL,
            Self::parse_field_definition,
            GraphQLTokenKind::BraceR,
        )?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_union_type_definition(&mut self) -> Result<UnionTypeDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        self.expect(GraphQLTokenKind::Equals)?;
        let types = self.parse_union_members()?;
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    /// Pipe-separated union members; at least one, no leading pipe.
    fn parse_union_members(&mut self) -> Result<Vec<NamedTypeAnnotation>, GraphQLSyntaxError> {
        let mut members = Vec::new();
        loop {
            members.push(self.parse_named_type()?);
            if !self.skip(GraphQLTokenKind::Pipe)? {
                break;
            }
        }
        Ok(members)
    }

    fn parse_enum_type_definition(&mut self) -> Result<EnumTypeDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let values = self.any(
            GraphQLTokenKind::BraceL,
            Self::parse_enum_value_definition,
            GraphQLTokenKind::BraceR,
        )?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    fn parse_enum_value_definition(&mut self) -> Result<EnumValueDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<InputObjectTypeDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::BraceL,
            Self::parse_input_value_definition,
            GraphQLTokenKind::BraceR,
        )?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_directive_definition(&mut self) -> Result<DirectiveDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            locations,
            loc: self.loc(start),
        })
    }

    /// Pipe-separated directive locations; at least one, no leading
    /// pipe. Locations are plain names; validating them against the
    /// known location set is out of scope.
    fn parse_directive_locations(&mut self) -> Result<Vec<Name>, GraphQLSyntaxError> {
        let mut locations = Vec::new();
        loop {
            locations.push(self.parse_name()?);
            if !self.skip(GraphQLTokenKind::Pipe)? {
                break;
            }
        }
        Ok(locations)
    }

    fn parse_type_extension_definition(
        &mut self,
    ) -> Result<TypeExtensionDefinition, GraphQLSyntaxError> {
        let start = self.peek_start()?;
        self.expect_keyword("extend")?;
        let definition = self.parse_object_type_definition()?;
        Ok(TypeExtensionDefinition {
            definition,
            loc: self.loc(start),
        })
    }
}
