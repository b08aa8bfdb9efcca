//! Tree-sitter based C extractor.
//!
//! The preferred strategy: parses each file with the bundled C grammar
//! and reads definitions out of the syntax tree. Runs on preprocessed
//! text, so node rows line up with the text every other stage sees.
//! ERROR and MISSING nodes become diagnostics, not failures; only a
//! file the parser refuses entirely aborts the strategy.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

use super::normalize_ws;
use super::types::{Confidence, FunctionRecord, StorageClass, VariableRecord};

pub const AST_EVIDENCE: &str = "tree-sitter AST";

/// Symbols and diagnostics read from one file's tree.
#[derive(Debug, Default)]
pub struct FileSymbols {
    pub functions: Vec<FunctionRecord>,
    pub variables: Vec<VariableRecord>,
    pub diagnostics: Vec<String>,
}

/// Syntax-aware C extractor.
pub struct CAstExtractor {
    parser: Parser,
    function_query: Query,
    declaration_query: Query,
}

impl CAstExtractor {
    pub fn new() -> Result<Self, String> {
        let mut parser = Parser::new();
        let language = tree_sitter_c::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| format!("Failed to set C language: {}", e))?;

        let function_query = Query::new(&language.into(), "(function_definition) @function")
            .map_err(|e| format!("Failed to create function query: {}", e))?;

        let declaration_query = Query::new(&language.into(), "(declaration) @declaration")
            .map_err(|e| format!("Failed to create declaration query: {}", e))?;

        Ok(Self {
            parser,
            function_query,
            declaration_query,
        })
    }

    /// Parse one preprocessed file and read its symbols.
    ///
    /// `None` means the parser produced no tree at all; the caller
    /// abandons the AST strategy for the whole run.
    pub fn extract_file(&mut self, source: &str, file: &str) -> Option<FileSymbols> {
        let tree = self.parser.parse(source, None)?;
        let root = tree.root_node();
        let source_bytes = source.as_bytes();

        let mut result = FileSymbols::default();
        collect_diagnostics(root, file, &mut result.diagnostics);
        self.extract_functions(&root, source_bytes, file, &mut result);
        self.extract_variables(&root, source_bytes, file, &mut result);

        Some(result)
    }

    fn extract_functions(&self, root: &Node, source: &[u8], file: &str, result: &mut FileSymbols) {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.function_query, *root, source);

        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Some(record) = function_record(capture.node, source, file) {
                    result.functions.push(record);
                }
            }
        }
    }

    fn extract_variables(&self, root: &Node, source: &[u8], file: &str, result: &mut FileSymbols) {
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.declaration_query, *root, source);

        while let Some(m) = matches.next() {
            for capture in m.captures {
                variable_records(capture.node, source, file, &mut result.variables);
            }
        }
    }
}

/// Build a function record from a `function_definition` node.
fn function_record(node: Node, source: &[u8], file: &str) -> Option<FunctionRecord> {
    let mut declarator = node.child_by_field_name("declarator")?;
    let mut stars = 0u32;
    while declarator.kind() == "pointer_declarator" {
        stars += 1;
        declarator = declarator.child_by_field_name("declarator")?;
    }
    if declarator.kind() != "function_declarator" {
        return None;
    }

    let name = declarator_identifier(declarator.child_by_field_name("declarator")?, source)?;
    let return_type = render_type(&node, stars, source);
    let params = parameter_texts(&declarator, source);

    Some(FunctionRecord {
        name: name.to_string(),
        signature: format!("{} {}({})", return_type, name, params.join(", ")),
        file: file.to_string(),
        line: node.start_position().row as u32 + 1,
        storage: storage_class(&node, source),
        swc: String::new(),
        evidence: AST_EVIDENCE.to_string(),
        confidence: Confidence::High,
    })
}

/// Build variable records from a `declaration` node, one per declarator.
/// Prototype-shaped declarations (any function declarator in the chain)
/// produce nothing.
fn variable_records(decl: Node, source: &[u8], file: &str, out: &mut Vec<VariableRecord>) {
    if contains_function_declarator(&decl) {
        return;
    }
    let storage = storage_class(&decl, source);

    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        let declarator = match child.kind() {
            "init_declarator" => match child.child_by_field_name("declarator") {
                Some(d) => d,
                None => continue,
            },
            "pointer_declarator" | "array_declarator" | "identifier" => child,
            _ => continue,
        };

        let mut inner = declarator;
        let mut stars = 0u32;
        while inner.kind() == "pointer_declarator" {
            stars += 1;
            inner = match inner.child_by_field_name("declarator") {
                Some(d) => d,
                None => break,
            };
        }
        if inner.kind() == "array_declarator" {
            inner = match inner.child_by_field_name("declarator") {
                Some(d) => d,
                None => continue,
            };
        }
        if inner.kind() != "identifier" {
            continue;
        }
        let name = inner.utf8_text(source).unwrap_or("");
        if name.is_empty() {
            continue;
        }

        out.push(VariableRecord {
            name: name.to_string(),
            var_type: render_type(&decl, stars, source),
            file: file.to_string(),
            line: declarator.start_position().row as u32 + 1,
            storage,
            swc: String::new(),
            evidence: AST_EVIDENCE.to_string(),
            confidence: Confidence::High,
        });
    }
}

/// Unwrap pointer and parenthesized declarators down to the identifier.
fn declarator_identifier<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    let mut current = node;
    loop {
        match current.kind() {
            "identifier" => return current.utf8_text(source).ok(),
            "pointer_declarator" | "parenthesized_declarator" => {
                current = match current.child_by_field_name("declarator") {
                    Some(d) => d,
                    None => current.named_child(0)?,
                };
            }
            _ => return None,
        }
    }
}

/// Qualifiers plus the type node, with pointer stars appended.
fn render_type(decl: &Node, stars: u32, source: &[u8]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        if child.kind() == "type_qualifier" {
            parts.push(child.utf8_text(source).unwrap_or("").to_string());
        }
    }
    if let Some(type_node) = decl.child_by_field_name("type") {
        parts.push(type_node.utf8_text(source).unwrap_or("").to_string());
    }

    let mut rendered = normalize_ws(&parts.join(" "));
    if stars > 0 {
        rendered.push(' ');
        for _ in 0..stars {
            rendered.push('*');
        }
    }
    rendered
}

/// Parameter declaration texts, normalized. A lone `void` list renders
/// empty and `...` is dropped, matching how the symbol signatures read.
fn parameter_texts(declarator: &Node, source: &[u8]) -> Vec<String> {
    let list = match declarator.child_by_field_name("parameters") {
        Some(list) => list,
        None => return Vec::new(),
    };

    let mut params = Vec::new();
    let mut cursor = list.walk();
    for child in list.named_children(&mut cursor) {
        if child.kind() != "parameter_declaration" {
            continue;
        }
        let text = normalize_ws(child.utf8_text(source).unwrap_or(""));
        if text == "void" || text.is_empty() {
            continue;
        }
        params.push(text);
    }
    params
}

fn storage_class(decl: &Node, source: &[u8]) -> StorageClass {
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        if child.kind() == "storage_class_specifier"
            && child.utf8_text(source).unwrap_or("") == "static"
        {
            return StorageClass::Static;
        }
    }
    StorageClass::Global
}

fn contains_function_declarator(decl: &Node) -> bool {
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        let mut node = child;
        loop {
            match node.kind() {
                "function_declarator" => return true,
                "init_declarator" | "pointer_declarator" | "parenthesized_declarator" => {
                    node = match node.child_by_field_name("declarator") {
                        Some(d) => d,
                        None => break,
                    };
                }
                _ => break,
            }
        }
    }
    false
}

/// Record every ERROR or MISSING node as a diagnostic, keeping whatever
/// the rest of the tree still yields.
fn collect_diagnostics(node: Node, file: &str, out: &mut Vec<String>) {
    if node.is_error() {
        out.push(format!(
            "C parse diagnostic: syntax error in {} line {}",
            file,
            node.start_position().row + 1
        ));
    } else if node.is_missing() {
        out.push(format!(
            "C parse diagnostic: missing syntax in {} line {}",
            file,
            node.start_position().row + 1
        ));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_diagnostics(child, file, out);
    }
}
