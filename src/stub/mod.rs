//! Declaration model and stub rendering.
//!
//! A parsed module statement is lowered into a [`Declaration`] — a closed set
//! of stub-relevant shapes (functions and classes, each with its own payload)
//! — and then rendered to `.pyi` text. Statements with no stub counterpart
//! lower to `None` and disappear from the output.

pub mod type_comment;

use rustpython_parser::ast;

use self::type_comment::{extract_type_comment, parse_type_comment, SignatureSource};

/// Placeholder type used wherever no annotation is available.
pub const ANY: &str = "Any";

const INDENT: &str = "    ";

/// A renderable top-level (or class-nested) definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(FunctionStub),
    Class(ClassStub),
}

/// A function signature with its placeholder body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionStub {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: String,
    pub docstring: Option<String>,
}

/// One rendered parameter. An untyped parameter renders as its bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: Option<String>,
}

/// A class header plus its rendered members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassStub {
    pub name: String,
    pub bases: Vec<String>,
    pub docstring: Option<String>,
    pub members: Vec<Member>,
}

/// One class-body line: a field declaration or a nested definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field {
        name: String,
        ty: String,
        default: Option<String>,
    },
    Nested(Declaration),
}

impl Declaration {
    /// Lower a statement into a declaration, or `None` when the statement has
    /// no stub counterpart. `source` is the raw module text, needed to find
    /// type comments next to nested `def` headers.
    pub fn from_stmt(stmt: &ast::Stmt, source: &str) -> Option<Declaration> {
        match stmt {
            ast::Stmt::FunctionDef(func) => {
                Some(Declaration::Function(FunctionStub::from_ast(func, source)))
            }
            ast::Stmt::ClassDef(class) => {
                Some(Declaration::Class(ClassStub::from_ast(class, source)))
            }
            _ => None,
        }
    }

    /// Append this declaration's stub lines at the given indent level.
    pub fn render(&self, level: usize, out: &mut Vec<String>) {
        match self {
            Declaration::Function(func) => func.render(level, out),
            Declaration::Class(class) => class.render(level, out),
        }
    }
}

impl FunctionStub {
    fn from_ast(func: &ast::StmtFunctionDef, source: &str) -> FunctionStub {
        let arg_names: Vec<String> = func
            .args
            .posonlyargs
            .iter()
            .chain(func.args.args.iter())
            .map(|arg| arg.def.arg.to_string())
            .collect();

        // Receiver detection is purely conventional: a first parameter named
        // `self`, or `cls` on a function carrying a classmethod decorator.
        // A free function whose first parameter happens to be named `self`
        // is treated as a method.
        let has_receiver = match arg_names.first().map(String::as_str) {
            Some("self") => true,
            Some("cls") => has_classmethod_decorator(&func.decorator_list),
            _ => false,
        };

        let annotation = extract_type_comment(source, func)
            .map(|text| parse_type_comment(&text))
            .unwrap_or(SignatureSource::Degraded);

        let (params, return_type) = match annotation {
            SignatureSource::Typed(annotation) => {
                let mut params = Vec::new();
                let pairable = if has_receiver {
                    params.push(Param {
                        name: arg_names[0].clone(),
                        ty: None,
                    });
                    &arg_names[1..]
                } else {
                    &arg_names[..]
                };
                // Positional zip; a count mismatch truncates to the shorter
                // list without complaint.
                for (name, ty) in pairable.iter().zip(annotation.arg_types.iter()) {
                    params.push(Param {
                        name: name.clone(),
                        ty: Some(ty.clone()),
                    });
                }
                (params, annotation.return_type)
            }
            SignatureSource::Degraded => (
                arg_names
                    .into_iter()
                    .map(|name| Param { name, ty: None })
                    .collect(),
                ANY.to_string(),
            ),
        };

        FunctionStub {
            name: func.name.to_string(),
            params,
            return_type,
            docstring: docstring(&func.body),
        }
    }

    fn render(&self, level: usize, out: &mut Vec<String>) {
        let pad = INDENT.repeat(level);
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");
        out.push(format!(
            "{pad}def {}({params}) -> {}:",
            self.name, self.return_type
        ));
        if let Some(doc) = &self.docstring {
            out.push(format!("{pad}{INDENT}\"\"\"{}\"\"\"", escape_docstring(doc)));
        }
        out.push(format!("{pad}{INDENT}..."));
    }
}

impl Param {
    fn render(&self) -> String {
        match &self.ty {
            Some(ty) => format!("{}: {}", self.name, ty),
            None => self.name.clone(),
        }
    }
}

impl ClassStub {
    fn from_ast(class: &ast::StmtClassDef, source: &str) -> ClassStub {
        let bases = class.bases.iter().map(base_name).collect();

        let mut members = Vec::new();
        for stmt in &class.body {
            match stmt {
                ast::Stmt::Assign(assign) => collect_fields(assign, &mut members),
                other => {
                    if let Some(decl) = Declaration::from_stmt(other, source) {
                        members.push(Member::Nested(decl));
                    }
                }
            }
        }

        ClassStub {
            name: class.name.to_string(),
            bases,
            docstring: docstring(&class.body),
            members,
        }
    }

    fn render(&self, level: usize, out: &mut Vec<String>) {
        let pad = INDENT.repeat(level);
        if self.bases.is_empty() {
            out.push(format!("{pad}class {}:", self.name));
        } else {
            out.push(format!("{pad}class {}({}):", self.name, self.bases.join(", ")));
        }
        if let Some(doc) = &self.docstring {
            out.push(format!("{pad}{INDENT}\"\"\"{}\"\"\"", escape_docstring(doc)));
        }

        let mut body = Vec::new();
        for member in &self.members {
            match member {
                Member::Field { name, ty, default } => body.push(match default {
                    Some(default) => format!("{pad}{INDENT}{name}: {ty} = {default}"),
                    None => format!("{pad}{INDENT}{name}: {ty}"),
                }),
                Member::Nested(decl) => decl.render(level + 1, &mut body),
            }
        }
        if body.is_empty() {
            body.push(format!("{pad}{INDENT}pass"));
        }
        out.extend(body);
    }
}

/// Collect the field lines contributed by one assignment statement.
///
/// A single plain-name target keeps its literal default (or alias type); every
/// other shape declares its plain-name targets untyped with no default.
fn collect_fields(assign: &ast::StmtAssign, members: &mut Vec<Member>) {
    if let [ast::Expr::Name(target)] = assign.targets.as_slice() {
        let member = match assign.value.as_ref() {
            ast::Expr::Constant(constant) => Member::Field {
                name: target.id.to_string(),
                ty: ANY.to_string(),
                default: literal_repr(&constant.value),
            },
            // `X = SomeName` reads as a type-alias use: typed by and
            // defaulted to the referenced name.
            ast::Expr::Name(value) => Member::Field {
                name: target.id.to_string(),
                ty: value.id.to_string(),
                default: Some(value.id.to_string()),
            },
            _ => Member::Field {
                name: target.id.to_string(),
                ty: ANY.to_string(),
                default: None,
            },
        };
        members.push(member);
        return;
    }

    for target in &assign.targets {
        match target {
            ast::Expr::Name(name) => members.push(Member::Field {
                name: name.id.to_string(),
                ty: ANY.to_string(),
                default: None,
            }),
            ast::Expr::Tuple(tuple) => {
                for element in &tuple.elts {
                    if let ast::Expr::Name(name) = element {
                        members.push(Member::Field {
                            name: name.id.to_string(),
                            ty: ANY.to_string(),
                            default: None,
                        });
                    }
                }
            }
            _ => {}
        }
    }
}

fn has_classmethod_decorator(decorators: &[ast::Expr]) -> bool {
    decorators.iter().any(|decorator| match decorator {
        ast::Expr::Name(name) => name.id.as_str() == "classmethod",
        ast::Expr::Attribute(attr) => attr.attr.as_str() == "classmethod",
        _ => false,
    })
}

/// Render a base-class expression: plain names verbatim, dotted chains
/// rejoined from the attribute walk, anything else as `Any`.
fn base_name(expr: &ast::Expr) -> String {
    match expr {
        ast::Expr::Name(name) => name.id.to_string(),
        ast::Expr::Attribute(_) => {
            let mut parts = Vec::new();
            let mut current = expr;
            while let ast::Expr::Attribute(attr) = current {
                parts.push(attr.attr.to_string());
                current = &attr.value;
            }
            if let ast::Expr::Name(name) = current {
                parts.push(name.id.to_string());
            }
            parts.reverse();
            parts.join(".")
        }
        _ => ANY.to_string(),
    }
}

/// First body statement being a string literal, the Python docstring rule.
fn docstring(body: &[ast::Stmt]) -> Option<String> {
    let ast::Stmt::Expr(expr) = body.first()? else {
        return None;
    };
    let ast::Expr::Constant(constant) = expr.value.as_ref() else {
        return None;
    };
    let ast::Constant::Str(text) = &constant.value else {
        return None;
    };
    Some(text.clone())
}

fn escape_docstring(doc: &str) -> String {
    doc.replace("\"\"\"", "\\\"\\\"\\\"")
}

/// Python-style repr of a constant usable as a stub default. Shapes with no
/// obvious single-token repr (bytes, tuples, complex) yield `None`, which
/// renders the field untyped with no default.
fn literal_repr(value: &ast::Constant) -> Option<String> {
    match value {
        ast::Constant::Str(text) => Some(str_repr(text)),
        ast::Constant::Int(value) => Some(value.to_string()),
        ast::Constant::Float(value) => Some(float_repr(*value)),
        ast::Constant::Bool(true) => Some("True".to_string()),
        ast::Constant::Bool(false) => Some("False".to_string()),
        ast::Constant::None => Some("None".to_string()),
        ast::Constant::Ellipsis => Some("...".to_string()),
        _ => None,
    }
}

fn str_repr(text: &str) -> String {
    // Python repr quoting: single quotes unless the string contains one and
    // no double quote.
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn float_repr(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
