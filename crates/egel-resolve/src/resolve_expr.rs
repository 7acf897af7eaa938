// Pass 2: bind every occurrence, rename pattern variables and flatten
// namespaces into the ordered list of qualified declarations.

use egel_syntax::{
    DataDecl, Decl, Definition, Expr, ExprKind, Field, MatchArm, Name, NamespaceDecl, ObjectDecl,
    Path, Program,
};
use miette::SourceSpan;

use crate::error::ResolveError;
use crate::scopes::{FrameId, ScopeStack};
use crate::symbol::{NameTable, QualifiedName};
use crate::types::Declaration;

/// How an expression position treats variables.
///
/// Combinators resolve globally in both modes. Field names are resolved by
/// `Identifier::resolve_field`, never through an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Variables refer to existing local bindings.
    Use,
    /// Variables introduce fresh local bindings.
    Pattern,
}

/// Per-call state of the identify walk, passed down by value.
#[derive(Debug, Clone, Copy)]
struct Context<'a> {
    mode: Mode,
    frame: FrameId,
    /// Segments of the enclosing namespaces.
    namespace: &'a [String],
}

impl<'a> Context<'a> {
    fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    fn in_frame(self, frame: FrameId) -> Self {
        Self { frame, ..self }
    }
}

/// State shared by the whole identify run: the read-only symbol table,
/// the scope arena and the declarations emitted so far.
pub struct Identifier<'t> {
    table: &'t NameTable,
    scopes: ScopeStack,
    output: Vec<Declaration>,
}

impl<'t> Identifier<'t> {
    pub fn new(table: &'t NameTable, fresh_prefix: &str) -> Self {
        Self {
            table,
            scopes: ScopeStack::new(fresh_prefix),
            output: Vec::new(),
        }
    }

    /// Resolves the whole program and returns its flat declaration list.
    pub fn identify_program(mut self, program: &Program) -> Result<Vec<Declaration>, ResolveError> {
        let cx = Context {
            mode: Mode::Use,
            frame: self.scopes.root(),
            namespace: &[],
        };
        for decl in &program.decls {
            self.resolve_decl(cx, decl)?;
        }
        log::debug!(
            "Identify pass emitted {} declarations, {} fresh names",
            self.output.len(),
            self.scopes.fresh_count()
        );
        Ok(self.output)
    }

    fn resolve_decl(&mut self, cx: Context<'_>, decl: &Decl) -> Result<(), ResolveError> {
        let cx = cx.with_mode(Mode::Use);
        match decl {
            Decl::Data(data) => {
                let names = data
                    .names
                    .iter()
                    .map(|name| self.resolve_declared(cx, name))
                    .collect::<Result<Vec<_>, _>>()?;
                self.output.push(Declaration::Data(DataDecl { names, span: data.span }));
            }
            Decl::Definition(def) => {
                let def = self.resolve_definition(cx, def)?;
                self.output.push(Declaration::Definition(def));
            }
            Decl::Value(def) => {
                let def = self.resolve_definition(cx, def)?;
                self.output.push(Declaration::Value(def));
            }
            Decl::Operator(def) => {
                let def = self.resolve_definition(cx, def)?;
                self.output.push(Declaration::Operator(def));
            }
            Decl::Object(object) => {
                let object = self.resolve_object(cx, object)?;
                self.output.push(Declaration::Object(object));
            }
            Decl::Namespace(ns) => self.resolve_namespace(cx, ns)?,
            Decl::Using(using) => {
                self.scopes.add_using(cx.frame, using.path.clone());
            }
        }
        Ok(())
    }

    /// The body gets a frame of its own, so a binding made outside any arm
    /// (a tag payload, say) ends with the declaration.
    fn resolve_definition(
        &mut self,
        cx: Context<'_>,
        def: &Definition,
    ) -> Result<Definition, ResolveError> {
        let name = self.resolve_declared(cx, &def.name)?;
        let body = cx.in_frame(self.scopes.push(cx.frame));
        let body = self.resolve_expr(body, &def.body)?;
        Ok(Definition { name, body, span: def.span })
    }

    fn resolve_namespace(
        &mut self,
        cx: Context<'_>,
        ns: &NamespaceDecl,
    ) -> Result<(), ResolveError> {
        let extended: Vec<String> = cx.namespace.iter().chain(ns.path.iter()).cloned().collect();
        let frame = self.scopes.push(cx.frame);
        // siblings inside see each other unqualified
        self.scopes.add_using(frame, extended.clone());
        let inner = Context {
            mode: cx.mode,
            frame,
            namespace: &extended,
        };
        for decl in &ns.decls {
            self.resolve_decl(inner, decl)?;
        }
        Ok(())
    }

    fn resolve_object(
        &mut self,
        cx: Context<'_>,
        object: &ObjectDecl,
    ) -> Result<ObjectDecl, ResolveError> {
        let tag = self.resolve_declared(cx, &object.tag)?;
        let body = cx.in_frame(self.scopes.push(cx.frame));

        let params = self.resolve_exprs(body.with_mode(Mode::Pattern), &object.params)?;
        let embedded = self.resolve_exprs(body, &object.embedded)?;
        let fields = object
            .fields
            .iter()
            .map(|field| self.resolve_object_field(body, field))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ObjectDecl {
            tag,
            params,
            fields,
            embedded,
            span: object.span,
        })
    }

    fn resolve_object_field(
        &mut self,
        cx: Context<'_>,
        field: &Field,
    ) -> Result<Field, ResolveError> {
        match field {
            Field::Data(data) => {
                let mut names = Vec::with_capacity(data.names.len());
                for (i, name) in data.names.iter().enumerate() {
                    if i == 0 {
                        names.push(self.resolve_field(name)?);
                    } else {
                        names.push(self.resolve_reference(cx, name)?);
                    }
                }
                Ok(Field::Data(DataDecl { names, span: data.span }))
            }
            Field::Definition(def) => {
                Ok(Field::Definition(self.resolve_field_definition(cx, def)?))
            }
            Field::Value(def) => Ok(Field::Value(self.resolve_field_definition(cx, def)?)),
        }
    }

    fn resolve_field_definition(
        &mut self,
        cx: Context<'_>,
        def: &Definition,
    ) -> Result<Definition, ResolveError> {
        let name = self.resolve_field(&def.name)?;
        let body = cx.in_frame(self.scopes.push(cx.frame));
        let body = self.resolve_expr(body, &def.body)?;
        Ok(Definition { name, body, span: def.span })
    }

    /// A name in declaring position: it was registered by the declare
    /// pass under the current namespace, so it is looked up exactly.
    fn resolve_declared(&self, cx: Context<'_>, name: &Name) -> Result<Name, ResolveError> {
        let qualified = QualifiedName::from_path(cx.namespace, &name.path);
        match self.table.get(qualified.canonical()) {
            Some(symbol) => Ok(Name::new(self.table.qualified_name(symbol).to_path(), name.span)),
            None => Err(ResolveError::InvariantViolation {
                message: format!("`{}` was never declared by the declare pass", qualified),
                span: Some(name.span),
            }),
        }
    }

    /// A field name: always resolved in the shared field namespace.
    fn resolve_field(&self, name: &Name) -> Result<Name, ResolveError> {
        let qualified = self.table.field_name(&name.path);
        match self.table.get(qualified.canonical()) {
            Some(symbol) => Ok(Name::new(self.table.qualified_name(symbol).to_path(), name.span)),
            None => Err(ResolveError::Undeclared {
                name: qualified.canonical().to_string(),
                span: name.span,
                help: None,
            }),
        }
    }

    /// A name referring to an existing global, through the usings of `cx`.
    fn resolve_reference(&self, cx: Context<'_>, name: &Name) -> Result<Name, ResolveError> {
        Ok(Name::new(self.resolve_global(cx, &name.path, name.span)?, name.span))
    }

    fn resolve_global(
        &self,
        cx: Context<'_>,
        path: &Path,
        span: SourceSpan,
    ) -> Result<Path, ResolveError> {
        let prefixes = self.scopes.search_prefixes(cx.frame);
        let symbol = self.table.resolve(prefixes.iter().copied(), path, span)?;
        Ok(self.table.qualified_name(symbol).to_path())
    }

    fn resolve_exprs(
        &mut self,
        cx: Context<'_>,
        exprs: &[Expr],
    ) -> Result<Vec<Expr>, ResolveError> {
        exprs.iter().map(|e| self.resolve_expr(cx, e)).collect()
    }

    fn resolve_boxed(&mut self, cx: Context<'_>, expr: &Expr) -> Result<Box<Expr>, ResolveError> {
        self.resolve_expr(cx, expr).map(Box::new)
    }

    /// Opens a frame for the arm: patterns bind into it left to right, then
    /// guard and body are resolved with those bindings visible.
    fn resolve_arm(&mut self, cx: Context<'_>, arm: &MatchArm) -> Result<MatchArm, ResolveError> {
        let inner = cx.in_frame(self.scopes.push(cx.frame));
        let patterns = self.resolve_exprs(inner.with_mode(Mode::Pattern), &arm.patterns)?;
        let guard = match &arm.guard {
            Some(guard) => Some(self.resolve_boxed(inner.with_mode(Mode::Use), guard)?),
            None => None,
        };
        let body = self.resolve_boxed(inner.with_mode(Mode::Use), &arm.body)?;
        Ok(MatchArm {
            patterns,
            guard,
            body,
            span: arm.span,
        })
    }

    fn resolve_expr(&mut self, cx: Context<'_>, expr: &Expr) -> Result<Expr, ResolveError> {
        let span = expr.span;
        let kind = match &expr.kind {
            ExprKind::Literal(_) | ExprKind::Wildcard => expr.kind.clone(),
            ExprKind::Variable(name) => match cx.mode {
                Mode::Use => match self.scopes.lookup_local(cx.frame, name) {
                    Some(fresh) => ExprKind::Variable(fresh.to_string()),
                    None => {
                        return Err(ResolveError::Undeclared {
                            name: name.clone(),
                            span,
                            help: None,
                        })
                    }
                },
                Mode::Pattern => ExprKind::Variable(self.scopes.bind(cx.frame, name)),
            },
            ExprKind::Combinator(path) => {
                ExprKind::Combinator(self.resolve_global(cx, path, span)?)
            }
            ExprKind::Operator(path) => ExprKind::Operator(self.resolve_global(cx, path, span)?),
            ExprKind::Application { head, args } => ExprKind::Application {
                head: self.resolve_boxed(cx, head)?,
                args: self.resolve_exprs(cx, args)?,
            },
            ExprKind::Tuple(items) => ExprKind::Tuple(self.resolve_exprs(cx, items)?),
            ExprKind::List { items, tail } => ExprKind::List {
                items: self.resolve_exprs(cx, items)?,
                tail: match tail {
                    Some(tail) => Some(self.resolve_boxed(cx, tail)?),
                    None => None,
                },
            },
            ExprKind::Lambda(arms) => ExprKind::Lambda(
                arms.iter()
                    .map(|arm| self.resolve_arm(cx, arm))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            ExprKind::Match(arm) => ExprKind::Match(Box::new(self.resolve_arm(cx, arm)?)),
            ExprKind::Let { bindings, value, body } => {
                // the right-hand side cannot see its own bindings
                let value = self.resolve_boxed(cx.with_mode(Mode::Use), value)?;
                let inner = cx.in_frame(self.scopes.push(cx.frame));
                let bindings = self.resolve_exprs(inner.with_mode(Mode::Pattern), bindings)?;
                let body = self.resolve_boxed(inner.with_mode(Mode::Use), body)?;
                ExprKind::Let { bindings, value, body }
            }
            ExprKind::Tag { payload, tag } => ExprKind::Tag {
                payload: self.resolve_boxed(cx.with_mode(Mode::Pattern), payload)?,
                tag: self.resolve_boxed(cx.with_mode(Mode::Use), tag)?,
            },
            ExprKind::If { cond, then_branch, else_branch } => ExprKind::If {
                cond: self.resolve_boxed(cx, cond)?,
                then_branch: self.resolve_boxed(cx, then_branch)?,
                else_branch: self.resolve_boxed(cx, else_branch)?,
            },
            ExprKind::Try { body, handler } => ExprKind::Try {
                body: self.resolve_boxed(cx, body)?,
                handler: self.resolve_boxed(cx, handler)?,
            },
            ExprKind::Throw(e) => ExprKind::Throw(self.resolve_boxed(cx, e)?),
            ExprKind::Sequence(items) => ExprKind::Sequence(self.resolve_exprs(cx, items)?),
        };
        Ok(Expr::new(kind, span))
    }
}

/// Runs the identify pass over `program` against a populated `table`.
pub fn identify_program(
    program: &Program,
    table: &NameTable,
    fresh_prefix: &str,
) -> Result<Vec<Declaration>, ResolveError> {
    Identifier::new(table, fresh_prefix).identify_program(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::declare_program;
    use egel_syntax::make::*;

    fn identify(program: &Program) -> Result<Vec<Declaration>, ResolveError> {
        let mut table = NameTable::default();
        declare_program(program, &mut table)?;
        identify_program(program, &table, "V_")
    }

    fn body_of(decls: &[Declaration], index: usize) -> String {
        match &decls[index] {
            Declaration::Definition(d) | Declaration::Value(d) | Declaration::Operator(d) => {
                d.body.to_string()
            }
            other => panic!("not a definition: {}", other),
        }
    }

    #[test]
    fn test_match_binds_one_fresh_name() {
        let prog = program(vec![
            operator("+", int(0)),
            def("twice", matches(vec![var("x")], None, binop("+", var("x"), var("x")))),
        ]);
        let decls = identify(&prog).unwrap();
        assert_eq!(body_of(&decls, 1), "V_0 -> ((+) V_0 V_0)");
    }

    #[test]
    fn test_tag_payload_binds_and_tag_refers() {
        let prog = program(vec![
            data(&["int"]),
            def(
                "f",
                lambda(vec![arm(
                    vec![tag(var("X"), comb("int")), var("Y")],
                    None,
                    tuple(vec![var("X"), var("Y")]),
                )]),
            ),
        ]);
        let decls = identify(&prog).unwrap();
        assert_eq!(body_of(&decls, 1), "[ V_0:int V_1 -> (V_0, V_1) ]");
    }

    #[test]
    fn test_field_name_never_resolves_lexically() {
        let prog = program(vec![object(
            "o",
            vec![var("X")],
            vec![field_val("x", var("X"))],
            vec![],
        )]);
        let decls = identify(&prog).unwrap();
        expect_test::expect!["object o V_0 (val OO::x = V_0)"].assert_eq(&decls[0].to_string());
    }
}
