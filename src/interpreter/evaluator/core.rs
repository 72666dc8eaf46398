use std::{cell::RefCell, io::Write, rc::Rc};

use unicode_normalization::UnicodeNormalization;

use crate::{
    ast::{Stmt, VarDecl},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::builtins::register_builtins,
        value::{Function, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The evaluator's non-local flow record.
///
/// Every statement evaluation produces one of these. `Break` and `Continue`
/// are consumed by the nearest enclosing loop, `Return` by the nearest
/// enclosing call; a signal escaping its container becomes a runtime error.
/// Signals are never carried inside runtime values.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Ordinary completion; evaluation continues with the next statement.
    Normal,
    /// A `থামো` travelling to the nearest enclosing loop.
    Break {
        /// The line of the `থামো` keyword.
        line: usize,
    },
    /// A `চালিয়ে_যাও` travelling to the nearest enclosing loop.
    Continue {
        /// The line of the `চালিয়ে_যাও` keyword.
        line: usize,
    },
    /// A `ফেরত` travelling to the nearest enclosing call.
    Return {
        /// The returned value (`nil` for a bare return).
        value: Value,
        /// The line of the `ফেরত` keyword.
        line:  usize,
    },
}

/// Stores the runtime execution state.
///
/// The interpreter owns the global environment, populated exactly once with
/// the built-in table at construction, and a persistent top-level scope in
/// which user statements run. The same interpreter can serve many
/// `interpret` calls, which is what keeps variables alive between prompt
/// lines in interactive mode.
pub struct Interpreter {
    env: Rc<RefCell<Environment>>,
    out: Rc<RefCell<dyn Write>>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter writing program output to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Rc::new(RefCell::new(std::io::stdout())))
    }

    /// Creates an interpreter writing program output to `out`.
    ///
    /// Tests pass an `Rc<RefCell<Vec<u8>>>` here and read the buffer back
    /// after running a program.
    #[must_use]
    pub fn with_output(out: Rc<RefCell<dyn Write>>) -> Self {
        let mut globals = Environment::new();
        register_builtins(&mut globals);

        let globals = Rc::new(RefCell::new(globals));
        let env = Rc::new(RefCell::new(Environment::with_parent(globals)));

        Self { env, out }
    }

    /// Writes prompt text to the output sink without a trailing newline,
    /// flushing so it is visible before the read it precedes.
    ///
    /// Built-ins must route every host-visible write through this sink; a
    /// captured-output interpreter observes prompts the same way it observes
    /// `দেখাও`.
    pub(crate) fn write_prompt(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        let _ = write!(out, "{text}");
        let _ = out.flush();
    }

    /// Evaluates a sequence of top-level statements.
    ///
    /// A `থামো`, `চালিয়ে_যাও` or `ফেরত` signal reaching the top level is
    /// converted into the corresponding runtime error. In interactive mode
    /// (`repl`), expression statements echo their value.
    ///
    /// # Parameters
    /// - `statements`: The program, in source order.
    /// - `repl`: Whether expression statements should echo their values.
    ///
    /// # Errors
    /// The first runtime error aborts evaluation and is returned.
    pub fn interpret(&mut self, statements: &[Stmt], repl: bool) -> EvalResult<()> {
        let env = self.env.clone();

        for statement in statements {
            match self.eval_stmt(statement, &env, repl)? {
                Flow::Normal => {},
                Flow::Break { line } => return Err(RuntimeError::BreakOutsideLoop { line }),
                Flow::Continue { line } => return Err(RuntimeError::ContinueOutsideLoop { line }),
                Flow::Return { line, .. } => {
                    return Err(RuntimeError::ReturnOutsideFunction { line });
                },
            }
        }

        Ok(())
    }

    /// Evaluates a single statement in the given environment.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: The active scope.
    /// - `repl`: Whether expression statements echo their values.
    ///
    /// # Returns
    /// The control-flow signal the statement produced.
    pub fn eval_stmt(&mut self,
                     statement: &Stmt,
                     env: &Rc<RefCell<Environment>>,
                     repl: bool)
                     -> EvalResult<Flow> {
        match statement {
            Stmt::Expression { expr, .. } => {
                let value = self.eval_expr(expr, env)?;
                if repl {
                    let _ = writeln!(self.out.borrow_mut(), "{value}");
                }
                Ok(Flow::Normal)
            },

            Stmt::Print { expr, .. } => {
                let value = self.eval_expr(expr, env)?;
                // Terminal renderers expect composed forms, so output is
                // normalized to NFC even though the lexer never normalizes.
                let text: String = value.to_string().nfc().collect();
                let _ = writeln!(self.out.borrow_mut(), "{text}");
                Ok(Flow::Normal)
            },

            Stmt::Var(declaration) => {
                self.declare_variable(declaration, env)?;
                Ok(Flow::Normal)
            },

            Stmt::VarList { declarations } => {
                for declaration in declarations {
                    self.declare_variable(declaration, env)?;
                }
                Ok(Flow::Normal)
            },

            Stmt::Block { statements, .. } => {
                let child = Rc::new(RefCell::new(Environment::with_parent(env.clone())));

                for statement in statements {
                    match self.eval_stmt(statement, &child, repl)? {
                        Flow::Normal => {},
                        signal => return Ok(signal),
                    }
                }

                Ok(Flow::Normal)
            },

            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                if self.eval_expr(condition, env)?.is_truthy() {
                    self.eval_stmt(then_branch, env, repl)
                } else if let Some(else_branch) = else_branch {
                    self.eval_stmt(else_branch, env, repl)
                } else {
                    Ok(Flow::Normal)
                }
            },

            Stmt::While { condition, body, .. } => {
                loop {
                    if !self.eval_expr(condition, env)?.is_truthy() {
                        break;
                    }

                    match self.eval_stmt(body, env, repl)? {
                        Flow::Normal | Flow::Continue { .. } => {},
                        Flow::Break { .. } => break,
                        signal @ Flow::Return { .. } => return Ok(signal),
                    }
                }
                Ok(Flow::Normal)
            },

            Stmt::For { initializer,
                        condition,
                        increment,
                        body,
                        .. } => self.eval_for(initializer.as_deref(),
                                              condition.as_ref(),
                                              increment.as_ref(),
                                              body,
                                              env,
                                              repl),

            Stmt::Break { line } => Ok(Flow::Break { line: *line }),

            Stmt::Continue { line } => Ok(Flow::Continue { line: *line }),

            Stmt::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return { value, line: *line })
            },

            Stmt::Function { name, params, body, .. } => {
                let function = Function { name:    name.clone(),
                                          params:  params.clone(),
                                          body:    body.clone(),
                                          closure: env.clone(), };
                env.borrow_mut().define(name.clone(), Value::Function(Rc::new(function)));
                Ok(Flow::Normal)
            },
        }
    }

    /// Evaluates a `ফর` loop.
    ///
    /// When the initializer declares variables, the loop runs in a fresh
    /// child environment so the declarations live exactly as long as the
    /// loop. `চালিয়ে_যাও` skips to the increment, `থামো` exits the loop and
    /// `ফেরত` propagates outward.
    fn eval_for(&mut self,
                initializer: Option<&Stmt>,
                condition: Option<&crate::ast::Expr>,
                increment: Option<&crate::ast::Expr>,
                body: &Stmt,
                env: &Rc<RefCell<Environment>>,
                repl: bool)
                -> EvalResult<Flow> {
        let declares = matches!(initializer, Some(Stmt::Var(_) | Stmt::VarList { .. }));
        let loop_env = if declares {
            Rc::new(RefCell::new(Environment::with_parent(env.clone())))
        } else {
            env.clone()
        };

        if let Some(initializer) = initializer {
            match self.eval_stmt(initializer, &loop_env, repl)? {
                Flow::Normal => {},
                signal => return Ok(signal),
            }
        }

        loop {
            if let Some(condition) = condition
               && !self.eval_expr(condition, &loop_env)?.is_truthy()
            {
                break;
            }

            match self.eval_stmt(body, &loop_env, repl)? {
                Flow::Normal | Flow::Continue { .. } => {},
                Flow::Break { .. } => break,
                signal @ Flow::Return { .. } => return Ok(signal),
            }

            if let Some(increment) = increment {
                self.eval_expr(increment, &loop_env)?;
            }
        }

        Ok(Flow::Normal)
    }

    /// Evaluates one `ধরি` declarator.
    ///
    /// The initializer (or `nil`) is evaluated first; redeclaring a name
    /// already bound in the same scope is an error, while shadowing an outer
    /// scope is allowed.
    fn declare_variable(&mut self,
                        declaration: &VarDecl,
                        env: &Rc<RefCell<Environment>>)
                        -> EvalResult<()> {
        let value = match &declaration.initializer {
            Some(expr) => self.eval_expr(expr, env)?,
            None => Value::Nil,
        };

        if env.borrow().get_in_current(&declaration.name).is_some() {
            return Err(RuntimeError::Redeclaration { name: declaration.name.clone(),
                                                     line: declaration.line, });
        }

        env.borrow_mut().define(declaration.name.clone(), value);
        Ok(())
    }
}
