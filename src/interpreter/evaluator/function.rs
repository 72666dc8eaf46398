use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            builtins::Arity,
            core::{EvalResult, Flow, Interpreter},
        },
        value::{Function, Value},
    },
};

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first and must be callable. The argument
    /// count is checked against the callee's arity before the arguments are
    /// evaluated; variadic built-ins validate their own counts. The
    /// arguments are then evaluated left to right and the call dispatched.
    ///
    /// # Parameters
    /// - `callee`: The expression being called.
    /// - `arguments`: Argument expressions, in source order.
    /// - `line`: Line of the call's closing parenthesis.
    /// - `env`: The active scope.
    ///
    /// # Returns
    /// The call's result; a call completing without `ফেরত` yields `nil`.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize,
                            env: &Rc<RefCell<Environment>>)
                            -> EvalResult<Value> {
        let callee_value = self.eval_expr(callee, env)?;

        match callee_value {
            Value::Function(function) => {
                if arguments.len() != function.params.len() {
                    return Err(RuntimeError::ArityMismatch { expected: function.params.len(),
                                                             found:    arguments.len(),
                                                             line, });
                }

                let args = self.eval_arguments(arguments, env)?;
                self.call_function(&function, args)
            },

            Value::Native(native) => {
                if let Arity::Exact(expected) = native.arity
                   && arguments.len() != expected
                {
                    return Err(RuntimeError::ArityMismatch { expected,
                                                             found: arguments.len(),
                                                             line });
                }

                let args = self.eval_arguments(arguments, env)?;
                (native.func)(self, &args, line)
            },

            _ => Err(RuntimeError::NotCallable { line }),
        }
    }

    /// Calls a user-defined function with already-evaluated arguments.
    ///
    /// A fresh call-frame environment is created whose parent is the
    /// function's closure. The function binds its own name into the frame so
    /// recursion works through closures, then its parameters in declaration
    /// order. A `ফেরত` signal yields the return value; normal completion
    /// yields `nil`; a loop signal escaping the body is a runtime error.
    pub(crate) fn call_function(&mut self,
                                function: &Rc<Function>,
                                args: Vec<Value>)
                                -> EvalResult<Value> {
        let frame = Rc::new(RefCell::new(Environment::with_parent(function.closure.clone())));

        {
            let mut frame = frame.borrow_mut();
            frame.define(function.name.clone(), Value::Function(function.clone()));
            for (param, arg) in function.params.iter().zip(args) {
                frame.define(param.clone(), arg);
            }
        }

        for statement in &function.body {
            match self.eval_stmt(statement, &frame, false)? {
                Flow::Normal => {},
                Flow::Return { value, .. } => return Ok(value),
                Flow::Break { line } => return Err(RuntimeError::BreakOutsideLoop { line }),
                Flow::Continue { line } => {
                    return Err(RuntimeError::ContinueOutsideLoop { line });
                },
            }
        }

        Ok(Value::Nil)
    }

    /// Evaluates argument expressions left to right.
    fn eval_arguments(&mut self,
                      arguments: &[Expr],
                      env: &Rc<RefCell<Environment>>)
                      -> EvalResult<Vec<Value>> {
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_expr(argument, env)?);
        }
        Ok(args)
    }
}
