use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::{Expr, LogicalOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            binary::eval_binary,
            core::{EvalResult, Interpreter},
            unary::eval_unary,
        },
        value::Value,
    },
    util::num::i64_to_usize,
};

impl Interpreter {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Evaluation is
    /// strict, left-to-right and depth-first; a runtime error aborts the
    /// whole expression.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The active scope.
    ///
    /// # Returns
    /// The computed value.
    pub fn eval_expr(&mut self,
                     expr: &Expr,
                     env: &Rc<RefCell<Environment>>)
                     -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),

            Expr::Grouping { expr, .. } => self.eval_expr(expr, env),

            Expr::Variable { name, line } => {
                env.borrow()
                   .get(name)
                   .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                    line: *line, })
            },

            Expr::Unary { op, expr, line } => {
                let value = self.eval_expr(expr, env)?;
                eval_unary(*op, &value, *line)
            },

            Expr::Binary { left, op, right, line } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                eval_binary(*op, &left, &right, *line)
            },

            Expr::Logical { left, op, right, .. } => {
                let left = self.eval_expr(left, env)?;

                match op {
                    LogicalOperator::Or if left.is_truthy() => Ok(left),
                    LogicalOperator::And if !left.is_truthy() => Ok(left),
                    _ => self.eval_expr(right, env),
                }
            },

            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, env),

            Expr::ArrayLiteral { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expr(element, env)?);
                }
                Ok(values.into())
            },

            Expr::ObjectLiteral { properties, .. } => {
                let mut object = HashMap::with_capacity(properties.len());
                for (name, value) in properties {
                    object.insert(name.clone(), self.eval_expr(value, env)?);
                }
                Ok(Value::Object(Rc::new(RefCell::new(object))))
            },

            Expr::Index { array, index, line } => self.eval_index(array, index, *line, env),

            Expr::Property { object, name, line } => {
                let object_value = self.eval_expr(object, env)?;

                let Value::Object(properties) = &object_value else {
                    return Err(RuntimeError::NotAnObject { line: *line });
                };

                let property = properties.borrow().get(name).cloned();
                property.ok_or_else(|| RuntimeError::PropertyMissing {
                            name:   name.clone(),
                            object: object_value.to_string(),
                            line:   *line,
                        })
            },

            Expr::Assign { name, value, line } => {
                let value = self.eval_expr(value, env)?;

                if env.borrow_mut().assign(name, value.clone()) {
                    Ok(value)
                } else {
                    Err(RuntimeError::UndefinedAssignment { name: name.clone(),
                                                            line: *line, })
                }
            },

            Expr::AssignIndex { array,
                                index,
                                value,
                                line, } => self.eval_index_assignment(array, index, value, *line, env),

            Expr::AssignProperty { object,
                                   name,
                                   value,
                                   line, } => {
                let object_value = self.eval_expr(object, env)?;

                let Value::Object(properties) = object_value else {
                    return Err(RuntimeError::NotAnObjectAssignment { line: *line });
                };

                let value = self.eval_expr(value, env)?;
                properties.borrow_mut().insert(name.clone(), value.clone());
                Ok(value)
            },
        }
    }

    /// Evaluates an array indexing expression.
    ///
    /// The collection must be an array and the index an exact integer within
    /// `[0, len)`.
    fn eval_index(&mut self,
                  array: &Expr,
                  index: &Expr,
                  line: usize,
                  env: &Rc<RefCell<Environment>>)
                  -> EvalResult<Value> {
        let array_value = self.eval_expr(array, env)?;
        let index_value = self.eval_expr(index, env)?;

        let Value::Array(elements) = array_value else {
            return Err(RuntimeError::NotAnArray { line });
        };

        let index = index_value.as_exact_integer()
                               .ok_or(RuntimeError::IndexNotInteger { line })?;
        let index = i64_to_usize(index).ok_or(RuntimeError::IndexOutOfBounds { line })?;

        let elements = elements.borrow();
        elements.get(index)
                .cloned()
                .ok_or(RuntimeError::IndexOutOfBounds { line })
    }

    /// Evaluates an assignment through an array index.
    ///
    /// The element is written in place, so every alias of the array observes
    /// the change.
    fn eval_index_assignment(&mut self,
                             array: &Expr,
                             index: &Expr,
                             value: &Expr,
                             line: usize,
                             env: &Rc<RefCell<Environment>>)
                             -> EvalResult<Value> {
        let array_value = self.eval_expr(array, env)?;
        let index_value = self.eval_expr(index, env)?;
        let value = self.eval_expr(value, env)?;

        let Value::Array(elements) = array_value else {
            return Err(RuntimeError::NotAnArrayAssignment { line });
        };

        let index = index_value.as_exact_integer()
                               .ok_or(RuntimeError::IndexNotInteger { line })?;
        let index = i64_to_usize(index).ok_or(RuntimeError::IndexOutOfBounds { line })?;

        let mut elements = elements.borrow_mut();
        let Some(slot) = elements.get_mut(index) else {
            return Err(RuntimeError::IndexOutOfBounds { line });
        };

        *slot = value.clone();
        Ok(value)
    }
}
