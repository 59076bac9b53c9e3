use std::rc::Rc;

use crate::{
    ast::{Block, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary, builtin, collection, function, unary},
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. The `?` operator is the error
/// propagation rule: the first failing sub-evaluation aborts its parents
/// without evaluating any remaining siblings.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program.
///
/// Statements run in order and the last produced value is the result. A
/// `return` at the top level stops the program early and its unwrapped
/// payload becomes the result.
///
/// # Errors
/// The first runtime error aborts the run and is returned unchanged.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     lexer::tokenize,
///     parser::core::Parser,
///     value::core::Value,
/// };
///
/// let program = Parser::new(tokenize("let a = 5; a + 2;")).parse_program();
/// let result = eval_program(&program, &Environment::new()).unwrap();
///
/// assert_eq!(result, Value::from(7));
/// ```
pub fn eval_program(program: &Program, env: &Environment) -> EvalResult<Value> {
    let mut result = Value::Nil;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Value::ReturnValue(value) => return Ok(*value),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval_program`], a block that hits a `return` re-returns the
/// wrapper *still wrapped*. That asymmetry is what carries a `return`
/// across nested blocks until a function frame (or the program) unwraps
/// it.
pub(crate) fn eval_block(block: &Block, env: &Environment) -> EvalResult<Value> {
    let mut result = Value::Nil;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if matches!(result, Value::ReturnValue(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
fn eval_statement(statement: &Statement, env: &Environment) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.set(name.clone(), value);
            Ok(Value::Nil)
        },
        Statement::Return(None) => Ok(Value::ReturnValue(Box::new(Value::Nil))),
        Statement::Return(Some(value)) => {
            let value = eval_expression(value, env)?;
            Ok(Value::ReturnValue(Box::new(value)))
        },
        Statement::Expression(expression) => eval_expression(expression, env),
    }
}

/// Evaluates an expression.
///
/// This is the central dispatch: every expression variant is either
/// handled inline or routed to its submodule.
pub fn eval_expression(expression: &Expression, env: &Environment) -> EvalResult<Value> {
    match expression {
        Expression::Integer(value) => Ok(Value::Integer(*value)),
        Expression::Boolean(value) => Ok(Value::Boolean(*value)),
        Expression::Str(value) => Ok(Value::Str(value.clone())),
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::Array(elements) => collection::eval_array_literal(elements, env),
        Expression::Hash(pairs) => collection::eval_hash_literal(pairs, env),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_prefix(*operator, &right)
        },
        Expression::Infix { left,
                            operator,
                            right, } => binary::eval_infix(*operator, left, right, env),
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expression::Function { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       Rc::clone(body),
                                                       env:        env.clone(), })))
        },
        Expression::Call { callee, arguments } => function::eval_call(callee, arguments, env),
        Expression::Index { target, index } => {
            let target = eval_expression(target, env)?;
            let index = eval_expression(index, env)?;
            collection::eval_index(&target, &index)
        },
    }
}

/// Resolves a name: the environment chain first, then the builtin table.
///
/// A `let` binding therefore shadows a builtin of the same name.
fn eval_identifier(name: &str, env: &Environment) -> EvalResult<Value> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }
    if let Some(builtin) = builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_owned() })
}

/// Evaluates a conditional: a truthy condition selects the consequence,
/// otherwise the alternative runs when present. A skipped conditional
/// yields `nil`, as does an empty branch.
fn eval_if_expression(condition: &Expression,
                      consequence: &Block,
                      alternative: Option<&Block>,
                      env: &Environment)
                      -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Nil)
    }
}
