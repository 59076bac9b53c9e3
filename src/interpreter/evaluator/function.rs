use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_block, eval_expression},
        value::core::Value,
    },
};

/// Evaluates a call expression.
///
/// The callee evaluates first, then the arguments left-to-right; the first
/// error in either suppresses everything after it.
pub fn eval_call(callee: &Expression,
                 arguments: &[Expression],
                 env: &Environment)
                 -> EvalResult<Value> {
    let callee = eval_expression(callee, env)?;

    let mut values = Vec::with_capacity(arguments.len());
    for argument in arguments {
        values.push(eval_expression(argument, env)?);
    }

    apply(&callee, values)
}

/// Applies a callable value to evaluated arguments.
///
/// A closure gets a fresh frame enclosed over its captured environment,
/// with parameters bound in order; arity must match exactly. The body's
/// result has a top-level `return` wrapper unwrapped exactly once, so a
/// `return` inside the body yields the returned value to the caller
/// without unwinding any further.
///
/// # Errors
/// - `not a function: <type>` when the callee is not callable.
/// - `argument mismatch: got <n>, want <m>` on an arity mismatch.
/// - Whatever the body or builtin raises.
pub fn apply(callee: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::ArgumentMismatch { got:  arguments.len(),
                                                            want: function.parameters.len(), });
            }

            let scope = function.env.enclose();
            for (name, value) in function.parameters.iter().zip(arguments) {
                scope.set(name.clone(), value);
            }

            let result = eval_block(&function.body, &scope)?;
            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => builtin.apply(&arguments),
        other => Err(RuntimeError::NotAFunction { callee: other.type_name() }),
    }
}

/// Strips one `return` wrapper, if present.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::ReturnValue(value) => *value,
        other => other,
    }
}
