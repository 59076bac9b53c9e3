use crate::{
    ast::{Expression, InfixOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_expression},
        value::core::Value,
    },
};

/// Evaluates a binary operator application.
///
/// The left operand always evaluates first. `&&` and `||` are handled
/// before the right operand is touched: they are value-returning and
/// short-circuiting, so `a && b` is `a` when `a` is falsy and `b`
/// otherwise, and `a || b` is `a` when `a` is truthy and `b` otherwise.
/// No type constraints apply to them. Every other operator evaluates both
/// sides and dispatches on their types.
pub fn eval_infix(operator: InfixOperator,
                  left: &Expression,
                  right: &Expression,
                  env: &Environment)
                  -> EvalResult<Value> {
    let left = eval_expression(left, env)?;

    match operator {
        InfixOperator::And => {
            if left.is_truthy() {
                eval_expression(right, env)
            } else {
                Ok(left)
            }
        },
        InfixOperator::Or => {
            if left.is_truthy() {
                Ok(left)
            } else {
                eval_expression(right, env)
            }
        },
        _ => {
            let right = eval_expression(right, env)?;
            eval_binary_values(operator, &left, &right)
        },
    }
}

/// Dispatches a non-short-circuiting operator on two evaluated operands.
///
/// Order matters and is observable through the error messages: integer
/// pairs first, then string pairs, then the differing-type check, then the
/// identity fallback for `==`/`!=`. `5 == true` is therefore a type
/// mismatch, while `true == true` reaches the fallback.
fn eval_binary_values(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(operator, l, r),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             operator,
                                             right: right.type_name() })
        },
        _ => match operator {
            InfixOperator::Equal => Ok(Value::Boolean(left.same_identity(right))),
            InfixOperator::NotEqual => Ok(Value::Boolean(!left.same_identity(right))),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          operator,
                                                          right: right.type_name() }),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps at the `i64` boundary; division truncates toward zero
/// and shares the host's remainder sign behavior. A zero divisor raises
/// `division by zero` for both `/` and `%`.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match operator {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        InfixOperator::Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_rem(right))
        },
        InfixOperator::Less => Value::Boolean(left < right),
        InfixOperator::Greater => Value::Boolean(left > right),
        InfixOperator::Equal => Value::Boolean(left == right),
        InfixOperator::NotEqual => Value::Boolean(left != right),
        InfixOperator::And | InfixOperator::Or => {
            unreachable!("short-circuit operators never reach value dispatch")
        },
    };

    Ok(value)
}

/// String operators: `+` concatenates, nothing else is defined.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => {
            let mut joined = String::with_capacity(left.len() + right.len());
            joined.push_str(left);
            joined.push_str(right);
            Ok(Value::Str(joined))
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      operator,
                                                      right: "STRING" }),
    }
}
