use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to an evaluated operand.
///
/// - `!` is truthiness inversion: `!true` is `false`, `!nil` is `true`,
///   and every other value, including `0`, negates to `false`.
/// - `-` negates integers (wrapping at the `i64` boundary) and rejects
///   everything else.
///
/// # Errors
/// `unknown operator: -<type>` when `-` is applied to a non-integer.
pub fn eval_prefix(operator: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(Value::Boolean(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                               right: other.type_name() }),
        },
    }
}
