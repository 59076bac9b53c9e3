use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_expression},
        value::{core::Value, hash_key::HashKey},
    },
};

/// Evaluates an array literal.
///
/// Elements evaluate strictly left-to-right; the first error wins and the
/// remaining elements are not evaluated.
pub fn eval_array_literal(elements: &[Expression], env: &Environment) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());

    for element in elements {
        values.push(eval_expression(element, env)?);
    }

    Ok(Value::Array(Rc::new(values)))
}

/// Evaluates a hash literal.
///
/// Pairs evaluate in source order, key before value. A later pair with an
/// equal key overwrites the earlier one.
///
/// # Errors
/// `unusable as hash key: <type>` when a key evaluates to anything but an
/// integer, boolean, or string; otherwise the first evaluation error of a
/// key or value.
pub fn eval_hash_literal(pairs: &[(Expression, Expression)],
                         env: &Environment)
                         -> EvalResult<Value> {
    let mut entries = HashMap::with_capacity(pairs.len());

    for (key, value) in pairs {
        let key = eval_expression(key, env)?;
        let key = HashKey::try_from(&key)?;
        let value = eval_expression(value, env)?;
        entries.insert(key, value);
    }

    Ok(Value::Hash(Rc::new(entries)))
}

/// Evaluates an index access on evaluated operands.
///
/// - Array with an integer index: out-of-range (including negative) gives
///   `nil`, never an error.
/// - Hash with a hashable key: a missing key gives `nil`.
///
/// # Errors
/// `index operator not supported: <type>` for any other target;
/// `unusable as hash key: <type>` for a non-hashable hash key.
pub fn eval_index(target: &Value, index: &Value) -> EvalResult<Value> {
    match (target, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            let element = usize::try_from(*position).ok()
                                                    .and_then(|position| elements.get(position));
            Ok(element.cloned().unwrap_or(Value::Nil))
        },
        (Value::Hash(entries), key) => {
            let key = HashKey::try_from(key)?;
            Ok(entries.get(&key).cloned().unwrap_or(Value::Nil))
        },
        (other, _) => Err(RuntimeError::IndexNotSupported { target: other.type_name() }),
    }
}
