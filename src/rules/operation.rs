//! Arithmetic operation engine.
//!
//! House rules:
//! - `-` is the absolute difference, so subtraction never goes negative
//! - `/` is only allowed when it divides exactly and the divisor is non-zero
//! - `+`, `-`, `*` are legal for any operands, zero included
//!
//! Arithmetic is checked: a result that does not fit in `i64` is reported
//! as `IllegalOperation::Overflow`, and `is_legal` agrees with `apply` on
//! it, so a legal operation can always be applied.

use smallvec::SmallVec;

use crate::core::{IllegalOperation, Operation};

/// The legal subset of the four operations for some operand pair.
pub type LegalOperations = SmallVec<[Operation; 4]>;

/// Apply `op` to `(a, b)`. `a` is always the left operand.
pub fn apply(a: i64, b: i64, op: Operation) -> Result<i64, IllegalOperation> {
    let overflow = IllegalOperation::Overflow {
        lhs: a,
        rhs: b,
        operation: op,
    };

    match op {
        Operation::Add => a.checked_add(b).ok_or(overflow),
        Operation::Subtract => a.checked_sub(b).and_then(i64::checked_abs).ok_or(overflow),
        Operation::Multiply => a.checked_mul(b).ok_or(overflow),
        Operation::Divide => {
            if b == 0 {
                return Err(IllegalOperation::DivisionByZero);
            }
            match a.checked_rem(b) {
                Some(0) => a.checked_div(b).ok_or(overflow),
                Some(_) => Err(IllegalOperation::NonIntegerDivision {
                    dividend: a,
                    divisor: b,
                }),
                None => Err(overflow),
            }
        }
    }
}

/// Whether `a / b` divides exactly.
#[must_use]
pub fn can_divide(a: i64, b: i64) -> bool {
    b != 0 && a.checked_rem(b) == Some(0) && a.checked_div(b).is_some()
}

/// Whether `op` can be applied to `(a, b)` without error.
#[must_use]
pub fn is_legal(a: i64, b: i64, op: Operation) -> bool {
    match op {
        Operation::Divide => can_divide(a, b),
        _ => apply(a, b, op).is_ok(),
    }
}

/// All operations legal for `(a, b)`, in menu order.
#[must_use]
pub fn legal_operations(a: i64, b: i64) -> LegalOperations {
    Operation::ALL
        .into_iter()
        .filter(|&op| is_legal(a, b, op))
        .collect()
}
