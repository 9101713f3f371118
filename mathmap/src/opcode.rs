use std::fmt;

/// A single instruction of a compiled expression program.
///
/// The vector stack machine in [`crate::vm`] executes these in order against
/// `stacksize` vector slots. Each variant documents its stack effect in
/// terms of how many operands it consumes from the top of the stack and
/// what it leaves behind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Opcode {
    /// No effect. Emitted for symbols that only affect parenthesis/priority
    /// bookkeeping during scheduling (openers, commas, unary `+`) and never
    /// appears in a finished program.
    Null,
    /// Push the next constant from the pool, replicated across all `N`
    /// points.
    Ldcon,
    /// Push the input vector whose index is the next constant in the pool.
    Ldvar,
    /// Push a vector filled with [`crate::constants::BAD`].
    Ldbad,
    /// Negate the top of stack in place.
    Neg,
    /// Square root. Negative operand produces BAD.
    Sqrt,
    /// Natural logarithm. Non-positive operand produces BAD.
    Log,
    /// Base-10 logarithm. Non-positive operand produces BAD.
    Log10,
    /// `e^x`. Overflow produces BAD.
    Exp,
    /// Sine, radians.
    Sin,
    /// Cosine, radians.
    Cos,
    /// Tangent, radians. Overflow produces BAD.
    Tan,
    /// Sine, degrees.
    Sind,
    /// Cosine, degrees.
    Cosd,
    /// Tangent, degrees. Overflow produces BAD.
    Tand,
    /// Arcsine, radians. `|x| > 1` produces BAD.
    Asin,
    /// Arccosine, radians. `|x| > 1` produces BAD.
    Acos,
    /// Arctangent, radians.
    Atan,
    /// Arcsine, degrees. `|x| > 1` produces BAD.
    Asind,
    /// Arccosine, degrees. `|x| > 1` produces BAD.
    Acosd,
    /// Arctangent, degrees.
    Atand,
    /// Hyperbolic sine. Overflow produces BAD.
    Sinh,
    /// Hyperbolic cosine. Overflow produces BAD.
    Cosh,
    /// Hyperbolic tangent. Overflow produces BAD.
    Tanh,
    /// Absolute value.
    Abs,
    /// Ceiling.
    Ceil,
    /// Floor.
    Floor,
    /// Round to nearest integer, half away from zero.
    Nint,
    /// Pop two, push their overflow-safe sum.
    Add,
    /// Pop two, push their overflow-safe difference.
    Sub,
    /// Pop two, push their overflow-safe product.
    Mul,
    /// Pop two, push their overflow-safe quotient. Zero divisor produces
    /// BAD.
    Div,
    /// Pop two, push `x1.powf(x2)` guarded against domain and overflow
    /// failure.
    Pwr,
    /// Consume a constant `k`, then repeatedly pop-and-compare `k - 1`
    /// times, pushing the minimum.
    Min,
    /// Consume a constant `k`, then repeatedly pop-and-compare `k - 1`
    /// times, pushing the maximum.
    Max,
    /// Pop two, push `max(x1 - x2, 0)`.
    Dim,
    /// Pop two, push the mathematical remainder of `x1` by `x2`. Zero
    /// divisor produces BAD.
    Mod,
    /// Pop two, push `x1` with the sign of `x2`.
    Sign,
    /// Pop two, push `atan2(x1, x2)`, radians.
    Atan2,
    /// Pop two, push `atan2(x1, x2)`, degrees.
    Atan2d,
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Opcode {
    /// The number of stack slots this opcode consumes from the top of the
    /// stack before producing its single result, for non-variadic opcodes.
    /// [`Opcode::Min`] and [`Opcode::Max`] are handled separately by the VM
    /// since their arity is only known at runtime from the constant pool.
    pub fn fixed_arity(self) -> usize {
        use Opcode::*;
        match self {
            Null | Ldcon | Ldvar | Ldbad => 0,
            Neg | Sqrt | Log | Log10 | Exp | Sin | Cos | Tan | Sind | Cosd | Tand | Asin | Acos
            | Atan | Asind | Acosd | Atand | Sinh | Cosh | Tanh | Abs | Ceil | Floor | Nint => 1,
            Add | Sub | Mul | Div | Pwr | Dim | Mod | Sign | Atan2 | Atan2d => 2,
            Min | Max => 0,
        }
    }
}
