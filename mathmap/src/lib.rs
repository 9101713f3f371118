//! Compiles `variable = expression` function text into a bidirectional
//! coordinate transformation and evaluates it on vectors of points.
//!
//! A [`mathmap::MathMap`](MathMap) is built from two arrays of function
//! strings — a forward set and an inverse set — via [`MathMap::new`],
//! then evaluated with [`MathMap::transform`]. Compilation runs each
//! expression through a small pipeline: [`lexer::tokenize`] walks the
//! symbol table left to right, [`scheduler::schedule`] reorders the
//! result into postfix opcodes via shunting-yard, and [`vm::execute`]
//! runs the opcodes against `N`-point coordinate vectors.
//!
//! ```
//! use mathmap::MathMap;
//!
//! let map = MathMap::new(1, 1, &["y = x * 2"], &["x = y / 2"], false, &[]).unwrap();
//! let x = [1.0, 2.0, 3.0];
//! let mut y = [0.0; 3];
//! {
//!     let mut outputs: Vec<&mut [f64]> = vec![&mut y];
//!     map.transform(&[&x], 3, true, &mut outputs).unwrap();
//! }
//! assert_eq!(y, [2.0, 4.0, 6.0]);
//! ```

mod compiler;
mod constants;
mod error;
mod lexer;
mod mathmap;
mod numeric;
mod opcode;
mod program;
mod scheduler;
mod symbol_table;
mod vm;

pub use constants::{is_bad, BAD};
pub use error::{CompileError, Error, Result, RuntimeError};
pub use mathmap::{MathMap, SimplificationHint};
pub use opcode::Opcode;
pub use program::Program;

#[cfg(test)]
mod test;
