//! Types for the grook AST.
//!
//! Pure data: the interpreter and the renderer both walk these nodes with
//! exhaustive matches, nothing here has behavior of its own beyond
//! structural traversal.

/// A single primitive instruction, or a loop over a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Op {
    /// Add one to the current cell
    Increment,
    /// Subtract one from the current cell
    Decrement,
    /// Move the cursor one cell left
    ShiftLeft,
    /// Move the cursor one cell right
    ShiftRight,
    /// Write the current cell to the output sink
    Output,
    /// Read one byte of input into the current cell
    Input,
    /// Run the nested block while the current cell is nonzero
    Loop(Block),
}

/// An operation plus the source line it was parsed from, kept for runtime
/// error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Node {
    pub line: usize,
    pub op: Op,
}

/// An ordered sequence of nodes. Execution order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Block {
    pub nodes: Vec<Node>,
}

impl Block {
    /// Flattened count of primitive instructions; loop markers themselves
    /// do not count, their bodies do.
    pub fn instruction_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match &node.op {
                Op::Loop(body) => body.instruction_count(),
                _ => 1,
            })
            .sum()
    }
}

/// The root block of a successfully parsed source text.
pub type Program = Block;
