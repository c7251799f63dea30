//! Common constants used throughout the simulation engine.

/// Width of a machine word (instruction, register, and memory row width).
pub const WORD_WIDTH: usize = 32;

/// Width of the instruction opcode field.
pub const OPCODE_WIDTH: usize = 6;

/// Width of a register-number field (rs, rt, rd).
pub const REGISTER_WIDTH: usize = 5;

/// Width of the shift-amount field.
pub const SHAMT_WIDTH: usize = 5;

/// Width of the R-type function field.
pub const FUNCT_WIDTH: usize = 6;

/// Width of the I-type immediate field.
pub const IMMEDIATE_WIDTH: usize = 16;

/// Width of the control unit's ALU-operation selector.
pub const ALU_OP_WIDTH: usize = 2;

/// Number of registers in the register file.
pub const REGISTER_COUNT: usize = 32;

/// Program-counter step per fetch: one instruction slot.
pub const PC_INCREMENT: u64 = 1;

/// Left shift applied to the immediate when forming a branch target.
pub const BRANCH_SHIFT: usize = 2;
