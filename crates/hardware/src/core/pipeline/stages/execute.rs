//! Execute (EX) stage.

use tracing::trace;

use crate::common::bit::Bit;
use crate::common::constants::BRANCH_SHIFT;
use crate::common::error::LogicError;
use crate::core::Cpu;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::signals::alu_control;
use crate::core::units::alu::Alu;
use crate::logic::arith;
use crate::logic::select::mux2;

/// Executes the execute stage.
///
/// Derives the concrete ALU operation from `alu_op` and the funct field,
/// selects the B operand (`read_data2` or the immediate per `alu_src`),
/// runs the ALU, computes the candidate branch target
/// `pc + (immediate << 2)`, and stages the results into the EX/MEM latch.
pub(crate) fn execute_stage(cpu: &mut Cpu, clock: Bit) -> Result<(), LogicError> {
    let entry = cpu.id_ex.current().clone();

    let op = alu_control(&entry.ctrl.alu_op, &entry.funct)?;
    let b = mux2(&entry.read_data2, &entry.immediate, entry.ctrl.alu_src);
    let alu = Alu::execute(op, &entry.read_data1, &b);

    let shifted = arith::shift_left(&entry.immediate, BRANCH_SHIFT);
    let branch_target = arith::add_fixed(&shifted, &entry.pc, Bit::Zero).sum;
    trace!(pc = %entry.pc, op = ?op, result = %alu.result, "EX");

    cpu.ex_mem.write(
        ExMemEntry {
            branch_target,
            zero: alu.zero,
            alu_result: alu.result,
            write_data: entry.read_data2,
            write_reg: entry.write_reg,
            ctrl: entry.ctrl,
        },
        clock,
    );
    Ok(())
}
