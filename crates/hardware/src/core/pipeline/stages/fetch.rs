//! Instruction Fetch (IF) stage.

use tracing::trace;

use crate::common::bit::Bit;
use crate::common::constants::{PC_INCREMENT, WORD_WIDTH};
use crate::common::error::LogicError;
use crate::common::vector::BitVector;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::logic::arith;
use crate::logic::select::mux2;

/// Executes the fetch stage.
///
/// Increments the PC by one instruction slot, or redirects it to the branch
/// target when the Execute/Memory record asserts `zero AND branch` (the
/// record the Execute stage latched earlier in this same call — branches
/// resolve two ticks after fetch, leaving one delay-slot instruction in
/// flight). The instruction memory is then read at the new PC and
/// `{pc, instruction}` staged into the IF/ID latch.
pub(crate) fn fetch_stage(cpu: &mut Cpu, clock: Bit, rising: bool) -> Result<(), LogicError> {
    let incremented = arith::add_fixed(
        cpu.pc.q(),
        &BitVector::from_unsigned(PC_INCREMENT, WORD_WIDTH),
        Bit::Zero,
    )
    .sum;

    let ex = cpu.ex_mem.current();
    let take_branch = ex.zero.and(ex.ctrl.branch);
    let branch_target = ex.branch_target.clone();
    let next_pc = mux2(&incremented, &branch_target, take_branch);

    cpu.pc.write(&next_pc, clock);
    let pc = cpu.pc.q().clone();

    let instruction = cpu.instruction_memory.read(&pc)?.clone();
    trace!(pc = %pc, instruction = %instruction, "IF");

    if rising && take_branch.is_set() {
        cpu.stats.branches_taken += 1;
    }

    cpu.if_id.write(IfIdEntry { pc, instruction }, clock);
    Ok(())
}
