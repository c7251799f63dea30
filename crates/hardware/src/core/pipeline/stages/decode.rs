//! Instruction Decode (ID) stage.

use tracing::trace;

use crate::common::bit::Bit;
use crate::common::constants::WORD_WIDTH;
use crate::common::error::LogicError;
use crate::core::Cpu;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::main_control;
use crate::isa;
use crate::logic::select::mux2;

/// Executes the decode stage.
///
/// Splits the instruction into its fields, decodes the opcode into the
/// control word (unknown opcodes fail loudly), applies the staged writeback
/// to the register file *before* the asynchronous register reads — the
/// write-before-read ordering the storage layer guarantees — sign-extends
/// the immediate, selects the destination register from the current
/// instruction's `reg_dst`, and stages everything into the ID/EX latch.
pub(crate) fn decode_stage(cpu: &mut Cpu, clock: Bit, rising: bool) -> Result<(), LogicError> {
    let entry = cpu.if_id.current().clone();
    let fields = isa::split(&entry.instruction)?;
    let ctrl = main_control(&fields.opcode)?;

    let wb = cpu.wb.current().clone();
    cpu.registers.write(
        &fields.rs,
        &fields.rt,
        &wb.write_reg,
        &wb.write_data,
        wb.reg_write,
        clock,
    )?;
    if rising && wb.reg_write.is_set() {
        cpu.stats.register_writes += 1;
        trace!(write_reg = %wb.write_reg, write_data = %wb.write_data, "ID regfile write");
    }

    let read_data1 = cpu.registers.read_data1().clone();
    let read_data2 = cpu.registers.read_data2().clone();
    let immediate = isa::immediate(&entry.instruction)?.sign_extend_to(WORD_WIDTH);
    let write_reg = mux2(&fields.rt, &fields.rd, ctrl.reg_dst);
    trace!(pc = %entry.pc, opcode = %fields.opcode, "ID");

    cpu.id_ex.write(
        IdExEntry {
            pc: entry.pc,
            ctrl,
            read_data1,
            read_data2,
            immediate,
            funct: fields.funct,
            write_reg,
        },
        clock,
    );
    Ok(())
}
