//! Memory Access (MEM) stage.

use tracing::trace;

use crate::common::bit::Bit;
use crate::common::error::LogicError;
use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;

/// Executes the memory stage.
///
/// Performs the conditional data-memory write (`mem_write`, on the rising
/// edge) addressed by the ALU result, reads the same address
/// combinationally — same-tick writes are visible per the storage ordering
/// — and stages `{read_data, alu_result, pass-through}` into the MEM/WB
/// latch.
pub(crate) fn memory_stage(cpu: &mut Cpu, clock: Bit, rising: bool) -> Result<(), LogicError> {
    let entry = cpu.ex_mem.current().clone();

    cpu.data_memory.write(
        &entry.alu_result,
        &entry.write_data,
        entry.ctrl.mem_write,
        clock,
    )?;
    if rising && entry.ctrl.mem_write.is_set() {
        cpu.stats.memory_writes += 1;
        trace!(address = %entry.alu_result, data = %entry.write_data, "MEM write");
    }
    let read_data = cpu.data_memory.output().clone();

    cpu.mem_wb.write(
        MemWbEntry {
            read_data,
            alu_result: entry.alu_result,
            write_reg: entry.write_reg,
            ctrl: entry.ctrl,
        },
        clock,
    );
    Ok(())
}
