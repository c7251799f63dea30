//! Writeback (WB) stage.

use tracing::trace;

use crate::common::bit::Bit;
use crate::core::Cpu;
use crate::core::pipeline::latches::WbEntry;
use crate::logic::select::mux2;

/// Executes the writeback stage.
///
/// Selects the ALU result or the loaded data per `mem_to_reg` and stages it
/// — with the destination register and write enable — as the register-file
/// write the next Decode call applies.
pub(crate) fn writeback_stage(cpu: &mut Cpu, clock: Bit) {
    let entry = cpu.mem_wb.current().clone();

    let write_data = mux2(&entry.alu_result, &entry.read_data, entry.ctrl.mem_to_reg);
    trace!(write_reg = %entry.write_reg, write_data = %write_data, "WB");

    cpu.wb.write(
        WbEntry {
            reg_write: entry.ctrl.reg_write,
            write_data,
            write_reg: entry.write_reg,
        },
        clock,
    );
}
