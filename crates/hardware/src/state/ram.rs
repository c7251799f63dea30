//! Addressable storage.
//!
//! Two RAM shapes built on the edge-triggered contract plus indexed rows:
//! [`SingleReadRam`] with one asynchronously-addressed read port, and
//! [`RegisterFileRam`] with two. In both, reads are combinational (the
//! output always reflects the row at the current address) and writes commit
//! on a rising edge.
//!
//! Within one `write` call the ordering is write-before-read: the read
//! outputs recomputed at the end of the call reflect a same-tick write to
//! the same address. The datapath's register-file writeback depends on this
//! ordering.

use crate::common::bit::Bit;
use crate::common::error::LogicError;
use crate::common::vector::BitVector;
use crate::state::clock::EdgeDetector;

fn row_index(rows: usize, address: &BitVector) -> Result<usize, LogicError> {
    let index = address.to_unsigned() as usize;
    if index >= rows {
        return Err(LogicError::SelectorOutOfRange {
            selector: index,
            inputs: rows,
        });
    }
    Ok(index)
}

/// RAM with a single read address, updated asynchronously on every call.
#[derive(Clone, Debug)]
pub struct SingleReadRam {
    edge: EdgeDetector,
    rows: Vec<BitVector>,
    width: usize,
    address: BitVector,
    output: BitVector,
}

impl SingleReadRam {
    /// Creates a zeroed RAM of `rows` rows, each `width` bits wide.
    pub fn new(width: usize, rows: usize) -> Self {
        Self {
            edge: EdgeDetector::new(),
            rows: vec![BitVector::zeros(width); rows],
            width,
            address: BitVector::zeros(width),
            output: BitVector::zeros(width),
        }
    }

    /// Row width in bits.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the RAM has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bulk-loads rows starting at row zero, each resized to the row width.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] when more rows are
    /// supplied than the RAM holds.
    pub fn load(&mut self, rows: &[BitVector]) -> Result<(), LogicError> {
        if rows.len() > self.rows.len() {
            return Err(LogicError::SelectorOutOfRange {
                selector: rows.len() - 1,
                inputs: self.rows.len(),
            });
        }
        for (slot, row) in self.rows.iter_mut().zip(rows) {
            *slot = row.resized(self.width);
        }
        Ok(())
    }

    /// Row contents at `index`, if in range.
    pub fn row(&self, index: usize) -> Option<&BitVector> {
        self.rows.get(index)
    }

    /// Output of the read port: the row at the current address.
    pub const fn output(&self) -> &BitVector {
        &self.output
    }

    /// Clocks the RAM: registers `address` asynchronously, overwrites the
    /// addressed row with `data_in` on a rising edge when `write` is high,
    /// then recomputes the output from the (possibly just-written) row.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] for an address beyond the
    /// row count. The clock level has already been recorded at that point.
    pub fn write(
        &mut self,
        address: &BitVector,
        data_in: &BitVector,
        write: Bit,
        clock: Bit,
    ) -> Result<(), LogicError> {
        let rising = self.edge.sense(clock);
        self.address = address.clone();
        let index = row_index(self.rows.len(), address)?;
        if rising && write.is_set() {
            self.rows[index] = data_in.resized(self.width);
        }
        self.output = self.rows[index].clone();
        Ok(())
    }

    /// Asynchronous read: registers `address` and refreshes the output
    /// without touching the clock.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] for an address beyond the
    /// row count.
    pub fn read(&mut self, address: &BitVector) -> Result<&BitVector, LogicError> {
        self.address = address.clone();
        let index = row_index(self.rows.len(), address)?;
        self.output = self.rows[index].clone();
        Ok(&self.output)
    }
}

/// Register-file RAM: two independent asynchronous read ports and one
/// clocked write port.
#[derive(Clone, Debug)]
pub struct RegisterFileRam {
    edge: EdgeDetector,
    rows: Vec<BitVector>,
    width: usize,
    read_data1: BitVector,
    read_data2: BitVector,
}

impl RegisterFileRam {
    /// Creates a zeroed register file of `rows` rows, each `width` bits.
    pub fn new(width: usize, rows: usize) -> Self {
        Self {
            edge: EdgeDetector::new(),
            rows: vec![BitVector::zeros(width); rows],
            width,
            read_data1: BitVector::zeros(width),
            read_data2: BitVector::zeros(width),
        }
    }

    /// Row width in bits.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the file has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bulk-loads rows starting at row zero, each resized to the row width.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] when more rows are
    /// supplied than the file holds.
    pub fn load(&mut self, rows: &[BitVector]) -> Result<(), LogicError> {
        if rows.len() > self.rows.len() {
            return Err(LogicError::SelectorOutOfRange {
                selector: rows.len() - 1,
                inputs: self.rows.len(),
            });
        }
        for (slot, row) in self.rows.iter_mut().zip(rows) {
            *slot = row.resized(self.width);
        }
        Ok(())
    }

    /// Row contents at `index`, if in range.
    pub fn row(&self, index: usize) -> Option<&BitVector> {
        self.rows.get(index)
    }

    /// First read port output.
    pub const fn read_data1(&self) -> &BitVector {
        &self.read_data1
    }

    /// Second read port output.
    pub const fn read_data2(&self) -> &BitVector {
        &self.read_data2
    }

    /// Clocks the file: commits the write first (rising edge, `reg_write`
    /// high), then refreshes both asynchronous read ports, so a same-tick
    /// read of the written row observes the new value.
    ///
    /// Row zero is an ordinary writable row; writing it disturbs no other
    /// row.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] for any register number
    /// beyond the row count. The clock level has already been recorded.
    pub fn write(
        &mut self,
        read_reg1: &BitVector,
        read_reg2: &BitVector,
        write_reg: &BitVector,
        write_data: &BitVector,
        reg_write: Bit,
        clock: Bit,
    ) -> Result<(), LogicError> {
        let rising = self.edge.sense(clock);
        if rising && reg_write.is_set() {
            let index = row_index(self.rows.len(), write_reg)?;
            self.rows[index] = write_data.resized(self.width);
        }
        self.read_data1 = self.rows[row_index(self.rows.len(), read_reg1)?].clone();
        self.read_data2 = self.rows[row_index(self.rows.len(), read_reg2)?].clone();
        Ok(())
    }

    /// Asynchronous read: refreshes both read ports without touching the
    /// clock.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::SelectorOutOfRange`] for a register number
    /// beyond the row count.
    pub fn read(&mut self, read_reg1: &BitVector, read_reg2: &BitVector) -> Result<(), LogicError> {
        self.read_data1 = self.rows[row_index(self.rows.len(), read_reg1)?].clone();
        self.read_data2 = self.rows[row_index(self.rows.len(), read_reg2)?].clone();
        Ok(())
    }
}
