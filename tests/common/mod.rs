#![allow(dead_code)]

use lumi_strip_engine::{ConfigStorage, OutputDriver, RECORD_SIZE, Rgb, StorageError};

/// Driver that records every interaction for later inspection.
#[derive(Debug, Default)]
pub struct MockDriver {
    pub frames: Vec<Vec<Rgb>>,
    pub brightness_calls: Vec<u8>,
    pub power_budgets: Vec<(u8, u32)>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[Rgb] {
        self.frames.last().map_or(&[], Vec::as_slice)
    }
}

impl OutputDriver for MockDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness_calls.push(value);
    }

    fn set_power_budget(&mut self, volts: u8, milliamps: u32) {
        self.power_budgets.push((volts, milliamps));
    }
}

/// In-memory record storage, blank as an erased EEPROM.
pub struct MemStorage {
    pub data: [u8; RECORD_SIZE],
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            data: [0; RECORD_SIZE],
            fail_reads: false,
            fail_writes: false,
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStorage for MemStorage {
    fn read(&mut self, buffer: &mut [u8]) -> Result<(), StorageError> {
        if self.fail_reads || buffer.len() > self.data.len() {
            return Err(StorageError::DriverError);
        }
        buffer.copy_from_slice(&self.data[..buffer.len()]);
        Ok(())
    }

    fn write(&mut self, buffer: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes || buffer.len() > self.data.len() {
            return Err(StorageError::DriverError);
        }
        self.data[..buffer.len()].copy_from_slice(buffer);
        Ok(())
    }
}
