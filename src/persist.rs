use heapless::String;

use crate::color::Rgb;

// "LUMI"
const CONFIG_MAGIC: u32 = 0x4C55_4D49;

/// Size of the stored record in bytes.
pub const RECORD_SIZE: usize = 77;

const MAGIC_OFFSET: usize = 0;
const ENABLED_OFFSET: usize = 4;
const LEVEL_OFFSET: usize = 5;
const FADE_OFFSET: usize = 6;
const USE_SOLID_OFFSET: usize = 7;
const RGB_OFFSET: usize = 8;
const PALETTE_NAME_OFFSET: usize = 11;
const COLOR_NAME_OFFSET: usize = 43;
const USE_RANDOM_OFFSET: usize = 75;
const BLEND_SPEED_OFFSET: usize = 76;

const NAME_FIELD_SIZE: usize = 32;

/// Errors of the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Backing storage failed to read or write
    DriverError,
    /// Record does not start with the expected magic header
    InvalidMagicHeader,
    /// Record is too short or carries malformed fields
    InvalidData,
}

/// Byte-level access to wherever the record lives
///
/// Implementations read and write at a fixed location; buffers never
/// exceed [`RECORD_SIZE`].
pub trait ConfigStorage {
    fn read(&mut self, buffer: &mut [u8]) -> Result<(), StorageError>;
    fn write(&mut self, buffer: &[u8]) -> Result<(), StorageError>;
}

/// The settings that survive a power cycle
///
/// Name fields keep at most 31 bytes of content; longer names are
/// truncated on encode. The power budget is intentionally absent, it is
/// wired per installation rather than remembered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedConfig {
    pub enabled: bool,
    pub brightness_level: u8,
    pub fade_enabled: bool,
    pub use_solid_color: bool,
    pub solid_color: Rgb,
    pub palette_name: String<NAME_FIELD_SIZE>,
    pub solid_color_name: String<NAME_FIELD_SIZE>,
    pub use_random_palette: bool,
    pub blend_speed: u8,
}

impl PersistedConfig {
    /// Serialize into the fixed-size record layout
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut record = [0u8; RECORD_SIZE];
        record[MAGIC_OFFSET..MAGIC_OFFSET + 4].copy_from_slice(&CONFIG_MAGIC.to_le_bytes());
        record[ENABLED_OFFSET] = u8::from(self.enabled);
        record[LEVEL_OFFSET] = self.brightness_level;
        record[FADE_OFFSET] = u8::from(self.fade_enabled);
        record[USE_SOLID_OFFSET] = u8::from(self.use_solid_color);
        record[RGB_OFFSET] = self.solid_color.r;
        record[RGB_OFFSET + 1] = self.solid_color.g;
        record[RGB_OFFSET + 2] = self.solid_color.b;
        write_padded_str(
            &mut record[PALETTE_NAME_OFFSET..PALETTE_NAME_OFFSET + NAME_FIELD_SIZE],
            &self.palette_name,
        );
        write_padded_str(
            &mut record[COLOR_NAME_OFFSET..COLOR_NAME_OFFSET + NAME_FIELD_SIZE],
            &self.solid_color_name,
        );
        record[USE_RANDOM_OFFSET] = u8::from(self.use_random_palette);
        record[BLEND_SPEED_OFFSET] = self.blend_speed;
        record
    }

    /// Parse a stored record
    ///
    /// Validates the magic header and the name fields before anything is
    /// returned; a failed decode leaves the caller's state untouched.
    pub fn decode(record: &[u8]) -> Result<Self, StorageError> {
        if record.len() < RECORD_SIZE {
            return Err(StorageError::InvalidData);
        }
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&record[MAGIC_OFFSET..MAGIC_OFFSET + 4]);
        if u32::from_le_bytes(magic) != CONFIG_MAGIC {
            return Err(StorageError::InvalidMagicHeader);
        }
        Ok(Self {
            enabled: record[ENABLED_OFFSET] != 0,
            brightness_level: record[LEVEL_OFFSET],
            fade_enabled: record[FADE_OFFSET] != 0,
            use_solid_color: record[USE_SOLID_OFFSET] != 0,
            solid_color: Rgb {
                r: record[RGB_OFFSET],
                g: record[RGB_OFFSET + 1],
                b: record[RGB_OFFSET + 2],
            },
            palette_name: read_padded_str(
                &record[PALETTE_NAME_OFFSET..PALETTE_NAME_OFFSET + NAME_FIELD_SIZE],
            )?,
            solid_color_name: read_padded_str(
                &record[COLOR_NAME_OFFSET..COLOR_NAME_OFFSET + NAME_FIELD_SIZE],
            )?,
            use_random_palette: record[USE_RANDOM_OFFSET] != 0,
            blend_speed: record[BLEND_SPEED_OFFSET],
        })
    }
}

/// Check whether the storage holds a record written by this layout
///
/// Reads only the magic header, so it is safe to call before deciding
/// whether a full load is worthwhile.
pub fn check_config<S: ConfigStorage>(storage: &mut S) -> Result<(), StorageError> {
    let mut header = [0u8; 4];
    storage.read(&mut header)?;
    if u32::from_le_bytes(header) != CONFIG_MAGIC {
        return Err(StorageError::InvalidMagicHeader);
    }
    Ok(())
}

// Content capped one short of the field so a terminator always fits.
fn write_padded_str(target: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    let len = bytes.len().min(target.len() - 1);
    target[..len].copy_from_slice(&bytes[..len]);
    for byte in &mut target[len..] {
        *byte = 0;
    }
}

fn read_padded_str(source: &[u8]) -> Result<String<NAME_FIELD_SIZE>, StorageError> {
    let len = source.iter().position(|&b| b == 0).unwrap_or(source.len());
    let text = core::str::from_utf8(&source[..len]).map_err(|_| StorageError::InvalidData)?;
    String::try_from(text).map_err(|_| StorageError::InvalidData)
}
