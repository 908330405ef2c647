use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How the bytes inside each 4-byte group are permuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SwapMode {
    /// `12 34 56 78` -> `78 56 34 12`
    #[default]
    Both,
    /// `12 34 56 78` -> `34 12 78 56`
    BytesOnly,
    /// `12 34 56 78` -> `56 78 12 34`
    WordsOnly,
}

impl SwapMode {
    pub const ALL: [SwapMode; 3] = [SwapMode::Both, SwapMode::BytesOnly, SwapMode::WordsOnly];

    /// Smallest unit the mode permutes; the input length must be a multiple of it.
    pub fn increment(self) -> usize {
        match self {
            SwapMode::Both | SwapMode::WordsOnly => 4,
            SwapMode::BytesOnly => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwapMode::Both => "both",
            SwapMode::BytesOnly => "bytes-only",
            SwapMode::WordsOnly => "words-only",
        }
    }
}

impl fmt::Display for SwapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwapMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown swap mode '{}', expected one of: both, bytes-only, words-only",
                    s
                )
            })
    }
}

/// Known N64 cartridge save dump sizes.
///
/// 1Mbit SRAM and 1Mbit Flash dumps share a size and are not told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SaveFormat {
    Eeprom4k,
    Eeprom16k,
    Sram256k,
    SramOrFlash1M,
}

impl SaveFormat {
    /// Ordered from smallest to largest.
    pub const ALL: [SaveFormat; 4] = [
        SaveFormat::Eeprom4k,
        SaveFormat::Eeprom16k,
        SaveFormat::Sram256k,
        SaveFormat::SramOrFlash1M,
    ];

    pub fn size(self) -> usize {
        match self {
            SaveFormat::Eeprom4k => 512,
            SaveFormat::Eeprom16k => 2048,
            SaveFormat::Sram256k => 32768,
            SaveFormat::SramOrFlash1M => 131072,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SaveFormat::Eeprom4k => "EEPROM 4kbit",
            SaveFormat::Eeprom16k => "EEPROM 16kbit",
            SaveFormat::Sram256k => "SRAM 256kbit",
            SaveFormat::SramOrFlash1M => "SRAM/Flash 1Mbit",
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.description(), self.size())
    }
}

/// One file's worth of work for the swap engine.
///
/// `padding` is the group size used for the divisibility check; 0 disables
/// the check. `force_padding` records whether `padding` came from the user
/// rather than from the size classifier.
#[derive(Debug, Clone, Copy)]
pub struct SwapRequest<'a> {
    pub data: &'a [u8],
    pub mode: SwapMode,
    pub padding: usize,
    pub force_padding: bool,
}

impl<'a> SwapRequest<'a> {
    pub fn new(data: &'a [u8], mode: SwapMode, padding: usize, force_padding: bool) -> Self {
        Self {
            data,
            mode,
            padding,
            force_padding,
        }
    }

    /// Request with the padding taken from a recognized save format.
    pub fn detected(data: &'a [u8], mode: SwapMode, format: SaveFormat) -> Self {
        Self::new(data, mode, format.size(), false)
    }

    /// Request with a user supplied padding size.
    pub fn forced(data: &'a [u8], mode: SwapMode, padding: usize) -> Self {
        Self::new(data, mode, padding, true)
    }
}

/// Process exit codes, ordered so that the worst outcome compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ExitSeverity {
    #[default]
    Success,
    /// Bad command line or configuration file.
    Usage,
    /// A file could not be read, backed up or written.
    Io,
    UnrecognizedSize,
    MisalignedSize,
}

impl ExitSeverity {
    pub fn code(self) -> i32 {
        match self {
            ExitSeverity::Success => 0,
            ExitSeverity::Usage => 2,
            ExitSeverity::Io => 10,
            ExitSeverity::UnrecognizedSize => 20,
            ExitSeverity::MisalignedSize => 30,
        }
    }

    /// Fold another outcome into an accumulated one.
    pub fn worst(self, other: ExitSeverity) -> ExitSeverity {
        self.max(other)
    }
}

/// Successful handling of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub path: PathBuf,
    pub len: usize,
    /// `None` when the padding was forced and the classifier was skipped.
    pub format: Option<SaveFormat>,
    pub backup: Option<PathBuf>,
}
