//! Fixed sensor and encoder presets.
//!
//! Both tables are selected by a small integer code given on the command line.
//! Only the first character of the code is looked at, and anything that does
//! not match a known code falls back to the first entry of the table without
//! raising an error.
use std::fmt;

/// Sensor readout modes that the IMX477 driver handles reliably
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum SensorResolution {
    /// `0`: 4032x3040, full sensor
    Uhd4032x3040,
    /// `1`: 3840x2160
    Uhd3840x2160,
    /// `2`: 1920x1080
    Fhd1920x1080,
}

impl SensorResolution {
    pub fn width(self) -> u32 {
        match self {
            SensorResolution::Uhd4032x3040 => 4032,
            SensorResolution::Uhd3840x2160 => 3840,
            SensorResolution::Fhd1920x1080 => 1920,
        }
    }

    pub fn height(self) -> u32 {
        match self {
            SensorResolution::Uhd4032x3040 => 3040,
            SensorResolution::Uhd3840x2160 => 2160,
            SensorResolution::Fhd1920x1080 => 1080,
        }
    }

    /// The raw caps up to and including `framerate=`.
    ///
    /// The framerate numerator is left for the caller since it is the user's
    /// output fps and not a property of the readout mode.
    pub fn caps_prefix(self) -> String {
        format!(
            "video/x-raw(memory:NVMM),format=NV12,width={},height={},framerate=",
            self.width(),
            self.height()
        )
    }
}

impl Default for SensorResolution {
    fn default() -> Self {
        SensorResolution::Uhd4032x3040
    }
}

impl From<&str> for SensorResolution {
    fn from(code: &str) -> Self {
        match code.chars().next() {
            Some('1') => SensorResolution::Uhd3840x2160,
            Some('2') => SensorResolution::Fhd1920x1080,
            _ => SensorResolution::Uhd4032x3040,
        }
    }
}

impl fmt::Display for SensorResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

/// Hardware encoder and the matching parse/payload elements
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Encoder {
    H264,
    H265,
}

impl Encoder {
    pub fn element(self) -> &'static str {
        match self {
            Encoder::H264 => "nvv4l2h264enc",
            Encoder::H265 => "nvv4l2h265enc",
        }
    }

    pub fn parser(self) -> &'static str {
        match self {
            Encoder::H264 => "h264parse",
            Encoder::H265 => "h265parse",
        }
    }

    pub fn payloader(self) -> &'static str {
        match self {
            Encoder::H264 => "rtph264pay",
            Encoder::H265 => "rtph265pay",
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::H264
    }
}

impl From<&str> for Encoder {
    fn from(code: &str) -> Self {
        match code.chars().next() {
            Some('1') => Encoder::H265,
            _ => Encoder::H264,
        }
    }
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoder::H264 => write!(f, "H.264"),
            Encoder::H265 => write!(f, "H.265"),
        }
    }
}
