//! Builds the gst-launch description handed to the RTSP media factory.
//!
//! The launch line is never parsed or checked here. A bad value (an
//! unsupported flip method, a non numeric bitrate...) is only reported by
//! GStreamer when the factory first constructs the media for a client.
//!
//! Every segment, the capture source and its caps included, is joined with
//! ` ! `. Plain concatenation of the capture and caps fragments would give
//! `sensor-id=0video/x-raw(...)`, which gst-launch does not accept.
use super::config::Settings;
use std::fmt;

/// Crop applied before flipping, fixed to a 3840x2160 window
const CROP: &str = "nvvidconv top=0 bottom=2160 left=0 right=3840";

/// Tuning shared by both nvv4l2 encoders
const ENCODER_TUNING: &str = "preset-level=2";
const ENCODER_OPTIONS: &str =
    "profile=0 iframeinterval=10 control-rate=2 low-latency=1 max-perf-enabled=1 vbv-size=1100000";

/// gst-rtsp-server turns every element named `payN` into one stream
const PAYLOADER_NAME: &str = "name=pay0 pt=96";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PipelineDescription(String);

impl PipelineDescription {
    pub(crate) fn from_settings(settings: &Settings) -> PipelineDescription {
        let encoder = settings.encoder;
        let launch = vec![
            format!("nvarguscamerasrc sensor-id={}", settings.sensor_id),
            format!(
                "{}{}/1",
                settings.resolution.caps_prefix(),
                settings.output_fps
            ),
            CROP.to_string(),
            format!("nvvidconv flip-method={}", settings.flip),
            format!(
                "{} {} bitrate={} {}",
                encoder.element(),
                ENCODER_TUNING,
                settings.bitrate,
                ENCODER_OPTIONS
            ),
            encoder.parser().to_string(),
            format!("{} {}", encoder.payloader(), PAYLOADER_NAME),
        ]
        .join(" ! ");

        PipelineDescription(launch)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PipelineDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PipelineDescription> for String {
    fn from(desc: PipelineDescription) -> String {
        desc.0
    }
}
