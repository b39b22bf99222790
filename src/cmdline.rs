use super::preset::{Encoder, SensorResolution};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;
use structopt::clap::{self, AppSettings, ErrorKind};
use structopt::StructOpt;

/// Serve a CSI camera sensor as an RTSP stream at rtsp://<host>:<port>/stream
///
/// Capture, encoding and streaming are done by GStreamer (nvarguscamerasrc and
/// the nvv4l2 hardware encoders) and gst-rtsp-server.
#[derive(StructOpt, Debug, Default)]
#[structopt(
    name = "csicam-rtsp",
    setting(AppSettings::UnifiedHelpMessage),
    setting(AppSettings::AllArgsOverrideSelf)
)]
pub struct Opt {
    /// Port to listen on (default: 8554)
    #[structopt(
        short = "p",
        long = "port",
        value_name = "PORT",
        allow_hyphen_values = true
    )]
    pub port: Option<String>,
    /// Flip input image (default: 0 (none)); 0:none,1:90ccw,2:180,3:90cw,4:horizontal flip,6:vertical flip
    #[structopt(
        short = "f",
        long = "flip",
        value_name = "FLIP",
        allow_hyphen_values = true
    )]
    pub flip: Option<String>,
    /// Camera sensor ID (default: 0)
    #[structopt(
        short = "s",
        long = "sensor_id",
        value_name = "SID",
        allow_hyphen_values = true
    )]
    pub sensor_id: Option<String>,
    /// Sensor res: 0:4032x3040@30, 1:3840x2160@30, 2:1920x1080@60 (default: 0)
    #[structopt(
        short = "r",
        long = "sensor_res",
        value_name = "SRES",
        allow_hyphen_values = true,
        parse(from_str)
    )]
    pub sensor_res: Option<SensorResolution>,
    /// Desired output FPS (default: 30)
    #[structopt(
        short = "o",
        long = "ouput_fps",
        alias = "output_fps",
        value_name = "OFPS",
        allow_hyphen_values = true
    )]
    pub output_fps: Option<String>,
    /// Desired encoding bitrate (default: 10000000)
    #[structopt(
        short = "b",
        long = "enc_bitrate",
        value_name = "ENCBIT",
        allow_hyphen_values = true
    )]
    pub bitrate: Option<String>,
    /// Encoder {0:h264, 1:h265} (default: 0)
    #[structopt(
        short = "e",
        long = "encover",
        alias = "encoder",
        value_name = "ENC",
        allow_hyphen_values = true,
        parse(from_str)
    )]
    pub encoder: Option<Encoder>,
    /// Optional TOML file with the same settings; flags given here take precedence
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// GStreamer debug threshold list, e.g. "*:3,rtsp*:5"
    #[structopt(long = "gst-debug", value_name = "LIST")]
    pub gst_debug: Option<String>,
    /// Leftover non-option arguments, accepted and ignored
    #[structopt(hidden = true)]
    pub ignored: Vec<String>,
}

impl Opt {
    pub fn parse_from<I>(args: I) -> Result<Opt, clap::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString> + Clone,
    {
        Opt::from_iter_safe(args)
    }

    /// Parses the process arguments.
    ///
    /// On a malformed command line this prints the error and exits with -1
    /// before anything else is set up. `--help` and `--version` exit with 0.
    pub fn parse_or_exit() -> Opt {
        match Opt::parse_from(std::env::args_os()) {
            Ok(opt) => opt,
            Err(e) => match exit_status(e.kind) {
                0 => e.exit(),
                status => {
                    eprintln!("Error parsing options: {}", e.message);
                    process::exit(status);
                }
            },
        }
    }
}

/// Process exit status for a command line that did not produce an `Opt`
pub(crate) fn exit_status(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => 0,
        _ => -1,
    }
}
