#![warn(missing_docs)]
//!
//! # csicam-rtsp
//!
//! Serves one CSI camera sensor of a Jetson board over RTSP.
//!
//! The camera is captured with `nvarguscamerasrc`, encoded with the nvv4l2
//! hardware encoder and served by gst-rtsp-server as a single shared stream at
//!
//! `rtsp://my.ip.address:8554/stream`
//!
//! # Usage
//!
//! ```bash
//! csicam-rtsp --sensor_res 2 --encover 1
//! ```
//!
//! Settings can also be kept in a TOML file given with `--config`, see
//! `sample_config.toml`. Flags on the command line win over the file.
//!
use env_logger::Env;
use log::*;

mod cmdline;
mod config;
mod errors;
mod pipeline;
mod preset;
mod server;

use cmdline::Opt;
use config::{Config, Settings};
use errors::Error;
use pipeline::PipelineDescription;
use server::RtspServer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = Opt::parse_or_exit();

    info!(
        "csicam-rtsp {} {}",
        env!("CSICAM_RTSP_VERSION"),
        env!("CSICAM_RTSP_PROFILE")
    );

    if !opt.ignored.is_empty() {
        warn!("Ignoring extra arguments: {}", opt.ignored.join(" "));
    }

    let config = match &opt.config {
        Some(path) => {
            debug!("Reading config from {}", path.display());
            Some(Config::load(path)?)
        }
        None => None,
    };
    let settings = Settings::resolve(&opt, config);

    info!(
        "Sensor {} at {} fps, {} at {} bps, flip method {}",
        settings.sensor_id,
        settings.output_fps,
        settings.encoder,
        settings.bitrate,
        settings.flip
    );
    info!("Sensor mode {}", settings.resolution);

    let launch = PipelineDescription::from_settings(&settings);
    debug!("Launch line: {}", launch);

    let rtsp = RtspServer::new()?;
    if let Some(threshold) = &opt.gst_debug {
        gstreamer::debug_set_threshold_from_string(threshold, true);
    }

    rtsp.add_stream(&launch)?;
    rtsp.run(&settings.bind_addr, &settings.port);

    Ok(())
}
