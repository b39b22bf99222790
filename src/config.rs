use super::cmdline::Opt;
use super::errors::Error;
use super::preset::{Encoder, SensorResolution};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub(crate) const DEFAULT_RTSP_PORT: &str = "8554";
pub(crate) const DEFAULT_FLIP: &str = "0";
pub(crate) const DEFAULT_SENSOR_ID: &str = "0";
pub(crate) const DEFAULT_OUT_FPS: &str = "30";
pub(crate) const DEFAULT_BIT_RATE: &str = "10000000";

/// Settings read from the optional `--config` file
///
/// Every key is optional. Values are kept as strings, the same way they are
/// taken from the command line.
#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct Config {
    pub(crate) port: Option<String>,
    pub(crate) flip: Option<String>,
    pub(crate) sensor_id: Option<String>,
    pub(crate) sensor_res: Option<String>,
    pub(crate) output_fps: Option<String>,
    pub(crate) bitrate: Option<String>,
    pub(crate) encoder: Option<String>,

    #[serde(rename = "bind")]
    pub(crate) bind_addr: Option<String>,
}

impl Config {
    pub(crate) fn load(path: &Path) -> Result<Config, Error> {
        let contents = fs::read_to_string(path)?;
        Config::parse(&contents)
    }

    pub(crate) fn parse(contents: &str) -> Result<Config, Error> {
        Ok(toml::from_str(contents)?)
    }
}

/// The resolved stream configuration.
///
/// Built once at startup from, in order of precedence, the command line, the
/// config file and the built in defaults. Nothing changes it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) port: String,
    pub(crate) bind_addr: String,
    /// Passed to `nvvidconv flip-method` as is. Only 0-6 mean anything.
    pub(crate) flip: String,
    pub(crate) sensor_id: String,
    pub(crate) resolution: SensorResolution,
    pub(crate) output_fps: String,
    pub(crate) bitrate: String,
    pub(crate) encoder: Encoder,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: DEFAULT_RTSP_PORT.to_string(),
            bind_addr: default_bind_addr(),
            flip: DEFAULT_FLIP.to_string(),
            sensor_id: DEFAULT_SENSOR_ID.to_string(),
            resolution: SensorResolution::default(),
            output_fps: DEFAULT_OUT_FPS.to_string(),
            bitrate: DEFAULT_BIT_RATE.to_string(),
            encoder: Encoder::default(),
        }
    }
}

impl Settings {
    pub(crate) fn resolve(opt: &Opt, config: Option<Config>) -> Settings {
        let config = config.unwrap_or_default();
        let defaults = Settings::default();
        let sensor_res = config.sensor_res;
        let encoder = config.encoder;

        Settings {
            port: pick(&opt.port, config.port, defaults.port),
            bind_addr: config.bind_addr.unwrap_or(defaults.bind_addr),
            flip: pick(&opt.flip, config.flip, defaults.flip),
            sensor_id: pick(&opt.sensor_id, config.sensor_id, defaults.sensor_id),
            resolution: opt
                .sensor_res
                .or_else(|| sensor_res.as_deref().map(SensorResolution::from))
                .unwrap_or(defaults.resolution),
            output_fps: pick(&opt.output_fps, config.output_fps, defaults.output_fps),
            bitrate: pick(&opt.bitrate, config.bitrate, defaults.bitrate),
            encoder: opt
                .encoder
                .or_else(|| encoder.as_deref().map(Encoder::from))
                .unwrap_or(defaults.encoder),
        }
    }
}

fn pick(flag: &Option<String>, file: Option<String>, default: String) -> String {
    flag.clone().or(file).unwrap_or(default)
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(&Opt::default(), None);
        assert_eq!(
            settings,
            Settings {
                port: "8554".to_string(),
                bind_addr: "0.0.0.0".to_string(),
                flip: "0".to_string(),
                sensor_id: "0".to_string(),
                resolution: SensorResolution::Uhd4032x3040,
                output_fps: "30".to_string(),
                bitrate: "10000000".to_string(),
                encoder: Encoder::H264,
            }
        );
    }

    #[test]
    fn test_flags_override_defaults() {
        let opt = Opt::parse_from(&["csicam-rtsp", "--sensor_res", "2", "--encover", "1"]).unwrap();
        let settings = Settings::resolve(&opt, None);
        assert_eq!(settings.resolution, SensorResolution::Fhd1920x1080);
        assert_eq!(settings.encoder, Encoder::H265);
        assert_eq!(
            settings,
            Settings {
                resolution: SensorResolution::Fhd1920x1080,
                encoder: Encoder::H265,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_parse_config() {
        let sample = indoc!(
            r#"
            port = "9554"
            bind = "127.0.0.1"
            flip = "2"
            sensor_id = "1"
            sensor_res = "1"
            output_fps = "25"
            bitrate = "8000000"
            encoder = "1"
            "#
        );
        let config = Config::parse(sample).unwrap();
        let settings = Settings::resolve(&Opt::default(), Some(config));
        assert_eq!(
            settings,
            Settings {
                port: "9554".to_string(),
                bind_addr: "127.0.0.1".to_string(),
                flip: "2".to_string(),
                sensor_id: "1".to_string(),
                resolution: SensorResolution::Uhd3840x2160,
                output_fps: "25".to_string(),
                bitrate: "8000000".to_string(),
                encoder: Encoder::H265,
            }
        );
    }

    #[test]
    fn test_flags_override_config() {
        let sample = indoc!(
            r#"
            port = "9554"
            sensor_res = "1"
            encoder = "1"
            "#
        );
        let config = Config::parse(sample).unwrap();
        let opt = Opt::parse_from(&["csicam-rtsp", "-p", "7000", "-r", "0"]).unwrap();
        let settings = Settings::resolve(&opt, Some(config));

        assert_eq!(settings.port, "7000");
        assert_eq!(settings.resolution, SensorResolution::Uhd4032x3040);
        assert_eq!(settings.encoder, Encoder::H265);
        assert_eq!(settings.bitrate, DEFAULT_BIT_RATE);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(
            Settings::resolve(&Opt::default(), Some(config)),
            Settings::default()
        );
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(Config::parse("port = "), Err(Error::Config(_))));
        assert!(matches!(Config::parse("port = 8554"), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load(Path::new("/nonexistent/csicam-rtsp.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
