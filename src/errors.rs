use err_derive::Error;

/// Errors that stop the server from starting
///
/// Anything that goes wrong after the server is attached (a launch line
/// GStreamer rejects, a client dropping) is reported by GStreamer itself.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the config file fails to deserialize
    #[error(display = "Configuration parsing error")]
    Config(#[error(source)] toml::de::Error),
    /// Raised when the config file cannot be read
    #[error(display = "I/O error")]
    Io(#[error(source)] std::io::Error),
    /// Raised when GStreamer cannot be initialised
    #[error(display = "GStreamer initialisation error")]
    GstInit(#[error(source)] glib::Error),
    /// Raised when the server has no mount point table
    #[error(display = "The RTSP server has no mount points")]
    NoMountPoints,
}
