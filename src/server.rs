//! Thin wrapper around gst-rtsp-server.
//!
//! Everything past registering the launch line (session setup, RTP, the
//! media pipeline threads) happens inside GStreamer.
use super::errors::Error;
use super::pipeline::PipelineDescription;
use gstreamer_rtsp_server::prelude::*;
use gstreamer_rtsp_server::{RTSPMediaFactory, RTSPServer as GstRTSPServer};
use log::*;

/// The one path the camera stream is served on
pub(crate) const MOUNT_PATH: &str = "/stream";

pub(crate) struct RtspServer {
    server: GstRTSPServer,
}

impl RtspServer {
    pub(crate) fn new() -> Result<RtspServer, Error> {
        gstreamer::init()?;
        let server = GstRTSPServer::new();
        server.connect_client_connected(|_server, _client| {
            debug!("RTSP: client connected");
        });
        Ok(RtspServer { server })
    }

    /// Registers the launch line under [`MOUNT_PATH`] as a shared media, so
    /// every client watches the same capture pipeline.
    pub(crate) fn add_stream(&self, launch: &PipelineDescription) -> Result<(), Error> {
        let mounts = self
            .server
            .get_mount_points()
            .ok_or(Error::NoMountPoints)?;

        let factory = RTSPMediaFactory::new();
        factory.set_launch(launch.as_str());
        factory.set_shared(true);
        factory.connect_media_configure(|_factory, _media| {
            debug!("RTSP: media was configured");
        });

        mounts.add_factory(MOUNT_PATH, &factory);
        Ok(())
    }

    /// Binds the server and blocks in the Glib main loop until the process is
    /// killed.
    pub(crate) fn run(&self, bind_addr: &str, port: &str) {
        self.server.set_address(bind_addr);
        self.server.set_service(port);
        // Attach server to default Glib context
        self.server.attach(None);

        info!("Starting RTSP Server at {}:{}", bind_addr, port);
        println!("stream ready at rtsp://127.0.0.1:{}{}", port, MOUNT_PATH);

        let main_loop = glib::MainLoop::new(None, false);
        main_loop.run();
    }
}
