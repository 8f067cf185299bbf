use std::sync::Arc;

use crate::adapters::{FFprobeAdapter, FsStdAdapter, LoftyTagAdapter, TracingLogAdapter};
use crate::app::extract_interactor::ExtractInteractor;
use crate::ports::{FsPort, LogPort, ProbePort, TagPort};

pub trait AppContainer: Send + Sync {
    fn extract_interactor(&self) -> Arc<ExtractInteractor>;
    fn log_port(&self) -> Arc<dyn LogPort>;
}

pub struct DefaultAppContainer {
    extract_interactor: Arc<ExtractInteractor>,
    log_port: Arc<dyn LogPort>,
}

impl DefaultAppContainer {
    /// Wire the production adapters, probing with the given ffprobe binary
    pub fn new(ffprobe_path: &str) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::new(ffprobe_path));
        let tag_port = Arc::new(LoftyTagAdapter::new());
        let fs_port = Arc::new(FsStdAdapter::new());
        let log_port: Arc<dyn LogPort> = Arc::new(TracingLogAdapter::new());

        let extract_interactor = Arc::new(ExtractInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            tag_port as Arc<dyn TagPort>,
            fs_port as Arc<dyn FsPort>,
            Arc::clone(&log_port),
        ));

        Self {
            extract_interactor,
            log_port,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn extract_interactor(&self) -> Arc<ExtractInteractor> {
        Arc::clone(&self.extract_interactor)
    }

    fn log_port(&self) -> Arc<dyn LogPort> {
        Arc::clone(&self.log_port)
    }
}
