use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::generation::QuestionGenerator;
use crate::session::UploadSession;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// The one upload session. The lock is held for the whole of an
    /// ingest, so only one batch is ever in flight.
    pub session: Arc<Mutex<UploadSession>>,
    pub generator: QuestionGenerator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = UploadSession::new(&config.upload);
        let generator = QuestionGenerator::new(config.llm.as_ref());

        Self {
            config: Arc::new(config),
            session: Arc::new(Mutex::new(session)),
            generator,
        }
    }
}
