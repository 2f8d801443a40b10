//! 配線: 標準アダプタで UseCase を組み立てる

use crate::adapter::{ConsoleNotifier, ConsoleSink};
use crate::domain::ToggleState;
use crate::usecase::{ChatSession, CorpusUseCase};
use common::api::ApiClient;
use common::config::BackendConfig;
use common::log::Log;
use common::transport::HttpTransport;
use std::sync::Arc;

/// 組み立て済みアプリケーション
pub struct App {
    pub session: ChatSession,
    pub corpus: CorpusUseCase,
}

/// HTTP トランスポートとコンソールアダプタで組み立てる
pub fn wire(config: &BackendConfig, toggles: Arc<ToggleState>, log: Arc<dyn Log>) -> App {
    let client = Arc::new(ApiClient::new(
        HttpTransport::new(config.base_url.as_str()),
        config.source_shape,
    ));
    let session = ChatSession::new(
        client.clone(),
        toggles,
        Box::new(ConsoleSink::stdout()),
        Box::new(ConsoleNotifier::stderr()),
        log.clone(),
    );
    let corpus = CorpusUseCase::new(client, Box::new(ConsoleNotifier::stderr()), log);
    App { session, corpus }
}
