//! ドキュメントコーパスと設定のユースケース
//!
//! コントローラ本体（session）からは独立した周辺操作。結果は戻り値と
//! Notifier の通知（成功・エラーバナー）で伝える。

use crate::ports::outbound::{CorpusBackend, Notice, Notifier};
use common::corpus::{DocumentEntry, Settings, SettingsUpdate};
use common::log::{Log, LogRecord};
use std::path::Path;
use std::sync::Arc;

/// コーパス管理のユースケース
pub struct CorpusUseCase {
    backend: Arc<dyn CorpusBackend>,
    notifier: Box<dyn Notifier>,
    log: Arc<dyn Log>,
}

impl CorpusUseCase {
    pub fn new(
        backend: Arc<dyn CorpusBackend>,
        notifier: Box<dyn Notifier>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            backend,
            notifier,
            log,
        }
    }

    /// ドキュメント一覧を取得する。失敗時はエラー通知を出して None
    pub fn refresh_documents(&mut self) -> Option<Vec<DocumentEntry>> {
        match self.backend.list_documents() {
            Ok(documents) => Some(documents),
            Err(e) => {
                self.notifier
                    .notify(Notice::error(format!("Error loading documents: {}", e)));
                None
            }
        }
    }

    /// ドキュメントを削除する。`name` は通知表示用
    pub fn delete_document(&mut self, document_id: &str, name: &str) -> bool {
        match self.backend.delete_document(document_id) {
            Ok(()) => {
                self.notifier
                    .notify(Notice::success(format!("Deleted {}", name)));
                true
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::error(format!("Error deleting document: {}", e)));
                false
            }
        }
    }

    /// ファイルをアップロードしてコーパスに追加する
    pub fn upload_document(&mut self, path: &Path) -> Option<DocumentEntry> {
        match self.backend.upload_document(path) {
            Ok(entry) => {
                self.notifier.notify(Notice::success(format!(
                    "Successfully uploaded {}",
                    entry.document_name
                )));
                Some(entry)
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::error(format!("Error uploading document: {}", e)));
                None
            }
        }
    }

    /// Google Drive フォルダから取り込む
    pub fn import_drive(&mut self, folder_id: Option<&str>) -> Option<Vec<DocumentEntry>> {
        match self.backend.import_drive(folder_id) {
            Ok(imported) => {
                self.notifier.notify(Notice::success(format!(
                    "Successfully imported {} documents",
                    imported.len()
                )));
                Some(imported)
            }
            Err(e) => {
                self.notifier.notify(Notice::error(format!(
                    "Error importing from Google Drive: {}",
                    e
                )));
                None
            }
        }
    }

    /// 現在の設定を取得する。失敗はログのみ（起動時の初期ロード相当のため通知しない）
    pub fn fetch_settings(&mut self) -> Option<Settings> {
        match self.backend.fetch_settings() {
            Ok(settings) => Some(settings),
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::error(format!("failed to load settings: {}", e))
                        .with_layer("usecase")
                        .with_kind("error"),
                );
                None
            }
        }
    }

    /// 設定を保存する
    pub fn save_settings(&mut self, update: &SettingsUpdate) -> Option<Settings> {
        match self.backend.update_settings(update) {
            Ok(settings) => {
                self.notifier
                    .notify(Notice::success("Settings saved successfully"));
                Some(settings)
            }
            Err(e) => {
                self.notifier
                    .notify(Notice::error(format!("Error saving settings: {}", e)));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error::Error;
    use common::log::NoopLog;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notices: Arc<Mutex<Vec<Notice>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    #[derive(Default)]
    struct MockCorpusBackend {
        fail: bool,
    }

    fn entry(name: &str) -> DocumentEntry {
        serde_json::from_value(serde_json::json!({
            "document_id": "d1",
            "document_name": name,
            "chunk_count": 2
        }))
        .unwrap()
    }

    impl CorpusBackend for MockCorpusBackend {
        fn list_documents(&self) -> Result<Vec<DocumentEntry>, Error> {
            if self.fail {
                return Err(Error::backend(500, "GET /api/documents failed"));
            }
            Ok(vec![entry("doc1.pdf")])
        }

        fn delete_document(&self, _document_id: &str) -> Result<(), Error> {
            if self.fail {
                return Err(Error::backend(404, "DELETE /api/documents/d1 failed"));
            }
            Ok(())
        }

        fn upload_document(&self, _path: &Path) -> Result<DocumentEntry, Error> {
            if self.fail {
                return Err(Error::backend(500, "POST /api/documents/upload failed"));
            }
            Ok(entry("report.txt"))
        }

        fn import_drive(&self, _folder_id: Option<&str>) -> Result<Vec<DocumentEntry>, Error> {
            if self.fail {
                return Err(Error::backend(500, "POST /api/documents/drive failed"));
            }
            Ok(vec![entry("a.txt"), entry("b.txt")])
        }

        fn fetch_settings(&self) -> Result<Settings, Error> {
            if self.fail {
                return Err(Error::transport("/api/settings", "connection refused"));
            }
            Ok(Settings::default())
        }

        fn update_settings(&self, _update: &SettingsUpdate) -> Result<Settings, Error> {
            if self.fail {
                return Err(Error::backend(500, "POST /api/settings failed"));
            }
            Ok(Settings::default())
        }
    }

    fn usecase(fail: bool) -> (CorpusUseCase, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let usecase = CorpusUseCase::new(
            Arc::new(MockCorpusBackend { fail }),
            Box::new(notifier.clone()),
            Arc::new(NoopLog),
        );
        (usecase, notifier)
    }

    #[test]
    fn test_refresh_documents_success_has_no_notice() {
        let (mut uc, notifier) = usecase(false);
        let documents = uc.refresh_documents().unwrap();
        assert_eq!(documents.len(), 1);
        assert!(notifier.notices.lock().unwrap().is_empty());
    }

    #[test]
    fn test_refresh_documents_failure_notifies() {
        let (mut uc, notifier) = usecase(true);
        assert!(uc.refresh_documents().is_none());
        let notices = notifier.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error);
        assert!(notices[0].message.starts_with("Error loading documents:"));
    }

    #[test]
    fn test_delete_document_notices() {
        let (mut uc, notifier) = usecase(false);
        assert!(uc.delete_document("d1", "doc1.pdf"));
        assert_eq!(
            notifier.notices.lock().unwrap()[0],
            Notice::success("Deleted doc1.pdf")
        );

        let (mut uc, notifier) = usecase(true);
        assert!(!uc.delete_document("d1", "doc1.pdf"));
        assert!(notifier.notices.lock().unwrap()[0].is_error);
    }

    #[test]
    fn test_upload_document_success_notice_uses_backend_name() {
        let (mut uc, notifier) = usecase(false);
        let entry = uc.upload_document(Path::new("/tmp/report.txt")).unwrap();
        assert_eq!(entry.document_name, "report.txt");
        assert_eq!(
            notifier.notices.lock().unwrap()[0],
            Notice::success("Successfully uploaded report.txt")
        );
    }

    #[test]
    fn test_import_drive_reports_count() {
        let (mut uc, notifier) = usecase(false);
        let imported = uc.import_drive(Some("folder123")).unwrap();
        assert_eq!(imported.len(), 2);
        assert_eq!(
            notifier.notices.lock().unwrap()[0],
            Notice::success("Successfully imported 2 documents")
        );
    }

    #[test]
    fn test_fetch_settings_failure_is_silent() {
        let (mut uc, notifier) = usecase(true);
        assert!(uc.fetch_settings().is_none());
        assert!(notifier.notices.lock().unwrap().is_empty());
    }

    #[test]
    fn test_save_settings_notices() {
        let (mut uc, notifier) = usecase(false);
        uc.save_settings(&SettingsUpdate::default()).unwrap();
        assert_eq!(
            notifier.notices.lock().unwrap()[0],
            Notice::success("Settings saved successfully")
        );

        let (mut uc, notifier) = usecase(true);
        assert!(uc.save_settings(&SettingsUpdate::default()).is_none());
        assert!(notifier.notices.lock().unwrap()[0]
            .message
            .starts_with("Error saving settings:"));
    }
}
