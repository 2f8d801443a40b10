//! 対話モード（REPL）とワンショット実行
//!
//! 行頭が `/` の行はコマンド、それ以外はそのままチャットクエリとして送る。

use crate::adapter::log_path_from_env;
use crate::cli::Config;
use crate::domain::ToggleState;
use crate::usecase::{ChatSession, CorpusUseCase};
use crate::wiring::{wire, App};
use common::config::BackendConfig;
use common::error::Error;
use common::log::{FileJsonLog, Log, LogRecord, NoopLog};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// REPL の 1 行を解釈した結果
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 通常のチャットクエリ
    Chat(String),
    /// ドキュメント一覧表示
    Docs,
    /// ドキュメント削除（ID 指定）
    Delete(String),
    /// ファイルアップロード
    Upload(PathBuf),
    /// Google Drive 取り込み（フォルダ ID は省略可）
    Drive(Option<String>),
    /// 現在の設定表示
    Settings,
    /// システムプロンプト更新
    Prompt(String),
    /// LLM モデル更新
    Model(String),
    /// LLM トグル
    Llm(bool),
    /// retrieval トグル
    Retrieval(bool),
    /// セッションリセット（ヒストリー全消去）
    Clear,
    Help,
    Quit,
}

/// 1 行をコマンドに解釈する。空行は None
pub fn parse_command(line: &str) -> Result<Option<Command>, Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if !line.starts_with('/') {
        return Ok(Some(Command::Chat(line.to_string())));
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let rest = parts.next().map(str::trim).unwrap_or("");

    let command = match name {
        "/docs" => Command::Docs,
        "/delete" => {
            if rest.is_empty() {
                return Err(Error::invalid_argument("usage: /delete <document-id>"));
            }
            Command::Delete(rest.to_string())
        }
        "/upload" => {
            if rest.is_empty() {
                return Err(Error::invalid_argument("usage: /upload <path>"));
            }
            Command::Upload(PathBuf::from(rest))
        }
        "/drive" => Command::Drive((!rest.is_empty()).then(|| rest.to_string())),
        "/settings" => Command::Settings,
        "/prompt" => {
            if rest.is_empty() {
                return Err(Error::invalid_argument("usage: /prompt <system prompt>"));
            }
            Command::Prompt(rest.to_string())
        }
        "/model" => {
            if rest.is_empty() {
                return Err(Error::invalid_argument("usage: /model <model name>"));
            }
            Command::Model(rest.to_string())
        }
        "/llm" => Command::Llm(parse_on_off(rest)?),
        "/retrieval" => Command::Retrieval(parse_on_off(rest)?),
        "/clear" => Command::Clear,
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        other => {
            return Err(Error::invalid_argument(format!(
                "unknown command: {} (try /help)",
                other
            )))
        }
    };
    Ok(Some(command))
}

fn parse_on_off(value: &str) -> Result<bool, Error> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(Error::invalid_argument("expected 'on' or 'off'")),
    }
}

const HELP_TEXT: &str = "\
Commands:
  /docs               List documents in the corpus
  /delete <id>        Delete a document by ID
  /upload <path>      Upload a document (txt or pdf)
  /drive [folder-id]  Import documents from Google Drive
  /settings           Show current backend settings
  /prompt <text>      Update the system prompt
  /model <name>       Update the LLM model
  /llm on|off         Toggle LLM answer generation
  /retrieval on|off   Toggle retrieval (locked on while LLM is off)
  /clear              Reset the session history
  /help               Show this help
  /quit               Exit
Anything else is sent to the backend as a chat query.";

/// 起動設定からアプリを組み立てて実行する。戻り値は終了コード
pub fn run(config: Config) -> i32 {
    let backend_config = BackendConfig::resolve(config.url.clone(), config.shape);
    let log: Arc<dyn Log> = match log_path_from_env() {
        Some(path) => Arc::new(FileJsonLog::new(path)),
        None => Arc::new(NoopLog),
    };
    let _ = log.log(
        &LogRecord::info("client started")
            .with_layer("cli")
            .with_kind("lifecycle")
            .with_field(
                "base_url",
                serde_json::json!(backend_config.base_url.clone()),
            )
            .with_field(
                "source_shape",
                serde_json::json!(backend_config.source_shape.as_str()),
            ),
    );

    let toggles = Arc::new(ToggleState::new());
    // retrieval を先に反映する。LLM OFF は retrieval を強制 ON に戻す
    toggles.set_use_retrieval(!config.no_retrieval);
    toggles.set_use_llm(!config.no_llm);

    let App {
        mut session,
        mut corpus,
    } = wire(&backend_config, toggles.clone(), log);

    if !config.message_args.is_empty() {
        session.submit(&config.message_args.join(" "));
        return 0;
    }

    repl(&mut session, &mut corpus, &toggles)
}

fn repl(session: &mut ChatSession, corpus: &mut CorpusUseCase, toggles: &ToggleState) -> i32 {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            None => return 0,
            Some(Ok(line)) => line,
            Some(Err(_)) => return 74,
        };
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => return 0,
            Ok(Some(command)) => dispatch(command, session, corpus, toggles),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn dispatch(
    command: Command,
    session: &mut ChatSession,
    corpus: &mut CorpusUseCase,
    toggles: &ToggleState,
) {
    match command {
        Command::Chat(query) => session.submit(&query),
        Command::Docs => {
            if let Some(documents) = corpus.refresh_documents() {
                if documents.is_empty() {
                    println!("No documents found");
                }
                for doc in documents {
                    println!(
                        "{}  {} ({} chunks)",
                        doc.document_id, doc.document_name, doc.chunk_count
                    );
                }
            }
        }
        Command::Delete(id) => {
            // 通知表示用の名前を一覧から引く。見つからなければ ID をそのまま使う
            let name = corpus
                .refresh_documents()
                .and_then(|docs| {
                    docs.into_iter()
                        .find(|d| d.document_id == id)
                        .map(|d| d.document_name)
                })
                .unwrap_or_else(|| id.clone());
            corpus.delete_document(&id, &name);
        }
        Command::Upload(path) => {
            corpus.upload_document(&path);
        }
        Command::Drive(folder_id) => {
            corpus.import_drive(folder_id.as_deref());
        }
        Command::Settings => {
            if let Some(settings) = corpus.fetch_settings() {
                println!(
                    "system_prompt: {}",
                    settings.system_prompt.as_deref().unwrap_or("")
                );
                println!("llm_model: {}", settings.llm_model.as_deref().unwrap_or(""));
            }
        }
        Command::Prompt(text) => {
            corpus.save_settings(&common::corpus::SettingsUpdate {
                system_prompt: Some(text),
                llm_model: None,
            });
        }
        Command::Model(name) => {
            corpus.save_settings(&common::corpus::SettingsUpdate {
                system_prompt: None,
                llm_model: Some(name),
            });
        }
        Command::Llm(on) => {
            toggles.set_use_llm(on);
            if toggles.retrieval_locked() {
                println!("llm off (retrieval is now forced on)");
            } else {
                println!("llm {}", if on { "on" } else { "off" });
            }
        }
        Command::Retrieval(on) => {
            if toggles.set_use_retrieval(on) {
                println!("retrieval {}", if on { "on" } else { "off" });
            } else {
                println!("retrieval is locked on while the LLM is off");
            }
        }
        Command::Clear => {
            session.reset();
            println!("session cleared");
        }
        Command::Help => println!("{}", HELP_TEXT),
        Command::Quit => {}
    }
}
