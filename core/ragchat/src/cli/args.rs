//! コマンドライン引数の定義と解析

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::chat::SourceShape;
use common::error::Error;

/// 解析済みの起動設定
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// -u / --url: バックエンドのベース URL（未指定時は環境変数 → デフォルト）
    pub url: Option<String>,
    /// --shape: チャットレスポンスの出典形状（ranked | chunked）
    pub shape: Option<SourceShape>,
    /// --no-llm: LLM トグルを OFF で開始（retrieval は強制 ON）
    pub no_llm: bool,
    /// --no-retrieval: retrieval トグルを OFF で開始
    pub no_retrieval: bool,
    /// 位置引数。非空ならワンショット送信、空なら対話モード
    pub message_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成 / ヘルプ等の表示で終了
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    /// clap が生成したヘルプ・バージョン表示（表示して正常終了）
    Exit(String),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("ragchat")
        .about("Chat against a local RAG backend, with document corpus management")
        .arg(
            clap::Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("Backend base URL (default: RAGCHAT_URL or http://localhost:8000)"),
        )
        .arg(
            clap::Arg::new("shape")
                .long("shape")
                .value_name("SHAPE")
                .help("Source field shape of chat responses: ranked | chunked"),
        )
        .arg(
            clap::Arg::new("no-llm")
                .long("no-llm")
                .help("Start with the LLM toggle off (retrieval only)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-retrieval")
                .long("no-retrieval")
                .help("Start with the retrieval toggle off")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("completion")
                .long("completion")
                .value_name("SHELL")
                .help("Generate a shell completion script and exit")
                .value_parser(value_parser!(Shell)),
        )
        .arg(
            clap::Arg::new("message")
                .help("One-shot query; starts the interactive prompt when omitted")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

/// 引数を解析する
pub fn parse_args<I>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = String>,
{
    let argv = std::iter::once("ragchat".to_string()).chain(args);
    let matches = match build_clap_command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(e)
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            return Ok(ParseOutcome::Exit(e.to_string()));
        }
        Err(e) => return Err(Error::invalid_argument(e.to_string())),
    };

    if let Some(shell) = matches.get_one::<Shell>("completion") {
        return Ok(ParseOutcome::GenerateCompletion(*shell));
    }

    let shape = match matches.get_one::<String>("shape") {
        None => None,
        Some(raw) => Some(SourceShape::from_str(raw).ok_or_else(|| {
            Error::invalid_argument(format!(
                "unknown source shape '{}' (expected: ranked | chunked)",
                raw
            ))
        })?),
    };

    Ok(ParseOutcome::Config(Config {
        url: matches.get_one::<String>("url").cloned(),
        shape,
        no_llm: matches.get_flag("no-llm"),
        no_retrieval: matches.get_flag("no-retrieval"),
        message_args: matches
            .get_many::<String>("message")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
    }))
}

/// 補完スクリプトを stdout に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "ragchat", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ParseOutcome, Error> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn config(args: &[&str]) -> Config {
        match parse(args).unwrap() {
            ParseOutcome::Config(config) => config,
            other => panic!("expected config, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_url_and_shape() {
        let config = config(&["-u", "http://other:9000", "--shape", "chunked"]);
        assert_eq!(config.url.as_deref(), Some("http://other:9000"));
        assert_eq!(config.shape, Some(SourceShape::Chunked));
    }

    #[test]
    fn test_invalid_shape_is_rejected() {
        let err = parse(&["--shape", "nested"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_toggle_flags() {
        let config = config(&["--no-llm", "--no-retrieval"]);
        assert!(config.no_llm);
        assert!(config.no_retrieval);
    }

    #[test]
    fn test_one_shot_message_args() {
        let config = config(&["What", "is", "X?"]);
        assert_eq!(config.message_args, vec!["What", "is", "X?"]);
    }

    #[test]
    fn test_completion_outcome() {
        match parse(&["--completion", "bash"]).unwrap() {
            ParseOutcome::GenerateCompletion(shell) => assert_eq!(shell, Shell::Bash),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_help_is_exit_outcome() {
        match parse(&["--help"]).unwrap() {
            ParseOutcome::Exit(text) => assert!(text.contains("ragchat")),
            other => panic!("expected exit, got {:?}", other),
        }
    }
}
