use std::{io::ErrorKind, process::Stdio};

use livecode_buffer::hook::Executor;
use tokio::{io::AsyncWriteExt, process::Command, sync::mpsc::Sender};
use tokio_util::sync::CancellationToken;

use crate::{
    error::AppError,
    event::{Envelope, Message, MessageSource},
    settings::ExecutorSettings,
};

/// Pipes buffer snapshots into an external program. A newer run cancels the
/// one still in flight, so only the latest output reaches the model.
pub struct CommandExecutor {
    cancellation: Option<CancellationToken>,
    sender: Sender<Envelope>,
    settings: ExecutorSettings,
}

impl CommandExecutor {
    pub fn new(settings: ExecutorSettings, sender: Sender<Envelope>) -> Self {
        Self {
            cancellation: None,
            sender,
            settings,
        }
    }
}

impl Executor for CommandExecutor {
    fn run(&mut self, lines: Vec<String>) {
        if let Some(token) = self.cancellation.take() {
            token.cancel();
        }

        let token = CancellationToken::new();
        self.cancellation = Some(token.clone());

        let settings = self.settings.clone();
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let message = tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("execution cancelled by newer run");
                    return;
                }
                result = execute(&settings, lines) => match result {
                    Ok(output) => Message::Executed(output),
                    Err(err) => Message::Error(err.to_string()),
                },
            };

            let envelope = Envelope {
                messages: vec![message],
                source: MessageSource::Task,
            };

            if let Err(err) = sender.send(envelope).await {
                tracing::error!("sending execution result failed: {:?}", err);
            }
        });
    }
}

/// Runs the program with the lines joined by `\n` on stdin and returns stdout
/// followed by stderr as lines.
pub async fn execute(
    settings: &ExecutorSettings,
    lines: Vec<String>,
) -> Result<Vec<String>, AppError> {
    tracing::debug!(
        "executing {:?} with {:?} and {} lines",
        settings.program,
        settings.args,
        lines.len()
    );

    let mut child = Command::new(&settings.program)
        .args(&settings.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|err| failed(&settings.program, err))?;

    let mut content = lines.join("\n");
    content.push('\n');

    // stdin is written concurrently with draining stdout and stderr
    let stdin = child.stdin.take();
    let write = async move {
        if let Some(mut stdin) = stdin {
            stdin.write_all(content.as_bytes()).await?;
        }
        Ok::<(), std::io::Error>(())
    };

    let (written, output) = tokio::join!(write, child.wait_with_output());
    let output = output.map_err(|err| failed(&settings.program, err))?;

    match written {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("{} closed stdin before reading all lines", settings.program);
        }
        Err(err) => return Err(failed(&settings.program, err)),
        Ok(()) => {}
    }

    if !output.status.success() {
        tracing::debug!("{} exited with {}", settings.program, output.status);
    }

    let mut result: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.to_string())
        .collect();

    result.extend(
        String::from_utf8_lossy(&output.stderr)
            .lines()
            .map(|line| line.to_string()),
    );

    Ok(result)
}

fn failed(program: &str, err: std::io::Error) -> AppError {
    let message = format!("{}: {}", program, err);
    tracing::error!("{}", message);
    AppError::ExecutionFailed(message)
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::Duration;

    use tokio::{sync::mpsc, time::timeout};

    use super::*;

    fn settings(program: &str, args: &[&str]) -> ExecutorSettings {
        ExecutorSettings {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn execute_pipes_lines_to_stdin() {
        let lines = vec!["a".to_string(), String::new(), "c".to_string()];

        let output = execute(&settings("cat", &[]), lines.clone()).await.unwrap();

        assert_eq!(lines, output);
    }

    #[tokio::test]
    async fn execute_drains_output_while_writing_large_input() {
        let lines: Vec<String> = (0..20_000).map(|i| format!("print({})", i)).collect();

        let output = timeout(
            Duration::from_secs(10),
            execute(&settings("cat", &[]), lines.clone()),
        )
        .await
        .expect("execution must not block on full pipes")
        .unwrap();

        assert_eq!(lines, output);
    }

    #[tokio::test]
    async fn execute_keeps_output_when_program_ignores_stdin() {
        let lines: Vec<String> = (0..20_000).map(|i| format!("print({})", i)).collect();

        let output = execute(&settings("sh", &["-c", "echo done"]), lines)
            .await
            .unwrap();

        assert_eq!(vec!["done".to_string()], output);
    }

    #[tokio::test]
    async fn execute_collects_stderr() {
        let output = execute(&settings("sh", &["-c", "echo out; echo err >&2"]), Vec::new())
            .await
            .unwrap();

        assert_eq!(vec!["out".to_string(), "err".to_string()], output);
    }

    #[tokio::test]
    async fn execute_unknown_program_fails() {
        let result = execute(&settings("livecode-no-such-program", &[]), Vec::new()).await;

        assert!(matches!(result, Err(AppError::ExecutionFailed(_))));
    }

    #[tokio::test]
    async fn run_sends_output_envelope() {
        let (sender, mut receiver) = mpsc::channel(1);
        let mut executor = CommandExecutor::new(settings("cat", &[]), sender);

        executor.run(vec!["x".to_string()]);

        let envelope = receiver.recv().await.unwrap();
        assert_eq!(MessageSource::Task, envelope.source);
        assert_eq!(vec![Message::Executed(vec!["x".to_string()])], envelope.messages);
    }

    #[tokio::test]
    async fn newer_run_cancels_older() {
        let (sender, mut receiver) = mpsc::channel(2);
        let mut executor = CommandExecutor::new(settings("sh", &["-c", "sleep 1; cat"]), sender);

        executor.run(vec!["old".to_string()]);
        executor.settings = settings("cat", &[]);
        executor.run(vec!["new".to_string()]);

        let envelope = receiver.recv().await.unwrap();
        assert_eq!(vec![Message::Executed(vec!["new".to_string()])], envelope.messages);

        drop(executor);
        assert!(receiver.recv().await.is_none());
    }
}
