use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use crate::context::AppContext;
use crate::vendor::message::{Message, MessageContent};

/// Read-send-print loop against the chat service until `exit`, `quit` or end of input.
pub async fn run<R, W>(ctx: &AppContext, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let model = ctx.config.model_id();
    output
        .write_all(format!("Chatting with {model}. Type 'exit' to quit.\n").as_bytes())
        .await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"You: ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\n").await?;
            break;
        };
        if is_exit(&line) {
            break;
        }

        let messages = [Message::user(MessageContent::Text(line))];
        let printed = match ctx.chat.complete(&model, &messages).await {
            Ok(completion) => format!("Bot: {}\n", completion.into_text()),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "chat completion failed");
                format!("Error: {err:#}\n")
            }
        };
        output.write_all(printed.as_bytes()).await?;
    }

    output.flush().await?;
    Ok(())
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "exit" | "quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::create_context;
    use crate::test_utils::{test_config, RecordingClient};
    use crate::vendor::message::Completion;
    use std::path::Path;

    #[test]
    fn exit_words_are_case_insensitive() {
        assert!(is_exit("exit"));
        assert!(is_exit("QUIT"));
        assert!(is_exit("  Exit \r"));
        assert!(!is_exit("exit now"));
    }

    #[tokio::test]
    async fn sends_each_line_until_exit() {
        let client = RecordingClient::replying(Completion::Text("hi there".into()));
        let ctx = create_context(test_config(Path::new("uploads")), client.clone());
        let mut output = Vec::new();

        run(&ctx, &b"hello\ndraw a cat\nexit\nnever sent\n"[..], &mut output)
            .await
            .unwrap();

        let calls = client.calls().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "shapesinc/tenshi");
        assert_eq!(
            calls[1].1,
            vec![Message::user(MessageContent::Text("draw a cat".into()))]
        );

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Chatting with shapesinc/tenshi. Type 'exit' to quit.\n"));
        assert_eq!(output.matches("Bot: hi there\n").count(), 2);
    }

    #[tokio::test]
    async fn errors_are_printed_and_loop_continues() {
        let client = RecordingClient::failing("connection refused");
        let ctx = create_context(test_config(Path::new("uploads")), client.clone());
        let mut output = Vec::new();

        run(&ctx, &b"one\ntwo\n"[..], &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Error: connection refused\n").count(), 2);
        assert_eq!(client.calls().await.len(), 2);
    }
}
