// Copyright 2026 Bagwise Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use colored::Colorize;
use std::time::Duration;
use tokio::io::{
    stdin, stdout, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tracing::{debug, info};

use crate::chatbot::responses::{quick_question, QUICK_QUESTIONS};
use crate::chatbot::ChatSession;
use crate::config::Config;

/// A line typed into the chat loop
#[derive(Debug, Clone, PartialEq)]
enum ChatInput {
    Message(String),
    Help,
    Stats,
    Quit,
    Unknown(String),
}

impl ChatInput {
    fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix('/') else {
            return ChatInput::Message(line.to_string());
        };

        match command.trim().to_lowercase().as_str() {
            "quit" | "exit" | "q" => ChatInput::Quit,
            "help" | "h" | "?" => ChatInput::Help,
            "stats" => ChatInput::Stats,
            other => match other.parse::<usize>().ok().and_then(quick_question) {
                Some(question) => ChatInput::Message(question.to_string()),
                None => ChatInput::Unknown(line.to_string()),
            },
        }
    }
}

fn help_text() -> String {
    let mut output = String::from("Ask me anything about plastic bags. Quick questions:\n");
    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
        output.push_str(&format!("  /{}  {}\n", i + 1, question));
    }
    output.push_str("  /stats  show how well I'm keeping up\n");
    output.push_str("  /quit   leave the chat");
    output
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

async fn write_bot<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    write_line(writer, &format!("{} {}", "Bot:".green().bold(), text)).await
}

/// Drive a chat session from line-oriented input until EOF or `/quit`.
///
/// The feedback nudge is checked once, `nudge_delay_secs` after the loop starts.
pub async fn run_loop<R, W>(session: &mut ChatSession, reader: R, writer: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let reply_delay = Duration::from_millis(session.settings().reply_delay_ms);
    let nudge_delay = Duration::from_secs(session.settings().nudge_delay_secs);
    let nudge_timer = tokio::time::sleep(nudge_delay);
    tokio::pin!(nudge_timer);
    let mut nudge_pending = true;

    let mut lines = reader.lines();

    loop {
        tokio::select! {
            _ = &mut nudge_timer, if nudge_pending => {
                nudge_pending = false;
                if let Some(nudge) = session.check_feedback_nudge() {
                    write_bot(writer, &nudge).await?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("EOF received, ending chat");
                    break;
                };

                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match ChatInput::parse(trimmed) {
                    ChatInput::Quit => break,
                    ChatInput::Help => write_line(writer, &help_text()).await?,
                    ChatInput::Stats => {
                        let stats = session.stats();
                        write_line(
                            writer,
                            &format!(
                                "Messages: {}, understood: {}, not understood: {} ({:.0}%)",
                                stats.total_messages,
                                stats.understood,
                                stats.not_understood,
                                stats.not_understood_ratio * 100.0
                            ),
                        )
                        .await?;
                    }
                    ChatInput::Unknown(command) => {
                        write_line(writer, &format!("Unknown command {}, try /help", command)).await?;
                    }
                    ChatInput::Message(text) => {
                        if !reply_delay.is_zero() {
                            tokio::time::sleep(reply_delay).await;
                        }
                        let reply = session.exchange(&text);
                        write_bot(writer, &reply).await?;
                    }
                }
            }
        }
    }

    Ok(())
}

pub async fn run(config: &Config, seed: Option<u64>) -> Result<()> {
    let mut session = match seed {
        Some(seed) => ChatSession::with_seed(config.chatbot.clone(), seed),
        None => ChatSession::new(config.chatbot.clone()),
    };
    info!(session_id = %session.id(), "Chat session started");

    let mut stdout = stdout();
    write_line(
        &mut stdout,
        &"Bagwise chat: plastic waste questions answered".bold().to_string(),
    )
    .await?;
    write_line(&mut stdout, &help_text()).await?;

    run_loop(&mut session, BufReader::new(stdin()), &mut stdout).await?;

    let stats = session.stats();
    info!(
        session_id = %session.id(),
        started_at = %session.started_at(),
        messages = stats.total_messages,
        not_understood = stats.not_understood,
        feedback = stats.feedback_messages,
        "Chat session ended"
    );
    if let Some(log_dir) = crate::logging::get_log_directory() {
        debug!(log_directory = %log_dir.display(), "Session log written");
    }
    write_line(&mut stdout, "Goodbye! Remember to bring your own bag.").await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::nudge::NUDGE_MESSAGE;
    use crate::chatbot::types::Sender;
    use crate::config::ChatbotConfig;

    fn settings(nudge_delay_secs: u64) -> ChatbotConfig {
        ChatbotConfig {
            reply_delay_ms: 0,
            nudge_delay_secs,
            ..ChatbotConfig::default()
        }
    }

    #[test]
    fn test_parse_chat_input() {
        assert_eq!(ChatInput::parse("/quit"), ChatInput::Quit);
        assert_eq!(ChatInput::parse("/HELP"), ChatInput::Help);
        assert_eq!(ChatInput::parse("/stats"), ChatInput::Stats);
        assert_eq!(
            ChatInput::parse("/2"),
            ChatInput::Message(QUICK_QUESTIONS[1].to_string())
        );
        assert_eq!(
            ChatInput::parse("/9"),
            ChatInput::Unknown("/9".to_string())
        );
        assert_eq!(
            ChatInput::parse("hello"),
            ChatInput::Message("hello".to_string())
        );
    }

    #[tokio::test]
    async fn test_loop_answers_until_quit() {
        let mut session = ChatSession::with_seed(settings(3600), 1);
        let input = "hello\n\n/1\n/stats\n/quit\nnever read\n";
        let mut output: Vec<u8> = Vec::new();

        run_loop(&mut session, BufReader::new(input.as_bytes()), &mut output)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(session.log().len(), 2);
        assert_eq!(session.log()[1].message, QUICK_QUESTIONS[0]);
        assert!(text.contains("Messages: 2, understood: 2, not understood: 0 (0%)"));

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].sender, Sender::User);
        assert!(text.contains(&transcript[1].text));
        assert!(text.contains(&transcript[3].text));
    }

    #[tokio::test]
    async fn test_loop_stops_at_eof() {
        let mut session = ChatSession::with_seed(settings(3600), 1);
        let mut output: Vec<u8> = Vec::new();

        run_loop(&mut session, BufReader::new("asdkjf".as_bytes()), &mut output)
            .await
            .unwrap();

        assert_eq!(session.log().len(), 1);
        assert!(!session.log()[0].understood);
    }

    #[tokio::test]
    async fn test_unknown_command_is_not_sent_to_bot() {
        let mut session = ChatSession::with_seed(settings(3600), 1);
        let mut output: Vec<u8> = Vec::new();

        run_loop(&mut session, BufReader::new("/dance\n".as_bytes()), &mut output)
            .await
            .unwrap();

        assert!(session.log().is_empty());
        assert!(String::from_utf8(output).unwrap().contains("Unknown command /dance"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nudge_fires_once_after_delay() {
        let mut session = ChatSession::with_seed(settings(30), 3);
        let mut output: Vec<u8> = Vec::new();
        let (mut client, server) = tokio::io::duplex(4096);

        let driver = async move {
            client
                .write_all(b"hello\nasdkjf\nqwerty\nzxcv\nrecycle\nplop\n")
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(client);
        };

        let (result, _) = tokio::join!(
            run_loop(&mut session, BufReader::new(server), &mut output),
            driver
        );
        result.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(NUDGE_MESSAGE).count(), 1);
        assert_eq!(session.log().len(), 6);
        assert_eq!(session.transcript().last().unwrap().text, NUDGE_MESSAGE);
    }
}
