// Interactive input - each line is the ZIP field contents followed by Enter
use crate::presentation::controller::{Key, UiEvent};
use async_stream::stream;
use futures::Stream;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Ui(UiEvent),
    Quit,
}

pub fn parse_line(line: &str) -> InputCommand {
    match line.trim() {
        ":quit" | ":q" => InputCommand::Quit,
        ":locate" | ":l" => InputCommand::Ui(UiEvent::Locate),
        _ => InputCommand::Ui(UiEvent::KeyPress {
            key: Key::Enter,
            input: line.to_string(),
        }),
    }
}

/// Commands read from `reader` until EOF or an unreadable line.
pub fn command_stream<R>(reader: R) -> impl Stream<Item = InputCommand>
where
    R: AsyncBufRead + Unpin,
{
    stream! {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => yield parse_line(&line),
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "stopped reading input");
                    break;
                }
            }
        }
    }
}
