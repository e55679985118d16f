//! Interactive line loop around a [`Game`].
//!
//! Generic over the reader and writer so the binary can hand it stdin and
//! stdout while tests drive it from in-memory buffers.

use anyhow::Result;
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::GameConfig;
use crate::ship::{Game, BANNER};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed `exit` or `quit`.
    Quit,
    /// Input ran out first.
    EndOfInput,
}

/// Run the prompt loop until the player quits or input runs out.
pub async fn run<R, W>(
    game: &mut Game,
    config: &GameConfig,
    reader: R,
    mut writer: W,
) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if config.show_banner {
        writer.write_all(BANNER.as_bytes()).await?;
        writer.write_all(b"\n\n").await?;
    }

    let mut lines = reader.lines();
    let end = loop {
        let prompt = config.render_prompt(game.current_room_name());
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break SessionEnd::EndOfInput;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = game.process(line);
        if !reply.text.is_empty() {
            writer.write_all(reply.text.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        if reply.terminate {
            break SessionEnd::Quit;
        }
    };
    writer.flush().await?;

    info!(
        "session ended ({:?}) in {}, won: {}",
        end,
        game.current_room_name(),
        game.has_won()
    );
    Ok(end)
}
