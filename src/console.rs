//! Line-oriented terminal I/O for the prompt loop.

use anyhow::{Context, Result};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::{instrument, trace};

/// Something that can show text and ask for a line of input.
///
/// The match controller and human players talk to the terminal only
/// through this trait, so tests can drive a whole game from a script.
#[async_trait::async_trait]
pub trait Prompter: Send {
    /// Writes a line of text.
    async fn say(&mut self, text: &str) -> Result<()>;

    /// Writes `prompt` (no newline) and reads one line.
    ///
    /// Returns `None` once input is exhausted.
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// A [`Prompter`] over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Wraps a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    /// Gives back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[async_trait::async_trait]
impl<R, W> Prompter for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn say(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(format!("{}\n", text).as_bytes())
            .await
            .context("Failed to write to console")?;
        self.output.flush().await.context("Failed to flush console")?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output
            .write_all(prompt.as_bytes())
            .await
            .context("Failed to write prompt")?;
        self.output.flush().await.context("Failed to flush console")?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .await
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }

        // Undecodable bytes become U+FFFD and fail move parsing downstream.
        let line = String::from_utf8_lossy(&raw);
        trace!(%line, "Read input line");
        Ok(Some(line.trim().to_string()))
    }
}
