use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::TranslateError;
use crate::script::detect_language;
use crate::translate::Translator;

pub const BANNER: &str = "Nepali/Sinhala → English Translator (type 'exit' to quit)";

/// Line oriented translator loop.
///
/// Ends on `exit` or end of input. A failed remote call ends the loop with
/// that error.
pub async fn run<R, W>(translator: &Translator, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(format!("{}\n", BANNER).as_bytes()).await?;

    loop {
        output.write_all(b"\nEnter text: ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("Console input closed");
            break;
        };
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        if line.trim().is_empty() {
            output
                .write_all(format!("{}\n", TranslateError::EmptyInput).as_bytes())
                .await?;
            continue;
        }

        let language = detect_language(&line);
        output
            .write_all(format!("Detected Language: {}\n", language).as_bytes())
            .await?;
        output.flush().await?;

        let english = translator.translate(&line).await?;
        output.write_all(format!("English: {}\n", english).as_bytes()).await?;
    }

    output.flush().await?;
    Ok(())
}
