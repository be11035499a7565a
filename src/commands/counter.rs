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
use tokio::io::{stdout, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::config::Config;
use crate::page::counter::CounterAnimation;

/// Return to column zero and erase the line so shorter frames leave no trailing digits
const REDRAW: &[u8] = b"\r\x1b[2K";

/// Draw every frame of the animation on one line, one frame per tick
pub async fn render_frames<W>(animation: CounterAnimation, writer: &mut W) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut interval = tokio::time::interval(animation.tick());
    let mut frames = 0usize;
    for frame in animation {
        interval.tick().await;
        writer.write_all(REDRAW).await?;
        writer.write_all(frame.display.as_bytes()).await?;
        writer.flush().await?;
        frames += 1;
    }
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(frames)
}

pub async fn run(config: &Config, target: f64, instant: bool) -> Result<()> {
    let animation = CounterAnimation::new(target, &config.counter)?;
    let mut stdout = stdout();

    if instant {
        let frame = animation.final_frame();
        stdout
            .write_all(format!("{}\n", frame.display).as_bytes())
            .await?;
        return Ok(());
    }

    debug!(
        target = animation.target(),
        tick_ms = animation.tick().as_millis() as u64,
        "Animating counter"
    );

    let frames = render_frames(animation, &mut stdout).await?;

    debug!(frames, "Counter finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CounterConfig;

    /// What a terminal shows after replaying the output: `\r` moves to column zero,
    /// erase-line clears the row and printed characters overwrite in place.
    fn visible_line(output: &[u8]) -> String {
        let text = String::from_utf8(output.to_vec()).unwrap();
        let mut line: Vec<char> = Vec::new();
        let mut cursor = 0usize;
        let mut rest = text.as_str();

        while let Some(c) = rest.chars().next() {
            if let Some(after) = rest.strip_prefix("\x1b[2K") {
                line.clear();
                rest = after;
                continue;
            }
            match c {
                '\r' => cursor = 0,
                '\n' => break,
                _ => {
                    if cursor < line.len() {
                        line[cursor] = c;
                    } else {
                        line.push(c);
                    }
                    cursor += 1;
                }
            }
            rest = &rest[c.len_utf8()..];
        }
        line.into_iter().collect()
    }

    #[test]
    fn test_bare_carriage_return_leaves_stale_digits() {
        assert_eq!(visible_line(b"\r100.00\r100\n"), "100.00");
        assert_eq!(visible_line(b"\r\x1b[2K100.00\r\x1b[2K100\n"), "100");
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_ends_on_exact_target() {
        let animation = CounterAnimation::new(100.0, &CounterConfig::default()).unwrap();
        let mut output: Vec<u8> = Vec::new();

        let frames = render_frames(animation, &mut output).await.unwrap();

        assert!(frames > 1);
        assert!(output.ends_with(b"\n"));
        assert_eq!(visible_line(&output), "100");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorter_final_frame_clears_previous_one() {
        let animation = CounterAnimation::new(4.0, &CounterConfig::default()).unwrap();
        let mut output: Vec<u8> = Vec::new();

        render_frames(animation, &mut output).await.unwrap();

        assert_eq!(visible_line(&output), "4");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fractional_target_shows_two_decimals() {
        let animation = CounterAnimation::new(1.76, &CounterConfig::default()).unwrap();
        let mut output: Vec<u8> = Vec::new();

        render_frames(animation, &mut output).await.unwrap();

        assert_eq!(visible_line(&output), "1.76");
    }
}
