//! Fire-and-forget clip playback. Each trigger gets its own detached
//! thread that holds the output stream open until the clip ends; nothing
//! is shared with the rest of the application and nothing is reported
//! back beyond the log.

use std::{fs::File, io::BufReader, path::Path, path::PathBuf, thread};

use rodio::{decoder, Sink};

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("couldn't open the clip: {0}")]
    Open(#[from] std::io::Error),
    #[error("couldn't open the audio output: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("couldn't decode the clip: {0}")]
    Decode(#[from] decoder::DecoderError),
}

/// Plays `clip` on a detached thread. Overlapping calls play over each
/// other; failures are logged and never reach the caller.
pub fn play(clip: PathBuf) {
    thread::spawn(move || {
        if let Err(e) = play_blocking(&clip) {
            log::warn!("couldn't play {}: {e}", clip.display());
        }
    });
}

fn play_blocking(clip: &Path) -> Result<(), PlaybackError> {
    let reader = BufReader::new(File::open(clip)?);
    let stream_handle = rodio::OutputStreamBuilder::open_default_stream()?;
    let source = decoder::Decoder::new(reader)?;
    let sink = Sink::connect_new(stream_handle.mixer());
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
