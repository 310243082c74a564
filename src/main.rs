//! `private_cdn` binary: unpad or pad a body from a file or stdin.

mod cli;

use std::{
    io::{self, IsTerminal},
    path::Path,
    process::ExitCode,
};

use bytes::{Bytes, BytesMut};
use clap::Parser;
use cli::{Cli, Command};
use private_cdn::{PaddedBodyCodec, PaddingConfig, read_padded_body};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio_util::codec::Encoder;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "command failed");
            eprintln!("private_cdn: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout carries only the payload. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(err) = install_subscriber(filter, io::stderr, io::stderr().is_terminal()) {
        eprintln!("private_cdn: logging disabled: {err}");
    }
}

/// Install a `fmt` subscriber as the global default.
///
/// Only the subscriber is installed. `tracing` already forwards events to
/// `log` (`log-always`), so a `log` bridge would print every event twice.
fn install_subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> Result<(), SetGlobalDefaultError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

async fn run(cli: Cli) -> io::Result<()> {
    let config = cli
        .max_length
        .map_or_else(PaddingConfig::default, PaddingConfig::new);

    let (Command::Unpad { input } | Command::Pad { input, .. }) = &cli.command;
    let reader = open_input(input.as_deref()).await?;
    let output = transform(&cli.command, config, reader).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await
}

async fn open_input(path: Option<&Path>) -> io::Result<Box<dyn AsyncRead + Unpin + Send>> {
    Ok(match path {
        Some(path) => Box::new(tokio::fs::File::open(path).await?),
        None => Box::new(tokio::io::stdin()),
    })
}

/// Apply `command` to everything `reader` yields.
async fn transform<R>(command: &Command, config: PaddingConfig, reader: R) -> io::Result<Bytes>
where
    R: AsyncRead + Unpin,
{
    match command {
        Command::Unpad { .. } => read_padded_body(reader, config).await,
        Command::Pad { bucket, .. } => pad(reader, config.with_bucket_size(*bucket)).await,
    }
}

async fn pad<R>(reader: R, config: PaddingConfig) -> io::Result<Bytes>
where
    R: AsyncRead + Unpin,
{
    let payload = read_limited(reader, config.max_envelope_length()).await?;
    let mut dst = BytesMut::new();
    PaddedBodyCodec::new(config).encode(payload, &mut dst)?;
    Ok(dst.freeze())
}

/// Read at most `limit + 1` bytes so oversized input is caught by the encoder
/// without reading the whole stream.
async fn read_limited<R>(reader: R, limit: usize) -> io::Result<Bytes>
where
    R: AsyncRead + Unpin,
{
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut buf = Vec::new();
    reader.take(cap).read_to_end(&mut buf).await?;
    Ok(Bytes::from(buf))
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, Write},
        path::Path,
        sync::{Arc, Mutex},
    };

    use rstest::rstest;
    use tracing_subscriber::EnvFilter;

    use super::{Command, PaddingConfig, install_subscriber, open_input, read_limited, transform};

    const HELLO_PADDED: &[u8] = b"\x00\x00\x00\x05Hello\x00\x00\x00";

    fn unpad_command() -> Command { Command::Unpad { input: None } }

    fn pad_command(bucket: usize) -> Command { Command::Pad { bucket, input: None } }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("log buffer lock")).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("log buffer lock")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[tokio::test]
    async fn unpad_writes_payload() {
        let out = transform(&unpad_command(), PaddingConfig::default(), HELLO_PADDED)
            .await
            .expect("valid envelope");
        assert_eq!(&out[..], b"Hello");
    }

    #[tokio::test]
    async fn unpad_rejects_malformed_input() {
        let err = transform(
            &unpad_command(),
            PaddingConfig::default(),
            &b"\x00\x00\x00\x05He"[..],
        )
        .await
        .expect_err("truncated body");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn unpad_rejects_body_over_max_length() {
        let err = transform(&unpad_command(), PaddingConfig::new(8), HELLO_PADDED)
            .await
            .expect_err("body over limit");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[rstest]
    #[case::under_limit(15, 15)]
    #[case::at_limit(16, 16)]
    #[case::one_over(17, 17)]
    #[case::far_over(4096, 17)]
    #[tokio::test]
    async fn read_limited_stops_one_past_limit(#[case] available: usize, #[case] read: usize) {
        let input = vec![0xAB; available];
        let out = read_limited(input.as_slice(), 16)
            .await
            .expect("in-memory read");
        assert_eq!(out.len(), read);
    }

    #[tokio::test]
    async fn pad_fills_bucket_at_limit() {
        let payload = [b'x'; 12];
        let out = transform(&pad_command(16), PaddingConfig::new(16), &payload[..])
            .await
            .expect("payload fits bucket");
        assert_eq!(out.len(), 16);
        assert_eq!(&out[..4], b"\x00\x00\x00\x0C");
        assert_eq!(&out[4..], &payload[..]);
    }

    #[tokio::test]
    async fn pad_pads_short_payload_with_zeros() {
        let out = transform(&pad_command(12), PaddingConfig::default(), &b"Hello"[..])
            .await
            .expect("payload fits bucket");
        assert_eq!(&out[..], HELLO_PADDED);
    }

    #[rstest]
    #[case::one_over_bucket(13, 16, io::ErrorKind::InvalidInput)]
    #[case::input_over_limit(4096, 16, io::ErrorKind::InvalidInput)]
    #[case::bucket_over_limit(5, 17, io::ErrorKind::InvalidData)]
    #[tokio::test]
    async fn pad_rejects_unfit_input(
        #[case] payload_len: usize,
        #[case] bucket: usize,
        #[case] kind: io::ErrorKind,
    ) {
        let payload = vec![b'x'; payload_len];
        let err = transform(
            &pad_command(bucket),
            PaddingConfig::new(16),
            payload.as_slice(),
        )
        .await
        .expect_err("input does not fit");
        assert_eq!(err.kind(), kind);
    }

    #[tokio::test]
    async fn missing_input_file_is_reported() {
        let err = open_input(Some(Path::new("/nonexistent/private_cdn/body.bin")))
            .await
            .err()
            .expect("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn rejected_body_is_logged_once() {
        let logs = SharedBuf::default();
        let writer = logs.clone();
        install_subscriber(EnvFilter::new("debug"), move || writer.clone(), false)
            .expect("first global subscriber");

        // A body length no other test uses, to tell this event apart.
        let mut body = b"\x00\x00\x00\x40".to_vec();
        body.resize(37, 0);
        let err = transform(&unpad_command(), PaddingConfig::default(), body.as_slice())
            .await
            .expect_err("truncated body");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let output = logs.contents();
        let rejections = output
            .lines()
            .filter(|line| line.contains("rejected padded buffer"))
            .filter(|line| line.contains("buffer_len=37"))
            .count();
        assert_eq!(rejections, 1, "log output:\n{output}");
    }
}
