//! LZEVIL CLI - stdin/stdout compression for the legacy lobby stream format.
//!
//! Without a flag, stdin is buffered to determine the declared length, then
//! compressed to stdout. With `-d`, stdin is decompressed to stdout.

use clap::Parser;
use lzevil_codec::{LzevilDecoder, LzevilEncoder};
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(name = "lzevil")]
#[command(
    version,
    about = "Compress or decompress LZEVIL streams between stdin and stdout"
)]
#[command(long_about = "
Compress or decompress LZEVIL streams between stdin and stdout.

The compressed stream carries a 4-byte little-endian length prefix, so
compression buffers all of stdin first; decompression streams.

Examples:
  lzevil < serverlist.bin > serverlist.lz
  lzevil -d < serverlist.lz > serverlist.bin
")]
struct Cli {
    /// Decompress stdin instead of compressing it
    #[arg(short, long)]
    decompress: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = if cli.decompress {
        cmd_decompress()
    } else {
        cmd_compress()
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress() -> Result<(), Box<dyn std::error::Error>> {
    let mut data = Vec::new();
    io::stdin().lock().read_to_end(&mut data)?;

    let stdout = io::stdout();
    let mut encoder = LzevilEncoder::new(stdout.lock(), data.len());
    encoder.write_all(&data)?;
    Ok(())
}

fn cmd_decompress() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut decoder = LzevilDecoder::new(stdin.lock());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    io::copy(&mut decoder, &mut out)?;
    out.flush()?;
    Ok(())
}
