use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, ValueEnum};

use bytepress::{Codec, Compressor, Decompressor, HuffmanCodec, LzwCodec};

/// Compress or decompress a single file.
#[derive(Parser)]
#[command(version, about, group(ArgGroup::new("mode").required(true)))]
struct Args {
    /// Compress the input file
    #[arg(short = 'c', group = "mode")]
    compress: bool,

    /// Decompress the input file
    #[arg(short = 'd', group = "mode")]
    decompress: bool,

    /// Compression algorithm
    #[arg(long, value_enum, default_value_t = Algorithm::Huffman)]
    codec: Algorithm,

    /// File to read
    input: PathBuf,

    /// File to write
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Huffman,
    Lzw,
}

fn run(args: &Args) -> Result<(), String> {
    let input = fs::read(&args.input).map_err(|err| {
        format!(
            "input file `{}' could not be opened: {err}",
            args.input.display()
        )
    })?;

    let codec: Box<dyn Codec> = match args.codec {
        Algorithm::Huffman => Box::new(HuffmanCodec::new()),
        Algorithm::Lzw => Box::new(LzwCodec::new()),
    };

    let transformed = if args.compress {
        codec.compress(&input)
    } else {
        codec.decompress(&input)
    }
    .map_err(|err| err.to_string())?;

    fs::write(&args.output, transformed).map_err(|err| {
        format!(
            "output file `{}' could not be written: {err}",
            args.output.display()
        )
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(message) = run(&args) {
        eprintln!("ERROR: {message}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
