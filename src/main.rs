//! src/main.rs
//! randtool CLI — pseudorandom bytes, numbers, picks and keystream XOR

use clap::{Args, Parser, Subcommand};
use log::{debug, warn};
use randtool::{
    xor_in_place, xor_to_writer, Bound, ByteSource, Emitter, KdfAlgorithm, KdfParams,
    RandtoolError, SourceConfig,
};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use zeroize::Zeroizing;

#[derive(Parser, Debug)]
#[command(name = "randtool", version)]
#[command(about = "Reproducible pseudorandom bytes, numbers, picks and keystream XOR", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Write output to a file instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Seed for a reproducible stream; omit to draw from OS entropy
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Salt string mixed into key derivation
    #[arg(long, global = true, default_value = "randtool")]
    salt: String,

    /// Key derivation algorithm (argon2 or scrypt)
    #[arg(long, global = true, default_value = "argon2")]
    kdf: KdfAlgorithm,

    /// KDF tuning knobs as name=value pairs, e.g. "t=2,m=19456,p=1"
    #[arg(long, global = true)]
    kdf_params: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit raw stream bytes
    Bytes {
        /// Number of bytes to emit
        #[arg(long)]
        size: u64,
    },

    /// Emit hex-encoded stream bytes
    Hex {
        /// Number of stream bytes to encode
        #[arg(long)]
        size: u64,
    },

    /// Emit uniform integers from a half-open range
    Int {
        /// Range as lower:upper (upper exclusive)
        #[arg(long)]
        bound: Bound,

        /// How many integers to emit
        #[arg(long, default_value_t = 1)]
        count: u64,
    },

    /// Emit uniform floats in [0, 1)
    Float {
        /// How many floats to emit
        #[arg(long, default_value_t = 1)]
        count: u64,
    },

    /// Pick one entry from a list
    Choice {
        /// Candidate values to pick from
        choices: Vec<String>,
    },

    /// XOR a file with the keystream
    Xor {
        /// File to transform
        #[arg(long)]
        file: PathBuf,

        /// Number of keystream bytes to apply
        #[arg(long)]
        size: u64,

        /// Rewrite the file in place instead of writing a copy
        #[arg(long)]
        in_place: bool,
    },
}

impl SourceArgs {
    fn into_config(self) -> Result<SourceConfig, RandtoolError> {
        match self.seed {
            Some(seed) => {
                let params = match &self.kdf_params {
                    Some(spec) => KdfParams::parse(spec, self.kdf)?,
                    None => KdfParams::defaults(self.kdf),
                };
                debug!("deriving key material via {:?}", self.kdf);
                Ok(SourceConfig::Seeded {
                    seed: Zeroizing::new(seed),
                    salt: self.salt,
                    params,
                })
            }
            None => {
                if self.kdf_params.is_some() {
                    warn!("--kdf-params has no effect without --seed");
                }
                Ok(SourceConfig::Entropy)
            }
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RandtoolError> {
    let Cli {
        source,
        output,
        command,
    } = cli;

    let mut source = source.into_config()?.build_source()?;

    match command {
        Command::Bytes { size } => emit(Emitter::Raw { size }, &mut source, output.as_deref()),
        Command::Hex { size } => emit(Emitter::Hex { size }, &mut source, output.as_deref()),
        Command::Int { bound, count } => emit(
            Emitter::Integer { bound, count },
            &mut source,
            output.as_deref(),
        ),
        Command::Float { count } => emit(Emitter::Float { count }, &mut source, output.as_deref()),
        Command::Choice { choices } => {
            emit(Emitter::Choice { choices }, &mut source, output.as_deref())
        }
        Command::Xor {
            file,
            size,
            in_place,
        } => run_xor(&mut source, &file, size, in_place, output.as_deref()),
    }
}

fn run_xor(
    source: &mut ByteSource,
    file: &Path,
    size: u64,
    in_place: bool,
    output: Option<&Path>,
) -> Result<(), RandtoolError> {
    if in_place {
        if output.is_some() {
            return Err(RandtoolError::Config(
                "--in-place and --output are mutually exclusive".into(),
            ));
        }
        debug!("rewriting {} in place ({size} keyed bytes)", file.display());
        let mut handle = OpenOptions::new().read(true).write(true).open(file)?;
        return xor_in_place(source, size, &mut handle);
    }

    debug!("transforming {} ({size} keyed bytes)", file.display());
    let input = File::open(file)?;
    let mut out = open_output(output)?;
    xor_to_writer(source, size, input, &mut out)?;
    out.flush()?;
    Ok(())
}

fn emit(
    emitter: Emitter,
    source: &mut ByteSource,
    output: Option<&Path>,
) -> Result<(), RandtoolError> {
    let mut out = open_output(output)?;
    emitter.run(source, &mut out)?;
    out.flush()?;
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, RandtoolError> {
    Ok(match path {
        Some(path) => Box::new(io::BufWriter::new(File::create(path)?)),
        None => Box::new(io::BufWriter::new(io::stdout().lock())),
    })
}
