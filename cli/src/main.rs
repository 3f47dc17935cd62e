use clap::Parser;
use recoverwave_core::Decoder;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recoverwave")]
#[command(about = "Recover FSK-encoded binary payloads from a PCM recording")]
struct Cli {
    /// Input WAV recording
    #[arg(value_name = "INPUT.WAV")]
    input: PathBuf,

    /// Directory receiving one frame<N>.dat artifact per recovered frame
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let bytes = fs::read(&cli.input)?;
    println!("Read {} bytes from {}", bytes.len(), cli.input.display());

    let output = Decoder::new().decode(&bytes)?;
    log::debug!(
        "decoded {} frame(s), {} histogram bucket(s)",
        output.frames.len(),
        output.histogram.len()
    );
    println!(
        "Parsed WAV: {} Hz, {} channel(s), {} bits",
        output.header.sample_rate, output.header.channels, output.header.bits_per_sample
    );

    // Period histogram, ascending length
    for (period, count) in output.histogram.iter() {
        println!("[{}]: {}", period, count);
    }

    if output.unpaired_spaces > 0 {
        println!(
            "Warning: dropped {} unpaired space marker(s)",
            output.unpaired_spaces
        );
    }

    if output.frames.is_empty() {
        println!("No frames found");
        return Ok(());
    }

    fs::create_dir_all(&cli.output_dir)?;
    for (frame, payload) in output.frames.iter().zip(output.payloads.iter()) {
        let path = cli.output_dir.join(format!("frame{}.dat", frame.index));
        fs::write(&path, payload)?;
        println!("Wrote {} bytes to {}", payload.len(), path.display());
    }

    Ok(())
}
