//! The `frames` command: WAV in, frame table out.

use crate::audio::load_wav;
use crate::cli::FramesArgs;
use crate::config::{Config, OutputFormat, PreprocessingSettings};
use crate::constants::output_extensions;
use crate::error::{Error, Result};
use crate::output::{CsvFrameWriter, FrameWriter, JsonFrameWriter};
use crate::preprocessing::{FrameSequence, preprocess};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Determine the output directory for a file.
pub fn output_dir_for(input: &Path, explicit_output_dir: Option<&Path>) -> PathBuf {
    explicit_output_dir.map_or_else(
        || {
            input
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    )
}

/// Get output file path for a given format.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = input.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("output"),
        |s| s.to_string_lossy(),
    );

    let extension = match format {
        OutputFormat::Csv => output_extensions::CSV,
        OutputFormat::Json => output_extensions::JSON,
    };

    output_dir.join(format!("{stem}{extension}"))
}

/// Preprocessing settings after applying command-line overrides.
pub fn resolve_settings(args: &FramesArgs, config: &Config) -> PreprocessingSettings {
    let mut settings = config.preprocessing.clone();
    if let Some(alpha) = args.alpha {
        settings.pre_emphasis = true;
        settings.pre_emphasis_alpha = alpha;
    }
    if args.no_pre_emphasis {
        settings.pre_emphasis = false;
    }
    if let Some(frame_length) = args.frame_length {
        settings.frame_length = frame_length;
    }
    if let Some(overlap) = args.overlap {
        settings.overlap_samples = overlap;
    }
    settings
}

/// Run the `frames` command.
pub fn run_frames(args: &FramesArgs, config: &Config) -> Result<()> {
    let start = Instant::now();
    let pipeline = resolve_settings(args, config).to_pipeline_config();

    // Reject bad parameters before touching the input
    pipeline.validate()?;

    let format = args.format.unwrap_or(config.output.format);
    let output_path = (!args.stdout).then(|| {
        let dir = output_dir_for(&args.input, args.output_dir.as_deref());
        output_path_for(&args.input, &dir, format)
    });
    if let Some(path) = &output_path
        && path.exists()
        && !args.force
    {
        return Err(Error::OutputExists { path: path.clone() });
    }

    info!("Reading {}", args.input.display());
    let signal = load_wav(&args.input)?;
    let sequence = preprocess(&signal, &pipeline)?;

    let source_name = args
        .input
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());

    match &output_path {
        Some(path) => {
            let file = File::create(path)?;
            write_frames(
                BufWriter::new(file),
                format,
                &sequence,
                &source_name,
                pipeline.pre_emphasis_alpha,
            )?;
            info!(
                "Wrote {} frame(s) to {} in {:.2}s",
                sequence.len(),
                path.display(),
                start.elapsed().as_secs_f64()
            );
        }
        None => {
            let stdout = std::io::stdout().lock();
            write_frames(
                BufWriter::new(stdout),
                format,
                &sequence,
                &source_name,
                pipeline.pre_emphasis_alpha,
            )?;
        }
    }

    Ok(())
}

/// Write a frame sequence to `sink` in `format`.
pub fn write_frames<W: Write>(
    sink: W,
    format: OutputFormat,
    sequence: &FrameSequence,
    source_name: &str,
    pre_emphasis_alpha: Option<f32>,
) -> Result<()> {
    match format {
        OutputFormat::Csv => CsvFrameWriter::new(sink).write_sequence(sequence),
        OutputFormat::Json => {
            JsonFrameWriter::new(sink, source_name, pre_emphasis_alpha).write_sequence(sequence)
        }
    }
}
