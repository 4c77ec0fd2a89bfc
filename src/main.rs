use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use svg_decode::{DecodeOptions, DecodedImage, Decoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// PNG file
    Png,
    /// Raw premultiplied RGBA bytes
    Rgba,
    /// JSON object with base64-encoded RGBA data
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Rgba => "rgba",
            Format::Json => "json",
        }
    }
}

/// Decode SVG files into RGBA rasters
#[derive(Debug, Parser)]
#[command(name = "svg-decode", version)]
struct Args {
    /// SVG files to decode
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output width in pixels
    #[arg(long)]
    width: Option<f32>,

    /// Output height in pixels
    #[arg(long)]
    height: Option<f32>,

    /// Resolution for absolute units
    #[arg(long, default_value_t = 96.0)]
    dpi: f32,

    /// Do not load system fonts
    #[arg(long)]
    no_fonts: bool,

    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Directory for outputs (default: next to each input)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(long)]
    jobs: Option<usize>,
}

fn output_path(input: &Path, out_dir: Option<&Path>, format: Format) -> PathBuf {
    let file_name = input
        .with_extension(format.extension())
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("out.{}", format.extension())));
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_extension(format.extension()),
    }
}

fn write_image(image: &DecodedImage, path: &Path, format: Format) -> anyhow::Result<()> {
    let bytes = match format {
        Format::Png => image.encode_png()?,
        Format::Rgba => image.data.clone(),
        Format::Json => serde_json::to_vec(&image.to_json())?,
    };
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

fn process(decoder: &Decoder, input: &Path, args: &Args, options: &DecodeOptions) -> anyhow::Result<PathBuf> {
    let svg = std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let image = decoder
        .decode(&svg, options)
        .with_context(|| format!("failed to decode {}", input.display()))?;
    let out = output_path(input, args.out_dir.as_deref(), args.format);
    write_image(&image, &out, args.format)?;
    log::info!("{} -> {} ({}x{})", input.display(), out.display(), image.width, image.height);
    Ok(out)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = DecodeOptions {
        width: args.width,
        height: args.height,
        dpi: args.dpi,
        load_fonts: !args.no_fonts,
    };

    if let Some(dir) = &args.out_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("failed to create {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    }

    let decoder = Decoder::new();
    let jobs = args.jobs.unwrap_or_else(num_cpus::get).clamp(1, args.inputs.len());
    let next = AtomicUsize::new(0);
    let failures = Mutex::new(Vec::new());

    std::thread::scope(|s| {
        for _ in 0..jobs {
            s.spawn(|| loop {
                let i = next.fetch_add(1, Ordering::Relaxed);
                let Some(input) = args.inputs.get(i) else {
                    break;
                };
                match process(&decoder, input, &args, &options) {
                    Ok(out) => println!("{}", out.display()),
                    Err(e) => {
                        if let Ok(mut f) = failures.lock() {
                            f.push(format!("{:#}", e));
                        }
                    }
                }
            });
        }
    });

    let failures = failures.into_inner().unwrap_or_else(|e| e.into_inner());
    for f in &failures {
        eprintln!("error: {}", f);
    }
    if !failures.is_empty() {
        std::process::exit(1);
    }
}
