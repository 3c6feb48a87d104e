use argh::FromArgs;
use std::path::PathBuf;

use warpkit::imgproc::interpolation::InterpolationMode;
use warpkit::{TransformConfig, TransformRequest, Transformer};
use warpkit_io::functional as F;
use warpkit_io::GenericImage;

#[derive(FromArgs)]
/// Scale, rotate, translate or affine-warp an image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output image, png or jpeg
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// path to a json file with the transform configuration
    #[argh(option)]
    config: Option<PathBuf>,

    /// use nearest neighbor interpolation
    #[argh(switch)]
    nearest: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Scale(ScaleArgs),
    Rotate(RotateArgs),
    Translate(TranslateArgs),
    Affine(AffineArgs),
}

#[derive(FromArgs)]
/// Resize by horizontal and vertical factors
#[argh(subcommand, name = "scale")]
struct ScaleArgs {
    /// horizontal factor
    #[argh(option, default = "1.0")]
    sx: f64,

    /// vertical factor
    #[argh(option, default = "1.0")]
    sy: f64,
}

#[derive(FromArgs)]
/// Rotate counter-clockwise around a center
#[argh(subcommand, name = "rotate")]
struct RotateArgs {
    /// angle in degrees
    #[argh(option, short = 'a')]
    angle: f64,

    /// rotation center as x,y, the image center by default
    #[argh(option, from_str_fn(parse_point))]
    center: Option<[f64; 2]>,
}

#[derive(FromArgs)]
/// Shift by pixel offsets
#[argh(subcommand, name = "translate")]
struct TranslateArgs {
    /// horizontal offset
    #[argh(option, default = "0.0")]
    dx: f64,

    /// vertical offset
    #[argh(option, default = "0.0")]
    dy: f64,
}

#[derive(FromArgs)]
/// Map three source points onto three destination points
#[argh(subcommand, name = "affine")]
struct AffineArgs {
    /// source point as x,y, given three times
    #[argh(option, from_str_fn(parse_point))]
    src: Vec<[f64; 2]>,

    /// destination point as x,y, given three times
    #[argh(option, from_str_fn(parse_point))]
    dst: Vec<[f64; 2]>,
}

fn parse_point(value: &str) -> Result<[f64; 2], String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected a point as x,y, got {value}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate {v}: {e}"))
    };
    Ok([parse(x)?, parse(y)?])
}

fn three_points(points: &[[f64; 2]], name: &str) -> Result<[[f64; 2]; 3], String> {
    <[[f64; 2]; 3]>::try_from(points)
        .map_err(|_| format!("expected 3 {name} points, got {}", points.len()))
}

impl Command {
    fn request(&self) -> Result<TransformRequest, String> {
        let request = match self {
            Command::Scale(args) => TransformRequest::Scale {
                sx: args.sx,
                sy: args.sy,
            },
            Command::Rotate(args) => TransformRequest::Rotate {
                angle_deg: args.angle,
                center: args.center.map(|[x, y]| (x, y)),
            },
            Command::Translate(args) => TransformRequest::Translate {
                dx: args.dx,
                dy: args.dy,
            },
            Command::Affine(args) if args.src.is_empty() && args.dst.is_empty() => {
                TransformRequest::reference_affine()
            }
            Command::Affine(args) => TransformRequest::Affine {
                src: three_points(&args.src, "source")?,
                dst: three_points(&args.dst, "destination")?,
            },
        };
        Ok(request)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => TransformConfig::default(),
    };
    if args.nearest {
        config.interpolation = InterpolationMode::Nearest;
    }
    log::info!("config: {config:?}");

    let request = args.command.request()?;

    let image = F::read_image_any(&args.input)?;
    log::info!(
        "input: {} with {} channels",
        image.size(),
        image.num_channels()
    );

    let transformer = Transformer::new(config);

    let start = std::time::Instant::now();
    let output = match &image {
        GenericImage::L8(image) => GenericImage::from(transformer.apply(image, &request)?),
        GenericImage::Rgb8(image) => GenericImage::from(transformer.apply(image, &request)?),
        GenericImage::Rgba8(image) => GenericImage::from(transformer.apply(image, &request)?),
    };
    log::info!(
        "{} to {} took {:?}",
        request.name(),
        output.size(),
        start.elapsed()
    );

    F::write_image(&args.output, &output)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
