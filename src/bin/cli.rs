//! CLI application for face analysis and hairstyle recommendations.
//!
//! Usage:
//!   face-style <face.json>                          # Human-readable output
//!   face-style <face.json> --mask skin.png          # Refine hairline with a skin mask
//!   face-style <face.json> --shape oval --gender female
//!   face-style <face.json> --json                   # JSON output
//!   face-style <face.json> -o result.json           # Save to file
//!
//! The input JSON holds one detected face (bounding box, landmarks, face
//! oval, optional nose bridge) plus optional `face_shape` and `gender`
//! classifier results. The skin mask covers the face bounding box; pixels
//! with luma of 128 or more are skin.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use face_style::{
    analyze_face, describe_hairstyle, display_name, image_search_query, DetectedFace,
    FaceAnalysis, FaceShape, Gender, HairstyleRecommendation, MaskAccess, Recommender,
    ScoringConfig, SkinMask, Taxonomy,
};
use serde::{Deserialize, Serialize};
use tracing::{info, Level};

const SKIN_LUMA_THRESHOLD: u8 = 128;

#[derive(Parser, Debug)]
#[command(name = "face-style")]
#[command(author, version, about = "Face analysis and hairstyle recommendations", long_about = None)]
struct Args {
    /// Detected face JSON file
    #[arg(required = true)]
    face: PathBuf,

    /// Skin segmentation mask image covering the face box
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Face shape label from the shape classifier (overrides the input file)
    #[arg(long)]
    shape: Option<String>,

    /// Gender from the gender classifier (overrides the input file)
    #[arg(long, value_enum)]
    gender: Option<GenderArg>,

    /// Hairstyle taxonomy JSON file (default: built-in taxonomy)
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Scoring parameters JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GenderArg {
    Male,
    Female,
    Unknown,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Unknown => Gender::Unknown,
        }
    }
}

/// Input file layout: the detector output plus classifier results.
#[derive(Deserialize)]
struct FaceInput {
    #[serde(flatten)]
    face: DetectedFace,
    #[serde(default)]
    face_shape: Option<String>,
    #[serde(default)]
    gender: Option<Gender>,
}

/// Output structure for JSON serialization
#[derive(Serialize)]
struct Output {
    input: String,
    analysis: FaceAnalysis,
    recommendations: Vec<RecommendationOutput>,
}

#[derive(Serialize)]
struct RecommendationOutput {
    /// Rank (1-based)
    rank: usize,
    #[serde(flatten)]
    recommendation: HairstyleRecommendation,
    description: String,
    image_query: String,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = ?args.face, "loading face");
    let input: FaceInput = serde_json::from_reader(BufReader::new(File::open(&args.face)?))?;

    let face_shape = args
        .shape
        .as_deref()
        .or(input.face_shape.as_deref())
        .map(FaceShape::from_label)
        .unwrap_or(FaceShape::Unknown);
    let gender = args
        .gender
        .map(Gender::from)
        .or(input.gender)
        .unwrap_or(Gender::Unknown);

    let mask = match &args.mask {
        Some(path) => {
            info!(?path, "loading skin mask");
            let luma = image::open(path)?.to_luma8();
            Some(SkinMask::from_fn(luma.width(), luma.height(), |x, y| {
                luma.get_pixel(x, y).0[0] >= SKIN_LUMA_THRESHOLD
            }))
        }
        None => None,
    };

    let loaded;
    let taxonomy = match &args.taxonomy {
        Some(path) => {
            info!(?path, "loading taxonomy");
            loaded = Taxonomy::load(path)?;
            &loaded
        }
        None => Taxonomy::builtin(),
    };

    let config = match &args.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };

    let analysis = analyze_face(
        &input.face,
        face_shape,
        gender,
        mask.as_ref().map(|m| m as &dyn MaskAccess),
    );
    let recommendations = Recommender::new(taxonomy, config).recommend(&analysis);
    let output = build_output(
        args.face.display().to_string(),
        analysis,
        recommendations,
        taxonomy,
    );

    // Generate output
    let output_str = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        format_human_readable(&output)
    };

    // Write output
    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        info!(?path, "output written");
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn build_output(
    input: String,
    analysis: FaceAnalysis,
    recommendations: Vec<HairstyleRecommendation>,
    taxonomy: &Taxonomy,
) -> Output {
    let recommendations = recommendations
        .into_iter()
        .enumerate()
        .map(|(i, recommendation)| RecommendationOutput {
            rank: i + 1,
            description: describe_hairstyle(&recommendation.name, taxonomy),
            image_query: image_search_query(&recommendation.name, analysis.gender),
            recommendation,
        })
        .collect();

    Output {
        input,
        analysis,
        recommendations,
    }
}

fn format_human_readable(output: &Output) -> String {
    let a = &output.analysis;
    let p = &a.proportions;
    let mut s = String::new();

    s.push_str(&format!("Input: {}\n", output.input));
    s.push_str(&format!("Face shape: {:?}\n", a.face_shape));
    s.push_str(&format!("Gender: {:?}\n", a.gender));
    s.push_str(&format!("Symmetry: {:.0}%\n", a.symmetry_score * 100.0));
    if let Some(warning) = &a.segmentation_warning {
        s.push_str(&format!("Warning: {}\n", warning));
    }

    s.push_str("\nProportions:\n");
    s.push_str(&format!("  Face length:  {:.1}\n", p.face_length));
    s.push_str(&format!("  Forehead:     {:.1}\n", p.forehead_width));
    s.push_str(&format!("  Cheekbones:   {:.1}\n", p.cheekbone_width));
    s.push_str(&format!("  Jaw:          {:.1} ({:?})\n", p.jaw_width, p.jaw_shape));
    s.push_str(&format!(
        "  Thirds:       {:.1} / {:.1} / {:.1}\n",
        p.upper_third_height, p.middle_third_height, p.lower_third_height
    ));

    if !a.features.is_empty() {
        s.push_str("\nFeatures:\n");
        for feature in &a.features {
            s.push_str(&format!("  {:?}\n", feature));
        }
    }

    if output.recommendations.is_empty() {
        s.push_str("\nNo hairstyle recommendations.\n");
        return s;
    }

    s.push_str("\nRecommendations:\n");
    for rec in &output.recommendations {
        let r = &rec.recommendation;
        s.push_str(&format!(
            "\n{}. {} ({:.0}%)\n",
            rec.rank,
            display_name(&r.name),
            r.confidence * 100.0
        ));
        if let Some(main) = r.main_reason() {
            s.push_str(&format!("   {}\n", main));
        }
        for reason in r.reasons.iter().skip(1) {
            s.push_str(&format!("   - {}\n", reason));
        }
        s.push_str(&format!("   {}\n", rec.description));
        s.push_str(&format!("   Image search: \"{}\"\n", rec.image_query));
    }

    s
}
