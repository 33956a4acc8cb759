use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use phasewave::FrequencyProfile as _;
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "phasewave", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integrate a frequency profile up to a time and print the phase.
    Integrate(IntegrateArgs),
    /// Evaluate scene frames and write them as JSON.
    Frames(FramesArgs),
    /// Print a scene's timing and tracker keyframes.
    Describe(DescribeArgs),
}

#[derive(Parser, Debug)]
struct IntegrateArgs {
    /// Upper integration bound in seconds.
    #[arg(long, allow_hyphen_values = true)]
    t: f64,

    /// Quadrature step in seconds.
    #[arg(long, default_value_t = phasewave::DEFAULT_STEP)]
    step: f64,

    /// Profile JSON (e.g. `{"ramp": {"f1": 1, "f2": 5, "a": {"pi": 3}, "b": {"pi": 5}}}`).
    /// Defaults to the chirp ramp.
    #[arg(long)]
    profile: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SceneSource {
    /// Built-in scene.
    #[arg(long, value_enum, conflicts_with = "in_path", required_unless_present = "in_path")]
    preset: Option<PresetChoice>,

    /// Scene definition JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Override the scene frame rate (frames per second).
    #[arg(long)]
    fps: Option<u32>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    source: SceneSource,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Last frame (exclusive). Defaults to the scene length.
    #[arg(long)]
    to: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Output JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the SHA-256 of the emitted JSON to stderr.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    #[command(flatten)]
    source: SceneSource,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    SimpleSine,
    ExpandContract,
    Chirp,
}

impl From<PresetChoice> for phasewave::Preset {
    fn from(choice: PresetChoice) -> Self {
        match choice {
            PresetChoice::SimpleSine => Self::SimpleSine,
            PresetChoice::ExpandContract => Self::ExpandContract,
            PresetChoice::Chirp => Self::Chirp,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Integrate(args) => cmd_integrate(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Describe(args) => cmd_describe(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_profile_json(path: &Path) -> anyhow::Result<phasewave::Profile> {
    let f = File::open(path).with_context(|| format!("open profile '{}'", path.display()))?;
    let def: phasewave::ProfileDef = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse profile JSON '{}'", path.display()))?;
    Ok(def.to_profile()?)
}

fn load_scene(source: &SceneSource) -> anyhow::Result<phasewave::Scene> {
    let scene = match (source.preset, &source.in_path) {
        (Some(preset), _) => phasewave::Scene::preset(preset.into())?,
        (None, Some(path)) => phasewave::Scene::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display()))?,
        (None, None) => anyhow::bail!("one of --preset or --in is required"),
    };

    let Some(num) = source.fps else {
        return Ok(scene);
    };
    let mut def = scene.def().clone();
    def.fps = phasewave::Fps::new(num, 1)?;
    Ok(phasewave::Scene::from_def(def)?)
}

fn cmd_integrate(args: IntegrateArgs) -> anyhow::Result<()> {
    let profile = match &args.profile {
        Some(path) => read_profile_json(path)?,
        None => phasewave::Profile::chirp(),
    };
    let phase = phasewave::integrate(args.t, &profile, args.step)?;

    println!("t      {}", args.t);
    println!("omega  {}", profile.omega(args.t));
    println!("phase  {phase}");
    println!("sin    {}", phase.sin());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.source)?;
    let end = args.to.unwrap_or_else(|| scene.duration_frames());
    let range = phasewave::FrameRange::new(
        phasewave::FrameIndex(args.from),
        phasewave::FrameIndex(end),
    )?;

    let threading = phasewave::EvalThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let frames = phasewave::Evaluator::eval_range(&scene, range, &threading)?;
    let bytes = serde_json::to_vec(&frames).context("serialize frames")?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, &bytes)
                .with_context(|| format!("write frames '{}'", path.display()))?;
            eprintln!("wrote {} frames to {}", frames.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("write frames to stdout")?;
            stdout.write_all(b"\n").context("write frames to stdout")?;
        }
    }

    if args.digest {
        eprintln!("sha256 {}", sha256_hex(&bytes));
    }
    Ok(())
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.source)?;
    let fps = scene.fps();

    println!("name     {}", scene.def().name);
    println!("fps      {}/{}", fps.num, fps.den);
    println!("frames   {}", scene.duration_frames());
    println!("seconds  {:.3}", scene.duration_secs());
    if let Some(profile) = scene.profile() {
        println!("profile  {}", serde_json::to_string(profile)?);
    }
    println!("keys");
    for key in &scene.keyframes().keys {
        println!(
            "  frame {:>6}  value {:>12.6}  rate {:?}",
            key.frame.0, key.value, key.rate
        );
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
