use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "workshop", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default scene for a component type as JSON.
    New(NewArgs),
    /// Generate code for a scene.
    Generate(GenerateArgs),
    /// List the built-in animation presets.
    Presets,
    /// Compile one preset and print its motion, CSS and native descriptors as JSON.
    Compile(CompileArgs),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Component type id (see the registry).
    #[arg(long = "type", default_value = "button")]
    type_id: String,

    /// Output scene JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Which view to generate.
    #[arg(long, value_enum, default_value_t = ViewChoice::All)]
    view: ViewChoice,

    /// Target framework for animation code.
    #[arg(long, value_enum, default_value_t = FrameworkChoice::FramerMotion)]
    framework: FrameworkChoice,

    /// Spaces per nesting level in markup.
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Preset id, e.g. `fade-in`.
    #[arg(long)]
    preset: String,

    /// Override the preset's default trigger.
    #[arg(long, value_enum)]
    trigger: Option<TriggerChoice>,

    /// Duration override in seconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Delay override in seconds.
    #[arg(long)]
    delay: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewChoice {
    Jsx,
    Tailwind,
    Animations,
    All,
}

impl From<ViewChoice> for workshop::CodeView {
    fn from(v: ViewChoice) -> Self {
        match v {
            ViewChoice::Jsx => Self::Jsx,
            ViewChoice::Tailwind => Self::Tailwind,
            ViewChoice::Animations => Self::Animations,
            ViewChoice::All => Self::All,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FrameworkChoice {
    FramerMotion,
    Css,
    ReactNative,
}

impl From<FrameworkChoice> for workshop::Framework {
    fn from(v: FrameworkChoice) -> Self {
        match v {
            FrameworkChoice::FramerMotion => Self::FramerMotion,
            FrameworkChoice::Css => Self::Css,
            FrameworkChoice::ReactNative => Self::ReactNative,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TriggerChoice {
    Mount,
    Hover,
    Tap,
    Scroll,
}

impl From<TriggerChoice> for workshop::Trigger {
    fn from(v: TriggerChoice) -> Self {
        match v {
            TriggerChoice::Mount => Self::Mount,
            TriggerChoice::Hover => Self::Hover,
            TriggerChoice::Tap => Self::Tap,
            TriggerChoice::Scroll => Self::Scroll,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::New(args) => cmd_new(args),
        Command::Generate(args) => cmd_generate(args),
        Command::Presets => cmd_presets(),
        Command::Compile(args) => cmd_compile(args),
    }
}

fn read_scene(path: &Path) -> anyhow::Result<workshop::Scene> {
    let json =
        fs::read_to_string(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let scene = workshop::Scene::from_json(&json).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_new(args: NewArgs) -> anyhow::Result<()> {
    let wb = workshop::Workbench::bootstrap(workshop::BuiltinRegistry, &args.type_id)?;
    let json = wb.scene().to_json_pretty()?;
    fs::write(&args.out, json).with_context(|| format!("write '{}'", args.out.display()))?;
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let opts = workshop::CodegenOpts {
        indent_width: args.indent,
        framework: args.framework.into(),
    };
    let code = workshop::generate(&scene, args.view.into(), &opts);
    match args.out {
        Some(out) => {
            fs::write(&out, code).with_context(|| format!("write '{}'", out.display()))?;
        }
        None => println!("{code}"),
    }
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for preset in workshop::builtin_presets() {
        println!(
            "{:<18} {:<18} {:<8} {}",
            preset.id,
            preset.name,
            preset.kind.as_str(),
            preset.trigger.as_str()
        );
    }
    Ok(())
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let preset = workshop::lookup_preset(&args.preset)
        .ok_or_else(|| anyhow::anyhow!("unknown preset '{}'", args.preset))?;
    let trigger = args.trigger.map_or(preset.trigger, Into::into);
    let config = preset.config.merged(&workshop::AnimationConfig {
        duration: args.duration,
        delay: args.delay,
        ..workshop::AnimationConfig::default()
    });
    let output = workshop::compile(preset.kind, &config, trigger);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
