use std::{collections::BTreeMap, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use portfolio_motion_core::{
    parallax::{DEFAULT_PARALLAX_DISTANCE, DEFAULT_PARALLAX_SPEED},
    reveal::{DEFAULT_FADE_DISTANCE, DEFAULT_INITIAL_SCALE, DEFAULT_SLIDE_DISTANCE},
    stagger::DEFAULT_STAGGER_DELAY,
    AnimationHost, AppConfig, MotionError, MotionFactory, MotionPreference, PreferenceMode,
    SnapshotHost, VariantState, VariantStyle, Variants, ViewportConfig,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> portfolio_motion_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(mode) = cli.motion {
        config.motion.preference = mode;
    }

    let factory = MotionFactory::from_config(&config.motion);
    tracing::info!(
        preference = %config.motion.preference,
        reduced = factory.reduced_motion(),
        "motion preference resolved"
    );

    match cli.command {
        Commands::Variant {
            kind,
            params,
            settle,
        } => run_variant(&factory, kind, &params, settle),
        Commands::Parallax {
            scroll_y,
            offset,
            speed,
        } => print_json(&factory.create_parallax_variants(scroll_y, offset, speed)),
        Commands::Transform {
            progress,
            max_distance,
        } => {
            println!("{}", factory.parallax_transform(progress, max_distance));
            Ok(())
        }
        Commands::Viewport { repeating } => {
            let viewport = if repeating {
                ViewportConfig::repeating()
            } else {
                config.viewport
            };
            print_json(&viewport)
        }
        Commands::Catalog => run_catalog(&factory),
    }
}

fn run_variant<P: MotionPreference>(
    factory: &MotionFactory<P>,
    kind: VariantKind,
    params: &VariantParams,
    settle: Option<VariantState>,
) -> portfolio_motion_core::Result<()> {
    tracing::info!(?kind, ?params, "building descriptor");

    let descriptor = build_descriptor(factory, kind, params);
    let Some(state) = settle else {
        return print_json(&descriptor);
    };

    let Descriptor::Variants(variants) = descriptor else {
        return Err(MotionError::msg(format!(
            "`{}` is a single style and has no states to settle",
            kind.name()
        )));
    };
    if !variants.contains(state) {
        let available: Vec<String> = variants.states().map(|state| state.to_string()).collect();
        return Err(MotionError::msg(format!(
            "`{}` has no `{state}` state (available: {})",
            kind.name(),
            available.join(", ")
        )));
    }

    let mut host = SnapshotHost::new();
    match host.apply(&variants, state) {
        Some(style) => print_json(&style),
        None => Err(MotionError::msg(format!("`{state}` did not settle"))),
    }
}

fn build_descriptor<P: MotionPreference>(
    factory: &MotionFactory<P>,
    kind: VariantKind,
    params: &VariantParams,
) -> Descriptor {
    let delay = params.delay;
    let fade = params.distance.unwrap_or(DEFAULT_FADE_DISTANCE);
    let slide = params.distance.unwrap_or(DEFAULT_SLIDE_DISTANCE);
    let variants = match kind {
        VariantKind::FadeIn => factory.fade_in(delay),
        VariantKind::FadeUp => factory.fade_up(delay, fade),
        VariantKind::FadeDown => factory.fade_down(delay, fade),
        VariantKind::SlideInLeft => factory.slide_in_left(delay, slide),
        VariantKind::SlideInRight => factory.slide_in_right(delay, slide),
        VariantKind::ScaleIn => factory.scale_in(delay, params.scale),
        VariantKind::StaggerContainer => factory.stagger_container(params.stagger),
        VariantKind::StaggerItem => factory.stagger_item(),
        VariantKind::Tilt3d => factory.tilt_3d(),
        VariantKind::Lift => factory.lift(),
        VariantKind::Glow => factory.glow(),
        VariantKind::Floating => factory.floating(),
        VariantKind::ButtonTap => return Descriptor::Style(factory.button_tap()),
        VariantKind::ButtonHover => return Descriptor::Style(factory.button_hover()),
    };
    Descriptor::Variants(variants)
}

fn run_catalog<P: MotionPreference>(
    factory: &MotionFactory<P>,
) -> portfolio_motion_core::Result<()> {
    let params = VariantParams::default();
    let catalog: BTreeMap<&str, Descriptor> = VariantKind::value_variants()
        .iter()
        .map(|kind| (kind.name(), build_descriptor(factory, *kind, &params)))
        .collect();
    print_json(&catalog)
}

fn print_json<T: Serialize>(value: &T) -> portfolio_motion_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect the portfolio's motion descriptors", long_about = None)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Override the reduced-motion preference: auto, reduce or no-preference.
    #[arg(short, long, global = true)]
    motion: Option<PreferenceMode>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a single descriptor as JSON.
    Variant {
        kind: VariantKind,
        #[command(flatten)]
        params: VariantParams,
        /// Print the settled style of this state instead of the descriptor.
        #[arg(long)]
        settle: Option<VariantState>,
    },
    /// Offset of a parallax layer for a scroll position.
    Parallax {
        #[arg(allow_negative_numbers = true)]
        scroll_y: f64,
        #[arg(allow_negative_numbers = true)]
        offset: f64,
        #[arg(long, default_value_t = DEFAULT_PARALLAX_SPEED)]
        speed: f64,
    },
    /// CSS transform for a scroll progress value.
    Transform {
        #[arg(allow_negative_numbers = true)]
        progress: f64,
        #[arg(long, default_value_t = DEFAULT_PARALLAX_DISTANCE)]
        max_distance: f64,
    },
    /// Viewport trigger settings for scroll reveals.
    Viewport {
        /// Use the re-triggering preset instead of the configured one.
        #[arg(long)]
        repeating: bool,
    },
    /// Every descriptor with default parameters, keyed by name.
    Catalog,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantKind {
    FadeIn,
    FadeUp,
    FadeDown,
    SlideInLeft,
    SlideInRight,
    ScaleIn,
    StaggerContainer,
    StaggerItem,
    Tilt3d,
    Lift,
    Glow,
    Floating,
    ButtonTap,
    ButtonHover,
}

impl VariantKind {
    fn name(self) -> &'static str {
        match self {
            VariantKind::FadeIn => "fade-in",
            VariantKind::FadeUp => "fade-up",
            VariantKind::FadeDown => "fade-down",
            VariantKind::SlideInLeft => "slide-in-left",
            VariantKind::SlideInRight => "slide-in-right",
            VariantKind::ScaleIn => "scale-in",
            VariantKind::StaggerContainer => "stagger-container",
            VariantKind::StaggerItem => "stagger-item",
            VariantKind::Tilt3d => "tilt3d",
            VariantKind::Lift => "lift",
            VariantKind::Glow => "glow",
            VariantKind::Floating => "floating",
            VariantKind::ButtonTap => "button-tap",
            VariantKind::ButtonHover => "button-hover",
        }
    }
}

/// Numeric inputs of the descriptor factories. Each only applies to the kinds
/// that take it.
#[derive(Args, Debug, Clone)]
struct VariantParams {
    /// Seconds before a reveal starts.
    #[arg(short, long, default_value_t = 0.0)]
    delay: f64,
    /// Travel in pixels for fade and slide reveals.
    #[arg(long, allow_negative_numbers = true)]
    distance: Option<f64>,
    /// Starting scale for scale-in.
    #[arg(long, default_value_t = DEFAULT_INITIAL_SCALE)]
    scale: f64,
    /// Seconds between children of a stagger container.
    #[arg(long, default_value_t = DEFAULT_STAGGER_DELAY)]
    stagger: f64,
}

impl Default for VariantParams {
    fn default() -> Self {
        Self {
            delay: 0.0,
            distance: None,
            scale: DEFAULT_INITIAL_SCALE,
            stagger: DEFAULT_STAGGER_DELAY,
        }
    }
}

/// Factory output: a state map, or a single style for the button helpers.
#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Descriptor {
    Variants(Variants),
    Style(VariantStyle),
}
