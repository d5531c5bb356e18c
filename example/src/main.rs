use anyhow::Result;
use clap::Parser;
use fillslider_components::slider::{SliderArgs, SliderController, SliderNode, SliderOutput};
use fillslider_ui::Locale;

/// Renders one slider and prints its node sequence.
#[derive(Parser)]
#[command(name = "slider_showcase")]
#[command(version, about = "Print the layout of a fillslider slider", long_about = None)]
struct Cli {
    /// Slider value
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    value: f64,
    /// Range minimum
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    min: f64,
    /// Range maximum
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    max: f64,
    /// Step between values
    #[arg(long, default_value_t = 1.0)]
    step: f64,
    /// Draw the fill
    #[arg(long)]
    filled: bool,
    /// Anchor the fill at this value instead of the track origin
    #[arg(long, allow_negative_numbers = true)]
    fill_offset: Option<f64>,
    /// Locale tag used to pick the layout direction
    #[arg(long, default_value = "en-US")]
    locale: String,
    /// Track gradient colour stop (repeatable)
    #[arg(long = "gradient")]
    gradient: Vec<String>,
    /// Number of tick marks
    #[arg(long, default_value_t = 0)]
    ticks: usize,
    /// Label text
    #[arg(long)]
    label: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn slider_args(&self) -> SliderArgs {
        let mut args = SliderArgs::default()
            .value(self.value)
            .min_value(self.min)
            .max_value(self.max)
            .step(self.step)
            .is_filled(self.filled)
            .tick_count(self.ticks);
        if let Some(offset) = self.fill_offset {
            args = args.fill_offset(offset);
        }
        if !self.gradient.is_empty() {
            args = args.track_gradient(self.gradient.clone());
        }
        if let Some(label) = &self.label {
            args = args.label(label.clone());
        }
        args
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("off,fillslider_components=info"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn print_text(output: &SliderOutput) {
    println!("root  class=\"{}\" style=\"{}\"", output.root.class_names, output.root.style);
    for node in &output.children {
        match node {
            SliderNode::LowerTrack(track) | SliderNode::UpperTrack(track) => println!(
                "{:<12} class=\"{}\" style=\"{}\"",
                node.kind(),
                track.class_names,
                track.style
            ),
            SliderNode::Tick(tick) => println!(
                "{:<12} class=\"{}\" style=\"{}\"",
                node.kind(),
                tick.class_names,
                tick.style
            ),
            SliderNode::Handle(handle) => println!(
                "{:<12} class=\"{}\" style=\"{}\" input=[{}..{} step {} value {}]",
                node.kind(),
                handle.class_names,
                handle.style,
                handle.input.min,
                handle.input.max,
                handle.input.step,
                handle.input.value
            ),
            SliderNode::Fill(fill) => println!(
                "{:<12} class=\"{}\" style=\"{}\"",
                node.kind(),
                fill.class_names,
                fill.style
            ),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let args = cli.slider_args();
    let locale = Locale::new(cli.locale.as_str());
    tracing::info!(tag = locale.tag(), direction = ?locale.direction(), "rendering slider");

    let controller = SliderController::new(&args)?;
    let output = controller.build(&args, &locale);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&output);
    }
    Ok(())
}
