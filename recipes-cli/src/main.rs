use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use plot_recipes::{
    AxesRect, AxisFormat, DEFAULT_COMB, FigureLayout, FigureSize, RecipeError, ScaleType,
    axis_padding, log_ticks_base10, pcolor_box_coordinates,
};
use serde::Serialize;
use tracing::{debug, warn};

/// plot-recipes - numeric helpers for plotting scripts
#[derive(Parser, Debug)]
#[command(name = "plot-recipes", author, version)]
#[command(about = "Axis padding, pcolor box coordinates, log ticks and figure sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pad a data interval so the data sits inset from the axes
    Pad {
        /// Smallest data value
        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        /// Largest data value
        #[arg(long, allow_negative_numbers = true)]
        max: f64,

        /// Padding on each side, as a fraction of the data width (or decade span)
        #[arg(short, long, default_value = "0.05", allow_negative_numbers = true)]
        fraction: f64,

        /// Axis scale ("linear" or "log")
        #[arg(short, long, default_value = "linear", value_parser = parse_scale)]
        scale: ScaleType,
    },

    /// Convert cell-center coordinates into cell edges for a pcolor mesh
    Boxes {
        /// Cell centers (comma-separated, e.g., "0,1,2")
        #[arg(
            value_name = "VALUES",
            value_delimiter = ',',
            required = true,
            allow_negative_numbers = true
        )]
        values: Vec<f64>,

        /// Axis scale ("linear" or "log")
        #[arg(short, long, default_value = "linear", value_parser = parse_scale)]
        scale: ScaleType,

        /// Cell width to use when only one value is given
        #[arg(long)]
        unit_width: Option<f64>,
    },

    /// List base-10 log tick values inside an interval
    Ticks {
        /// One end of the interval
        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        /// Other end of the interval
        #[arg(long, allow_negative_numbers = true)]
        max: f64,

        /// Tick mantissas (comma-separated, e.g., "1,2,5")
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_COMB)]
        comb: Vec<u32>,
    },

    /// Build an axis format (limits, major and minor ticks) around a data range
    Format {
        /// Smallest data value
        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        /// Largest data value
        #[arg(long, allow_negative_numbers = true)]
        max: f64,

        /// Padding on each side, as a fraction of the data width (or decade span)
        #[arg(short, long, default_value = "0.05", allow_negative_numbers = true)]
        fraction: f64,

        /// Axis scale ("linear" or "log")
        #[arg(short, long, default_value = "linear", value_parser = parse_scale)]
        scale: ScaleType,

        /// Axis label
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Compute figure size in inches and the axes rectangle from centimetres
    Figure {
        /// Figure width in cm
        #[arg(long, default_value = "8.0")]
        width_cm: f64,

        /// Figure height in cm
        #[arg(long, default_value = "6.0")]
        height_cm: f64,

        /// Margins in cm as "left,right,bottom,top"
        #[arg(long, value_delimiter = ',')]
        margins: Option<Vec<f64>>,
    },
}

fn parse_scale(name: &str) -> std::result::Result<ScaleType, RecipeError> {
    ScaleType::parse(name)
}

#[derive(Serialize, Debug)]
struct PadReport {
    scale: ScaleType,
    fraction: f64,
    data: (f64, f64),
    limits: (f64, f64),
}

#[derive(Serialize, Debug)]
struct BoxesReport {
    scale: ScaleType,
    centers: Vec<f64>,
    edges: Vec<f64>,
}

#[derive(Serialize, Debug)]
struct TicksReport {
    min: f64,
    max: f64,
    comb: Vec<u32>,
    ticks: Vec<f64>,
}

#[derive(Serialize, Debug)]
struct FormatReport {
    #[serde(flatten)]
    format: AxisFormat,
    major_ticks: Vec<f64>,
    minor_ticks: Vec<f64>,
}

#[derive(Serialize, Debug)]
struct FigureReport {
    layout: FigureLayout,
    figure_size: FigureSize,
    axes_rect: AxesRect,
}

/// Print `report` as pretty JSON, or as the plain text produced by `plain`
fn emit<T: Serialize>(json: bool, report: &T, plain: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{}", text);
    } else {
        println!("{}", plain(report));
    }
    Ok(())
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(command: Command, json: bool) -> Result<()> {
    match command {
        Command::Pad {
            min,
            max,
            fraction,
            scale,
        } => {
            let limits = axis_padding(scale, min, max, fraction);
            if limits.0.is_nan() || limits.1.is_nan() {
                warn!("Padding a {} axis gave NaN; log axes need positive data", scale);
            }
            let report = PadReport {
                scale,
                fraction,
                data: (min, max),
                limits,
            };
            emit(json, &report, |r| format!("{} {}", r.limits.0, r.limits.1))
        }
        Command::Boxes {
            values,
            scale,
            unit_width,
        } => {
            let Some(edges) = pcolor_box_coordinates(&values, scale, unit_width) else {
                bail!("No box coordinates for {:?}: a single value needs --unit-width", values);
            };
            let report = BoxesReport {
                scale,
                centers: values,
                edges,
            };
            emit(json, &report, |r| join(&r.edges))
        }
        Command::Ticks { min, max, comb } => {
            let ticks = log_ticks_base10(min, max, &comb);
            debug!("{} ticks in [{}, {}]", ticks.len(), min, max);
            let report = TicksReport {
                min,
                max,
                comb,
                ticks,
            };
            emit(json, &report, |r| join(&r.ticks))
        }
        Command::Format {
            min,
            max,
            fraction,
            scale,
            label,
        } => {
            let mut format = AxisFormat::from_data(min, max, fraction, scale)
                .with_context(|| format!("Failed to format a {} axis for [{}, {}]", scale, min, max))?;
            if let Some(label) = label {
                format = format.with_label(label);
            }
            let report = FormatReport {
                major_ticks: format.major_ticks(),
                minor_ticks: format.minor_ticks(),
                format,
            };
            emit(json, &report, |r| {
                let mut lines = vec![
                    format!("limits: {} {}", r.format.min, r.format.max),
                    format!("major: {}", join(&r.major_ticks)),
                    format!("minor: {}", join(&r.minor_ticks)),
                ];
                if let Some(label) = &r.format.label {
                    lines.insert(0, format!("label: {}", label));
                }
                lines.join("\n")
            })
        }
        Command::Figure {
            width_cm,
            height_cm,
            margins,
        } => {
            let mut layout = FigureLayout::new()
                .width_cm(width_cm)
                .height_cm(height_cm)
                .build()
                .context("Failed to build figure layout")?;
            if let Some(margins) = margins {
                let [left, right, bottom, top] = margins[..] else {
                    bail!(
                        "--margins takes exactly four values (left,right,bottom,top), got {}",
                        margins.len()
                    );
                };
                layout = layout.with_margins_cm(left, right, bottom, top);
            }
            let axes_rect = layout.axes_rect().context("Failed to place the axes")?;
            let report = FigureReport {
                figure_size: layout.figure_size(),
                axes_rect,
                layout,
            };
            emit(json, &report, |r| {
                let rect = r.axes_rect.to_array();
                format!(
                    "figsize: {:.4} {:.4}\naxes: {:.4} {:.4} {:.4} {:.4}",
                    r.figure_size.width_in, r.figure_size.height_in, rect[0], rect[1], rect[2], rect[3]
                )
            })
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing subscriber with environment filter; results go to stdout, logs to stderr
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("{:?}", args.command);
    run(args.command, args.json)
}
