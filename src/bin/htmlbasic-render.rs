use htmlbasic::recording::DEFAULT_FONT_SIZE;
use htmlbasic::{
    Clock, Diagnostics, FontMetrics, HtmlBasic, HtmlBasicError, RealClock, RecordingCanvas,
    RenderConfig,
};
use std::env;
use std::fs;
use std::process;

const FROZEN_TIME_VAR: &str = "HTMLBASIC_FROZEN_TIME";

struct Options {
    config: RenderConfig,
    font_size: f64,
    files: Vec<String>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            process::exit(1);
        }
    };

    let clock = match env::var(FROZEN_TIME_VAR) {
        Ok(value) => match RealClock::frozen_at(&value) {
            Ok(clock) => clock,
            Err(e) => {
                eprintln!("✗ {}: {}", FROZEN_TIME_VAR, e);
                process::exit(1);
            }
        },
        Err(_) => RealClock::new(),
    };

    let mut exit_code = 0;
    let mut total = Diagnostics::new();
    for file_path in &options.files {
        match render_file(file_path, &options, &clock) {
            Ok(diagnostics) => {
                print_diagnostics(file_path, &diagnostics);
                total.merge(&diagnostics);
            }
            Err(e) => {
                eprintln!("✗ {}: {}", file_path, e);
                exit_code = 1;
            }
        }
    }

    if options.files.len() > 1 {
        print_diagnostics("total", &total);
    }

    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: htmlbasic-render [--config FILE] [--size N] <file.html>...");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  htmlbasic-render demos/links.html");
    eprintln!("  htmlbasic-render --config demos/render.yaml --size 14 demos/*.html");
}

fn parse_args(args: &[String]) -> Result<Option<Options>, HtmlBasicError> {
    let mut config = RenderConfig::default();
    let mut font_size = DEFAULT_FONT_SIZE;
    let mut files = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = iter.next() else {
                    return Ok(None);
                };
                config = RenderConfig::from_path(path)?;
            }
            "--size" => {
                let Some(value) = iter.next() else {
                    return Ok(None);
                };
                font_size = value
                    .parse::<f64>()
                    .ok()
                    .filter(|size| *size > 0.0)
                    .ok_or_else(|| HtmlBasicError::InvalidFontSize {
                        value: value.clone(),
                    })?;
            }
            "-h" | "--help" => return Ok(None),
            _ => files.push(arg.clone()),
        }
    }

    if files.is_empty() {
        return Ok(None);
    }
    Ok(Some(Options {
        config,
        font_size,
        files,
    }))
}

fn render_file(
    path: &str,
    options: &Options,
    clock: &RealClock,
) -> Result<Diagnostics, HtmlBasicError> {
    let markup = fs::read_to_string(path).map_err(|source| HtmlBasicError::Io {
        path: path.to_string(),
        source,
    })?;

    let mut canvas = RecordingCanvas::with_font(FontMetrics::helvetica(), options.font_size);
    let mut html = HtmlBasic::with_config(&options.config)?;
    html.write(&mut canvas, options.config.line_height, &markup);

    println!(
        "# {} rendered {} ({} {})",
        path,
        clock.now().to_rfc3339(),
        canvas.metrics().name,
        options.font_size
    );
    let trace = serde_yaml::to_string(canvas.ops())?;
    print!("{}", trace);

    Ok(*html.diagnostics())
}

fn print_diagnostics(path: &str, diagnostics: &Diagnostics) {
    if diagnostics.is_clean() {
        println!("✓ {} rendered cleanly", path);
    } else {
        println!(
            "! {}: {} skipped attribute(s), {} ignored tag(s), {} unbalanced close(s)",
            path,
            diagnostics.skipped_attributes,
            diagnostics.ignored_tags,
            diagnostics.unbalanced_closes
        );
    }
}
