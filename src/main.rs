use poisson_blend::config::blend::{self as blend_cfg, BlendToolConfig};
use poisson_blend::diagnostics::BlendReport;
use poisson_blend::image::io::{load_linear_rgb, save_rgba_u8, write_json_file};
use poisson_blend::{BlendInputs, PoissonBlender};
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "poisson_blend".to_string());
    let rest: Vec<String> = args.collect();
    let config = blend_cfg::parse_cli(&program, &rest)?;

    let gamma = config.blend.gamma().map_err(|e| e.to_string())?;
    let target = load_linear_rgb(&config.target, gamma)?;
    let mask = load_linear_rgb(&config.mask, gamma)?;
    let source = load_linear_rgb(&config.source, gamma)?;

    let blender = PoissonBlender::new(config.blend);
    let inputs = BlendInputs {
        mask: &mask,
        source: &source,
        target: &target,
    };
    let detailed = blender
        .blend_with_diagnostics(inputs, config.position)
        .map_err(|e| format!("{e}\n\n{}", blend_cfg::usage(&program)))?;

    save_rgba_u8(&detailed.output, &config.output.image)?;
    print_summary(&config, &detailed.report);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &detailed.report)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn print_summary(config: &BlendToolConfig, report: &BlendReport) {
    println!(
        "Blended {}x{} mask at ({}, {}) into {}x{} target",
        report.input.mask_width,
        report.input.mask_height,
        report.input.placement.x,
        report.input.placement.y,
        report.input.target_width,
        report.input.target_height
    );
    println!(
        "  unknowns: {}  non-zeros: {}  boundary terms: {}",
        report.system.unknowns, report.system.nonzeros, report.system.boundary_terms
    );
    for ch in &report.channels {
        println!(
            "  {:>5}: range [{:.4}, {:.4}] clamped={} residual={:.2e}",
            ch.channel, ch.min, ch.max, ch.clamped, ch.max_residual
        );
    }
    println!("  total: {:.3} ms", report.timings.total_ms);
    println!("Saved {}", config.output.image.display());
}
