use crate::blend::BlendParams;
use crate::types::Placement;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BlendToolConfig {
    pub target: PathBuf,
    pub source: PathBuf,
    pub mask: PathBuf,
    /// Top-left corner of the mask inside the target.
    pub position: Placement,
    #[serde(default)]
    pub blend: BlendParams,
    pub output: BlendOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct BlendOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<BlendToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <config.json>\n       {program} -target <png> -source <png> -mask <png> \
         -output <png> -mx <x> -my <y> [-gamma <g>] [-report <json>] [-parallel]\n\n\
         The mask may not touch the target border: mx and my must be at least 1 and the \
         mask must end at least one pixel before the right and bottom edges."
    )
}

/// Parse command-line arguments (without the program name).
///
/// A single argument is treated as a JSON config path; anything else must be
/// the flag form.
pub fn parse_cli(program: &str, args: &[String]) -> Result<BlendToolConfig, String> {
    match args {
        [] => Err(usage(program)),
        [path] if !path.starts_with('-') => load_config(Path::new(path)),
        _ => parse_flags(program, args),
    }
}

fn parse_flags(program: &str, args: &[String]) -> Result<BlendToolConfig, String> {
    let mut target = None;
    let mut source = None;
    let mut mask = None;
    let mut output = None;
    let mut report = None;
    let mut mx = None;
    let mut my = None;
    let mut blend = BlendParams::default();

    let mut it = args.iter();
    while let Some(flag) = it.next() {
        if flag == "-parallel" {
            blend.parallel_channels = true;
            continue;
        }
        let value = it
            .next()
            .ok_or_else(|| format!("Missing value for {flag}\n\n{}", usage(program)))?;
        match flag.as_str() {
            "-target" => target = Some(PathBuf::from(value)),
            "-source" => source = Some(PathBuf::from(value)),
            "-mask" => mask = Some(PathBuf::from(value)),
            "-output" => output = Some(PathBuf::from(value)),
            "-report" => report = Some(PathBuf::from(value)),
            "-mx" => mx = Some(parse_number::<usize>(flag, value)?),
            "-my" => my = Some(parse_number::<usize>(flag, value)?),
            "-gamma" => blend.gamma = parse_number::<f32>(flag, value)?,
            other => return Err(format!("Unknown option {other}\n\n{}", usage(program))),
        }
    }

    let missing = |name: &str| format!("Missing required option {name}\n\n{}", usage(program));
    Ok(BlendToolConfig {
        target: target.ok_or_else(|| missing("-target"))?,
        source: source.ok_or_else(|| missing("-source"))?,
        mask: mask.ok_or_else(|| missing("-mask"))?,
        position: Placement::new(
            mx.ok_or_else(|| missing("-mx"))?,
            my.ok_or_else(|| missing("-my"))?,
        ),
        blend,
        output: BlendOutputConfig {
            image: output.ok_or_else(|| missing("-output"))?,
            report_json: report,
        },
    })
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid value '{value}' for {flag}"))
}
