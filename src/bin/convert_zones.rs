//! Zone liquid converter binary — turns zone definition tables into
//! liquid geometry sets on disk.
//!
//! Usage: cargo run --release --bin convert_zones -- [OPTIONS]
//!
//! Options:
//!   --input <PATH>    Zone definition JSON file, or a directory of them
//!                     (default: "zones")
//!   --output <DIR>    Output directory (default: "liquidsets")
//!   --scale <SCALE>   World-scale multiplier applied on export (default: 1.0)
//!   --jobs <N>        Max parallel zone conversions (default: 4)
//!
//! Output structure:
//!   <output>/
//!     <zone>.liquidset.json   # Surfaces, volumes, discard boxes, materials
//!     <zone>.areas.json       # Zone area records (only when the zone has any)

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::warn;
use rayon::prelude::*;

use zonetide::liquid::dome::DomeTuning;
use zonetide::liquid::synth::LiquidSynthesizer;
use zonetide::zone::builder::ZoneBuilder;
use zonetide::zone::definition::ZoneDefinition;

fn main() {
    zonetide::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let input = parse_str_arg(&args, "--input").unwrap_or_else(|| "zones".to_string());
    let output = parse_str_arg(&args, "--output").unwrap_or_else(|| "liquidsets".to_string());
    let scale = parse_f32_arg(&args, "--scale").unwrap_or(1.0);
    let jobs = parse_usize_arg(&args, "--jobs").unwrap_or(4);

    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .expect("Failed to configure thread pool");

    let input = PathBuf::from(input);
    let output_dir = PathBuf::from(output);

    println!("=== Zonetide Zone Converter ===");
    println!("Input:  {}", input.display());
    println!("Scale:  {}", scale);
    println!("Jobs:   {} parallel", jobs);
    println!("Output: {}", output_dir.display());
    println!();

    let files = collect_definition_files(&input);
    if files.is_empty() {
        eprintln!("No zone definition files found under {}", input.display());
        std::process::exit(1);
    }
    let total = files.len();
    println!("Zones: {} definition files", total);
    println!();

    std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");

    let builder = ZoneBuilder::new(LiquidSynthesizer::default(), DomeTuning::default());

    let start = Instant::now();
    let converted = AtomicUsize::new(0);
    let total_surfaces = AtomicUsize::new(0);
    let total_skipped = AtomicUsize::new(0);

    let zones: Vec<String> = files
        .par_iter()
        .filter_map(|path| {
            let definition = match ZoneDefinition::from_json_file(path) {
                Ok(d) => d,
                Err(err) => {
                    warn!("skipping {}: {err}", path.display());
                    return None;
                }
            };

            let result = builder.convert(&definition);
            total_surfaces.fetch_add(result.liquid.surfaces.len(), Ordering::Relaxed);
            total_skipped.fetch_add(result.skipped_shapes, Ordering::Relaxed);

            // the world scale is applied here and nowhere else
            let liquid = result.liquid.scaled(scale);
            let json = serde_json::to_string_pretty(&liquid)
                .expect("Failed to serialize liquid set");
            let out_file = output_dir.join(format!("{}.liquidset.json", definition.name));
            std::fs::write(&out_file, json).expect("Failed to write liquid set");

            if !result.areas.is_empty() {
                let areas = result.areas.scaled(scale);
                let json = serde_json::to_string_pretty(&areas)
                    .expect("Failed to serialize areas");
                let area_file = output_dir.join(format!("{}.areas.json", definition.name));
                std::fs::write(&area_file, json).expect("Failed to write areas");
            }

            let done = converted.fetch_add(1, Ordering::Relaxed) + 1;
            if done % 50 == 0 || done == total {
                let elapsed = start.elapsed().as_secs_f64();
                eprintln!("  [{}/{}] {:.0} zones/sec", done, total, done as f64 / elapsed);
            }

            Some(definition.name)
        })
        .collect();

    let elapsed = start.elapsed();
    println!();
    println!("=== Conversion Complete ===");
    println!("Zones:    {} converted (of {} files) in {:.1}s",
        zones.len(), total, elapsed.as_secs_f64());
    println!("Surfaces: {}", total_surfaces.load(Ordering::Relaxed));
    println!("Skipped:  {} bad shapes", total_skipped.load(Ordering::Relaxed));
    println!("Output:   {}", output_dir.display());
}

fn collect_definition_files(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = match std::fs::read_dir(input) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.clone())
}
