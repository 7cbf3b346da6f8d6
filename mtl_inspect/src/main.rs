//! MTL inspection tool
//!
//! Reads a Wavefront material library, parses it and logs a summary of every material.
//!
//! ```text
//! mtl_inspect <file.mtl> [parser.toml|parser.ron]
//! ```

use std::process::ExitCode;

use wavefront_mtl::foundation::logging;
use wavefront_mtl::prelude::*;

#[derive(thiserror::Error, Debug)]
enum InspectError {
    #[error("usage: mtl_inspect <file.mtl> [parser.toml|parser.ron]")]
    Usage,

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: MtlError,
    },
}

fn run() -> Result<(), InspectError> {
    let mut args = std::env::args().skip(1);
    let mtl_path = args.next().ok_or(InspectError::Usage)?;

    let config = match args.next() {
        Some(config_path) => {
            log::info!("Loading parser configuration from {}", config_path);
            ParserConfig::load_from_file(&config_path)?
        }
        None => ParserConfig::default(),
    };
    config.validate()?;

    let contents = std::fs::read_to_string(&mtl_path).map_err(|source| InspectError::Read {
        path: mtl_path.clone(),
        source,
    })?;

    let library = MtlParser::new(config)
        .parse(&contents)
        .map_err(|source| InspectError::Parse {
            path: mtl_path.clone(),
            source,
        })?;

    log::info!("{}: {} materials", mtl_path, library.len());
    for material in &library {
        log_material(material);
    }

    Ok(())
}

fn log_material(material: &Material) {
    let Color { r, g, b, .. } = material.diffuse;
    log::info!(
        "  {} - Kd ({:.3}, {:.3}, {:.3}) Ns {} d {} Ni {} illum {}",
        material.name,
        r,
        g,
        b,
        material.specular_exponent,
        material.dissolve,
        material.optical_density,
        material.illumination_model,
    );

    for (slot, map) in material.maps() {
        if map.options.is_empty() {
            log::info!("    {} {}", slot, map.file);
        } else {
            let flags: Vec<&str> = map.options.iter().map(|option| option.flag.as_str()).collect();
            log::info!("    {} {} (options: {})", slot, map.file, flags.join(" "));
        }
    }
}

fn main() -> ExitCode {
    logging::init_with_level("info");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
