use std::process;

use anyhow::{Context, Result};
use log::LevelFilter;
use rsecc::args::parse_args;
use rsecc::config::CodecConfig;
use rsecc::galois::create_tables;
use rsecc::reed_solomon::ReedSolomon;

fn main() -> Result<()> {
    let matches = parse_args();

    // Initialize the logger
    let mut logger = env_logger::Builder::from_default_env();
    logger
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if matches.get_flag("verbose") {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match matches.subcommand() {
        Some(("encode", sub)) => {
            let codec = CodecConfig::from_args(sub)
                .build_codec()
                .context("Failed to build codec")?;
            let message = decode_hex(sub.get_one::<String>("message"))?;

            let codeword = codec.encode(&message).context("Failed to encode message")?;
            println!("{}", hex::encode(codeword));
        }
        Some(("correct", sub)) => {
            let config = CodecConfig::from_args(sub);
            if config.parallel {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.effective_threads())
                    .build_global()
                    .context("Failed to configure thread pool")?;
            }
            let codec = config.build_codec().context("Failed to build codec")?;

            let erasures: Vec<usize> = sub
                .get_many::<usize>("erasures")
                .map(|values| values.copied().collect())
                .unwrap_or_default();
            let jobs = sub
                .get_many::<String>("codewords")
                .into_iter()
                .flatten()
                .map(|codeword| {
                    hex::decode(codeword)
                        .with_context(|| format!("Invalid hex codeword {:?}", codeword))
                        .map(|bytes| (bytes, erasures.clone()))
                })
                .collect::<Result<Vec<_>>>()?;

            if !correct_all(&codec, &jobs) {
                process::exit(1);
            }
        }
        Some(("tables", sub)) => {
            let config = CodecConfig::from_args(sub);
            let field = create_tables(config.primitive, config.generator)
                .context("Failed to build field tables")?;

            println!("exp: {}", hex::encode(field.exp_table()));
            let log: Vec<u8> = (1..=255u8).filter_map(|a| field.log(a)).collect();
            println!("log: {}", hex::encode(log));
        }
        _ => unreachable!("clap requires a subcommand"),
    }

    Ok(())
}

fn decode_hex(input: Option<&String>) -> Result<Vec<u8>> {
    let input = input.context("Missing hex input")?;
    hex::decode(input).with_context(|| format!("Invalid hex input {:?}", input))
}

/// Print corrected codewords; returns false if any could not be corrected
fn correct_all(codec: &ReedSolomon, jobs: &[(Vec<u8>, Vec<usize>)]) -> bool {
    let mut all_ok = true;

    for (index, result) in codec.correct_batch(jobs).into_iter().enumerate() {
        match result {
            Ok(corrected) => {
                println!(
                    "{} {}",
                    hex::encode(&corrected.message),
                    hex::encode(&corrected.parity)
                );
                if !corrected.errata_positions.is_empty() {
                    log::info!(
                        "Codeword {}: corrected positions {:?}",
                        index,
                        corrected.errata_positions
                    );
                }
            }
            Err(e) => {
                eprintln!("Codeword {}: {}", index, e);
                all_ok = false;
            }
        }
    }

    all_ok
}
