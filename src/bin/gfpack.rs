//! gfpack - encode, decode and inspect packed Reed-Solomon codewords

use anyhow::{Context, Result};
use clap::ArgMatches;
use gfpack::config::{CodecConfig, FieldKind};
use gfpack::tables::FieldTables;
use gfpack::{parse_args, Decoded, Gf16, Gf8, Packed, PositionMask, ReedSolomon, RsField};
use log::{debug, info};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    match matches.subcommand() {
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some(("tables", sub_matches)) => handle_tables(sub_matches),
        _ => anyhow::bail!("No command given, see --help"),
    }
}

fn codec_config(matches: &ArgMatches) -> Result<CodecConfig> {
    let config = CodecConfig::from_args(matches);
    config
        .validate()
        .with_context(|| format!("Invalid configuration for {}", config.field))?;
    debug!("Using {:?}", config);
    Ok(config)
}

fn handle_encode(matches: &ArgMatches) -> Result<()> {
    let config = codec_config(matches)?;
    let message = *matches
        .get_one::<Packed>("message")
        .context("Missing message")?;

    let codeword = match config.field {
        FieldKind::Gf8 => encode_in::<Gf8>(&config, message)?,
        FieldKind::Gf16 => encode_in::<Gf16>(&config, message)?,
    };

    println!("{}", config.field.format(codeword));
    Ok(())
}

fn encode_in<F: RsField>(config: &CodecConfig, message: Packed) -> Result<Packed> {
    let rs = ReedSolomon::<F>::new(config.check_symbols)?;
    if message & !rs.message_mask() != 0 {
        info!(
            "Message exceeds {} symbols, high bits dropped",
            rs.message_symbols()
        );
    }
    Ok(rs.encode(message))
}

fn handle_decode(matches: &ArgMatches) -> Result<()> {
    let config = codec_config(matches)?;
    let received = *matches
        .get_one::<Packed>("received")
        .context("Missing received codeword")?;
    let erasures = matches
        .get_one::<PositionMask>("erasures")
        .copied()
        .unwrap_or(0);
    let transmitted = matches.get_one::<PositionMask>("transmitted").copied();
    let received_bits = matches
        .get_one::<u32>("bits")
        .copied()
        .unwrap_or_else(|| config.field.codeword_bits());

    let decoded = match config.field {
        FieldKind::Gf8 => decode_in::<Gf8>(&config, received, received_bits, erasures, transmitted),
        FieldKind::Gf16 => {
            decode_in::<Gf16>(&config, received, received_bits, erasures, transmitted)
        }
    }
    .with_context(|| format!("Failed to decode {}", config.field.format(received)))?;

    println!("{}", config.field.format(decoded.codeword));
    if decoded.errata() != 0 {
        println!("erasures: {}", positions(decoded.erasures));
        println!("errors: {}", positions(decoded.errors));
    }
    Ok(())
}

fn decode_in<F: RsField>(
    config: &CodecConfig,
    received: Packed,
    received_bits: u32,
    erasures: PositionMask,
    transmitted: Option<PositionMask>,
) -> Result<Decoded> {
    let rs = ReedSolomon::<F>::new(config.check_symbols)?;
    let transmitted = transmitted.unwrap_or_else(|| rs.all_positions());
    let decoded = gfpack::decode_detailed::<F>(
        received,
        received_bits,
        config.check_symbols,
        erasures,
        transmitted,
    )?;
    Ok(decoded)
}

fn positions(mask: PositionMask) -> String {
    let list: Vec<String> = (0..PositionMask::BITS)
        .filter(|&i| mask & (1 << i) != 0)
        .map(|i| i.to_string())
        .collect();
    if list.is_empty() {
        "none".to_string()
    } else {
        list.join(" ")
    }
}

fn handle_tables(matches: &ArgMatches) -> Result<()> {
    let fields = match matches.get_one::<FieldKind>("field") {
        Some(&field) => vec![field],
        None => vec![FieldKind::Gf8, FieldKind::Gf16],
    };

    for field in fields {
        let tables = match field {
            FieldKind::Gf8 => checked_tables::<Gf8>()?,
            FieldKind::Gf16 => checked_tables::<Gf16>()?,
        };
        print!("{tables}");
        println!("  matches library tables");
    }
    Ok(())
}

fn checked_tables<F: RsField>() -> Result<FieldTables> {
    let tables = FieldTables::compute::<F>();
    tables
        .verify::<F>()
        .context("Recomputed tables disagree with the library")?;
    Ok(tables)
}
