use crate::config::FieldKind;
use crate::poly::Packed;
use crate::reed_solomon::PositionMask;
use clap::{Arg, ArgMatches, Command};

/// Parse an integer literal with an optional `0o`, `0x` or `0b` prefix
///
/// Underscores are accepted as digit separators, so `0o123_0013` is the same as `0o1230013`.
pub fn parse_packed(input: &str) -> Result<Packed, String> {
    let cleaned: String = input.trim().chars().filter(|&c| c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };

    if digits.is_empty() {
        return Err(format!("Missing digits in {input:?}"));
    }
    Packed::from_str_radix(digits, radix).map_err(|e| format!("Invalid literal {input:?}: {e}"))
}

/// Parse a symbol position mask, same literal syntax as [`parse_packed`]
pub fn parse_mask(input: &str) -> Result<PositionMask, String> {
    let value = parse_packed(input)?;
    PositionMask::try_from(value)
        .map_err(|_| format!("Position mask {input:?} does not fit in 16 bits"))
}

fn field_arg() -> Arg {
    Arg::new("field")
        .short('f')
        .long("field")
        .help("Field to work in: gf8 or gf16")
        .value_name("FIELD")
        .value_parser(|input: &str| input.parse::<FieldKind>())
}

fn check_arg() -> Arg {
    Arg::new("check")
        .short('k')
        .long("check")
        .help("Number of check symbols per codeword (default: 4)")
        .value_name("COUNT")
        .value_parser(clap::value_parser!(u32).range(1..))
}

/// Build the command-line interface
pub fn build_cli() -> Command {
    Command::new("gfpack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Packed-polynomial Reed-Solomon codes over GF(8) and GF(16)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Encode a message into a systematic codeword")
                .arg(field_arg())
                .arg(check_arg())
                .arg(
                    Arg::new("message")
                        .help("Message symbols as a packed literal (0o, 0x, 0b or decimal)")
                        .required(true)
                        .value_parser(parse_packed)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Correct errors and erasures in a received codeword")
                .arg(field_arg())
                .arg(check_arg())
                .arg(
                    Arg::new("received")
                        .help("Received codeword as a packed literal")
                        .required(true)
                        .value_parser(parse_packed)
                        .index(1),
                )
                .arg(
                    Arg::new("erasures")
                        .short('e')
                        .long("erasures")
                        .help("Mask of symbol positions known to be bad")
                        .value_name("MASK")
                        .value_parser(parse_mask),
                )
                .arg(
                    Arg::new("transmitted")
                        .short('t')
                        .long("transmitted")
                        .help("Mask of symbol positions that were sent (default: all)")
                        .value_name("MASK")
                        .value_parser(parse_mask),
                )
                .arg(
                    Arg::new("bits")
                        .short('b')
                        .long("bits")
                        .help("Bit length of the received value (default: full codeword)")
                        .value_name("BITS")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("tables")
                .visible_alias("t")
                .about("Recompute and cross-check the field and generator tables")
                .arg(field_arg()),
        )
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}
