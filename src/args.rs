use clap::{value_parser, Arg, ArgAction, Command};

/// Parse an integer given in decimal or `0x`-prefixed hexadecimal
fn parse_int(input: &str) -> Result<u32, String> {
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => input.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid number {:?}: {}", input, e))
}

fn parse_primitive(input: &str) -> Result<u16, String> {
    let value = parse_int(input)?;
    u16::try_from(value).map_err(|_| format!("primitive polynomial {:#x} too large", value))
}

fn parse_generator(input: &str) -> Result<u8, String> {
    let value = parse_int(input)?;
    u8::try_from(value).map_err(|_| format!("generator {} is not a field element", value))
}

fn parity_arg() -> Arg {
    Arg::new("parity")
        .short('p')
        .long("parity")
        .help("Number of parity symbols")
        .value_name("COUNT")
        .value_parser(value_parser!(usize))
        .default_value("4")
}

pub fn build_cli() -> Command {
    Command::new("rsecc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon error correction over GF(2^8)")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("primitive")
                .long("primitive")
                .help("Primitive polynomial (default: 0x11d)")
                .value_name("POLY")
                .value_parser(parse_primitive)
                .global(true),
        )
        .arg(
            Arg::new("generator")
                .long("generator")
                .help("Generator element (default: 2)")
                .value_name("ELEMENT")
                .value_parser(parse_generator)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log decoder stages")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Append parity symbols to a hex-encoded message")
                .arg(parity_arg())
                .arg(
                    Arg::new("message")
                        .help("Message bytes as hex")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("correct")
                .visible_alias("c")
                .about("Correct hex-encoded codewords")
                .arg(parity_arg())
                .arg(
                    Arg::new("erasures")
                        .short('e')
                        .long("erasures")
                        .help("Comma-separated positions known to be unreliable")
                        .value_name("POSITIONS")
                        .value_delimiter(',')
                        .value_parser(value_parser!(usize))
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("threads")
                        .short('t')
                        .long("threads")
                        .help("Number of threads (0 = auto-detect)")
                        .value_name("COUNT")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("no-parallel")
                        .long("no-parallel")
                        .help("Correct codewords sequentially")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("codewords")
                        .help("Codewords as hex")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                ),
        )
        .subcommand(Command::new("tables").about("Print the exponent and logarithm tables"))
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_formats() {
        assert_eq!(parse_int("285"), Ok(285));
        assert_eq!(parse_int("0x11d"), Ok(0x11D));
        assert_eq!(parse_int("0X11D"), Ok(0x11D));
        assert!(parse_int("zz").is_err());
        assert!(parse_generator("256").is_err());
    }

    #[test]
    fn test_correct_erasure_list() {
        let matches = build_cli()
            .try_get_matches_from(["rsecc", "correct", "-e", "1,4", "-e", "7", "aabb"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "correct");

        let erasures: Vec<usize> = sub
            .get_many::<usize>("erasures")
            .unwrap()
            .copied()
            .collect();
        assert_eq!(erasures, vec![1, 4, 7]);
        assert_eq!(sub.get_one::<usize>("parity"), Some(&4));
    }

    #[test]
    fn test_requires_subcommand_input() {
        assert!(build_cli().try_get_matches_from(["rsecc", "encode"]).is_err());
    }
}
