use clap::builder::FalseyValueParser;
use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    let expression_help = concat!(
        "Expression to evaluate, e.g. '(3+2)*3'.\n",
        "When omitted, each line of stdin is evaluated."
    );

    Command::new("parsicalc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate integer arithmetic expressions")
        .arg(
            Arg::new("expression")
                .index(1)
                .required(false)
                .allow_hyphen_values(true)
                .help(expression_help),
        )
        .arg(
            Arg::new("allow_trailing")
                .short('t')
                .long("allow-trailing")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("PARSICALC_ALLOW_TRAILING")
                .help("Accept input left over after the expression?"),
        )
        .arg(
            Arg::new("max_depth")
                .short('x')
                .long("max-depth")
                .value_parser(value_parser!(usize))
                .env("PARSICALC_MAX_DEPTH")
                .help("Maximum parenthesis nesting depth [default: 256]"),
        )
}
