mod cli;

use std::io::{self, BufRead, Write};
use std::process::exit;

use parsicalc::Evaluator;
use parsicalc::eval::DEFAULT_MAX_DEPTH;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli::build_cli().get_matches();

    let allow_trailing = matches.get_flag("allow_trailing");
    let max_depth = matches
        .get_one::<usize>("max_depth")
        .copied()
        .unwrap_or(DEFAULT_MAX_DEPTH);
    let evaluator = Evaluator::new()
        .allow_trailing(allow_trailing)
        .max_depth(max_depth);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = match matches.get_one::<String>("expression") {
        Some(expression) => run_one(
            &evaluator,
            expression,
            &mut stdout.lock(),
            &mut stderr.lock(),
        ),
        None => run_lines(
            &evaluator,
            io::stdin().lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
        ),
    };

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("i/o error: {}", err);
            1
        }
    };
    exit(code)
}

/// Evaluate one expression, returning the process exit code
fn run_one(
    evaluator: &Evaluator,
    expression: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<i32> {
    match evaluator.evaluate(expression.trim()) {
        Ok(value) => {
            writeln!(out, "{}", value)?;
            Ok(0)
        }
        Err(error) => {
            writeln!(err, "{}", error)?;
            Ok(1)
        }
    }
}

/// Evaluate every non-blank line of `input`
///
/// Failures are reported with their 1-based line number and do not stop the
/// loop. The exit code is 1 if any line failed.
fn run_lines(
    evaluator: &Evaluator,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<i32> {
    let mut code = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        log::debug!("line {}: {:?}", number, expression);
        match evaluator.evaluate(expression) {
            Ok(value) => writeln!(out, "{}", value)?,
            Err(error) => {
                writeln!(err, "line {}: {}", number, error)?;
                code = 1;
            }
        }
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(evaluator: &Evaluator, input: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_lines(evaluator, input.as_bytes(), &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_run_lines_all_valid() {
        let (code, out, err) = lines(&Evaluator::new(), "1-2-3\n(3+2)*3\n");

        assert_eq!(code, 0);
        assert_eq!(out, "-4\n15\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_run_lines_mixed() {
        let input = "3+2*3\n\n   \nabc\n  (1+1)  \n1+2/0\n7";
        let (code, out, err) = lines(&Evaluator::new(), input);

        assert_eq!(code, 1);
        assert_eq!(out, "9\n2\n7\n");

        let reported: Vec<&str> = err.lines().collect();
        assert_eq!(reported.len(), 2);
        assert!(reported[0].starts_with("line 4: "));
        assert!(reported[1].starts_with("line 6: "));
    }

    #[test]
    fn test_run_lines_blank_input() {
        let (code, out, err) = lines(&Evaluator::new(), "\n \n\t\n");

        assert_eq!(code, 0);
        assert_eq!(out, "");
        assert_eq!(err, "");
    }

    #[test]
    fn test_run_lines_allow_trailing() {
        let input = "1+2abcd\n1+2/0abcd\n";

        let (code, _, err) = lines(&Evaluator::new(), input);
        assert_eq!(code, 1);
        assert_eq!(err.lines().count(), 2);

        let (code, out, err) = lines(&Evaluator::new().allow_trailing(true), input);
        assert_eq!(code, 1);
        assert_eq!(out, "3\n");
        assert!(err.starts_with("line 2: "));
    }

    #[test]
    fn test_run_one() {
        let evaluator = Evaluator::new();
        let mut out = Vec::new();
        let mut err = Vec::new();

        assert_eq!(run_one(&evaluator, " 1-2-3 ", &mut out, &mut err).unwrap(), 0);
        assert_eq!(run_one(&evaluator, "1+", &mut out, &mut err).unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "-4\n");
        assert!(!err.is_empty());
    }
}
