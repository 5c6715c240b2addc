#![allow(clippy::unwrap_used)]

use super::*;
use hexpr_diagnostic::ExprErrorKind;
use hexpr_parse::NoResolver;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn run_args(list: &[&str]) -> Result<String, CliError> {
    run(&parse_args(&args(list)).unwrap())
}

fn expr_error(result: Result<String, CliError>) -> ExprError {
    match result {
        Err(CliError::Expr(err)) => err,
        other => panic!("expected an expression error, got {other:?}"),
    }
}

#[test]
fn parse_args_splits_command_expression_and_options() {
    let invocation = parse_args(&args(&["eval", "--pc=4", "$ + 1", "--var=x=2"])).unwrap();
    assert_eq!(invocation.command, Command::Eval);
    assert_eq!(invocation.source, "$ + 1");
    assert_eq!(invocation.options.pc, 4);
    assert_eq!(invocation.options.vars, vec![("x".to_string(), 2)]);
}

#[test]
fn negative_expression_is_not_an_option() {
    let invocation = parse_args(&args(&["eval", "-1"])).unwrap();
    assert_eq!(invocation.source, "-1");
}

#[test]
fn usage_errors() {
    assert_eq!(parse_args(&[]), Err(UsageError::MissingCommand));
    assert_eq!(
        parse_args(&args(&["run", "1"])),
        Err(UsageError::UnknownCommand("run".into()))
    );
    assert_eq!(
        parse_args(&args(&["eval"])),
        Err(UsageError::MissingExpression)
    );
    assert_eq!(
        parse_args(&args(&["eval", "1", "2"])),
        Err(UsageError::UnexpectedArgument("2".into()))
    );
    assert_eq!(
        parse_args(&args(&["lex", "1", "--pc=x"])),
        Err(UsageError::InvalidNumber {
            option: "--pc",
            value: "x".into(),
        })
    );
}

#[test]
fn usage_error_messages() {
    assert_eq!(
        UsageError::InvalidWidth("9".into()).to_string(),
        "invalid width '9' (expected 1 to 4)"
    );
    assert_eq!(
        UsageError::MalformedDefinition {
            option: "--reg",
            value: "sp".into(),
        }
        .to_string(),
        "expected <name>=<value> for --reg, got 'sp'"
    );
}

#[test]
fn eval_prints_decimal_and_hex() {
    assert_eq!(run_args(&["eval", "9+4 * 3"]).unwrap(), "21 0x00000015\n");
    assert_eq!(run_args(&["eval", "-1"]).unwrap(), "-1 0xffffffff\n");
    assert_eq!(
        run_args(&["eval", "hi(label) | $80", "--var=label=0x1234"]).unwrap(),
        "146 0x00000092\n"
    );
}

#[test]
fn eval_with_registers_and_pc() {
    assert_eq!(
        run_args(&["eval", "sp + $", "--reg=sp=0x1ff:1", "--pc=1"]).unwrap(),
        "256 0x00000100\n"
    );
}

#[test]
fn lex_prints_tokens_with_spans() {
    assert_eq!(
        run_args(&["lex", "1+x"]).unwrap(),
        "Number(1) @ 0..1\nPlus @ 1..2\nIdent(\"x\") @ 2..3\nEof @ 3..3\n"
    );
}

#[test]
fn lex_does_not_resolve_names() {
    assert!(run_args(&["lex", "nobody(1)"]).is_ok());
}

#[test]
fn parse_prints_the_tree() {
    assert_eq!(
        run_args(&["parse", "1 ? w@[$] : -x", "--var=x=3"]).unwrap(),
        "(? 0x1 (w@ $) (- <var>))\n"
    );
    assert_eq!(
        parse_source("min(1, 2)", &NoResolver).map_err(|e| e.to_string()),
        Err("unknown function 'min'.".to_string())
    );
}

#[test]
fn errors_keep_their_span() {
    let err = expr_error(run_args(&["eval", "1 + nope"]));
    assert_eq!(err.kind, ExprErrorKind::UnknownIdentifier("nope".into()));
    assert_eq!(err.span, Some(hexpr_ir::Span::new(4, 8)));

    let err = expr_error(run_args(&["eval", "2/0"]));
    assert_eq!(err.kind, ExprErrorKind::DivisionByZero);
}

#[test]
fn expression_errors_render_with_the_invocation_color_mode() {
    let invocation = parse_args(&args(&["eval", "1 + nope", "--color=never"])).unwrap();
    let err = expr_error(run(&invocation));
    let mut out = Vec::new();
    let color = invocation.options.color;
    let mut emitter = hexpr_diagnostic::TerminalEmitter::with_color_mode(&mut out, color, true);
    emitter.emit(&err, &invocation.source);
    emitter.flush();
    drop(emitter);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "error[E2001]: unknown identifier 'nope'.\n  |\n  | 1 + nope\n  |     ^^^^\n"
    );
}

#[test]
fn missing_memory_image() {
    let result = run_args(&["eval", "[0]", "--mem=/nonexistent/hexpr/rom.bin"]);
    match result {
        Err(CliError::Memory { path, .. }) => {
            assert_eq!(path, PathBuf::from("/nonexistent/hexpr/rom.bin"));
        }
        other => panic!("expected a memory error, got {other:?}"),
    }
}

#[test]
fn memory_image_is_read_from_disk() {
    let path = std::env::temp_dir().join(format!("hexpr-image-{}.bin", std::process::id()));
    std::fs::write(&path, [0x34, 0x12, 0x78, 0x56]).unwrap();
    let mem = format!("--mem={}", path.display());
    let result = run_args(&["eval", "w@[0] + d@[0]", &mem]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(result.unwrap(), format_value(0x1234 + 0x5678_1234));
}

#[test]
fn parse_does_not_need_the_memory_image() {
    assert!(run_args(&["parse", "[0]", "--mem=/nonexistent/hexpr/rom.bin"]).is_ok());
}
