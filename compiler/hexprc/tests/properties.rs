//! Property tests over generated inputs.

#![allow(clippy::unwrap_used, clippy::cast_possible_truncation)]

mod common;

use common::TestHost;
use hexprc::{compile, eval_str, NoContext, NoResolver, Value};
use proptest::prelude::*;

/// Source text of a well-formed expression over literals, `$`, memory reads
/// and the test host's names. Division is left out so every input
/// evaluates.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        any::<u32>().prop_map(|n| format!("{n:#x}")),
        (0u32..1000).prop_map(|n| n.to_string()),
        Just("$".to_string()),
        Just("var.8".to_string()),
        Just("var.24".to_string()),
        Just("varFn".to_string()),
        Just("fn0()".to_string()),
    ];
    leaf.prop_recursive(5, 40, 3, |inner| {
        let ops = prop_oneof![
            Just("+"),
            Just("-"),
            Just("*"),
            Just("&"),
            Just("|"),
            Just("^"),
            Just("<<"),
            Just(">>"),
            Just("<"),
            Just(">="),
            Just("=="),
            Just("!="),
            Just("&&"),
            Just("||"),
        ];
        prop_oneof![
            (inner.clone(), ops, inner.clone()).prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, t, e)| format!("{c} ? {t} : {e}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("-{e}")),
            inner.clone().prop_map(|e| format!("~{e}")),
            inner.clone().prop_map(|e| format!("[{e}]")),
            inner.clone().prop_map(|e| format!("w@[{e}]")),
            inner.clone().prop_map(|e| format!("fn1({e})")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("fn2({a}, {b})")),
        ]
    })
}

proptest! {
    #[test]
    fn generated_expressions_compile_and_repeat(source in expression()) {
        let host = TestHost::new();
        let compiled = compile(&source, &host).unwrap();
        let first = compiled.evaluate(&host).unwrap();
        prop_assert_eq!(compiled.evaluate(&host).unwrap(), first);
        prop_assert_eq!(compile(&source, &host).unwrap().evaluate(&host).unwrap(), first);
    }

    #[test]
    fn parenthesizing_changes_nothing(source in expression()) {
        let host = TestHost::new();
        let plain = compile(&source, &host).unwrap().evaluate(&host).unwrap();
        let wrapped = compile(&format!("({source})"), &host).unwrap().evaluate(&host).unwrap();
        prop_assert_eq!(plain, wrapped);
    }

    #[test]
    fn decimal_literals_wrap(n in any::<u64>()) {
        let expected = (n as u32).cast_signed();
        prop_assert_eq!(eval_str(&n.to_string(), &NoResolver, &NoContext), Ok(expected));
    }

    #[test]
    fn hex_literal_forms_agree(n in any::<u32>()) {
        let expected = Ok(n.cast_signed());
        let forms = [format!("0x{n:x}"), format!("0X{n:X}"), format!("${n:x}"), format!("#{n:X}")];
        for source in forms {
            prop_assert_eq!(eval_str(&source, &NoResolver, &NoContext), expected.clone());
        }
    }

    #[test]
    fn binary_and_octal_literals(n in any::<u32>()) {
        let eval = |source: String| eval_str(&source, &NoResolver, &NoContext);
        prop_assert_eq!(eval(format!("0b{n:b}")), Ok(n.cast_signed()));
        prop_assert_eq!(eval(format!("0o{n:o}")), Ok(n.cast_signed()));
    }

    #[test]
    fn arithmetic_matches_wrapping_ops(a in any::<i32>(), b in any::<i32>()) {
        let eval = |source: String| eval_str(&source, &NoResolver, &NoContext).unwrap();
        // Negative operands are written as unary minus applied to a literal.
        let lit = |v: Value| {
            if v < 0 {
                format!("(-{})", v.unsigned_abs())
            } else {
                v.to_string()
            }
        };
        let (x, y) = (lit(a), lit(b));
        prop_assert_eq!(eval(format!("{x} + {y}")), a.wrapping_add(b));
        prop_assert_eq!(eval(format!("{x} - {y}")), a.wrapping_sub(b));
        prop_assert_eq!(eval(format!("{x} * {y}")), a.wrapping_mul(b));
        prop_assert_eq!(eval(format!("{x} << {y}")), a.wrapping_shl(b.cast_unsigned()));
        prop_assert_eq!(
            eval(format!("{x} >> {y}")),
            a.cast_unsigned().wrapping_shr(b.cast_unsigned()).cast_signed()
        );
        prop_assert_eq!(eval(format!("{x} < {y}")), Value::from(a < b));
        if b != 0 {
            prop_assert_eq!(eval(format!("{x} / {y}")), a.wrapping_div(b));
            prop_assert_eq!(eval(format!("{x} % {y}")), a.wrapping_rem(b));
        }
    }

    #[test]
    fn unknown_names_never_panic(name in "[a-z_.][a-z0-9_.]{0,20}'?") {
        let result = compile(&name, &NoResolver);
        prop_assert!(result.is_err());
    }

    #[test]
    fn arbitrary_input_never_panics(source in "\\PC{0,40}") {
        let host = TestHost::new();
        if let Ok(compiled) = compile(&source, &host) {
            let _ = compiled.evaluate(&host);
        }
    }
}
