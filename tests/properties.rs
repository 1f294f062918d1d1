use lineal::{
    interpreter::{environment::Environment, value::Value},
    run_script, run_statement,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn integer_literals_round_trip(n in 0..=i64::MAX) {
        let mut env = Environment::new();
        let value = run_statement(&format!("{n};"), 1, &mut env, &mut Vec::<u8>::new()).unwrap();
        prop_assert_eq!(value, Some(Value::Integer(n)));
    }

    #[test]
    fn addition_matches_i64(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let mut out = Vec::new();
        let script = format!("var a = 0 - {};\nvar b = 0 - {};\nprint a + b;", -a, -b);
        run_script(&script, &mut out).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", a + b));
    }

    #[test]
    fn multiplication_wraps_like_i64(a in (i64::MIN + 1)..=i64::MAX, b in (i64::MIN + 1)..=i64::MAX) {
        let mut out = Vec::new();
        let script = format!("var a = 0 - {};\nvar b = 0 - {};\nprint a * b;", -a, -b);
        run_script(&script, &mut out).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", a.wrapping_mul(b)));
    }

    #[test]
    fn division_truncates_like_i64(a in 0i64..10_000, b in 1i64..100) {
        let mut env = Environment::new();
        let value = run_statement(&format!("-{a} / {b};"), 1, &mut env, &mut Vec::<u8>::new()).unwrap();
        prop_assert_eq!(value, Some(Value::Integer(-a / b)));
    }

    #[test]
    fn reruns_print_the_same_output(values in proptest::collection::vec(0i64..1000, 1..8)) {
        let script = values.iter()
                           .map(|v| format!("var x = {v} * 2;\nprint x < 500;"))
                           .collect::<Vec<_>>()
                           .join("\n");

        let mut first = Vec::<u8>::new();
        let mut second = Vec::<u8>::new();
        run_script(&script, &mut first).unwrap();
        run_script(&script, &mut second).unwrap();
        prop_assert_eq!(first, second);
    }
}
