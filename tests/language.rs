use num_bigint::BigInt;
use sandcalc::{
    error::ErrorKind,
    evaluate_expression,
    interpreter::{parser::parse, rewrite::rewrite, value::core::Value},
};

fn eval(src: &str) -> Value {
    evaluate_expression(src).unwrap_or_else(|e| panic!("Expression '{src}' failed: {e}"))
}

fn assert_int(src: &str, expected: i64) {
    assert_eq!(eval(src), Value::from(expected), "evaluating '{src}'");
}

fn assert_real(src: &str, expected: f64) {
    match eval(src) {
        Value::Real(r) => assert!((r - expected).abs() < 1e-12,
                                  "'{src}' gave {r}, expected {expected}"),
        other => panic!("'{src}' gave {other}, expected the real {expected}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate_expression(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail with {kind}"),
        Err(e) => assert_eq!(e.kind(), kind, "'{src}' failed with {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_int("1 + 2", 3);
    assert_int("7 * 9", 63);
    assert_int("8 - 5", 3);
    assert_int("2 + 3 * 4", 14);
    assert_int("(2 + 3) * 4", 20);
    assert_int("10 - 4 - 3", 3);
    assert_real("7 / 2", 3.5);
    assert_real("0.1 * 3", 0.30000000000000004);
}

#[test]
fn true_division_is_normalized() {
    assert_int("10 / 2", 5);
    assert_int("0.1 + 0.2 + 0.7", 1);
}

#[test]
fn true_division_of_huge_integers() {
    assert_int("10**400 / 10**399", 10);
    assert_int("fact(200) / fact(199)", 200);
    assert_real("-(10 ** 400) / 10 ** 401", -0.1);
    assert_int("(2 ** 1000 + 1) / 2 ** 1000", 1);
    assert_kind("10 ** 400 / 3", ErrorKind::DomainError);
    assert_kind("10 ** 400 / 1.5", ErrorKind::DomainError);
}

#[test]
fn power_precedence_and_associativity() {
    assert_int("2 ** 3 ** 2", 512);
    assert_int("-2 ** 2", -4);
    assert_int("(-2) ** 2", 4);
    assert_real("2 ** -1", 0.5);
    assert_int("2 * 3 ** 2", 18);
    assert_int("--3", 3);
    assert_int("-+-3", 3);
}

#[test]
fn floor_division_and_modulo() {
    assert_int("7 // 2", 3);
    assert_int("7 // -2", -4);
    assert_int("-7 // 2", -4);
    assert_int("-7 % 3", 2);
    assert_int("7 % -3", -2);
    assert_int("7.5 // 2", 3);
    assert_real("7.5 % 2", 1.5);
}

#[test]
fn integers_are_exact() {
    assert_eq!(eval("99999999999999999999 + 1").to_string(), "100000000000000000000");
    assert_eq!(eval("2 ** 100").to_string(), "1267650600228229401496703205376");
    assert_eq!(eval("-(2 ** 64) // 3").to_string(), "-6148914691236517206");
}

#[test]
fn factorial_forms() {
    assert_int("fact(5)", 120);
    assert_int("fact(n=5)", 120);
    assert_int("5!", 120);
    assert_int("(5)!", 120);
    assert_int("(2+3)!", 120);
    assert_int("3!!", 720);
    assert_int("(3!)!", 720);
    assert_int("0!", 1);
    assert_int("2 ** 3!", 64);
    assert_int("-3!", -6);
    assert_int("3! * 2", 12);
    assert_int("sqrt(16)!", 24);
    assert_int("4.0!", 24);
}

#[test]
fn factorial_limits() {
    assert_eq!(eval("fact(2000)").to_string().len(), 5736);
    assert_kind("fact(2001)", ErrorKind::DomainError);
    assert_kind("fact(-1)", ErrorKind::DomainError);
    assert_kind("fact(2.5)", ErrorKind::DomainError);
    assert_kind("(-1)!", ErrorKind::DomainError);
}

#[test]
fn constants() {
    assert_real("pi", std::f64::consts::PI);
    assert_real("e", std::f64::consts::E);
    assert_real("2 * pi", std::f64::consts::TAU);
}

#[test]
fn builtin_functions() {
    assert_int("sqrt(16)", 4);
    assert_real("sqrt(2)", std::f64::consts::SQRT_2);
    assert_int("abs(-7)", 7);
    assert_real("abs(-2.5)", 2.5);
    assert_int("round(2.5)", 2);
    assert_int("round(3.5)", 4);
    assert_real("round(3.14159, ndigits=2)", 3.14);
    assert_real("round(3.14159, 3)", 3.142);
    assert_int("round(1234, -2)", 1200);
    assert_int("floor(-2.5)", -3);
    assert_int("ceil(2.1)", 3);
    assert_int("sin(0)", 0);
    assert_int("cos(0)", 1);
    assert_int("cos(pi)", -1);
    assert_real("tan(1)", 1f64.tan());
}

#[test]
fn logarithms() {
    assert_int("log(100)", 2);
    assert_int("log(8, b=2)", 3);
    assert_int("log(8, 2)", 3);
    assert_int("ln(e)", 1);
    assert_int("ln(8, 2)", 3);
    assert_real("ln(10)", std::f64::consts::LN_10);
    assert!(matches!(eval("log(fact(500))"), Value::Real(r) if (r - 1134.0864).abs() < 1e-3));
    assert_kind("log(5, 1)", ErrorKind::DivisionByZero);
    assert_kind("log(0)", ErrorKind::DomainError);
    assert_kind("log(-1)", ErrorKind::DomainError);
    assert_kind("ln(2, 0)", ErrorKind::DomainError);
}

#[test]
fn division_by_zero() {
    assert_kind("1/0", ErrorKind::DivisionByZero);
    assert_kind("1//0", ErrorKind::DivisionByZero);
    assert_kind("1%0", ErrorKind::DivisionByZero);
    assert_kind("1.5 / 0.0", ErrorKind::DivisionByZero);
    assert_kind("0 ** -1", ErrorKind::DivisionByZero);
    assert_kind("1 / (2 - 2)", ErrorKind::DivisionByZero);
}

#[test]
fn domain_errors() {
    assert_kind("sqrt(-1)", ErrorKind::DomainError);
    assert_kind("(-8) ** 0.5", ErrorKind::DomainError);
    assert_kind("10.0 ** 400", ErrorKind::DomainError);
    assert_kind("2 ** 1000000", ErrorKind::DomainError);
    assert_kind("999 ** 999 ** 999", ErrorKind::DomainError);
    assert_kind("10 ** 400 * 1.5", ErrorKind::DomainError);
    assert_kind("sqrt(1, 2)", ErrorKind::DomainError);
    assert_kind("sqrt()", ErrorKind::DomainError);
    assert_kind("sqrt(x=4)", ErrorKind::DomainError);
    assert_kind("log(8, base=2)", ErrorKind::DomainError);
    assert_kind("round(1.5, 2, number=1)", ErrorKind::DomainError);
    assert_kind("round(1.5, 1.0)", ErrorKind::DomainError);
}

#[test]
fn unknown_names() {
    assert_kind("x + 1", ErrorKind::UnknownName);
    assert_kind("sqrt", ErrorKind::UnknownName);
    assert_kind("pi(2)", ErrorKind::UnknownName);
    assert_kind("__import__('os')", ErrorKind::UnknownName);
    assert_kind("eval('1')", ErrorKind::UnknownName);
    assert_kind("exp(1)", ErrorKind::UnknownName);
}

#[test]
fn disallowed_operations() {
    assert_kind("os.system('x')", ErrorKind::DisallowedOperation);
    assert_kind("pi.real", ErrorKind::DisallowedOperation);
    assert_kind("(1)(2)", ErrorKind::DisallowedOperation);
    assert_kind("'x'", ErrorKind::DisallowedOperation);
    assert_kind("sqrt('16')", ErrorKind::DisallowedOperation);
}

#[test]
fn parenthesized_name_is_still_a_name() {
    assert_int("(sqrt)(16)", 4);
}

#[test]
fn callee_is_checked_before_arguments() {
    assert_kind("os.system(1/0)", ErrorKind::DisallowedOperation);
    assert_kind("nope(1/0)", ErrorKind::UnknownName);
}

#[test]
fn syntax_errors() {
    let cases = ["",
                 "   ",
                 "fact(",
                 "1 +",
                 "(1",
                 "1)",
                 "1 2",
                 "5 $ 3",
                 "!5",
                 "2 * * 3",
                 "sqrt(,)",
                 "f(a=1, 2)",
                 "round(1, ndigits=1, ndigits=2)",
                 "1 = 2",
                 "1 ! 2"];

    for src in cases {
        assert_kind(src, ErrorKind::SyntaxError);
    }
}

#[test]
fn input_limits() {
    let long = vec!["1"; 600].join("+");
    assert_kind(&long, ErrorKind::SyntaxError);

    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert_kind(&deep, ErrorKind::SyntaxError);

    let nested = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_int(&nested, 1);
}

#[test]
fn whitespace_is_ignored() {
    assert_int("  1 +\t2\n", 3);
    assert_int("3 !", 6);
}

#[test]
fn rewrite_agrees_with_parser() {
    let cases = ["5!", "(5)!", "(2+3)!", "3!!", "(3!)!", "2**3!", "sqrt(16)!", "1+2!*3", "fact(3)!"];

    for src in cases {
        let rewritten = rewrite(src).unwrap();
        assert!(!rewritten.contains('!'), "'{rewritten}' still has a factorial");
        assert_eq!(parse(&rewritten).map(|_| ()), Ok(()), "'{rewritten}' does not parse");
        assert_eq!(eval(&rewritten), eval(src), "'{src}' and '{rewritten}' disagree");
    }
}

#[test]
fn rewrite_examples() {
    assert_eq!(rewrite("(3!)!").unwrap(), "fact((fact(3)))");
    assert_eq!(rewrite("3!!").unwrap(), "fact(fact(3))");
    assert!(rewrite("!").is_err());
    assert!(rewrite("2*!").is_err());
    assert!(rewrite("3 !").is_err());
}

#[test]
fn huge_factorial_result_keeps_every_digit() {
    let Value::Integer(n) = eval("fact(25)") else {
        panic!("expected an integer");
    };
    assert_eq!(n, "15511210043330985984000000".parse::<BigInt>().unwrap());
}
