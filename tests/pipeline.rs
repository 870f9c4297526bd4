use std::collections::HashMap;
use yardcalc_rs::error::{EvalError, LexError, SyntaxError};
use yardcalc_rs::{
    evaluate_expression, functions, yardcalc_fn, Calculator, Error, ErrorKind, Function,
    HandlerError,
};

fn addition_only() -> HashMap<String, Function> {
    HashMap::from([(
        "+".to_string(),
        Function::new(2, |args| Ok(args[0] + args[1])),
    )])
}

fn no_variables() -> HashMap<String, f64> {
    HashMap::new()
}

#[test]
fn test_sum_with_caller_supplied_operator() {
    let result = evaluate_expression("23 + 42", &no_variables(), &addition_only()).unwrap();
    assert_eq!(result, 65.0);
}

#[test]
fn test_unknown_character() {
    let err = evaluate_expression("23 @ 42", &no_variables(), &addition_only()).unwrap_err();
    assert!(matches!(
        err,
        Error::Tokenize(LexError::UnknownCharacter {
            character: '@',
            position: 3
        })
    ));
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(
        err.to_string(),
        "unable to tokenize: unknown character '@' at position 3"
    );
}

#[test]
fn test_unmatched_left_parenthesis() {
    let err = evaluate_expression("(23 + 42", &no_variables(), &addition_only()).unwrap_err();
    assert!(matches!(
        err,
        Error::Translate(SyntaxError::UnexpectedLeftParenthesis { position: 0 })
    ));
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(err.to_string().starts_with("unable to translate: "));
}

#[test]
fn test_unmatched_right_parenthesis() {
    let err = evaluate_expression("23 + 42)", &no_variables(), &addition_only()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.position(), Some(7));
}

#[test]
fn test_missing_operand() {
    let err = evaluate_expression("23 +", &no_variables(), &addition_only()).unwrap_err();
    assert!(matches!(
        err,
        Error::Evaluate(EvalError::EmptyStackForArgument { argument: 1, position: 3, .. })
    ));
    assert_eq!(err.kind(), ErrorKind::Arity);
    assert_eq!(err.name(), Some("+"));
}

#[test]
fn test_operator_without_function_is_unknown() {
    let err = evaluate_expression("2 * 3", &no_variables(), &addition_only()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert_eq!(err.name(), Some("*"));
    assert_eq!(err.position(), Some(2));
}

#[test]
fn test_precedence_and_associativity() {
    let table = functions::standard();
    let cases = [
        ("1 + 2 * 3", 7.0),
        ("(1 + 2) * 3", 9.0),
        ("10 - 4 - 3", 3.0),
        ("64 / 4 / 2", 8.0),
        ("2 ^ 3 ^ 2", 64.0),
        ("2 * 3 ^ 2", 18.0),
        ("7 % 4 * 2", 6.0),
        ("1 + 2 ^ 2 * 3 - 4 / 2", 11.0),
    ];

    for (text, expected) in cases {
        let result = evaluate_expression(text, &no_variables(), &table).unwrap();
        assert_eq!(result, expected, "{}", text);
    }
}

#[test]
fn test_functions_and_variables() {
    let table = functions::standard();
    let variables = HashMap::from([("x".to_string(), 3.0), ("y_2".to_string(), 4.0)]);

    assert_eq!(
        evaluate_expression("hypot(x, y_2)", &variables, &table).unwrap(),
        5.0
    );
    assert_eq!(
        evaluate_expression("max(x, min(y_2, 10)) * 2", &variables, &table).unwrap(),
        8.0
    );
    assert_eq!(
        evaluate_expression("round(pi() * 100) / 100", &variables, &table).unwrap(),
        3.14
    );
}

#[test]
fn test_decimal_literals() {
    let table = functions::standard();
    assert_eq!(
        evaluate_expression("23. + .5", &no_variables(), &table).unwrap(),
        23.5
    );

    let err = evaluate_expression(".", &no_variables(), &table).unwrap_err();
    assert!(matches!(
        err,
        Error::Tokenize(LexError::BareDecimalPoint { position: 0 })
    ));

    let err = evaluate_expression("1 + 2.3.4", &no_variables(), &table).unwrap_err();
    assert!(matches!(
        err,
        Error::Tokenize(LexError::DuplicateDecimalPoint { position: 4 })
    ));
}

#[test]
fn test_handler_failure_keeps_cause() {
    let table = functions::standard();
    let err = evaluate_expression("1 / (2 - 2)", &no_variables(), &table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Handler);
    assert_eq!(
        err.to_string(),
        "unable to evaluate: unable to call the function \"/\" at position 2: division by zero"
    );
}

#[yardcalc_fn]
fn clamp(value: f64, low: f64, high: f64) -> Result<f64, HandlerError> {
    if low > high {
        return Err(format!("empty range {}..{}", low, high).into());
    }
    Ok(value.max(low).min(high))
}

#[yardcalc_fn]
fn pick(first: bool, a: f64, b: f64) -> Result<f64, HandlerError> {
    Ok(if first { a } else { b })
}

#[test]
fn test_attribute_functions() {
    let mut calculator = Calculator::with_builtins();
    calculator.register("clamp", clamp());
    calculator.register("pick", pick());

    assert_eq!(calculator.evaluate("clamp(15, 0, 10)").unwrap(), 10.0);
    assert_eq!(calculator.evaluate("clamp(2 - 5, 0, 10)").unwrap(), 0.0);
    assert_eq!(calculator.evaluate("pick(1, 2, 3)").unwrap(), 2.0);
    assert_eq!(calculator.evaluate("pick(0, 2, 3)").unwrap(), 3.0);

    let err = calculator.evaluate("clamp(1, 5, 0)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Handler);
    assert!(err.to_string().ends_with("empty range 5..0"));
}

#[test]
fn test_calculator_matches_free_function() {
    let mut calculator = Calculator::with_builtins();
    calculator.bind_variable("rate", 0.25);

    let variables = HashMap::from([("rate".to_string(), 0.25)]);
    let text = "1000 * (1 + rate) ^ 2 - sqrt(16)";
    assert_eq!(
        calculator.evaluate(text).unwrap(),
        evaluate_expression(text, &variables, &functions::standard()).unwrap()
    );
}

#[test]
fn test_bare_function_name_anywhere() {
    let table = functions::standard();
    let pi = std::f64::consts::PI;
    let cases = [
        ("pi", pi),
        ("2 * pi", 2.0 * pi),
        ("pi * 2", pi * 2.0),
        ("pi + 1", pi + 1.0),
        ("max(pi, 2)", pi),
        ("(pi)", pi),
        ("e - e()", 0.0),
    ];

    for (text, expected) in cases {
        let result = evaluate_expression(text, &no_variables(), &table).unwrap();
        assert_eq!(result, expected, "{}", text);
    }
}

/// Decimal digit of `value` at `place`; `place` is truncated toward zero.
#[yardcalc_fn]
fn digit(value: f64, place: i64) -> Result<f64, HandlerError> {
    if place < 0 {
        return Err(format!("negative place {}", place).into());
    }
    Ok((value / 10f64.powi(place as i32)).trunc() % 10.0)
}

#[test]
fn test_integer_parameters_are_truncated() {
    let mut calculator = Calculator::with_builtins();
    calculator.register("digit", digit());

    assert_eq!(calculator.evaluate("digit(4321, 0)").unwrap(), 1.0);
    assert_eq!(calculator.evaluate("digit(4321, 2.9)").unwrap(), 3.0);
    assert_eq!(calculator.evaluate("digit(4321, 0 - 0.5)").unwrap(), 1.0);

    let err = calculator.evaluate("digit(4321, 0 - 1)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Handler);
}
