use std::collections::HashMap;
use yardcalc_rs::Calculator;

fn main() {
    pretty_env_logger::init();

    let contexts = vec![
        HashMap::from([
            ("price".to_string(), 120.0),
            ("volume".to_string(), 3000.0),
        ]),
        HashMap::from([("price".to_string(), 80.0), ("volume".to_string(), 0.0)]),
        HashMap::from([("price".to_string(), 95.5)]),
    ];

    let expression = "price * 2 / volume";

    let calculator = Calculator::with_builtins();
    let results = calculator.evaluate_batch(expression, &contexts);
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(value) => println!("Result {}: {}", i, value),
            Err(err) => println!("Result {}: {}", i, err),
        }
    }
}
