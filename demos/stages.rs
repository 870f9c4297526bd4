use log::debug;
use std::collections::HashMap;
use yardcalc_rs::{evaluate, functions, tokenize, translate, yardcalc_fn, Function, HandlerError};

/// Average of three numbers.
#[yardcalc_fn]
fn avg3(a: f64, b: f64, c: f64) -> Result<f64, HandlerError> {
    Ok((a + b + c) / 3.0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let mut table = functions::standard();
    table.insert("avg3".to_string(), avg3());

    let expression = "avg3(x, 2 * y, 9) - 1.5";
    let tokens = tokenize(expression)?;
    for token in &tokens {
        println!("{:>3}  {:<10} {}", token.position, token.kind, token.text());
    }

    let commands = translate(&tokens, &table)?;
    debug!("commands: {:?}", commands);
    for command in &commands {
        println!("{}", command);
    }

    // the same program runs against different variables
    for (x, y) in [(3.0, 1.5), (0.0, 0.0), (-6.0, 4.5)] {
        let variables = HashMap::from([("x".to_string(), x), ("y".to_string(), y)]);
        println!("x = {}, y = {}: {}", x, y, evaluate(&commands, &variables, &table)?);
    }
    Ok(())
}
