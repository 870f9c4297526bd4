use yardcalc_rs::Calculator;

fn main() {
    pretty_env_logger::init();

    let mut calculator = Calculator::with_builtins();
    calculator.bind_variable("price", 120.0);
    calculator.bind_variable("volume", 3000.0);
    calculator.register_function("clamp", 3, |args| Ok(args[0].max(args[1]).min(args[2])));

    let expressions = [
        "price * volume / 1000",
        "clamp(price - 100, 0, 10) ^ 2",
        "(price + 23",
        "price @ volume",
    ];

    for expression in expressions {
        match calculator.evaluate(expression) {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => println!("{}: {} ({:?})", expression, err, err.kind()),
        }
    }
}
