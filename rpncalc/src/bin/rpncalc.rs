use rpncalc::{CalcConfig, Calculator, Evaluation};

fn report(eval: &Evaluation) {
    if eval.success {
        println!("Result: {}", eval.result);
    } else {
        println!("Error: {}", eval.error);
    }
}

fn main() -> Result<(), String> {
    env_logger::init();
    let mut calc = Calculator::with_config(CalcConfig::from_env());

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        report(&calc.process(&input));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::debug!("no history at {}", path.display());
        }
    }
    println!("Enter Equation, {} character limit (type 'Q' to exit):",
             calc.config().max_input_len);
    loop {
        match rl.readline(">") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                let eval = calc.process(line);
                if eval.quit {
                    break;
                }
                report(&eval);
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
