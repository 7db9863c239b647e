extern crate pcalc;

const USAGE: &str = "\
usage: pcalc [-d|--decimals zero|two|full] [expression...]

Evaluates a postfix expression, eg: pcalc 1 2 5 + '*' f_inv
Without an expression an interactive prompt is started.

builtin functions: f_inv f_neg f_abs f_sq f_sqrt f_sin f_cos f_tan f_ln f_exp f_rand
prompt commands:   :decimals <zero|two|full>   :quit";

mod repl {
    use pcalc::{Binder, CalcErr, Calculator};

    // functions the expression doesn't mention have no slot, skip them
    fn tolerate(bound: Result<(), CalcErr>) -> Result<(), CalcErr> {
        match bound {
            Err(CalcErr::UnknownFunction(_)) => Ok(()),
            other => other,
        }
    }

    pub fn bind_builtins(b: &mut Binder) -> Result<(), CalcErr> {
        tolerate(b.bind("f_inv", |x| 1.0 / x))?;
        tolerate(b.bind("f_neg", |x| -x))?;
        tolerate(b.bind("f_abs", f64::abs))?;
        tolerate(b.bind("f_sq", |x| x * x))?;
        tolerate(b.bind("f_sqrt", f64::sqrt))?;
        tolerate(b.bind("f_sin", f64::sin))?;
        tolerate(b.bind("f_cos", f64::cos))?;
        tolerate(b.bind("f_tan", f64::tan))?;
        tolerate(b.bind("f_ln", f64::ln))?;
        tolerate(b.bind("f_exp", f64::exp))?;
        tolerate(b.bind("f_rand", |x| x * rand::random::<f64>()))
    }

    pub fn calculator(decimals: &str) -> Calculator {
        Calculator::with_config(|pc| {
            pc.decimal_selector(decimals).functions(bind_builtins);
        })
    }

    pub fn evalexpr(pc: &mut Calculator, input: &str) {
        match pc.calc(input) {
            Err(e) => println!("Eval err: {}", e),
            Ok(Some(result)) => println!("{}", result),
            Ok(None) => (),
        }
    }

    // returns false when the session should end
    pub fn parse_statement(pc: &mut Calculator, input: &str) -> bool {
        let mut words = input.split_whitespace();
        match words.next() {
            Some(":quit") | Some(":q") => return false,
            Some(":decimals") => match words.next() {
                Some(sel) => match sel.parse::<pcalc::DecimalMode>() {
                    Ok(mode) => {
                        pc.decimals(mode);
                    }
                    Err(e) => println!("{}", e),
                },
                None => println!("usage: :decimals <zero|two|full>"),
            },
            _ => evalexpr(pc, input),
        }
        true
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut decimals = String::from("two");
    let mut words = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            "-d" | "--decimals" => {
                decimals = args.next().ok_or_else(|| format!("missing value for {}", arg))?;
            }
            _ => words.push(arg),
        }
    }

    let mut pc = repl::calculator(&decimals);
    if !words.is_empty() {
        repl::evalexpr(&mut pc, &words.join(" "));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".pcalc_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            log::info!("no history yet at {}", path.display());
        }
    }
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if !repl::parse_statement(&mut pc, &line) {
                    break;
                }
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
