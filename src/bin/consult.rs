//! Interactive consultation over a rule file
//!
//! Forward mode derives everything reachable from the facts given on the
//! command line. Backward mode (`--prove`) drives the ask/answer loop over
//! stdin: each fact the engine cannot derive is asked as a y/n question.

use hornbeam::{BackwardResult, Reasoner, RuleSet, TraceJson};
use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <rules.json> [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --fact <name>      Assert a known fact (can be used multiple times)");
        eprintln!("  --prove <target>   Prove <target> backward, asking y/n over stdin");
        eprintln!("\nWithout --prove, runs forward chaining over the given facts.");
        std::process::exit(1);
    }

    let filename = &args[1];
    let mut facts: Vec<String> = Vec::new();
    let mut target: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--fact" => {
                if i + 1 < args.len() {
                    facts.push(args[i + 1].clone());
                    i += 1;
                }
            }
            "--prove" => {
                if i + 1 < args.len() {
                    target = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
            }
        }
        i += 1;
    }

    let ruleset = match RuleSet::from_path(filename) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Failed to load {}: {}", filename, e);
            std::process::exit(1);
        }
    };
    println!("Loaded {} rules from {}", ruleset.len(), filename);

    let mut engine = Reasoner::new();
    engine.reset(&ruleset.rules);
    engine.add_known(&facts);

    match target {
        Some(target) => consult_backward(&mut engine, &target),
        None => consult_forward(&mut engine),
    }
}

fn consult_forward(engine: &mut Reasoner) {
    let result = engine.find();

    if result.terminals.is_empty() {
        println!("No conclusions reached.");
    } else {
        println!("Conclusions: {}", result.terminals.join(", "));
    }
    print_trace(&TraceJson::from_trace(&result.trace, engine.graph()));
}

fn consult_backward(engine: &mut Reasoner, target: &str) {
    let stdin = io::stdin();
    let mut fired = Vec::new();

    loop {
        match engine.step_backward(target) {
            BackwardResult::Proven { target, trace } => {
                fired.extend(trace);
                println!("PROVEN: {}", target);
                print_trace(&TraceJson::from_trace(&fired, engine.graph()));
                return;
            }
            BackwardResult::Disproven { trace } => {
                fired.extend(trace);
                println!("NOT PROVABLE: {}", target);
                print_trace(&TraceJson::from_trace(&fired, engine.graph()));
                return;
            }
            BackwardResult::Ask { facts, trace } => {
                fired.extend(trace);
                for fact in facts {
                    if ask(&stdin, &fact) {
                        engine.add_known(&[fact]);
                    } else {
                        engine.add_false(&[fact]);
                    }
                }
            }
        }
    }
}

fn ask(stdin: &io::Stdin, fact: &str) -> bool {
    loop {
        print!("{}? [y/n] ", fact);
        if io::stdout().flush().is_err() {
            std::process::exit(1);
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                // EOF: treat the fact as unconfirmed
                println!();
                return false;
            }
            Ok(_) => match line.trim() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => eprintln!("Please answer y or n."),
            },
        }
    }
}

fn print_trace(trace: &TraceJson) {
    if trace.steps.is_empty() {
        return;
    }
    println!("\nFired rules:");
    for step in &trace.steps {
        println!("  [{}] {}", step.id, step);
    }
}
