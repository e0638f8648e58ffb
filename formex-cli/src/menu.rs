//! Interactive numbered menu over the catalog.
//!
//! One screen per round: the menu, a numeric selection, a prompt for the
//! candidate string, the verdict. Selection `0` ends the session; anything
//! that is not a catalog number is rejected with a message and the menu is
//! shown again. The loop never terminates on bad input, only on `0` or end
//! of stream.

use std::io::{BufRead, Write};

use colored::Colorize;
use formex::{Format, FormatKind, Outcome};

/// What a raw menu selection line means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Exit,
    Entry(Format),
    OutOfRange,
    NotANumber,
}

fn parse_choice(line: &str) -> Choice {
    match line.trim().parse::<usize>() {
        Ok(0) => Choice::Exit,
        Ok(n) => Format::ALL
            .get(n - 1)
            .map_or(Choice::OutOfRange, |format| Choice::Entry(*format)),
        Err(_) => Choice::NotANumber,
    }
}

/// Run the menu loop until the user exits or the input stream ends.
///
/// # Errors
///
/// Returns an error only on I/O failure; validation itself never fails.
pub fn run(input: &mut impl BufRead) -> anyhow::Result<()> {
    loop {
        print_menu();
        print!("Digite la opción deseada: ");
        std::io::stdout().flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };

        match parse_choice(&line) {
            Choice::Exit => {
                println!("¡Hasta luego!");
                break;
            }
            Choice::Entry(format) => {
                if !validate_round(format, input)? {
                    break;
                }
            }
            Choice::OutOfRange => println!("Opción no válida. Intente de nuevo."),
            Choice::NotANumber => println!("Error: Por favor, ingrese un número válido."),
        }
    }
    Ok(())
}

/// Prompt for one candidate, print the verdict, wait for Enter.
/// Returns `false` when the input stream ended.
fn validate_round(format: Format, input: &mut impl BufRead) -> anyhow::Result<bool> {
    println!("Ingrese {} (ej. {}):", format.label(), format.example());
    let Some(candidate) = read_line(input)? else {
        return Ok(false);
    };

    println!("{}", render_outcome(format, &candidate));

    println!();
    println!("Presione Enter para continuar...");
    Ok(read_line(input)?.is_some())
}

fn render_outcome(format: Format, candidate: &str) -> String {
    let outcome = format.evaluate(candidate);
    match format.kind() {
        FormatKind::Boolean => {
            if outcome == Outcome::Valid {
                format!(
                    "--> Resultado: La entrada '{candidate}' es {}.",
                    "VÁLIDA".green().bold()
                )
            } else {
                format!(
                    "--> Resultado: La entrada '{candidate}' {} es válida.",
                    "NO".red().bold()
                )
            }
        }
        FormatKind::Classification => {
            format!("--> Resultado: {}", outcome.to_string().cyan())
        }
    }
}

fn print_menu() {
    println!();
    println!("--- Validador de Expresiones Regulares ---");
    for (i, format) in Format::ALL.iter().enumerate() {
        println!("{:>2}. {}", i + 1, format.label());
    }
    println!(" 0. Salir");
    println!("------------------------------------------");
}

/// `Ok(None)` at end of stream, `Ok(Some(line))` otherwise.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
