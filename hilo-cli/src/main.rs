use hilo_core::game::session::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
use hilo_core::game::{GameSession, InteractionLoop};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("----------------------------------------");
    println!("██   ██ ██ ██       ██████ ");
    println!("██   ██ ██ ██      ██    ██");
    println!("███████ ██ ██      ██    ██");
    println!("██   ██ ██ ██      ██    ██");
    println!("██   ██ ██ ███████  ██████ ");
    println!("            VERSION:            0.1.0   ");
    println!("----------------------------------------");

    let mut session = match GameSession::new(DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = InteractionLoop::new(stdin.lock(), stdout.lock());

    match game.run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Couldn't read line.. {}", e);
            ExitCode::FAILURE
        }
    }
}
