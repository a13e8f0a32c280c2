//! # twenty48 CLI
//!
//! Interactive terminal frontend: arrow keys or WASD to move, R to restart,
//! Q to quit. The terminal is switched to raw mode for single-key input and
//! restored on exit.

use clap::Parser;
use std::io::{self, Read, Write};
use twenty48_core::{Direction, GameSession};

#[derive(Parser, Debug)]
#[command(name = "twenty48")]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Args {
    /// Random seed for the tile spawner (a given seed replays the same game)
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

enum InputAction {
    Move(Direction),
    Restart,
    Quit,
    None,
}

fn main() {
    let args = Args::parse();

    enable_raw_mode();

    let mut session = GameSession::new(args.seed);
    let mut stdin = io::stdin();
    let mut buffer = [0u8; 3];

    draw(&session);

    loop {
        let bytes_read = stdin.read(&mut buffer).unwrap_or(0);
        if bytes_read == 0 {
            continue;
        }

        match parse_input(&buffer[..bytes_read]) {
            InputAction::Move(direction) => {
                if !session.is_over() {
                    let outcome = session.apply_move(direction);
                    draw(&session);

                    if outcome.over {
                        println!("\n  *** GAME OVER ***");
                        println!("  Final Score: {}", session.score());
                        println!("  Max Tile: {}", session.max_tile());
                        println!("\n  Press R to restart or Q to quit");
                    }
                }
            }
            InputAction::Restart => {
                session.restart(args.seed);
                draw(&session);
            }
            InputAction::Quit => {
                disable_raw_mode();
                println!("\nGoodbye!");
                break;
            }
            InputAction::None => {}
        }
    }
}

/// Clear the screen and redraw the banner, controls, and board.
fn draw(session: &GameSession) {
    print!("\x1b[2J\x1b[H");
    println!("=== 2048 ===");
    println!("Controls: WASD or Arrow Keys | Q to quit | R to restart\n");
    print!("{}", session);
    let _ = io::stdout().flush();
}

fn parse_input(bytes: &[u8]) -> InputAction {
    match bytes {
        // Arrow keys (escape sequences)
        [27, 91, 65] => InputAction::Move(Direction::Up),
        [27, 91, 66] => InputAction::Move(Direction::Down),
        [27, 91, 67] => InputAction::Move(Direction::Right),
        [27, 91, 68] => InputAction::Move(Direction::Left),

        // WASD keys
        [b'w'] | [b'W'] => InputAction::Move(Direction::Up),
        [b's'] | [b'S'] => InputAction::Move(Direction::Down),
        [b'a'] | [b'A'] => InputAction::Move(Direction::Left),
        [b'd'] | [b'D'] => InputAction::Move(Direction::Right),

        // Control keys: q, Q, Ctrl+C, Esc
        [b'q'] | [b'Q'] | [3] | [27] => InputAction::Quit,
        [b'r'] | [b'R'] => InputAction::Restart,

        _ => InputAction::None,
    }
}

// Platform-specific terminal raw mode handling
#[cfg(unix)]
fn enable_raw_mode() {
    use std::os::unix::io::AsRawFd;
    unsafe {
        let fd = io::stdin().as_raw_fd();
        let mut termios: libc::termios = std::mem::zeroed();
        libc::tcgetattr(fd, &mut termios);
        termios.c_lflag &= !(libc::ICANON | libc::ECHO);
        termios.c_cc[libc::VMIN] = 1;
        termios.c_cc[libc::VTIME] = 0;
        libc::tcsetattr(fd, libc::TCSANOW, &termios);
    }
}

#[cfg(unix)]
fn disable_raw_mode() {
    use std::os::unix::io::AsRawFd;
    unsafe {
        let fd = io::stdin().as_raw_fd();
        let mut termios: libc::termios = std::mem::zeroed();
        libc::tcgetattr(fd, &mut termios);
        termios.c_lflag |= libc::ICANON | libc::ECHO;
        libc::tcsetattr(fd, libc::TCSANOW, &termios);
    }
}

#[cfg(not(unix))]
fn enable_raw_mode() {
    // Without raw mode, interactive play requires Enter after each key.
}

#[cfg(not(unix))]
fn disable_raw_mode() {}
