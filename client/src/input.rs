use std::io::BufRead;
use tokio::sync::mpsc;

use tictactoe_common::log;

/// Forwards stdin lines from a dedicated thread; the channel closes at EOF.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });

    input_rx
}
