//! Terminal implementation of the interactive selection surface.

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use placepick::{Prediction, SelectionUi, ShowTurn};

pub struct TerminalUi {
    lines: Lines<BufReader<Stdin>>,
}

impl TerminalUi {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionUi for TerminalUi {
    async fn turn(&mut self, predictions: &[Prediction]) -> ShowTurn {
        for (index, prediction) in predictions.iter().enumerate() {
            println!("  [{index}] {}", prediction.description);
        }
        if predictions.is_empty() {
            println!("type a search query (empty line to cancel):");
        } else {
            println!("pick a number, refine the query, or press enter to cancel:");
        }

        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                // EOF or a broken terminal reads as a cancel.
                _ => return ShowTurn::Cancel,
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return ShowTurn::Cancel;
            }
            if let Ok(index) = trimmed.parse::<usize>() {
                if let Some(prediction) = predictions.get(index) {
                    return ShowTurn::Pick(prediction.clone());
                }
                println!("no prediction [{index}]; try again:");
                continue;
            }
            return ShowTurn::Refine(trimmed.to_owned());
        }
    }
}
