//! Cosmetic progress display while a request is in flight.
//!
//! The percentage is a function of elapsed time only; it never reflects real
//! request progress and stops at 95% until the request resolves.

use std::future::Future;
use std::io::{IsTerminal, Write};
use std::time::Duration;

use tokio::time::{interval, sleep, Instant};

pub const LOADING_MESSAGES: &[(&str, &str)] = &[
    ("Analyzing your profile...", "Understanding your skills, interests, and goals"),
    ("AI processing...", "Matching your profile with career opportunities"),
    ("Evaluating career paths...", "Comparing salary ranges, growth potential, and market demand"),
    ("Personalizing recommendations...", "Creating tailored advice based on your unique profile"),
    ("Almost ready...", "Finalizing your personalized career guidance"),
];

const MESSAGE_INTERVAL: Duration = Duration::from_millis(2500);
const TICK: Duration = Duration::from_millis(200);
const PROGRESS_CAP: u8 = 95;

/// Percentage shown after `elapsed`: 2.5 points per tick, capped below 100.
pub fn synthetic_progress(elapsed: Duration) -> u8 {
    let ticks = elapsed.as_millis() / TICK.as_millis();
    (ticks * 5 / 2).min(PROGRESS_CAP as u128) as u8
}

/// Loading message for `elapsed`; the last one stays up until completion.
pub fn message_at(elapsed: Duration) -> (&'static str, &'static str) {
    let index = (elapsed.as_millis() / MESSAGE_INTERVAL.as_millis()) as usize;
    LOADING_MESSAGES[index.min(LOADING_MESSAGES.len() - 1)]
}

/// Awaits `fut` and a fixed delay together; whichever is slower decides when
/// the caller resumes.
pub async fn with_minimum_duration<F: Future>(fut: F, minimum: Duration) -> F::Output {
    let (output, ()) = tokio::join!(fut, sleep(minimum));
    output
}

/// Awaits `fut` while redrawing a progress line on stderr. Does nothing extra
/// when stderr is not a terminal.
pub async fn show_progress<F: Future>(fut: F) -> F::Output {
    let mut stderr = std::io::stderr();
    if !stderr.is_terminal() {
        return fut.await;
    }

    let started = Instant::now();
    let mut ticker = interval(TICK);
    tokio::pin!(fut);

    let output = loop {
        tokio::select! {
            output = &mut fut => break output,
            _ = ticker.tick() => {
                let elapsed = started.elapsed();
                let (title, detail) = message_at(elapsed);
                // Terminal redraw failures are not worth surfacing.
                let _ = write!(
                    stderr,
                    "\r\x1b[2K{:>3}% {title} {detail}",
                    synthetic_progress(elapsed)
                );
                let _ = stderr.flush();
            }
        }
    };

    let _ = writeln!(stderr, "\r\x1b[2K100% Done");
    output
}
