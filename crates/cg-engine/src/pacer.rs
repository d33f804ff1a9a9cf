//! Frame pacing: sleep the tick thread toward the target frame rate.

use std::thread;
use std::time::Duration;

/// Slack below this is not worth sleeping for — `thread::sleep` granularity
/// on common platforms is about a millisecond, and oversleeping a 1 ms
/// remainder costs more frame budget than it saves.
pub const SLEEP_THRESHOLD: Duration = Duration::from_millis(1);

/// Sleep out the remainder of the frame budget, if any.
///
/// `raw` is the tick's compute-only duration; `target` the configured frame
/// time (`None` = unbounded, never sleep).  A compute overrun is not an
/// error: the loop simply runs at whatever rate compute allows, with no
/// catch-up or frame-drop logic.
pub fn pace(raw: Duration, target: Option<Duration>) {
    let Some(target) = target else { return };
    let Some(slack) = target.checked_sub(raw) else { return };
    if slack > SLEEP_THRESHOLD {
        thread::sleep(slack);
    }
}
