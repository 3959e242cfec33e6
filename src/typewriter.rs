//! Typewriter Reveal
//!
//! A timed sequence that reveals text one character per tick, for any number
//! of fields at once. Runs are cancellable: starting a new run or calling
//! `cancel` bumps a shared generation and the old run stops at its next tick.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;

/// One tick's worth of updates
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<K> {
    pub updates: Vec<(K, String)>,
    /// Keys whose text is fully revealed by this frame
    pub finished: Vec<K>,
}

#[derive(Debug, Clone)]
pub struct TypingSequence<K> {
    targets: Vec<(K, Vec<char>)>,
    revealed: usize,
}

impl<K: Copy> TypingSequence<K> {
    pub fn new(targets: impl IntoIterator<Item = (K, String)>) -> Self {
        Self {
            targets: targets
                .into_iter()
                .filter(|(_, text)| !text.is_empty())
                .map(|(key, text)| (key, text.chars().collect()))
                .collect(),
            revealed: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Ticks needed to reveal the longest target
    pub fn len(&self) -> usize {
        self.targets.iter().map(|(_, chars)| chars.len()).max().unwrap_or(0)
    }
}

impl<K: Copy> Iterator for TypingSequence<K> {
    type Item = Frame<K>;

    fn next(&mut self) -> Option<Frame<K>> {
        if self.revealed >= self.len() {
            return None;
        }
        self.revealed += 1;
        let mut frame = Frame { updates: Vec::new(), finished: Vec::new() };
        for (key, chars) in &self.targets {
            if chars.len() < self.revealed {
                continue;
            }
            frame.updates.push((*key, chars[..self.revealed].iter().collect()));
            if chars.len() == self.revealed {
                frame.finished.push(*key);
            }
        }
        Some(frame)
    }
}

/// Owner of the current run's generation
#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    generation: Arc<AtomicU64>,
}

/// Handle held by one run
#[derive(Debug, Clone)]
pub struct TypingRun {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run, superseding any run still in flight
    pub fn start(&self) -> TypingRun {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        TypingRun { generation, current: self.generation.clone() }
    }

    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl TypingRun {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// Play a sequence on the browser timer, one frame per `interval_ms`.
///
/// Returns false if the run was superseded before the last frame.
pub async fn play<K: Copy>(
    run: TypingRun,
    sequence: TypingSequence<K>,
    interval_ms: u32,
    mut apply: impl FnMut(Frame<K>),
) -> bool {
    for frame in sequence {
        TimeoutFuture::new(interval_ms).await;
        if !run.is_current() {
            return false;
        }
        apply(frame);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_char_per_tick_per_field() {
        let mut seq = TypingSequence::new(vec![(1, "Go".to_string()), (2, "Hall".to_string())]);
        assert_eq!(seq.len(), 4);

        let first = seq.next().unwrap();
        assert_eq!(first.updates, vec![(1, "G".to_string()), (2, "H".to_string())]);
        assert!(first.finished.is_empty());

        let second = seq.next().unwrap();
        assert_eq!(second.updates, vec![(1, "Go".to_string()), (2, "Ha".to_string())]);
        assert_eq!(second.finished, vec![1]);

        let third = seq.next().unwrap();
        assert_eq!(third.updates, vec![(2, "Hal".to_string())]);

        let fourth = seq.next().unwrap();
        assert_eq!(fourth.finished, vec![2]);
        assert!(seq.next().is_none());
    }

    #[test]
    fn test_multibyte_text() {
        let frames: Vec<_> = TypingSequence::new(vec![('a', "₹12 LPA".to_string())]).collect();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[0].updates[0].1, "₹");
        assert_eq!(frames[6].updates[0].1, "₹12 LPA");
    }

    #[test]
    fn test_empty_targets_skipped() {
        let seq = TypingSequence::new(vec![(1, String::new())]);
        assert!(seq.is_empty());
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn test_new_run_supersedes_old() {
        let typewriter = Typewriter::new();
        let first = typewriter.start();
        assert!(first.is_current());
        let second = typewriter.start();
        assert!(!first.is_current());
        assert!(second.is_current());
        typewriter.cancel();
        assert!(!second.is_current());
    }
}
