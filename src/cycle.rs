//! Unattended exhibit mode: alternate between globe datasets and molecules.
//!
//! [`AutoCycle`] is a pure state machine driven by the caller's clock via
//! [`AutoCycle::tick`]. [`CycleTimer`] supplies wall-clock deltas for a
//! render loop.

use serde::Serialize;
use web_time::{Duration, Instant};

use crate::molecules::MOLECULE_IDS;
use crate::options::CycleOptions;

/// Number of views in one full cycle.
const CYCLE_LEN: usize = GlobeDataset::ALL.len() + MOLECULE_IDS.len();

/// Shortest accepted view duration.
const MIN_DURATION: Duration = Duration::from_millis(1);

/// Globe datasets shown during the globe phase, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobeDataset {
    /// Highest peaks.
    Mountains,
    /// Recent earthquakes.
    Earthquakes,
    /// Active wildfires.
    Wildfires,
}

impl GlobeDataset {
    /// All datasets in cycle order.
    pub const ALL: [Self; 3] = [Self::Mountains, Self::Earthquakes, Self::Wildfires];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mountains => "mountains",
            Self::Earthquakes => "earthquakes",
            Self::Wildfires => "wildfires",
        }
    }
}

/// What the exhibit is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "index", rename_all = "lowercase")]
pub enum CyclePhase {
    /// Globe with the dataset at this index of [`GlobeDataset::ALL`].
    Globe(usize),
    /// Molecule viewer with the molecule at this index of
    /// [`MOLECULE_IDS`].
    Molecule(usize),
}

impl CyclePhase {
    /// Globe dataset, if in the globe phase.
    #[must_use]
    pub fn globe_dataset(self) -> Option<GlobeDataset> {
        match self {
            Self::Globe(i) => GlobeDataset::ALL.get(i).copied(),
            Self::Molecule(_) => None,
        }
    }

    /// Molecule registry id, if in the molecule phase.
    #[must_use]
    pub fn molecule_id(self) -> Option<&'static str> {
        match self {
            Self::Globe(_) => None,
            Self::Molecule(i) => MOLECULE_IDS.get(i).copied(),
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Globe(i) if i + 1 < GlobeDataset::ALL.len() => Self::Globe(i + 1),
            Self::Globe(_) => Self::Molecule(0),
            Self::Molecule(i) if i + 1 < MOLECULE_IDS.len() => Self::Molecule(i + 1),
            Self::Molecule(_) => Self::Globe(0),
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Globe(0) => Self::Molecule(MOLECULE_IDS.len() - 1),
            Self::Globe(i) => Self::Globe(i - 1),
            Self::Molecule(0) => Self::Globe(GlobeDataset::ALL.len() - 1),
            Self::Molecule(i) => Self::Molecule(i - 1),
        }
    }
}

/// Auto-cycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoCycle {
    phase: CyclePhase,
    running: bool,
    duration: Duration,
    elapsed: Duration,
}

impl Default for AutoCycle {
    fn default() -> Self {
        Self::new(&CycleOptions::default())
    }
}

impl AutoCycle {
    /// Start at the first globe dataset.
    #[must_use]
    pub fn new(options: &CycleOptions) -> Self {
        Self {
            phase: CyclePhase::Globe(0),
            running: options.autostart,
            duration: Duration::from_millis(options.duration_ms).max(MIN_DURATION),
            elapsed: Duration::ZERO,
        }
    }

    /// Current view.
    #[must_use]
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Whether [`Self::tick`] advances the cycle.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time each view stays on screen.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Progress through the current view, 0 to 100.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let ratio = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (ratio * 100.0).min(100.0)
    }

    /// Move to the next view: globe datasets in order, then molecules,
    /// then back to the first globe dataset.
    pub fn advance(&mut self) {
        self.phase = self.phase.next();
        self.elapsed = Duration::ZERO;
        log::debug!("auto-cycle advanced to {:?}", self.phase);
    }

    /// Move to the previous view; the inverse of [`Self::advance`].
    pub fn go_back(&mut self) {
        self.phase = self.phase.prev();
        self.elapsed = Duration::ZERO;
        log::debug!("auto-cycle went back to {:?}", self.phase);
    }

    /// Resume cycling. The current view restarts its timer.
    pub fn play(&mut self) {
        self.running = true;
        self.elapsed = Duration::ZERO;
    }

    /// Stop cycling; progress holds.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Toggle between [`Self::play`] and [`Self::pause`].
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Change the view duration and restart the current view's timer.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration.max(MIN_DURATION);
        self.elapsed = Duration::ZERO;
    }

    /// Feed elapsed wall time. Returns `true` if at least one view
    /// boundary was crossed.
    ///
    /// A `dt` spanning several durations skips that many views and keeps
    /// the remainder as progress into the new view.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.duration {
            return false;
        }
        let period = self.duration.as_nanos();
        let total = self.elapsed.as_nanos();
        let remainder = Duration::from_nanos((total % period) as u64);
        // only the position within one full cycle matters
        let views = ((total / period) % CYCLE_LEN as u128) as usize;
        for _ in 0..views {
            self.phase = self.phase.next();
        }
        self.elapsed = remainder;
        log::debug!("auto-cycle advanced to {:?}", self.phase);
        true
    }
}

/// Wall-clock source for [`AutoCycle::tick`].
#[derive(Debug, Clone, Copy)]
pub struct CycleTimer {
    last: Instant,
}

impl Default for CycleTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleTimer {
    /// Start timing from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Tick `cycle` with the time since the previous update.
    pub fn update(&mut self, cycle: &mut AutoCycle) -> bool {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        cycle.tick(dt)
    }
}
